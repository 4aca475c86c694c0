// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{CategoryFilter, FormKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Browse,
    Search,
    Form(FormKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub mode: AppMode,
    pub search: String,
    pub category: CategoryFilter,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Browse,
            search: String::new(),
            category: CategoryFilter::All,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    OpenSearch,
    CloseSearch,
    SetSearch(String),
    CycleCategoryForward,
    CycleCategoryBack,
    ClearFilters,
    OpenForm(FormKind),
    CancelForm,
    SubmitForm,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ModeChanged(AppMode),
    SearchChanged(String),
    CategoryChanged(CategoryFilter),
    FiltersCleared,
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::OpenSearch => {
                self.mode = AppMode::Search;
                vec![AppEvent::ModeChanged(self.mode)]
            }
            AppCommand::CloseSearch => {
                self.mode = AppMode::Browse;
                vec![AppEvent::ModeChanged(self.mode)]
            }
            AppCommand::SetSearch(text) => {
                self.search = text;
                vec![AppEvent::SearchChanged(self.search.clone())]
            }
            AppCommand::CycleCategoryForward => {
                self.category = self.category.next();
                vec![
                    AppEvent::CategoryChanged(self.category),
                    self.set_status(format!("category {}", self.category.as_str())),
                ]
            }
            AppCommand::CycleCategoryBack => {
                self.category = self.category.prev();
                vec![
                    AppEvent::CategoryChanged(self.category),
                    self.set_status(format!("category {}", self.category.as_str())),
                ]
            }
            AppCommand::ClearFilters => {
                self.search.clear();
                self.category = CategoryFilter::All;
                vec![AppEvent::FiltersCleared, self.set_status("filters cleared")]
            }
            AppCommand::OpenForm(kind) => {
                self.mode = AppMode::Form(kind);
                vec![AppEvent::ModeChanged(self.mode)]
            }
            AppCommand::CancelForm => {
                self.mode = AppMode::Browse;
                vec![AppEvent::ModeChanged(self.mode), self.set_status("cancelled")]
            }
            AppCommand::SubmitForm => {
                self.mode = AppMode::Browse;
                vec![AppEvent::ModeChanged(self.mode)]
            }
            AppCommand::SetStatus(message) => {
                vec![self.set_status(message)]
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn set_status(&mut self, message: impl Into<String>) -> AppEvent {
        let message = message.into();
        self.status_line = Some(message.clone());
        AppEvent::StatusUpdated(message)
    }
}
