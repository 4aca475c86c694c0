// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use freetown_app::{
    AppCommand, AppEvent, AppMode, AppState, Category, FormKind, FormPayload, ReviewFormInput,
    Startup, StartupFormInput, average_rating, directory_stats, filter_startups,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

const HALF_PAGE_ROWS: isize = 10;
const STAR_FILLED: char = '★';
const STAR_HOLLOW: char = '☆';
const SEARCH_CURSOR: &str = "▌";

/// Backing operations the presentation layer needs: read the catalogue,
/// submit a validated form. The CLI bridges this to the session store.
pub trait AppRuntime {
    fn load_directory(&mut self) -> Result<Vec<Startup>>;
    fn submit_form(&mut self, payload: &FormPayload) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StartupField {
    Name,
    Category,
    Description,
    Service(usize),
    Email,
    Phone,
    Website,
    Hours,
    Address,
    Logo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StartupFormUi {
    input: StartupFormInput,
    field_index: usize,
}

impl StartupFormUi {
    fn new() -> Self {
        Self {
            input: StartupFormInput::default(),
            field_index: 0,
        }
    }

    fn field_count(&self) -> usize {
        9 + self.input.services.len()
    }

    fn field_at(&self, index: usize) -> StartupField {
        let services = self.input.services.len();
        match index {
            0 => StartupField::Name,
            1 => StartupField::Category,
            2 => StartupField::Description,
            i if i < 3 + services => StartupField::Service(i - 3),
            i => match i - 3 - services {
                0 => StartupField::Email,
                1 => StartupField::Phone,
                2 => StartupField::Website,
                3 => StartupField::Hours,
                4 => StartupField::Address,
                _ => StartupField::Logo,
            },
        }
    }

    fn active_field(&self) -> StartupField {
        self.field_at(self.field_index)
    }

    fn field_label(&self, index: usize) -> String {
        match self.field_at(index) {
            StartupField::Name => "name".to_owned(),
            StartupField::Category => "category".to_owned(),
            StartupField::Description => "description".to_owned(),
            StartupField::Service(row) => format!("service {}", row + 1),
            StartupField::Email => "email".to_owned(),
            StartupField::Phone => "phone".to_owned(),
            StartupField::Website => "website".to_owned(),
            StartupField::Hours => "hours".to_owned(),
            StartupField::Address => "address".to_owned(),
            StartupField::Logo => "logo url".to_owned(),
        }
    }

    fn move_cursor(&mut self, delta: isize) -> String {
        let count = self.field_count() as isize;
        let next = (self.field_index as isize + delta).rem_euclid(count) as usize;
        self.field_index = next;
        format!(
            "field {} ({}/{})",
            self.field_label(next),
            next + 1,
            self.field_count()
        )
    }

    fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.active_field() {
            StartupField::Name => Some(&mut self.input.name),
            StartupField::Category => None,
            StartupField::Description => Some(&mut self.input.description),
            StartupField::Service(row) => self.input.services.get_mut(row),
            StartupField::Email => Some(&mut self.input.email),
            StartupField::Phone => Some(&mut self.input.phone),
            StartupField::Website => Some(&mut self.input.website),
            StartupField::Hours => Some(&mut self.input.hours),
            StartupField::Address => Some(&mut self.input.address),
            StartupField::Logo => Some(&mut self.input.logo),
        }
    }

    fn apply_choice(&mut self, choice_index: usize) -> Option<String> {
        if self.active_field() != StartupField::Category {
            return None;
        }
        let category = *Category::ALL.get(choice_index)?;
        self.input.category = Some(category);
        Some(format!("category {}", category.as_str()))
    }

    /// Inserts a fresh service row after the current one (or at the end when
    /// the cursor is elsewhere) and moves the cursor onto it.
    fn add_service_row(&mut self) -> String {
        let insert_at = match self.active_field() {
            StartupField::Service(row) => row + 1,
            _ => self.input.services.len(),
        };
        self.input.services.insert(insert_at, String::new());
        self.field_index = 3 + insert_at;
        format!("service row {} added", insert_at + 1)
    }

    fn remove_service_row(&mut self) -> String {
        let StartupField::Service(row) = self.active_field() else {
            return "move to a service row to remove it".to_owned();
        };
        if self.input.services.len() <= 1 {
            return "keep at least one service row".to_owned();
        }
        self.input.services.remove(row);
        self.field_index = 3 + row.min(self.input.services.len() - 1);
        format!("service row {} removed", row + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReviewField {
    Author,
    Rating,
    Comment,
}

const REVIEW_FIELDS: [ReviewField; 3] = [
    ReviewField::Author,
    ReviewField::Rating,
    ReviewField::Comment,
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct ReviewFormUi {
    input: ReviewFormInput,
    startup_name: String,
    field_index: usize,
}

impl ReviewFormUi {
    fn new(startup: &Startup) -> Self {
        Self {
            input: ReviewFormInput::blank_for(startup.id),
            startup_name: startup.name.clone(),
            field_index: 0,
        }
    }

    fn active_field(&self) -> ReviewField {
        REVIEW_FIELDS[self.field_index.min(REVIEW_FIELDS.len() - 1)]
    }

    fn field_label(field: ReviewField) -> &'static str {
        match field {
            ReviewField::Author => "your name",
            ReviewField::Rating => "rating",
            ReviewField::Comment => "your review",
        }
    }

    fn move_cursor(&mut self, delta: isize) -> String {
        let count = REVIEW_FIELDS.len() as isize;
        let next = (self.field_index as isize + delta).rem_euclid(count) as usize;
        self.field_index = next;
        format!(
            "field {} ({}/{})",
            Self::field_label(REVIEW_FIELDS[next]),
            next + 1,
            REVIEW_FIELDS.len()
        )
    }

    fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.active_field() {
            ReviewField::Author => Some(&mut self.input.author),
            ReviewField::Rating => None,
            ReviewField::Comment => Some(&mut self.input.comment),
        }
    }

    fn apply_choice(&mut self, choice_index: usize) -> Option<String> {
        if self.active_field() != ReviewField::Rating {
            return None;
        }
        let rating = choice_index as i32 + 1;
        if !(1..=5).contains(&rating) {
            return None;
        }
        self.input.rating = rating;
        Some(format!("rating {}", stars(rating)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FormUiState {
    Startup(StartupFormUi),
    Review(ReviewFormUi),
}

impl FormUiState {
    fn payload(&self) -> FormPayload {
        match self {
            Self::Startup(form) => FormPayload::Startup(form.input.clone()),
            Self::Review(form) => FormPayload::Review(form.input.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ViewData {
    catalogue: Vec<Startup>,
    visible: Vec<Startup>,
    selected_row: usize,
    detail_visible: bool,
    form: Option<FormUiState>,
    help_visible: bool,
    status_token: u64,
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    if let Err(error) = refresh_view_data(state, runtime, &mut view_data) {
        state.dispatch(AppCommand::SetStatus(format!("load failed: {error}")));
    }

    let mut result = Ok(());
    loop {
        process_internal_events(state, &view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

/// Dispatches a state command and recomputes the visible subsequence; any
/// status the command set is scheduled for auto-clear.
fn dispatch_command(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    command: AppCommand,
) {
    let events = state.dispatch(command);
    apply_filters(state, view_data);
    if events
        .iter()
        .any(|event| matches!(event, AppEvent::StatusUpdated(_)))
    {
        view_data.status_token = view_data.status_token.saturating_add(1);
        schedule_status_clear(internal_tx, view_data.status_token);
    }
}

fn refresh_view_data<R: AppRuntime>(
    state: &AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
) -> Result<()> {
    view_data.catalogue = runtime.load_directory()?;
    apply_filters(state, view_data);
    Ok(())
}

/// The displayed rows are always derived from the current catalogue and
/// filter inputs; nothing is cached across input changes.
fn apply_filters(state: &AppState, view_data: &mut ViewData) {
    view_data.visible = filter_startups(&view_data.catalogue, &state.search, state.category);
    if view_data.visible.is_empty() {
        view_data.selected_row = 0;
        view_data.detail_visible = false;
    } else if view_data.selected_row >= view_data.visible.len() {
        view_data.selected_row = view_data.visible.len() - 1;
    }
}

fn selected_startup(view_data: &ViewData) -> Option<&Startup> {
    view_data.visible.get(view_data.selected_row)
}

fn move_selection(view_data: &mut ViewData, delta: isize) {
    if view_data.visible.is_empty() {
        return;
    }
    let last = view_data.visible.len() as isize - 1;
    let next = (view_data.selected_row as isize + delta).clamp(0, last);
    view_data.selected_row = next as usize;
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
            emit_status(state, view_data, internal_tx, "help hidden");
        }
        return false;
    }

    match state.mode {
        AppMode::Browse => handle_browse_key(state, runtime, view_data, internal_tx, key),
        AppMode::Search => handle_search_key(state, view_data, internal_tx, key),
        AppMode::Form(_) => handle_form_key(state, runtime, view_data, internal_tx, key),
    }

    false
}

fn handle_browse_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    if view_data.detail_visible {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                view_data.detail_visible = false;
            }
            KeyCode::Char('r') => {
                view_data.detail_visible = false;
                open_review_form(state, view_data, internal_tx);
            }
            _ => {}
        }
        return;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
            move_selection(view_data, 1);
        }
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
            move_selection(view_data, -1);
        }
        (KeyCode::Char('d'), KeyModifiers::NONE) => {
            move_selection(view_data, HALF_PAGE_ROWS);
        }
        (KeyCode::Char('u'), KeyModifiers::NONE) => {
            move_selection(view_data, -HALF_PAGE_ROWS);
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            view_data.selected_row = 0;
        }
        (KeyCode::Char('G'), _) => {
            view_data.selected_row = view_data.visible.len().saturating_sub(1);
        }
        (KeyCode::Char('/'), KeyModifiers::NONE) => {
            dispatch_command(state, view_data, internal_tx, AppCommand::OpenSearch);
        }
        (KeyCode::Char('c'), KeyModifiers::NONE) => {
            dispatch_command(
                state,
                view_data,
                internal_tx,
                AppCommand::CycleCategoryForward,
            );
        }
        (KeyCode::Char('C'), _) => {
            dispatch_command(state, view_data, internal_tx, AppCommand::CycleCategoryBack);
        }
        (KeyCode::Char('x'), KeyModifiers::NONE) => {
            dispatch_command(state, view_data, internal_tx, AppCommand::ClearFilters);
        }
        (KeyCode::Char('a'), KeyModifiers::NONE) => {
            view_data.form = Some(FormUiState::Startup(StartupFormUi::new()));
            dispatch_command(
                state,
                view_data,
                internal_tx,
                AppCommand::OpenForm(FormKind::AddStartup),
            );
        }
        (KeyCode::Char('r'), KeyModifiers::NONE) => {
            open_review_form(state, view_data, internal_tx);
        }
        (KeyCode::Enter, _) => {
            if selected_startup(view_data).is_some() {
                view_data.detail_visible = true;
            } else {
                emit_status(state, view_data, internal_tx, "no startup selected");
            }
        }
        (KeyCode::Char('R'), _) => {
            if let Err(error) = refresh_view_data(state, runtime, view_data) {
                emit_status(
                    state,
                    view_data,
                    internal_tx,
                    format!("reload failed: {error}"),
                );
            } else {
                emit_status(state, view_data, internal_tx, "directory reloaded");
            }
        }
        (KeyCode::Char('?'), KeyModifiers::NONE) => {
            view_data.help_visible = true;
            emit_status(state, view_data, internal_tx, "help open");
        }
        (KeyCode::Esc, _) => {
            state.dispatch(AppCommand::ClearStatus);
        }
        _ => {}
    }
}

fn open_review_form(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(startup) = selected_startup(view_data).cloned() else {
        emit_status(state, view_data, internal_tx, "no startup selected");
        return;
    };
    view_data.form = Some(FormUiState::Review(ReviewFormUi::new(&startup)));
    dispatch_command(
        state,
        view_data,
        internal_tx,
        AppCommand::OpenForm(FormKind::Review),
    );
}

fn handle_search_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Enter, _) => {
            dispatch_command(state, view_data, internal_tx, AppCommand::CloseSearch);
        }
        (KeyCode::Backspace, _) => {
            let mut text = state.search.clone();
            text.pop();
            dispatch_command(state, view_data, internal_tx, AppCommand::SetSearch(text));
        }
        (KeyCode::Char(ch), modifiers) if !modifiers.contains(KeyModifiers::CONTROL) => {
            let mut text = state.search.clone();
            text.push(ch);
            dispatch_command(state, view_data, internal_tx, AppCommand::SetSearch(text));
        }
        _ => {}
    }
}

fn handle_form_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let Some(form) = view_data.form.as_mut() else {
        // A form mode without a draft cannot be edited; fall back to browse.
        state.dispatch(AppCommand::CancelForm);
        return;
    };

    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            view_data.form = None;
            dispatch_command(state, view_data, internal_tx, AppCommand::CancelForm);
        }
        (KeyCode::Enter, _) => {
            submit_active_form(state, runtime, view_data, internal_tx);
        }
        (KeyCode::Tab, KeyModifiers::NONE) => {
            let status = match form {
                FormUiState::Startup(form) => form.move_cursor(1),
                FormUiState::Review(form) => form.move_cursor(1),
            };
            emit_status(state, view_data, internal_tx, status);
        }
        (KeyCode::BackTab, _) => {
            let status = match form {
                FormUiState::Startup(form) => form.move_cursor(-1),
                FormUiState::Review(form) => form.move_cursor(-1),
            };
            emit_status(state, view_data, internal_tx, status);
        }
        (KeyCode::Char('n'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            if let FormUiState::Startup(form) = form {
                let status = form.add_service_row();
                emit_status(state, view_data, internal_tx, status);
            }
        }
        (KeyCode::Char('x'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            if let FormUiState::Startup(form) = form {
                let status = form.remove_service_row();
                emit_status(state, view_data, internal_tx, status);
            }
        }
        (KeyCode::Backspace, _) => {
            let text = match form {
                FormUiState::Startup(form) => form.active_text_mut(),
                FormUiState::Review(form) => form.active_text_mut(),
            };
            if let Some(text) = text {
                text.pop();
            }
        }
        (KeyCode::Char(ch), modifiers) if !modifiers.contains(KeyModifiers::CONTROL) => {
            // Digits select the choice on choice fields and are otherwise
            // ordinary text input.
            let choice_status = ch
                .to_digit(10)
                .filter(|digit| *digit >= 1)
                .and_then(|digit| {
                    let choice_index = digit as usize - 1;
                    match form {
                        FormUiState::Startup(form) => form.apply_choice(choice_index),
                        FormUiState::Review(form) => form.apply_choice(choice_index),
                    }
                });
            if let Some(status) = choice_status {
                emit_status(state, view_data, internal_tx, status);
                return;
            }

            let text = match form {
                FormUiState::Startup(form) => form.active_text_mut(),
                FormUiState::Review(form) => form.active_text_mut(),
            };
            if let Some(text) = text {
                text.push(ch);
            }
        }
        _ => {}
    }
}

fn submit_active_form<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(form) = view_data.form.as_ref() else {
        return;
    };
    let payload = form.payload();

    // The submit affordance stays disabled until the draft validates; an
    // early Enter reports what is missing and mutates nothing.
    if let Err(error) = payload.validate() {
        let prefix = match payload.kind() {
            FormKind::AddStartup => "form invalid",
            FormKind::Review => "review incomplete",
        };
        emit_status(state, view_data, internal_tx, format!("{prefix}: {error}"));
        return;
    }

    if let Err(error) = runtime.submit_form(&payload) {
        emit_status(state, view_data, internal_tx, format!("save failed: {error}"));
        return;
    }

    view_data.form = None;
    dispatch_command(state, view_data, internal_tx, AppCommand::SubmitForm);
    if let Err(error) = refresh_view_data(state, runtime, view_data) {
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("reload failed: {error}"),
        );
        return;
    }
    let saved = match payload.kind() {
        FormKind::AddStartup => "startup added",
        FormKind::Review => "review added",
    };
    emit_status(state, view_data, internal_tx, saved);
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let header = Paragraph::new(header_text(state, view_data))
        .block(Block::default().title("freetown").borders(Borders::ALL));
    frame.render_widget(header, layout[0]);

    let stats = Paragraph::new(stats_text(view_data))
        .block(Block::default().title("directory").borders(Borders::ALL));
    frame.render_widget(stats, layout[1]);

    if view_data.visible.is_empty() {
        let empty = Paragraph::new("no startups found -- adjust search or filters")
            .block(Block::default().title("startups").borders(Borders::ALL));
        frame.render_widget(empty, layout[2]);
    } else {
        render_table(frame, layout[2], view_data);
    }

    let status = Paragraph::new(status_text(state))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[3]);

    if view_data.detail_visible
        && let Some(startup) = selected_startup(view_data)
    {
        let area = centered_rect(72, 72, frame.area());
        frame.render_widget(Clear, area);
        let detail = Paragraph::new(render_detail_text(startup)).block(
            Block::default()
                .title(startup.name.clone())
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(detail, area);
    }

    match &view_data.form {
        Some(FormUiState::Startup(form)) => {
            let area = centered_rect(70, 80, frame.area());
            frame.render_widget(Clear, area);
            let widget = Paragraph::new(render_startup_form_text(form)).block(
                Block::default()
                    .title("add new startup")
                    .borders(Borders::ALL),
            );
            frame.render_widget(widget, area);
        }
        Some(FormUiState::Review(form)) => {
            let area = centered_rect(58, 48, frame.area());
            frame.render_widget(Clear, area);
            let widget = Paragraph::new(render_review_form_text(form)).block(
                Block::default()
                    .title(format!("review {}", form.startup_name))
                    .borders(Borders::ALL),
            );
            frame.render_widget(widget, area);
        }
        None => {}
    }

    if view_data.help_visible {
        let area = centered_rect(76, 68, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn header_text(state: &AppState, view_data: &ViewData) -> String {
    let cursor = if state.mode == AppMode::Search {
        SEARCH_CURSOR
    } else {
        ""
    };
    format!(
        "search: {}{cursor} | category: {} | showing {} of {}",
        state.search,
        state.category.as_str(),
        view_data.visible.len(),
        view_data.catalogue.len(),
    )
}

fn stats_text(view_data: &ViewData) -> String {
    let stats = directory_stats(&view_data.catalogue);
    format!(
        "{} startups | {} categories | {} reviews | avg rating {:.1}",
        stats.total_startups, stats.total_categories, stats.total_reviews, stats.average_rating,
    )
}

fn render_table(frame: &mut ratatui::Frame<'_>, area: Rect, view_data: &ViewData) {
    let header = Row::new(
        ["name", "category", "rating", "reviews", "services", "hours"]
            .into_iter()
            .map(Cell::from),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = view_data
        .visible
        .iter()
        .enumerate()
        .map(|(index, startup)| {
            let style = if index == view_data.selected_row {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            Row::new([
                Cell::from(startup.name.clone()),
                Cell::from(startup.category.as_str()),
                Cell::from(rating_cell(startup)),
                Cell::from(startup.reviews.len().to_string()),
                Cell::from(startup.services.join(", ")),
                Cell::from(startup.hours.clone()),
            ])
            .style(style)
        })
        .collect::<Vec<_>>();

    let widths = [
        Constraint::Length(20),
        Constraint::Length(12),
        Constraint::Length(7),
        Constraint::Length(8),
        Constraint::Min(24),
        Constraint::Length(12),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("startups").borders(Borders::ALL));
    frame.render_widget(table, area);
}

/// Unreviewed entries show no rating at all rather than "0.0".
fn rating_cell(startup: &Startup) -> String {
    if startup.reviews.is_empty() {
        return String::new();
    }
    format!("{STAR_FILLED} {:.1}", average_rating(&startup.reviews))
}

fn render_detail_text(startup: &Startup) -> String {
    let mut lines = Vec::new();

    let open_label = if startup.is_open { "open" } else { "closed" };
    lines.push(format!("{} | {open_label}", startup.category.as_str()));
    if !startup.reviews.is_empty() {
        lines.push(format!(
            "{STAR_FILLED} {:.1} ({} reviews)",
            average_rating(&startup.reviews),
            startup.reviews.len()
        ));
    }
    lines.push(String::new());
    lines.push(startup.description.clone());
    lines.push(String::new());

    lines.push("services:".to_owned());
    for service in &startup.services {
        lines.push(format!("  - {service}"));
    }
    lines.push(String::new());

    lines.push(format!("hours:   {}", startup.hours));
    lines.push(format!("address: {}", startup.contact.address));
    lines.push(format!("email:   {}", startup.contact.email));
    lines.push(format!("phone:   {}", startup.contact.phone));
    if !startup.contact.website.is_empty() {
        lines.push(format!("website: {}", startup.contact.website));
    }
    lines.push(format!("logo:    {}", startup.logo));

    if let Some(review) = startup.reviews.last() {
        lines.push(String::new());
        lines.push("recent review:".to_owned());
        lines.push(format!(
            "  {} {} {}",
            review.author,
            stars(review.rating),
            review.date
        ));
        lines.push(format!("  {}", review.comment));
    }

    lines.push(String::new());
    lines.push("r review | esc close".to_owned());
    lines.join("\n")
}

fn render_startup_form_text(form: &StartupFormUi) -> String {
    let mut lines = Vec::new();
    for index in 0..form.field_count() {
        let marker = if index == form.field_index { "> " } else { "  " };
        let label = form.field_label(index);
        let value = match form.field_at(index) {
            StartupField::Name => form.input.name.clone(),
            StartupField::Category => form
                .input
                .category
                .map(|category| category.as_str().to_owned())
                .unwrap_or_else(|| "(press 1-8)".to_owned()),
            StartupField::Description => form.input.description.clone(),
            StartupField::Service(row) => form.input.services[row].clone(),
            StartupField::Email => form.input.email.clone(),
            StartupField::Phone => form.input.phone.clone(),
            StartupField::Website => form.input.website.clone(),
            StartupField::Hours => form.input.hours.clone(),
            StartupField::Address => form.input.address.clone(),
            StartupField::Logo => form.input.logo.clone(),
        };
        lines.push(format!("{marker}{label:<12} {value}"));

        if index == form.field_index && form.field_at(index) == StartupField::Category {
            let choices = Category::ALL
                .iter()
                .enumerate()
                .map(|(choice, category)| format!("{} {}", choice + 1, category.as_str()))
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(format!("    {choices}"));
        }
    }

    lines.push(String::new());
    lines.push("website and logo are optional; blank service rows are dropped".to_owned());
    lines.push(
        "tab field | ctrl-n add service | ctrl-x remove service | enter save | esc cancel"
            .to_owned(),
    );
    lines.join("\n")
}

fn render_review_form_text(form: &ReviewFormUi) -> String {
    let mut lines = Vec::new();
    for (index, field) in REVIEW_FIELDS.iter().enumerate() {
        let marker = if index == form.field_index { "> " } else { "  " };
        let label = ReviewFormUi::field_label(*field);
        let value = match field {
            ReviewField::Author => form.input.author.clone(),
            ReviewField::Rating => {
                if form.input.rating == 0 {
                    "(press 1-5)".to_owned()
                } else {
                    stars(form.input.rating)
                }
            }
            ReviewField::Comment => form.input.comment.clone(),
        };
        lines.push(format!("{marker}{label:<12} {value}"));
    }

    lines.push(String::new());
    if form.input.is_complete() {
        lines.push("enter submits this review".to_owned());
    } else {
        lines.push("submit disabled until name, rating, and review are set".to_owned());
    }
    lines.push("tab field | esc cancel".to_owned());
    lines.join("\n")
}

fn status_text(state: &AppState) -> String {
    if let Some(status) = &state.status_line {
        return status.clone();
    }
    match state.mode {
        AppMode::Browse => {
            "j/k move | enter detail | / search | c category | x clear | a add | r review | ? help \
             | ctrl-q quit"
                .to_owned()
        }
        AppMode::Search => "type to filter | enter/esc done".to_owned(),
        AppMode::Form(FormKind::AddStartup) => {
            "tab field | ctrl-n/ctrl-x service rows | enter save | esc cancel".to_owned()
        }
        AppMode::Form(FormKind::Review) => {
            "tab field | 1-5 rate | enter submit | esc cancel".to_owned()
        }
    }
}

fn help_overlay_text() -> String {
    [
        "browse",
        "  j/k or arrows  move selection",
        "  d/u            half page down/up",
        "  g/G            first/last row",
        "  enter          open startup detail",
        "  /              edit search text (filters as you type)",
        "  c / C          next / previous category filter",
        "  x              clear search and category",
        "  a              add a startup",
        "  r              review the selected startup",
        "  R              reload the directory",
        "",
        "forms",
        "  tab/shift-tab  move between fields",
        "  1-8            pick category (on the category field)",
        "  1-5            pick rating (on the rating field)",
        "  ctrl-n/ctrl-x  add/remove service rows",
        "  enter          submit",
        "  esc            cancel without saving",
        "",
        "  ctrl-q         quit",
        "  ? or esc       close this help",
    ]
    .join("\n")
}

fn stars(rating: i32) -> String {
    let filled = rating.clamp(0, 5) as usize;
    let mut output = String::new();
    for _ in 0..filled {
        output.push(STAR_FILLED);
    }
    for _ in filled..5 {
        output.push(STAR_HOLLOW);
    }
    output
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
