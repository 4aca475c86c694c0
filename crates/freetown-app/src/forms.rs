// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};

use crate::{Category, StartupId};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    AddStartup,
    Review,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupFormInput {
    pub name: String,
    pub category: Option<Category>,
    pub description: String,
    pub services: Vec<String>,
    pub hours: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: String,
    pub logo: String,
}

impl Default for StartupFormInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: None,
            description: String::new(),
            // The form always starts with one (empty) service row.
            services: vec![String::new()],
            hours: String::new(),
            email: String::new(),
            phone: String::new(),
            website: String::new(),
            address: String::new(),
            logo: String::new(),
        }
    }
}

impl StartupFormInput {
    /// Service rows as stored: trimmed, blanks dropped, duplicates dropped,
    /// first occurrence order preserved.
    pub fn normalized_services(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for service in &self.services {
            let trimmed = service.trim();
            if trimmed.is_empty() || seen.iter().any(|entry: &String| entry == trimmed) {
                continue;
            }
            seen.push(trimmed.to_owned());
        }
        seen
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("startup name is required -- enter a name and retry");
        }
        if self.category.is_none() {
            bail!("category is required -- choose a category and retry");
        }
        if self.description.trim().is_empty() {
            bail!("description is required -- describe the startup and retry");
        }
        if self.normalized_services().is_empty() {
            bail!("at least one service is required -- enter a service and retry");
        }
        if self.email.trim().is_empty() {
            bail!("contact email is required -- enter an email and retry");
        }
        if self.phone.trim().is_empty() {
            bail!("contact phone is required -- enter a phone number and retry");
        }
        if self.hours.trim().is_empty() {
            bail!("operating hours are required -- enter hours and retry");
        }
        if self.address.trim().is_empty() {
            bail!("address is required -- enter an address and retry");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewFormInput {
    pub startup_id: StartupId,
    pub author: String,
    pub comment: String,
    pub rating: i32,
}

impl ReviewFormInput {
    pub fn blank_for(startup_id: StartupId) -> Self {
        Self {
            startup_id,
            author: String::new(),
            comment: String::new(),
            rating: 0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.author.trim().is_empty() {
            bail!("reviewer name is required -- enter your name and retry");
        }
        if self.comment.trim().is_empty() {
            bail!("review comment is required -- share your experience and retry");
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            bail!("rating is required -- pick 1 to 5 stars and retry");
        }
        Ok(())
    }

    /// Whether the submit affordance is live; mirrors `validate` without the
    /// error message.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPayload {
    Startup(StartupFormInput),
    Review(ReviewFormInput),
}

impl FormPayload {
    pub const fn kind(&self) -> FormKind {
        match self {
            Self::Startup(_) => FormKind::AddStartup,
            Self::Review(_) => FormKind::Review,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Startup(startup) => startup.validate(),
            Self::Review(review) => review.validate(),
        }
    }
}
