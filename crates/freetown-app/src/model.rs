// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::ids::*;

/// Placeholder logo substituted whenever a startup is submitted without one.
pub const DEFAULT_LOGO_URL: &str =
    "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?w=100&h=100&fit=crop&crop=center";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Fintech,
    Health,
    Education,
    Transport,
    Ecommerce,
    Tech,
    Agriculture,
    Tourism,
}

impl Category {
    pub const ALL: [Self; 8] = [
        Self::Fintech,
        Self::Health,
        Self::Education,
        Self::Transport,
        Self::Ecommerce,
        Self::Tech,
        Self::Agriculture,
        Self::Tourism,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fintech => "Fintech",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Transport => "Transport",
            Self::Ecommerce => "E-commerce",
            Self::Tech => "Tech",
            Self::Agriculture => "Agriculture",
            Self::Tourism => "Tourism",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Fintech" => Some(Self::Fintech),
            "Health" => Some(Self::Health),
            "Education" => Some(Self::Education),
            "Transport" => Some(Self::Transport),
            "E-commerce" => Some(Self::Ecommerce),
            "Tech" => Some(Self::Tech),
            "Agriculture" => Some(Self::Agriculture),
            "Tourism" => Some(Self::Tourism),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    // Empty when the startup did not supply one.
    pub website: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub author: String,
    pub comment: String,
    pub rating: i32,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Startup {
    pub id: StartupId,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub services: Vec<String>,
    pub hours: String,
    pub contact: ContactInfo,
    pub logo: String,
    pub is_open: bool,
    pub reviews: Vec<Review>,
}
