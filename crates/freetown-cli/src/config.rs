// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use freetown_app::CategoryFilter;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_VERSION: i64 = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub directory: Directory,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: Ui::default(),
            directory: Directory::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub default_category: Option<String>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            default_category: Some(CategoryFilter::All.as_str().to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Directory {
    pub seed_demo: Option<bool>,
    pub default_logo_url: Option<String>,
}

impl Default for Directory {
    fn default() -> Self {
        Self {
            seed_demo: Some(true),
            default_logo_url: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("FREETOWN_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set FREETOWN_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(freetown_db::APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [ui] and [directory]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.version != CONFIG_VERSION {
            bail!(
                "config {} has version {}; expected 1",
                path.display(),
                self.version
            );
        }

        if let Some(raw) = &self.ui.default_category
            && CategoryFilter::parse(raw).is_none()
        {
            bail!(
                "ui.default_category in {} is {:?}; use \"All\" or one of the category labels",
                path.display(),
                raw
            );
        }

        if let Some(url) = &self.directory.default_logo_url {
            let trimmed = url.trim();
            if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
                bail!(
                    "directory.default_logo_url in {} must be an http(s) URL, got {:?}",
                    path.display(),
                    url
                );
            }
        }

        Ok(())
    }

    pub fn default_category(&self) -> CategoryFilter {
        self.ui
            .default_category
            .as_deref()
            .and_then(CategoryFilter::parse)
            .unwrap_or(CategoryFilter::All)
    }

    pub fn seed_demo(&self) -> bool {
        self.directory.seed_demo.unwrap_or(true)
    }

    pub fn default_logo_url(&self) -> Option<&str> {
        self.directory.default_logo_url.as_deref().map(str::trim)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# freetown config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\n# Category filter active at launch; \"All\" or a category label.\ndefault_category = \"All\"\n\n[directory]\n# Seed the session with the demo catalogue at launch.\nseed_demo = true\n# Optional. Placeholder logo for startups submitted without one.\n# default_logo_url = \"https://example.com/logo.png\"\n",
            path.display(),
        )
    }
}
