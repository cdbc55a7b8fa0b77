//! Validation limits shared by the item constructors.
//!
//! Limits are plain values handed to the constructors that need them; nothing here
//! is process-wide state. They can be layered from defaults, an optional TOML file
//! and `LITCATALOG_*` environment variables.

use std::path::Path;

use chrono::{Datelike, Utc};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CatalogError, Result};

pub const DEFAULT_MAX_TITLE_LENGTH: usize = 50;
pub const DEFAULT_MIN_NOVEL_YEAR: i32 = 1500;
pub const DEFAULT_MAX_YEAR: i32 = 2025;

pub const ENV_PREFIX: &str = "LITCATALOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Longest title (and novel author) accepted, counted in characters.
    pub max_title_length: usize,
    /// Earliest publication year accepted for a novel.
    pub min_novel_year: i32,
    /// Latest publication year accepted for any item.
    pub max_year: i32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            min_novel_year: DEFAULT_MIN_NOVEL_YEAR,
            max_year: DEFAULT_MAX_YEAR,
        }
    }
}

impl Limits {
    /// Defaults, except that the year ceiling follows the calendar.
    pub fn through_current_year() -> Self {
        Self {
            max_year: Utc::now().year(),
            ..Self::default()
        }
    }

    /// Builds limits from defaults, then `path` (if any), then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        let limits: Limits = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;
        limits.check()?;
        debug!(?limits, "limits loaded");
        Ok(limits)
    }

    pub fn check(&self) -> Result<()> {
        if self.max_title_length == 0 {
            return Err(CatalogError::Config(
                "max_title_length must be greater than zero".into(),
            ));
        }
        if self.min_novel_year > self.max_year {
            return Err(CatalogError::Config(format!(
                "min_novel_year {} is after max_year {}",
                self.min_novel_year, self.max_year
            )));
        }
        Ok(())
    }
}
