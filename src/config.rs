//! Runtime configuration
//!
//! Defaults match the shared market spreadsheet. A YAML file can override
//! any of them, and command-line options or environment variables override
//! the file.
//!
//! ```yaml
//! credentials: creds.json
//! spreadsheet: love_sandwiches
//! worksheets:
//!   stock: stock
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SandwichResult;
use crate::types::WorksheetNames;

pub const DEFAULT_CREDENTIALS: &str = "creds.json";
pub const DEFAULT_SPREADSHEET: &str = "love_sandwiches";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service-account key file
    pub credentials: PathBuf,
    /// Human-readable name of the spreadsheet in Drive
    pub spreadsheet: String,
    pub worksheets: WorksheetNames,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials: PathBuf::from(DEFAULT_CREDENTIALS),
            spreadsheet: DEFAULT_SPREADSHEET.to_string(),
            worksheets: WorksheetNames::default(),
        }
    }
}

impl Config {
    /// Read a YAML config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> SandwichResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Defaults, then the optional file, then explicit overrides
    pub fn resolve(
        file: Option<&Path>,
        credentials: Option<PathBuf>,
        spreadsheet: Option<String>,
    ) -> SandwichResult<Self> {
        let mut config = match file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(credentials) = credentials {
            config.credentials = credentials;
        }
        if let Some(spreadsheet) = spreadsheet {
            config.spreadsheet = spreadsheet;
        }
        Ok(config)
    }
}
