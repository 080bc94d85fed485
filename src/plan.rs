//! Loading tariff plans from JSON
//!
//! Accepts either a bare array of tariff periods or an object of the form
//! `{ "name": "...", "periods": [...] }`. Time strings and day codes are
//! checked during deserialization, so a loaded plan always holds valid times.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::tariff::{validate_coverage, CoverageResult, TariffPeriod};

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to read plan file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid plan JSON at line {line}, column {column}: {message}")]
    Json {
        line: usize,
        column: usize,
        message: String,
    },
}

impl From<serde_json::Error> for PlanError {
    fn from(err: serde_json::Error) -> Self {
        PlanError::Json {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// A retail plan's pricing schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub periods: Vec<TariffPeriod>,
}

impl Plan {
    pub fn from_json_str(json: &str) -> Result<Self, PlanError> {
        let plan = if json.trim_start().starts_with('[') {
            Plan {
                name: None,
                periods: serde_json::from_str(json)?,
            }
        } else {
            serde_json::from_str(json)?
        };
        debug!(
            "Parsed plan {:?} with {} tariff periods",
            plan.name,
            plan.periods.len()
        );
        Ok(plan)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PlanError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| PlanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut plan = Self::from_json_str(&json)?;
        if plan.name.is_none() {
            plan.name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned());
        }
        Ok(plan)
    }

    pub fn validate_coverage(&self) -> CoverageResult {
        validate_coverage(&self.periods)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed plan")
    }
}
