use anyhow::{bail, Context, Result};
#[cfg(test)]
use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::str::FromStr;

use crate::cli::Args;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format '{}' (expected text or json)", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Plan file used when none is given on the command line
    pub plan_path: Option<String>,

    pub output_format: OutputFormat,

    // Treat overlapping rates as a validation failure, not just gaps
    pub strict: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env if present, ignore if missing
        Self::from_getter(|key| env::var(key).ok())
    }

    /// Parse config from a custom getter function (for testing)
    pub fn from_getter<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            plan_path: get("BATTERYIQ_PLAN_PATH").filter(|s| !s.trim().is_empty()),

            output_format: get("BATTERYIQ_OUTPUT")
                .unwrap_or_else(|| "text".to_string())
                .parse()
                .context("BATTERYIQ_OUTPUT must be 'text' or 'json'")?,

            strict: match get("BATTERYIQ_STRICT") {
                Some(value) => Self::parse_bool(&value)
                    .with_context(|| format!("BATTERYIQ_STRICT '{}' is not a boolean", value))?,
                None => false,
            },
        })
    }

    /// Create config from a HashMap (convenience for testing)
    #[cfg(test)]
    pub fn from_map(map: &HashMap<&str, &str>) -> Result<Self> {
        Self::from_getter(|key| map.get(key).map(|v| v.to_string()))
    }

    /// Apply command-line overrides. Flags only switch options on, a plan path
    /// replaces the configured one.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(path) = &args.plan_path {
            self.plan_path = Some(path.clone());
        }
        if args.json {
            self.output_format = OutputFormat::Json;
        }
        self.strict |= args.strict;
    }

    /// Validate configuration values at startup.
    /// Returns Ok(()) if all validations pass, or Err with details of what failed.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        match &self.plan_path {
            None => errors.push(
                "No plan file given. Pass PLAN_FILE or set BATTERYIQ_PLAN_PATH.".to_string(),
            ),
            Some(path) if !Path::new(path).is_file() => {
                errors.push(format!("Plan file not found at '{}'.", path));
            }
            Some(_) => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            bail!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )
        }
    }

    fn parse_bool(value: &str) -> Option<bool> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" | "" => Some(false),
            _ => None,
        }
    }
}
