//! Runtime configuration
//!
//! Read from environment variables with defaults:
//! - `SOIL_REPORT_FORMAT`: `markdown` (default), `json` or `json-compact`
//! - `SOIL_HISTORY_LIMIT`: maximum analyses kept in the session history
//!   (unset = unbounded)

use crate::error::SoilError;
use crate::history::AnalysisHistory;
use std::str::FromStr;

pub const REPORT_FORMAT_VAR: &str = "SOIL_REPORT_FORMAT";
pub const HISTORY_LIMIT_VAR: &str = "SOIL_HISTORY_LIMIT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
    JsonCompact,
}

impl FromStr for OutputFormat {
    type Err = SoilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            "json-compact" | "compact" => Ok(OutputFormat::JsonCompact),
            _ => Err(SoilError::InvalidConfig {
                key: REPORT_FORMAT_VAR.to_string(),
                value: s.to_string(),
                reason: "expected markdown, json or json-compact".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub format: OutputFormat,
    pub history_limit: Option<usize>,
}

impl AnalyzerConfig {
    /// Configuration from the process environment
    pub fn from_env() -> Result<Self, SoilError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SoilError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup(REPORT_FORMAT_VAR) {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        let history_limit = match lookup(HISTORY_LIMIT_VAR) {
            Some(value) => Some(parse_history_limit(&value)?),
            None => None,
        };

        Ok(Self {
            format,
            history_limit,
        })
    }

    /// Empty history honouring the configured limit
    pub fn new_history(&self) -> AnalysisHistory {
        match self.history_limit {
            Some(limit) => AnalysisHistory::with_capacity_limit(limit),
            None => AnalysisHistory::new(),
        }
    }
}

fn parse_history_limit(value: &str) -> Result<usize, SoilError> {
    let invalid = |reason: &str| SoilError::InvalidConfig {
        key: HISTORY_LIMIT_VAR.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let limit: usize = value
        .trim()
        .parse()
        .map_err(|_| invalid("expected a positive integer"))?;

    if limit == 0 {
        return Err(invalid("must be at least 1"));
    }

    Ok(limit)
}
