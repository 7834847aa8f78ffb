//! Regex compilation shared by every rule table.
//!
//! Patterns are compiled once, case-insensitively, while a table is built.
//! A bad pattern is a configuration error and aborts construction.

use parlance_core::errors::{ConfigError, ParlanceResult};
use regex::{Regex, RegexBuilder};

/// Compile `pattern` for `table`, mapping failures to `ConfigError::InvalidPattern`.
pub fn compile(table: &str, pattern: &str) -> ParlanceResult<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| {
            ConfigError::InvalidPattern {
                table: table.to_string(),
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
}

/// Reject confidence weights outside [0, 1] (NaN included).
pub fn check_confidence(table: &str, label: &str, value: f64) -> ParlanceResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::ConfidenceOutOfRange {
            table: table.to_string(),
            label: label.to_string(),
            value,
        }
        .into())
    }
}

/// Reject blank required fields.
pub fn require_non_empty<'a>(table: &str, field: &str, value: &'a str) -> ParlanceResult<&'a str> {
    if value.trim().is_empty() {
        Err(ConfigError::EmptyField {
            table: table.to_string(),
            field: field.to_string(),
        }
        .into())
    } else {
        Ok(value)
    }
}
