//! Error types for the website widgets

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Widget error types organized by domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Fee Calculator Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Fee data missing for course '{course}' and duration '{duration}'")]
    FeeDataMissing { course: String, duration: String },

    // ─────────────────────────────────────────────────────────────
    // Form Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Form has invalid fields: {}", fields.join(", "))]
    FormInvalid { fields: Vec<String> },

    #[error("Unknown form field: {name}")]
    UnknownField { name: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn fee_data_missing(course: impl Into<String>, duration: impl Into<String>) -> Self {
        Self::FeeDataMissing {
            course: course.into(),
            duration: duration.into(),
        }
    }

    pub fn form_invalid(fields: Vec<String>) -> Self {
        Self::FormInvalid { fields }
    }

    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if the page can carry on after this error
    ///
    /// Nothing a visitor does can break the page, so only broken
    /// configuration counts as unrecoverable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::Config { .. } | Error::ConfigParse(_))
    }
}
