//! Field validation shared by the website forms
//!
//! A field is checked in a fixed order and the first failure wins:
//! 1. required but blank
//! 2. value does not match the field's [`Pattern`]
//! 3. value rejected by the field's [`CustomCheck`]

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Extra per-field rule applied to the untrimmed value.
pub type CustomCheck = fn(&str) -> bool;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex")
});

// Kenyan mobile numbers: 07XXXXXXXX or +2547XXXXXXXX, ASCII digits only.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(07|\+2547)[0-9]{8}$").expect("Invalid phone regex"));

/// Shape checks applied to specific fields by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// `local@domain.tld`
    Email,
    /// Kenyan mobile number
    KenyanPhone,
}

impl Pattern {
    /// The pattern the forms apply to a field called `name`, if any.
    pub fn for_field(name: &str) -> Option<Pattern> {
        match name {
            "email" => Some(Pattern::Email),
            "phone" => Some(Pattern::KenyanPhone),
            _ => None,
        }
    }

    pub fn is_match(&self, value: &str) -> bool {
        match self {
            Pattern::Email => EMAIL_REGEX.is_match(value),
            Pattern::KenyanPhone => PHONE_REGEX.is_match(value),
        }
    }
}

/// Validity of one field as last computed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Valid,
    Invalid(String),
}

impl FieldState {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldState::Valid)
    }

    /// Text for the error element; empty when valid.
    pub fn message(&self) -> &str {
        match self {
            FieldState::Valid => "",
            FieldState::Invalid(msg) => msg,
        }
    }

    /// Value for the input's `aria-invalid` attribute.
    pub fn aria_invalid(&self) -> &'static str {
        if self.is_valid() {
            "false"
        } else {
            "true"
        }
    }

    /// CSS `display` for the error element.
    pub fn error_display(&self) -> &'static str {
        if self.is_valid() {
            "none"
        } else {
            "block"
        }
    }
}

/// Check a single value.
///
/// `label` is the human-readable field label and `name` the form field name.
pub fn validate_value(
    label: &str,
    name: &str,
    required: bool,
    value: &str,
    pattern: Option<Pattern>,
    custom_check: Option<CustomCheck>,
) -> FieldState {
    let trimmed = value.trim();

    if required && trimmed.is_empty() {
        return FieldState::Invalid(format!("{label} is required."));
    }
    if let Some(pattern) = pattern {
        if !pattern.is_match(trimmed) {
            return FieldState::Invalid(format!("Please enter a valid {name} format."));
        }
    }
    if let Some(check) = custom_check {
        if !check(value) {
            return FieldState::Invalid(format!("Invalid value for {name}."));
        }
    }
    FieldState::Valid
}

/// `YYYY-MM-DD` that is not later than `today`.
pub fn is_birth_date_on_or_before(value: &str, today: NaiveDate) -> bool {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(|date| date <= today)
        .unwrap_or(false)
}

/// [`CustomCheck`] for the date-of-birth field.
pub fn birth_date_check(value: &str) -> bool {
    is_birth_date_on_or_before(value, chrono::Local::now().date_naive())
}
