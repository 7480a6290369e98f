//! Sponsorship inquiry form with temporary submit-button feedback
//!
//! A submit swaps the button into a disabled "sent" state. After the
//! feedback delay the view calls [`SponsorshipForm::finish`], which resets
//! the fields and puts the button back exactly as it was.

use crate::form::{FieldSpec, FormData, FormModel, InputKind};
use crate::prelude::*;

pub const DEFAULT_FEEDBACK_DELAY_MS: u64 = 3_000;

pub const SUBMIT_LABEL: &str = "Send Sponsorship Request";
pub const SENT_LABEL: &str = "Request Sent! We will contact you shortly.";
pub const THANK_YOU_MESSAGE: &str = "Your sponsorship request has been submitted. Thank you!";

pub const SPONSORSHIP_TYPES: &[&str] = &["Scholarship", "Equipment", "Event", "Other"];

pub const SPONSORSHIP_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("organization", "Organization", InputKind::Text).required(),
    FieldSpec::new("contact_person", "Contact Person", InputKind::Text).required(),
    FieldSpec::new("email", "Email", InputKind::Email).required(),
    FieldSpec::new("phone", "Phone", InputKind::Tel),
    FieldSpec::new("sponsorship_type", "Sponsorship Type", InputKind::Select).required(),
    FieldSpec::new("message", "Message", InputKind::Textarea),
];

/// Brand colours used for the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    /// College red.
    #[default]
    Primary,
    /// College blue.
    Secondary,
}

impl Accent {
    pub fn hex(&self) -> &'static str {
        match self {
            Accent::Primary => "#D2042D",
            Accent::Secondary => "#0B61A4",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButtonState {
    pub label: String,
    pub disabled: bool,
    pub accent: Accent,
}

impl Default for SubmitButtonState {
    fn default() -> Self {
        Self {
            label: SUBMIT_LABEL.to_string(),
            disabled: false,
            accent: Accent::Primary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    /// Waiting for the feedback delay; holds the button as it was.
    Sending { original: SubmitButtonState },
}

/// State behind the sponsorship page.
#[derive(Debug, Clone)]
pub struct SponsorshipForm {
    form: FormModel,
    button: SubmitButtonState,
    phase: Phase,
}

impl Default for SponsorshipForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SponsorshipForm {
    pub fn new() -> Self {
        Self {
            form: FormModel::new(SPONSORSHIP_FIELDS),
            button: SubmitButtonState::default(),
            phase: Phase::Idle,
        }
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    pub fn button(&self) -> &SubmitButtonState {
        &self.button
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.phase, Phase::Sending { .. })
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.form.set_value(name, value)
    }

    /// Accept the inquiry and show the "sent" button.
    ///
    /// Returns `None` while a previous submission is still showing feedback;
    /// the caller must not schedule another timer in that case.
    pub fn submit(&mut self) -> Result<Option<FormData>> {
        self.submit_with(FormData::to_json_pretty)
    }

    /// The button only changes once the inquiry has been logged, so a failed
    /// serialization leaves it enabled.
    fn submit_with(
        &mut self,
        to_json: impl FnOnce(&FormData) -> Result<String>,
    ) -> Result<Option<FormData>> {
        if self.is_sending() {
            debug!("Sponsorship submit ignored while feedback is showing");
            return Ok(None);
        }

        let data = self.form.data();
        let json = to_json(&data)?;
        info!(target: "college::sponsorship", data = %json, "Sponsorship inquiry submitted");

        let original = self.button.clone();
        self.button = SubmitButtonState {
            label: SENT_LABEL.to_string(),
            disabled: true,
            accent: Accent::Secondary,
        };
        self.phase = Phase::Sending { original };

        Ok(Some(data))
    }

    /// Feedback delay elapsed: reset the form and restore the button.
    ///
    /// Returns the thank-you message to alert, or `None` if nothing was pending.
    pub fn finish(&mut self) -> Option<&'static str> {
        let Phase::Sending { original } = std::mem::take(&mut self.phase) else {
            return None;
        };
        self.form.reset();
        self.button = original;
        Some(THANK_YOU_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_colours() {
        assert_eq!(Accent::Primary.hex(), "#D2042D");
        assert_eq!(Accent::Secondary.hex(), "#0B61A4");
    }

    #[test]
    fn test_submit_disables_button_immediately() {
        let mut form = SponsorshipForm::new();
        form.set_value("organization", "Safari Tech Ltd").unwrap();

        let data = form.submit().unwrap().unwrap();
        assert_eq!(data.get("organization"), Some("Safari Tech Ltd"));

        let button = form.button();
        assert!(button.disabled);
        assert_eq!(button.label, SENT_LABEL);
        assert_eq!(button.accent, Accent::Secondary);
        assert!(form.is_sending());
        // Fields stay filled until the delay runs out.
        assert_eq!(form.form().value("organization").unwrap(), "Safari Tech Ltd");
    }

    #[test]
    fn test_double_submit_is_ignored() {
        let mut form = SponsorshipForm::new();
        assert!(form.submit().unwrap().is_some());
        assert!(form.submit().unwrap().is_none());
        assert_eq!(form.button().label, SENT_LABEL);
    }

    #[test]
    fn test_finish_restores_button_exactly() {
        let mut form = SponsorshipForm::new();
        let before = form.button().clone();
        form.set_value("email", "csr@safari.co.ke").unwrap();

        form.submit().unwrap();
        assert_eq!(form.finish(), Some(THANK_YOU_MESSAGE));

        assert_eq!(form.button(), &before);
        assert!(!form.button().disabled);
        assert_eq!(form.button().accent, Accent::Primary);
        assert_eq!(form.form().value("email").unwrap(), "");
        assert!(!form.is_sending());
    }

    #[test]
    fn test_failed_submit_keeps_button_enabled() {
        let mut form = SponsorshipForm::new();
        form.set_value("organization", "Safari Tech Ltd").unwrap();

        let result = form.submit_with(|_| Err(Error::config("unserializable")));
        assert!(result.is_err());
        assert!(!form.is_sending());
        assert_eq!(form.button(), &SubmitButtonState::default());
        assert_eq!(form.finish(), None);

        // A later attempt still goes through.
        assert!(form.submit().unwrap().is_some());
        assert!(form.button().disabled);
    }

    #[test]
    fn test_finish_without_submit_is_noop() {
        let mut form = SponsorshipForm::new();
        assert_eq!(form.finish(), None);
        assert_eq!(form.button(), &SubmitButtonState::default());
    }
}
