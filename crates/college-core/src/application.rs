//! Application form: validation, simulated submission and confirmation modal

use crate::form::{FieldSpec, FormData, FormModel, InputKind};
use crate::mailto::application_copy_link;
use crate::modal::{CloseTrigger, ModalState, ModalTransition};
use crate::prelude::*;
use crate::validation::birth_date_check;

pub const REJECTION_ALERT: &str = "Please correct the highlighted errors in the form.";

pub const INTAKES: &[&str] = &["January", "May", "September"];

/// Fields in the order they appear on the apply page.
pub const APPLICATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("full_name", "Full Name", InputKind::Text).required(),
    FieldSpec::new("email", "Email Address", InputKind::Email).required(),
    FieldSpec::new("phone", "Phone Number", InputKind::Tel).required(),
    FieldSpec::new("date_of_birth", "Date of Birth", InputKind::Date)
        .required()
        .with_check(birth_date_check),
    FieldSpec::new("course", "Course", InputKind::Select).required(),
    FieldSpec::new("intake", "Intake", InputKind::Select).required(),
    FieldSpec::new("previous_school", "Previous School", InputKind::Text).required(),
    FieldSpec::new("documents", "Supporting Documents", InputKind::File),
    FieldSpec::new("message", "Additional Information", InputKind::Textarea),
    FieldSpec::new("source", "Source", InputKind::Hidden).with_default("website"),
];

/// Outcome of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Values as they were before the form was reset.
    pub data: FormData,
    /// "Request a copy" link addressed to the applicant.
    pub mailto: String,
    pub transition: ModalTransition,
}

/// State behind the apply page.
#[derive(Debug, Clone)]
pub struct ApplicationForm {
    form: FormModel,
    modal: ModalState,
}

impl Default for ApplicationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self::with_fields(APPLICATION_FIELDS)
    }

    pub fn with_fields(fields: &[FieldSpec]) -> Self {
        Self {
            form: FormModel::new(fields),
            modal: ModalState::Closed,
        }
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.form.set_value(name, value)
    }

    pub fn blur(&mut self, name: &str) -> Result<bool> {
        self.form.blur(name)
    }

    /// Validate everything and, if it all passes, accept the application.
    ///
    /// On rejection every field keeps its inline error and the modal stays
    /// closed. On success the form is reset and the modal opens.
    pub fn submit(&mut self) -> Result<Submission> {
        let invalid = self.form.validate_all();
        if !invalid.is_empty() {
            warn!(fields = ?invalid, "Application rejected");
            return Err(Error::form_invalid(invalid));
        }

        let data = self.form.data();
        let email = data.get("email").unwrap_or_default().to_string();
        let mailto = application_copy_link(&email, &data)?;
        let json = data.to_json_pretty()?;

        info!(target: "college::application", data = %json, "Application form submitted");

        self.form.reset();
        let transition = self.modal.open();

        Ok(Submission {
            data,
            mailto,
            transition,
        })
    }

    pub fn close_modal(&mut self, trigger: CloseTrigger) -> Option<ModalTransition> {
        self.modal.close(trigger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mailto::recipient_of;
    use crate::modal::ModalFocus;

    fn fill_valid(form: &mut ApplicationForm) {
        form.set_value("full_name", "Jane Wanjiru").unwrap();
        form.set_value("email", "jane@example.co.ke").unwrap();
        form.set_value("phone", "+254712345678").unwrap();
        form.set_value("date_of_birth", "2005-03-14").unwrap();
        form.set_value("course", "Data Science").unwrap();
        form.set_value("intake", "September").unwrap();
        form.set_value("previous_school", "Alliance Girls High School").unwrap();
    }

    #[test]
    fn test_first_field_is_full_name() {
        assert_eq!(ApplicationForm::new().form().first_field(), Some("full_name"));
    }

    #[test]
    fn test_empty_form_is_rejected() {
        let mut form = ApplicationForm::new();
        let err = form.submit().unwrap_err();
        let Error::FormInvalid { fields } = err else {
            panic!("expected FormInvalid");
        };
        assert_eq!(
            fields,
            vec![
                "full_name",
                "email",
                "phone",
                "date_of_birth",
                "course",
                "intake",
                "previous_school",
            ]
        );
        assert!(!form.modal().is_open());
        assert_eq!(
            form.form().state("full_name").unwrap().message(),
            "Full Name is required."
        );
        assert_eq!(
            form.form().state("phone").unwrap().message(),
            "Phone Number is required."
        );
    }

    #[test]
    fn test_invalid_email_alone_is_rejected() {
        let mut form = ApplicationForm::new();
        fill_valid(&mut form);
        form.set_value("email", "abc@").unwrap();

        let err = form.submit().unwrap_err();
        assert!(matches!(err, Error::FormInvalid { ref fields } if fields == &["email"]));
        assert_eq!(
            form.form().state("email").unwrap().message(),
            "Please enter a valid email format."
        );
        // Rejected submissions keep what the visitor typed.
        assert_eq!(form.form().value("full_name").unwrap(), "Jane Wanjiru");
    }

    #[test]
    fn test_future_birth_date_uses_custom_message() {
        let mut form = ApplicationForm::new();
        fill_valid(&mut form);
        form.set_value("date_of_birth", "2999-01-01").unwrap();

        assert!(form.submit().is_err());
        assert_eq!(
            form.form().state("date_of_birth").unwrap().message(),
            "Invalid value for date_of_birth."
        );
    }

    #[test]
    fn test_valid_submission_resets_and_opens_modal() {
        let mut form = ApplicationForm::new();
        fill_valid(&mut form);

        let submission = form.submit().unwrap();

        assert_eq!(submission.data.get("full_name"), Some("Jane Wanjiru"));
        assert_eq!(submission.data.get("source"), Some("website"));
        assert_eq!(
            recipient_of(&submission.mailto).as_deref(),
            Some("jane@example.co.ke")
        );
        assert_eq!(submission.transition.focus, ModalFocus::CloseButton);
        assert!(submission.transition.scroll_locked);

        assert!(form.modal().is_open());
        assert_eq!(form.modal().aria_hidden(), "false");
        assert_eq!(form.form().value("full_name").unwrap(), "");
        assert_eq!(form.form().value("email").unwrap(), "");
        assert_eq!(form.form().value("source").unwrap(), "website");
    }

    #[test]
    fn test_mail_link_keeps_delimiters_in_local_part() {
        let mut form = ApplicationForm::new();
        fill_valid(&mut form);
        form.set_value("email", "a#b@example.com").unwrap();

        let submission = form.submit().unwrap();
        assert!(submission.mailto.starts_with("mailto:a%23b@example.com?"));
        assert_eq!(
            recipient_of(&submission.mailto).as_deref(),
            Some("a#b@example.com")
        );
    }

    #[test]
    fn test_file_field_never_blocks_submission() {
        let mut form = ApplicationForm::new();
        fill_valid(&mut form);
        form.set_value("documents", "").unwrap();
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_close_modal_returns_focus_to_form() {
        let mut form = ApplicationForm::new();
        fill_valid(&mut form);
        form.submit().unwrap();

        let t = form.close_modal(CloseTrigger::EscapeKey).unwrap();
        assert_eq!(t.focus, ModalFocus::FirstFormField);
        assert!(!t.scroll_locked);
        assert!(!form.modal().is_open());
        assert!(form.close_modal(CloseTrigger::EscapeKey).is_none());
    }
}
