//! Confirmation modal visibility
//!
//! Opening moves focus to the close control and locks page scroll. Closing
//! restores scroll and sends focus back to the form's first field. The view
//! applies whatever [`ModalTransition`] a call returns.

/// Where keyboard focus goes after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalFocus {
    CloseButton,
    FirstFormField,
}

/// Ways the visitor can dismiss the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    /// Click on the overlay outside the dialog content.
    Backdrop,
    EscapeKey,
}

/// A change the view has to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalTransition {
    pub focus: ModalFocus,
    pub scroll_locked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open)
    }

    /// CSS `display` for the overlay.
    pub fn display(&self) -> &'static str {
        match self {
            ModalState::Open => "flex",
            ModalState::Closed => "none",
        }
    }

    pub fn aria_hidden(&self) -> &'static str {
        match self {
            ModalState::Open => "false",
            ModalState::Closed => "true",
        }
    }

    /// Page scroll is suspended while the modal is up.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    pub fn open(&mut self) -> ModalTransition {
        *self = ModalState::Open;
        ModalTransition {
            focus: ModalFocus::CloseButton,
            scroll_locked: true,
        }
    }

    /// Close the modal. `None` if it was already closed.
    pub fn close(&mut self, trigger: CloseTrigger) -> Option<ModalTransition> {
        if !self.is_open() {
            return None;
        }
        tracing::debug!(?trigger, "Closing confirmation modal");
        *self = ModalState::Closed;
        Some(ModalTransition {
            focus: ModalFocus::FirstFormField,
            scroll_locked: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_closed() {
        let modal = ModalState::default();
        assert!(!modal.is_open());
        assert_eq!(modal.display(), "none");
        assert_eq!(modal.aria_hidden(), "true");
        assert!(!modal.scroll_locked());
    }

    #[test]
    fn test_open_focuses_close_button_and_locks_scroll() {
        let mut modal = ModalState::default();
        let t = modal.open();
        assert_eq!(t.focus, ModalFocus::CloseButton);
        assert!(t.scroll_locked);
        assert_eq!(modal.display(), "flex");
        assert_eq!(modal.aria_hidden(), "false");
        assert!(modal.scroll_locked());
    }

    #[test]
    fn test_every_trigger_closes_identically() {
        let triggers = [
            CloseTrigger::CloseButton,
            CloseTrigger::Backdrop,
            CloseTrigger::EscapeKey,
        ];
        let mut outcomes = Vec::new();
        for trigger in triggers {
            let mut modal = ModalState::default();
            modal.open();
            let t = modal.close(trigger);
            outcomes.push((t, modal));
        }
        for outcome in &outcomes {
            assert_eq!(*outcome, outcomes[0]);
        }
        let (t, modal) = outcomes[0];
        assert_eq!(
            t,
            Some(ModalTransition {
                focus: ModalFocus::FirstFormField,
                scroll_locked: false,
            })
        );
        assert_eq!(modal, ModalState::Closed);
    }

    #[test]
    fn test_closing_closed_modal_is_noop() {
        let mut modal = ModalState::default();
        assert_eq!(modal.close(CloseTrigger::EscapeKey), None);
        modal.open();
        assert!(modal.close(CloseTrigger::CloseButton).is_some());
        assert_eq!(modal.close(CloseTrigger::Backdrop), None);
        assert_eq!(modal, ModalState::Closed);
    }
}
