//! # college-core - Website Widget Logic
//!
//! Foundation crate for the college website. Holds everything the widgets
//! decide, so the Leptos front end only binds DOM events to these calls.
//!
//! This crate has **no browser dependencies** -- it builds for the host and
//! for `wasm32-unknown-unknown` alike and is tested natively.
//!
//! ## Public API
//!
//! ### Fee Data (`fees`, `estimate`)
//! - [`FeeSchedule`] - Built-in course fees and duration multipliers
//! - [`calculate_fee()`] - Calculator output for the current selection
//! - [`FeeEstimate`] - Per-term and grand totals for one selection
//! - [`format_ksh()`] - Thousands-grouped shilling amounts
//!
//! ### Forms (`form`, `validation`, `application`, `sponsorship`)
//! - [`FormModel`] - Field values and validity for one form
//! - [`FieldState`] - Valid, or invalid with a message
//! - [`Pattern`] - Email and Kenyan phone shape checks
//! - [`ApplicationForm`] - Apply page: validation, submission, modal
//! - [`SponsorshipForm`] - Sponsorship page: submit feedback and reset
//!
//! ### Page Chrome (`navigation`, `modal`, `scroll`)
//! - [`NavMenu`] - Mobile menu open/closed state
//! - [`ModalState`] - Confirmation modal visibility
//! - [`same_page_fragment()`] - Fragment links that should smooth-scroll
//! - [`recipient_of()`] - Decoded address of a `mailto:` link
//!
//! ### Infrastructure
//! - [`SiteConfig`] - `site.toml` settings with defaults
//! - [`Error`], [`Result`] - Crate error type

pub mod application;
pub mod config;
pub mod error;
pub mod estimate;
pub mod fees;
pub mod form;
pub mod mailto;
pub mod modal;
pub mod navigation;
pub mod prelude;
pub mod scroll;
pub mod sponsorship;
pub mod validation;

pub use application::{ApplicationForm, Submission, APPLICATION_FIELDS, INTAKES, REJECTION_ALERT};
pub use config::SiteConfig;
pub use error::{Error, Result};
pub use estimate::{
    calculate_fee, estimate, format_amount, format_ksh, term_label, CalculatorOutput,
    FeeEstimate, DISCLAIMER, MISSING_DATA_MESSAGE, PROMPT_MESSAGE,
};
pub use fees::{Course, CourseFees, FeeSchedule, StudyDuration};
pub use form::{FieldSpec, FormData, FormModel, InputKind};
pub use mailto::{application_copy_link, recipient_of};
pub use modal::{CloseTrigger, ModalFocus, ModalState, ModalTransition};
pub use navigation::{FocusTarget, MenuState, NavMenu};
pub use scroll::same_page_fragment;
pub use sponsorship::{
    Accent, SponsorshipForm, SubmitButtonState, SPONSORSHIP_FIELDS, SPONSORSHIP_TYPES,
};
pub use validation::{FieldState, Pattern};
