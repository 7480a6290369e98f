pub mod application_form;
pub mod confirmation_modal;
pub mod fee_calculator;
pub mod fee_table;
pub mod footer;
pub mod form_field;
pub mod fragment_link;
pub mod navbar;
pub mod sponsorship_form;
