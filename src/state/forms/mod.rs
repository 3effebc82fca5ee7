//! Form domain layer
//!
//! Fields read their rules from markup once, when the form is registered.
//! The validator owns every form and renders at most one inline error per
//! field.

mod field;
mod form_state;
mod rules;
mod validator;

pub use field::{FieldState, FormField};
pub use form_state::{FieldRef, FormState};
pub use rules::{
    first_failure, parse_int_prefix, RuleKind, RuleSet, ValidationRule, EMAIL_MESSAGE,
    REQUIRED_MESSAGE, URL_MESSAGE,
};
pub use validator::{FormValidationController, SubmitCheck, FORM_ERRORS_MESSAGE};
