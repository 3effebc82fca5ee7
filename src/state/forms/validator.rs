//! Field- and form-level validation with inline error rendering

use super::form_state::{FieldRef, FormState};
use super::rules::{first_failure, RuleSet};
use crate::state::markup::FormMarkup;

/// Aggregate message raised when a submission is blocked
pub const FORM_ERRORS_MESSAGE: &str = "Please fix the errors in the form";

/// Result of intercepting a submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitCheck {
    /// Every required field passed; let the submission go out
    Proceed,
    /// At least one field failed; the submission is cancelled
    Cancelled,
}

/// Owns every form on the page and validates them with one rule set
#[derive(Debug)]
pub struct FormValidationController {
    rule_set: RuleSet,
    forms: Vec<FormState>,
}

impl FormValidationController {
    /// Build the controller, or `None` when the page has no forms
    pub fn from_markup(forms: &[FormMarkup], rule_set: RuleSet) -> Option<Self> {
        if forms.is_empty() {
            return None;
        }
        Some(Self {
            rule_set,
            forms: forms
                .iter()
                .map(|f| FormState::from_markup(f, rule_set))
                .collect(),
        })
    }

    pub fn rule_set(&self) -> RuleSet {
        self.rule_set
    }

    pub fn forms(&self) -> &[FormState] {
        &self.forms
    }

    pub fn form(&self, index: usize) -> Option<&FormState> {
        self.forms.get(index)
    }

    pub fn form_mut(&mut self, index: usize) -> Option<&mut FormState> {
        self.forms.get_mut(index)
    }

    pub fn form_index(&self, id: &str) -> Option<usize> {
        self.forms.iter().position(|f| f.id == id)
    }

    /// Find a field by form id and field name
    pub fn locate(&self, form_id: &str, field_name: &str) -> Option<FieldRef> {
        let form = self.form_index(form_id)?;
        let field = self.forms[form].field_index(field_name)?;
        Some(FieldRef::new(form, field))
    }

    /// Validate one field, rendering or clearing its inline error
    pub fn validate_field(&mut self, at: FieldRef) -> bool {
        let Some(field) = self
            .forms
            .get_mut(at.form)
            .and_then(|f| f.field_mut(at.field))
        else {
            tracing::warn!(?at, "validate_field on a field that is not on the page");
            return false;
        };

        field.clear_error();
        match first_failure(&field.rules, field.value()).map(str::to_owned) {
            Some(message) => {
                tracing::debug!(field = %field.name, %message, "field invalid");
                field.show_error(message);
                false
            }
            None => true,
        }
    }

    /// Validate every required field of a form.
    ///
    /// Does not stop at the first failure so all errors render together.
    pub fn validate_form(&mut self, form: usize) -> bool {
        let Some(state) = self.forms.get(form) else {
            return false;
        };
        let required: Vec<usize> = state
            .fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.required)
            .map(|(i, _)| i)
            .collect();

        required
            .into_iter()
            .fold(true, |all_valid, field| {
                self.validate_field(FieldRef::new(form, field)) && all_valid
            })
    }

    pub fn show_field_error(&mut self, at: FieldRef, message: impl Into<String>) {
        if let Some(field) = self.field_mut(at) {
            field.show_error(message);
        }
    }

    pub fn clear_field_error(&mut self, at: FieldRef) {
        if let Some(field) = self.field_mut(at) {
            field.clear_error();
        }
    }

    /// Keystroke in a field: store the value and drop any stale error
    pub fn on_input(&mut self, at: FieldRef, value: impl Into<String>) {
        if let Some(field) = self.field_mut(at) {
            field.set_text(value);
            field.clear_error();
        }
    }

    pub fn on_blur(&mut self, at: FieldRef) -> bool {
        self.validate_field(at)
    }

    /// Intercept a submit of `form`
    pub fn check_submission(&mut self, form: usize) -> SubmitCheck {
        if self.validate_form(form) {
            SubmitCheck::Proceed
        } else {
            SubmitCheck::Cancelled
        }
    }

    fn field_mut(&mut self, at: FieldRef) -> Option<&mut super::field::FormField> {
        self.forms.get_mut(at.form)?.field_mut(at.field)
    }

    pub fn field(&self, at: FieldRef) -> Option<&super::field::FormField> {
        self.forms.get(at.form)?.field(at.field)
    }
}
