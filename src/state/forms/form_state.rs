//! Form state: the fields of one `<form>` plus keyboard focus

use super::field::FormField;
use super::rules::RuleSet;
use crate::state::markup::FormMarkup;

/// Address of a field inside the validation controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldRef {
    pub form: usize,
    pub field: usize,
}

impl FieldRef {
    pub fn new(form: usize, field: usize) -> Self {
        Self { form, field }
    }
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub id: String,
    pub action: String,
    pub autosave: bool,
    pub fields: Vec<FormField>,
    pub active_field_index: usize,
    /// Set by input on the admin surface; shown as an "unsaved" marker
    pub unsaved: bool,
}

impl FormState {
    pub fn from_markup(markup: &FormMarkup, rule_set: RuleSet) -> Self {
        Self {
            id: markup.id.clone(),
            action: markup.action.clone(),
            autosave: markup.autosave,
            fields: markup
                .fields
                .iter()
                .map(|f| FormField::from_markup(f, rule_set))
                .collect(),
            active_field_index: 0,
            unsaved: false,
        }
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        self.fields.get_mut(index)
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count().saturating_sub(1));
    }

    pub fn next_field(&mut self) {
        let count = self.field_count();
        if count > 0 {
            self.active_field_index = (self.active_field_index + 1) % count;
        }
    }

    pub fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        if self.active_field_index == 0 {
            self.active_field_index = count - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn active_field(&self) -> Option<&FormField> {
        self.fields.get(self.active_field_index)
    }

    /// Name/value pairs in document order, as a form-encoded body would carry them
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.value().to_string()))
            .collect()
    }

    /// Clear every value and error, as a form reset does
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_field_index = 0;
    }
}
