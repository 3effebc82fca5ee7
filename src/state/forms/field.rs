//! Form field value objects

use super::rules::{RuleSet, ValidationRule};
use crate::state::markup::{FieldMarkup, InputKind};

/// Live value and validation outcome of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub valid: bool,
    /// Inline error shown under the field; at most one
    pub error: Option<String>,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            value: String::new(),
            valid: true,
            error: None,
        }
    }
}

/// Represents a single form field with its rules and current state
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: InputKind,
    pub required: bool,
    pub rules: Vec<ValidationRule>,
    pub max_length: Option<usize>,
    pub state: FieldState,
}

impl FormField {
    /// Build a field from its markup, reading the rules once
    pub fn from_markup(markup: &FieldMarkup, rule_set: RuleSet) -> Self {
        Self {
            name: markup.name.clone(),
            label: markup
                .label
                .clone()
                .unwrap_or_else(|| markup.name.clone()),
            kind: markup.kind,
            required: markup.required,
            rules: rule_set.rules_for(markup),
            max_length: markup.max_length,
            state: FieldState {
                value: markup.value.clone(),
                ..Default::default()
            },
        }
    }

    pub fn value(&self) -> &str {
        &self.state.value
    }

    pub fn is_multiline(&self) -> bool {
        self.kind.is_multiline()
    }

    /// Set the text value
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.state.value = value.into();
    }

    /// Clear the field value and any error
    pub fn clear(&mut self) {
        self.state = FieldState::default();
    }

    /// Mark the field invalid with a single inline message
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.state.valid = false;
        self.state.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.state.valid = true;
        self.state.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn char_count(&self) -> usize {
        self.state.value.chars().count()
    }

    /// Counter text like `"12/280"` for fields with a character budget
    pub fn counter_text(&self) -> Option<String> {
        self.max_length
            .map(|max| format!("{}/{}", self.char_count(), max))
    }

    pub fn is_over_limit(&self) -> bool {
        self.max_length.is_some_and(|max| self.char_count() > max)
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self.kind {
            InputKind::Password => "•".repeat(self.char_count()),
            _ => self.state.value.clone(),
        }
    }
}
