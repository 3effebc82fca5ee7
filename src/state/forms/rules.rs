//! Field constraints and the two rule configurations that build them

use super::super::markup::{FieldMarkup, InputKind, Surface};
use regex::Regex;
use std::sync::LazyLock;

/// Loose `local@domain.tld` shape check
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const URL_MESSAGE: &str = "Please enter a valid URL";
pub const MESSAGE_MIN_LENGTH: usize = 10;

/// What a rule checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    Required,
    Email,
    Url,
    /// Integer bounds as written in the markup; each rule carries one bound
    NumericRange {
        min: Option<String>,
        max: Option<String>,
    },
    MinLength(usize),
}

/// A named constraint attached to a field when the form is registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRule {
    pub kind: RuleKind,
    pub message: String,
}

impl ValidationRule {
    pub fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn required() -> Self {
        Self::new(RuleKind::Required, REQUIRED_MESSAGE)
    }

    pub fn email() -> Self {
        Self::new(RuleKind::Email, EMAIL_MESSAGE)
    }

    pub fn url() -> Self {
        Self::new(RuleKind::Url, URL_MESSAGE)
    }

    pub fn at_least(min: &str) -> Self {
        Self::new(
            RuleKind::NumericRange {
                min: Some(min.to_string()),
                max: None,
            },
            format!("Value must be at least {min}"),
        )
    }

    pub fn at_most(max: &str) -> Self {
        Self::new(
            RuleKind::NumericRange {
                min: None,
                max: Some(max.to_string()),
            },
            format!("Value must be at most {max}"),
        )
    }

    pub fn min_length(len: usize) -> Self {
        Self::new(
            RuleKind::MinLength(len),
            format!("Message should be at least {len} characters long"),
        )
    }

    /// Check an already-trimmed value.
    ///
    /// Format rules accept empty input so that optional fields can stay
    /// blank; only `Required` and `MinLength` reject it.
    pub fn passes(&self, value: &str) -> bool {
        match &self.kind {
            RuleKind::Required => !value.is_empty(),
            RuleKind::Email => value.is_empty() || EMAIL_REGEX.is_match(value),
            RuleKind::Url => value.is_empty() || reqwest::Url::parse(value).is_ok(),
            RuleKind::NumericRange { min, max } => {
                let Some(number) = parse_int_prefix(value) else {
                    return true;
                };
                let above_min = min
                    .as_deref()
                    .and_then(parse_int_prefix)
                    .is_none_or(|m| number >= m);
                let below_max = max
                    .as_deref()
                    .and_then(parse_int_prefix)
                    .is_none_or(|m| number <= m);
                above_min && below_max
            }
            RuleKind::MinLength(len) => value.chars().count() >= *len,
        }
    }
}

/// Message of the first failing rule, if any
pub fn first_failure<'a>(rules: &'a [ValidationRule], value: &str) -> Option<&'a str> {
    let value = value.trim();
    rules
        .iter()
        .find(|rule| !rule.passes(value))
        .map(|rule| rule.message.as_str())
}

/// Parse the leading integer of `text`, ignoring any trailing garbage.
/// `"42px"` parses as 42; `"px"` and `""` do not parse. Digit runs too
/// long for an `i64` saturate.
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, digits) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // All digits, so parsing only fails on overflow
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

/// Rule configuration of a form family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSet {
    /// Admin forms: type rules come from the input type
    Admin,
    /// Public contact form: type rules come from the field name
    Contact,
}

impl From<Surface> for RuleSet {
    fn from(surface: Surface) -> Self {
        match surface {
            Surface::Admin => Self::Admin,
            Surface::Public => Self::Contact,
        }
    }
}

impl RuleSet {
    /// Read the rules a field's markup declares. Required always comes first.
    pub fn rules_for(&self, field: &FieldMarkup) -> Vec<ValidationRule> {
        let mut rules = Vec::new();
        if field.required {
            rules.push(ValidationRule::required());
        }

        match self {
            Self::Admin => match field.kind {
                InputKind::Email => rules.push(ValidationRule::email()),
                InputKind::Url => rules.push(ValidationRule::url()),
                InputKind::Number => {
                    if let Some(min) = field.min.as_deref().filter(|m| !m.is_empty()) {
                        rules.push(ValidationRule::at_least(min));
                    }
                    if let Some(max) = field.max.as_deref().filter(|m| !m.is_empty()) {
                        rules.push(ValidationRule::at_most(max));
                    }
                }
                _ => {}
            },
            Self::Contact => match field.name.as_str() {
                "email" => rules.push(ValidationRule::email()),
                "message" => rules.push(ValidationRule::min_length(MESSAGE_MIN_LENGTH)),
                _ => {}
            },
        }
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn field(name: &str, kind: InputKind, required: bool) -> FieldMarkup {
        FieldMarkup {
            name: name.to_string(),
            kind,
            required,
            ..Default::default()
        }
    }

    mod parse_int_prefix {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_plain_numbers() {
            assert_eq!(parse_int_prefix("42"), Some(42));
            assert_eq!(parse_int_prefix("-7"), Some(-7));
            assert_eq!(parse_int_prefix("+3"), Some(3));
        }

        #[test]
        fn test_trailing_garbage_ignored() {
            assert_eq!(parse_int_prefix("12abc"), Some(12));
            assert_eq!(parse_int_prefix("3.9"), Some(3));
            assert_eq!(parse_int_prefix("  8 "), Some(8));
        }

        #[test]
        fn test_overflow_saturates() {
            assert_eq!(parse_int_prefix("99999999999999999999"), Some(i64::MAX));
            assert_eq!(parse_int_prefix("-99999999999999999999"), Some(-i64::MAX));
        }

        #[test]
        fn test_no_digits() {
            assert_eq!(parse_int_prefix(""), None);
            assert_eq!(parse_int_prefix("abc"), None);
            assert_eq!(parse_int_prefix("-"), None);
        }
    }

    mod rules {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_email_shapes() {
            let rule = ValidationRule::email();
            assert!(rule.passes("bob@example.com"));
            assert!(rule.passes(""));
            assert!(!rule.passes("bob@"));
            assert!(!rule.passes("bob@example"));
            assert!(!rule.passes("bob smith@example.com"));
        }

        #[test]
        fn test_url_requires_absolute() {
            let rule = ValidationRule::url();
            assert!(rule.passes("https://github.com/someone"));
            assert!(rule.passes(""));
            assert!(!rule.passes("github.com/someone"));
        }

        #[test]
        fn test_numeric_bounds() {
            let min = ValidationRule::at_least("1");
            let max = ValidationRule::at_most("100");
            assert!(!min.passes("0"));
            assert!(min.passes("1"));
            assert!(max.passes("100"));
            assert!(!max.passes("101"));
        }

        #[test]
        fn test_huge_values_stay_out_of_range() {
            assert!(!ValidationRule::at_most("10").passes("99999999999999999999"));
            assert!(!ValidationRule::at_least("0").passes("-99999999999999999999"));
            assert!(ValidationRule::at_least("0").passes("99999999999999999999"));
        }

        #[test]
        fn test_unparsable_number_accepted() {
            assert!(ValidationRule::at_least("1").passes("abc"));
            assert!(ValidationRule::at_least("1").passes(""));
        }

        #[test]
        fn test_min_length_rejects_empty() {
            let rule = ValidationRule::min_length(10);
            assert!(!rule.passes(""));
            assert!(!rule.passes("too short"));
            assert!(rule.passes("long enough!"));
        }

        #[test]
        fn test_range_messages_name_bound() {
            assert_eq!(ValidationRule::at_least("5").message, "Value must be at least 5");
            assert_eq!(ValidationRule::at_most("9").message, "Value must be at most 9");
        }

        #[test]
        fn test_first_failure_trims_and_orders() {
            let rules = vec![ValidationRule::required(), ValidationRule::email()];
            assert_eq!(first_failure(&rules, "   "), Some(REQUIRED_MESSAGE));
            assert_eq!(first_failure(&rules, " bob@ "), Some(EMAIL_MESSAGE));
            assert_eq!(first_failure(&rules, " bob@example.com "), None);
        }
    }

    mod rule_sets {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_admin_uses_input_type() {
            let rules = RuleSet::Admin.rules_for(&field("contact", InputKind::Email, true));
            assert_eq!(rules, vec![ValidationRule::required(), ValidationRule::email()]);

            let rules = RuleSet::Admin.rules_for(&field("message", InputKind::Textarea, false));
            assert!(rules.is_empty());
        }

        #[test]
        fn test_admin_number_bounds_skip_empty_attributes() {
            let mut markup = field("level", InputKind::Number, false);
            markup.min = Some("0".into());
            markup.max = Some(String::new());
            let rules = RuleSet::Admin.rules_for(&markup);
            assert_eq!(rules, vec![ValidationRule::at_least("0")]);
        }

        #[test]
        fn test_contact_uses_field_name() {
            let rules = RuleSet::Contact.rules_for(&field("email", InputKind::Text, false));
            assert_eq!(rules, vec![ValidationRule::email()]);

            let rules = RuleSet::Contact.rules_for(&field("message", InputKind::Textarea, true));
            assert_eq!(
                rules,
                vec![ValidationRule::required(), ValidationRule::min_length(10)]
            );

            // URL type carries no rule on the contact form
            let rules = RuleSet::Contact.rules_for(&field("site", InputKind::Url, false));
            assert!(rules.is_empty());
        }

        #[test]
        fn test_surface_mapping() {
            assert_eq!(RuleSet::from(Surface::Admin), RuleSet::Admin);
            assert_eq!(RuleSet::from(Surface::Public), RuleSet::Contact);
        }
    }
}
