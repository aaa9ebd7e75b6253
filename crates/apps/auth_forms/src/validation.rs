//! Pure per-field validation rules.
//!
//! Validation never touches rendering state: it maps current values to a
//! complete replacement error map.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::state::{FormKey, FormValues};

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Field-keyed validation failures. Absent keys are valid.
pub type ErrorMap<K> = BTreeMap<K, FieldError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// A user-correctable problem with one field's value.
pub enum FieldError {
    /// The field is required and blank.
    #[error("{label} is required")]
    MissingRequired {
        /// Field label.
        label: &'static str,
    },
    /// The value does not look like an email address.
    #[error("Please enter a valid email address")]
    InvalidFormat {
        /// Field label.
        label: &'static str,
    },
    /// The value is shorter than the configured minimum.
    #[error("{label} must be at least {min} characters")]
    TooShort {
        /// Field label.
        label: &'static str,
        /// Minimum length in characters.
        min: usize,
    },
    /// The value differs from the field it must repeat.
    #[error("{label} does not match")]
    Mismatch {
        /// Field label.
        label: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One check applied to a field value.
pub enum Rule<K> {
    /// Value must contain a non-whitespace character.
    Required,
    /// Value must have an email shape.
    Email,
    /// Value must be at least this many characters long.
    MinLength(usize),
    /// Value must equal another field's value.
    Matches(K),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Ordered rules for one field.
pub struct FieldRules<K> {
    /// Field the rules apply to.
    pub key: K,
    /// Rules, checked in order until one fails.
    pub rules: Vec<Rule<K>>,
}

impl<K: Copy> FieldRules<K> {
    /// Rules for `key`.
    pub fn new(key: K, rules: &[Rule<K>]) -> Self {
        Self {
            key,
            rules: rules.to_vec(),
        }
    }
}

/// Checks the email shape `local@domain.tld` with no whitespace.
pub fn is_email(value: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
        .is_match(value)
}

/// Returns the first failing rule's error for `key`, if any.
///
/// Blank values only fail [`Rule::Required`]; format and length rules apply to
/// values the user actually entered.
pub fn check_field<K: FormKey>(
    key: K,
    rules: &[Rule<K>],
    values: &FormValues<K>,
) -> Option<FieldError> {
    let value = values.get(&key).map(String::as_str).unwrap_or_default();
    let label = key.label();
    let blank = value.trim().is_empty();

    rules.iter().find_map(|rule| match *rule {
        Rule::Required if blank => Some(FieldError::MissingRequired { label }),
        Rule::Required => None,
        _ if blank => None,
        Rule::Email if !is_email(value) => Some(FieldError::InvalidFormat { label }),
        Rule::Email => None,
        Rule::MinLength(min) if value.chars().count() < min => {
            Some(FieldError::TooShort { label, min })
        }
        Rule::MinLength(_) => None,
        Rule::Matches(other) => {
            let expected = values.get(&other).map(String::as_str).unwrap_or_default();
            (value != expected).then_some(FieldError::Mismatch { label })
        }
    })
}

/// Validates every field in `schema` and returns the complete error map.
pub fn validate<K: FormKey>(schema: &[FieldRules<K>], values: &FormValues<K>) -> ErrorMap<K> {
    schema
        .iter()
        .filter_map(|field| check_field(field.key, &field.rules, values).map(|err| (field.key, err)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::SignUpField;
    use pretty_assertions::assert_eq;

    fn values(entries: &[(SignUpField, &str)]) -> FormValues<SignUpField> {
        entries
            .iter()
            .map(|(key, value)| (*key, value.to_string()))
            .collect()
    }

    #[test]
    fn email_shape() {
        assert!(is_email("john@example.com"));
        assert!(!is_email("  john@example.com "));
        assert!(!is_email("john"));
        assert!(!is_email("john@example"));
        assert!(!is_email("jo hn@example.com"));
        assert!(!is_email("@example.com"));
    }

    #[test]
    fn padded_email_is_rejected_as_entered() {
        let rules = [Rule::Required, Rule::Email];
        let padded = values(&[(SignUpField::Email, " john@example.com")]);
        assert_eq!(
            check_field(SignUpField::Email, &rules, &padded),
            Some(FieldError::InvalidFormat { label: "Email" })
        );
    }

    #[test]
    fn first_failing_rule_wins() {
        let rules = [Rule::Required, Rule::MinLength(6)];
        let empty = values(&[(SignUpField::Password, "")]);
        assert_eq!(
            check_field(SignUpField::Password, &rules, &empty),
            Some(FieldError::MissingRequired { label: "Password" })
        );
        let short = values(&[(SignUpField::Password, "12345")]);
        assert_eq!(
            check_field(SignUpField::Password, &rules, &short),
            Some(FieldError::TooShort {
                label: "Password",
                min: 6
            })
        );
        let ok = values(&[(SignUpField::Password, "123456")]);
        assert_eq!(check_field(SignUpField::Password, &rules, &ok), None);
    }

    #[test]
    fn optional_blank_skips_format_rules() {
        let rules = [Rule::Email];
        let blank = values(&[(SignUpField::Email, "   ")]);
        assert_eq!(check_field(SignUpField::Email, &rules, &blank), None);
    }

    #[test]
    fn matches_compares_against_other_field() {
        let rules = [Rule::Required, Rule::Matches(SignUpField::Password)];
        let mismatch = values(&[(SignUpField::Password, "secret1"), (SignUpField::Name, "secret2")]);
        assert_eq!(
            check_field(SignUpField::Name, &rules, &mismatch),
            Some(FieldError::Mismatch { label: "Full name" })
        );
    }

    #[test]
    fn messages_read_naturally() {
        assert_eq!(
            FieldError::MissingRequired { label: "Email" }.to_string(),
            "Email is required"
        );
        assert_eq!(
            FieldError::InvalidFormat { label: "Email" }.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            FieldError::TooShort {
                label: "Password",
                min: 6
            }
            .to_string(),
            "Password must be at least 6 characters"
        );
    }
}
