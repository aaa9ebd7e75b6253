//! Page-owned form state: current values and the current error map.

use std::collections::BTreeMap;
use std::fmt::Debug;

use serde::Serialize;

use crate::validation::{validate, ErrorMap, FieldError, FieldRules};

/// Logged in place of every secret value, whatever its length.
pub const SECRET_MASK: &str = "********";

/// Current field values keyed by field.
pub type FormValues<K> = BTreeMap<K, String>;

/// Closed set of fields belonging to one form.
pub trait FormKey: Copy + Ord + Debug + 'static {
    /// Every field, in display order.
    const ALL: &'static [Self];

    /// Stable machine name, used for DOM names and log summaries.
    fn name(self) -> &'static str;

    /// User-facing label, used in error messages.
    fn label(self) -> &'static str;

    /// Whether the value must be redacted from logs.
    fn is_secret(self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of an explicit submit.
pub enum SubmitOutcome {
    /// Every rule passed.
    Accepted,
    /// At least one field failed.
    Rejected {
        /// Number of fields with an error.
        error_count: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Loggable snapshot of an accepted submission, secrets redacted.
pub struct SubmissionSummary {
    /// Form name.
    pub form: &'static str,
    /// Field values by machine name.
    pub fields: BTreeMap<&'static str, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Authoritative values and errors for one form page.
pub struct FormState<K: FormKey> {
    values: FormValues<K>,
    errors: ErrorMap<K>,
}

impl<K: FormKey> Default for FormState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: FormKey> FormState<K> {
    /// Every field present with an empty value and no errors.
    pub fn new() -> Self {
        Self {
            values: K::ALL.iter().map(|key| (*key, String::new())).collect(),
            errors: ErrorMap::new(),
        }
    }

    /// Current value of `key`.
    pub fn value(&self, key: K) -> &str {
        self.values.get(&key).map(String::as_str).unwrap_or_default()
    }

    /// All current values.
    pub fn values(&self) -> &FormValues<K> {
        &self.values
    }

    /// Replaces `key`'s value and drops any error it had.
    ///
    /// Errors are cleared optimistically; the new value is not re-checked
    /// until the next [`FormState::submit`].
    pub fn set_value(&mut self, key: K, value: impl Into<String>) {
        self.values.insert(key, value.into());
        self.errors.remove(&key);
    }

    /// Current error for `key`.
    pub fn error(&self, key: K) -> Option<&FieldError> {
        self.errors.get(&key)
    }

    /// All current errors.
    pub fn errors(&self) -> &ErrorMap<K> {
        &self.errors
    }

    /// Replaces the whole error map.
    pub fn replace_errors(&mut self, errors: ErrorMap<K>) {
        self.errors = errors;
    }

    /// True when no field has an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Validates current values against `schema` and stores the result.
    pub fn submit(&mut self, schema: &[FieldRules<K>]) -> SubmitOutcome {
        self.replace_errors(validate(schema, &self.values));
        match self.errors.len() {
            0 => SubmitOutcome::Accepted,
            error_count => SubmitOutcome::Rejected { error_count },
        }
    }

    /// Back to empty values and no errors.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Snapshot for logging, with secret fields masked.
    pub fn summary(&self, form: &'static str) -> SubmissionSummary {
        let fields = self
            .values
            .iter()
            .map(|(key, value)| {
                let shown = if key.is_secret() {
                    SECRET_MASK.to_string()
                } else {
                    value.clone()
                };
                (key.name(), shown)
            })
            .collect();
        SubmissionSummary { form, fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::SignInField;
    use crate::validation::Rule;
    use pretty_assertions::assert_eq;

    fn schema() -> Vec<FieldRules<SignInField>> {
        vec![
            FieldRules::new(SignInField::Email, &[Rule::Required, Rule::Email]),
            FieldRules::new(SignInField::Password, &[Rule::Required, Rule::MinLength(6)]),
        ]
    }

    #[test]
    fn new_state_is_pristine() {
        let state = FormState::<SignInField>::new();
        assert_eq!(state.value(SignInField::Email), "");
        assert_eq!(state.value(SignInField::Password), "");
        assert!(state.is_valid());
    }

    #[test]
    fn typing_clears_only_that_fields_error() {
        let mut state = FormState::<SignInField>::new();
        assert_eq!(
            state.submit(&schema()),
            SubmitOutcome::Rejected { error_count: 2 }
        );

        state.set_value(SignInField::Email, "j");
        assert_eq!(state.error(SignInField::Email), None);
        assert!(state.error(SignInField::Password).is_some());
    }

    #[test]
    fn resubmit_replaces_stale_errors() {
        let mut state = FormState::<SignInField>::new();
        state.set_value(SignInField::Email, "john");
        state.set_value(SignInField::Password, "12345");
        assert_eq!(
            state.submit(&schema()),
            SubmitOutcome::Rejected { error_count: 2 }
        );

        state.set_value(SignInField::Email, "john@example.com");
        state.set_value(SignInField::Password, "123456");
        assert_eq!(state.submit(&schema()), SubmitOutcome::Accepted);
        assert!(state.errors().is_empty());
    }

    #[test]
    fn reset_clears_values_and_errors() {
        let mut state = FormState::<SignInField>::new();
        state.set_value(SignInField::Email, "john");
        state.submit(&schema());
        state.reset();
        assert_eq!(state, FormState::new());
    }

    #[test]
    fn last_write_wins() {
        let mut state = FormState::<SignInField>::new();
        state.set_value(SignInField::Email, "a@b.co");
        state.set_value(SignInField::Email, "c@d.co");
        assert_eq!(state.value(SignInField::Email), "c@d.co");
    }

    #[test]
    fn summary_masks_secrets() {
        let mut state = FormState::<SignInField>::new();
        state.set_value(SignInField::Email, "john@example.com");
        state.set_value(SignInField::Password, "hunter2");
        let summary = state.summary("sign-in");
        assert_eq!(summary.fields.get("email").map(String::as_str), Some("john@example.com"));
        assert_eq!(summary.fields.get("password").map(String::as_str), Some(SECRET_MASK));
    }

    #[test]
    fn mask_does_not_reveal_secret_length() {
        let masked = |password: &str| {
            let mut state = FormState::<SignInField>::new();
            state.set_value(SignInField::Password, password);
            state.summary("sign-in").fields.get("password").cloned()
        };
        assert_eq!(masked("a"), masked("correct horse battery staple"));
        assert_eq!(masked("hunter2").as_deref(), Some("********"));
    }
}
