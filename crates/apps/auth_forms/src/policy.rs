//! Minimum-length policy shared by every form validator.

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const EMBEDDED_POLICY: &str = include_str!("../forms.toml");

#[derive(Debug, Error)]
/// Reasons a form policy document is rejected.
pub enum PolicyError {
    /// The document is not valid TOML or has mistyped keys.
    #[error("form policy parse failed: {0}")]
    Parse(#[from] toml::de::Error),
    /// A minimum was configured as zero.
    #[error("{field} must be greater than zero")]
    ZeroMinimum {
        /// Offending key.
        field: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Minimum lengths, in characters, applied by the form validators.
pub struct FormPolicy {
    /// Password minimum on the sign-in form.
    pub sign_in_password_min: usize,
    /// Password minimum on the sign-up form.
    pub sign_up_password_min: usize,
    /// Password minimum on the strength-meter form.
    pub strength_password_min: usize,
    /// Display-name minimum on the sign-up form.
    pub name_min: usize,
    /// Message minimum on the demo contact form.
    pub message_min: usize,
}

impl Default for FormPolicy {
    fn default() -> Self {
        Self {
            sign_in_password_min: 6,
            sign_up_password_min: 6,
            strength_password_min: 8,
            name_min: 2,
            message_min: 10,
        }
    }
}

impl FormPolicy {
    /// Parses and checks a policy document. Keys left out keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::Parse`] for malformed TOML or unknown keys and
    /// [`PolicyError::ZeroMinimum`] when any minimum is zero.
    pub fn from_toml_str(raw: &str) -> Result<Self, PolicyError> {
        let policy: Self = toml::from_str(raw)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Rejects zero minimums.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::ZeroMinimum`] naming the first zero key.
    pub fn validate(&self) -> Result<(), PolicyError> {
        let minimums = [
            ("sign_in_password_min", self.sign_in_password_min),
            ("sign_up_password_min", self.sign_up_password_min),
            ("strength_password_min", self.strength_password_min),
            ("name_min", self.name_min),
            ("message_min", self.message_min),
        ];
        match minimums.into_iter().find(|(_, min)| *min == 0) {
            Some((field, _)) => Err(PolicyError::ZeroMinimum { field }),
            None => Ok(()),
        }
    }

    /// Loads the policy bundled with the crate, falling back to defaults.
    pub fn load() -> Self {
        match Self::from_toml_str(EMBEDDED_POLICY) {
            Ok(policy) => policy,
            Err(err) => {
                logging::warn!("{err}; using default form policy");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_policy_matches_defaults() {
        assert_eq!(FormPolicy::from_toml_str(EMBEDDED_POLICY).ok(), Some(FormPolicy::default()));
        assert_eq!(FormPolicy::load(), FormPolicy::default());
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let policy = FormPolicy::from_toml_str("strength_password_min = 12").ok();
        assert_eq!(
            policy,
            Some(FormPolicy {
                strength_password_min: 12,
                ..FormPolicy::default()
            })
        );
    }

    #[test]
    fn zero_minimum_is_rejected() {
        let err = FormPolicy::from_toml_str("name_min = 0").err();
        assert!(matches!(err, Some(PolicyError::ZeroMinimum { field: "name_min" })));
    }

    #[test]
    fn unknown_key_is_a_parse_error() {
        let err = FormPolicy::from_toml_str("password_min = 6").err();
        assert!(matches!(err, Some(PolicyError::Parse(_))));
    }
}
