//! Field sets and rule schemas for each form page.

use leptos::logging;
use serde::Serialize;

use crate::policy::FormPolicy;
use crate::state::{FormKey, FormState, SubmitOutcome};
use crate::validation::{FieldRules, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
/// Sign-in form fields.
pub enum SignInField {
    /// Account email.
    Email,
    /// Account password.
    Password,
}

impl FormKey for SignInField {
    const ALL: &'static [Self] = &[Self::Email, Self::Password];

    fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }

    fn is_secret(self) -> bool {
        self == Self::Password
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
/// Sign-up form fields.
pub enum SignUpField {
    /// Display name.
    Name,
    /// Account email.
    Email,
    /// New password.
    Password,
}

impl FormKey for SignUpField {
    const ALL: &'static [Self] = &[Self::Name, Self::Email, Self::Password];

    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }

    fn is_secret(self) -> bool {
        self == Self::Password
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
/// Strength-meter form fields.
pub enum StrengthField {
    /// New password, scored live.
    Password,
    /// Repeat of the new password.
    Confirm,
}

impl FormKey for StrengthField {
    const ALL: &'static [Self] = &[Self::Password, Self::Confirm];

    fn name(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Confirm => "confirm",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Password => "Password",
            Self::Confirm => "Confirm password",
        }
    }

    fn is_secret(self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
/// Demo contact form fields.
pub enum ContactField {
    /// Short subject line.
    Subject,
    /// Multi-line message body.
    Message,
}

impl FormKey for ContactField {
    const ALL: &'static [Self] = &[Self::Subject, Self::Message];

    fn name(self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

/// Email then password.
pub fn sign_in_schema(policy: &FormPolicy) -> Vec<FieldRules<SignInField>> {
    vec![
        FieldRules::new(SignInField::Email, &[Rule::Required, Rule::Email]),
        FieldRules::new(
            SignInField::Password,
            &[Rule::Required, Rule::MinLength(policy.sign_in_password_min)],
        ),
    ]
}

/// Name, email, then password.
pub fn sign_up_schema(policy: &FormPolicy) -> Vec<FieldRules<SignUpField>> {
    vec![
        FieldRules::new(
            SignUpField::Name,
            &[Rule::Required, Rule::MinLength(policy.name_min)],
        ),
        FieldRules::new(SignUpField::Email, &[Rule::Required, Rule::Email]),
        FieldRules::new(
            SignUpField::Password,
            &[Rule::Required, Rule::MinLength(policy.sign_up_password_min)],
        ),
    ]
}

/// Password under the stricter minimum, then its confirmation.
pub fn strength_schema(policy: &FormPolicy) -> Vec<FieldRules<StrengthField>> {
    vec![
        FieldRules::new(
            StrengthField::Password,
            &[Rule::Required, Rule::MinLength(policy.strength_password_min)],
        ),
        FieldRules::new(
            StrengthField::Confirm,
            &[Rule::Required, Rule::Matches(StrengthField::Password)],
        ),
    ]
}

/// Subject and a message of at least `message_min` characters.
pub fn contact_schema(policy: &FormPolicy) -> Vec<FieldRules<ContactField>> {
    vec![
        FieldRules::new(ContactField::Subject, &[Rule::Required]),
        FieldRules::new(
            ContactField::Message,
            &[Rule::Required, Rule::MinLength(policy.message_min)],
        ),
    ]
}

/// Logs a submit result. Nothing leaves the page.
pub fn report_submission<K: FormKey>(
    form: &'static str,
    state: &FormState<K>,
    outcome: SubmitOutcome,
) {
    match outcome {
        SubmitOutcome::Accepted => match serde_json::to_string(&state.summary(form)) {
            Ok(summary) => logging::log!("{form} accepted: {summary}"),
            Err(err) => logging::warn!("{form} summary serialize failed: {err}"),
        },
        SubmitOutcome::Rejected { error_count } => {
            logging::log!("{form} rejected: {error_count} field error(s)");
        }
    }
}
