//! Sign-in, sign-up, password-strength, and component demo pages.
//!
//! Each page owns a [`FormState`] of values and errors, pushes both down into
//! `form_ui` fields, and validates explicitly on submit with the pure
//! [`validate`] function. Nothing is sent anywhere: accepted submissions are
//! logged to the browser console with secrets redacted.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod forms;
mod pages;
mod policy;
mod state;
mod validation;

pub use forms::{
    contact_schema, report_submission, sign_in_schema, sign_up_schema, strength_schema,
    ContactField, SignInField, SignUpField, StrengthField,
};
pub use pages::{PasswordStrengthPage, ShowcasePage, SignInPage, SignUpPage};
pub use policy::{FormPolicy, PolicyError};
pub use state::{FormKey, FormState, FormValues, SubmissionSummary, SubmitOutcome, SECRET_MASK};
pub use validation::{check_field, is_email, validate, ErrorMap, FieldError, FieldRules, Rule};
