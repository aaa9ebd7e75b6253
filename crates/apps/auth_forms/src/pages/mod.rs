//! Form pages and the signal plumbing they share.

use form_ui::prelude::*;
use form_ui::Text;
use leptos::*;

use crate::forms::report_submission;
use crate::state::{FormKey, FormState, SubmitOutcome};
use crate::validation::FieldRules;

mod showcase;
mod sign_in;
mod sign_up;
mod strength;

pub use showcase::ShowcasePage;
pub use sign_in::SignInPage;
pub use sign_up::SignUpPage;
pub use strength::PasswordStrengthPage;

/// Reactive handle on one page's [`FormState`].
///
/// Fields read values and errors through derived signals and write back
/// through `on_input`; the page never reads a field's own interaction state.
pub(crate) struct FormBinding<K: FormKey> {
    state: RwSignal<FormState<K>>,
}

impl<K: FormKey> Clone for FormBinding<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: FormKey> Copy for FormBinding<K> {}

impl<K: FormKey> FormBinding<K> {
    pub(crate) fn new() -> Self {
        Self {
            state: create_rw_signal(FormState::new()),
        }
    }

    pub(crate) fn value(self, key: K) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|form| form.value(key).to_string()))
    }

    pub(crate) fn error(self, key: K) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|form| form.error(key).map(ToString::to_string)))
    }

    pub(crate) fn on_input(self, key: K) -> Callback<web_sys::Event> {
        let state = self.state;
        Callback::new(move |ev| {
            let value = event_target_value(&ev);
            state.update(|form| form.set_value(key, value));
        })
    }

    /// Validates, stores the new error map, and logs the outcome.
    pub(crate) fn submit(self, form_name: &'static str, schema: &[FieldRules<K>]) -> Option<SubmitOutcome> {
        let outcome = self.state.try_update(|form| form.submit(schema))?;
        self.state
            .with_untracked(|form| report_submission(form_name, form, outcome));
        Some(outcome)
    }

    pub(crate) fn reset(self) {
        self.state.update(FormState::reset);
    }
}

/// Copy shown after a submit.
pub(crate) fn outcome_message(outcome: SubmitOutcome, accepted: &str) -> String {
    match outcome {
        SubmitOutcome::Accepted => accepted.to_string(),
        SubmitOutcome::Rejected { error_count: 1 } => {
            "Please fix the highlighted field and try again.".to_string()
        }
        SubmitOutcome::Rejected { error_count } => {
            format!("Please fix the {error_count} highlighted fields and try again.")
        }
    }
}

#[component]
/// Result line under a form.
pub(crate) fn SubmitStatus(
    #[prop(into)] outcome: Signal<Option<SubmitOutcome>>,
    accepted: &'static str,
) -> impl IntoView {
    move || {
        outcome.get().map(|outcome| {
            let tone = match outcome {
                SubmitOutcome::Accepted => TextTone::Success,
                SubmitOutcome::Rejected { .. } => TextTone::Danger,
            };
            view! { <Text tone>{outcome_message(outcome, accepted)}</Text> }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_copy() {
        assert_eq!(outcome_message(SubmitOutcome::Accepted, "Done"), "Done");
        assert_eq!(
            outcome_message(SubmitOutcome::Rejected { error_count: 1 }, "Done"),
            "Please fix the highlighted field and try again."
        );
        assert_eq!(
            outcome_message(SubmitOutcome::Rejected { error_count: 3 }, "Done"),
            "Please fix the 3 highlighted fields and try again."
        );
    }
}
