use leptos::ev::SubmitEvent;

use super::*;
use crate::forms::{strength_schema, StrengthField};
use crate::policy::FormPolicy;

fn score_summary(strength: PasswordStrength) -> String {
    match strength.level {
        StrengthLevel::Empty => "Start typing to see how strong your password is.".to_string(),
        level => format!("Score {}/100 ({})", strength.score, level.label()),
    }
}

#[component]
/// New-password form with a live strength meter and a confirmation field.
pub fn PasswordStrengthPage() -> impl IntoView {
    let policy = use_context::<FormPolicy>().unwrap_or_default();
    let schema = store_value(strength_schema(&policy));
    let form = FormBinding::<StrengthField>::new();
    let outcome = create_rw_signal(None::<SubmitOutcome>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        outcome.set(schema.with_value(|schema| form.submit("password-strength", schema)));
    };

    let password = StrengthField::Password;
    let confirm = StrengthField::Confirm;
    let password_value = form.value(password);

    view! {
        <Card
            title="Choose a strong password"
            subtitle="Mix upper and lower case, digits, and symbols. Twelve characters or more scores best."
            layout_class="auth-card"
        >
            <form class="auth-form" novalidate=true on:submit=on_submit>
                <Stack gap=LayoutGap::Md>
                    <Field
                        kind=FieldKind::password()
                        variant=FieldVariant::Filled
                        name=password.name()
                        label=password.label()
                        autocomplete="new-password"
                        left_icon=IconName::Lock
                        helper_text=format!("At least {} characters", policy.strength_password_min)
                        show_strength=true
                        required=true
                        full_width=true
                        value=password_value
                        error=form.error(password)
                        on_input=form.on_input(password)
                    />
                    <Text tone=TextTone::Secondary>
                        {move || password_value.with(|value| score_summary(PasswordStrength::estimate(value)))}
                    </Text>
                    <Field
                        kind=FieldKind::password()
                        variant=FieldVariant::Filled
                        name=confirm.name()
                        label=confirm.label()
                        autocomplete="new-password"
                        left_icon=IconName::Lock
                        required=true
                        full_width=true
                        value=form.value(confirm)
                        error=form.error(confirm)
                        on_input=form.on_input(confirm)
                    />
                    <Button button_type=ButtonType::Submit full_width=true leading_icon=IconName::Check>
                        "Save password"
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        full_width=true
                        on_click=Callback::new(move |_| {
                            form.reset();
                            outcome.set(None);
                        })
                    >
                        "Reset"
                    </Button>
                    <SubmitStatus outcome accepted="Password saved locally." />
                </Stack>
            </form>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_prompts_when_empty() {
        assert_eq!(
            score_summary(PasswordStrength::estimate("")),
            "Start typing to see how strong your password is."
        );
    }

    #[test]
    fn summary_reports_score_and_band() {
        assert_eq!(
            score_summary(PasswordStrength::estimate("Correct-Horse9")),
            "Score 100/100 (Strong)"
        );
        assert_eq!(score_summary(PasswordStrength::estimate("abc")), "Score 15/100 (Weak)");
    }
}
