use leptos::ev::SubmitEvent;

use super::*;
use crate::forms::{sign_in_schema, SignInField};
use crate::policy::FormPolicy;

#[component]
/// Email and password sign-in. Validation is local; accepted submissions are only logged.
pub fn SignInPage() -> impl IntoView {
    let policy = use_context::<FormPolicy>().unwrap_or_default();
    let schema = store_value(sign_in_schema(&policy));
    let form = FormBinding::<SignInField>::new();
    let remember = create_rw_signal(false);
    let outcome = create_rw_signal(None::<SubmitOutcome>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let result = schema.with_value(|schema| form.submit("sign-in", schema));
        if result == Some(SubmitOutcome::Accepted) {
            logging::log!("sign-in remember me: {}", remember.get_untracked());
        }
        outcome.set(result);
    };

    let email = SignInField::Email;
    let password = SignInField::Password;

    view! {
        <Card title="Sign in" subtitle="Welcome back. Enter your details to continue." layout_class="auth-card">
            <form class="auth-form" novalidate=true on:submit=on_submit>
                <Stack gap=LayoutGap::Md>
                    <Field
                        kind=FieldKind::email()
                        name=email.name()
                        label=email.label()
                        placeholder="you@example.com"
                        autocomplete="email"
                        left_icon=IconName::Mail
                        required=true
                        full_width=true
                        value=form.value(email)
                        error=form.error(email)
                        on_input=form.on_input(email)
                    />
                    <Field
                        kind=FieldKind::password()
                        name=password.name()
                        label=password.label()
                        placeholder="Your password"
                        autocomplete="current-password"
                        left_icon=IconName::Lock
                        helper_text=format!("At least {} characters", policy.sign_in_password_min)
                        required=true
                        full_width=true
                        value=form.value(password)
                        error=form.error(password)
                        on_input=form.on_input(password)
                    />
                    <label class="auth-remember">
                        <input
                            type="checkbox"
                            name="remember"
                            prop:checked=move || remember.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <Button
                        button_type=ButtonType::Submit
                        full_width=true
                        trailing_icon=IconName::ArrowRight
                    >
                        "Sign in"
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        full_width=true
                        on_click=Callback::new(move |_| {
                            form.reset();
                            remember.set(false);
                            outcome.set(None);
                        })
                    >
                        "Reset"
                    </Button>
                    <SubmitStatus
                        outcome
                        accepted="Signed in locally. The submitted values were logged to the console."
                    />
                </Stack>
            </form>
        </Card>
    }
}
