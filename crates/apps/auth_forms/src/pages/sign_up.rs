use leptos::ev::SubmitEvent;

use super::*;
use crate::forms::{sign_up_schema, SignUpField};
use crate::policy::FormPolicy;

#[component]
/// Account creation form: name, email, and a scored password.
pub fn SignUpPage() -> impl IntoView {
    let policy = use_context::<FormPolicy>().unwrap_or_default();
    let schema = store_value(sign_up_schema(&policy));
    let form = FormBinding::<SignUpField>::new();
    let outcome = create_rw_signal(None::<SubmitOutcome>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        outcome.set(schema.with_value(|schema| form.submit("sign-up", schema)));
    };

    let name = SignUpField::Name;
    let email = SignUpField::Email;
    let password = SignUpField::Password;

    view! {
        <Card title="Create an account" subtitle="It only takes a minute." layout_class="auth-card">
            <form class="auth-form" novalidate=true on:submit=on_submit>
                <Stack gap=LayoutGap::Md>
                    <Field
                        name=name.name()
                        label=name.label()
                        placeholder="Jane Doe"
                        autocomplete="name"
                        left_icon=IconName::User
                        required=true
                        full_width=true
                        value=form.value(name)
                        error=form.error(name)
                        on_input=form.on_input(name)
                    />
                    <Field
                        kind=FieldKind::email()
                        name=email.name()
                        label=email.label()
                        placeholder="you@example.com"
                        autocomplete="email"
                        left_icon=IconName::Mail
                        helper_text="We'll never share your email."
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
                        placeholder="Create a password"
                        autocomplete="new-password"
                        left_icon=IconName::Lock
                        helper_text=format!("At least {} characters", policy.sign_up_password_min)
                        show_strength=true
                        required=true
                        full_width=true
                        value=form.value(password)
                        error=form.error(password)
                        on_input=form.on_input(password)
                    />
                    <Button
                        button_type=ButtonType::Submit
                        variant=ButtonVariant::Gradient
                        full_width=true
                    >
                        "Create account"
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
                    <SubmitStatus
                        outcome
                        accepted="Account created locally. The submitted values were logged to the console."
                    />
                </Stack>
            </form>
        </Card>
    }
}
