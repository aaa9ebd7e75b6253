use form_app_auth::{
    sign_in_schema, sign_up_schema, validate, FieldError, FormPolicy, FormState, SignInField,
    SignUpField, SubmitOutcome,
};
use pretty_assertions::assert_eq;

#[test]
fn empty_sign_up_reports_one_error_per_field() {
    let policy = FormPolicy::default();
    let mut form = FormState::<SignUpField>::new();
    form.set_value(SignUpField::Password, "abc");

    let outcome = form.submit(&sign_up_schema(&policy));

    assert_eq!(outcome, SubmitOutcome::Rejected { error_count: 3 });
    assert_eq!(
        form.error(SignUpField::Name),
        Some(&FieldError::MissingRequired { label: "Full name" })
    );
    assert_eq!(
        form.error(SignUpField::Email),
        Some(&FieldError::MissingRequired { label: "Email" })
    );
    assert_eq!(
        form.error(SignUpField::Password),
        Some(&FieldError::TooShort {
            label: "Password",
            min: 6
        })
    );
}

#[test]
fn typing_clears_error_before_revalidation() {
    let policy = FormPolicy::default();
    let mut form = FormState::<SignUpField>::new();
    form.submit(&sign_up_schema(&policy));
    assert_eq!(form.errors().len(), 3);

    // One character is still too short for a name, but errors only return on submit.
    form.set_value(SignUpField::Name, "J");
    assert_eq!(form.error(SignUpField::Name), None);
    assert_eq!(form.errors().len(), 2);

    form.submit(&sign_up_schema(&policy));
    assert_eq!(
        form.error(SignUpField::Name),
        Some(&FieldError::TooShort {
            label: "Full name",
            min: 2
        })
    );
}

#[test]
fn accepted_sign_up_leaves_no_errors() {
    let policy = FormPolicy::default();
    let mut form = FormState::<SignUpField>::new();
    form.set_value(SignUpField::Name, "John Doe");
    form.set_value(SignUpField::Email, "john@example.com");
    form.set_value(SignUpField::Password, "s3cret!");

    assert_eq!(form.submit(&sign_up_schema(&policy)), SubmitOutcome::Accepted);
    assert!(form.is_valid());

    let summary = serde_json::to_value(form.summary("sign-up")).ok();
    assert_eq!(
        summary,
        Some(serde_json::json!({
            "form": "sign-up",
            "fields": {
                "email": "john@example.com",
                "name": "John Doe",
                "password": "********"
            }
        }))
    );
}

#[test]
fn validation_is_a_pure_function_of_values() {
    let policy = FormPolicy::default();
    let mut form = FormState::<SignInField>::new();
    form.set_value(SignInField::Email, "john@example.com");
    form.set_value(SignInField::Password, "12345");

    let schema = sign_in_schema(&policy);
    let first = validate(&schema, form.values());
    let second = validate(&schema, form.values());
    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
    assert!(first.contains_key(&SignInField::Password));
}

#[test]
fn stricter_policy_flows_into_schema() {
    let policy = FormPolicy::from_toml_str("sign_in_password_min = 10").ok();
    let Some(policy) = policy else {
        panic!("policy should parse");
    };
    let mut form = FormState::<SignInField>::new();
    form.set_value(SignInField::Email, "john@example.com");
    form.set_value(SignInField::Password, "123456789");
    assert_eq!(
        form.submit(&sign_in_schema(&policy)),
        SubmitOutcome::Rejected { error_count: 1 }
    );
}
