use leptos::ev::SubmitEvent;

use super::*;
use crate::forms::{contact_schema, ContactField};
use crate::policy::FormPolicy;

fn local_value(initial: &str) -> (RwSignal<String>, Callback<web_sys::Event>) {
    let value = create_rw_signal(initial.to_string());
    let on_input = Callback::new(move |ev| value.set(event_target_value(&ev)));
    (value, on_input)
}

fn input_type_label(input_type: InputType) -> &'static str {
    match input_type {
        InputType::Text => "Text",
        InputType::Email => "Email",
        InputType::Password => "Password",
        InputType::Number => "Number",
        InputType::Tel => "Telephone",
        InputType::Url => "URL",
        InputType::Search => "Search",
    }
}

fn input_type_icon(input_type: InputType) -> Option<IconName> {
    match input_type {
        InputType::Email => Some(IconName::Mail),
        InputType::Password => Some(IconName::Lock),
        InputType::Tel => Some(IconName::Phone),
        InputType::Url => Some(IconName::Link),
        InputType::Search => Some(IconName::Search),
        InputType::Text | InputType::Number => None,
    }
}

#[component]
fn VariantSection() -> impl IntoView {
    let fields = FieldVariant::ALL
        .into_iter()
        .map(|variant| {
            let (value, on_input) = local_value("");
            view! {
                <Field
                    variant
                    label=variant.label()
                    placeholder=format!("{} field", variant.label())
                    value=Signal::derive(move || value.get())
                    on_input
                />
            }
        })
        .collect_view();

    view! {
        <Card title="Variants">
            <Stack>{fields}</Stack>
        </Card>
    }
}

#[component]
fn SizeSection() -> impl IntoView {
    let fields = ControlSize::ALL
        .into_iter()
        .map(|size| {
            let (value, on_input) = local_value("");
            view! {
                <Field
                    size
                    left_icon=IconName::User
                    placeholder=format!("Size {size:?}")
                    value=Signal::derive(move || value.get())
                    on_input
                />
            }
        })
        .collect_view();
    let buttons = ControlSize::ALL
        .into_iter()
        .map(|size| view! { <Button size>{format!("{size:?}")}</Button> })
        .collect_view();

    view! {
        <Card title="Sizes">
            <Stack>
                {fields}
                <Cluster gap=LayoutGap::Sm>{buttons}</Cluster>
            </Stack>
        </Card>
    }
}

#[component]
fn KindSection() -> impl IntoView {
    let single_line = InputType::ALL
        .into_iter()
        .map(|input_type| {
            let (value, on_input) = local_value("");
            match input_type_icon(input_type) {
                Some(icon) => view! {
                    <Field
                        kind=FieldKind::single_line(input_type)
                        label=input_type_label(input_type)
                        left_icon=icon
                        value=Signal::derive(move || value.get())
                        on_input
                    />
                }
                .into_view(),
                None => view! {
                    <Field
                        kind=FieldKind::single_line(input_type)
                        label=input_type_label(input_type)
                        value=Signal::derive(move || value.get())
                        on_input
                    />
                }
                .into_view(),
            }
        })
        .collect_view();

    let (resizable, on_resizable_input) = local_value("");
    let (fixed, on_fixed_input) = local_value("Rows are fixed and the handle is hidden.");
    let fixed_kind = FieldKind::MultiLine {
        rows: 3,
        resizable: false,
    };

    view! {
        <Card title="Field kinds" subtitle="Single-line input types and multi-line text areas">
            <Stack>
                {single_line}
                <Field
                    kind=FieldKind::multi_line(4)
                    label="Multi-line (resizable)"
                    placeholder="Tell us about yourself"
                    helper_text="Drag the corner to resize."
                    value=Signal::derive(move || resizable.get())
                    on_input=on_resizable_input
                />
                <Field
                    kind=fixed_kind
                    variant=FieldVariant::Outline
                    label="Multi-line (fixed)"
                    value=Signal::derive(move || fixed.get())
                    on_input=on_fixed_input
                />
            </Stack>
        </Card>
    }
}

#[component]
fn DecorationSection() -> impl IntoView {
    let (search, on_search_input) = local_value("leptos");
    let (site, on_site_input) = local_value("");

    view! {
        <Card title="Decorations" subtitle="Leading and trailing slots with optional click handlers">
            <Stack>
                <Field
                    kind=FieldKind::single_line(InputType::Search)
                    variant=FieldVariant::Filled
                    label="Search"
                    left_icon=IconName::Search
                    right_icon=IconName::Close
                    on_right_click=Callback::new(move |_| search.set(String::new()))
                    helper_text="The trailing cross clears the query."
                    value=Signal::derive(move || search.get())
                    on_input=on_search_input
                />
                <Field
                    kind=FieldKind::single_line(InputType::Url)
                    label="Website"
                    left_decoration=|| view! { <span data-ui-slot="prefix">"https://"</span> }
                    on_left_click=Callback::new(move |_| logging::log!("website prefix clicked"))
                    placeholder="example.com"
                    value=Signal::derive(move || site.get())
                    on_input=on_site_input
                />
            </Stack>
        </Card>
    }
}

#[component]
fn StateSection() -> impl IntoView {
    let (helper, on_helper_input) = local_value("");
    let (invalid, on_invalid_input) = local_value("john");
    let (both, on_both_input) = local_value("");
    let (focus_log, set_focus_log) = create_signal(String::from("Focus the field below."));

    view! {
        <Card title="States">
            <Stack>
                <Field
                    label="Disabled"
                    placeholder="Can't touch this"
                    disabled=true
                />
                <Field
                    label="Helper text"
                    helper_text="Helper text sits under the control."
                    value=Signal::derive(move || helper.get())
                    on_input=on_helper_input
                />
                <Field
                    kind=FieldKind::email()
                    label="Error"
                    left_icon=IconName::Mail
                    error=Signal::derive(move || {
                        invalid.with(|value| {
                            (!crate::validation::is_email(value))
                                .then(|| "Please enter a valid email address".to_string())
                        })
                    })
                    value=Signal::derive(move || invalid.get())
                    on_input=on_invalid_input
                />
                <Field
                    label="Error beats helper"
                    required=true
                    helper_text="You should never see this while the error is set."
                    error=Signal::derive(move || {
                        both.with(String::is_empty)
                            .then(|| "This field is required".to_string())
                    })
                    value=Signal::derive(move || both.get())
                    on_input=on_both_input
                />
                <Field
                    variant=FieldVariant::Gradient
                    label="Focus events"
                    full_width=true
                    on_focus=Callback::new(move |_| set_focus_log.set("Focused".to_string()))
                    on_blur=Callback::new(move |_| set_focus_log.set("Blurred".to_string()))
                />
                <Text tone=TextTone::Secondary>{move || focus_log.get()}</Text>
            </Stack>
        </Card>
    }
}

#[component]
fn ButtonSection() -> impl IntoView {
    let busy = create_rw_signal(false);
    let clicks = create_rw_signal(0u32);
    let count_click = Callback::new(move |_| clicks.update(|count| *count += 1));

    let variants = ButtonVariant::ALL
        .into_iter()
        .map(|variant| {
            view! {
                <Button variant loading=Signal::derive(move || busy.get()) on_click=count_click>
                    {variant.label()}
                </Button>
            }
        })
        .collect_view();

    view! {
        <Card title="Buttons" subtitle="Busy and disabled buttons drop clicks">
            <Stack>
                <Cluster gap=LayoutGap::Sm>{variants}</Cluster>
                <Cluster gap=LayoutGap::Sm>
                    <Button leading_icon=IconName::Check on_click=count_click>"With icon"</Button>
                    <Button variant=ButtonVariant::Secondary disabled=true on_click=count_click>
                        "Disabled"
                    </Button>
                    <Button
                        variant=ButtonVariant::Outline
                        on_click=Callback::new(move |_| busy.update(|busy| *busy = !*busy))
                    >
                        {move || if busy.get() { "Stop loading" } else { "Simulate loading" }}
                    </Button>
                </Cluster>
                <Text tone=TextTone::Secondary>
                    {move || format!("Accepted clicks: {}", clicks.get())}
                </Text>
            </Stack>
        </Card>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    let policy = use_context::<FormPolicy>().unwrap_or_default();
    let schema = store_value(contact_schema(&policy));
    let form = FormBinding::<ContactField>::new();
    let outcome = create_rw_signal(None::<SubmitOutcome>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        outcome.set(schema.with_value(|schema| form.submit("contact", schema)));
    };

    let subject = ContactField::Subject;
    let message = ContactField::Message;

    view! {
        <Card title="Contact form" subtitle="A multi-line field inside a validated form">
            <form class="auth-form" novalidate=true on:submit=on_submit>
                <Stack>
                    <Field
                        name=subject.name()
                        label=subject.label()
                        required=true
                        full_width=true
                        value=form.value(subject)
                        error=form.error(subject)
                        on_input=form.on_input(subject)
                    />
                    <Field
                        kind=FieldKind::multi_line(5)
                        name=message.name()
                        label=message.label()
                        helper_text=format!("At least {} characters", policy.message_min)
                        required=true
                        full_width=true
                        value=form.value(message)
                        error=form.error(message)
                        on_input=form.on_input(message)
                    />
                    <Cluster gap=LayoutGap::Sm>
                        <Button button_type=ButtonType::Submit>"Send"</Button>
                        <Button
                            variant=ButtonVariant::Ghost
                            on_click=Callback::new(move |_| {
                                form.reset();
                                outcome.set(None);
                            })
                        >
                            "Reset"
                        </Button>
                    </Cluster>
                    <SubmitStatus outcome accepted="Message logged to the console." />
                </Stack>
            </form>
        </Card>
    }
}

#[component]
/// Every field and button option on one page, plus a small validated form.
pub fn ShowcasePage() -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Lg layout_class="showcase">
            <Heading>"Form components"</Heading>
            <VariantSection />
            <SizeSection />
            <KindSection />
            <DecorationSection />
            <StateSection />
            <ButtonSection />
            <ContactSection />
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_input_type_has_a_label() {
        for input_type in InputType::ALL {
            assert!(!input_type_label(input_type).is_empty());
        }
    }

    #[test]
    fn plain_types_have_no_icon() {
        assert_eq!(input_type_icon(InputType::Text), None);
        assert_eq!(input_type_icon(InputType::Number), None);
        assert_eq!(input_type_icon(InputType::Search), Some(IconName::Search));
    }
}
