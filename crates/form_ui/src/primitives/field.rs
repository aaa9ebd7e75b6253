use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Native kinds a single-line field can take.
pub enum InputType {
    /// Plain text.
    Text,
    /// Email address.
    Email,
    /// Masked password with a visibility toggle.
    Password,
    /// Numeric entry.
    Number,
    /// Telephone number.
    Tel,
    /// URL.
    Url,
    /// Search query.
    Search,
}

impl Default for InputType {
    fn default() -> Self {
        Self::Text
    }
}

impl InputType {
    /// Every input type.
    pub const ALL: [Self; 7] = [
        Self::Text,
        Self::Email,
        Self::Password,
        Self::Number,
        Self::Tel,
        Self::Url,
        Self::Search,
    ];

    /// HTML `type` attribute value.
    pub fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Search => "search",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which control a [`Field`] renders. Exactly one shape is active per field.
pub enum FieldKind {
    /// `<input>` of the given type.
    SingleLine {
        /// Native input type.
        input_type: InputType,
    },
    /// `<textarea>`.
    MultiLine {
        /// Visible row count.
        rows: u32,
        /// Whether the user may resize the control.
        resizable: bool,
    },
}

impl Default for FieldKind {
    fn default() -> Self {
        Self::text()
    }
}

impl FieldKind {
    /// Single-line plain text.
    pub const fn text() -> Self {
        Self::single_line(InputType::Text)
    }

    /// Single-line email.
    pub const fn email() -> Self {
        Self::single_line(InputType::Email)
    }

    /// Single-line masked password.
    pub const fn password() -> Self {
        Self::single_line(InputType::Password)
    }

    /// Single-line field of `input_type`.
    pub const fn single_line(input_type: InputType) -> Self {
        Self::SingleLine { input_type }
    }

    /// Resizable multi-line field showing `rows` rows.
    pub const fn multi_line(rows: u32) -> Self {
        Self::MultiLine {
            rows,
            resizable: true,
        }
    }

    /// Element this kind renders as.
    pub fn element(self) -> ControlElement {
        match self {
            Self::SingleLine { .. } => ControlElement::Input,
            Self::MultiLine { .. } => ControlElement::TextArea,
        }
    }

    /// Declared input type. `None` for multi-line kinds.
    pub fn input_type(self) -> Option<InputType> {
        match self {
            Self::SingleLine { input_type } => Some(input_type),
            Self::MultiLine { .. } => None,
        }
    }

    /// Row count and resize flag. `None` for single-line kinds.
    pub fn text_area(self) -> Option<(u32, bool)> {
        match self {
            Self::SingleLine { .. } => None,
            Self::MultiLine { rows, resizable } => Some((rows, resizable)),
        }
    }

    /// True only for the single-line password kind.
    pub fn is_password(self) -> bool {
        matches!(
            self,
            Self::SingleLine {
                input_type: InputType::Password
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Rendered DOM control.
pub enum ControlElement {
    /// `<input>`.
    Input,
    /// `<textarea>`.
    TextArea,
}

impl ControlElement {
    fn token(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::TextArea => "textarea",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Transient per-field interaction state. Never shared with the owning page.
pub struct InteractionState {
    /// The control holds focus.
    pub focused: bool,
    /// Password characters are shown in plain text.
    pub password_visible: bool,
}

impl InteractionState {
    /// Marks the control focused.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Marks the control blurred.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Flips password visibility.
    pub fn toggle_password(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// Type to render for a field declared as `declared`.
    ///
    /// Only a password field is affected: it renders as text while visible.
    pub fn effective_input_type(self, declared: InputType) -> InputType {
        match declared {
            InputType::Password if self.password_visible => InputType::Text,
            other => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Text shown under a field.
pub struct FieldMessage {
    /// Message copy.
    pub text: String,
    /// Whether the message reports an error rather than help.
    pub is_error: bool,
}

/// Picks the message to show under a field. A non-empty error wins over helper text.
pub fn field_message(error: Option<&str>, helper: Option<&str>) -> Option<FieldMessage> {
    fn non_empty(text: Option<&str>) -> Option<&str> {
        text.filter(|text| !text.trim().is_empty())
    }

    if let Some(error) = non_empty(error) {
        return Some(FieldMessage {
            text: error.to_string(),
            is_error: true,
        });
    }
    non_empty(helper).map(|helper| FieldMessage {
        text: helper.to_string(),
        is_error: false,
    })
}

/// DOM id for a field: the explicit `id`, else `field-<name>`.
pub fn field_id(id: Option<String>, name: Option<&str>) -> Option<String> {
    id.or_else(|| name.map(|name| format!("field-{name}")))
}

/// `aria-describedby` target. Only set while a message element is rendered.
pub fn described_by(message_id: Option<&str>, has_message: bool) -> Option<String> {
    message_id.filter(|_| has_message).map(str::to_string)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Occupant of a field's trailing slot.
pub enum TrailingSlot {
    /// Password visibility toggle. A right decoration is ignored.
    PasswordToggle,
    /// Caller's right decoration or icon.
    Decoration,
    /// Nothing.
    Empty,
}

/// Resolves the trailing slot for `kind` given whether a right decoration was supplied.
pub fn trailing_slot(kind: FieldKind, has_right: bool) -> TrailingSlot {
    if kind.is_password() {
        TrailingSlot::PasswordToggle
    } else if has_right {
        TrailingSlot::Decoration
    } else {
        TrailingSlot::Empty
    }
}

fn decoration_slot(
    slot: &'static str,
    decoration: ViewFn,
    on_click: Option<Callback<MouseEvent>>,
) -> View {
    match on_click {
        Some(on_click) => view! {
            <button
                type="button"
                class="ui-field-decoration"
                data-ui-slot=slot
                data-ui-interactive="true"
                on:click=move |ev| on_click.call(ev)
            >
                {decoration.run()}
            </button>
        }
        .into_view(),
        None => view! {
            <span class="ui-field-decoration" data-ui-slot=slot data-ui-interactive="false">
                {decoration.run()}
            </span>
        }
        .into_view(),
    }
}

#[component]
/// Labeled form field that renders a single-line `<input>` or a multi-line
/// `<textarea>` depending on `kind`.
///
/// The parent owns `value` and `error`; the field owns only focus and password
/// visibility. Native `input`/`focus`/`blur` events are forwarded unchanged.
/// Password fields get an eye toggle in the trailing slot and, with
/// `show_strength`, a strength meter under the control.
pub fn Field(
    #[prop(default = FieldKind::text())] kind: FieldKind,
    #[prop(default = FieldVariant::Default)] variant: FieldVariant,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] left_icon: Option<IconName>,
    #[prop(optional)] right_icon: Option<IconName>,
    #[prop(optional, into)] left_decoration: Option<ViewFn>,
    #[prop(optional, into)] right_decoration: Option<ViewFn>,
    #[prop(optional)] on_left_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_right_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] show_strength: bool,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
) -> impl IntoView {
    let interaction = create_rw_signal(InteractionState::default());
    let value = Signal::derive(move || value.get());
    let error = Signal::derive(move || error.get().filter(|error| !error.trim().is_empty()));
    let disabled = Signal::derive(move || disabled.get());

    let icon_size = size.icon_size();
    let icon_view = move |icon: IconName| ViewFn::from(move || view! { <Icon icon size=icon_size /> });
    let leading = left_decoration.or_else(|| left_icon.map(icon_view));
    let trailing = right_decoration.or_else(|| right_icon.map(icon_view));
    let is_password = kind.is_password();
    let trailing_slot = trailing_slot(kind, trailing.is_some());
    let has_leading = leading.is_some();
    let has_trailing = trailing_slot != TrailingSlot::Empty;

    let style = Signal::derive(move || FieldStyle {
        variant,
        size,
        full_width,
        has_error: error.with(Option::is_some),
        has_leading,
        has_trailing,
        disabled: disabled.get(),
        focused: interaction.with(|state| state.focused),
    });

    let field_id = field_id(id, name.as_deref());
    let message_id = field_id.as_ref().map(|id| format!("{id}-message"));
    let message = Signal::derive(move || field_message(error.get().as_deref(), helper_text.as_deref()));
    let describedby = {
        let message_id = message_id.clone();
        Signal::derive(move || described_by(message_id.as_deref(), message.with(Option::is_some)))
    };

    let handle_input = move |ev: web_sys::Event| {
        if let Some(on_input) = on_input.as_ref() {
            on_input.call(ev);
        }
    };
    let handle_focus = move |ev: FocusEvent| {
        interaction.update(InteractionState::focus);
        if let Some(on_focus) = on_focus.as_ref() {
            on_focus.call(ev);
        }
    };
    let handle_blur = move |ev: FocusEvent| {
        interaction.update(InteractionState::blur);
        if let Some(on_blur) = on_blur.as_ref() {
            on_blur.call(ev);
        }
    };

    let control = match kind.element() {
        ControlElement::Input => {
            let input_type = kind.input_type().unwrap_or_default();
            view! {
                <input
                    class="ui-field-control"
                    id=field_id.clone()
                    name=name.clone()
                    type=move || {
                        interaction
                            .with(|state| state.effective_input_type(input_type))
                            .token()
                    }
                    placeholder=placeholder.clone()
                    autocomplete=autocomplete
                    required=required
                    aria-invalid=move || bool_token(error.with(Option::is_some))
                    aria-describedby=move || describedby.get()
                    prop:value=move || value.get()
                    disabled=move || disabled.get()
                    data-ui-slot="control"
                    on:input=handle_input
                    on:focus=handle_focus
                    on:blur=handle_blur
                />
            }
            .into_view()
        }
        ControlElement::TextArea => {
            let (rows, resizable) = kind.text_area().unwrap_or((1, false));
            view! {
                <textarea
                    class="ui-field-control"
                    id=field_id.clone()
                    name=name.clone()
                    rows=rows
                    placeholder=placeholder.clone()
                    required=required
                    aria-invalid=move || bool_token(error.with(Option::is_some))
                    aria-describedby=move || describedby.get()
                    prop:value=move || value.get()
                    disabled=move || disabled.get()
                    data-ui-slot="control"
                    data-ui-resizable=bool_token(resizable)
                    on:input=handle_input
                    on:focus=handle_focus
                    on:blur=handle_blur
                ></textarea>
            }
            .into_view()
        }
    };

    let leading_view = leading.map(|decoration| decoration_slot("leading", decoration, on_left_click));
    let trailing_view = match trailing_slot {
        TrailingSlot::PasswordToggle => {
            let visible = move || interaction.with(|state| state.password_visible);
            Some(
                view! {
                    <button
                        type="button"
                        class="ui-field-decoration"
                        data-ui-slot="password-toggle"
                        data-ui-interactive="true"
                        aria-label=move || {
                            if visible() {
                                "Hide password"
                            } else {
                                "Show password"
                            }
                        }
                        aria-pressed=move || bool_token(visible())
                        disabled=move || disabled.get()
                        on:click=move |_| interaction.update(InteractionState::toggle_password)
                    >
                        {move || {
                            let icon = if visible() { IconName::EyeOff } else { IconName::Eye };
                            view! { <Icon icon size=icon_size /> }
                        }}
                    </button>
                }
                .into_view(),
            )
        }
        TrailingSlot::Decoration => {
            trailing.map(|decoration| decoration_slot("trailing", decoration, on_right_click))
        }
        TrailingSlot::Empty => None,
    };

    let label_view = label.map(|label| {
        view! {
            <label class="ui-field-label" for=field_id.clone()>
                {label}
                {required.then(|| view! { <span data-ui-slot="required" aria-hidden="true">"*"</span> })}
            </label>
        }
    });

    let strength_view = (show_strength && is_password).then(|| view! { <StrengthMeter value /> });

    view! {
        <div
            class=merge_layout_class("ui-field-root", full_width.then_some("ui-field-root--full-width"))
            data-ui-primitive="true"
            data-ui-kind="field"
            data-ui-control=kind.element().token()
        >
            {label_view}
            <div
                class=move || style.get().classes(layout_class)
                data-ui-variant=variant.token()
                data-ui-size=size.token()
                data-ui-state=move || style.get().state_token()
            >
                {leading_view}
                {control}
                {trailing_view}
            </div>
            {strength_view}
            {move || {
                message
                    .get()
                    .map(|message| {
                        let tone = if message.is_error { "danger" } else { "secondary" };
                        view! {
                            <p
                                class="ui-field-message"
                                id=message_id.clone()
                                role=message.is_error.then_some("alert")
                                data-ui-tone=tone
                            >
                                {message.is_error.then(|| view! { <Icon icon=IconName::Alert size=IconSize::Xs /> })}
                                {message.text}
                            </p>
                        }
                    })
            }}
        </div>
    }
}

#[component]
/// Score bar and label for a password value. Hidden while the value is empty.
pub fn StrengthMeter(#[prop(into)] value: Signal<String>) -> impl IntoView {
    let strength = Signal::derive(move || value.with(|value| PasswordStrength::estimate(value)));

    view! {
        <div
            class="ui-strength-meter"
            data-ui-primitive="true"
            data-ui-kind="strength-meter"
            data-ui-tone=move || strength.get().level.tone()
            data-ui-score=move || strength.get().score
            hidden=move || value.with(String::is_empty)
        >
            <div data-ui-slot="track">
                <div
                    data-ui-slot="fill"
                    style=move || format!("width: {}%;", strength.get().percent())
                ></div>
            </div>
            <span data-ui-slot="label">{move || strength.get().level.label()}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_single_line_type_renders_an_input() {
        for input_type in InputType::ALL {
            assert_eq!(
                FieldKind::single_line(input_type).element(),
                ControlElement::Input,
                "{input_type:?}"
            );
        }
    }

    #[test]
    fn multi_line_always_renders_a_textarea() {
        for (rows, resizable) in [(1, false), (4, true), (12, false)] {
            assert_eq!(
                FieldKind::MultiLine { rows, resizable }.element(),
                ControlElement::TextArea
            );
        }
        assert!(!FieldKind::multi_line(3).is_password());
    }

    #[test]
    fn only_single_line_password_is_password() {
        assert!(FieldKind::password().is_password());
        assert!(!FieldKind::email().is_password());
        assert!(!FieldKind::text().is_password());
    }

    #[test]
    fn toggle_parity_decides_masking() {
        let mut state = InteractionState::default();
        assert_eq!(state.effective_input_type(InputType::Password), InputType::Password);
        for toggles in 1..=6 {
            state.toggle_password();
            let expected = if toggles % 2 == 0 {
                InputType::Password
            } else {
                InputType::Text
            };
            assert_eq!(state.effective_input_type(InputType::Password), expected);
        }
    }

    #[test]
    fn visibility_does_not_change_other_types() {
        let state = InteractionState {
            focused: false,
            password_visible: true,
        };
        for input_type in InputType::ALL {
            if input_type != InputType::Password {
                assert_eq!(state.effective_input_type(input_type), input_type);
            }
        }
    }

    #[test]
    fn focus_and_blur_leave_visibility_alone() {
        let mut state = InteractionState::default();
        state.toggle_password();
        state.focus();
        assert!(state.focused);
        state.blur();
        assert!(!state.focused);
        assert!(state.password_visible);
    }

    #[test]
    fn error_takes_precedence_over_helper() {
        assert_eq!(
            field_message(Some("Email is required"), Some("We never share it")),
            Some(FieldMessage {
                text: "Email is required".to_string(),
                is_error: true,
            })
        );
    }

    #[test]
    fn helper_shown_when_error_is_blank() {
        assert_eq!(
            field_message(Some(""), Some("We never share it")),
            Some(FieldMessage {
                text: "We never share it".to_string(),
                is_error: false,
            })
        );
    }

    #[test]
    fn no_message_without_copy() {
        assert_eq!(field_message(None, None), None);
        assert_eq!(field_message(Some(" "), Some("")), None);
    }

    #[test]
    fn rendered_control_follows_the_active_shape() {
        let kinds = InputType::ALL
            .into_iter()
            .map(FieldKind::single_line)
            .chain([FieldKind::multi_line(4), FieldKind::MultiLine { rows: 2, resizable: false }]);
        for kind in kinds {
            match kind.element() {
                ControlElement::Input => {
                    assert!(kind.input_type().is_some(), "{kind:?}");
                    assert_eq!(kind.text_area(), None, "{kind:?}");
                }
                ControlElement::TextArea => {
                    assert_eq!(kind.input_type(), None, "{kind:?}");
                    assert!(kind.text_area().is_some(), "{kind:?}");
                }
            }
        }
        assert_eq!(FieldKind::MultiLine { rows: 2, resizable: false }.text_area(), Some((2, false)));
    }

    #[test]
    fn id_defaults_to_prefixed_name() {
        assert_eq!(field_id(None, Some("email")), Some("field-email".to_string()));
        assert_eq!(
            field_id(Some("login-email".to_string()), Some("email")),
            Some("login-email".to_string())
        );
        assert_eq!(field_id(None, None), None);
    }

    #[test]
    fn password_toggle_owns_the_trailing_slot() {
        assert_eq!(trailing_slot(FieldKind::password(), true), TrailingSlot::PasswordToggle);
        assert_eq!(trailing_slot(FieldKind::password(), false), TrailingSlot::PasswordToggle);
        assert_eq!(trailing_slot(FieldKind::email(), true), TrailingSlot::Decoration);
        assert_eq!(trailing_slot(FieldKind::text(), false), TrailingSlot::Empty);
        assert_eq!(trailing_slot(FieldKind::multi_line(3), true), TrailingSlot::Decoration);
    }

    #[test]
    fn description_only_points_at_a_rendered_message() {
        assert_eq!(
            described_by(Some("field-email-message"), true),
            Some("field-email-message".to_string())
        );
        assert_eq!(described_by(Some("field-email-message"), false), None);
        assert_eq!(described_by(None, true), None);
    }

    #[test]
    fn input_type_tokens_match_html() {
        assert_eq!(InputType::Tel.token(), "tel");
        assert_eq!(InputType::Url.token(), "url");
        assert_eq!(InputType::Search.token(), "search");
    }
}
