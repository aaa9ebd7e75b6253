use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// HTML `type` of a button.
pub enum ButtonType {
    /// Plain button; never submits.
    Button,
    /// Submits the owning form.
    Submit,
    /// Resets the owning form.
    Reset,
}

impl Default for ButtonType {
    fn default() -> Self {
        Self::Button
    }
}

impl ButtonType {
    fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

/// Whether a click should reach the caller's handler.
pub fn click_allowed(disabled: bool, loading: bool) -> bool {
    !disabled && !loading
}

#[component]
/// Shared action button with variant, size, and busy/disabled gating.
///
/// While `loading`, a spinner replaces the leading icon and clicks are dropped;
/// `disabled` drops clicks as well. The button holds no state of its own.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ControlSize::Md)] size: ControlSize,
    #[prop(default = ButtonType::Button)] button_type: ButtonType,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let disabled = Signal::derive(move || disabled.get());
    let loading = Signal::derive(move || loading.get());
    let style = Signal::derive(move || ButtonStyle {
        variant,
        size,
        full_width,
        disabled: disabled.get(),
        loading: loading.get(),
    });
    let icon_size = size.icon_size();

    view! {
        <button
            type=button_type.token()
            class=move || style.get().classes(layout_class)
            aria-label=aria_label
            aria-busy=move || bool_token(loading.get())
            disabled=move || !click_allowed(disabled.get(), loading.get())
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || style.get().state_token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if !click_allowed(disabled.get_untracked(), loading.get_untracked()) {
                    ev.prevent_default();
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {move || {
                if loading.get() {
                    Some(view! { <Icon icon=IconName::Spinner size=icon_size /> })
                } else {
                    leading_icon.map(|icon| view! { <Icon icon size=icon_size /> })
                }
            }}
            <span data-ui-slot="label">{children()}</span>
            {trailing_icon.map(|icon| view! { <Icon icon size=icon_size /> })}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_reaches_handler_only_when_idle() {
        assert!(click_allowed(false, false));
        assert!(!click_allowed(true, false));
        assert!(!click_allowed(false, true));
        assert!(!click_allowed(true, true));
    }

    #[test]
    fn submit_type_token() {
        assert_eq!(ButtonType::Submit.token(), "submit");
        assert_eq!(ButtonType::default().token(), "button");
    }
}
