//! Inline stroke icons used as field decorations and button adornments.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named icons available to primitives and pages.
pub enum IconName {
    /// Envelope, used on email fields.
    Mail,
    /// Padlock, used on password fields.
    Lock,
    /// Person silhouette.
    User,
    /// Magnifier, used on search fields.
    Search,
    /// Open eye (password currently visible).
    Eye,
    /// Struck-through eye (password currently masked).
    EyeOff,
    /// Rotating busy indicator.
    Spinner,
    /// Forward arrow.
    ArrowRight,
    /// Check mark.
    Check,
    /// Circled exclamation.
    Alert,
    /// Cross, used for clear affordances.
    Close,
    /// Phone handset.
    Phone,
    /// Chain link.
    Link,
}

impl IconName {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Mail => "mail",
            Self::Lock => "lock",
            Self::User => "user",
            Self::Search => "search",
            Self::Eye => "eye",
            Self::EyeOff => "eye-off",
            Self::Spinner => "spinner",
            Self::ArrowRight => "arrow-right",
            Self::Check => "check",
            Self::Alert => "alert",
            Self::Close => "close",
            Self::Phone => "phone",
            Self::Link => "link",
        }
    }

    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Mail => &["M4 4h16v16H4z", "M22 6l-10 7L2 6"],
            Self::Lock => &["M5 11h14v10H5z", "M7 11V7a5 5 0 0 1 10 0v4"],
            Self::User => &[
                "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2",
                "M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
            ],
            Self::Search => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "M21 21l-4.35-4.35"],
            Self::Eye => &[
                "M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z",
                "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            ],
            Self::EyeOff => &[
                "M17.94 17.94A10.07 10.07 0 0 1 12 20c-7 0-11-8-11-8a18.45 18.45 0 0 1 5.06-5.94",
                "M9.9 4.24A9.12 9.12 0 0 1 12 4c7 0 11 8 11 8a18.5 18.5 0 0 1-2.16 3.19",
                "M1 1l22 22",
            ],
            Self::Spinner => &["M21 12a9 9 0 1 1-6.22-8.56"],
            Self::ArrowRight => &["M5 12h14", "M12 5l7 7-7 7"],
            Self::Check => &["M20 6L9 17l-5-5"],
            Self::Alert => &[
                "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
                "M12 8v4",
                "M12 16h.01",
            ],
            Self::Close => &["M18 6L6 18", "M6 6l12 12"],
            Self::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6A19.79 19.79 0 0 1 2.12 4.18 2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Self::Link => &[
                "M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71",
                "M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Rendered icon sizes.
pub enum IconSize {
    /// 14px glyph.
    Xs,
    /// 16px glyph.
    Sm,
    /// 20px glyph.
    Md,
    /// 24px glyph.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn pixels(self) -> u8 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }
}

#[component]
/// Decorative inline SVG icon. Always `aria-hidden`; callers label the owning control.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    let paths = icon
        .paths()
        .iter()
        .map(|d| view! { <path d=*d></path> })
        .collect_view();

    view! {
        <svg
            class="ui-icon"
            viewBox="0 0 24 24"
            width=size.pixels()
            height=size.pixels()
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {paths}
        </svg>
    }
}
