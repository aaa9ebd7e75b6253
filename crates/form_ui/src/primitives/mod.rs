//! Shared form controls, layout primitives, and the option tokens they consume.

use leptos::ev::{FocusEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize, PasswordStrength};

mod button;
mod field;
mod layout;
mod style;

pub use button::{click_allowed, Button, ButtonType};
pub use field::{
    described_by, field_id, field_message, trailing_slot, ControlElement, Field, FieldKind,
    FieldMessage, InputType, InteractionState, StrengthMeter, TrailingSlot,
};
pub use layout::{Card, Cluster, Heading, Stack, Text};
pub use style::{ButtonStyle, FieldStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual presets for the field control.
pub enum FieldVariant {
    /// Bordered field on the page surface.
    Default,
    /// Tinted background without a visible border.
    Filled,
    /// Heavier border, transparent background.
    Outline,
    /// Bottom rule only.
    Underline,
    /// Gradient border ring.
    Gradient,
}

impl Default for FieldVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl FieldVariant {
    /// Every variant, in presentation order.
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::Filled,
        Self::Outline,
        Self::Underline,
        Self::Gradient,
    ];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Filled => "filled",
            Self::Outline => "outline",
            Self::Underline => "underline",
            Self::Gradient => "gradient",
        }
    }

    /// Human-readable name for demo listings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Filled => "Filled",
            Self::Outline => "Outline",
            Self::Underline => "Underline",
            Self::Gradient => "Gradient",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Sizing tokens shared by fields and buttons.
pub enum ControlSize {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Default size.
    Md,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
}

impl Default for ControlSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ControlSize {
    /// Every size, smallest first.
    pub const ALL: [Self; 5] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Icon size that fits inside a control of this size.
    pub(crate) fn icon_size(self) -> IconSize {
        match self {
            Self::Xs => IconSize::Xs,
            Self::Sm | Self::Md => IconSize::Sm,
            Self::Lg => IconSize::Md,
            Self::Xl => IconSize::Lg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual presets for the action button.
pub enum ButtonVariant {
    /// Filled accent button for the main action.
    Primary,
    /// Muted filled button.
    Secondary,
    /// Bordered transparent button.
    Outline,
    /// Borderless transparent button.
    Ghost,
    /// Destructive action.
    Danger,
    /// Gradient fill.
    Gradient,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    /// Every variant, in presentation order.
    pub const ALL: [Self; 6] = [
        Self::Primary,
        Self::Secondary,
        Self::Outline,
        Self::Ghost,
        Self::Danger,
        Self::Gradient,
    ];

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Danger => "danger",
            Self::Gradient => "gradient",
        }
    }

    /// Human-readable name for demo listings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Outline => "Outline",
            Self::Ghost => "Ghost",
            Self::Danger => "Danger",
            Self::Gradient => "Gradient",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared text tone.
pub enum TextTone {
    /// Primary text.
    Primary,
    /// Secondary text.
    Secondary,
    /// Success/status tone.
    Success,
    /// Danger tone.
    Danger,
}

impl Default for TextTone {
    fn default() -> Self {
        Self::Primary
    }
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// Small gap.
    Sm,
    /// Default gap.
    Md,
    /// Large gap.
    Lg,
}

impl Default for LayoutGap {
    fn default() -> Self {
        Self::Md
    }
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// Appends a caller-supplied class to a primitive's base class.
///
/// The caller class always comes last so it wins over computed blocks.
pub fn merge_layout_class(base: &str, layout_class: Option<&str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.trim().is_empty() => {
            format!("{base} {}", layout_class.trim())
        }
        _ => base.to_string(),
    }
}

/// `data-ui-*` boolean attribute value.
pub fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_layout_class_appends_override_last() {
        assert_eq!(merge_layout_class("ui-field", Some("wide")), "ui-field wide");
        assert_eq!(merge_layout_class("ui-field", Some("  ")), "ui-field");
        assert_eq!(merge_layout_class("ui-field", None), "ui-field");
    }

    #[test]
    fn control_size_icon_scale_grows_with_size() {
        assert_eq!(ControlSize::Xs.icon_size(), IconSize::Xs);
        assert_eq!(ControlSize::Md.icon_size(), IconSize::Sm);
        assert_eq!(ControlSize::Xl.icon_size(), IconSize::Lg);
    }

    #[test]
    fn tokens_are_distinct() {
        let mut tokens: Vec<_> = FieldVariant::ALL.iter().map(|v| v.token()).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), FieldVariant::ALL.len());
        let mut sizes: Vec<_> = ControlSize::ALL.iter().map(|s| s.token()).collect();
        sizes.sort_unstable();
        sizes.dedup();
        assert_eq!(sizes.len(), ControlSize::ALL.len());
    }
}
