//! Pure mapping from variant, size, and state options to the final class list.
//!
//! Blocks are additive and never conflict, so composition order only matters
//! for the caller override, which is always appended last.

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Style options for one render of a field.
pub struct FieldStyle {
    /// Visual preset.
    pub variant: FieldVariant,
    /// Size preset.
    pub size: ControlSize,
    /// Stretch to the container width.
    pub full_width: bool,
    /// An error message is present.
    pub has_error: bool,
    /// A leading decoration is rendered.
    pub has_leading: bool,
    /// A trailing decoration or password toggle is rendered.
    pub has_trailing: bool,
    /// The control is disabled.
    pub disabled: bool,
    /// The control currently holds focus.
    pub focused: bool,
}

impl FieldStyle {
    /// Resolves the wrapper class list, appending `override_class` last.
    pub fn classes(&self, override_class: Option<&str>) -> String {
        let mut blocks = vec![
            "ui-field".to_string(),
            format!("ui-field--{}", self.variant.token()),
            format!("ui-size--{}", self.size.token()),
        ];
        let conditional = [
            (self.full_width, "ui-field--full-width"),
            (self.has_error, "ui-field--error"),
            (self.has_leading, "ui-field--with-leading"),
            (self.has_trailing, "ui-field--with-trailing"),
            (self.disabled, "ui-field--disabled"),
            (self.focused, "ui-field--focused"),
        ];
        blocks.extend(
            conditional
                .into_iter()
                .filter(|(applies, _)| *applies)
                .map(|(_, block)| block.to_string()),
        );
        merge_layout_class(&blocks.join(" "), override_class)
    }

    /// `data-ui-state` token: error wins over disabled, disabled over focus.
    pub fn state_token(&self) -> &'static str {
        if self.has_error {
            "error"
        } else if self.disabled {
            "disabled"
        } else if self.focused {
            "focused"
        } else {
            "idle"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Style options for one render of a button.
pub struct ButtonStyle {
    /// Visual preset.
    pub variant: ButtonVariant,
    /// Size preset.
    pub size: ControlSize,
    /// Stretch to the container width.
    pub full_width: bool,
    /// Click handling is disabled.
    pub disabled: bool,
    /// A busy indicator is shown.
    pub loading: bool,
}

impl ButtonStyle {
    /// Resolves the button class list, appending `override_class` last.
    pub fn classes(&self, override_class: Option<&str>) -> String {
        let mut blocks = vec![
            "ui-button".to_string(),
            format!("ui-button--{}", self.variant.token()),
            format!("ui-size--{}", self.size.token()),
        ];
        if self.full_width {
            blocks.push("ui-button--full-width".to_string());
        }
        if self.disabled || self.loading {
            blocks.push("ui-button--inert".to_string());
        }
        if self.loading {
            blocks.push("ui-button--loading".to_string());
        }
        merge_layout_class(&blocks.join(" "), override_class)
    }

    /// `data-ui-state` token.
    pub fn state_token(&self) -> &'static str {
        if self.loading {
            "loading"
        } else if self.disabled {
            "disabled"
        } else {
            "idle"
        }
    }
}
