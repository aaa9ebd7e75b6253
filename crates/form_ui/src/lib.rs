//! Shared form primitive library for the sign-in, sign-up, and demo pages.
//!
//! The crate owns the reusable Leptos form controls (a kind-dispatched field,
//! an action button), the pure style resolver that maps variant/size/state
//! options onto the `ui-*` class and `data-ui-*` DOM contract, the password
//! strength estimator, and a small inline icon set used for decorations.
//! The auth pages build every input, textarea and button through [`Field`] and
//! [`Button`], so styling and accessibility attributes stay in one place.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;
mod strength;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    bool_token, click_allowed, described_by, field_id, field_message, merge_layout_class,
    trailing_slot, Button, ButtonStyle, ButtonType, ButtonVariant, Card, Cluster, ControlElement,
    ControlSize, Field, FieldKind, FieldMessage, FieldStyle, FieldVariant, Heading, InputType,
    InteractionState, LayoutGap, Stack, StrengthMeter, Text, TextTone, TrailingSlot,
};
pub use strength::{PasswordStrength, StrengthLevel};

/// Convenience imports for page crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonType, ButtonVariant, Card, Cluster, ControlSize, Field, FieldKind,
        FieldVariant, Heading, Icon, IconName, IconSize, InputType, LayoutGap, PasswordStrength,
        Stack, StrengthLevel, StrengthMeter, Text, TextTone,
    };
}
