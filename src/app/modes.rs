//! Header rendering modes.
//!
//! The header is in exactly one of three modes, chosen on every render from
//! the store's custom header options:
//!
//! | options                                   | mode        | custom | default |
//! |-------------------------------------------|-------------|--------|---------|
//! | none                                      | `Default`   | no     | yes     |
//! | present, `overwrite_default_header` false | `Overlay`   | yes    | yes     |
//! | present, `overwrite_default_header` true  | `Replaced`  | yes    | no      |
//!
//! The mode is never stored; it is a pure function of the current options.

use crate::domain::CustomHeaderOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    /// No customization: default header only.
    Default,

    /// Custom output rendered first, followed by the default header.
    Overlay,

    /// Custom output only.
    Replaced,
}

impl HeaderMode {
    #[must_use]
    pub fn select(options: Option<&CustomHeaderOptions>) -> Self {
        match options {
            None => Self::Default,
            Some(options) if options.overwrite_default_header => Self::Replaced,
            Some(_) => Self::Overlay,
        }
    }

    #[must_use]
    pub const fn shows_custom(self) -> bool {
        matches!(self, Self::Overlay | Self::Replaced)
    }

    #[must_use]
    pub const fn shows_default(self) -> bool {
        matches!(self, Self::Default | Self::Overlay)
    }
}
