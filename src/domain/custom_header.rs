//! Host-supplied custom header configuration.
//!
//! A host may augment or replace the default header by storing
//! [`CustomHeaderOptions`] in the store. The render capability is opaque: the
//! controller calls it with the current notes and passes whatever comes back
//! straight through to the view without looking inside.

use crate::domain::Note;
use std::fmt;
use std::rc::Rc;

/// Opaque fragment produced by a host render function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomContent(pub String);

/// Render capability for a custom header.
pub trait CustomHeaderRender {
    fn render(&self, notes: &[Note]) -> CustomContent;
}

impl<F> CustomHeaderRender for F
where
    F: Fn(&[Note]) -> CustomContent,
{
    fn render(&self, notes: &[Note]) -> CustomContent {
        self(notes)
    }
}

/// Custom header configuration owned by the store.
#[derive(Clone)]
pub struct CustomHeaderOptions {
    pub render: Rc<dyn CustomHeaderRender>,
    /// When `true` the default header is not rendered at all.
    pub overwrite_default_header: bool,
}

impl CustomHeaderOptions {
    pub fn new(render: impl CustomHeaderRender + 'static, overwrite_default_header: bool) -> Self {
        Self {
            render: Rc::new(render),
            overwrite_default_header,
        }
    }
}

impl fmt::Debug for CustomHeaderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomHeaderOptions")
            .field("overwrite_default_header", &self.overwrite_default_header)
            .finish_non_exhaustive()
    }
}
