//! Host-owned inputs of the header: callbacks and props.
//!
//! The parent notes panel owns the search text and the multi-select mode. The
//! header only reports user intent upward through [`HeaderCallbacks`] and reads
//! the current values through [`HeaderProps`], which the host replaces on
//! every render.

use crate::domain::Note;

/// Callbacks implemented by the parent notes panel.
pub trait HeaderCallbacks {
    /// Receives the committed (debounced) search text.
    fn set_search_input(&self, value: &str);

    /// Flips the panel between single- and multi-select mode.
    fn toggle_multi_select_mode(&self);
}

/// Per-render inputs supplied by the parent notes panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderProps {
    /// Notes currently listed by the panel.
    pub notes: Vec<Note>,

    /// Disables the filter modal button.
    pub disable_filter_annotation: bool,

    /// Whether multi-select mode is currently on.
    pub is_multi_select_mode: bool,

    /// Capability flag; when `false` no multi-select control exists at all.
    pub is_multi_select_enabled: bool,
}

impl HeaderProps {
    #[must_use]
    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }
}
