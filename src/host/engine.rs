//! Document engine collaborator.

use crate::domain::error::Result;

/// Operations the header and overlays invoke on the document engine.
pub trait DocumentEngine {
    /// Clears every annotation selection. Must be a no-op when nothing is
    /// selected.
    fn deselect_all_annotations(&self);

    /// Navigates to the one-based `page`.
    ///
    /// # Errors
    ///
    /// Implementations return [`HeaderError::Engine`](crate::HeaderError::Engine)
    /// when navigation fails; callers in this crate log and absorb it.
    fn set_current_page(&self, page: u32) -> Result<()>;
}
