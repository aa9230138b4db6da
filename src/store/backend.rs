//! Store interface abstraction.
//!
//! The global store is an external shared resource. The header reads it only
//! through [`StoreQuery`] selectors and changes it only by dispatching a
//! [`StoreAction`] through [`StoreDispatch`]. Keeping the two halves as
//! separate traits lets tests hand the controller a read-only fixture and a
//! recording dispatcher independently.
//!
//! # Implementations
//!
//! - [`MemoryStore`](crate::store::MemoryStore): single-threaded in-memory store
//!   implementing both traits

use crate::domain::{CustomHeaderOptions, FilterState, SortStrategy};
use std::rc::Rc;

/// Read selectors over the global store.
///
/// Every call reads the current value; implementations must not hand out
/// values cached from an earlier render.
pub trait StoreQuery {
    /// Currently selected notes sort strategy.
    fn sort_strategy(&self) -> SortStrategy;

    /// Whether the UI region addressed by `element` is disabled (hidden).
    fn is_element_disabled(&self, element: &str) -> bool;

    /// Whether the UI element addressed by `element` is open.
    fn is_element_open(&self, element: &str) -> bool;

    /// Host customization of the notes panel header, if any.
    fn custom_header_options(&self) -> Option<CustomHeaderOptions>;

    /// Current annotation filter snapshot.
    fn annotation_filters(&self) -> FilterState;

    /// One-based current page of the document.
    fn current_page(&self) -> u32;

    /// Number of pages in the document.
    fn total_pages(&self) -> u32;

    /// Whether page navigation overlays fade out when idle.
    fn should_fade_page_navigation(&self) -> bool;
}

/// Dispatch half of the store.
///
/// Dispatch is fire-and-forget: actions are assumed synchronous and valid.
pub trait StoreDispatch {
    fn dispatch(&self, action: StoreAction);
}

/// Actions accepted by the store.
#[derive(Debug, Clone)]
pub enum StoreAction {
    /// Selects a new notes sort strategy.
    SetSortStrategy(SortStrategy),

    /// Opens a UI element such as the filter modal.
    OpenElement(String),

    /// Closes a UI element.
    CloseElement(String),

    /// Hides the given UI regions.
    DisableElements(Vec<String>),

    /// Shows the given UI regions again.
    EnableElements(Vec<String>),

    /// Replaces the annotation filter snapshot.
    SetAnnotationFilters(FilterState),

    /// Installs or clears the custom header options.
    SetCustomHeaderOptions(Option<CustomHeaderOptions>),

    /// Updates the document's current page.
    SetCurrentPage(u32),

    /// Updates the document's page count.
    SetTotalPages(u32),

    /// Enables or disables idle fading of page navigation overlays.
    SetFadePageNavigation(bool),
}

impl PartialEq for StoreAction {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::SetSortStrategy(a), Self::SetSortStrategy(b)) => a == b,
            (Self::OpenElement(a), Self::OpenElement(b))
            | (Self::CloseElement(a), Self::CloseElement(b)) => a == b,
            (Self::DisableElements(a), Self::DisableElements(b))
            | (Self::EnableElements(a), Self::EnableElements(b)) => a == b,
            (Self::SetAnnotationFilters(a), Self::SetAnnotationFilters(b)) => a == b,
            (Self::SetCustomHeaderOptions(a), Self::SetCustomHeaderOptions(b)) => {
                match (a, b) {
                    (None, None) => true,
                    (Some(a), Some(b)) => {
                        a.overwrite_default_header == b.overwrite_default_header
                            && Rc::as_ptr(&a.render).cast::<u8>() == Rc::as_ptr(&b.render).cast::<u8>()
                    }
                    _ => false,
                }
            }
            (Self::SetCurrentPage(a), Self::SetCurrentPage(b))
            | (Self::SetTotalPages(a), Self::SetTotalPages(b)) => a == b,
            (Self::SetFadePageNavigation(a), Self::SetFadePageNavigation(b)) => a == b,
            _ => false,
        }
    }
}
