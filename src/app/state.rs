//! Controller-local header state.
//!
//! [`HeaderState`] is created when the header mounts and discarded when it
//! unmounts. It holds only what no external owner tracks:
//!
//! - **`filter_enabled`**: cached result of the "any filter facet active"
//!   derivation. Seeded once from the store snapshot at mount, then updated
//!   only by `annotationFilterChanged` bus events. Later store mutations
//!   without a bus event are deliberately not observed.
//! - **`search_date`**: the history date last picked, echoed for display.

use crate::domain::{FilterChangedPayload, FilterState, HasFilterFacets};
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderState {
    /// Whether the filter button shows as active.
    pub filter_enabled: bool,

    /// History date currently shown by the picker.
    pub search_date: Option<NaiveDateTime>,
}

impl HeaderState {
    /// Creates the state for a freshly mounted header.
    ///
    /// Reads the store's filter snapshot exactly once; an inactive snapshot
    /// leaves `filter_enabled` at its `false` default.
    #[must_use]
    pub fn mounted(filters: &FilterState) -> Self {
        let mut state = Self::default();
        if filters.facets().is_active() {
            state.filter_enabled = true;
        }
        tracing::debug!(filter_enabled = state.filter_enabled, "header state initialized from store");
        state
    }

    /// Re-derives `filter_enabled` from a bus payload.
    ///
    /// Returns `true` if the flag changed.
    pub fn apply_filter_change(&mut self, payload: &FilterChangedPayload) -> bool {
        let enabled = payload.facets().is_active();
        let changed = enabled != self.filter_enabled;
        self.filter_enabled = enabled;
        tracing::debug!(filter_enabled = enabled, changed, "filter state re-derived from bus event");
        changed
    }
}
