//! Annotation filter facets.
//!
//! Filter state reaches the header through two structurally different shapes:
//! the store snapshot ([`FilterState`], camelCase `*Filter` fields) and the
//! `annotationFilterChanged` bus payload ([`FilterChangedPayload`], plural
//! field names). Both are normalised to [`FilterFacets`] so the "is any filter
//! active" rule exists exactly once.

use serde::{Deserialize, Serialize};

/// Borrowed view over the four filter facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterFacets<'a> {
    pub authors: &'a [String],
    pub colors: &'a [String],
    pub statuses: &'a [String],
    pub types: &'a [String],
}

impl FilterFacets<'_> {
    /// Returns `true` when at least one facet holds a value.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !(self.authors.is_empty()
            && self.colors.is_empty()
            && self.statuses.is_empty()
            && self.types.is_empty())
    }
}

/// Anything that can be read as the four filter facets.
pub trait HasFilterFacets {
    fn facets(&self) -> FilterFacets<'_>;
}

/// Filter snapshot held by the global store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Author ids.
    #[serde(default)]
    pub author_filter: Vec<String>,
    /// Color values.
    #[serde(default)]
    pub color_filter: Vec<String>,
    /// Review status values.
    #[serde(default)]
    pub status_filter: Vec<String>,
    /// Annotation type names.
    #[serde(default)]
    pub type_filter: Vec<String>,
}

impl HasFilterFacets for FilterState {
    fn facets(&self) -> FilterFacets<'_> {
        FilterFacets {
            authors: &self.author_filter,
            colors: &self.color_filter,
            statuses: &self.status_filter,
            types: &self.type_filter,
        }
    }
}

/// Payload of the `annotationFilterChanged` bus event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChangedPayload {
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub statuses: Vec<String>,
}

impl HasFilterFacets for FilterChangedPayload {
    fn facets(&self) -> FilterFacets<'_> {
        FilterFacets {
            authors: &self.authors,
            colors: &self.colors,
            statuses: &self.statuses,
            types: &self.types,
        }
    }
}

impl From<&FilterState> for FilterChangedPayload {
    fn from(state: &FilterState) -> Self {
        Self {
            types: state.type_filter.clone(),
            authors: state.author_filter.clone(),
            colors: state.color_filter.clone(),
            statuses: state.status_filter.clone(),
        }
    }
}
