//! In-memory store backend.
//!
//! Holds the store state behind a `RefCell` and applies dispatched actions with
//! a plain reducer. Suited to single-threaded hosts, demos and tests. A store
//! can be seeded from a JSON snapshot:
//!
//! ```json
//! {
//!   "sortStrategy": "time",
//!   "disabledElements": ["sortContainer"],
//!   "annotationFilters": { "authorFilter": ["a1"] },
//!   "currentPage": 3,
//!   "totalPages": 12,
//!   "fadePageNavigation": true
//! }
//! ```
//!
//! Custom header options carry a render function and therefore cannot be part
//! of a snapshot; install them with
//! [`StoreAction::SetCustomHeaderOptions`](crate::store::StoreAction).

use crate::domain::error::Result;
use crate::domain::{CustomHeaderOptions, FilterState, SortStrategy};
use crate::store::backend::{StoreAction, StoreDispatch, StoreQuery};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeSet;

/// Serializable part of the store state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreSnapshot {
    pub sort_strategy: SortStrategy,
    pub disabled_elements: BTreeSet<String>,
    pub open_elements: BTreeSet<String>,
    pub annotation_filters: FilterState,
    pub current_page: u32,
    pub total_pages: u32,
    pub fade_page_navigation: bool,
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            sort_strategy: SortStrategy::default(),
            disabled_elements: BTreeSet::new(),
            open_elements: BTreeSet::new(),
            annotation_filters: FilterState::default(),
            current_page: 1,
            total_pages: 1,
            fade_page_navigation: false,
        }
    }
}

#[derive(Debug, Default)]
struct StoreState {
    snapshot: StoreSnapshot,
    custom_header: Option<CustomHeaderOptions>,
}

/// Single-threaded in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RefCell<StoreState>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(snapshot: StoreSnapshot) -> Self {
        Self {
            state: RefCell::new(StoreState {
                snapshot,
                custom_header: None,
            }),
        }
    }

    /// Seeds a store from a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::Payload`](crate::HeaderError::Payload) when the JSON
    /// does not describe a snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: StoreSnapshot = serde_json::from_str(json)?;
        Ok(Self::new(snapshot))
    }

    /// Returns a copy of the serializable state.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        self.state.borrow().snapshot.clone()
    }
}

fn reduce(state: &mut StoreState, action: StoreAction) {
    let snapshot = &mut state.snapshot;
    match action {
        StoreAction::SetSortStrategy(strategy) => snapshot.sort_strategy = strategy,
        StoreAction::OpenElement(element) => {
            snapshot.open_elements.insert(element);
        }
        StoreAction::CloseElement(element) => {
            snapshot.open_elements.remove(&element);
        }
        StoreAction::DisableElements(elements) => snapshot.disabled_elements.extend(elements),
        StoreAction::EnableElements(elements) => {
            for element in &elements {
                snapshot.disabled_elements.remove(element);
            }
        }
        StoreAction::SetAnnotationFilters(filters) => snapshot.annotation_filters = filters,
        StoreAction::SetCustomHeaderOptions(options) => state.custom_header = options,
        StoreAction::SetCurrentPage(page) => snapshot.current_page = page,
        StoreAction::SetTotalPages(total) => snapshot.total_pages = total,
        StoreAction::SetFadePageNavigation(fade) => snapshot.fade_page_navigation = fade,
    }
}

impl StoreDispatch for MemoryStore {
    fn dispatch(&self, action: StoreAction) {
        tracing::debug!(action = ?action, "store action dispatched");
        reduce(&mut self.state.borrow_mut(), action);
    }
}

impl StoreQuery for MemoryStore {
    fn sort_strategy(&self) -> SortStrategy {
        self.state.borrow().snapshot.sort_strategy.clone()
    }

    fn is_element_disabled(&self, element: &str) -> bool {
        self.state.borrow().snapshot.disabled_elements.contains(element)
    }

    fn is_element_open(&self, element: &str) -> bool {
        self.state.borrow().snapshot.open_elements.contains(element)
    }

    fn custom_header_options(&self) -> Option<CustomHeaderOptions> {
        self.state.borrow().custom_header.clone()
    }

    fn annotation_filters(&self) -> FilterState {
        self.state.borrow().snapshot.annotation_filters.clone()
    }

    fn current_page(&self) -> u32 {
        self.state.borrow().snapshot.current_page
    }

    fn total_pages(&self) -> u32 {
        self.state.borrow().snapshot.total_pages
    }

    fn should_fade_page_navigation(&self) -> bool {
        self.state.borrow().snapshot.fade_page_navigation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CustomContent, CustomHeaderOptions, Note};

    #[test]
    fn seeds_from_json_with_defaults() {
        let store = MemoryStore::from_json(
            r#"{"sortStrategy":"time","disabledElements":["sortContainer"],"totalPages":12}"#,
        )
        .unwrap();
        assert_eq!(store.sort_strategy(), SortStrategy::new("time"));
        assert!(store.is_element_disabled("sortContainer"));
        assert!(!store.is_element_disabled("filterAnnotationButton"));
        assert_eq!(store.current_page(), 1);
        assert_eq!(store.total_pages(), 12);
        assert!(store.custom_header_options().is_none());
    }

    #[test]
    fn malformed_snapshot_is_a_payload_error() {
        let err = MemoryStore::from_json("{\"totalPages\": \"many\"}").unwrap_err();
        assert!(matches!(err, crate::HeaderError::Payload(_)));
    }

    #[test]
    fn reducer_applies_element_actions() {
        let store = MemoryStore::default();
        store.dispatch(StoreAction::OpenElement("filterModal".into()));
        store.dispatch(StoreAction::DisableElements(vec!["a".into(), "b".into()]));
        store.dispatch(StoreAction::EnableElements(vec!["a".into()]));
        assert!(store.is_element_open("filterModal"));
        assert!(!store.is_element_disabled("a"));
        assert!(store.is_element_disabled("b"));

        store.dispatch(StoreAction::CloseElement("filterModal".into()));
        assert!(!store.is_element_open("filterModal"));
    }

    #[test]
    fn custom_header_options_live_outside_the_snapshot() {
        let store = MemoryStore::default();
        let options = CustomHeaderOptions::new(
            |notes: &[Note]| CustomContent(format!("{} notes", notes.len())),
            true,
        );
        store.dispatch(StoreAction::SetCustomHeaderOptions(Some(options)));

        let stored = store.custom_header_options().unwrap();
        assert!(stored.overwrite_default_header);
        assert_eq!(stored.render.render(&[]), CustomContent("0 notes".into()));
        assert_eq!(store.snapshot(), StoreSnapshot::default());
    }
}
