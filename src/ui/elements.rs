//! Stable element identifiers.
//!
//! The store addresses the visibility and open state of UI regions by these
//! string keys. Hosts disable a region by dispatching
//! `StoreAction::DisableElements` with the matching id.

/// Whole default header.
pub const NOTES_PANEL_HEADER: &str = "notesPanelHeader";

/// Free-text search field inside the history/search panel.
pub const SEARCH_INPUT_CONTAINER: &str = "notesPanel.DefaultHeader.InputContainer";

/// Note counter.
pub const COMMENTS_COUNTER: &str = "notesPanel.DefaultHeader.CommentsCounter";

/// Row holding the sort control and the action buttons.
pub const SORT_ROW: &str = "notesPanel.DefaultHeader.SortRow";

/// Sort control container. When disabled an empty placeholder keeps its slot.
pub const SORT_CONTAINER: &str = "sortContainer";

/// Sort strategy dropdown.
pub const NOTES_ORDER_DROPDOWN: &str = "notesOrderDropdown";

pub const HIDE_SHOW_NOTES_BUTTON: &str = "hideShowNotesButton";
pub const MULTI_SELECT_MODE_BUTTON: &str = "multiSelectModeButton";
pub const FILTER_ANNOTATION_BUTTON: &str = "filterAnnotationButton";

/// Modal opened by the filter button.
pub const FILTER_MODAL: &str = "filterModal";

pub const PAGE_NEXT_OVERLAY: &str = "pageNextOverlay";
pub const PAGE_PREVIOUS_OVERLAY: &str = "pagePreviousOverlay";
pub const PAGE_SLIDER_OVERLAY: &str = "pageSliderOverlay";
