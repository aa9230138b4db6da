//! View model types describing the composed header.
//!
//! View models are immutable snapshots computed on every render. They contain
//! no behaviour, only what a presentation layer needs: which regions exist,
//! their labels, and their enabled and active states. An absent region is
//! `None`, which is distinct from a present-but-disabled control.
//!
//! # Structure
//!
//! ```text
//! HeaderView
//! ├── custom: Option<CustomContent>        (Overlay / Replaced)
//! └── default_header: Option<DefaultHeaderView>
//!     ├── history: HistoryPanelView
//!     │   ├── date_picker: DatePickerView
//!     │   └── search: Option<SearchFieldView>
//!     ├── counter: Option<CounterView>
//!     └── sort_row: Option<SortRowView>
//!         ├── sort: Option<SortControlView>   (None = empty placeholder)
//!         ├── toggle_annotations: ButtonView
//!         ├── multi_select: Option<ButtonView>
//!         └── filter: ButtonView
//! ```

use crate::app::HeaderMode;
use crate::domain::{CustomContent, SortStrategy};
use chrono::NaiveDateTime;

/// Complete header for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub mode: HeaderMode,

    /// Host render output, passed through untouched. Comes first.
    pub custom: Option<CustomContent>,

    /// Default header composition, when the mode shows it and its element
    /// is not disabled.
    pub default_header: Option<DefaultHeaderView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultHeaderView {
    pub history: HistoryPanelView,
    pub counter: Option<CounterView>,
    pub sort_row: Option<SortRowView>,
}

/// Collapsible "History / Search" panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryPanelView {
    pub trigger: String,
    pub date_picker: DatePickerView,
    pub search: Option<SearchFieldView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerView {
    pub label: String,
    pub selected: Option<NaiveDateTime>,
    /// `selected` in picker display format.
    pub display: Option<String>,
    pub placeholder: String,
    pub time_interval_minutes: u32,
    pub clearable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFieldView {
    pub label: String,
    pub placeholder: String,
}

/// Note counter, e.g. `Comments (3)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub label: String,
    pub count: usize,
}

impl CounterView {
    /// The parenthesised count, e.g. `(0)`.
    #[must_use]
    pub fn count_text(&self) -> String {
        format!("({})", self.count)
    }

    #[must_use]
    pub fn text(&self) -> String {
        format!("{} {}", self.label, self.count_text())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRowView {
    /// `None` when the sort container is disabled; the slot stays as an
    /// empty placeholder.
    pub sort: Option<SortControlView>,
    pub toggle_annotations: ButtonView,
    /// Absent entirely unless multi-select is available.
    pub multi_select: Option<ButtonView>,
    pub filter: ButtonView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortControlView {
    pub element: &'static str,
    pub label: String,
    pub items: Vec<SortStrategy>,
    pub current: SortStrategy,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub element: &'static str,
    pub title: String,
    pub icon: &'static str,
    pub active: bool,
    pub disabled: bool,
}

/// Display strings of the default header.
///
/// Translation is the host's concern; it supplies translated strings here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub history_trigger: String,
    pub history: String,
    pub search: String,
    pub search_placeholder: String,
    pub notes_panel: String,
    pub sort_by: String,
    pub toggle_annotations: String,
    pub multi_select: String,
    pub filter: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            history_trigger: "History / Search".to_string(),
            history: "History:".to_string(),
            search: "Search:".to_string(),
            search_placeholder: "Search comments...".to_string(),
            notes_panel: "Comments".to_string(),
            sort_by: "Sort by".to_string(),
            toggle_annotations: "Toggle Annotations".to_string(),
            multi_select: "Multi Select".to_string(),
            filter: "Filter".to_string(),
        }
    }
}
