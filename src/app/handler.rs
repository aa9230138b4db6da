//! Event handling for header interactions.
//!
//! [`handle_event`] translates a user interaction into local state changes and
//! an ordered list of [`Action`]s. It performs no I/O and never fails: every
//! input is well-typed by construction, and interactions on controls that are
//! disabled or absent are ignored.
//!
//! # Event Types
//!
//! - **Search**: `SearchCommitted` (already debounced by the controller)
//! - **Sort**: `SortSelected`
//! - **Buttons**: `MultiSelectPressed`, `FilterButtonPressed`
//! - **History**: `HistoryDateChanged`
//!
//! Filter-changed bus events do not pass through here; they update
//! [`HeaderState`] directly from the bus listener.

use crate::app::{Action, HeaderState};
use crate::bus::BusEvent;
use crate::domain::SortStrategy;
use crate::host::HeaderProps;
use crate::store::StoreAction;
use crate::ui::elements;
use chrono::NaiveDateTime;

/// User interactions with the default header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The debounce window elapsed; commit the latest search text.
    SearchCommitted(String),

    /// A sort strategy was picked from the dropdown.
    SortSelected(SortStrategy),

    /// The multi-select mode button was pressed.
    MultiSelectPressed,

    /// The filter button was pressed.
    FilterButtonPressed,

    /// The history picker changed. `None` means it was cleared.
    HistoryDateChanged(Option<NaiveDateTime>),
}

/// Render-time facts the handler needs besides its own state.
#[derive(Debug, Clone, Copy)]
pub struct HandlerContext<'a> {
    pub props: &'a HeaderProps,

    /// The sort container element is disabled in the store.
    pub sort_container_disabled: bool,
}

/// Processes an event, mutates header state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether local state changed, and the side
/// effects to run in order. Ignored interactions return `(false, vec![])`.
///
/// # Example
///
/// ```
/// use notes_header::app::{handle_event, Action, Event, HandlerContext, HeaderState};
/// use notes_header::host::HeaderProps;
/// use notes_header::Note;
///
/// let props = HeaderProps {
///     notes: vec![Note::new("n1")],
///     is_multi_select_enabled: true,
///     ..HeaderProps::default()
/// };
/// let ctx = HandlerContext { props: &props, sort_container_disabled: false };
/// let mut state = HeaderState::default();
///
/// let (_, actions) = handle_event(&mut state, &ctx, &Event::MultiSelectPressed);
/// assert_eq!(actions, vec![Action::DeselectAllAnnotations, Action::ToggleMultiSelectMode]);
/// ```
pub fn handle_event(state: &mut HeaderState, ctx: &HandlerContext<'_>, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SearchCommitted(value) => {
            tracing::debug!(query_len = value.len(), "committing search input");
            (false, vec![Action::DeselectAllAnnotations, Action::CommitSearch(value.clone())])
        }
        Event::SortSelected(strategy) => {
            if ctx.sort_container_disabled {
                tracing::debug!(strategy = %strategy, "sort container disabled, ignoring selection");
                return (false, vec![]);
            }
            if !ctx.props.has_notes() {
                tracing::debug!(strategy = %strategy, "no notes to sort, ignoring selection");
                return (false, vec![]);
            }
            tracing::debug!(strategy = %strategy, "sort strategy selected");
            (false, vec![Action::Dispatch(StoreAction::SetSortStrategy(strategy.clone()))])
        }
        Event::MultiSelectPressed => {
            if !ctx.props.is_multi_select_enabled {
                tracing::debug!("multi-select unavailable, ignoring press");
                return (false, vec![]);
            }
            if !ctx.props.has_notes() {
                tracing::debug!("multi-select disabled without notes, ignoring press");
                return (false, vec![]);
            }
            tracing::debug!(
                was_multi_select = ctx.props.is_multi_select_mode,
                "toggling multi-select mode"
            );
            (false, vec![Action::DeselectAllAnnotations, Action::ToggleMultiSelectMode])
        }
        Event::FilterButtonPressed => {
            if ctx.props.disable_filter_annotation {
                tracing::debug!("filter button disabled, ignoring press");
                return (false, vec![]);
            }
            (
                false,
                vec![Action::Dispatch(StoreAction::OpenElement(elements::FILTER_MODAL.to_string()))],
            )
        }
        Event::HistoryDateChanged(date) => {
            tracing::debug!(date = ?date, "history date changed");
            state.search_date = *date;
            (true, vec![Action::Emit(BusEvent::AnnotHistoryDateSelected(*date))])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Note;

    fn props(notes: usize) -> HeaderProps {
        HeaderProps {
            notes: (0..notes).map(|i| Note::new(format!("n{i}"))).collect(),
            is_multi_select_enabled: true,
            ..HeaderProps::default()
        }
    }

    fn run(props: &HeaderProps, sort_container_disabled: bool, event: Event) -> (bool, Vec<Action>) {
        let ctx = HandlerContext { props, sort_container_disabled };
        handle_event(&mut HeaderState::default(), &ctx, &event)
    }

    #[test]
    fn search_commit_clears_selection_first() {
        let (_, actions) = run(&props(0), false, Event::SearchCommitted("ink".into()));
        assert_eq!(
            actions,
            vec![Action::DeselectAllAnnotations, Action::CommitSearch("ink".into())]
        );
    }

    #[test]
    fn sort_selection_dispatches_exactly_once() {
        let key = SortStrategy::new(SortStrategy::AUTHOR);
        let (_, actions) = run(&props(2), false, Event::SortSelected(key.clone()));
        assert_eq!(actions, vec![Action::Dispatch(StoreAction::SetSortStrategy(key))]);
    }

    #[test]
    fn sort_selection_ignored_when_disabled_or_hidden() {
        let key = SortStrategy::new(SortStrategy::TIME);
        assert!(run(&props(0), false, Event::SortSelected(key.clone())).1.is_empty());
        assert!(run(&props(3), true, Event::SortSelected(key)).1.is_empty());
    }

    #[test]
    fn multi_select_requires_capability_and_notes() {
        let mut unavailable = props(2);
        unavailable.is_multi_select_enabled = false;
        assert!(run(&unavailable, false, Event::MultiSelectPressed).1.is_empty());
        assert!(run(&props(0), false, Event::MultiSelectPressed).1.is_empty());
    }

    #[test]
    fn filter_button_opens_modal_unless_disabled() {
        let (_, actions) = run(&props(1), false, Event::FilterButtonPressed);
        assert_eq!(
            actions,
            vec![Action::Dispatch(StoreAction::OpenElement("filterModal".into()))]
        );

        let mut disabled = props(1);
        disabled.disable_filter_annotation = true;
        assert!(run(&disabled, false, Event::FilterButtonPressed).1.is_empty());
    }

    #[test]
    fn history_date_is_stored_and_broadcast() {
        let date = chrono::NaiveDate::from_ymd_opt(2023, 11, 20)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let props = props(1);
        let ctx = HandlerContext { props: &props, sort_container_disabled: false };
        let mut state = HeaderState::default();

        let (render, actions) = handle_event(&mut state, &ctx, &Event::HistoryDateChanged(Some(date)));
        assert!(render);
        assert_eq!(state.search_date, Some(date));
        assert_eq!(actions, vec![Action::Emit(BusEvent::AnnotHistoryDateSelected(Some(date)))]);

        handle_event(&mut state, &ctx, &Event::HistoryDateChanged(None));
        assert_eq!(state.search_date, None);
    }
}
