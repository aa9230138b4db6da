//! Default header composition and header mode selection.
//!
//! [`compose_header`] is evaluated on every render. It reads the custom header
//! options, sort strategy and element flags from the store at call time and
//! queries the sort registry fresh, so configuration changes between renders
//! can never leave a stale mode or item list behind.

use crate::app::{HeaderMode, HeaderState};
use crate::domain::history::{format_history_date, HISTORY_DATE_PLACEHOLDER, HISTORY_TIME_INTERVAL_MINUTES};
use crate::host::{HeaderProps, SortStrategyRegistry};
use crate::store::StoreQuery;
use crate::ui::elements;
use crate::ui::viewmodel::{
    ButtonView, CounterView, DatePickerView, DefaultHeaderView, HeaderView, HistoryPanelView, Labels,
    SearchFieldView, SortControlView, SortRowView,
};

/// Everything one render reads.
#[derive(Clone, Copy)]
pub struct ComposeInputs<'a> {
    pub props: &'a HeaderProps,
    pub state: &'a HeaderState,
    pub store: &'a dyn StoreQuery,
    pub registry: &'a dyn SortStrategyRegistry,
    pub labels: &'a Labels,
}

/// Composes the header for the current render.
#[must_use]
pub fn compose_header(inputs: &ComposeInputs<'_>) -> HeaderView {
    let options = inputs.store.custom_header_options();
    let mode = HeaderMode::select(options.as_ref());

    let custom = options
        .as_ref()
        .map(|options| options.render.render(&inputs.props.notes));

    let default_header = if mode.shows_default() && !inputs.store.is_element_disabled(elements::NOTES_PANEL_HEADER) {
        Some(compose_default_header(inputs))
    } else {
        None
    };

    tracing::trace!(
        mode = ?mode,
        has_custom = custom.is_some(),
        has_default = default_header.is_some(),
        "header composed"
    );

    HeaderView {
        mode,
        custom,
        default_header,
    }
}

fn compose_default_header(inputs: &ComposeInputs<'_>) -> DefaultHeaderView {
    let store = inputs.store;

    let counter = (!store.is_element_disabled(elements::COMMENTS_COUNTER)).then(|| CounterView {
        label: inputs.labels.notes_panel.clone(),
        count: inputs.props.note_count(),
    });

    let sort_row = (!store.is_element_disabled(elements::SORT_ROW)).then(|| compose_sort_row(inputs));

    DefaultHeaderView {
        history: compose_history_panel(inputs),
        counter,
        sort_row,
    }
}

fn compose_history_panel(inputs: &ComposeInputs<'_>) -> HistoryPanelView {
    let labels = inputs.labels;
    let selected = inputs.state.search_date;

    let search = (!inputs.store.is_element_disabled(elements::SEARCH_INPUT_CONTAINER)).then(|| SearchFieldView {
        label: labels.search.clone(),
        placeholder: labels.search_placeholder.clone(),
    });

    HistoryPanelView {
        trigger: labels.history_trigger.clone(),
        date_picker: DatePickerView {
            label: labels.history.clone(),
            selected,
            display: selected.as_ref().map(format_history_date),
            placeholder: HISTORY_DATE_PLACEHOLDER.to_string(),
            time_interval_minutes: HISTORY_TIME_INTERVAL_MINUTES,
            clearable: true,
        },
        search,
    }
}

fn compose_sort_row(inputs: &ComposeInputs<'_>) -> SortRowView {
    let props = inputs.props;
    let labels = inputs.labels;
    let no_notes = !props.has_notes();

    // Hidden and disabled are independent: a disabled container drops the
    // control, zero notes only greys it out.
    let sort = (!inputs.store.is_element_disabled(elements::SORT_CONTAINER)).then(|| SortControlView {
        element: elements::NOTES_ORDER_DROPDOWN,
        label: format!("{}:", labels.sort_by),
        items: inputs.registry.strategy_keys(),
        current: inputs.store.sort_strategy(),
        disabled: no_notes,
    });

    let multi_select = props.is_multi_select_enabled.then(|| ButtonView {
        element: elements::MULTI_SELECT_MODE_BUTTON,
        title: labels.multi_select.clone(),
        icon: "icon-annotation-select-multiple",
        active: props.is_multi_select_mode,
        disabled: no_notes,
    });

    SortRowView {
        sort,
        toggle_annotations: ButtonView {
            element: elements::HIDE_SHOW_NOTES_BUTTON,
            title: labels.toggle_annotations.clone(),
            icon: "icon-header-chat-fill",
            active: false,
            disabled: false,
        },
        multi_select,
        filter: ButtonView {
            element: elements::FILTER_ANNOTATION_BUTTON,
            title: labels.filter.clone(),
            icon: "icon-comments-filter",
            active: inputs.state.filter_enabled,
            disabled: props.disable_filter_annotation,
        },
    }
}
