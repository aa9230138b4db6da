//! Header state controller.
//!
//! [`HeaderController`] owns one mounted header: its local state, its search
//! debouncer and its bus subscription. Collaborators are injected through
//! [`HeaderDeps`]; nothing is reached through globals.
//!
//! # Lifecycle
//!
//! ```text
//! new ──start()──▶ mounted ──stop()──▶ unmounted ──start()──▶ mounted ...
//!                   │  reads filter snapshot once
//!                   │  subscribes to annotationFilterChanged
//!                   ▼
//!        interactions, poll(now), render()
//! ```
//!
//! `stop()` drops any pending search and removes the bus listener; it is safe
//! to call repeatedly and runs on `Drop`. While unmounted, interactions and
//! polls produce no effects.
//!
//! # Example
//!
//! ```
//! use notes_header::app::{HeaderController, HeaderDeps};
//! use notes_header::bus::LocalEventBus;
//! use notes_header::host::{DocumentEngine, HeaderCallbacks, HeaderProps, StaticSortRegistry};
//! use notes_header::store::MemoryStore;
//! use notes_header::{Config, Result};
//! use std::rc::Rc;
//! use std::time::{Duration, Instant};
//!
//! struct Engine;
//! impl DocumentEngine for Engine {
//!     fn deselect_all_annotations(&self) {}
//!     fn set_current_page(&self, _page: u32) -> Result<()> { Ok(()) }
//! }
//!
//! struct Panel;
//! impl HeaderCallbacks for Panel {
//!     fn set_search_input(&self, value: &str) { println!("search: {value}"); }
//!     fn toggle_multi_select_mode(&self) {}
//! }
//!
//! let store = Rc::new(MemoryStore::default());
//! let deps = HeaderDeps {
//!     store: store.clone(),
//!     dispatcher: store,
//!     engine: Rc::new(Engine),
//!     bus: Rc::new(LocalEventBus::new()),
//!     registry: Rc::new(StaticSortRegistry::new()),
//!     callbacks: Rc::new(Panel),
//! };
//!
//! let mut header = HeaderController::new(deps, HeaderProps::default(), &Config::default());
//! header.start();
//!
//! let t0 = Instant::now();
//! header.on_search_input("ink", t0);
//! assert!(header.poll(t0 + Duration::from_millis(500)));
//!
//! header.stop();
//! ```

use crate::app::debounce::Debouncer;
use crate::app::handler::{handle_event, Event, HandlerContext};
use crate::app::{Action, HeaderState};
use crate::bus::{BusEvent, EventBus, Listener, ListenerId, ANNOTATION_FILTER_CHANGED};
use crate::domain::SortStrategy;
use crate::host::{DocumentEngine, HeaderCallbacks, HeaderProps, SortStrategyRegistry};
use crate::store::{StoreDispatch, StoreQuery};
use crate::ui::{compose_header, elements, ComposeInputs, HeaderView, Labels};
use crate::Config;
use chrono::NaiveDateTime;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Instant;

/// Collaborators injected into the controller.
#[derive(Clone)]
pub struct HeaderDeps {
    pub store: Rc<dyn StoreQuery>,
    pub dispatcher: Rc<dyn StoreDispatch>,
    pub engine: Rc<dyn DocumentEngine>,
    pub bus: Rc<dyn EventBus>,
    pub registry: Rc<dyn SortStrategyRegistry>,
    pub callbacks: Rc<dyn HeaderCallbacks>,
}

/// Controller for one notes panel header instance.
pub struct HeaderController {
    deps: HeaderDeps,
    props: HeaderProps,
    labels: Labels,

    /// Shared with the bus listener, which holds only a `Weak`.
    state: Rc<RefCell<HeaderState>>,

    search: Debouncer<String>,
    subscription: Option<ListenerId>,
    mounted: bool,
}

impl HeaderController {
    /// Creates an unmounted controller. Call [`start`](Self::start) to mount.
    #[must_use]
    pub fn new(deps: HeaderDeps, props: HeaderProps, config: &Config) -> Self {
        Self {
            deps,
            props,
            labels: Labels::default(),
            state: Rc::new(RefCell::new(HeaderState::default())),
            search: Debouncer::new(config.debounce_window),
            subscription: None,
            mounted: false,
        }
    }

    /// Replaces the display labels, e.g. with translated strings.
    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Mounts the header.
    ///
    /// Seeds local state from the store's filter snapshot (the only time the
    /// snapshot is read) and subscribes to filter-changed bus events. Calling
    /// `start` on a mounted controller does nothing.
    pub fn start(&mut self) {
        if self.mounted {
            tracing::debug!("header already mounted");
            return;
        }

        let filters = self.deps.store.annotation_filters();
        *self.state.borrow_mut() = HeaderState::mounted(&filters);

        let weak: Weak<RefCell<HeaderState>> = Rc::downgrade(&self.state);
        let listener: Listener = Rc::new(move |event: &BusEvent| {
            let BusEvent::AnnotationFilterChanged(payload) = event else {
                return;
            };
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().apply_filter_change(payload);
            }
        });
        self.subscription = Some(self.deps.bus.add_listener(ANNOTATION_FILTER_CHANGED, listener));
        self.mounted = true;

        tracing::debug!("header mounted");
    }

    /// Unmounts the header: drops any pending search and unsubscribes.
    pub fn stop(&mut self) {
        if self.search.cancel() {
            tracing::debug!("pending search discarded on unmount");
        }
        if let Some(id) = self.subscription.take() {
            self.deps.bus.remove_listener(id);
        }
        if self.mounted {
            self.mounted = false;
            // A fresh cell orphans the old listener's `Weak`.
            self.state = Rc::new(RefCell::new(HeaderState::default()));
            tracing::debug!("header unmounted");
        }
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Replaces the per-render props supplied by the parent panel.
    pub fn set_props(&mut self, props: HeaderProps) {
        self.props = props;
    }

    #[must_use]
    pub const fn props(&self) -> &HeaderProps {
        &self.props
    }

    /// Whether any annotation filter is currently active.
    #[must_use]
    pub fn filter_enabled(&self) -> bool {
        self.state.borrow().filter_enabled
    }

    /// History date currently shown by the picker.
    #[must_use]
    pub fn search_date(&self) -> Option<NaiveDateTime> {
        self.state.borrow().search_date
    }

    /// Records raw search text typed at `now`.
    ///
    /// Nothing happens until the debounce window passes without further
    /// input; see [`poll`](Self::poll).
    pub fn on_search_input(&mut self, raw: &str, now: Instant) {
        if !self.mounted {
            tracing::debug!("search input on unmounted header ignored");
            return;
        }
        tracing::trace!(query_len = raw.len(), "search input debounced");
        self.search.push(raw.to_string(), now);
    }

    /// When the pending search becomes due, for scheduling a wake-up.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.search.next_deadline()
    }

    /// Commits the pending search if its window has elapsed by `now`.
    ///
    /// Returns `true` if a search was committed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }
        match self.search.poll(now) {
            Some(value) => {
                self.handle(&Event::SearchCommitted(value));
                true
            }
            None => false,
        }
    }

    /// Selects a sort strategy from the dropdown.
    pub fn select_sort_strategy(&mut self, strategy: SortStrategy) {
        self.handle(&Event::SortSelected(strategy));
    }

    /// Presses the multi-select mode button.
    pub fn press_multi_select(&mut self) {
        self.handle(&Event::MultiSelectPressed);
    }

    /// Presses the filter button.
    pub fn open_filter_modal(&mut self) {
        self.handle(&Event::FilterButtonPressed);
    }

    /// Picks (or with `None`, clears) the history date.
    pub fn select_history_date(&mut self, date: Option<NaiveDateTime>) {
        self.handle(&Event::HistoryDateChanged(date));
    }

    /// Runs an interaction through the event handler and executes the
    /// resulting actions. Returns whether the header should re-render.
    ///
    /// Search text enters through [`on_search_input`](Self::on_search_input)
    /// and [`poll`](Self::poll) only, so commits always pass the debouncer.
    pub(crate) fn handle(&mut self, event: &Event) -> bool {
        if !self.mounted {
            tracing::debug!(event_type = ?event, "event on unmounted header ignored");
            return false;
        }

        let ctx = HandlerContext {
            props: &self.props,
            sort_container_disabled: self.deps.store.is_element_disabled(elements::SORT_CONTAINER),
        };
        let (should_render, actions) = {
            let mut state = self.state.borrow_mut();
            handle_event(&mut state, &ctx, event)
        };

        tracing::debug!(action_count = actions.len(), should_render, "event handled");
        self.execute(actions);
        should_render
    }

    /// Composes the header for the current render.
    #[must_use]
    pub fn render(&self) -> HeaderView {
        // Cloned so a host render function may emit bus events re-entrantly.
        let state = self.state.borrow().clone();
        compose_header(&ComposeInputs {
            props: &self.props,
            state: &state,
            store: self.deps.store.as_ref(),
            registry: self.deps.registry.as_ref(),
            labels: &self.labels,
        })
    }

    fn execute(&self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::Dispatch(store_action) => self.deps.dispatcher.dispatch(store_action),
                Action::DeselectAllAnnotations => self.deps.engine.deselect_all_annotations(),
                Action::CommitSearch(value) => self.deps.callbacks.set_search_input(&value),
                Action::ToggleMultiSelectMode => self.deps.callbacks.toggle_multi_select_mode(),
                Action::Emit(event) => self.deps.bus.emit(&event),
            }
        }
    }
}

impl Drop for HeaderController {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for HeaderController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderController")
            .field("props", &self.props)
            .field("state", &self.state.borrow())
            .field("search", &self.search)
            .field("subscription", &self.subscription)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}
