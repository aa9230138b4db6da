use chrono::NaiveDate;
use notes_header::app::{HeaderController, HeaderDeps, HeaderMode};
use notes_header::bus::{BusEvent, EventBus, LocalEventBus, ANNOTATION_FILTER_CHANGED, ANNOT_HISTORY_DATE_SELECTED};
use notes_header::domain::{CustomContent, CustomHeaderOptions, FilterChangedPayload, FilterState};
use notes_header::host::{DocumentEngine, HeaderCallbacks, HeaderProps, StaticSortRegistry};
use notes_header::store::{MemoryStore, StoreAction, StoreDispatch, StoreQuery, StoreSnapshot};
use notes_header::ui::elements;
use notes_header::{Config, Note, Result, SortStrategy};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

type Log = Rc<RefCell<Vec<String>>>;

struct RecordingEngine(Log);

impl DocumentEngine for RecordingEngine {
    fn deselect_all_annotations(&self) {
        self.0.borrow_mut().push("deselect".to_string());
    }

    fn set_current_page(&self, page: u32) -> Result<()> {
        self.0.borrow_mut().push(format!("page:{page}"));
        Ok(())
    }
}

struct RecordingPanel(Log);

impl HeaderCallbacks for RecordingPanel {
    fn set_search_input(&self, value: &str) {
        self.0.borrow_mut().push(format!("search:{value}"));
    }

    fn toggle_multi_select_mode(&self) {
        self.0.borrow_mut().push("toggle".to_string());
    }
}

struct RecordingDispatcher {
    store: Rc<MemoryStore>,
    actions: RefCell<Vec<StoreAction>>,
}

impl StoreDispatch for RecordingDispatcher {
    fn dispatch(&self, action: StoreAction) {
        self.actions.borrow_mut().push(action.clone());
        self.store.dispatch(action);
    }
}

struct Harness {
    log: Log,
    store: Rc<MemoryStore>,
    dispatcher: Rc<RecordingDispatcher>,
    bus: Rc<LocalEventBus>,
    registry: Rc<StaticSortRegistry>,
}

impl Harness {
    fn new(snapshot: StoreSnapshot) -> Self {
        let store = Rc::new(MemoryStore::new(snapshot));
        Self {
            log: Rc::default(),
            dispatcher: Rc::new(RecordingDispatcher {
                store: store.clone(),
                actions: RefCell::default(),
            }),
            store,
            bus: Rc::new(LocalEventBus::new()),
            registry: Rc::new(StaticSortRegistry::new()),
        }
    }

    fn controller(&self, props: HeaderProps) -> HeaderController {
        let deps = HeaderDeps {
            store: self.store.clone(),
            dispatcher: self.dispatcher.clone(),
            engine: Rc::new(RecordingEngine(self.log.clone())),
            bus: self.bus.clone(),
            registry: self.registry.clone(),
            callbacks: Rc::new(RecordingPanel(self.log.clone())),
        };
        HeaderController::new(deps, props, &Config::default())
    }

    fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

fn props_with_notes(count: usize) -> HeaderProps {
    HeaderProps {
        notes: (0..count).map(|i| Note::new(format!("note-{i}"))).collect(),
        is_multi_select_enabled: true,
        ..HeaderProps::default()
    }
}

fn authors(names: &[&str]) -> FilterChangedPayload {
    FilterChangedPayload {
        authors: names.iter().map(|n| (*n).to_string()).collect(),
        ..FilterChangedPayload::default()
    }
}

#[test]
fn rapid_typing_commits_last_value_once() {
    let harness = Harness::new(StoreSnapshot::default());
    let mut header = harness.controller(props_with_notes(2));
    header.start();

    let t0 = Instant::now();
    header.on_search_input("i", t0);
    header.on_search_input("in", t0 + Duration::from_millis(100));
    header.on_search_input("ink", t0 + Duration::from_millis(200));

    assert_eq!(header.next_deadline(), Some(t0 + Duration::from_millis(700)));
    assert!(!header.poll(t0 + Duration::from_millis(699)));
    assert!(harness.log().is_empty());

    assert!(header.poll(t0 + Duration::from_millis(700)));
    assert!(!header.poll(t0 + Duration::from_millis(2000)));
    assert_eq!(harness.log(), vec!["deselect", "search:ink"]);
}

#[test]
fn unmount_discards_pending_search() {
    let harness = Harness::new(StoreSnapshot::default());
    let mut header = harness.controller(props_with_notes(1));
    header.start();

    let t0 = Instant::now();
    header.on_search_input("draft", t0);
    header.stop();

    assert!(header.next_deadline().is_none());
    assert!(!header.poll(t0 + Duration::from_secs(5)));
    header.on_search_input("late", t0 + Duration::from_secs(6));
    assert!(!header.poll(t0 + Duration::from_secs(10)));
    assert!(harness.log().is_empty());
}

#[test]
fn filter_flag_seeds_from_store_and_follows_bus() {
    let harness = Harness::new(StoreSnapshot {
        annotation_filters: FilterState {
            color_filter: vec!["#ff0000".to_string()],
            ..FilterState::default()
        },
        ..StoreSnapshot::default()
    });
    let mut header = harness.controller(props_with_notes(1));
    assert!(!header.filter_enabled());

    header.start();
    assert!(header.filter_enabled());

    harness.bus.emit(&BusEvent::AnnotationFilterChanged(authors(&[])));
    assert!(!header.filter_enabled());

    harness.bus.emit(&BusEvent::AnnotationFilterChanged(authors(&["a1"])));
    assert!(header.filter_enabled());
    assert!(header.render().default_header.unwrap().sort_row.unwrap().filter.active);
}

#[test]
fn store_filter_change_without_bus_event_is_not_observed() {
    let harness = Harness::new(StoreSnapshot::default());
    let mut header = harness.controller(props_with_notes(1));
    header.start();

    harness.store.dispatch(StoreAction::SetAnnotationFilters(FilterState {
        author_filter: vec!["a1".to_string()],
        ..FilterState::default()
    }));
    assert!(!header.filter_enabled());
}

#[test]
fn empty_panel_renders_disabled_controls() {
    let harness = Harness::new(StoreSnapshot::default());
    let props = HeaderProps {
        notes: Vec::new(),
        disable_filter_annotation: true,
        is_multi_select_mode: false,
        is_multi_select_enabled: true,
    };
    let mut header = harness.controller(props);
    header.start();

    let view = header.render();
    assert_eq!(view.mode, HeaderMode::Default);
    let default_header = view.default_header.unwrap();
    let counter = default_header.counter.unwrap();
    assert_eq!(counter.count_text(), "(0)");
    assert_eq!(counter.text(), "Comments (0)");

    let sort_row = default_header.sort_row.unwrap();
    assert!(sort_row.sort.unwrap().disabled);
    assert!(sort_row.multi_select.unwrap().disabled);
    assert!(sort_row.filter.disabled);

    header.select_sort_strategy(SortStrategy::new(SortStrategy::TIME));
    header.press_multi_select();
    header.open_filter_modal();
    assert!(harness.dispatcher.actions.borrow().is_empty());
    assert!(harness.log().is_empty());
}

#[test]
fn sort_selection_dispatches_once() {
    let harness = Harness::new(StoreSnapshot::default());
    let mut header = harness.controller(props_with_notes(3));
    header.start();

    let time = SortStrategy::new(SortStrategy::TIME);
    header.select_sort_strategy(time.clone());

    assert_eq!(
        *harness.dispatcher.actions.borrow(),
        vec![StoreAction::SetSortStrategy(time.clone())]
    );
    assert_eq!(harness.store.sort_strategy(), time);
    assert_eq!(header.render().default_header.unwrap().sort_row.unwrap().sort.unwrap().current, time);
}

#[test]
fn multi_select_deselects_before_toggling() {
    let harness = Harness::new(StoreSnapshot::default());
    let mut header = harness.controller(props_with_notes(1));
    header.start();

    header.press_multi_select();
    assert_eq!(harness.log(), vec!["deselect", "toggle"]);
}

#[test]
fn filter_button_opens_modal() {
    let harness = Harness::new(StoreSnapshot::default());
    let mut header = harness.controller(props_with_notes(1));
    header.start();

    header.open_filter_modal();
    assert!(harness.store.is_element_open(elements::FILTER_MODAL));
}

#[test]
fn history_date_is_broadcast_and_displayed() {
    let harness = Harness::new(StoreSnapshot::default());
    let received: Rc<RefCell<Vec<BusEvent>>> = Rc::default();
    let sink = received.clone();
    harness.bus.add_listener(
        ANNOT_HISTORY_DATE_SELECTED,
        Rc::new(move |event: &BusEvent| sink.borrow_mut().push(event.clone())),
    );

    let mut header = harness.controller(props_with_notes(1));
    header.start();

    let date = NaiveDate::from_ymd_opt(2024, 2, 29)
        .and_then(|d| d.and_hms_opt(14, 30, 0))
        .unwrap();
    header.select_history_date(Some(date));
    header.select_history_date(None);

    assert_eq!(
        *received.borrow(),
        vec![
            BusEvent::AnnotHistoryDateSelected(Some(date)),
            BusEvent::AnnotHistoryDateSelected(None),
        ]
    );
    assert!(header.search_date().is_none());
    assert!(header.render().default_header.unwrap().history.date_picker.display.is_none());
}

#[test]
fn custom_header_modes() {
    let harness = Harness::new(StoreSnapshot::default());
    let mut header = harness.controller(props_with_notes(2));
    header.start();

    let render = |notes: &[Note]| CustomContent(format!("{} notes", notes.len()));
    harness
        .store
        .dispatch(StoreAction::SetCustomHeaderOptions(Some(CustomHeaderOptions::new(render, false))));
    let view = header.render();
    assert_eq!(view.mode, HeaderMode::Overlay);
    assert_eq!(view.custom, Some(CustomContent("2 notes".to_string())));
    assert!(view.default_header.is_some());

    harness
        .store
        .dispatch(StoreAction::SetCustomHeaderOptions(Some(CustomHeaderOptions::new(render, true))));
    let view = header.render();
    assert_eq!(view.mode, HeaderMode::Replaced);
    assert!(view.default_header.is_none());
}

#[test]
fn registry_changes_show_on_next_render() {
    let harness = Harness::new(StoreSnapshot::default());
    let mut header = harness.controller(props_with_notes(1));
    header.start();

    harness.registry.register("priority");
    let items = header.render().default_header.unwrap().sort_row.unwrap().sort.unwrap().items;
    assert_eq!(items.last(), Some(&SortStrategy::new("priority")));
}

#[test]
fn stop_is_idempotent_and_unsubscribes() {
    let harness = Harness::new(StoreSnapshot::default());
    let mut header = harness.controller(props_with_notes(1));

    header.start();
    header.start();
    assert_eq!(harness.bus.listener_count(ANNOTATION_FILTER_CHANGED), 1);

    header.stop();
    header.stop();
    assert!(!header.is_mounted());
    assert_eq!(harness.bus.listener_count(ANNOTATION_FILTER_CHANGED), 0);

    harness.bus.emit(&BusEvent::AnnotationFilterChanged(authors(&["a1"])));
    assert!(!header.filter_enabled());

    header.press_multi_select();
    assert!(harness.log().is_empty());
}

#[test]
fn listener_stopping_header_mid_emit_prevents_further_updates() {
    let harness = Harness::new(StoreSnapshot::default());
    let header = Rc::new(RefCell::new(harness.controller(props_with_notes(1))));

    let weak = Rc::downgrade(&header);
    harness.bus.add_listener(
        ANNOTATION_FILTER_CHANGED,
        Rc::new(move |_: &BusEvent| {
            if let Some(header) = weak.upgrade() {
                header.borrow_mut().stop();
            }
        }),
    );
    header.borrow_mut().start();

    harness.bus.emit(&BusEvent::AnnotationFilterChanged(authors(&["a1"])));

    let header = header.borrow();
    assert!(!header.is_mounted());
    assert!(!header.filter_enabled());
    assert_eq!(harness.bus.listener_count(ANNOTATION_FILTER_CHANGED), 1);
}

#[test]
fn drop_unsubscribes() {
    let harness = Harness::new(StoreSnapshot::default());
    {
        let mut header = harness.controller(HeaderProps::default());
        header.start();
        assert_eq!(harness.bus.listener_count(ANNOTATION_FILTER_CHANGED), 1);
    }
    assert_eq!(harness.bus.listener_count(ANNOTATION_FILTER_CHANGED), 0);
}
