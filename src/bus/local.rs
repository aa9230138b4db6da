//! Event bus abstraction and a single-threaded implementation.
//!
//! Listeners are plain callbacks keyed by topic. Emission takes a snapshot of
//! the matching listeners before calling any of them, so a listener may add or
//! remove listeners (including itself) while an event is being delivered. A
//! listener added during delivery first hears the next event; one removed
//! during delivery is not called again, even for the current event.

use crate::bus::events::BusEvent;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Callback invoked for each event on a subscribed topic.
pub type Listener = Rc<dyn Fn(&BusEvent)>;

/// Handle identifying one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// External event bus.
pub trait EventBus {
    /// Registers `listener` for events published under `topic`.
    fn add_listener(&self, topic: &str, listener: Listener) -> ListenerId;

    /// Removes a listener. Returns `false` if it was not registered, which
    /// makes repeated removal harmless. Once this returns the listener is
    /// never invoked again, including by an emission already in progress.
    fn remove_listener(&self, id: ListenerId) -> bool;

    /// Delivers `event` to every listener of its topic.
    fn emit(&self, event: &BusEvent);
}

struct Registration {
    id: ListenerId,
    topic: String,
    listener: Listener,
}

/// In-process bus for single-threaded hosts.
#[derive(Default)]
pub struct LocalEventBus {
    registrations: RefCell<Vec<Registration>>,
    next_id: Cell<u64>,
}

impl LocalEventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of listeners currently registered for `topic`.
    #[must_use]
    pub fn listener_count(&self, topic: &str) -> usize {
        self.registrations
            .borrow()
            .iter()
            .filter(|registration| registration.topic == topic)
            .count()
    }

    fn is_registered(&self, id: ListenerId) -> bool {
        self.registrations
            .borrow()
            .iter()
            .any(|registration| registration.id == id)
    }
}

impl EventBus for LocalEventBus {
    fn add_listener(&self, topic: &str, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.registrations.borrow_mut().push(Registration {
            id,
            topic: topic.to_string(),
            listener,
        });
        tracing::trace!(topic = %topic, listener = id.0, "listener added");
        id
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        let mut registrations = self.registrations.borrow_mut();
        let before = registrations.len();
        registrations.retain(|registration| registration.id != id);
        let removed = registrations.len() != before;
        drop(registrations);
        tracing::trace!(listener = id.0, removed, "listener removal requested");
        removed
    }

    fn emit(&self, event: &BusEvent) {
        let topic = event.topic();
        let listeners: Vec<(ListenerId, Listener)> = self
            .registrations
            .borrow()
            .iter()
            .filter(|registration| registration.topic == topic)
            .map(|registration| (registration.id, Rc::clone(&registration.listener)))
            .collect();

        tracing::debug!(topic = %topic, listeners = listeners.len(), "emitting bus event");

        for (id, listener) in listeners {
            // Removed by an earlier listener of this emission.
            if !self.is_registered(id) {
                tracing::trace!(listener = id.0, "skipping listener removed during emit");
                continue;
            }
            listener(event);
        }
    }
}

impl fmt::Debug for LocalEventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalEventBus")
            .field("listeners", &self.registrations.borrow().len())
            .finish_non_exhaustive()
    }
}
