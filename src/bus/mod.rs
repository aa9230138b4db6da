//! External event bus.
//!
//! # Modules
//!
//! - [`events`]: Bus event types, topic names and JSON bridging
//! - [`local`]: `EventBus` trait and the single-threaded `LocalEventBus`

pub mod events;
pub mod local;

pub use events::{BusEvent, ANNOTATION_FILTER_CHANGED, ANNOT_HISTORY_DATE_SELECTED};
pub use local::{EventBus, Listener, ListenerId, LocalEventBus};
