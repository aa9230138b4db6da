//! Application layer: header state, interactions and lifecycle.
//!
//! # Architecture
//!
//! ```text
//! user input ─▶ HeaderController ─▶ handle_event ─▶ HeaderState + Vec<Action>
//!                    │    ▲                                     │
//!                    │    └── bus listener (filter changed)     ▼
//!                    └──────────── executes ──▶ store / engine / bus / parent
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects emitted by the event handler
//! - [`controller`]: Mount/unmount lifecycle and action execution
//! - [`debounce`]: Deadline-based trailing debouncer
//! - [`handler`]: Pure interaction handling
//! - [`modes`]: Default / overlay / replaced header modes
//! - [`state`]: Controller-local state

pub mod actions;
pub mod controller;
pub mod debounce;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use controller::{HeaderController, HeaderDeps};
pub use debounce::Debouncer;
pub use handler::{handle_event, Event, HandlerContext};
pub use modes::HeaderMode;
pub use state::HeaderState;
