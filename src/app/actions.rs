//! Side effects produced by the header event handler.
//!
//! [`handle_event`](crate::app::handle_event) is pure: it updates local header
//! state and returns a `Vec<Action>`. The
//! [`HeaderController`](crate::app::HeaderController) executes the actions in
//! order against the store, document engine, bus and parent callbacks. Order
//! is significant; for example selection is always cleared before the
//! multi-select mode flips.

use crate::bus::BusEvent;
use crate::store::StoreAction;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Dispatches a store action.
    Dispatch(StoreAction),

    /// Clears every annotation selection in the document engine.
    DeselectAllAnnotations,

    /// Hands committed search text to the parent panel.
    CommitSearch(String),

    /// Asks the parent panel to flip multi-select mode.
    ToggleMultiSelectMode,

    /// Publishes an event on the external bus.
    Emit(BusEvent),
}
