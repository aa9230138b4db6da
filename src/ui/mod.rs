//! Header composition layer.
//!
//! Turns store state, props and local header state into an immutable view
//! model. Drawing the view model is the host's business.
//!
//! ```text
//! StoreQuery + HeaderProps + HeaderState → compose_header → HeaderView → host UI
//! ```
//!
//! # Modules
//!
//! - [`elements`]: Stable element identifiers used for store visibility flags
//! - [`viewmodel`]: View model types and display labels
//! - [`compose`]: Header mode selection and default header composition

pub mod compose;
pub mod elements;
pub mod viewmodel;

pub use compose::{compose_header, ComposeInputs};
pub use viewmodel::{
    ButtonView, CounterView, DatePickerView, DefaultHeaderView, HeaderView, HistoryPanelView, Labels,
    SearchFieldView, SortControlView, SortRowView,
};
