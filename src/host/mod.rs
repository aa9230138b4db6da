//! Host-side collaborators of the header.
//!
//! # Modules
//!
//! - [`engine`]: Document engine operations (selection, page navigation)
//! - [`callbacks`]: Parent panel callbacks and per-render props
//! - [`registry`]: Sort strategy registry

pub mod callbacks;
pub mod engine;
pub mod registry;

pub use callbacks::{HeaderCallbacks, HeaderProps};
pub use engine::DocumentEngine;
pub use registry::{SortStrategyRegistry, StaticSortRegistry};
