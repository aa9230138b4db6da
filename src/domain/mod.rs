//! Domain layer for the notes panel header.
//!
//! Core types independent of any store, bus, or engine implementation.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`filter`]: Filter facets from store snapshots and bus payloads
//! - [`note`]: Note identity
//! - [`sort`]: Sort strategy keys
//! - [`custom_header`]: Host-supplied custom header options
//! - [`history`]: History date display and parsing

pub mod custom_header;
pub mod error;
pub mod filter;
pub mod history;
pub mod note;
pub mod sort;

pub use custom_header::{CustomContent, CustomHeaderOptions, CustomHeaderRender};
pub use error::{HeaderError, Result};
pub use filter::{FilterChangedPayload, FilterFacets, FilterState, HasFilterFacets};
pub use note::Note;
pub use sort::SortStrategy;
