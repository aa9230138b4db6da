//! Global store interfaces and the in-memory backend.
//!
//! # Modules
//!
//! - [`backend`]: `StoreQuery` / `StoreDispatch` traits and `StoreAction`
//! - [`memory`]: `MemoryStore`, a reducer-backed single-threaded store

pub mod backend;
pub mod memory;

pub use backend::{StoreAction, StoreDispatch, StoreQuery};
pub use memory::{MemoryStore, StoreSnapshot};
