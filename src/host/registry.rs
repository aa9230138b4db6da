//! Sort strategy registry.
//!
//! The registry is queried on every render rather than cached, so strategies a
//! host registers after the header is mounted show up in the dropdown on the
//! next render.

use crate::domain::SortStrategy;
use std::cell::RefCell;

/// Source of the currently valid sort strategy keys.
pub trait SortStrategyRegistry {
    /// Valid keys in display order.
    fn strategy_keys(&self) -> Vec<SortStrategy>;
}

/// Registry seeded with the built-in strategies, extendable at runtime.
#[derive(Debug)]
pub struct StaticSortRegistry {
    keys: RefCell<Vec<SortStrategy>>,
}

impl Default for StaticSortRegistry {
    fn default() -> Self {
        Self {
            keys: RefCell::new(SortStrategy::BUILT_IN.iter().map(|key| SortStrategy::new(*key)).collect()),
        }
    }
}

impl StaticSortRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a strategy key. Registering an existing key keeps its position.
    pub fn register(&self, key: impl Into<SortStrategy>) {
        let key = key.into();
        let mut keys = self.keys.borrow_mut();
        if keys.contains(&key) {
            tracing::debug!(strategy = %key, "sort strategy already registered");
            return;
        }
        tracing::debug!(strategy = %key, "sort strategy registered");
        keys.push(key);
    }
}

impl SortStrategyRegistry for StaticSortRegistry {
    fn strategy_keys(&self) -> Vec<SortStrategy> {
        self.keys.borrow().clone()
    }
}
