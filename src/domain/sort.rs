//! Sort strategy keys.
//!
//! Notes are ordered by a named strategy. The key set is open: hosts may
//! register additional strategies at runtime through a
//! [`SortStrategyRegistry`](crate::host::SortStrategyRegistry), so keys are a
//! string newtype rather than a closed enum. The built-in keys are exposed as
//! associated constants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key into the registered sort strategy table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortStrategy(String);

impl SortStrategy {
    pub const POSITION: &'static str = "position";
    pub const TIME: &'static str = "time";
    pub const STATUS: &'static str = "status";
    pub const AUTHOR: &'static str = "author";
    pub const TYPE: &'static str = "type";
    pub const COLOR: &'static str = "color";
    pub const CREATED_DATE: &'static str = "createdDate";
    pub const MODIFIED_DATE: &'static str = "modifiedDate";

    /// Keys available before any host registration, in display order.
    pub const BUILT_IN: [&'static str; 8] = [
        Self::POSITION,
        Self::TIME,
        Self::STATUS,
        Self::AUTHOR,
        Self::TYPE,
        Self::COLOR,
        Self::CREATED_DATE,
        Self::MODIFIED_DATE,
    ];

    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Translation key used for the dropdown item label.
    #[must_use]
    pub fn label_key(&self) -> String {
        format!("option.notesOrder.{}", self.0)
    }
}

impl Default for SortStrategy {
    fn default() -> Self {
        Self::new(Self::POSITION)
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SortStrategy {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}
