//! Note domain model.
//!
//! A note is an annotation-derived comment or markup item listed in the panel.
//! The header only cares about how many notes there are and which ones, so the
//! model carries nothing beyond an identifier.

use serde::{Deserialize, Serialize};

/// A note shown in the notes panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
}

impl Note {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
