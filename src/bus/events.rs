//! Events carried by the external event bus.
//!
//! The header listens for [`BusEvent::AnnotationFilterChanged`] and emits
//! [`BusEvent::AnnotHistoryDateSelected`]. Hosts that bridge a foreign event
//! system (for example DOM custom events) exchange the event detail as JSON via
//! [`BusEvent::from_json`] and [`BusEvent::detail_json`].

use crate::domain::error::{HeaderError, Result};
use crate::domain::FilterChangedPayload;
use chrono::NaiveDateTime;

/// Topic fired whenever the annotation filter changes.
pub const ANNOTATION_FILTER_CHANGED: &str = "annotationFilterChanged";

/// Topic fired when the user picks (or clears) a history date.
pub const ANNOT_HISTORY_DATE_SELECTED: &str = "annotHistoryDateSelected";

/// An event travelling over the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEvent {
    /// The annotation filter changed; the payload holds the new facets.
    AnnotationFilterChanged(FilterChangedPayload),

    /// A history date was selected. `None` means the picker was cleared.
    AnnotHistoryDateSelected(Option<NaiveDateTime>),
}

impl BusEvent {
    /// Topic name this event is delivered under.
    #[must_use]
    pub const fn topic(&self) -> &'static str {
        match self {
            Self::AnnotationFilterChanged(_) => ANNOTATION_FILTER_CHANGED,
            Self::AnnotHistoryDateSelected(_) => ANNOT_HISTORY_DATE_SELECTED,
        }
    }

    /// Decodes a bridged event from its topic and JSON detail.
    ///
    /// # Errors
    ///
    /// - [`HeaderError::UnknownEvent`] for topics other than the two above
    /// - [`HeaderError::Payload`] when the detail does not match the topic
    ///
    /// # Example
    ///
    /// ```
    /// use notes_header::bus::{BusEvent, ANNOTATION_FILTER_CHANGED};
    ///
    /// let event = BusEvent::from_json(
    ///     ANNOTATION_FILTER_CHANGED,
    ///     r#"{"types":[],"authors":["a1"],"colors":[],"statuses":[]}"#,
    /// )?;
    /// assert_eq!(event.topic(), ANNOTATION_FILTER_CHANGED);
    /// # Ok::<(), notes_header::HeaderError>(())
    /// ```
    pub fn from_json(topic: &str, detail: &str) -> Result<Self> {
        match topic {
            ANNOTATION_FILTER_CHANGED => Ok(Self::AnnotationFilterChanged(serde_json::from_str(detail)?)),
            ANNOT_HISTORY_DATE_SELECTED => Ok(Self::AnnotHistoryDateSelected(serde_json::from_str(detail)?)),
            other => Err(HeaderError::UnknownEvent(other.to_string())),
        }
    }

    /// Encodes the event detail as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::Payload`] if serialization fails.
    pub fn detail_json(&self) -> Result<String> {
        let json = match self {
            Self::AnnotationFilterChanged(payload) => serde_json::to_string(payload)?,
            Self::AnnotHistoryDateSelected(date) => serde_json::to_string(date)?,
        };
        Ok(json)
    }
}
