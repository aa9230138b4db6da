//! Annotation history date handling.
//!
//! The history picker lets a user choose a point in time whose annotation
//! state external listeners should display. The header echoes the chosen value
//! for display and broadcasts it; it never reads it back from the store.

use chrono::NaiveDateTime;

/// Display format of the history picker (`dd/MM/yyyy h:mm aa`).
pub const HISTORY_DATE_DISPLAY_FORMAT: &str = "%d/%m/%Y %-I:%M %p";

/// Parse format accepting the display form, padded or not.
const HISTORY_DATE_PARSE_FORMAT: &str = "%d/%m/%Y %I:%M %p";

/// Minutes between selectable times in the picker.
pub const HISTORY_TIME_INTERVAL_MINUTES: u32 = 15;

/// Placeholder shown while no date is selected.
pub const HISTORY_DATE_PLACEHOLDER: &str = "Select a date to view annotation history";

/// Formats a history date the way the picker displays it.
#[must_use]
pub fn format_history_date(date: &NaiveDateTime) -> String {
    date.format(HISTORY_DATE_DISPLAY_FORMAT).to_string()
}

/// Parses typed picker text.
///
/// Blank input clears the selection and yields `Ok(None)`.
///
/// # Errors
///
/// Returns the chrono parse error when the text is not in picker format.
pub fn parse_history_date(text: &str) -> Result<Option<NaiveDateTime>, chrono::ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(trimmed, HISTORY_DATE_PARSE_FORMAT).map(Some)
}
