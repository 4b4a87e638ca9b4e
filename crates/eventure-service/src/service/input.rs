use chrono::{DateTime, Utc};
use eventure_store::CalendarId;
use serde::Deserialize;

/// Client-supplied fields for creating or updating an event.
///
/// Owner, id and the recurring flag are never taken from the client; the service derives them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventInput {
    pub title: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub completed: bool,
    /// Calendar to attach to. `None` detaches.
    pub calendar_id: Option<CalendarId>,
    pub recurrence_rule: Option<String>,
    pub recurrence_end_date: Option<DateTime<Utc>>,
}

impl EventInput {
    /// Recurrence text with blank values treated as absent.
    #[must_use]
    pub fn normalized_rule(&self) -> Option<String> {
        self.recurrence_rule
            .as_deref()
            .map(str::trim)
            .filter(|rule| !rule.is_empty())
            .map(str::to_string)
    }
}

/// Client-supplied fields for creating or updating a calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarInput {
    pub name: String,
    pub color: Option<String>,
}
