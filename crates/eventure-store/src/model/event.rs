use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::calendar::CalendarId;

pub type EventId = i64;

/// Calendar event record.
///
/// Stored rows always carry a positive id. Occurrences expanded from a recurring event on
/// read use negative ids and never reach a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed: bool,
    /// Username of the creating account. `None` only for rows written outside the service.
    pub owner: Option<String>,
    pub calendar_id: Option<CalendarId>,
    #[serde(default)]
    pub is_recurring: bool,
    /// RRULE-style text, e.g. `FREQ=WEEKLY;INTERVAL=2;COUNT=10`.
    pub recurrence_rule: Option<String>,
    pub recurrence_end_date: Option<DateTime<Utc>>,
}

impl Event {
    /// Returns `true` for read-time occurrences that were never persisted.
    #[must_use]
    pub const fn is_synthetic(&self) -> bool {
        self.id < 0
    }

    /// `end_time - start_time`, when both are present.
    #[must_use]
    pub fn duration(&self) -> Option<TimeDelta> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(end.signed_duration_since(start)),
            _ => None,
        }
    }
}

/// Insert struct for creating new events
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub completed: bool,
    pub owner: String,
    pub calendar_id: Option<CalendarId>,
    pub is_recurring: bool,
    pub recurrence_rule: Option<String>,
    pub recurrence_end_date: Option<DateTime<Utc>>,
}

impl NewEvent {
    /// Attaches the store-assigned id.
    #[must_use]
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            start_time: self.start_time,
            end_time: self.end_time,
            completed: self.completed,
            owner: Some(self.owner),
            calendar_id: self.calendar_id,
            is_recurring: self.is_recurring,
            recurrence_rule: self.recurrence_rule,
            recurrence_end_date: self.recurrence_end_date,
        }
    }
}
