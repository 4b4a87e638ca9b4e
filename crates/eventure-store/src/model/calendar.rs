use serde::{Deserialize, Serialize};

pub type CalendarId = i64;

/// A named, colored grouping of events owned by one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    pub id: CalendarId,
    pub name: String,
    pub color: Option<String>,
    /// Username of the owning account. Set once at creation.
    pub owner: Option<String>,
}

/// Insert shape for creating calendars
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCalendar {
    pub name: String,
    pub color: Option<String>,
    pub owner: String,
}

impl NewCalendar {
    /// Attaches the store-assigned id.
    #[must_use]
    pub fn into_calendar(self, id: CalendarId) -> Calendar {
        Calendar {
            id,
            name: self.name,
            color: self.color,
            owner: Some(self.owner),
        }
    }
}
