//! In-process store backed by ordered maps.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::model::{Calendar, CalendarId, Event, EventId, NewCalendar, NewEvent, OwnerRecord};
use crate::store::{CalendarStore, EventStore, UserDirectory};

/// Initial contents for a `MemoryStore`, usually read from a JSON file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Seed {
    pub owners: Vec<OwnerRecord>,
    pub calendars: Vec<Calendar>,
    pub events: Vec<Event>,
}

impl Seed {
    /// ## Summary
    /// Parses seed data from JSON text.
    ///
    /// ## Errors
    /// Returns `SeedParse` if the text is not a valid seed document.
    pub fn from_json(text: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Debug, Default)]
struct Tables {
    owners: BTreeMap<String, OwnerRecord>,
    calendars: BTreeMap<CalendarId, Calendar>,
    events: BTreeMap<EventId, Event>,
    last_calendar_id: CalendarId,
    last_event_id: EventId,
}

/// Store implementation holding every table in memory.
///
/// Ids are assigned from counters that only move forward, so a deleted id is never reused.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Builds a store pre-populated with seed rows, keeping their ids.
    ///
    /// ## Errors
    /// Returns `InvalidSeed` if an id is non-positive or repeated, or an event references a
    /// calendar the seed does not contain.
    pub fn from_seed(seed: Seed) -> StoreResult<Self> {
        let mut tables = Tables::default();

        for owner in seed.owners {
            if tables.owners.contains_key(&owner.username) {
                return Err(StoreError::InvalidSeed(format!(
                    "duplicate owner '{}'",
                    owner.username
                )));
            }
            tables.owners.insert(owner.username.clone(), owner);
        }

        for calendar in seed.calendars {
            if calendar.id <= 0 || tables.calendars.contains_key(&calendar.id) {
                return Err(StoreError::InvalidSeed(format!(
                    "calendar id {} is not a unique positive id",
                    calendar.id
                )));
            }
            tables.last_calendar_id = tables.last_calendar_id.max(calendar.id);
            tables.calendars.insert(calendar.id, calendar);
        }

        for event in seed.events {
            if event.id <= 0 || tables.events.contains_key(&event.id) {
                return Err(StoreError::InvalidSeed(format!(
                    "event id {} is not a unique positive id",
                    event.id
                )));
            }
            if let Some(calendar_id) = event.calendar_id
                && !tables.calendars.contains_key(&calendar_id)
            {
                return Err(StoreError::InvalidSeed(format!(
                    "event {} references missing calendar {calendar_id}",
                    event.id
                )));
            }
            tables.last_event_id = tables.last_event_id.max(event.id);
            tables.events.insert(event.id, event);
        }

        tracing::debug!(
            owners = tables.owners.len(),
            calendars = tables.calendars.len(),
            events = tables.events.len(),
            "Memory store seeded"
        );

        Ok(Self {
            tables: RwLock::new(tables),
        })
    }

    /// Registers an account with the directory side of the store.
    pub async fn add_owner(&self, owner: OwnerRecord) {
        let mut tables = self.tables.write().await;
        tables.owners.insert(owner.username.clone(), owner);
    }
}

impl Tables {
    fn check_calendar_ref(&self, calendar_id: Option<CalendarId>) -> StoreResult<()> {
        match calendar_id {
            Some(id) if !self.calendars.contains_key(&id) => Err(StoreError::MissingReference {
                table: "calendar",
                id,
            }),
            _ => Ok(()),
        }
    }
}

fn owned_by<'a, T, F>(rows: impl Iterator<Item = &'a T>, owner_of: F, username: &str) -> Vec<T>
where
    T: Clone + 'a,
    F: Fn(&T) -> Option<&str>,
{
    rows.filter(|row| owner_of(*row) == Some(username))
        .cloned()
        .collect()
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn find_by_id(&self, id: EventId) -> StoreResult<Option<Event>> {
        Ok(self.tables.read().await.events.get(&id).cloned())
    }

    async fn find_all_by_owner(&self, username: &str) -> StoreResult<Vec<Event>> {
        let tables = self.tables.read().await;
        Ok(owned_by(
            tables.events.values(),
            |event| event.owner.as_deref(),
            username,
        ))
    }

    async fn find_all(&self) -> StoreResult<Vec<Event>> {
        Ok(self.tables.read().await.events.values().cloned().collect())
    }

    async fn find_all_by_calendar(&self, calendar_id: CalendarId) -> StoreResult<Vec<Event>> {
        let tables = self.tables.read().await;
        Ok(tables
            .events
            .values()
            .filter(|event| event.calendar_id == Some(calendar_id))
            .cloned()
            .collect())
    }

    async fn insert(&self, event: NewEvent) -> StoreResult<Event> {
        let mut tables = self.tables.write().await;
        tables.check_calendar_ref(event.calendar_id)?;
        tables.last_event_id += 1;
        let event = event.into_event(tables.last_event_id);
        tables.events.insert(event.id, event.clone());
        tracing::trace!(event_id = event.id, "Inserted event");
        Ok(event)
    }

    async fn update(&self, event: Event) -> StoreResult<Event> {
        if event.is_synthetic() || event.id == 0 {
            return Err(StoreError::Rejected(format!(
                "event id {} is not a stored id",
                event.id
            )));
        }
        let mut tables = self.tables.write().await;
        tables.check_calendar_ref(event.calendar_id)?;
        let Some(row) = tables.events.get_mut(&event.id) else {
            return Err(StoreError::MissingRow {
                table: "event",
                id: event.id,
            });
        };
        row.clone_from(&event);
        tracing::trace!(event_id = event.id, "Updated event");
        Ok(event)
    }

    async fn delete_by_id(&self, id: EventId) -> StoreResult<()> {
        self.tables.write().await.events.remove(&id);
        tracing::trace!(event_id = id, "Deleted event");
        Ok(())
    }
}

#[async_trait]
impl CalendarStore for MemoryStore {
    async fn find_by_id(&self, id: CalendarId) -> StoreResult<Option<Calendar>> {
        Ok(self.tables.read().await.calendars.get(&id).cloned())
    }

    async fn find_all_by_owner(&self, username: &str) -> StoreResult<Vec<Calendar>> {
        let tables = self.tables.read().await;
        Ok(owned_by(
            tables.calendars.values(),
            |calendar| calendar.owner.as_deref(),
            username,
        ))
    }

    async fn find_all(&self) -> StoreResult<Vec<Calendar>> {
        Ok(self.tables.read().await.calendars.values().cloned().collect())
    }

    async fn insert(&self, calendar: NewCalendar) -> StoreResult<Calendar> {
        let mut tables = self.tables.write().await;
        tables.last_calendar_id += 1;
        let calendar = calendar.into_calendar(tables.last_calendar_id);
        tables.calendars.insert(calendar.id, calendar.clone());
        tracing::trace!(calendar_id = calendar.id, "Inserted calendar");
        Ok(calendar)
    }

    async fn update(&self, calendar: Calendar) -> StoreResult<Calendar> {
        let mut tables = self.tables.write().await;
        let Some(row) = tables.calendars.get_mut(&calendar.id) else {
            return Err(StoreError::MissingRow {
                table: "calendar",
                id: calendar.id,
            });
        };
        row.clone_from(&calendar);
        tracing::trace!(calendar_id = calendar.id, "Updated calendar");
        Ok(calendar)
    }

    async fn delete_detaching(&self, id: CalendarId) -> StoreResult<usize> {
        let mut tables = self.tables.write().await;
        if tables.calendars.remove(&id).is_none() {
            return Ok(0);
        }
        let mut detached = 0;
        for event in tables.events.values_mut() {
            if event.calendar_id == Some(id) {
                event.calendar_id = None;
                detached += 1;
            }
        }
        tracing::trace!(calendar_id = id, detached, "Deleted calendar");
        Ok(detached)
    }
}

#[async_trait]
impl UserDirectory for MemoryStore {
    async fn resolve_owner(&self, username: &str) -> StoreResult<Option<OwnerRecord>> {
        Ok(self.tables.read().await.owners.get(username).cloned())
    }
}
