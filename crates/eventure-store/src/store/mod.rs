//! Store traits the service layer is written against.
//!
//! Implementations own id assignment and durability. Nothing here checks ownership; that
//! is the service layer's job.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::model::{Calendar, CalendarId, Event, EventId, NewCalendar, NewEvent, OwnerRecord};

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn find_by_id(&self, id: EventId) -> StoreResult<Option<Event>>;

    /// Events whose owner is `username`, in id order.
    async fn find_all_by_owner(&self, username: &str) -> StoreResult<Vec<Event>>;

    /// Every stored event, in id order.
    async fn find_all(&self) -> StoreResult<Vec<Event>>;

    /// Events linked to `calendar_id`, in id order.
    async fn find_all_by_calendar(&self, calendar_id: CalendarId) -> StoreResult<Vec<Event>>;

    /// Persists a new event and returns it with its assigned id.
    ///
    /// ## Errors
    /// `MissingReference` if `calendar_id` names a calendar that does not exist at write time.
    async fn insert(&self, event: NewEvent) -> StoreResult<Event>;

    /// Replaces the stored row with the same id.
    ///
    /// ## Errors
    /// `MissingRow` if no row has that id; `Rejected` for synthetic (non-positive) ids;
    /// `MissingReference` if `calendar_id` names a calendar that does not exist at write time.
    async fn update(&self, event: Event) -> StoreResult<Event>;

    /// Removes the row. Deleting an absent id is not an error.
    async fn delete_by_id(&self, id: EventId) -> StoreResult<()>;
}

#[async_trait]
pub trait CalendarStore: Send + Sync {
    async fn find_by_id(&self, id: CalendarId) -> StoreResult<Option<Calendar>>;

    async fn find_all_by_owner(&self, username: &str) -> StoreResult<Vec<Calendar>>;

    async fn find_all(&self) -> StoreResult<Vec<Calendar>>;

    async fn insert(&self, calendar: NewCalendar) -> StoreResult<Calendar>;

    async fn update(&self, calendar: Calendar) -> StoreResult<Calendar>;

    /// Removes the calendar and unlinks every event that referenced it, as one write.
    /// Returns how many events were unlinked; an absent id unlinks nothing.
    async fn delete_detaching(&self, id: CalendarId) -> StoreResult<usize>;
}

/// External user directory that maps an authenticated identity to an account.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn resolve_owner(&self, username: &str) -> StoreResult<Option<OwnerRecord>>;
}
