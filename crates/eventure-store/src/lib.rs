//! Record models and the persistence boundary for events, calendars and owners.
//!
//! ## Module Organization
//!
//! - `model`: `Event`, `Calendar` and `OwnerRecord` plus their insert shapes
//! - `store`: async store traits the service layer is written against
//! - `memory`: `MemoryStore`, an in-process implementation of every store trait
//! - `error`: store-level error type

pub mod error;
pub mod memory;
pub mod model;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::{MemoryStore, Seed};
pub use model::{
    Calendar, CalendarId, Event, EventId, NewCalendar, NewEvent, OwnerRecord,
};
pub use store::{CalendarStore, EventStore, UserDirectory};
