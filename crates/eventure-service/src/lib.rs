//! Recurrence expansion and ownership-scoped mutation for events and calendars.
//!
//! ## Module Organization
//!
//! - `recurrence`: rule parsing, occurrence generation, occurrence materialization and the
//!   fail-open expansion pass used by event listings
//! - `auth`: the ownership guard applied before every update and delete
//! - `service`: `EventService` and `CalendarService`, the create/read/update/delete entry points
//! - `error`: service-level error type

pub mod auth;
pub mod error;
pub mod recurrence;
pub mod service;

pub use error::{ServiceError, ServiceResult};
pub use service::{CalendarInput, CalendarService, EventInput, EventService};
