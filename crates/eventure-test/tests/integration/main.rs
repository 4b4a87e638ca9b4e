//! Cross-crate scenarios run against the in-memory store.

mod calendars;
mod events;
mod recurrence;
