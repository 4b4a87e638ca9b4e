//! Read-time expansion of recurring events.
//!
//! Recurring events are stored once. Every listing runs the stored rows through
//! `expand_events`, which appends the synthetic occurrences that fall inside the
//! expansion window. Occurrences carry negative ids and are never persisted.

pub mod expand;
pub mod generator;
pub mod materialize;
pub mod rule;

pub use expand::{ExpansionSkip, expand_events, occurrences_of, preview};
pub use generator::{generate, window_end};
pub use materialize::{materialize, synthetic_id};
pub use rrule::Frequency;
pub use rule::{RecurrenceError, RecurrenceRule, parse};
