//! Turns generated occurrence starts into transient event records.

use chrono::{DateTime, Utc};
use eventure_core::constants::SYNTHETIC_ID_STRIDE;
use eventure_store::{Event, EventId};

/// ## Summary
/// Allocates the id of the `occurrence_index`-th (zero-based) synthetic occurrence of `base_id`.
///
/// `id = -((|base_id| + 1) * 1000 + occurrence_index + 1)`. The result is always negative,
/// so it never collides with a stored id, and it is stable across reads of the same data.
/// Distinct base ids stay disjoint while `occurrence_index < 999`.
///
/// Returns `None` if the arithmetic overflows.
#[must_use]
pub fn synthetic_id(base_id: EventId, occurrence_index: usize) -> Option<EventId> {
    let index = i64::try_from(occurrence_index).ok()?;
    let magnitude = base_id
        .checked_abs()?
        .checked_add(1)?
        .checked_mul(SYNTHETIC_ID_STRIDE)?
        .checked_add(index)?
        .checked_add(1)?;
    Some(-magnitude)
}

/// ## Summary
/// Derives the occurrence of `base` starting at `occurrence_start`.
///
/// The occurrence keeps the base event's duration and copies its title, recurrence fields,
/// calendar, owner and completion flag. It is flagged recurring and never written anywhere.
///
/// Returns `None` if the base event lacks a start or end time, or if the id or end time
/// cannot be represented.
#[must_use]
pub fn materialize(
    base: &Event,
    occurrence_start: DateTime<Utc>,
    occurrence_index: usize,
) -> Option<Event> {
    let duration = base.duration()?;
    let id = synthetic_id(base.id, occurrence_index)?;
    let end = occurrence_start.checked_add_signed(duration)?;

    Some(Event {
        id,
        title: base.title.clone(),
        start_time: Some(occurrence_start),
        end_time: Some(end),
        completed: base.completed,
        owner: base.owner.clone(),
        calendar_id: base.calendar_id,
        is_recurring: true,
        recurrence_rule: base.recurrence_rule.clone(),
        recurrence_end_date: base.recurrence_end_date,
    })
}
