//! Occurrence generation for a parsed rule over a bounded window.

use chrono::{DateTime, Months, Utc};
use rrule::Tz;

use super::rule::{RecurrenceError, RecurrenceRule};

/// ## Summary
/// Resolves the last instant an expansion may reach.
///
/// An explicit recurrence end date wins; otherwise the window closes `default_months` after
/// the anchor. Returns `None` if that date is out of range.
#[must_use]
pub fn window_end(
    anchor: DateTime<Utc>,
    recurrence_end_date: Option<DateTime<Utc>>,
    default_months: u32,
) -> Option<DateTime<Utc>> {
    recurrence_end_date.or_else(|| anchor.checked_add_months(Months::new(default_months)))
}

/// ## Summary
/// Generates the chronological starts of `rule` from `anchor` up to `window_end` (inclusive),
/// stopping after `limit` instants.
///
/// The first instant is `anchor` itself whenever it lies inside the window. Dates that do not
/// exist in a given month or year (Jan 31 + 1 month, Feb 29 in a common year) are skipped.
///
/// ## Errors
/// Returns `Rrule` if the rule cannot be anchored at `anchor`.
pub fn generate(
    rule: &RecurrenceRule,
    anchor: DateTime<Utc>,
    window_end: DateTime<Utc>,
    limit: u16,
) -> Result<Vec<DateTime<Utc>>, RecurrenceError> {
    // An UNTIL before the anchor is a valid rule with an empty sequence.
    if rule.until().is_some_and(|until| until < anchor) || window_end < anchor || limit == 0 {
        return Ok(Vec::new());
    }

    let rrule_set = rule
        .build(anchor)?
        .before(window_end.with_timezone(&Tz::UTC));
    let result = rrule_set.all(limit);
    if result.limited {
        tracing::debug!(limit, "Occurrence generation hit its limit");
    }

    Ok(result
        .dates
        .into_iter()
        .map(|start| start.with_timezone(&Utc))
        .collect())
}
