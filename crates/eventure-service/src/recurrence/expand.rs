//! Fail-open expansion of stored events into base + synthetic occurrences.

use chrono::{DateTime, Utc};
use eventure_core::config::RecurrenceConfig;
use eventure_store::Event;
use thiserror::Error;

use super::generator::{generate, window_end};
use super::materialize::materialize;
use super::rule::{RecurrenceError, RecurrenceRule};

/// Instants to request from the generator so `wanted` results can be returned and a longer
/// series is still detectable.
fn generation_limit(wanted: usize) -> u16 {
    u16::try_from(wanted.saturating_add(1)).unwrap_or(u16::MAX)
}

/// Why an event was returned without synthetic occurrences.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpansionSkip {
    #[error("event has no recurrence rule")]
    NotRecurring,

    #[error("invalid recurrence rule: {0}")]
    InvalidRule(#[from] RecurrenceError),

    #[error("event is missing a start or end time")]
    MissingTimes,

    #[error("expansion window end is out of range")]
    WindowOutOfRange,
}

/// ## Summary
/// Materializes the synthetic occurrences of one base event.
///
/// The occurrence at the base event's own start is excluded because the base event already
/// represents it. At most `config.max_occurrences` occurrences are produced; expansion also
/// stops early if an id or end time would overflow.
///
/// ## Errors
/// Returns the reason expansion was skipped. Callers keep the base event either way.
pub fn occurrences_of(base: &Event, config: &RecurrenceConfig) -> Result<Vec<Event>, ExpansionSkip> {
    let Some(rule_text) = base.recurrence_rule.as_deref() else {
        return Err(ExpansionSkip::NotRecurring);
    };
    let rule: RecurrenceRule = rule_text.parse()?;

    let (Some(anchor), Some(_)) = (base.start_time, base.end_time) else {
        return Err(ExpansionSkip::MissingTimes);
    };
    let end = window_end(anchor, base.recurrence_end_date, config.default_window_months)
        .ok_or(ExpansionSkip::WindowOutOfRange)?;

    // The anchor itself is usually the first instant, hence one extra.
    let limit = generation_limit(config.max_occurrences.saturating_add(1));
    let starts = generate(&rule, anchor, end, limit)?;

    let mut occurrences = Vec::new();
    let starts = starts.into_iter().filter(|start| *start != anchor);
    for (index, start) in starts.enumerate() {
        if index >= config.max_occurrences {
            tracing::warn!(
                event_id = base.id,
                max_occurrences = config.max_occurrences,
                "Occurrence cap reached, truncating expansion"
            );
            break;
        }
        let Some(occurrence) = materialize(base, start, index) else {
            tracing::warn!(
                event_id = base.id,
                occurrence_index = index,
                "Occurrence cannot be represented, stopping expansion"
            );
            break;
        };
        occurrences.push(occurrence);
    }

    tracing::trace!(
        event_id = base.id,
        rule = %rule,
        window_end = %end,
        count = occurrences.len(),
        "Expanded recurring event"
    );
    Ok(occurrences)
}

/// ## Summary
/// Expands a listing of stored events.
///
/// Each base event is immediately followed by its own occurrences; the list is not re-sorted
/// by time. A base event whose expansion is skipped (bad rule text, missing times, ...) is
/// still returned exactly once, and the rest of the batch is unaffected.
#[must_use]
pub fn expand_events(events: Vec<Event>, config: &RecurrenceConfig) -> Vec<Event> {
    let mut expanded = Vec::with_capacity(events.len());

    for base in events {
        let occurrences = match occurrences_of(&base, config) {
            Ok(occurrences) => occurrences,
            Err(ExpansionSkip::NotRecurring) => Vec::new(),
            Err(skip) => {
                tracing::warn!(
                    event_id = base.id,
                    rule = ?base.recurrence_rule,
                    reason = %skip,
                    "Skipping recurrence expansion"
                );
                Vec::new()
            }
        };
        expanded.push(base);
        expanded.extend(occurrences);
    }

    expanded
}

/// Chronological starts a rule would generate for a one-off event, anchor included.
///
/// ## Errors
/// Returns `InvalidRule` for unparsable text or a rule that cannot start at `anchor`, and
/// `WindowOutOfRange` for an unrepresentable default window.
pub fn preview(
    rule_text: &str,
    anchor: DateTime<Utc>,
    recurrence_end_date: Option<DateTime<Utc>>,
    config: &RecurrenceConfig,
) -> Result<Vec<DateTime<Utc>>, ExpansionSkip> {
    let rule: RecurrenceRule = rule_text.parse()?;
    let end = window_end(anchor, recurrence_end_date, config.default_window_months)
        .ok_or(ExpansionSkip::WindowOutOfRange)?;
    Ok(generate(&rule, anchor, end, generation_limit(config.max_occurrences))?)
}
