//! Parsing of RRULE-style recurrence text into a structured rule.
//!
//! Accepted form: `[RRULE:]FREQ=<DAILY|WEEKLY|MONTHLY|YEARLY>[;INTERVAL=n][;COUNT=n|;UNTIL=ts]`.
//! Parts may appear in any order and keys are case-insensitive. Parts this engine cannot
//! honor (`BYDAY`, `WKST`, ...) are rejected so an event is never expanded on the wrong dates.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc, Weekday};
use rrule::{Frequency, RRule, RRuleError, RRuleSet, Tz, Unvalidated};
use thiserror::Error;

/// Errors produced while parsing recurrence text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    #[error("recurrence rule is empty")]
    Empty,

    #[error(transparent)]
    Rrule(#[from] RRuleError),

    #[error("unsupported frequency '{0}'")]
    UnsupportedFrequency(Frequency),

    #[error("unsupported rule part '{0}'")]
    UnsupportedPart(&'static str),

    #[error("{0} must be a positive integer")]
    NotPositive(&'static str),

    #[error("COUNT and UNTIL cannot both be set")]
    CountWithUntil,
}

/// A parsed recurrence rule limited to `FREQ`, `INTERVAL`, `COUNT` and `UNTIL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    rule: RRule<Unvalidated>,
}

impl RecurrenceRule {
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.rule.get_freq()
    }

    #[must_use]
    pub fn interval(&self) -> u16 {
        self.rule.get_interval()
    }

    /// Total occurrences, the first one included.
    #[must_use]
    pub fn count(&self) -> Option<u32> {
        self.rule.get_count()
    }

    /// Last instant an occurrence may start at (inclusive).
    #[must_use]
    pub fn until(&self) -> Option<DateTime<Utc>> {
        self.rule.get_until().map(|until| until.with_timezone(&Utc))
    }

    /// ## Summary
    /// Anchors the rule at `dt_start` (UTC) and returns the validated set.
    ///
    /// ## Errors
    /// Returns `Rrule` if validation fails, e.g. `UNTIL` lies before `dt_start` or the start is
    /// outside the supported year range.
    pub fn build(&self, dt_start: DateTime<Utc>) -> Result<RRuleSet, RecurrenceError> {
        Ok(self.rule.clone().build(dt_start.with_timezone(&Tz::UTC))?)
    }
}

impl FromStr for RecurrenceRule {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.rule, f)
    }
}

/// ## Summary
/// Parses recurrence text into a `RecurrenceRule`.
///
/// ## Errors
/// Returns a `RecurrenceError` describing the first problem found. Callers on the read path
/// treat every error as "do not expand this event".
pub fn parse(text: &str) -> Result<RecurrenceRule, RecurrenceError> {
    let text = text.trim();
    let body = match text.get(..6) {
        Some(prefix) if prefix.eq_ignore_ascii_case("RRULE:") => text.get(6..).unwrap_or_default(),
        _ => text,
    };
    if body.split(';').all(|part| part.trim().is_empty()) {
        return Err(RecurrenceError::Empty);
    }

    let rule = normalize_until(body).parse::<RRule<Unvalidated>>()?;
    check_supported(&rule)?;

    let rule = RecurrenceRule { rule };
    tracing::trace!(rule = %rule, "Parsed recurrence rule");
    Ok(rule)
}

fn check_supported(rule: &RRule<Unvalidated>) -> Result<(), RecurrenceError> {
    let frequency = rule.get_freq();
    if !matches!(
        frequency,
        Frequency::Daily | Frequency::Weekly | Frequency::Monthly | Frequency::Yearly
    ) {
        return Err(RecurrenceError::UnsupportedFrequency(frequency));
    }

    let by_parts = [
        ("BYSETPOS", rule.get_by_set_pos().is_empty()),
        ("BYMONTH", rule.get_by_month().is_empty()),
        ("BYMONTHDAY", rule.get_by_month_day().is_empty()),
        ("BYYEARDAY", rule.get_by_year_day().is_empty()),
        ("BYWEEKNO", rule.get_by_week_no().is_empty()),
        ("BYDAY", rule.get_by_weekday().is_empty()),
        ("BYHOUR", rule.get_by_hour().is_empty()),
        ("BYMINUTE", rule.get_by_minute().is_empty()),
        ("BYSECOND", rule.get_by_second().is_empty()),
    ];
    if let Some((part, _)) = by_parts.into_iter().find(|(_, empty)| !empty) {
        return Err(RecurrenceError::UnsupportedPart(part));
    }
    // Only a non-default week start is observable in the parsed rule.
    if rule.get_week_start() != Weekday::Mon {
        return Err(RecurrenceError::UnsupportedPart("WKST"));
    }

    if rule.get_interval() == 0 {
        return Err(RecurrenceError::NotPositive("INTERVAL"));
    }
    match (rule.get_count(), rule.get_until()) {
        (Some(0), _) => Err(RecurrenceError::NotPositive("COUNT")),
        (Some(_), Some(_)) => Err(RecurrenceError::CountWithUntil),
        _ => Ok(()),
    }
}

/// Rewrites `UNTIL` so every RFC 5545 form is read as UTC: a floating date-time gains `Z` and
/// a bare date covers that whole day.
fn normalize_until(body: &str) -> String {
    body.split(';')
        .map(|part| {
            let Some((key, value)) = part.split_once('=') else {
                return part.to_string();
            };
            if !key.trim().eq_ignore_ascii_case("UNTIL") {
                return part.to_string();
            }
            let value = value.trim();
            let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
            match value.split_once('T') {
                None if value.len() == 8 && all_digits(value) => {
                    format!("{key}={value}T235959Z")
                }
                Some((date, time)) if time.len() == 6 && all_digits(date) && all_digits(time) => {
                    format!("{key}={value}Z")
                }
                _ => part.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(";")
}
