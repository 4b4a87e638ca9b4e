/// Months added to an event's start when it carries no explicit recurrence end date.
pub const DEFAULT_WINDOW_MONTHS: u32 = 6;

/// Id space reserved per base event for its synthetic occurrences.
///
/// Synthetic ids are `-((|base| + 1) * SYNTHETIC_ID_STRIDE + index + 1)`, so an index must stay
/// below `SYNTHETIC_ID_STRIDE - 1` to remain unique across base events.
pub const SYNTHETIC_ID_STRIDE: i64 = 1000;

/// Upper bound on synthetic occurrences materialized for a single base event.
pub const MAX_OCCURRENCES_PER_EVENT: usize = 999;

/// Prefix for environment variable overrides (`EVENTURE__RECURRENCE__MAX_OCCURRENCES`).
pub const ENV_PREFIX: &str = "EVENTURE";

/// Optional configuration file read from the working directory.
pub const CONFIG_FILE_NAME: &str = "eventure.toml";
