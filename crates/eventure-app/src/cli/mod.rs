//! Command line front end over an in-memory store.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use eventure_core::config::Settings;
use eventure_service::recurrence::preview;
use eventure_service::{CalendarService, EventService};
use eventure_store::{MemoryStore, Seed};
use serde_json::{Value, json};

#[derive(Debug, Parser)]
#[command(name = "eventure")]
#[command(about = "Preview recurring events and owner-scoped listings")]
pub struct Cli {
    /// JSON file with `owners`, `calendars` and `events` to load before running
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List events with recurring events expanded
    Events {
        /// Only events owned by this user (all events when omitted)
        #[arg(short, long)]
        user: Option<String>,
    },
    /// List calendars
    Calendars {
        /// Only calendars owned by this user (all calendars when omitted)
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Print the occurrences a rule generates for a one-off event
    Expand {
        /// Recurrence rule, e.g. "FREQ=WEEKLY;INTERVAL=2;COUNT=5"
        #[arg(short, long)]
        rule: String,

        /// Event start (RFC 3339)
        #[arg(short, long)]
        start: DateTime<Utc>,

        /// Event end (RFC 3339); adds an end to every occurrence
        #[arg(short, long)]
        end: Option<DateTime<Utc>>,

        /// Recurrence end date (RFC 3339); defaults to the configured window
        #[arg(long)]
        until: Option<DateTime<Utc>>,
    },
}

impl Cli {
    /// ## Summary
    /// Runs the selected command and returns its pretty-printed JSON output.
    ///
    /// ## Errors
    /// Returns an error if the seed cannot be read, a service call fails, or the rule given to
    /// `expand` cannot be parsed.
    pub async fn run(self, settings: &Settings) -> Result<String> {
        let value = match self.command {
            Commands::Events { user } => {
                let store = load_store(self.seed.as_ref()).await?;
                let service = EventService::from_store(store, settings.recurrence)?;
                serde_json::to_value(service.list_events(user.as_deref()).await?)?
            }
            Commands::Calendars { user } => {
                let store = load_store(self.seed.as_ref()).await?;
                let service = CalendarService::from_store(store);
                serde_json::to_value(service.list_calendars(user.as_deref()).await?)?
            }
            Commands::Expand {
                rule,
                start,
                end,
                until,
            } => expand(&rule, start, end, until, settings)?,
        };

        Ok(serde_json::to_string_pretty(&value)?)
    }
}

async fn load_store(seed: Option<&PathBuf>) -> Result<Arc<MemoryStore>> {
    let Some(path) = seed else {
        tracing::debug!("No seed file given, starting with an empty store");
        return Ok(Arc::new(MemoryStore::new()));
    };

    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let seed = Seed::from_json(&text)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
    Ok(Arc::new(MemoryStore::from_seed(seed)?))
}

fn expand(
    rule: &str,
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
    until: Option<DateTime<Utc>>,
    settings: &Settings,
) -> Result<Value> {
    let starts = preview(rule, start, until, &settings.recurrence)
        .with_context(|| format!("Cannot expand rule '{rule}'"))?;
    let duration = end.map(|end| end.signed_duration_since(start));

    let occurrences: Vec<Value> = starts
        .into_iter()
        .map(|occurrence| {
            let end = duration.and_then(|duration| occurrence.checked_add_signed(duration));
            json!({ "startTime": occurrence, "endTime": end })
        })
        .collect();

    Ok(json!({
        "rule": rule,
        "count": occurrences.len(),
        "occurrences": occurrences,
    }))
}
