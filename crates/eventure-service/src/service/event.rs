use std::sync::Arc;

use eventure_core::config::RecurrenceConfig;
use eventure_store::{Event, EventId, EventStore, NewEvent, UserDirectory};

use super::input::EventInput;
use super::{event_write_error, resolve_owner};
use crate::auth::{Action, ensure_owner};
use crate::error::{ServiceError, ServiceResult};
use crate::recurrence::{expand_events, parse};

/// Event operations scoped by the acting identity.
#[derive(Clone)]
pub struct EventService {
    events: Arc<dyn EventStore>,
    users: Arc<dyn UserDirectory>,
    recurrence: RecurrenceConfig,
}

impl EventService {
    /// ## Summary
    /// Builds the service over separate stores.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the recurrence bounds are invalid.
    pub fn new(
        events: Arc<dyn EventStore>,
        users: Arc<dyn UserDirectory>,
        recurrence: RecurrenceConfig,
    ) -> ServiceResult<Self> {
        recurrence.validate()?;
        Ok(Self {
            events,
            users,
            recurrence,
        })
    }

    /// ## Summary
    /// Builds the service over one store implementing every store trait.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the recurrence bounds are invalid.
    pub fn from_store<S>(store: Arc<S>, recurrence: RecurrenceConfig) -> ServiceResult<Self>
    where
        S: EventStore + UserDirectory + 'static,
    {
        Self::new(store.clone(), store, recurrence)
    }

    /// ## Summary
    /// Creates an event owned by `actor`.
    ///
    /// ## Errors
    /// Returns `NotFound` if the actor cannot be resolved or the requested calendar does not
    /// exist. Store failures propagate.
    #[tracing::instrument(skip(self, input), fields(actor = ?actor, title = %input.title))]
    pub async fn create_event(&self, actor: Option<&str>, input: EventInput) -> ServiceResult<Event> {
        let owner = resolve_owner(self.users.as_ref(), actor).await?;
        let recurrence_rule = checked_rule(&input);

        let event = self
            .events
            .insert(NewEvent {
                title: input.title,
                start_time: input.start_time,
                end_time: input.end_time,
                completed: input.completed,
                owner: owner.username,
                calendar_id: input.calendar_id,
                is_recurring: recurrence_rule.is_some(),
                recurrence_rule,
                recurrence_end_date: input.recurrence_end_date,
            })
            .await
            .map_err(event_write_error)?;

        tracing::debug!(event_id = event.id, "Event created");
        Ok(event)
    }

    /// ## Summary
    /// Lists events for `actor`, with recurring events expanded.
    ///
    /// Without an identity every stored event is listed. Each stored event is immediately
    /// followed by its synthetic occurrences.
    ///
    /// ## Errors
    /// Store failures propagate. Recurrence problems never fail the listing.
    #[tracing::instrument(skip(self), fields(actor = ?actor))]
    pub async fn list_events(&self, actor: Option<&str>) -> ServiceResult<Vec<Event>> {
        let stored = match actor {
            Some(username) => self.events.find_all_by_owner(username).await?,
            None => self.events.find_all().await?,
        };
        let stored_count = stored.len();

        let expanded = expand_events(stored, &self.recurrence);
        tracing::debug!(
            stored = stored_count,
            returned = expanded.len(),
            "Events listed"
        );
        Ok(expanded)
    }

    /// ## Summary
    /// Replaces the mutable fields of a stored event owned by `actor`.
    ///
    /// ## Errors
    /// Returns `NotFound` for an unknown id (synthetic ids included) or an unknown calendar,
    /// and `Forbidden` if `actor` does not own the event. Nothing is written on error.
    #[tracing::instrument(skip(self, input), fields(actor = ?actor))]
    pub async fn update_event(
        &self,
        actor: Option<&str>,
        id: EventId,
        input: EventInput,
    ) -> ServiceResult<Event> {
        let mut event = self.find_event(id).await?;
        ensure_owner(&event, actor, Action::Update)?;

        let recurrence_rule = checked_rule(&input);

        event.title = input.title;
        event.start_time = input.start_time;
        event.end_time = input.end_time;
        event.completed = input.completed;
        event.calendar_id = input.calendar_id;
        event.is_recurring = recurrence_rule.is_some();
        event.recurrence_rule = recurrence_rule;
        event.recurrence_end_date = input.recurrence_end_date;

        let event = self
            .events
            .update(event)
            .await
            .map_err(event_write_error)?;
        tracing::debug!("Event updated");
        Ok(event)
    }

    /// ## Summary
    /// Deletes a stored event owned by `actor`.
    ///
    /// ## Errors
    /// Returns `NotFound` for an unknown id and `Forbidden` if `actor` does not own the event.
    #[tracing::instrument(skip(self), fields(actor = ?actor))]
    pub async fn delete_event(&self, actor: Option<&str>, id: EventId) -> ServiceResult<()> {
        let event = self.find_event(id).await?;
        ensure_owner(&event, actor, Action::Delete)?;

        self.events.delete_by_id(event.id).await?;
        tracing::debug!("Event deleted");
        Ok(())
    }

    async fn find_event(&self, id: EventId) -> ServiceResult<Event> {
        self.events
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Event {id} not found")))
    }
}

/// Normalized rule text. Unparsable rules are stored as given and only logged; reads skip
/// their expansion.
fn checked_rule(input: &EventInput) -> Option<String> {
    let rule = input.normalized_rule()?;
    if let Err(err) = parse(&rule) {
        tracing::warn!(rule = %rule, error = %err, "Storing recurrence rule that cannot be expanded");
    }
    Some(rule)
}
