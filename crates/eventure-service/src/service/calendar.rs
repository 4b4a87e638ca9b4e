use std::sync::Arc;

use eventure_store::{Calendar, CalendarId, CalendarStore, NewCalendar, UserDirectory};

use super::input::CalendarInput;
use super::resolve_owner;
use crate::auth::{Action, ensure_owner};
use crate::error::{ServiceError, ServiceResult};

/// Calendar operations scoped by the acting identity.
#[derive(Clone)]
pub struct CalendarService {
    calendars: Arc<dyn CalendarStore>,
    users: Arc<dyn UserDirectory>,
}

impl CalendarService {
    #[must_use]
    pub fn new(calendars: Arc<dyn CalendarStore>, users: Arc<dyn UserDirectory>) -> Self {
        Self { calendars, users }
    }

    #[must_use]
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: CalendarStore + UserDirectory + 'static,
    {
        Self::new(store.clone(), store)
    }

    /// ## Summary
    /// Creates a calendar owned by `actor`.
    ///
    /// ## Errors
    /// Returns `NotFound` if the actor cannot be resolved.
    #[tracing::instrument(skip(self, input), fields(actor = ?actor, name = %input.name))]
    pub async fn create_calendar(
        &self,
        actor: Option<&str>,
        input: CalendarInput,
    ) -> ServiceResult<Calendar> {
        let owner = resolve_owner(self.users.as_ref(), actor).await?;
        let calendar = self
            .calendars
            .insert(NewCalendar {
                name: input.name,
                color: input.color,
                owner: owner.username,
            })
            .await?;

        tracing::debug!(calendar_id = calendar.id, "Calendar created");
        Ok(calendar)
    }

    /// ## Summary
    /// Lists the calendars of `actor`, or every calendar without an identity.
    ///
    /// ## Errors
    /// Store failures propagate.
    #[tracing::instrument(skip(self), fields(actor = ?actor))]
    pub async fn list_calendars(&self, actor: Option<&str>) -> ServiceResult<Vec<Calendar>> {
        let calendars = match actor {
            Some(username) => self.calendars.find_all_by_owner(username).await?,
            None => self.calendars.find_all().await?,
        };
        tracing::debug!(count = calendars.len(), "Calendars listed");
        Ok(calendars)
    }

    /// ## Summary
    /// Renames or recolors a calendar owned by `actor`.
    ///
    /// ## Errors
    /// Returns `NotFound` for an unknown id and `Forbidden` if `actor` does not own it.
    #[tracing::instrument(skip(self, input), fields(actor = ?actor))]
    pub async fn update_calendar(
        &self,
        actor: Option<&str>,
        id: CalendarId,
        input: CalendarInput,
    ) -> ServiceResult<Calendar> {
        let mut calendar = self.find_calendar(id).await?;
        ensure_owner(&calendar, actor, Action::Update)?;

        calendar.name = input.name;
        calendar.color = input.color;

        let calendar = self.calendars.update(calendar).await?;
        tracing::debug!("Calendar updated");
        Ok(calendar)
    }

    /// ## Summary
    /// Deletes a calendar owned by `actor` and detaches the events that referenced it.
    ///
    /// ## Errors
    /// Returns `NotFound` for an unknown id and `Forbidden` if `actor` does not own it.
    #[tracing::instrument(skip(self), fields(actor = ?actor))]
    pub async fn delete_calendar(&self, actor: Option<&str>, id: CalendarId) -> ServiceResult<()> {
        let calendar = self.find_calendar(id).await?;
        ensure_owner(&calendar, actor, Action::Delete)?;

        let detached = self.calendars.delete_detaching(calendar.id).await?;
        tracing::debug!(detached, "Calendar deleted");
        Ok(())
    }

    async fn find_calendar(&self, id: CalendarId) -> ServiceResult<Calendar> {
        self.calendars
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Calendar {id} not found")))
    }
}
