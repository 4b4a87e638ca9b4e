//! Create/read/update/delete entry points for events and calendars.
//!
//! Write path: fetch by id, ownership guard, field copy or removal, store write.
//! Read path: owner-scoped listing, then recurrence expansion for events.

pub mod calendar;
pub mod event;
pub mod input;

pub use calendar::CalendarService;
pub use event::EventService;
pub use input::{CalendarInput, EventInput};


use eventure_store::{OwnerRecord, StoreError, UserDirectory};

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Maps the acting identity to an account.
///
/// ## Errors
/// Returns `NotFound` if no identity is given or the directory does not know it.
async fn resolve_owner(users: &dyn UserDirectory, actor: Option<&str>) -> ServiceResult<OwnerRecord> {
    let Some(username) = actor else {
        return Err(ServiceError::NotFound("User not found: no identity".to_string()));
    };
    users
        .resolve_owner(username)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("User not found: {username}")))
}

/// ## Summary
/// Converts a store write failure, reporting a calendar reference that no longer resolves as
/// `NotFound`.
fn event_write_error(err: StoreError) -> ServiceError {
    match err {
        StoreError::MissingReference {
            table: "calendar",
            id,
        } => ServiceError::NotFound(format!("Calendar {id} not found")),
        other => other.into(),
    }
}
