use std::fmt;

use eventure_store::{Calendar, Event};

use crate::error::{ServiceError, ServiceResult};

/// Mutating operations that require ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Update => "update",
            Self::Delete => "delete",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Event,
    Calendar,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Event => "event",
            Self::Calendar => "calendar",
        })
    }
}

/// A record that belongs to at most one account.
pub trait Owned {
    const KIND: ResourceKind;

    /// Username of the owning account, if any.
    fn owner_ref(&self) -> Option<&str>;
}

impl Owned for Event {
    const KIND: ResourceKind = ResourceKind::Event;

    fn owner_ref(&self) -> Option<&str> {
        self.owner.as_deref()
    }
}

impl Owned for Calendar {
    const KIND: ResourceKind = ResourceKind::Calendar;

    fn owner_ref(&self) -> Option<&str> {
        self.owner.as_deref()
    }
}

/// Result of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthzResult {
    /// Access is allowed.
    Allowed,
    /// Access is denied.
    Denied,
}

impl AuthzResult {
    /// Returns `true` if access is allowed.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Convert to a `Result`, returning `Err(ServiceError::Forbidden)` if denied.
    ///
    /// ## Errors
    ///
    /// Returns `Forbidden` if access is denied.
    pub fn require(self, action: Action, kind: ResourceKind) -> ServiceResult<()> {
        match self {
            Self::Allowed => Ok(()),
            Self::Denied => Err(ServiceError::Forbidden(format!(
                "Not allowed to {action} this {kind}"
            ))),
        }
    }
}

/// ## Summary
/// Decides whether `actor` may mutate `resource`.
///
/// Allowed only when both the resource owner and the actor are present and equal. A record
/// without an owner can never be mutated through the service.
#[must_use]
pub fn authorize(resource: &impl Owned, actor: Option<&str>) -> AuthzResult {
    match (resource.owner_ref(), actor) {
        (Some(owner), Some(actor)) if owner == actor => AuthzResult::Allowed,
        _ => AuthzResult::Denied,
    }
}

/// ## Summary
/// Runs `authorize` and converts a denial into `Forbidden`.
///
/// ## Errors
/// Returns `Forbidden("Not allowed to <action> this <kind>")` when denied.
pub fn ensure_owner<T: Owned>(resource: &T, actor: Option<&str>, action: Action) -> ServiceResult<()> {
    let result = authorize(resource, actor);
    tracing::debug!(
        kind = %T::KIND,
        action = %action,
        owner = ?resource.owner_ref(),
        actor = ?actor,
        allowed = result.is_allowed(),
        "Ownership check"
    );
    result.require(action, T::KIND)
}
