//! Ownership-based authorization.
//!
//! Every update and delete of an event or calendar goes through `authorize` exactly once,
//! after the record has been fetched and before anything is written. Creation is never
//! guarded: the creator becomes the owner.

pub mod guard;

pub use guard::{Action, AuthzResult, Owned, ResourceKind, authorize, ensure_owner};
