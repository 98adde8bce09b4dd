//! Calling identity resolved for one request.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by [`ActorId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActorValidationError {
    #[error("actor id must not be empty")]
    EmptyId,
    #[error("actor id must be a valid UUID")]
    InvalidId,
}

/// Stable identifier of an authenticated actor, stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActorId(Uuid);

impl ActorId {
    /// Validate and construct an [`ActorId`] from its textual form.
    ///
    /// # Examples
    /// ```
    /// use sweetshop::domain::ActorId;
    ///
    /// let id = ActorId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").unwrap();
    /// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    /// assert!(ActorId::new(" ").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, ActorValidationError> {
        let raw = id.as_ref();
        if raw.trim().is_empty() {
            return Err(ActorValidationError::EmptyId);
        }
        if raw.trim() != raw {
            return Err(ActorValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| ActorValidationError::InvalidId)
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ActorId> for String {
    fn from(value: ActorId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for ActorId {
    type Error = ActorValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Capability describing who is calling and whether they may administer stock.
///
/// The admin flag is resolved per request and must not outlive it.
///
/// # Examples
/// ```
/// use sweetshop::domain::{ActorContext, ActorId};
///
/// let admin = ActorContext::administrator(ActorId::random());
/// assert!(admin.is_admin());
/// let customer = ActorContext::customer(ActorId::random());
/// assert!(!customer.is_admin());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorContext {
    actor_id: ActorId,
    is_admin: bool,
}

impl ActorContext {
    /// Build a context from a resolved identity and admin flag.
    pub fn new(actor_id: ActorId, is_admin: bool) -> Self {
        Self { actor_id, is_admin }
    }

    /// Context for an actor holding administrator rights.
    pub fn administrator(actor_id: ActorId) -> Self {
        Self::new(actor_id, true)
    }

    /// Context for an ordinary authenticated actor.
    pub fn customer(actor_id: ActorId) -> Self {
        Self::new(actor_id, false)
    }

    pub fn actor_id(&self) -> ActorId {
        self.actor_id
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}
