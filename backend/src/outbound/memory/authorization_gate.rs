//! Token-table [`AuthorizationGate`].

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{AuthorizationGate, AuthorizationGateError};
use crate::domain::{ActorContext, ActorId, BearerToken};

/// Development credential resolving to an administrator.
pub const DEV_ADMIN_TOKEN: &str = "dev-admin-token";
/// Development credential resolving to an ordinary customer.
pub const DEV_CUSTOMER_TOKEN: &str = "dev-customer-token";

const DEV_ADMIN_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0001);
const DEV_CUSTOMER_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0002);

/// Gate resolving tokens from a fixed table keyed by token digest.
///
/// # Examples
/// ```
/// use sweetshop::domain::{ActorContext, ActorId, BearerToken};
/// use sweetshop::domain::ports::AuthorizationGate;
/// use sweetshop::outbound::memory::StaticAuthorizationGate;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let admin = ActorContext::administrator(ActorId::random());
/// let token = BearerToken::new("letmein").unwrap();
/// let gate = StaticAuthorizationGate::new().with_token(&token, admin);
/// assert_eq!(gate.resolve(&token).await.unwrap(), admin);
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticAuthorizationGate {
    actors: HashMap<String, ActorContext>,
}

impl StaticAuthorizationGate {
    /// Create a gate that rejects every token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gate seeded with [`DEV_ADMIN_TOKEN`] and [`DEV_CUSTOMER_TOKEN`].
    pub fn development() -> Self {
        let mut gate = Self::new();
        gate.insert_raw(
            DEV_ADMIN_TOKEN,
            ActorContext::administrator(ActorId::from_uuid(DEV_ADMIN_ID)),
        );
        gate.insert_raw(
            DEV_CUSTOMER_TOKEN,
            ActorContext::customer(ActorId::from_uuid(DEV_CUSTOMER_ID)),
        );
        gate
    }

    /// Register `token` for `actor`, replacing any previous holder.
    #[must_use]
    pub fn with_token(mut self, token: &BearerToken, actor: ActorContext) -> Self {
        self.actors.insert(token.digest(), actor);
        self
    }

    fn insert_raw(&mut self, raw: &str, actor: ActorContext) {
        if let Ok(token) = BearerToken::new(raw) {
            self.actors.insert(token.digest(), actor);
        }
    }
}

#[async_trait]
impl AuthorizationGate for StaticAuthorizationGate {
    async fn resolve(&self, token: &BearerToken) -> Result<ActorContext, AuthorizationGateError> {
        self.actors
            .get(&token.digest())
            .copied()
            .ok_or_else(AuthorizationGateError::rejected)
    }
}
