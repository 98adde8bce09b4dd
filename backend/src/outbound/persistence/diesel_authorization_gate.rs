//! PostgreSQL-backed [`AuthorizationGate`].
//!
//! Tokens are stored as SHA-256 digests in `access_tokens`; the admin flag
//! comes from the owning row in `profiles`. Both are read on every request.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use mockable::Clock;
use uuid::Uuid;

use crate::domain::ports::{AuthorizationGate, AuthorizationGateError};
use crate::domain::{ActorContext, ActorId, BearerToken};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::pool::DbPool;
use super::schema::{access_tokens, profiles};

/// Resolves bearer tokens against the `access_tokens` table.
#[derive(Clone)]
pub struct DieselAuthorizationGate {
    pool: DbPool,
    clock: Arc<dyn Clock>,
}

impl DieselAuthorizationGate {
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

#[async_trait]
impl AuthorizationGate for DieselAuthorizationGate {
    async fn resolve(&self, token: &BearerToken) -> Result<ActorContext, AuthorizationGateError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|error| map_pool_error(error, |m| AuthorizationGateError::connection(m)))?;
        let now = self.clock.utc();

        let found: Option<(Uuid, bool)> = access_tokens::table
            .inner_join(profiles::table)
            .filter(access_tokens::token_digest.eq(token.digest()))
            .filter(
                access_tokens::expires_at
                    .is_null()
                    .or(access_tokens::expires_at.gt(now)),
            )
            .select((profiles::id, profiles::is_admin))
            .first(&mut conn)
            .await
            .optional()
            .map_err(|error| {
                map_diesel_error(
                    error,
                    |m| AuthorizationGateError::query(m),
                    |m| AuthorizationGateError::connection(m),
                )
            })?;

        let (profile_id, is_admin) = found.ok_or_else(|| {
            tracing::debug!(fingerprint = %token.fingerprint(), "unknown or expired token");
            AuthorizationGateError::rejected()
        })?;
        Ok(ActorContext::new(ActorId::from_uuid(profile_id), is_admin))
    }
}
