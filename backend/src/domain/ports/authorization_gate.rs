//! Port resolving bearer credentials into actor capabilities.

use async_trait::async_trait;

use crate::domain::{ActorContext, BearerToken};

use super::define_port_error;

define_port_error! {
    /// Errors raised by authorization gate adapters.
    pub enum AuthorizationGateError {
        /// No actor holds the presented credential.
        Rejected => "credential not recognised",
        /// Backing store connection could not be established.
        Connection { message: String } =>
            "authorization gate connection failed: {message}",
        /// Lookup failed during execution.
        Query { message: String } =>
            "authorization gate query failed: {message}",
    }
}

/// Resolves who is calling and whether they hold administrator rights.
///
/// The result is valid for a single request only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorizationGate: Send + Sync {
    async fn resolve(&self, token: &BearerToken) -> Result<ActorContext, AuthorizationGateError>;
}

/// Gate that rejects every credential.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAuthorizationGate;

#[async_trait]
impl AuthorizationGate for FixtureAuthorizationGate {
    async fn resolve(&self, _token: &BearerToken) -> Result<ActorContext, AuthorizationGateError> {
        Err(AuthorizationGateError::rejected())
    }
}
