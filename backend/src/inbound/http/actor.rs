//! Bearer credential extractor.
//!
//! Handlers take [`AuthenticatedActor`] as an argument; extraction reads the
//! `Authorization` header and resolves it through the configured
//! [`AuthorizationGate`](crate::domain::ports::AuthorizationGate). The result
//! lives only as long as the request.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use tracing::{debug, warn};

use crate::domain::ports::AuthorizationGateError;
use crate::domain::{ActorContext, BearerToken, CredentialError, Error, InventoryError};
use crate::inbound::http::state::HttpState;

/// Actor resolved from the request's bearer credential.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedActor(pub ActorContext);

impl AuthenticatedActor {
    pub fn context(&self) -> &ActorContext {
        &self.0
    }
}

fn map_gate_error(error: AuthorizationGateError) -> Error {
    match error {
        AuthorizationGateError::Rejected => {
            InventoryError::Unauthenticated(CredentialError::Rejected).into()
        }
        AuthorizationGateError::Connection { message } => {
            warn!(%message, "authorization gate unavailable");
            InventoryError::store_unavailable(message).into()
        }
        AuthorizationGateError::Query { message } => InventoryError::store_query(message).into(),
    }
}

fn read_token(req: &HttpRequest) -> Result<BearerToken, Error> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str().map_err(|_| CredentialError::Malformed))
        .transpose()
        .and_then(BearerToken::from_authorization_header);
    header.map_err(|reason| {
        debug!(reason = reason.reason_code(), "rejected credential");
        InventoryError::Unauthenticated(reason).into()
    })
}

impl FromRequest for AuthenticatedActor {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = read_token(req);
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        Box::pin(async move {
            let token = token?;
            let state =
                state.ok_or_else(|| Error::internal("HTTP state missing from application"))?;
            let actor = state
                .authorization
                .resolve(&token)
                .await
                .map_err(map_gate_error)?;
            Ok(AuthenticatedActor(actor))
        })
    }
}
