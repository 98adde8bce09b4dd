//! Sweet shop inventory service.
//!
//! Purchases decrement stock, administrator restocks increment it, and every
//! applied change leaves one transaction record. The domain core lives in
//! [`domain`]; [`inbound`] and [`outbound`] adapt it to HTTP, PostgreSQL, and
//! in-memory stores.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
