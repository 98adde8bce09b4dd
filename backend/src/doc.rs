//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the inventory mutation endpoints, the health probes,
//! the schema wrappers from [`crate::inbound::http::schemas`], and the bearer
//! security scheme every inventory call requires.
//!
//! The document backs Swagger UI in debug builds and is exported by
//! `cargo run --bin openapi-dump`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::health::ProbeStatus;
use crate::inbound::http::inventory::{StockChangeRequest, StockChangeResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, ItemSchema};

/// Name of the bearer security scheme in the generated document.
pub const BEARER_SCHEME: &str = "BearerAuth";

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BEARER_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Opaque access token resolved to an actor."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Sweet shop inventory API",
        description = "Purchases and restocks against the sweet shop catalogue, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerAuth" = [])),
    paths(
        crate::inbound::http::inventory::purchase,
        crate::inbound::http::inventory::restock,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ItemSchema,
        ErrorSchema,
        ErrorCodeSchema,
        StockChangeRequest,
        StockChangeResponse,
        ProbeStatus
    )),
    tags(
        (name = "inventory", description = "Stock mutations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
