//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every admin endpoint, the health probes, the
//! request/response bodies and the session cookie security scheme. Swagger
//! UI serves it at `/docs` in debug builds.

use crate::inbound::http::admin::dto::{
    AdminResponse, AttachSizeRequest, AvailabilityRequest, CategoryRequest, CategoryResponse,
    ClothingItemRequest, ClothingItemResponse, ItemSizeResponse, LoginRequest, SizeRequest,
    SizeResponse,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Admin session cookie issued by POST /admin/login.",
            ))),
        );
    }
}

/// OpenAPI document for the catalogue administration API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Reverence catalogue API",
        description = "Administration of sizes, categories, clothing items and per-size availability.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::admin::auth::login,
        crate::inbound::http::admin::auth::logout,
        crate::inbound::http::admin::sizes::list_sizes,
        crate::inbound::http::admin::sizes::create_size,
        crate::inbound::http::admin::sizes::get_size,
        crate::inbound::http::admin::sizes::rename_size,
        crate::inbound::http::admin::sizes::delete_size,
        crate::inbound::http::admin::sizes::list_size_items,
        crate::inbound::http::admin::categories::list_categories,
        crate::inbound::http::admin::categories::create_category,
        crate::inbound::http::admin::categories::get_category,
        crate::inbound::http::admin::categories::update_category,
        crate::inbound::http::admin::categories::delete_category,
        crate::inbound::http::admin::categories::list_category_items,
        crate::inbound::http::admin::items::list_items,
        crate::inbound::http::admin::items::create_item,
        crate::inbound::http::admin::items::get_item_by_slug,
        crate::inbound::http::admin::items::get_item,
        crate::inbound::http::admin::items::update_item,
        crate::inbound::http::admin::items::delete_item,
        crate::inbound::http::admin::item_sizes::list_item_sizes,
        crate::inbound::http::admin::item_sizes::attach_size,
        crate::inbound::http::admin::item_sizes::set_size_availability,
        crate::inbound::http::admin::item_sizes::detach_size,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        LoginRequest,
        AdminResponse,
        SizeRequest,
        SizeResponse,
        CategoryRequest,
        CategoryResponse,
        ClothingItemRequest,
        ClothingItemResponse,
        AttachSizeRequest,
        AvailabilityRequest,
        ItemSizeResponse,
    )),
    tags(
        (name = "admin", description = "Operator sign-in"),
        (name = "sizes", description = "Garment sizes"),
        (name = "categories", description = "Item categories"),
        (name = "items", description = "Clothing items and their sizes"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
