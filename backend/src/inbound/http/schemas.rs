//! OpenAPI schema stand-ins for domain types.
//!
//! Domain types do not derive `ToSchema`; these wrappers register their
//! shape with utoipa from the adapter layer instead.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Admin login is missing or failed.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The referenced size, category or item does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A unique name, slug or item/size pair is already taken.
    #[schema(rename = "conflict")]
    Conflict,
    /// The catalogue store is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    #[schema(example = "conflict")]
    code: ErrorCodeSchema,
    #[schema(example = "category name already exists")]
    message: String,
    /// Request trace identifier, echoed in the `trace-id` header.
    #[schema(example = "6f1f4b5e-3a8f-4d4c-9b4a-0c1d2e3f4a5b")]
    trace_id: Option<String>,
    /// Field-level context such as `{ "field": "price", "code": "negative" }`.
    details: Option<serde_json::Value>,
}
