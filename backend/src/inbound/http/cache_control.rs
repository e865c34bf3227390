//! Cache policy for admin responses.

use actix_web::http::header::{CACHE_CONTROL, HeaderName};

/// Admin data is per-session and must never be served from a shared cache.
pub const ADMIN_CACHE_POLICY: &str = "private, no-store";

/// Header tuple for `HttpResponseBuilder::insert_header`.
pub const fn admin_cache_header() -> (HeaderName, &'static str) {
    (CACHE_CONTROL, ADMIN_CACHE_POLICY)
}
