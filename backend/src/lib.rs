//! Clothing catalogue backend.
//!
//! Sizes, categories and clothing items are managed through a
//! session-protected JSON surface under `/admin`; everything else is handed
//! to a storefront route table mounted at `/`.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
