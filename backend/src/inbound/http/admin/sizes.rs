//! Size administration.
//!
//! ```text
//! GET    /admin/sizes
//! POST   /admin/sizes
//! GET    /admin/sizes/{id}
//! PUT    /admin/sizes/{id}
//! DELETE /admin/sizes/{id}
//! GET    /admin/sizes/{id}/items
//! ```

use actix_web::http::header::LOCATION;
use actix_web::{HttpResponse, delete, get, post, put, web};
use uuid::Uuid;

use super::dto::{ClothingItemResponse, SizeRequest, SizeResponse};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::admin_cache_header;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

#[utoipa::path(
    get,
    path = "/admin/sizes",
    responses(
        (status = 200, description = "Sizes by name", body = [SizeResponse]),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["sizes"],
    operation_id = "listSizes"
)]
#[get("/sizes")]
pub async fn list_sizes(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let sizes: Vec<SizeResponse> = state
        .catalogue_query
        .list_sizes()
        .await?
        .into_iter()
        .map(SizeResponse::from)
        .collect();
    Ok(HttpResponse::Ok()
        .insert_header(admin_cache_header())
        .json(sizes))
}

#[utoipa::path(
    post,
    path = "/admin/sizes",
    request_body = SizeRequest,
    responses(
        (status = 201, description = "Size created", body = SizeResponse),
        (status = 400, description = "Invalid name", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 409, description = "Name already used", body = ErrorSchema)
    ),
    tags = ["sizes"],
    operation_id = "createSize"
)]
#[post("/sizes")]
pub async fn create_size(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<SizeRequest>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let size = state.catalogue.create_size(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created()
        .insert_header((LOCATION, format!("/admin/sizes/{}", size.id())))
        .json(SizeResponse::from(size)))
}

#[utoipa::path(
    get,
    path = "/admin/sizes/{id}",
    params(("id" = Uuid, Path, description = "Size id")),
    responses(
        (status = 200, description = "Size", body = SizeResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Unknown size", body = ErrorSchema)
    ),
    tags = ["sizes"],
    operation_id = "getSize"
)]
#[get("/sizes/{id}")]
pub async fn get_size(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let size = state.catalogue_query.get_size(path.into_inner()).await?;
    Ok(HttpResponse::Ok()
        .insert_header(admin_cache_header())
        .json(SizeResponse::from(size)))
}

#[utoipa::path(
    put,
    path = "/admin/sizes/{id}",
    params(("id" = Uuid, Path, description = "Size id")),
    request_body = SizeRequest,
    responses(
        (status = 200, description = "Size renamed", body = SizeResponse),
        (status = 400, description = "Invalid name", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Unknown size", body = ErrorSchema),
        (status = 409, description = "Name already used", body = ErrorSchema)
    ),
    tags = ["sizes"],
    operation_id = "renameSize"
)]
#[put("/sizes/{id}")]
pub async fn rename_size(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
    payload: web::Json<SizeRequest>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let size = state
        .catalogue
        .rename_size(path.into_inner(), payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok()
        .insert_header(admin_cache_header())
        .json(SizeResponse::from(size)))
}

/// Delete a size and every item/size pairing that uses it.
#[utoipa::path(
    delete,
    path = "/admin/sizes/{id}",
    params(("id" = Uuid, Path, description = "Size id")),
    responses(
        (status = 204, description = "Size deleted"),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Unknown size", body = ErrorSchema)
    ),
    tags = ["sizes"],
    operation_id = "deleteSize"
)]
#[delete("/sizes/{id}")]
pub async fn delete_size(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    state.catalogue.delete_size(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Items offered in a size.
#[utoipa::path(
    get,
    path = "/admin/sizes/{id}/items",
    params(("id" = Uuid, Path, description = "Size id")),
    responses(
        (status = 200, description = "Items by name", body = [ClothingItemResponse]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Unknown size", body = ErrorSchema)
    ),
    tags = ["sizes"],
    operation_id = "listSizeItems"
)]
#[get("/sizes/{id}/items")]
pub async fn list_size_items(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let items: Vec<ClothingItemResponse> = state
        .catalogue_query
        .list_items_in_size(path.into_inner())
        .await?
        .into_iter()
        .map(ClothingItemResponse::from)
        .collect();
    Ok(HttpResponse::Ok()
        .insert_header(admin_cache_header())
        .json(items))
}
