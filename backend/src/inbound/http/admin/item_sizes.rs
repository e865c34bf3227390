//! Item/size pairings.
//!
//! ```text
//! GET    /admin/items/{id}/sizes
//! POST   /admin/items/{id}/sizes            {"sizeId":"...","available":true}
//! PUT    /admin/items/{id}/sizes/{size_id}  {"available":false}
//! DELETE /admin/items/{id}/sizes/{size_id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use uuid::Uuid;

use super::dto::{AttachSizeRequest, AvailabilityRequest, ItemSizeResponse};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::admin_cache_header;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Sizes an item is offered in, ordered by size name.
#[utoipa::path(
    get,
    path = "/admin/items/{id}/sizes",
    params(("id" = Uuid, Path, description = "Item id")),
    responses(
        (status = 200, description = "Pairings with size names", body = [ItemSizeResponse]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Unknown item", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "listItemSizes"
)]
#[get("/items/{id}/sizes")]
pub async fn list_item_sizes(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let sizes: Vec<ItemSizeResponse> = state
        .catalogue_query
        .list_item_sizes(path.into_inner())
        .await?
        .into_iter()
        .map(ItemSizeResponse::from)
        .collect();
    Ok(HttpResponse::Ok()
        .insert_header(admin_cache_header())
        .json(sizes))
}

#[utoipa::path(
    post,
    path = "/admin/items/{id}/sizes",
    params(("id" = Uuid, Path, description = "Item id")),
    request_body = AttachSizeRequest,
    responses(
        (status = 201, description = "Size attached", body = ItemSizeResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Unknown item or size", body = ErrorSchema),
        (status = 409, description = "Item already offered in this size", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "attachItemSize"
)]
#[post("/items/{id}/sizes")]
pub async fn attach_size(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
    payload: web::Json<AttachSizeRequest>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let AttachSizeRequest { size_id, available } = payload.into_inner();
    let link = state
        .catalogue
        .attach_size(path.into_inner(), size_id, available)
        .await?;
    Ok(HttpResponse::Created().json(ItemSizeResponse::from(link)))
}

/// Set availability for a pairing, creating it when absent.
#[utoipa::path(
    put,
    path = "/admin/items/{id}/sizes/{size_id}",
    params(
        ("id" = Uuid, Path, description = "Item id"),
        ("size_id" = Uuid, Path, description = "Size id")
    ),
    request_body = AvailabilityRequest,
    responses(
        (status = 200, description = "Availability updated", body = ItemSizeResponse),
        (status = 201, description = "Pairing created", body = ItemSizeResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Unknown item or size", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "setItemSizeAvailability"
)]
#[put("/items/{id}/sizes/{size_id}")]
pub async fn set_size_availability(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(Uuid, Uuid)>,
    payload: web::Json<AvailabilityRequest>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let (item_id, size_id) = path.into_inner();
    let (link, created) = state
        .catalogue
        .set_size_availability(item_id, size_id, payload.available)
        .await?;
    let mut response = if created {
        HttpResponse::Created()
    } else {
        HttpResponse::Ok()
    };
    Ok(response.json(ItemSizeResponse::from(link)))
}

#[utoipa::path(
    delete,
    path = "/admin/items/{id}/sizes/{size_id}",
    params(
        ("id" = Uuid, Path, description = "Item id"),
        ("size_id" = Uuid, Path, description = "Size id")
    ),
    responses(
        (status = 204, description = "Pairing removed"),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Pairing not found", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "detachItemSize"
)]
#[delete("/items/{id}/sizes/{size_id}")]
pub async fn detach_size(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<(Uuid, Uuid)>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let (item_id, size_id) = path.into_inner();
    state.catalogue.detach_size(item_id, size_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
