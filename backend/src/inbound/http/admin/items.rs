//! Clothing item administration.
//!
//! ```text
//! GET    /admin/items?category=<uuid>&available=<bool>
//! POST   /admin/items
//! GET    /admin/items/by-slug/{slug}
//! GET    /admin/items/{id}
//! PUT    /admin/items/{id}
//! DELETE /admin/items/{id}
//! ```

use actix_web::http::header::LOCATION;
use actix_web::{HttpResponse, delete, get, post, put, web};
use uuid::Uuid;

use super::dto::{ClothingItemRequest, ClothingItemResponse, ItemListQuery};
use crate::domain::Error;
use crate::domain::ports::ClothingItemFilter;
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::admin_cache_header;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_optional_uuid};

const CATEGORY_PARAM: FieldName = FieldName::new("category");

fn filter_from_query(query: &ItemListQuery) -> Result<ClothingItemFilter, Error> {
    Ok(ClothingItemFilter {
        category_id: parse_optional_uuid(query.category.as_deref(), CATEGORY_PARAM)?,
        available: query.available,
    })
}

fn item_json(item: ClothingItemResponse) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(admin_cache_header())
        .json(item)
}

/// List clothing items by name, optionally filtered.
#[utoipa::path(
    get,
    path = "/admin/items",
    params(ItemListQuery),
    responses(
        (status = 200, description = "Items by name", body = [ClothingItemResponse]),
        (status = 400, description = "Malformed filter", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "listItems"
)]
#[get("/items")]
pub async fn list_items(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<ItemListQuery>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let filter = filter_from_query(&query)?;
    let items: Vec<ClothingItemResponse> = state
        .catalogue_query
        .list_items(filter)
        .await?
        .into_iter()
        .map(ClothingItemResponse::from)
        .collect();
    Ok(HttpResponse::Ok()
        .insert_header(admin_cache_header())
        .json(items))
}

/// Create a clothing item. `createdAt` and `updatedAt` are set by the server.
#[utoipa::path(
    post,
    path = "/admin/items",
    request_body = ClothingItemRequest,
    responses(
        (status = 201, description = "Item created", body = ClothingItemResponse),
        (status = 400, description = "Invalid field or unknown category", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 409, description = "Slug already used", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "createItem"
)]
#[post("/items")]
pub async fn create_item(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ClothingItemRequest>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let item = state.catalogue.create_item(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created()
        .insert_header((LOCATION, format!("/admin/items/{}", item.id())))
        .json(ClothingItemResponse::from(item)))
}

#[utoipa::path(
    get,
    path = "/admin/items/by-slug/{slug}",
    params(("slug" = String, Path, description = "Item slug")),
    responses(
        (status = 200, description = "Item", body = ClothingItemResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Unknown slug", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "getItemBySlug"
)]
#[get("/items/by-slug/{slug}")]
pub async fn get_item_by_slug(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let item = state.catalogue_query.get_item_by_slug(&path).await?;
    Ok(item_json(item.into()))
}

#[utoipa::path(
    get,
    path = "/admin/items/{id}",
    params(("id" = Uuid, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item", body = ClothingItemResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Unknown item", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "getItem"
)]
#[get("/items/{id}")]
pub async fn get_item(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let item = state.catalogue_query.get_item(path.into_inner()).await?;
    Ok(item_json(item.into()))
}

/// Replace an item's fields. An omitted slug keeps the current one.
#[utoipa::path(
    put,
    path = "/admin/items/{id}",
    params(("id" = Uuid, Path, description = "Item id")),
    request_body = ClothingItemRequest,
    responses(
        (status = 200, description = "Item updated", body = ClothingItemResponse),
        (status = 400, description = "Invalid field or unknown category", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Unknown item", body = ErrorSchema),
        (status = 409, description = "Slug already used", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "updateItem"
)]
#[put("/items/{id}")]
pub async fn update_item(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
    payload: web::Json<ClothingItemRequest>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let item = state
        .catalogue
        .update_item(path.into_inner(), payload.into_inner().into())
        .await?;
    Ok(item_json(item.into()))
}

/// Delete an item and its size pairings.
#[utoipa::path(
    delete,
    path = "/admin/items/{id}",
    params(("id" = Uuid, Path, description = "Item id")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Unknown item", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "deleteItem"
)]
#[delete("/items/{id}")]
pub async fn delete_item(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    state.catalogue.delete_item(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
