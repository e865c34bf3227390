//! Category administration.
//!
//! ```text
//! GET    /admin/categories
//! POST   /admin/categories
//! GET    /admin/categories/{id}
//! PUT    /admin/categories/{id}
//! DELETE /admin/categories/{id}
//! GET    /admin/categories/{id}/items
//! ```

use actix_web::http::header::LOCATION;
use actix_web::{HttpResponse, delete, get, post, put, web};
use uuid::Uuid;

use super::dto::{CategoryRequest, CategoryResponse, ClothingItemResponse};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::admin_cache_header;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

#[utoipa::path(
    get,
    path = "/admin/categories",
    responses(
        (status = 200, description = "Categories by name", body = [CategoryResponse]),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "listCategories"
)]
#[get("/categories")]
pub async fn list_categories(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let categories: Vec<CategoryResponse> = state
        .catalogue_query
        .list_categories()
        .await?
        .into_iter()
        .map(CategoryResponse::from)
        .collect();
    Ok(HttpResponse::Ok()
        .insert_header(admin_cache_header())
        .json(categories))
}

/// Create a category, deriving the slug from the name when omitted.
#[utoipa::path(
    post,
    path = "/admin/categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Invalid name or slug", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 409, description = "Name or slug already used", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "createCategory"
)]
#[post("/categories")]
pub async fn create_category(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CategoryRequest>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let category = state
        .catalogue
        .create_category(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created()
        .insert_header((LOCATION, format!("/admin/categories/{}", category.id())))
        .json(CategoryResponse::from(category)))
}

#[utoipa::path(
    get,
    path = "/admin/categories/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category", body = CategoryResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Unknown category", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "getCategory"
)]
#[get("/categories/{id}")]
pub async fn get_category(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let category = state.catalogue_query.get_category(path.into_inner()).await?;
    Ok(HttpResponse::Ok()
        .insert_header(admin_cache_header())
        .json(CategoryResponse::from(category)))
}

#[utoipa::path(
    put,
    path = "/admin/categories/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 400, description = "Invalid name or slug", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Unknown category", body = ErrorSchema),
        (status = 409, description = "Name or slug already used", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "updateCategory"
)]
#[put("/categories/{id}")]
pub async fn update_category(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
    payload: web::Json<CategoryRequest>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let category = state
        .catalogue
        .update_category(path.into_inner(), payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok()
        .insert_header(admin_cache_header())
        .json(CategoryResponse::from(category)))
}

/// Delete a category together with all of its clothing items.
#[utoipa::path(
    delete,
    path = "/admin/categories/{id}",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category and its items deleted"),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Unknown category", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "deleteCategory"
)]
#[delete("/categories/{id}")]
pub async fn delete_category(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    state.catalogue.delete_category(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
    get,
    path = "/admin/categories/{id}/items",
    params(("id" = Uuid, Path, description = "Category id")),
    responses(
        (status = 200, description = "Items in the category by name", body = [ClothingItemResponse]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Unknown category", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "listCategoryItems"
)]
#[get("/categories/{id}/items")]
pub async fn list_category_items(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let items: Vec<ClothingItemResponse> = state
        .catalogue_query
        .list_category_items(path.into_inner())
        .await?
        .into_iter()
        .map(ClothingItemResponse::from)
        .collect();
    Ok(HttpResponse::Ok()
        .insert_header(admin_cache_header())
        .json(items))
}
