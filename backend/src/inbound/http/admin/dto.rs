//! Request and response bodies for the admin endpoints.
//!
//! Decimal amounts travel as strings with two decimal places (`"80.00"`)
//! and are accepted as either strings or JSON numbers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::ports::{CategoryInput, ClothingItemInput, SizeInput};
use crate::domain::{Category, ClothingItem, ClothingItemSize, ItemSizeAvailability, Size};

fn default_true() -> bool {
    true
}

/// `POST /admin/login` body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[schema(example = "admin")]
    pub username: String,
    #[schema(example = "password")]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminResponse {
    pub username: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SizeRequest {
    #[schema(example = "XL")]
    pub name: String,
}

impl From<SizeRequest> for SizeInput {
    fn from(value: SizeRequest) -> Self {
        Self { name: value.name }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SizeResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<Size> for SizeResponse {
    fn from(value: Size) -> Self {
        Self {
            id: value.id(),
            name: value.name().to_owned(),
        }
    }
}

/// Category create/update body. A missing slug is derived from the name
/// on create and left unchanged on update.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    #[schema(example = "Outerwear")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "outerwear")]
    pub slug: Option<String>,
}

impl From<CategoryRequest> for CategoryInput {
    fn from(value: CategoryRequest) -> Self {
        Self {
            name: value.name,
            slug: value.slug,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

impl From<Category> for CategoryResponse {
    fn from(value: Category) -> Self {
        Self {
            id: value.id(),
            name: value.name().to_owned(),
            slug: value.slug().to_owned(),
        }
    }
}

/// Clothing item create/update body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItemRequest {
    #[schema(example = "Linen Shirt")]
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default = "default_true")]
    pub available: bool,
    pub category_id: Uuid,
    /// Relative upload path, e.g. `products/2024/06/01/linen.jpg`.
    #[serde(default)]
    pub image: Option<String>,
    #[schema(value_type = String, example = "100.00")]
    pub price: Decimal,
    /// Percentage between 0 and 100.
    #[serde(default)]
    #[schema(value_type = String, example = "20.00")]
    pub discount: Decimal,
    #[serde(default)]
    pub description: String,
}

impl From<ClothingItemRequest> for ClothingItemInput {
    fn from(value: ClothingItemRequest) -> Self {
        Self {
            name: value.name,
            slug: value.slug,
            available: value.available,
            category_id: value.category_id,
            image: value.image,
            price: value.price,
            discount: value.discount,
            description: value.description,
        }
    }
}

/// Clothing item with its computed effective price.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItemResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub available: bool,
    pub category_id: Uuid,
    pub image: Option<String>,
    #[schema(value_type = String, example = "100.00")]
    pub price: Decimal,
    #[schema(value_type = String, example = "20.00")]
    pub discount: Decimal,
    /// `price * (1 - discount / 100)`, rounded to cents.
    #[schema(value_type = String, example = "80.00")]
    pub effective_price: Decimal,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ClothingItem> for ClothingItemResponse {
    fn from(item: ClothingItem) -> Self {
        let effective_price = item.effective_price().amount();
        Self {
            id: item.id(),
            name: item.name().to_owned(),
            slug: item.slug().to_owned(),
            available: item.available(),
            category_id: item.category_id(),
            image: item.image().map(|path| path.as_str().to_owned()),
            price: item.price().amount(),
            discount: item.discount().value(),
            effective_price,
            description: item.description().to_owned(),
            created_at: item.created_at(),
            updated_at: item.updated_at(),
        }
    }
}

/// `GET /admin/items` filters.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemListQuery {
    /// Category id to restrict the listing to.
    pub category: Option<String>,
    /// Only items with this availability flag.
    pub available: Option<bool>,
}

/// `POST /admin/items/{id}/sizes` body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttachSizeRequest {
    pub size_id: Uuid,
    #[serde(default = "default_true")]
    pub available: bool,
}

/// `PUT /admin/items/{id}/sizes/{size_id}` body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    #[serde(default = "default_true")]
    pub available: bool,
}

/// One item/size pairing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemSizeResponse {
    pub id: Uuid,
    pub clothing_item_id: Uuid,
    pub size_id: Uuid,
    /// Size name; omitted on mutation responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_name: Option<String>,
    pub available: bool,
}

impl From<ClothingItemSize> for ItemSizeResponse {
    fn from(link: ClothingItemSize) -> Self {
        Self {
            id: link.id,
            clothing_item_id: link.clothing_item_id,
            size_id: link.size_id,
            size_name: None,
            available: link.available,
        }
    }
}

impl From<ItemSizeAvailability> for ItemSizeResponse {
    fn from(row: ItemSizeAvailability) -> Self {
        Self {
            size_name: Some(row.size.name().to_owned()),
            ..Self::from(row.link)
        }
    }
}
