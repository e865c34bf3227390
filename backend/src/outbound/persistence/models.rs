//! Diesel row types for the catalogue tables.
//!
//! Rows are internal to the persistence adapter; the repository converts
//! them to validated domain entities before they cross the port.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{
    CatalogueValidationError, Category, CategoryDraft, ClothingItem, ClothingItemDraft,
    ClothingItemSize, Size, SizeDraft,
};

use super::schema::{categories, clothing_item_sizes, clothing_items, sizes};

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = sizes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SizeRow {
    pub id: Uuid,
    pub name: String,
}

impl From<&Size> for SizeRow {
    fn from(size: &Size) -> Self {
        Self {
            id: size.id(),
            name: size.name().to_owned(),
        }
    }
}

impl TryFrom<SizeRow> for Size {
    type Error = CatalogueValidationError;

    fn try_from(row: SizeRow) -> Result<Self, Self::Error> {
        Size::new(SizeDraft {
            id: row.id,
            name: row.name,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

impl From<&Category> for CategoryRow {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id(),
            name: category.name().to_owned(),
            slug: category.slug().to_owned(),
        }
    }
}

impl TryFrom<CategoryRow> for Category {
    type Error = CatalogueValidationError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Category::new(CategoryDraft {
            id: row.id,
            name: row.name,
            slug: row.slug,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = clothing_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ClothingItemRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub available: bool,
    pub category_id: Uuid,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub price: Decimal,
    pub discount: Decimal,
    pub description: String,
}

impl From<&ClothingItem> for ClothingItemRow {
    fn from(item: &ClothingItem) -> Self {
        Self {
            id: item.id(),
            name: item.name().to_owned(),
            slug: item.slug().to_owned(),
            available: item.available(),
            category_id: item.category_id(),
            image: item.image().map(ToString::to_string),
            created_at: item.created_at(),
            updated_at: item.updated_at(),
            price: item.price().amount(),
            discount: item.discount().value(),
            description: item.description().to_owned(),
        }
    }
}

impl TryFrom<ClothingItemRow> for ClothingItem {
    type Error = CatalogueValidationError;

    fn try_from(row: ClothingItemRow) -> Result<Self, Self::Error> {
        ClothingItem::new(ClothingItemDraft {
            id: row.id,
            name: row.name,
            slug: row.slug,
            available: row.available,
            category_id: row.category_id,
            image: row.image,
            created_at: row.created_at,
            updated_at: row.updated_at,
            price: row.price,
            discount: row.discount,
            description: row.description,
        })
    }
}

/// Editable clothing item columns. `created_at` is never rewritten.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = clothing_items)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct ClothingItemChangeset<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub available: bool,
    pub category_id: Uuid,
    pub image: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub price: Decimal,
    pub discount: Decimal,
    pub description: &'a str,
}

impl<'a> From<&'a ClothingItem> for ClothingItemChangeset<'a> {
    fn from(item: &'a ClothingItem) -> Self {
        Self {
            name: item.name(),
            slug: item.slug(),
            available: item.available(),
            category_id: item.category_id(),
            image: item.image().map(ToString::to_string),
            updated_at: item.updated_at(),
            price: item.price().amount(),
            discount: item.discount().value(),
            description: item.description(),
        }
    }
}

#[derive(Debug, Clone, Copy, Queryable, Selectable, Insertable)]
#[diesel(table_name = clothing_item_sizes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ClothingItemSizeRow {
    pub id: Uuid,
    pub clothing_item_id: Uuid,
    pub size_id: Uuid,
    pub available: bool,
}

impl From<&ClothingItemSize> for ClothingItemSizeRow {
    fn from(link: &ClothingItemSize) -> Self {
        Self {
            id: link.id,
            clothing_item_id: link.clothing_item_id,
            size_id: link.size_id,
            available: link.available,
        }
    }
}

impl From<ClothingItemSizeRow> for ClothingItemSize {
    fn from(row: ClothingItemSizeRow) -> Self {
        ClothingItemSize::new(row.id, row.clothing_item_id, row.size_id, row.available)
    }
}
