//! Driving port for catalogue mutations.
//!
//! Inbound adapters pass raw, unvalidated inputs; implementations validate
//! them into domain entities, assign identifiers and timestamps, and persist
//! them.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Category, ClothingItem, ClothingItemSize, Error, Size};

/// Fields accepted when creating or renaming a size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeInput {
    pub name: String,
}

/// Fields accepted when creating or updating a category.
///
/// A missing `slug` is derived from `name` on create and left unchanged on
/// update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: String,
    pub slug: Option<String>,
}

/// Fields accepted when creating or replacing a clothing item.
///
/// A missing `slug` is derived from `name` on create and left unchanged on
/// update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItemInput {
    pub name: String,
    pub slug: Option<String>,
    pub available: bool,
    pub category_id: Uuid,
    pub image: Option<String>,
    pub price: Decimal,
    pub discount: Decimal,
    pub description: String,
}

/// Domain use-case port for catalogue writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueCommand: Send + Sync {
    async fn create_size(&self, input: SizeInput) -> Result<Size, Error>;
    async fn rename_size(&self, id: Uuid, input: SizeInput) -> Result<Size, Error>;
    /// Delete a size and every item/size pair that references it.
    async fn delete_size(&self, id: Uuid) -> Result<(), Error>;

    async fn create_category(&self, input: CategoryInput) -> Result<Category, Error>;
    async fn update_category(&self, id: Uuid, input: CategoryInput) -> Result<Category, Error>;
    /// Delete a category together with its clothing items.
    async fn delete_category(&self, id: Uuid) -> Result<(), Error>;

    async fn create_item(&self, input: ClothingItemInput) -> Result<ClothingItem, Error>;
    /// Replace an item's editable fields and refresh `updated_at`.
    async fn update_item(&self, id: Uuid, input: ClothingItemInput)
    -> Result<ClothingItem, Error>;
    async fn delete_item(&self, id: Uuid) -> Result<(), Error>;

    /// Offer an item in a size. Fails with a conflict when already offered.
    async fn attach_size(
        &self,
        item_id: Uuid,
        size_id: Uuid,
        available: bool,
    ) -> Result<ClothingItemSize, Error>;
    /// Set the availability of an item/size pair, attaching it first when
    /// needed. The flag reports whether a new pair was created.
    async fn set_size_availability(
        &self,
        item_id: Uuid,
        size_id: Uuid,
        available: bool,
    ) -> Result<(ClothingItemSize, bool), Error>;
    async fn detach_size(&self, item_id: Uuid, size_id: Uuid) -> Result<(), Error>;
}
