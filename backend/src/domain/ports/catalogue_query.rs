//! Driving port for catalogue reads.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Category, ClothingItem, Error, ItemSizeAvailability, Size};

use super::ClothingItemFilter;

/// Domain use-case port for catalogue reads.
///
/// Lookups of a missing entity fail with `not_found`; listings of a missing
/// parent (for example the items of an unknown category) fail the same way
/// rather than returning an empty list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueQuery: Send + Sync {
    async fn list_sizes(&self) -> Result<Vec<Size>, Error>;
    async fn get_size(&self, id: Uuid) -> Result<Size, Error>;
    async fn list_items_in_size(&self, size_id: Uuid) -> Result<Vec<ClothingItem>, Error>;

    async fn list_categories(&self) -> Result<Vec<Category>, Error>;
    async fn get_category(&self, id: Uuid) -> Result<Category, Error>;
    async fn list_category_items(&self, category_id: Uuid) -> Result<Vec<ClothingItem>, Error>;

    async fn list_items(&self, filter: ClothingItemFilter) -> Result<Vec<ClothingItem>, Error>;
    async fn get_item(&self, id: Uuid) -> Result<ClothingItem, Error>;
    async fn get_item_by_slug(&self, slug: &str) -> Result<ClothingItem, Error>;
    async fn list_item_sizes(&self, item_id: Uuid) -> Result<Vec<ItemSizeAvailability>, Error>;
}
