//! Driven port for catalogue persistence.
//!
//! The repository stores validated domain entities and reports integrity
//! failures as typed errors so the service can map them to stable codes
//! without knowing which store is behind the port.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Category, ClothingItem, ClothingItemSize, ItemSizeAvailability, Size};

use super::define_port_error;

define_port_error! {
    /// Errors raised by catalogue persistence adapters.
    pub enum CatalogueRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "catalogue connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "catalogue query failed: {message}",
        /// A unique constraint rejected the write.
        UniqueViolation { constraint: String } =>
            "catalogue unique constraint violated: {constraint}",
        /// A referenced parent row does not exist.
        MissingReference { constraint: String } =>
            "catalogue reference constraint violated: {constraint}",
        /// The row targeted by an update does not exist.
        NotFound =>
            "catalogue row not found",
    }
}

/// Optional filters applied when listing clothing items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClothingItemFilter {
    pub category_id: Option<Uuid>,
    pub available: Option<bool>,
}

impl ClothingItemFilter {
    /// Whether `item` passes every configured filter.
    pub fn matches(&self, item: &ClothingItem) -> bool {
        self.category_id.is_none_or(|id| item.category_id() == id)
            && self.available.is_none_or(|flag| item.available() == flag)
    }
}

/// Port for reading and writing catalogue entities.
///
/// Listings are ordered by name ascending. Deletes cascade: removing a
/// category removes its items, and removing an item or a size removes the
/// matching [`ClothingItemSize`] rows. Delete operations return `false` when
/// nothing matched; updates return [`CatalogueRepositoryError::NotFound`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueRepository: Send + Sync {
    async fn list_sizes(&self) -> Result<Vec<Size>, CatalogueRepositoryError>;
    async fn find_size(&self, id: Uuid) -> Result<Option<Size>, CatalogueRepositoryError>;
    async fn insert_size(&self, size: &Size) -> Result<(), CatalogueRepositoryError>;
    async fn update_size(&self, size: &Size) -> Result<(), CatalogueRepositoryError>;
    async fn delete_size(&self, id: Uuid) -> Result<bool, CatalogueRepositoryError>;

    async fn list_categories(&self) -> Result<Vec<Category>, CatalogueRepositoryError>;
    async fn find_category(&self, id: Uuid) -> Result<Option<Category>, CatalogueRepositoryError>;
    async fn insert_category(&self, category: &Category) -> Result<(), CatalogueRepositoryError>;
    async fn update_category(&self, category: &Category) -> Result<(), CatalogueRepositoryError>;
    async fn delete_category(&self, id: Uuid) -> Result<bool, CatalogueRepositoryError>;

    async fn list_items(
        &self,
        filter: ClothingItemFilter,
    ) -> Result<Vec<ClothingItem>, CatalogueRepositoryError>;
    async fn find_item(&self, id: Uuid) -> Result<Option<ClothingItem>, CatalogueRepositoryError>;
    async fn find_item_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<ClothingItem>, CatalogueRepositoryError>;
    async fn insert_item(&self, item: &ClothingItem) -> Result<(), CatalogueRepositoryError>;
    async fn update_item(&self, item: &ClothingItem) -> Result<(), CatalogueRepositoryError>;
    async fn delete_item(&self, id: Uuid) -> Result<bool, CatalogueRepositoryError>;

    /// Sizes offered for an item with per-pair availability, by size name.
    async fn list_item_sizes(
        &self,
        item_id: Uuid,
    ) -> Result<Vec<ItemSizeAvailability>, CatalogueRepositoryError>;
    /// Items offered in a size, by item name.
    async fn list_items_in_size(
        &self,
        size_id: Uuid,
    ) -> Result<Vec<ClothingItem>, CatalogueRepositoryError>;
    async fn find_item_size(
        &self,
        item_id: Uuid,
        size_id: Uuid,
    ) -> Result<Option<ClothingItemSize>, CatalogueRepositoryError>;
    async fn insert_item_size(
        &self,
        link: &ClothingItemSize,
    ) -> Result<(), CatalogueRepositoryError>;
    async fn set_item_size_availability(
        &self,
        item_id: Uuid,
        size_id: Uuid,
        available: bool,
    ) -> Result<(), CatalogueRepositoryError>;
    async fn delete_item_size(
        &self,
        item_id: Uuid,
        size_id: Uuid,
    ) -> Result<bool, CatalogueRepositoryError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn error_messages_name_the_constraint() {
        let err = CatalogueRepositoryError::unique_violation("categories_name_key");
        assert_eq!(
            err.to_string(),
            "catalogue unique constraint violated: categories_name_key"
        );
        assert_eq!(
            CatalogueRepositoryError::not_found().to_string(),
            "catalogue row not found"
        );
    }
}
