//! Catalogue domain service implementing the command and query ports.
//!
//! The service validates inputs into domain entities, assigns identifiers
//! and timestamps, and translates repository failures into domain errors:
//! unique violations become conflicts, missing references become invalid
//! requests, and connection failures become service-unavailable errors.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::ports::{
    CatalogueCommand, CatalogueQuery, CatalogueRepository, CatalogueRepositoryError,
    CategoryInput, ClothingItemFilter, ClothingItemInput, SizeInput,
};
use crate::domain::{
    CatalogueValidationError, Category, CategoryDraft, ClothingItem, ClothingItemDraft,
    ClothingItemSize, Error, ItemSizeAvailability, Size, SizeDraft, slugify,
};

fn map_repository_error(error: CatalogueRepositoryError) -> Error {
    match error {
        CatalogueRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("catalogue repository unavailable: {message}"))
        }
        CatalogueRepositoryError::Query { message } => {
            Error::internal(format!("catalogue repository error: {message}"))
        }
        CatalogueRepositoryError::UniqueViolation { constraint } => {
            Error::conflict(conflict_message(&constraint))
                .with_details(json!({ "constraint": constraint }))
        }
        CatalogueRepositoryError::MissingReference { constraint } => {
            Error::invalid_request(reference_message(&constraint))
                .with_details(json!({ "constraint": constraint }))
        }
        CatalogueRepositoryError::NotFound => Error::not_found("catalogue entry not found"),
    }
}

fn conflict_message(constraint: &str) -> &'static str {
    match constraint {
        "sizes_name_key" => "a size with this name already exists",
        "categories_name_key" => "a category with this name already exists",
        "categories_slug_key" => "a category with this slug already exists",
        "clothing_items_slug_key" => "a clothing item with this slug already exists",
        "clothing_item_sizes_item_size_key" => "the item is already offered in this size",
        _ => "the change conflicts with existing catalogue data",
    }
}

fn reference_message(constraint: &str) -> &'static str {
    match constraint {
        "clothing_items_category_id_fkey" => "category does not exist",
        "clothing_item_sizes_clothing_item_id_fkey" => "clothing item does not exist",
        "clothing_item_sizes_size_id_fkey" => "size does not exist",
        _ => "referenced catalogue entry does not exist",
    }
}

fn map_missing_row(entity: &'static str, id: Uuid) -> impl Fn(CatalogueRepositoryError) -> Error {
    move |error| match error {
        CatalogueRepositoryError::NotFound => Error::not_found(format!("{entity} {id} not found")),
        other => map_repository_error(other),
    }
}

fn map_validation_error(error: CatalogueValidationError) -> Error {
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": error.field(),
        "code": error.reason(),
    }))
}

fn resolve_slug(explicit: Option<String>, name: &str, field: &'static str) -> Result<String, Error> {
    match explicit {
        Some(slug) => Ok(slug.trim().to_owned()),
        None => slugify(name).ok_or_else(|| {
            Error::invalid_request(format!("{field} cannot be derived from the name"))
                .with_details(json!({ "field": field, "code": "invalid_slug" }))
        }),
    }
}

/// Catalogue service backed by a [`CatalogueRepository`].
#[derive(Clone)]
pub struct CatalogueService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> CatalogueService<R> {
    /// Create a service over `repo`, stamping item timestamps from `clock`.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// use reverence::domain::CatalogueService;
    /// use reverence::outbound::memory::InMemoryCatalogueRepository;
    ///
    /// let service = CatalogueService::new(
    ///     Arc::new(InMemoryCatalogueRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

impl<R> CatalogueService<R>
where
    R: CatalogueRepository,
{
    /// Current time at the microsecond precision PostgreSQL stores.
    fn now(&self) -> DateTime<Utc> {
        self.clock.utc().trunc_subsecs(6)
    }

    async fn require_size(&self, id: Uuid) -> Result<Size, Error> {
        self.repo
            .find_size(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("size {id} not found")))
    }

    async fn require_category(&self, id: Uuid) -> Result<Category, Error> {
        self.repo
            .find_category(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("category {id} not found")))
    }

    async fn require_item(&self, id: Uuid) -> Result<ClothingItem, Error> {
        self.repo
            .find_item(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("clothing item {id} not found")))
    }

    async fn require_pair_parents(&self, item_id: Uuid, size_id: Uuid) -> Result<(), Error> {
        self.require_item(item_id).await?;
        self.require_size(size_id).await?;
        Ok(())
    }

    fn build_item(
        id: Uuid,
        input: ClothingItemInput,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<ClothingItem, Error> {
        let slug = resolve_slug(input.slug, &input.name, "clothing_item.slug")?;
        ClothingItem::new(ClothingItemDraft {
            id,
            name: input.name,
            slug,
            available: input.available,
            category_id: input.category_id,
            image: input.image,
            created_at,
            updated_at,
            price: input.price,
            discount: input.discount,
            description: input.description,
        })
        .map_err(map_validation_error)
    }
}

#[async_trait]
impl<R> CatalogueCommand for CatalogueService<R>
where
    R: CatalogueRepository,
{
    async fn create_size(&self, input: SizeInput) -> Result<Size, Error> {
        let size = Size::new(SizeDraft {
            id: Uuid::new_v4(),
            name: input.name,
        })
        .map_err(map_validation_error)?;
        self.repo
            .insert_size(&size)
            .await
            .map_err(map_repository_error)?;
        info!(size_id = %size.id(), name = size.name(), "size created");
        Ok(size)
    }

    async fn rename_size(&self, id: Uuid, input: SizeInput) -> Result<Size, Error> {
        let size = Size::new(SizeDraft {
            id,
            name: input.name,
        })
        .map_err(map_validation_error)?;
        self.repo
            .update_size(&size)
            .await
            .map_err(map_missing_row("size", id))?;
        Ok(size)
    }

    async fn delete_size(&self, id: Uuid) -> Result<(), Error> {
        let deleted = self.repo.delete_size(id).await.map_err(map_repository_error)?;
        if !deleted {
            return Err(Error::not_found(format!("size {id} not found")));
        }
        info!(size_id = %id, "size deleted");
        Ok(())
    }

    async fn create_category(&self, input: CategoryInput) -> Result<Category, Error> {
        let slug = resolve_slug(input.slug, &input.name, "category.slug")?;
        let category = Category::new(CategoryDraft {
            id: Uuid::new_v4(),
            name: input.name,
            slug,
        })
        .map_err(map_validation_error)?;
        self.repo
            .insert_category(&category)
            .await
            .map_err(map_repository_error)?;
        info!(category_id = %category.id(), slug = category.slug(), "category created");
        Ok(category)
    }

    async fn update_category(&self, id: Uuid, input: CategoryInput) -> Result<Category, Error> {
        let slug = match input.slug {
            Some(slug) => slug.trim().to_owned(),
            None => self.require_category(id).await?.slug().to_owned(),
        };
        let category = Category::new(CategoryDraft {
            id,
            name: input.name,
            slug,
        })
        .map_err(map_validation_error)?;
        self.repo
            .update_category(&category)
            .await
            .map_err(map_missing_row("category", id))?;
        Ok(category)
    }

    async fn delete_category(&self, id: Uuid) -> Result<(), Error> {
        let deleted = self
            .repo
            .delete_category(id)
            .await
            .map_err(map_repository_error)?;
        if !deleted {
            return Err(Error::not_found(format!("category {id} not found")));
        }
        info!(category_id = %id, "category deleted with its clothing items");
        Ok(())
    }

    async fn create_item(&self, input: ClothingItemInput) -> Result<ClothingItem, Error> {
        let now = self.now();
        let item = Self::build_item(Uuid::new_v4(), input, now, now)?;
        self.repo
            .insert_item(&item)
            .await
            .map_err(map_repository_error)?;
        info!(item_id = %item.id(), slug = item.slug(), "clothing item created");
        Ok(item)
    }

    async fn update_item(
        &self,
        id: Uuid,
        input: ClothingItemInput,
    ) -> Result<ClothingItem, Error> {
        let existing = self.require_item(id).await?;
        let input = ClothingItemInput {
            slug: input.slug.or_else(|| Some(existing.slug().to_owned())),
            ..input
        };
        let item = Self::build_item(id, input, existing.created_at(), self.now())?;
        self.repo
            .update_item(&item)
            .await
            .map_err(map_missing_row("clothing item", id))?;
        debug!(item_id = %id, "clothing item updated");
        Ok(item)
    }

    async fn delete_item(&self, id: Uuid) -> Result<(), Error> {
        let deleted = self.repo.delete_item(id).await.map_err(map_repository_error)?;
        if !deleted {
            return Err(Error::not_found(format!("clothing item {id} not found")));
        }
        info!(item_id = %id, "clothing item deleted");
        Ok(())
    }

    async fn attach_size(
        &self,
        item_id: Uuid,
        size_id: Uuid,
        available: bool,
    ) -> Result<ClothingItemSize, Error> {
        self.require_pair_parents(item_id, size_id).await?;
        let link = ClothingItemSize::new(Uuid::new_v4(), item_id, size_id, available);
        self.repo
            .insert_item_size(&link)
            .await
            .map_err(map_repository_error)?;
        Ok(link)
    }

    async fn set_size_availability(
        &self,
        item_id: Uuid,
        size_id: Uuid,
        available: bool,
    ) -> Result<(ClothingItemSize, bool), Error> {
        let existing = self
            .repo
            .find_item_size(item_id, size_id)
            .await
            .map_err(map_repository_error)?;
        match existing {
            Some(link) => {
                self.repo
                    .set_item_size_availability(item_id, size_id, available)
                    .await
                    .map_err(map_missing_row("clothing item size", link.id))?;
                Ok((ClothingItemSize { available, ..link }, false))
            }
            None => {
                let link = self.attach_size(item_id, size_id, available).await?;
                Ok((link, true))
            }
        }
    }

    async fn detach_size(&self, item_id: Uuid, size_id: Uuid) -> Result<(), Error> {
        let deleted = self
            .repo
            .delete_item_size(item_id, size_id)
            .await
            .map_err(map_repository_error)?;
        if !deleted {
            return Err(Error::not_found(format!(
                "clothing item {item_id} is not offered in size {size_id}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl<R> CatalogueQuery for CatalogueService<R>
where
    R: CatalogueRepository,
{
    async fn list_sizes(&self) -> Result<Vec<Size>, Error> {
        self.repo.list_sizes().await.map_err(map_repository_error)
    }

    async fn get_size(&self, id: Uuid) -> Result<Size, Error> {
        self.require_size(id).await
    }

    async fn list_items_in_size(&self, size_id: Uuid) -> Result<Vec<ClothingItem>, Error> {
        self.require_size(size_id).await?;
        self.repo
            .list_items_in_size(size_id)
            .await
            .map_err(map_repository_error)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, Error> {
        self.repo.list_categories().await.map_err(map_repository_error)
    }

    async fn get_category(&self, id: Uuid) -> Result<Category, Error> {
        self.require_category(id).await
    }

    async fn list_category_items(&self, category_id: Uuid) -> Result<Vec<ClothingItem>, Error> {
        self.require_category(category_id).await?;
        self.repo
            .list_items(ClothingItemFilter {
                category_id: Some(category_id),
                available: None,
            })
            .await
            .map_err(map_repository_error)
    }

    async fn list_items(&self, filter: ClothingItemFilter) -> Result<Vec<ClothingItem>, Error> {
        self.repo.list_items(filter).await.map_err(map_repository_error)
    }

    async fn get_item(&self, id: Uuid) -> Result<ClothingItem, Error> {
        self.require_item(id).await
    }

    async fn get_item_by_slug(&self, slug: &str) -> Result<ClothingItem, Error> {
        self.repo
            .find_item_by_slug(slug)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("clothing item '{slug}' not found")))
    }

    async fn list_item_sizes(&self, item_id: Uuid) -> Result<Vec<ItemSizeAvailability>, Error> {
        self.require_item(item_id).await?;
        self.repo
            .list_item_sizes(item_id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "catalogue_service_tests.rs"]
mod tests;
