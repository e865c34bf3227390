//! Mutex-guarded catalogue store used when no database is configured.
//!
//! Mirrors the PostgreSQL schema's integrity rules: the same unique and
//! foreign-key constraint names are reported, and deletes cascade the way
//! `ON DELETE CASCADE` does.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{CatalogueRepository, CatalogueRepositoryError, ClothingItemFilter};
use crate::domain::{Category, ClothingItem, ClothingItemSize, ItemSizeAvailability, Size};

const SIZES_NAME_KEY: &str = "sizes_name_key";
const CATEGORIES_NAME_KEY: &str = "categories_name_key";
const CATEGORIES_SLUG_KEY: &str = "categories_slug_key";
const ITEMS_SLUG_KEY: &str = "clothing_items_slug_key";
const ITEMS_CATEGORY_FKEY: &str = "clothing_items_category_id_fkey";
const ITEM_SIZES_PAIR_KEY: &str = "clothing_item_sizes_item_size_key";
const ITEM_SIZES_ITEM_FKEY: &str = "clothing_item_sizes_clothing_item_id_fkey";
const ITEM_SIZES_SIZE_FKEY: &str = "clothing_item_sizes_size_id_fkey";

#[derive(Debug, Default)]
struct CatalogueState {
    sizes: HashMap<Uuid, Size>,
    categories: HashMap<Uuid, Category>,
    items: HashMap<Uuid, ClothingItem>,
    item_sizes: HashMap<Uuid, ClothingItemSize>,
}

impl CatalogueState {
    fn ensure_size_name_free(&self, size: &Size) -> Result<(), CatalogueRepositoryError> {
        let taken = self
            .sizes
            .values()
            .any(|other| other.id() != size.id() && other.name() == size.name());
        reject_if(taken, SIZES_NAME_KEY)
    }

    fn ensure_category_keys_free(&self, category: &Category) -> Result<(), CatalogueRepositoryError> {
        let others = || {
            self.categories
                .values()
                .filter(|other| other.id() != category.id())
        };
        reject_if(
            others().any(|other| other.name() == category.name()),
            CATEGORIES_NAME_KEY,
        )?;
        reject_if(
            others().any(|other| other.slug() == category.slug()),
            CATEGORIES_SLUG_KEY,
        )
    }

    fn ensure_item_writable(&self, item: &ClothingItem) -> Result<(), CatalogueRepositoryError> {
        let slug_taken = self
            .items
            .values()
            .any(|other| other.id() != item.id() && other.slug() == item.slug());
        reject_if(slug_taken, ITEMS_SLUG_KEY)?;
        if self.categories.contains_key(&item.category_id()) {
            Ok(())
        } else {
            Err(CatalogueRepositoryError::missing_reference(ITEMS_CATEGORY_FKEY))
        }
    }

    fn find_link(&self, item_id: Uuid, size_id: Uuid) -> Option<&ClothingItemSize> {
        self.item_sizes
            .values()
            .find(|link| link.clothing_item_id == item_id && link.size_id == size_id)
    }

    fn remove_item_cascade(&mut self, id: Uuid) -> bool {
        let removed = self.items.remove(&id).is_some();
        if removed {
            self.item_sizes.retain(|_, link| link.clothing_item_id != id);
        }
        removed
    }
}

fn reject_if(taken: bool, constraint: &str) -> Result<(), CatalogueRepositoryError> {
    if taken {
        Err(CatalogueRepositoryError::unique_violation(constraint))
    } else {
        Ok(())
    }
}

fn items_by_name<'a>(items: impl Iterator<Item = &'a ClothingItem>) -> Vec<ClothingItem> {
    let mut items: Vec<ClothingItem> = items.cloned().collect();
    items.sort_by(|a, b| a.name().cmp(b.name()).then(a.id().cmp(&b.id())));
    items
}

/// In-process [`CatalogueRepository`].
///
/// All four collections sit behind one mutex so every operation, cascades
/// included, is atomic.
///
/// ```
/// use reverence::outbound::memory::InMemoryCatalogueRepository;
///
/// let repo = InMemoryCatalogueRepository::new();
/// # let _ = repo;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCatalogueRepository {
    state: Mutex<CatalogueState>,
}

impl InMemoryCatalogueRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, CatalogueState>, CatalogueRepositoryError> {
        self.state
            .lock()
            .map_err(|_| CatalogueRepositoryError::connection("in-memory catalogue lock poisoned"))
    }
}

#[async_trait]
impl CatalogueRepository for InMemoryCatalogueRepository {
    async fn list_sizes(&self) -> Result<Vec<Size>, CatalogueRepositoryError> {
        let state = self.lock()?;
        let mut sizes: Vec<Size> = state.sizes.values().cloned().collect();
        sizes.sort_by(|a, b| a.name().cmp(b.name()).then(a.id().cmp(&b.id())));
        Ok(sizes)
    }

    async fn find_size(&self, id: Uuid) -> Result<Option<Size>, CatalogueRepositoryError> {
        Ok(self.lock()?.sizes.get(&id).cloned())
    }

    async fn insert_size(&self, size: &Size) -> Result<(), CatalogueRepositoryError> {
        let mut state = self.lock()?;
        if state.sizes.contains_key(&size.id()) {
            return Err(CatalogueRepositoryError::unique_violation("sizes_pkey"));
        }
        state.ensure_size_name_free(size)?;
        state.sizes.insert(size.id(), size.clone());
        Ok(())
    }

    async fn update_size(&self, size: &Size) -> Result<(), CatalogueRepositoryError> {
        let mut state = self.lock()?;
        if !state.sizes.contains_key(&size.id()) {
            return Err(CatalogueRepositoryError::not_found());
        }
        state.ensure_size_name_free(size)?;
        state.sizes.insert(size.id(), size.clone());
        Ok(())
    }

    async fn delete_size(&self, id: Uuid) -> Result<bool, CatalogueRepositoryError> {
        let mut state = self.lock()?;
        let removed = state.sizes.remove(&id).is_some();
        if removed {
            state.item_sizes.retain(|_, link| link.size_id != id);
        }
        Ok(removed)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CatalogueRepositoryError> {
        let state = self.lock()?;
        let mut categories: Vec<Category> = state.categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name().cmp(b.name()).then(a.id().cmp(&b.id())));
        Ok(categories)
    }

    async fn find_category(&self, id: Uuid) -> Result<Option<Category>, CatalogueRepositoryError> {
        Ok(self.lock()?.categories.get(&id).cloned())
    }

    async fn insert_category(&self, category: &Category) -> Result<(), CatalogueRepositoryError> {
        let mut state = self.lock()?;
        if state.categories.contains_key(&category.id()) {
            return Err(CatalogueRepositoryError::unique_violation("categories_pkey"));
        }
        state.ensure_category_keys_free(category)?;
        state.categories.insert(category.id(), category.clone());
        Ok(())
    }

    async fn update_category(&self, category: &Category) -> Result<(), CatalogueRepositoryError> {
        let mut state = self.lock()?;
        if !state.categories.contains_key(&category.id()) {
            return Err(CatalogueRepositoryError::not_found());
        }
        state.ensure_category_keys_free(category)?;
        state.categories.insert(category.id(), category.clone());
        Ok(())
    }

    async fn delete_category(&self, id: Uuid) -> Result<bool, CatalogueRepositoryError> {
        let mut state = self.lock()?;
        if state.categories.remove(&id).is_none() {
            return Ok(false);
        }
        let doomed: Vec<Uuid> = state
            .items
            .values()
            .filter(|item| item.category_id() == id)
            .map(ClothingItem::id)
            .collect();
        for item_id in doomed {
            state.remove_item_cascade(item_id);
        }
        Ok(true)
    }

    async fn list_items(
        &self,
        filter: ClothingItemFilter,
    ) -> Result<Vec<ClothingItem>, CatalogueRepositoryError> {
        let state = self.lock()?;
        Ok(items_by_name(
            state.items.values().filter(|item| filter.matches(item)),
        ))
    }

    async fn find_item(&self, id: Uuid) -> Result<Option<ClothingItem>, CatalogueRepositoryError> {
        Ok(self.lock()?.items.get(&id).cloned())
    }

    async fn find_item_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<ClothingItem>, CatalogueRepositoryError> {
        let state = self.lock()?;
        Ok(state.items.values().find(|item| item.slug() == slug).cloned())
    }

    async fn insert_item(&self, item: &ClothingItem) -> Result<(), CatalogueRepositoryError> {
        let mut state = self.lock()?;
        if state.items.contains_key(&item.id()) {
            return Err(CatalogueRepositoryError::unique_violation("clothing_items_pkey"));
        }
        state.ensure_item_writable(item)?;
        state.items.insert(item.id(), item.clone());
        Ok(())
    }

    async fn update_item(&self, item: &ClothingItem) -> Result<(), CatalogueRepositoryError> {
        let mut state = self.lock()?;
        if !state.items.contains_key(&item.id()) {
            return Err(CatalogueRepositoryError::not_found());
        }
        state.ensure_item_writable(item)?;
        state.items.insert(item.id(), item.clone());
        Ok(())
    }

    async fn delete_item(&self, id: Uuid) -> Result<bool, CatalogueRepositoryError> {
        Ok(self.lock()?.remove_item_cascade(id))
    }

    async fn list_item_sizes(
        &self,
        item_id: Uuid,
    ) -> Result<Vec<ItemSizeAvailability>, CatalogueRepositoryError> {
        let state = self.lock()?;
        let mut rows: Vec<ItemSizeAvailability> = state
            .item_sizes
            .values()
            .filter(|link| link.clothing_item_id == item_id)
            .filter_map(|link| {
                state.sizes.get(&link.size_id).map(|size| ItemSizeAvailability {
                    link: *link,
                    size: size.clone(),
                })
            })
            .collect();
        rows.sort_by(|a, b| {
            a.size
                .name()
                .cmp(b.size.name())
                .then(a.size.id().cmp(&b.size.id()))
        });
        Ok(rows)
    }

    async fn list_items_in_size(
        &self,
        size_id: Uuid,
    ) -> Result<Vec<ClothingItem>, CatalogueRepositoryError> {
        let state = self.lock()?;
        Ok(items_by_name(
            state
                .item_sizes
                .values()
                .filter(|link| link.size_id == size_id)
                .filter_map(|link| state.items.get(&link.clothing_item_id)),
        ))
    }

    async fn find_item_size(
        &self,
        item_id: Uuid,
        size_id: Uuid,
    ) -> Result<Option<ClothingItemSize>, CatalogueRepositoryError> {
        Ok(self.lock()?.find_link(item_id, size_id).copied())
    }

    async fn insert_item_size(
        &self,
        link: &ClothingItemSize,
    ) -> Result<(), CatalogueRepositoryError> {
        let mut state = self.lock()?;
        if !state.items.contains_key(&link.clothing_item_id) {
            return Err(CatalogueRepositoryError::missing_reference(ITEM_SIZES_ITEM_FKEY));
        }
        if !state.sizes.contains_key(&link.size_id) {
            return Err(CatalogueRepositoryError::missing_reference(ITEM_SIZES_SIZE_FKEY));
        }
        reject_if(
            state.find_link(link.clothing_item_id, link.size_id).is_some(),
            ITEM_SIZES_PAIR_KEY,
        )?;
        state.item_sizes.insert(link.id, *link);
        Ok(())
    }

    async fn set_item_size_availability(
        &self,
        item_id: Uuid,
        size_id: Uuid,
        available: bool,
    ) -> Result<(), CatalogueRepositoryError> {
        let mut state = self.lock()?;
        let link = state
            .item_sizes
            .values_mut()
            .find(|link| link.clothing_item_id == item_id && link.size_id == size_id)
            .ok_or_else(CatalogueRepositoryError::not_found)?;
        link.available = available;
        Ok(())
    }

    async fn delete_item_size(
        &self,
        item_id: Uuid,
        size_id: Uuid,
    ) -> Result<bool, CatalogueRepositoryError> {
        let mut state = self.lock()?;
        let before = state.item_sizes.len();
        state
            .item_sizes
            .retain(|_, link| !(link.clothing_item_id == item_id && link.size_id == size_id));
        Ok(state.item_sizes.len() != before)
    }
}

#[cfg(test)]
#[path = "in_memory_catalogue_repository_tests.rs"]
mod tests;
