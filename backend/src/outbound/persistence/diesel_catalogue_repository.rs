//! PostgreSQL-backed `CatalogueRepository` implementation using Diesel.
//!
//! Cascading deletes are delegated to the `ON DELETE CASCADE` foreign keys,
//! so every mutation here is a single statement. Rows are converted through
//! the validating domain constructors on the way out.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{CatalogueRepository, CatalogueRepositoryError, ClothingItemFilter};
use crate::domain::{Category, ClothingItem, ClothingItemSize, ItemSizeAvailability, Size};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{
    CategoryRow, ClothingItemChangeset, ClothingItemRow, ClothingItemSizeRow, SizeRow,
};
use super::pool::DbPool;
use super::schema::{categories, clothing_item_sizes, clothing_items, sizes};

/// Diesel-backed implementation of the catalogue repository port.
#[derive(Clone)]
pub struct DieselCatalogueRepository {
    pool: DbPool,
}

impl DieselCatalogueRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn convert_one<Row, Entity, E>(row: Row) -> Result<Entity, CatalogueRepositoryError>
where
    Entity: TryFrom<Row, Error = E>,
    E: std::fmt::Display,
{
    Entity::try_from(row).map_err(|err| CatalogueRepositoryError::query(err.to_string()))
}

/// Convert stored rows to domain entities, reporting the first invalid row.
fn convert_rows<Row, Entity, E>(rows: Vec<Row>) -> Result<Vec<Entity>, CatalogueRepositoryError>
where
    Entity: TryFrom<Row, Error = E>,
    E: std::fmt::Display,
{
    rows.into_iter().map(convert_one).collect()
}

fn convert_row<Row, Entity, E>(row: Option<Row>) -> Result<Option<Entity>, CatalogueRepositoryError>
where
    Entity: TryFrom<Row, Error = E>,
    E: std::fmt::Display,
{
    row.map(convert_one).transpose()
}

fn require_affected(rows: usize) -> Result<(), CatalogueRepositoryError> {
    if rows == 0 {
        Err(CatalogueRepositoryError::not_found())
    } else {
        Ok(())
    }
}

#[async_trait]
impl CatalogueRepository for DieselCatalogueRepository {
    async fn list_sizes(&self) -> Result<Vec<Size>, CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<SizeRow> = sizes::table
            .order((sizes::name.asc(), sizes::id.asc()))
            .select(SizeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        convert_rows(rows)
    }

    async fn find_size(&self, id: Uuid) -> Result<Option<Size>, CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = sizes::table
            .find(id)
            .select(SizeRow::as_select())
            .first::<SizeRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        convert_row(row)
    }

    async fn insert_size(&self, size: &Size) -> Result<(), CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(sizes::table)
            .values(SizeRow::from(size))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update_size(&self, size: &Size) -> Result<(), CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let updated = diesel::update(sizes::table.find(size.id()))
            .set(sizes::name.eq(size.name()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        require_affected(updated)
    }

    async fn delete_size(&self, id: Uuid) -> Result<bool, CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(sizes::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CategoryRow> = categories::table
            .order((categories::name.asc(), categories::id.asc()))
            .select(CategoryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        convert_rows(rows)
    }

    async fn find_category(&self, id: Uuid) -> Result<Option<Category>, CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = categories::table
            .find(id)
            .select(CategoryRow::as_select())
            .first::<CategoryRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        convert_row(row)
    }

    async fn insert_category(&self, category: &Category) -> Result<(), CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(categories::table)
            .values(CategoryRow::from(category))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update_category(&self, category: &Category) -> Result<(), CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let updated = diesel::update(categories::table.find(category.id()))
            .set((
                categories::name.eq(category.name()),
                categories::slug.eq(category.slug()),
            ))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        require_affected(updated)
    }

    async fn delete_category(&self, id: Uuid) -> Result<bool, CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(categories::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }

    async fn list_items(
        &self,
        filter: ClothingItemFilter,
    ) -> Result<Vec<ClothingItem>, CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let mut query = clothing_items::table
            .select(ClothingItemRow::as_select())
            .into_boxed();
        if let Some(category_id) = filter.category_id {
            query = query.filter(clothing_items::category_id.eq(category_id));
        }
        if let Some(available) = filter.available {
            query = query.filter(clothing_items::available.eq(available));
        }
        let rows: Vec<ClothingItemRow> = query
            .order((clothing_items::name.asc(), clothing_items::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        convert_rows(rows)
    }

    async fn find_item(&self, id: Uuid) -> Result<Option<ClothingItem>, CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = clothing_items::table
            .find(id)
            .select(ClothingItemRow::as_select())
            .first::<ClothingItemRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        convert_row(row)
    }

    async fn find_item_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<ClothingItem>, CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = clothing_items::table
            .filter(clothing_items::slug.eq(slug))
            .select(ClothingItemRow::as_select())
            .first::<ClothingItemRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        convert_row(row)
    }

    async fn insert_item(&self, item: &ClothingItem) -> Result<(), CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(clothing_items::table)
            .values(ClothingItemRow::from(item))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update_item(&self, item: &ClothingItem) -> Result<(), CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let updated = diesel::update(clothing_items::table.find(item.id()))
            .set(ClothingItemChangeset::from(item))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        require_affected(updated)
    }

    async fn delete_item(&self, id: Uuid) -> Result<bool, CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(clothing_items::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }

    async fn list_item_sizes(
        &self,
        item_id: Uuid,
    ) -> Result<Vec<ItemSizeAvailability>, CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<(ClothingItemSizeRow, SizeRow)> = clothing_item_sizes::table
            .inner_join(sizes::table)
            .filter(clothing_item_sizes::clothing_item_id.eq(item_id))
            .order((sizes::name.asc(), sizes::id.asc()))
            .select((ClothingItemSizeRow::as_select(), SizeRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(|(link, size)| -> Result<ItemSizeAvailability, CatalogueRepositoryError> {
                let size = Size::try_from(size)
                    .map_err(|err| CatalogueRepositoryError::query(err.to_string()))?;
                Ok(ItemSizeAvailability {
                    link: ClothingItemSize::from(link),
                    size,
                })
            })
            .collect()
    }

    async fn list_items_in_size(
        &self,
        size_id: Uuid,
    ) -> Result<Vec<ClothingItem>, CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ClothingItemRow> = clothing_items::table
            .inner_join(clothing_item_sizes::table)
            .filter(clothing_item_sizes::size_id.eq(size_id))
            .order((clothing_items::name.asc(), clothing_items::id.asc()))
            .select(ClothingItemRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        convert_rows(rows)
    }

    async fn find_item_size(
        &self,
        item_id: Uuid,
        size_id: Uuid,
    ) -> Result<Option<ClothingItemSize>, CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = clothing_item_sizes::table
            .filter(
                clothing_item_sizes::clothing_item_id
                    .eq(item_id)
                    .and(clothing_item_sizes::size_id.eq(size_id)),
            )
            .select(ClothingItemSizeRow::as_select())
            .first::<ClothingItemSizeRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(ClothingItemSize::from))
    }

    async fn insert_item_size(
        &self,
        link: &ClothingItemSize,
    ) -> Result<(), CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(clothing_item_sizes::table)
            .values(ClothingItemSizeRow::from(link))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn set_item_size_availability(
        &self,
        item_id: Uuid,
        size_id: Uuid,
        available: bool,
    ) -> Result<(), CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let updated = diesel::update(
            clothing_item_sizes::table.filter(
                clothing_item_sizes::clothing_item_id
                    .eq(item_id)
                    .and(clothing_item_sizes::size_id.eq(size_id)),
            ),
        )
        .set(clothing_item_sizes::available.eq(available))
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        require_affected(updated)
    }

    async fn delete_item_size(
        &self,
        item_id: Uuid,
        size_id: Uuid,
    ) -> Result<bool, CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(
            clothing_item_sizes::table.filter(
                clothing_item_sizes::clothing_item_id
                    .eq(item_id)
                    .and(clothing_item_sizes::size_id.eq(size_id)),
            ),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
