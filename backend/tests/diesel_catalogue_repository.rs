//! Integration tests for `DieselCatalogueRepository` against embedded
//! PostgreSQL.
//!
//! Each test gets its own migrated database on the shared cluster. Set
//! `SKIP_TEST_CLUSTER=1` to turn cluster bootstrap failures into skips.

use chrono::{TimeZone, Utc};
use reverence::domain::ports::{CatalogueRepository, CatalogueRepositoryError, ClothingItemFilter};
use reverence::domain::{
    Category, CategoryDraft, ClothingItem, ClothingItemDraft, ClothingItemSize, Size, SizeDraft,
};
use reverence::outbound::persistence::DieselCatalogueRepository;
use rstest::{fixture, rstest};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

mod support;

use support::{CatalogueDatabase, catalogue_database};

fn size(name: &str) -> Size {
    Size::new(SizeDraft {
        id: Uuid::new_v4(),
        name: name.to_owned(),
    })
    .expect("valid size")
}

fn category(name: &str, slug: &str) -> Category {
    Category::new(CategoryDraft {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        slug: slug.to_owned(),
    })
    .expect("valid category")
}

fn item(
    name: &str,
    slug: &str,
    category_id: Uuid,
    price: Decimal,
    discount: Decimal,
) -> ClothingItem {
    let at = Utc
        .with_ymd_and_hms(2024, 6, 1, 8, 0, 0)
        .single()
        .expect("valid timestamp");
    ClothingItem::new(ClothingItemDraft {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        slug: slug.to_owned(),
        available: true,
        category_id,
        image: Some("products/2024/06/01/linen.jpg".to_owned()),
        created_at: at,
        updated_at: at,
        price,
        discount,
        description: "Breathable summer shirt".to_owned(),
    })
    .expect("valid item")
}

#[fixture]
fn database() -> Option<CatalogueDatabase> {
    catalogue_database()
}

fn with_repository<F, Fut>(database: Option<CatalogueDatabase>, test: F)
where
    F: FnOnce(DieselCatalogueRepository) -> Fut,
    Fut: std::future::Future<Output = ()>,
{
    let Some(CatalogueDatabase {
        runtime,
        pool,
        database: _database,
    }) = database
    else {
        eprintln!("SKIP-TEST-CLUSTER: catalogue repository test skipped");
        return;
    };
    runtime.block_on(test(DieselCatalogueRepository::new(pool)));
}

#[rstest]
fn decimals_and_timestamps_round_trip(database: Option<CatalogueDatabase>) {
    with_repository(database, |repo| async move {
        let shirts = category("Shirts", "shirts");
        repo.insert_category(&shirts).await.expect("insert category");
        let linen = item("Linen Shirt", "linen-shirt", shirts.id(), dec!(100.00), dec!(20.00));
        repo.insert_item(&linen).await.expect("insert item");

        let stored = repo
            .find_item_by_slug("linen-shirt")
            .await
            .expect("query")
            .expect("item present");

        assert_eq!(stored, linen);
        assert_eq!(stored.effective_price().amount(), dec!(80.00));
    });
}

#[rstest]
fn unique_constraints_are_reported_by_name(database: Option<CatalogueDatabase>) {
    with_repository(database, |repo| async move {
        repo.insert_size(&size("M")).await.expect("first size");
        let duplicate = repo.insert_size(&size("M")).await;
        assert_eq!(
            duplicate,
            Err(CatalogueRepositoryError::unique_violation("sizes_name_key"))
        );

        repo.insert_category(&category("Shirts", "shirts"))
            .await
            .expect("first category");
        let duplicate = repo.insert_category(&category("Shirts", "shirts-2")).await;
        assert_eq!(
            duplicate,
            Err(CatalogueRepositoryError::unique_violation(
                "categories_name_key"
            ))
        );
    });
}

#[rstest]
fn item_size_pairs_are_unique(database: Option<CatalogueDatabase>) {
    with_repository(database, |repo| async move {
        let shirts = category("Shirts", "shirts");
        repo.insert_category(&shirts).await.expect("category");
        let linen = item("Linen Shirt", "linen-shirt", shirts.id(), dec!(40), Decimal::ZERO);
        repo.insert_item(&linen).await.expect("item");
        let medium = size("M");
        repo.insert_size(&medium).await.expect("size");

        let first = ClothingItemSize::new(Uuid::new_v4(), linen.id(), medium.id(), true);
        repo.insert_item_size(&first).await.expect("first pair");
        let second = ClothingItemSize::new(Uuid::new_v4(), linen.id(), medium.id(), false);

        assert_eq!(
            repo.insert_item_size(&second).await,
            Err(CatalogueRepositoryError::unique_violation(
                "clothing_item_sizes_item_size_key"
            ))
        );
    });
}

#[rstest]
fn missing_category_is_a_missing_reference(database: Option<CatalogueDatabase>) {
    with_repository(database, |repo| async move {
        let orphan = item("Orphan", "orphan", Uuid::new_v4(), dec!(10), Decimal::ZERO);

        assert_eq!(
            repo.insert_item(&orphan).await,
            Err(CatalogueRepositoryError::missing_reference(
                "clothing_items_category_id_fkey"
            ))
        );
    });
}

#[rstest]
fn deletes_cascade_through_the_schema(database: Option<CatalogueDatabase>) {
    with_repository(database, |repo| async move {
        let shirts = category("Shirts", "shirts");
        repo.insert_category(&shirts).await.expect("category");
        let linen = item("Linen Shirt", "linen-shirt", shirts.id(), dec!(40), Decimal::ZERO);
        repo.insert_item(&linen).await.expect("item");
        let medium = size("M");
        let large = size("L");
        repo.insert_size(&medium).await.expect("size M");
        repo.insert_size(&large).await.expect("size L");
        for size in [&medium, &large] {
            let link = ClothingItemSize::new(Uuid::new_v4(), linen.id(), size.id(), true);
            repo.insert_item_size(&link).await.expect("pair");
        }

        assert!(repo.delete_size(medium.id()).await.expect("delete size"));
        let remaining = repo.list_item_sizes(linen.id()).await.expect("pairs");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining.first().map(|row| row.size.name()), Some("L"));

        assert!(repo.delete_category(shirts.id()).await.expect("delete category"));
        assert!(repo.find_item(linen.id()).await.expect("lookup").is_none());
        assert!(repo.list_items_in_size(large.id()).await.expect("items").is_empty());
        assert!(!repo.delete_category(shirts.id()).await.expect("second delete"));
    });
}

#[rstest]
fn listings_filter_and_order_by_name(database: Option<CatalogueDatabase>) {
    with_repository(database, |repo| async move {
        let shirts = category("Shirts", "shirts");
        let coats = category("Coats", "coats");
        repo.insert_category(&shirts).await.expect("shirts");
        repo.insert_category(&coats).await.expect("coats");
        for (name, slug, category_id) in [
            ("Oxford Shirt", "oxford-shirt", shirts.id()),
            ("Linen Shirt", "linen-shirt", shirts.id()),
            ("Wool Coat", "wool-coat", coats.id()),
        ] {
            repo.insert_item(&item(name, slug, category_id, dec!(50), Decimal::ZERO))
                .await
                .expect("item");
        }

        let names: Vec<String> = repo
            .list_items(ClothingItemFilter {
                category_id: Some(shirts.id()),
                available: None,
            })
            .await
            .expect("list")
            .into_iter()
            .map(|item| item.name().to_owned())
            .collect();
        assert_eq!(names, ["Linen Shirt", "Oxford Shirt"]);

        let categories: Vec<String> = repo
            .list_categories()
            .await
            .expect("categories")
            .into_iter()
            .map(|category| category.name().to_owned())
            .collect();
        assert_eq!(categories, ["Coats", "Shirts"]);
    });
}

#[rstest]
fn availability_updates_and_missing_rows(database: Option<CatalogueDatabase>) {
    with_repository(database, |repo| async move {
        let shirts = category("Shirts", "shirts");
        repo.insert_category(&shirts).await.expect("category");
        let linen = item("Linen Shirt", "linen-shirt", shirts.id(), dec!(40), Decimal::ZERO);
        repo.insert_item(&linen).await.expect("item");
        let medium = size("M");
        repo.insert_size(&medium).await.expect("size");
        let link = ClothingItemSize::new(Uuid::new_v4(), linen.id(), medium.id(), true);
        repo.insert_item_size(&link).await.expect("pair");

        repo.set_item_size_availability(linen.id(), medium.id(), false)
            .await
            .expect("toggle");
        let stored = repo
            .find_item_size(linen.id(), medium.id())
            .await
            .expect("lookup")
            .expect("pair present");
        assert!(!stored.available);

        assert_eq!(
            repo.update_size(&size("XL")).await,
            Err(CatalogueRepositoryError::not_found())
        );
        assert!(!repo.delete_item_size(linen.id(), Uuid::new_v4()).await.expect("delete"));
    });
}

#[rstest]
fn deleting_an_item_removes_its_sizes(database: Option<CatalogueDatabase>) {
    with_repository(database, |repo| async move {
        let shirts = category("Shirts", "shirts");
        repo.insert_category(&shirts).await.expect("category");
        let tee = item("Cotton Tee", "cotton-tee", shirts.id(), dec!(25), Decimal::ZERO);
        repo.insert_item(&tee).await.expect("item");
        let medium = size("M");
        repo.insert_size(&medium).await.expect("size");
        let link = ClothingItemSize::new(Uuid::new_v4(), tee.id(), medium.id(), true);
        repo.insert_item_size(&link).await.expect("pair");

        assert!(repo.delete_item(tee.id()).await.expect("delete item"));

        assert!(
            repo.find_item_size(tee.id(), medium.id())
                .await
                .expect("lookup")
                .is_none()
        );
        assert!(repo.list_items_in_size(medium.id()).await.expect("items").is_empty());
        assert!(repo.find_size(medium.id()).await.expect("size lookup").is_some());
    });
}
