//! Tests for the catalogue service: validation, timestamps, and error
//! mapping from repository failures.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};
use rust_decimal_macros::dec;
use serde_json::json;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockCatalogueRepository;

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn service(repo: MockCatalogueRepository, now: DateTime<Utc>) -> CatalogueService<MockCatalogueRepository> {
    CatalogueService::new(Arc::new(repo), Arc::new(FixedClock(now)))
}

#[fixture]
fn category_id() -> Uuid {
    Uuid::new_v4()
}

#[fixture]
fn item_input(category_id: Uuid) -> ClothingItemInput {
    ClothingItemInput {
        name: "Linen Shirt".to_owned(),
        slug: None,
        available: true,
        category_id,
        image: None,
        price: dec!(100.00),
        discount: dec!(20.00),
        description: "Breathable summer shirt".to_owned(),
    }
}

fn stored_item(input: &ClothingItemInput, created_at: DateTime<Utc>) -> ClothingItem {
    ClothingItem::new(ClothingItemDraft {
        id: Uuid::new_v4(),
        name: input.name.clone(),
        slug: "original-slug".to_owned(),
        available: input.available,
        category_id: input.category_id,
        image: None,
        created_at,
        updated_at: created_at,
        price: input.price,
        discount: input.discount,
        description: input.description.clone(),
    })
    .expect("valid stored item")
}

#[rstest]
#[tokio::test]
async fn create_item_stamps_clock_and_derives_slug(item_input: ClothingItemInput) {
    let mut repo = MockCatalogueRepository::new();
    repo.expect_insert_item()
        .withf(|item| item.slug() == "linen-shirt")
        .times(1)
        .returning(|_| Ok(()));

    let item = service(repo, at(9))
        .create_item(item_input)
        .await
        .expect("item created");

    assert_eq!(item.created_at(), at(9));
    assert_eq!(item.updated_at(), at(9));
    assert_eq!(item.effective_price().amount(), dec!(80.00));
}

#[rstest]
#[tokio::test]
async fn timestamps_are_truncated_to_microseconds(item_input: ClothingItemInput) {
    let precise = at(9) + chrono::Duration::nanoseconds(123_456_789);
    let mut repo = MockCatalogueRepository::new();
    repo.expect_insert_item().times(1).returning(|_| Ok(()));

    let item = service(repo, precise)
        .create_item(item_input)
        .await
        .expect("item created");

    let expected = at(9) + chrono::Duration::microseconds(123_456);
    assert_eq!(item.created_at(), expected);
    assert_eq!(item.updated_at(), expected);
}

#[rstest]
#[tokio::test]
async fn update_item_keeps_creation_time_and_slug(item_input: ClothingItemInput) {
    let existing = stored_item(&item_input, at(8));
    let id = existing.id();
    let mut repo = MockCatalogueRepository::new();
    repo.expect_find_item()
        .returning(move |_| Ok(Some(existing.clone())));
    repo.expect_update_item().times(1).returning(|_| Ok(()));

    let renamed = ClothingItemInput {
        name: "Linen Shirt II".to_owned(),
        ..item_input
    };
    let item = service(repo, at(12))
        .update_item(id, renamed)
        .await
        .expect("item updated");

    assert_eq!(item.created_at(), at(8));
    assert_eq!(item.updated_at(), at(12));
    assert_eq!(item.slug(), "original-slug");
    assert_eq!(item.name(), "Linen Shirt II");
}

#[rstest]
#[tokio::test]
async fn update_of_missing_item_is_not_found(item_input: ClothingItemInput) {
    let mut repo = MockCatalogueRepository::new();
    repo.expect_find_item().returning(|_| Ok(None));
    repo.expect_update_item().never();

    let err = service(repo, at(9))
        .update_item(Uuid::new_v4(), item_input)
        .await
        .expect_err("missing item");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[case::unique(
    CatalogueRepositoryError::unique_violation("categories_name_key"),
    ErrorCode::Conflict
)]
#[case::reference(
    CatalogueRepositoryError::missing_reference("clothing_items_category_id_fkey"),
    ErrorCode::InvalidRequest
)]
#[case::connection(
    CatalogueRepositoryError::connection("pool timed out"),
    ErrorCode::ServiceUnavailable
)]
#[case::query(
    CatalogueRepositoryError::query("syntax error"),
    ErrorCode::InternalError
)]
#[tokio::test]
async fn repository_errors_map_to_domain_codes(
    #[case] failure: CatalogueRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockCatalogueRepository::new();
    repo.expect_insert_category()
        .times(1)
        .returning(move |_| Err(failure.clone()));

    let err = service(repo, at(9))
        .create_category(CategoryInput {
            name: "Knitwear".to_owned(),
            slug: None,
        })
        .await
        .expect_err("repository failure");
    assert_eq!(err.code(), expected);
}

#[rstest]
#[tokio::test]
async fn duplicate_category_reports_constraint() {
    let mut repo = MockCatalogueRepository::new();
    repo.expect_insert_category()
        .returning(|_| Err(CatalogueRepositoryError::unique_violation("categories_name_key")));

    let err = service(repo, at(9))
        .create_category(CategoryInput {
            name: "Knitwear".to_owned(),
            slug: Some("knitwear".to_owned()),
        })
        .await
        .expect_err("duplicate");
    assert_eq!(err.message(), "a category with this name already exists");
    assert_eq!(
        err.details(),
        Some(&json!({ "constraint": "categories_name_key" }))
    );
}

#[rstest]
#[tokio::test]
async fn invalid_size_name_reports_field() {
    let mut repo = MockCatalogueRepository::new();
    repo.expect_insert_size().never();

    let err = service(repo, at(9))
        .create_size(SizeInput {
            name: "   ".to_owned(),
        })
        .await
        .expect_err("blank name");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        err.details(),
        Some(&json!({ "field": "size.name", "code": "empty" }))
    );
}

#[rstest]
#[tokio::test]
async fn underivable_slug_is_rejected() {
    let mut repo = MockCatalogueRepository::new();
    repo.expect_insert_category().never();

    let err = service(repo, at(9))
        .create_category(CategoryInput {
            name: "???".to_owned(),
            slug: None,
        })
        .await
        .expect_err("no slug");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn deleting_missing_category_is_not_found() {
    let mut repo = MockCatalogueRepository::new();
    repo.expect_delete_category().returning(|_| Ok(false));

    let err = service(repo, at(9))
        .delete_category(Uuid::new_v4())
        .await
        .expect_err("missing");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn items_of_unknown_category_are_not_listed() {
    let mut repo = MockCatalogueRepository::new();
    repo.expect_find_category().returning(|_| Ok(None));
    repo.expect_list_items().never();

    let err = service(repo, at(9))
        .list_category_items(Uuid::new_v4())
        .await
        .expect_err("unknown category");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn set_size_availability_updates_existing_pair() {
    let item_id = Uuid::new_v4();
    let size_id = Uuid::new_v4();
    let link = ClothingItemSize::new(Uuid::new_v4(), item_id, size_id, true);
    let mut repo = MockCatalogueRepository::new();
    repo.expect_find_item_size()
        .returning(move |_, _| Ok(Some(link)));
    repo.expect_set_item_size_availability()
        .withf(|_, _, available| !*available)
        .times(1)
        .returning(|_, _, _| Ok(()));
    repo.expect_insert_item_size().never();

    let (updated, created) = service(repo, at(9))
        .set_size_availability(item_id, size_id, false)
        .await
        .expect("availability updated");
    assert!(!created);
    assert_eq!(updated.id, link.id);
    assert!(!updated.available);
}

#[rstest]
#[tokio::test]
async fn set_size_availability_attaches_missing_pair(item_input: ClothingItemInput) {
    let item = stored_item(&item_input, at(8));
    let item_id = item.id();
    let size = Size::new(SizeDraft {
        id: Uuid::new_v4(),
        name: "M".to_owned(),
    })
    .expect("valid size");
    let size_id = size.id();
    let mut repo = MockCatalogueRepository::new();
    repo.expect_find_item_size().returning(|_, _| Ok(None));
    repo.expect_find_item()
        .returning(move |_| Ok(Some(item.clone())));
    repo.expect_find_size()
        .returning(move |_| Ok(Some(size.clone())));
    repo.expect_insert_item_size()
        .withf(move |link| link.clothing_item_id == item_id && link.size_id == size_id)
        .times(1)
        .returning(|_| Ok(()));

    let (link, created) = service(repo, at(9))
        .set_size_availability(item_id, size_id, true)
        .await
        .expect("pair attached");
    assert!(created);
    assert!(link.available);
}

#[rstest]
#[tokio::test]
async fn detaching_unknown_pair_is_not_found() {
    let mut repo = MockCatalogueRepository::new();
    repo.expect_delete_item_size().returning(|_, _| Ok(false));

    let err = service(repo, at(9))
        .detach_size(Uuid::new_v4(), Uuid::new_v4())
        .await
        .expect_err("not attached");
    assert_eq!(err.code(), ErrorCode::NotFound);
}
