//! Clothing item aggregate.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::validation::{validate_name, validate_slug};
use super::{CatalogueValidationError, ImagePath, Money, Percentage, effective_price};

/// Maximum length of a clothing item name.
pub const CLOTHING_ITEM_NAME_MAX_LEN: usize = 255;

/// Input payload for [`ClothingItem::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClothingItemDraft {
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

/// Catalogue product.
///
/// ## Invariants
/// - `slug` is unique across items and `category_id` references an existing
///   category; both are enforced by the repository.
/// - `price >= 0` and `0 <= discount <= 100`, each with two decimal places.
/// - `created_at <= updated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    id: Uuid,
    name: String,
    slug: String,
    available: bool,
    category_id: Uuid,
    image: Option<ImagePath>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    price: Money,
    discount: Percentage,
    description: String,
}

impl ClothingItem {
    /// Validate and construct a clothing item.
    pub fn new(draft: ClothingItemDraft) -> Result<Self, CatalogueValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    pub fn slug(&self) -> &str {
        self.slug.as_str()
    }
    pub fn available(&self) -> bool {
        self.available
    }
    pub fn category_id(&self) -> Uuid {
        self.category_id
    }
    pub fn image(&self) -> Option<&ImagePath> {
        self.image.as_ref()
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
    pub fn price(&self) -> Money {
        self.price
    }
    pub fn discount(&self) -> Percentage {
        self.discount
    }
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Price after the item's discount. Never persisted.
    pub fn effective_price(&self) -> Money {
        effective_price(self.price, self.discount)
    }

    /// Convert back into a draft, for example to apply an update.
    pub fn into_draft(self) -> ClothingItemDraft {
        ClothingItemDraft {
            id: self.id,
            name: self.name,
            slug: self.slug,
            available: self.available,
            category_id: self.category_id,
            image: self.image.map(|path| path.to_string()),
            created_at: self.created_at,
            updated_at: self.updated_at,
            price: self.price.amount(),
            discount: self.discount.value(),
            description: self.description,
        }
    }
}

impl std::fmt::Display for ClothingItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<ClothingItemDraft> for ClothingItem {
    type Error = CatalogueValidationError;

    fn try_from(draft: ClothingItemDraft) -> Result<Self, Self::Error> {
        let name = validate_name(&draft.name, "clothing_item.name", CLOTHING_ITEM_NAME_MAX_LEN)?;
        let slug = validate_slug(&draft.slug, "clothing_item.slug")?;
        let image = draft.image.map(ImagePath::new).transpose()?;
        let price = Money::try_new(draft.price, "clothing_item.price")?;
        let discount = Percentage::try_new(draft.discount, "clothing_item.discount")?;
        let updated_at = draft.updated_at.max(draft.created_at);

        Ok(Self {
            id: draft.id,
            name,
            slug,
            available: draft.available,
            category_id: draft.category_id,
            image,
            created_at: draft.created_at,
            updated_at,
            price,
            discount,
            description: draft.description,
        })
    }
}
