//! Domain primitives, aggregates and services.
//!
//! Purpose: define the catalogue entities (sizes, categories, clothing items
//! and their per-size availability), the pricing rules, and the services
//! that drive them through the ports in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Size, Category, ClothingItem, ClothingItemSize: catalogue entities.
//! - Money, Percentage, `effective_price`: pricing primitives.
//! - CatalogueService: implements the catalogue command and query ports.

pub mod auth;
pub mod catalogue;
pub mod catalogue_service;
pub mod error;
pub mod ports;
pub mod slug;
pub mod trace_id;

pub use self::auth::{AdminAccount, LoginCredentials, LoginValidationError};
pub use self::catalogue::{
    CATEGORY_NAME_MAX_LEN, CLOTHING_ITEM_NAME_MAX_LEN, CatalogueValidationError, Category,
    CategoryDraft, ClothingItem, ClothingItemDraft, ClothingItemSize, IMAGE_PATH_MAX_LEN,
    ImagePath, ItemSizeAvailability, Money, Percentage, SIZE_NAME_MAX_LEN, Size, SizeDraft,
    effective_price,
};
pub use self::catalogue_service::CatalogueService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::slug::{SLUG_MAX_LEN, slugify};
pub use self::trace_id::TraceId;
