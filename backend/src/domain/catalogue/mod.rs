//! Clothing catalogue entities.
//!
//! Sizes and categories are lookup tables; clothing items reference exactly
//! one category and are offered in many sizes through
//! [`ClothingItemSize`], which records per-pair availability.

mod category;
mod clothing_item;
mod clothing_item_size;
mod image_path;
mod pricing;
mod size;
mod validation;


pub use category::{CATEGORY_NAME_MAX_LEN, Category, CategoryDraft};
pub use clothing_item::{CLOTHING_ITEM_NAME_MAX_LEN, ClothingItem, ClothingItemDraft};
pub use clothing_item_size::{ClothingItemSize, ItemSizeAvailability};
pub use image_path::{IMAGE_PATH_MAX_LEN, ImagePath};
pub use pricing::{Money, Percentage, effective_price};
pub use size::{SIZE_NAME_MAX_LEN, Size, SizeDraft};

/// Validation errors returned by catalogue constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    #[error("{field} must contain only ASCII letters, digits, hyphens and underscores")]
    InvalidSlug { field: &'static str },
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
    #[error("{field} must be between 0 and 100")]
    PercentageOutOfRange { field: &'static str },
    #[error("{field} exceeds {digits} digits with 2 decimal places")]
    PrecisionOverflow { field: &'static str, digits: u32 },
    #[error("{field} must be a relative path without parent segments")]
    InvalidPath { field: &'static str },
}

impl CatalogueValidationError {
    /// Dotted field path naming the offending input.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyField { field }
            | Self::TooLong { field, .. }
            | Self::InvalidSlug { field }
            | Self::Negative { field }
            | Self::PercentageOutOfRange { field }
            | Self::PrecisionOverflow { field, .. }
            | Self::InvalidPath { field } => field,
        }
    }

    /// Stable machine-readable reason used in error details.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::EmptyField { .. } => "empty",
            Self::TooLong { .. } => "too_long",
            Self::InvalidSlug { .. } => "invalid_slug",
            Self::Negative { .. } => "negative",
            Self::PercentageOutOfRange { .. } => "out_of_range",
            Self::PrecisionOverflow { .. } => "precision_overflow",
            Self::InvalidPath { .. } => "invalid_path",
        }
    }
}
