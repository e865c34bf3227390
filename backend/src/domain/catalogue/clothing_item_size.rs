//! Association between a clothing item and a size.

use serde::Serialize;
use uuid::Uuid;

use super::Size;

/// One row of the item/size join. `(clothing_item_id, size_id)` is unique
/// and the row disappears when either parent is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItemSize {
    pub id: Uuid,
    pub clothing_item_id: Uuid,
    pub size_id: Uuid,
    pub available: bool,
}

impl ClothingItemSize {
    pub fn new(id: Uuid, clothing_item_id: Uuid, size_id: Uuid, available: bool) -> Self {
        Self {
            id,
            clothing_item_id,
            size_id,
            available,
        }
    }
}

/// A size offered for an item together with the pair's availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSizeAvailability {
    pub link: ClothingItemSize,
    pub size: Size,
}

impl ItemSizeAvailability {
    /// Whether the item can be ordered in this size.
    pub fn available(&self) -> bool {
        self.link.available
    }
}
