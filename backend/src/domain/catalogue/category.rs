//! Category lookup entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CatalogueValidationError;
use super::validation::{validate_name, validate_slug};

/// Maximum length of a category name.
pub const CATEGORY_NAME_MAX_LEN: usize = 255;

/// Input payload for [`Category::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CategoryDraft {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

/// Product category.
///
/// ## Invariants
/// - `name` is trimmed, non-empty and unique across categories.
/// - `slug` is a valid slug and unique across categories.
/// - Listings order categories by `name` ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    id: Uuid,
    name: String,
    slug: String,
}

impl Category {
    /// Validate and construct a category.
    pub fn new(draft: CategoryDraft) -> Result<Self, CatalogueValidationError> {
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
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<CategoryDraft> for Category {
    type Error = CatalogueValidationError;

    fn try_from(draft: CategoryDraft) -> Result<Self, Self::Error> {
        let name = validate_name(&draft.name, "category.name", CATEGORY_NAME_MAX_LEN)?;
        let slug = validate_slug(&draft.slug, "category.slug")?;
        Ok(Self {
            id: draft.id,
            name,
            slug,
        })
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        CategoryDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}
