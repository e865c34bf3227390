//! Size lookup entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CatalogueValidationError;
use super::validation::validate_name;

/// Maximum length of a size label such as `XL` or `42`.
pub const SIZE_NAME_MAX_LEN: usize = 10;

/// Input payload for [`Size::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct SizeDraft {
    pub id: Uuid,
    pub name: String,
}

/// Garment size. Names are unique across the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    id: Uuid,
    name: String,
}

impl Size {
    /// Validate and construct a size.
    ///
    /// # Examples
    /// ```
    /// use reverence::domain::{Size, SizeDraft};
    /// use uuid::Uuid;
    ///
    /// let size = Size::new(SizeDraft { id: Uuid::nil(), name: " XL ".into() }).unwrap();
    /// assert_eq!(size.name(), "XL");
    /// ```
    pub fn new(draft: SizeDraft) -> Result<Self, CatalogueValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<SizeDraft> for Size {
    type Error = CatalogueValidationError;

    fn try_from(draft: SizeDraft) -> Result<Self, Self::Error> {
        let name = validate_name(&draft.name, "size.name", SIZE_NAME_MAX_LEN)?;
        Ok(Self { id: draft.id, name })
    }
}

impl<'de> Deserialize<'de> for Size {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        SizeDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}
