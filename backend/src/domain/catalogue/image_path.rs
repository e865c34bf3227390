//! Relative image references stored on clothing items.

use chrono::NaiveDate;
use serde::Serialize;

use super::CatalogueValidationError;
use super::validation::ensure_max_chars;

/// Maximum length of a stored image path.
pub const IMAGE_PATH_MAX_LEN: usize = 100;

const FIELD: &str = "clothing_item.image";

/// Relative path to a product image, for example
/// `products/2024/05/17/linen-shirt.jpg`.
///
/// ## Invariants
/// - Non-empty, at most [`IMAGE_PATH_MAX_LEN`] characters.
/// - Relative: no leading `/` or `\`, and no `..` segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImagePath(String);

impl ImagePath {
    /// Validate an existing relative path.
    pub fn new(value: impl Into<String>) -> Result<Self, CatalogueValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CatalogueValidationError::EmptyField { field: FIELD });
        }
        ensure_max_chars(trimmed, FIELD, IMAGE_PATH_MAX_LEN)?;
        let absolute = trimmed.starts_with('/') || trimmed.starts_with('\\');
        let escapes = trimmed.split(['/', '\\']).any(|segment| segment == "..");
        if absolute || escapes {
            return Err(CatalogueValidationError::InvalidPath { field: FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Build the date-partitioned upload path for `file_name`.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use reverence::domain::ImagePath;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 5, 7).unwrap();
    /// let path = ImagePath::for_upload("shirt.jpg", date).unwrap();
    /// assert_eq!(path.as_str(), "products/2024/05/07/shirt.jpg");
    /// ```
    pub fn for_upload(file_name: &str, date: NaiveDate) -> Result<Self, CatalogueValidationError> {
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(CatalogueValidationError::EmptyField { field: FIELD });
        }
        if file_name.contains(['/', '\\']) {
            return Err(CatalogueValidationError::InvalidPath { field: FIELD });
        }
        Self::new(format!("{}/{file_name}", date.format("products/%Y/%m/%d")))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for ImagePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("products/2023/01/02/a.png")]
    #[case("legacy/shoe.webp")]
    fn accepts_relative_paths(#[case] raw: &str) {
        assert_eq!(ImagePath::new(raw).expect("valid").as_str(), raw);
    }

    #[rstest]
    #[case("/etc/passwd")]
    #[case("products/../../secret")]
    #[case("\\share\\img.png")]
    fn rejects_escaping_paths(#[case] raw: &str) {
        assert!(matches!(
            ImagePath::new(raw),
            Err(CatalogueValidationError::InvalidPath { .. })
        ));
    }

    #[rstest]
    fn rejects_overlong_paths() {
        let raw = format!("products/{}", "x".repeat(IMAGE_PATH_MAX_LEN));
        assert!(matches!(
            ImagePath::new(raw),
            Err(CatalogueValidationError::TooLong { max: 100, .. })
        ));
    }

    #[rstest]
    fn upload_paths_reject_nested_file_names() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date");
        assert!(ImagePath::for_upload("a/b.png", date).is_err());
        assert!(ImagePath::for_upload("  ", date).is_err());
    }
}
