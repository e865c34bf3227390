//! Slug validation and derivation shared by catalogue entities.
//!
//! Slugs are URL path segments: non-empty, at most [`SLUG_MAX_LEN`]
//! characters, and composed of ASCII letters, digits, hyphens and
//! underscores.

/// Maximum slug length accepted by the catalogue tables.
pub const SLUG_MAX_LEN: usize = 50;

/// Return `true` when `value` is a valid catalogue slug.
pub(crate) fn is_valid_slug(value: &str) -> bool {
    !value.is_empty() && value.len() <= SLUG_MAX_LEN && has_allowed_slug_chars(value)
}

fn has_allowed_slug_chars(value: &str) -> bool {
    value
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
}

/// Derive a slug from a display name.
///
/// ASCII letters are lowercased and digits kept. Runs of whitespace, `-` and
/// `_` collapse into a single hyphen; any other character is dropped. The
/// result is trimmed of hyphens and truncated to [`SLUG_MAX_LEN`]. Returns
/// `None` when nothing usable remains.
///
/// # Examples
/// ```
/// use reverence::domain::slugify;
///
/// assert_eq!(slugify("Summer  Linen Shirt!").as_deref(), Some("summer-linen-shirt"));
/// assert_eq!(slugify("???"), None);
/// ```
pub fn slugify(name: &str) -> Option<String> {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_separator = true;
        }
    }

    slug.truncate(SLUG_MAX_LEN);
    let trimmed = slug.trim_end_matches('-');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("shirts", true)]
    #[case("T-Shirts_2024", true)]
    #[case("", false)]
    #[case("has space", false)]
    #[case("café", false)]
    #[case(" leading", false)]
    fn validates_slug_characters(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_slug(value), expected);
    }

    #[rstest]
    fn rejects_overlong_slugs() {
        assert!(is_valid_slug(&"a".repeat(SLUG_MAX_LEN)));
        assert!(!is_valid_slug(&"a".repeat(SLUG_MAX_LEN + 1)));
    }

    #[rstest]
    #[case("Summer Dress", Some("summer-dress"))]
    #[case("  --Denim__Jacket--  ", Some("denim-jacket"))]
    #[case("Naïve Tee", Some("nave-tee"))]
    #[case("Size 42", Some("size-42"))]
    #[case("!!!", None)]
    #[case("", None)]
    fn slugify_normalises_names(#[case] name: &str, #[case] expected: Option<&str>) {
        assert_eq!(slugify(name).as_deref(), expected);
    }

    #[rstest]
    fn slugify_output_is_always_valid() {
        let long_name = "word ".repeat(40);
        let slug = slugify(&long_name).expect("slug derived");
        assert!(is_valid_slug(&slug));
        assert!(!slug.ends_with('-'));
    }
}
