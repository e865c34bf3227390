//! Request validation helpers shared by the admin handlers.

use serde_json::json;
use uuid::Uuid;

use crate::domain::Error;

/// Field names as they appear in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": "invalid_uuid",
    }))
}

/// Parse an optional UUID supplied as free text (query strings).
pub(crate) fn parse_optional_uuid(
    value: Option<&str>,
    field: FieldName,
) -> Result<Option<Uuid>, Error> {
    value
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .map(|raw| Uuid::parse_str(raw).map_err(|_| invalid_uuid_error(field, raw)))
        .transpose()
}
