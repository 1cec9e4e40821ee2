//! Request parameter validation helpers.

use crate::domain::Error;

/// Parse a path segment as an entity identifier.
///
/// The original data stores index everything by integer, but callers may
/// send anything. A non-numeric segment resolves to "not found" with the
/// caller-supplied message rather than a type error, matching the lookup
/// contract of both collections.
pub fn parse_entity_id(raw: &str, missing_message: &str) -> Result<i64, Error> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| Error::not_found(missing_message))
}
