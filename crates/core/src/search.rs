//! Name search and top-rated helpers.

use crate::error::CoreError;

/// Default number of rows for `GET /restaurants/top-rated`.
pub const DEFAULT_TOP_RATED_LIMIT: i64 = 5;

/// Maximum number of rows for `GET /restaurants/top-rated`.
pub const MAX_TOP_RATED_LIMIT: i64 = 100;

/// Clamp a user-provided limit to `0..=max`. Zero yields an empty list.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(0, max)
}

/// Require a non-empty search term.
pub fn validate_search_query(query: Option<&str>) -> Result<&str, CoreError> {
    match query {
        Some(q) if !q.is_empty() => Ok(q),
        _ => Err(CoreError::Validation("Search query is required".to_string())),
    }
}

/// Build a `LIKE` pattern matching `term` anywhere in the column.
///
/// `\`, `%` and `_` are escaped so the term is matched literally (the
/// PostgreSQL default `LIKE` escape character is `\`).
///
/// ```
/// use dinedir_core::search::contains_pattern;
/// assert_eq!(contains_pattern("Pho"), "%Pho%");
/// assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
/// ```
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
