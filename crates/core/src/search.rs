//! Listing and filtering helpers shared by the repository and API layers.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of entities returned by a list call.
pub const DEFAULT_LIST_LIMIT: i64 = 10;

/// Maximum number of entities a single list call may return.
pub const MAX_LIST_LIMIT: i64 = 100;

/// Clamp a user-provided limit to `0..=max`, falling back to `default`.
///
/// A limit of zero is honoured and yields an empty page.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(0, max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Substring filters
// ---------------------------------------------------------------------------

/// Build an `ILIKE` pattern matching `needle` anywhere in a column.
///
/// LIKE metacharacters in the input are escaped with `\` (PostgreSQL's
/// default escape character) so the match is a literal substring match.
///
/// # Examples
///
/// ```
/// use catalog_core::search::substring_pattern;
/// assert_eq!(substring_pattern("Python"), "%Python%");
/// assert_eq!(substring_pattern("100%"), "%100\\%%");
/// ```
pub fn substring_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Treat an empty text filter the same as an absent one.
pub fn non_empty(filter: Option<&str>) -> Option<&str> {
    filter.filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
