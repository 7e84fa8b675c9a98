//! Catalog search helpers.
//!
//! Search is a plain case-insensitive substring match OR-ed across the
//! catalog's text columns. The repository turns the user's text into an
//! `ILIKE` pattern with [`like_pattern`].

/// Catalog columns searched by a free-text query.
pub const SEARCHABLE_COLUMNS: &[&str] = &[
    "title",
    "description",
    "category",
    "brand",
    "color",
    "pattern",
];

/// Escape character used in generated `LIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Reduce raw search input to a query, or `None` to list everything.
pub fn normalize_query(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Build a `%substring%` pattern that matches `text` literally.
///
/// `%`, `_` and the escape character itself are escaped so user input never
/// acts as a wildcard.
///
/// # Examples
///
/// ```
/// use gorgina_core::search::like_pattern;
/// assert_eq!(like_pattern("red"), "%red%");
/// assert_eq!(like_pattern("50%"), "%50\\%%");
/// ```
pub fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Build the `WHERE` clause matching any searchable column against `$param`.
pub fn search_clause(param: usize) -> String {
    SEARCHABLE_COLUMNS
        .iter()
        .map(|col| format!("{col} ILIKE ${param} ESCAPE '{LIKE_ESCAPE}'"))
        .collect::<Vec<_>>()
        .join(" OR ")
}
