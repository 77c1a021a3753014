//! Request-category name normalization.

/// Separator inserted at each word boundary.
pub const WORD_SEPARATOR: char = '_';

/// Turn a camel-case request name into a lowercase metric prefix.
///
/// A boundary is an ASCII lowercase letter immediately followed by an ASCII
/// uppercase letter; a separator is inserted there and the result is ASCII
/// lowercased. A run of capitals after a lowercase letter gets a single
/// separator. Every other character is copied through unchanged and never
/// forms a boundary.
///
/// ```rust
/// # use kafka_metrics_schema::request::normalize_category;
/// assert_eq!(normalize_category("FetchRequest"), "fetch_request");
/// assert_eq!(normalize_category("LeaderAndISR"), "leader_and_isr");
/// ```
pub fn normalize_category(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            out.push(WORD_SEPARATOR);
        }
        prev_lower = c.is_ascii_lowercase();
        out.push(c.to_ascii_lowercase());
    }
    out
}
