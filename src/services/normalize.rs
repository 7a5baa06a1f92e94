//! Normalization and matching helpers.
//!
//! Every case-insensitive or format-insensitive comparison in the service goes
//! through these functions. They are pure and total: absent or empty input
//! simply normalizes to the empty string.

/// Strip every non-digit character.
///
/// `"+965 9721-5518"` becomes `"96597215518"`.
pub fn normalize_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Trim, lowercase, and collapse internal whitespace runs to a single space.
///
/// `"  Sri   LANKA "` becomes `"sri lanka"`.
pub fn normalize_text(input: &str) -> String {
    input
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compare two strings after [`normalize_text`].
pub fn text_eq(a: &str, b: &str) -> bool {
    normalize_text(a) == normalize_text(b)
}

/// Suffix-compatibility rule for phone numbers.
///
/// Both arguments must already be digit-normalized. The numbers match when they
/// are equal or when either one ends with the other, which tolerates a country
/// code prefix on one side only. Short queries can match several customers;
/// callers decide which record wins.
///
/// An empty query never matches.
pub fn phone_matches(query_digits: &str, stored_digits: &str) -> bool {
    if query_digits.is_empty() {
        return false;
    }

    query_digits == stored_digits
        || query_digits.ends_with(stored_digits)
        || stored_digits.ends_with(query_digits)
}
