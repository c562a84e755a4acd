//! Text normalization.
//!
//! Produces the canonical one-line form of a page, a prompt or an option:
//! the trailing page-number footer is dropped and every whitespace run,
//! page breaks included, becomes a single space.

use crate::patterns::{TRAILING_PAGE_NUMBER, WHITESPACE_RUN};

/// Normalizes `text` to a single trimmed line without a trailing page number.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
///
/// # Examples
///
/// ```
/// use survey_questions::normalize::normalize;
///
/// assert_eq!(normalize("Qual o seu\n  estado civil?\n 3"), "Qual o seu estado civil?");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let stripped = strip_page_number(text);
    WHITESPACE_RUN.replace_all(stripped, " ").trim().to_string()
}

/// Removes only the trailing page-number fragment, leaving inner layout alone.
///
/// Used on individual pages before they are joined into one document.
#[must_use]
pub fn strip_page_number(text: &str) -> &str {
    match TRAILING_PAGE_NUMBER.find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    }
}
