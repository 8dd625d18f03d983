//! Text normalization utilities.
//!
//! This module provides the normalization building blocks used by the slug
//! pipeline and useful on their own: diacritic stripping, whitespace
//! collapsing and one-sided whitespace-and-punctuation trims.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

#[cfg(test)]
mod tests;

/// Removes diacritical marks from a string, leaving the base characters.
///
/// The string is decomposed into canonical decomposed form (NFD), every
/// non-spacing combining mark is discarded, and the remainder is recomposed
/// into canonical composed form (NFC). Empty and whitespace-only input is
/// returned unchanged. The operation is idempotent.
///
/// # Examples
///
/// ```
/// use niceties::normalize::remove_diacritics;
///
/// assert_eq!(remove_diacritics("Parlez-vous Français?"), "Parlez-vous Francais?");
/// assert_eq!(remove_diacritics("äöü"), "aou");
/// ```
pub fn remove_diacritics(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    text.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
}

/// Collapses all whitespace in a string to single spaces and trims the ends.
///
/// Tabs, newlines, non-breaking spaces and runs of ordinary spaces all
/// become a single space character.
///
/// # Examples
///
/// ```
/// use niceties::normalize::collapse_whitespace;
///
/// assert_eq!(
///     collapse_whitespace("Test\tCollapse\r\nWhite Space"),
///     "Test Collapse White Space"
/// );
/// assert_eq!(collapse_whitespace("  spaced   out  "), "spaced out");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trims whitespace and ASCII punctuation from the start of a string.
///
/// Only leading characters are affected; punctuation elsewhere in the
/// string is preserved.
///
/// # Examples
///
/// ```
/// use niceties::normalize::trim_start_whitespace_and_punctuation;
///
/// assert_eq!(trim_start_whitespace_and_punctuation("? ! @ Hello"), "Hello");
/// assert_eq!(trim_start_whitespace_and_punctuation("Hello!"), "Hello!");
/// ```
pub fn trim_start_whitespace_and_punctuation(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
}

/// Trims whitespace and ASCII punctuation from the end of a string.
///
/// Only trailing characters are affected; punctuation elsewhere in the
/// string is preserved.
///
/// # Examples
///
/// ```
/// use niceties::normalize::trim_end_whitespace_and_punctuation;
///
/// assert_eq!(trim_end_whitespace_and_punctuation("Hello? ! @ "), "Hello");
/// assert_eq!(trim_end_whitespace_and_punctuation("!Hello"), "!Hello");
/// ```
pub fn trim_end_whitespace_and_punctuation(text: &str) -> &str {
    text.trim_end_matches(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
}
