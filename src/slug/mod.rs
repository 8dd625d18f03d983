//! URL-safe slug derivation.
//!
//! Slugs produced by this module contain only lowercase ASCII alphanumeric
//! characters separated by single hyphens, making them suitable for URL path
//! segments and filenames.

use crate::error::{NicetiesError, Result};
use crate::normalize::{collapse_whitespace, remove_diacritics};


/// Converts a string to a lowercase, hyphen-delimited slug.
///
/// The pipeline strips diacritics, lowercases, collapses whitespace, then
/// replaces every run of characters that is neither alphanumeric nor a
/// hyphen with a single hyphen, collapses consecutive hyphens and trims
/// hyphens from both ends. The result never starts or ends with a hyphen
/// and never contains two hyphens in a row.
///
/// # Errors
///
/// Returns [`NicetiesError::InvalidArgument`] when the input is empty or
/// whitespace-only, and when the input contains no alphanumeric characters
/// at all (a slug must exist for the operation to make sense).
///
/// # Examples
///
/// ```
/// use niceties::slug::to_slug;
///
/// # fn main() -> niceties::Result<()> {
/// assert_eq!(to_slug("Tést to Slug")?, "test-to-slug");
/// assert_eq!(to_slug("  Test\tto\r\nSlug  ")?, "test-to-slug");
/// assert!(to_slug("   ").is_err());
/// # Ok(())
/// # }
/// ```
pub fn to_slug(text: &str) -> Result<String> {
    if text.trim().is_empty() {
        return Err(NicetiesError::invalid_argument(
            "text",
            "cannot derive a slug from a blank string",
        ));
    }

    let lowered = remove_diacritics(text).to_lowercase();
    let collapsed = collapse_whitespace(&lowered);

    let mut slug = String::with_capacity(collapsed.len());
    let mut previous_hyphen = false;

    for candidate in collapsed.chars() {
        if candidate.is_ascii_alphanumeric() {
            slug.push(candidate);
            previous_hyphen = false;
        } else if !previous_hyphen && !slug.is_empty() {
            // Whitespace, punctuation and non-ASCII letters all become a
            // single separator; leading separators are dropped outright.
            slug.push('-');
            previous_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        return Err(NicetiesError::invalid_argument(
            "text",
            "input contains no alphanumeric characters to slug",
        ));
    }

    Ok(slug)
}
