//! General-purpose string helpers.
//!
//! Truncation, repetition, delimiter-based splits, blank fallbacks and
//! count-based pluralization.

use crate::error::{NicetiesError, Result};
use crate::normalize::trim_end_whitespace_and_punctuation;


/// Truncates a string to a maximum length, appending `...` when shortened.
///
/// Text no longer than `maximum_length` (counted in characters) is returned
/// unchanged. Otherwise the text is cut so that the result including the
/// `...` suffix never exceeds `maximum_length`, with trailing whitespace
/// and punctuation stripped before the suffix is attached.
///
/// # Errors
///
/// Returns [`NicetiesError::OutOfRange`] when `maximum_length` is less
/// than 3 - there would be no room for the suffix.
///
/// # Examples
///
/// ```
/// use niceties::text::truncate;
///
/// # fn main() -> niceties::Result<()> {
/// assert_eq!(truncate("Test of truncation", 15)?, "Test of trun...");
/// assert_eq!(truncate("short", 100)?, "short");
/// assert!(truncate("anything", 2).is_err());
/// # Ok(())
/// # }
/// ```
pub fn truncate(text: &str, maximum_length: usize) -> Result<String> {
    if maximum_length < 3 {
        return Err(NicetiesError::out_of_range(
            "maximum_length",
            "must be at least 3 to leave room for the truncation suffix",
        ));
    }

    if text.chars().count() <= maximum_length {
        return Ok(text.to_string());
    }

    let kept: String = text.chars().take(maximum_length - 3).collect();
    Ok(format!("{}...", trim_end_whitespace_and_punctuation(&kept)))
}

/// Repeats a string the given number of times.
///
/// # Errors
///
/// Returns [`NicetiesError::OutOfRange`] when `repetitions` is less than 2;
/// repeating once is a no-op the caller did not mean to ask for.
///
/// # Examples
///
/// ```
/// use niceties::text::repeat;
///
/// # fn main() -> niceties::Result<()> {
/// assert_eq!(repeat("-", 5)?, "-----");
/// assert_eq!(repeat("Test", 3)?, "TestTestTest");
/// # Ok(())
/// # }
/// ```
pub fn repeat(text: &str, repetitions: usize) -> Result<String> {
    if repetitions < 2 {
        return Err(NicetiesError::out_of_range(
            "repetitions",
            "must be at least 2",
        ));
    }

    Ok(text.repeat(repetitions))
}

/// Returns everything before the first occurrence of a delimiter.
///
/// Returns `Ok(None)` when the delimiter does not occur, when it is the
/// very first thing in the string (there is nothing before it), or when the
/// subject is empty.
///
/// # Errors
///
/// Returns [`NicetiesError::InvalidArgument`] when the delimiter is empty.
///
/// # Examples
///
/// ```
/// use niceties::text::everything_before_first;
///
/// # fn main() -> niceties::Result<()> {
/// assert_eq!(everything_before_first("test@example.com", "@")?, Some("test"));
/// assert_eq!(everything_before_first("test@example.com", "-")?, None);
/// assert!(everything_before_first("test@example.com", "").is_err());
/// # Ok(())
/// # }
/// ```
pub fn everything_before_first<'a>(text: &'a str, delimiter: &str) -> Result<Option<&'a str>> {
    if delimiter.is_empty() {
        return Err(NicetiesError::invalid_argument(
            "delimiter",
            "must not be empty",
        ));
    }

    match text.find(delimiter) {
        Some(0) | None => Ok(None),
        Some(index) => Ok(Some(&text[..index])),
    }
}

/// Returns everything after the last occurrence of a delimiter.
///
/// Returns `Ok(None)` when the delimiter does not occur, when it ends the
/// string (there is nothing after it), or when the subject is empty.
///
/// # Errors
///
/// Returns [`NicetiesError::InvalidArgument`] when the delimiter is empty.
///
/// # Examples
///
/// ```
/// use niceties::text::everything_after_last;
///
/// # fn main() -> niceties::Result<()> {
/// assert_eq!(
///     everything_after_last("test@something@example.com", "@")?,
///     Some("example.com")
/// );
/// assert_eq!(everything_after_last("test@example.com", "m")?, None);
/// # Ok(())
/// # }
/// ```
pub fn everything_after_last<'a>(text: &'a str, delimiter: &str) -> Result<Option<&'a str>> {
    if delimiter.is_empty() {
        return Err(NicetiesError::invalid_argument(
            "delimiter",
            "must not be empty",
        ));
    }

    match text.rfind(delimiter) {
        None => Ok(None),
        Some(index) => {
            let after = &text[index + delimiter.len()..];
            if after.is_empty() { Ok(None) } else { Ok(Some(after)) }
        }
    }
}

/// Returns the value, or the alternative when the value is absent or blank.
///
/// # Examples
///
/// ```
/// use niceties::text::value_or;
///
/// assert_eq!(value_or(Some("Test"), "Alternative"), "Test");
/// assert_eq!(value_or(None, "Alternative"), "Alternative");
/// assert_eq!(value_or(Some("   "), "Alternative"), "Alternative");
/// ```
pub fn value_or<'a>(value: Option<&'a str>, alternative: &'a str) -> &'a str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => alternative,
    }
}

/// Returns the singular or plural form of a word for the given count.
///
/// The singular form is returned only for a count of exactly 1; zero and
/// negative counts pluralize ("there are 0 Tests", "it is -1 Degrees").
/// Without an explicit plural form an `s` is appended. Empty values are
/// returned unchanged.
///
/// # Errors
///
/// Returns [`NicetiesError::InvalidArgument`] when a plural form is
/// supplied but blank - pass `None` to use the default instead.
///
/// # Examples
///
/// ```
/// use niceties::text::to_plural_for_count;
///
/// # fn main() -> niceties::Result<()> {
/// assert_eq!(to_plural_for_count("Test", 1, None)?, "Test");
/// assert_eq!(to_plural_for_count("Test", 2, None)?, "Tests");
/// assert_eq!(
///     to_plural_for_count("Category", 2, Some("Categories"))?,
///     "Categories"
/// );
/// # Ok(())
/// # }
/// ```
pub fn to_plural_for_count(value: &str, count: i64, plural_form: Option<&str>) -> Result<String> {
    if let Some(form) = plural_form {
        if form.trim().is_empty() {
            return Err(NicetiesError::invalid_argument(
                "plural_form",
                "must not be blank when supplied",
            ));
        }
    }

    if value.is_empty() || count == 1 {
        return Ok(value.to_string());
    }

    Ok(match plural_form {
        Some(form) => form.to_string(),
        None => format!("{value}s"),
    })
}
