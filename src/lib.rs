//! Niceties - convenience helpers for primitive values
//!
//! Niceties augments strings, dates and byte counts with the small, pure
//! transformations that otherwise get rewritten in every project: slugs,
//! title casing, whitespace collapsing, relative-time phrases and
//! human-readable file sizes.
//!
//! # Quick Start
//!
//! ```
//! use niceties::{to_slug, to_title_case, to_file_size};
//!
//! fn main() -> Result<(), niceties::NicetiesError> {
//!     assert_eq!(to_slug("Tést to Slug")?, "test-to-slug");
//!     assert_eq!(to_title_case("this is a HTML test"), "This Is A HTML Test");
//!     assert_eq!(to_file_size(1024), "1 KB");
//!     Ok(())
//! }
//! ```
//!
//! # Design
//!
//! - Every function is a synchronous, side-effect-free transformation over
//!   immutable inputs; any number of threads may call them concurrently.
//! - Absent values are the caller's `Option`. Functions that pass absence
//!   through in other languages simply compose via `Option::map` here:
//!   `maybe_text.map(|t| niceties::collapse_whitespace(t))`.
//! - Contract violations (blank slug input, empty delimiter, out-of-range
//!   numeric arguments) fail immediately with a descriptive
//!   [`NicetiesError`]; nothing is retried or recovered internally.
//!
//! # Modules
//!
//! - [`normalize`] - diacritic stripping, whitespace collapsing, edge trims
//! - [`slug`] - URL-safe slug derivation
//! - [`case`] - title casing and first-word casing with locale rules
//! - [`text`] - truncation, repetition, delimiter splits, pluralization
//! - [`time`] - relative-time phrases and calendar helpers
//! - [`filesize`] - human-readable byte counts

#![warn(clippy::all)]

/// Returns the niceties crate version.
///
/// This is useful for version reporting in CLI tools and debugging.
///
/// # Examples
///
/// ```
/// let version = niceties::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub mod case;
pub mod error;
pub mod filesize;
pub mod normalize;
pub mod slug;
pub mod text;
pub mod time;

// Re-export the commonly used items for convenience
pub use case::{Locale, to_title_case, to_upper_first};
pub use error::{NicetiesError, Result};
pub use filesize::{file_size_of, to_file_size};
pub use normalize::{collapse_whitespace, remove_diacritics};
pub use slug::to_slug;
pub use text::{to_plural_for_count, truncate, value_or};
pub use time::to_relative_time;
