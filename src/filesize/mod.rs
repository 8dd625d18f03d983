//! Human-readable file size formatting.
//!
//! Byte counts scale against binary thresholds (KB = 1024 bytes) and render
//! with trailing zeros trimmed, so 1024 bytes is `"1 KB"` rather than
//! `"1.00 KB"`.

use std::fs;
use std::path::Path;

use crate::error::{NicetiesError, Result};


const KB: u64 = 1 << 10;
const MB: u64 = 1 << 20;
const GB: u64 = 1 << 30;
const TB: u64 = 1 << 40;

/// Formats a byte count as a human-readable file size with two decimals.
///
/// # Examples
///
/// ```
/// use niceties::filesize::to_file_size;
///
/// assert_eq!(to_file_size(1024), "1 KB");
/// assert_eq!(to_file_size(1), "1 byte");
/// assert_eq!(to_file_size(500), "500 bytes");
/// ```
pub fn to_file_size(bytes: u64) -> String {
    format_file_size(bytes, 2)
}

/// Formats a byte count as a human-readable file size with the given number
/// of decimal places.
///
/// # Errors
///
/// Returns [`NicetiesError::OutOfRange`] when `decimals` is less than 1 or
/// greater than 28.
///
/// # Examples
///
/// ```
/// use niceties::filesize::to_file_size_with_decimals;
///
/// # fn main() -> niceties::Result<()> {
/// assert_eq!(to_file_size_with_decimals(1351, 1)?, "1.3 KB");
/// assert!(to_file_size_with_decimals(1351, 0).is_err());
/// # Ok(())
/// # }
/// ```
pub fn to_file_size_with_decimals(bytes: u64, decimals: u32) -> Result<String> {
    if !(1..=28).contains(&decimals) {
        return Err(NicetiesError::out_of_range(
            "decimals",
            "must be at least 1 and no bigger than 28",
        ));
    }

    Ok(format_file_size(bytes, decimals))
}

fn format_file_size(bytes: u64, decimals: u32) -> String {
    let (threshold, unit) = match bytes {
        b if b >= TB => (TB, "TB"),
        b if b >= GB => (GB, "GB"),
        b if b >= MB => (MB, "MB"),
        b if b >= KB => (KB, "KB"),
        1 => return "1 byte".to_string(),
        b => return format!("{b} bytes"),
    };

    let scaled = bytes as f64 / threshold as f64;
    let rendered = format!("{scaled:.precision$}", precision = decimals as usize);
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {unit}")
}

/// Returns a file's length formatted as a human-readable file size.
///
/// # Errors
///
/// Returns [`NicetiesError::Io`] when the file's metadata cannot be read.
///
/// # Examples
///
/// ```no_run
/// use niceties::filesize::file_size_of;
///
/// # fn main() -> niceties::Result<()> {
/// let formatted = file_size_of("large-download.iso".as_ref())?;
/// println!("{formatted}");
/// # Ok(())
/// # }
/// ```
pub fn file_size_of(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|source| NicetiesError::io(path, source))?;
    Ok(to_file_size(metadata.len()))
}
