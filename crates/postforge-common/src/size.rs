//! Human-readable byte sizes for link listings.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count using 1024-based units, rounded to one decimal.
///
/// A trailing `.0` is dropped, and anything past terabytes stays in `TB`.
///
/// ```
/// use postforge_common::size::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 B");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// assert_eq!(format_file_size(1024 * 1024 * 1024), "1 GB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    let mut divisor = 1u64;
    while unit + 1 < UNITS.len() && bytes / divisor >= 1024 {
        divisor *= 1024;
        unit += 1;
    }

    let value = bytes as f64 / divisor as f64;
    let rounded = format!("{value:.1}");
    let trimmed = rounded.strip_suffix(".0").unwrap_or(&rounded);
    format!("{trimmed} {}", UNITS[unit])
}

/// Like [`format_file_size`], treating an unknown size as zero.
pub fn format_optional_size(bytes: Option<u64>) -> String {
    format_file_size(bytes.unwrap_or(0))
}
