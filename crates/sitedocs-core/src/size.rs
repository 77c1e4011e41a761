//! Human-readable byte counts.

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const STEP: u64 = 1024;

/// Formats a byte count using base-1024 units.
///
/// The unit is the largest of Bytes, KB, MB, GB that does not exceed the
/// value, and the number is rounded to two decimal places with trailing zeros
/// dropped. There is no unit above GB: terabyte-scale sizes are shown as a
/// large GB figure.
///
/// # Examples
///
/// ```
/// use sitedocs_core::format_size;
///
/// assert_eq!(format_size(0), "0 Bytes");
/// assert_eq!(format_size(1536), "1.5 KB");
/// assert_eq!(format_size(1_048_576), "1 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    // floor(log1024(bytes)) computed on integers, capped at the last unit
    let mut exponent = 0;
    let mut divisor = 1u64;
    while exponent < UNITS.len() - 1 && bytes / divisor >= STEP {
        divisor *= STEP;
        exponent += 1;
    }

    let value = bytes as f64 / divisor as f64;
    format!("{} {}", trim_decimals(&format!("{value:.2}")), UNITS[exponent])
}

fn trim_decimals(fixed: &str) -> &str {
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed
    }
}
