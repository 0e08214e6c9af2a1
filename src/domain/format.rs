// SPDX-License-Identifier: MPL-2.0
//! Human-readable byte counts.

/// Units in base-1024 order.
const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

const STEP: u64 = 1024;

/// Formats a byte count using the largest unit whose scaled value is at least 1.
///
/// The value is rounded to two decimals and trailing zeros are dropped, so
/// `1536` becomes `"1.5 KB"` and `1024` becomes `"1 KB"`. Counts beyond the
/// gigabyte range stay in GB.
///
/// ```
/// use green_classify::domain::format::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1_048_576), "1 MB");
/// ```
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut index = 0;
    let mut divisor = 1u64;
    while index + 1 < UNITS.len() && bytes / divisor >= STEP {
        divisor *= STEP;
        index += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    let scaled = bytes as f64 / divisor as f64;
    format!("{} {}", trim_decimals(scaled), UNITS[index])
}

/// Formats an upload limit without the unit space, as alerts show it.
///
/// `10_485_760` becomes `"10MB"`.
#[must_use]
pub fn format_size_limit(bytes: u64) -> String {
    format_file_size(bytes).replace(' ', "")
}

/// Rounds to two decimals, ties away from zero, and strips a trailing `.00` / `0`.
fn trim_decimals(value: f64) -> String {
    // `{:.2}` alone would round exact ties such as 1.125 to even.
    let rounded = (value * 100.0).round() / 100.0;
    let fixed = format!("{rounded:.2}");
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_special_cased() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn whole_units_drop_decimals() {
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(1_073_741_824), "1 GB");
    }

    #[test]
    fn fractional_values_round_to_two_decimals() {
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1100), "1.07 KB");
        assert_eq!(format_file_size(10 * 1024 * 1024 + 5 * 1024 * 1024 / 10), "10.5 MB");
    }

    #[test]
    fn exact_ties_round_up() {
        // 1.125 KB and 2.625 KB are exact in binary.
        assert_eq!(format_file_size(1152), "1.13 KB");
        assert_eq!(format_file_size(2688), "2.63 KB");
        assert_eq!(format_file_size(1_179_648), "1.13 MB");
    }

    #[test]
    fn rounding_can_reach_the_next_whole_number() {
        // 1023.999 KB rounds to 1024.00 and stays in KB.
        assert_eq!(format_file_size(1_048_575), "1024 KB");
    }

    #[test]
    fn size_limits_drop_the_unit_space() {
        assert_eq!(format_size_limit(10 * 1024 * 1024), "10MB");
        assert_eq!(format_size_limit(1536 * 1024), "1.5MB");
    }

    #[test]
    fn huge_counts_stay_in_gigabytes() {
        assert_eq!(format_file_size(1024 * 1_073_741_824), "1024 GB");
    }
}
