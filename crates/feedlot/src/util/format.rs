//! Number formatting for reports.

/// Format a number compactly with precision that shrinks as magnitude grows.
///
/// Millions get two decimals and an `M` suffix, thousands are rounded with
/// comma grouping, and smaller values keep one to three decimals.
/// Non-finite values render as `-`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }

    let abs_value = value.abs();
    if abs_value >= 1_000_000.0 {
        format!("{:.2}M", value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        // Halves round toward positive infinity
        group_thousands((value + 0.5).floor() as i64)
    } else if abs_value >= 10.0 {
        format!("{value:.1}")
    } else if abs_value >= 1.0 {
        format!("{value:.2}")
    } else {
        format!("{value:.3}")
    }
}

/// Format a percentage that is already scaled to 0-100
pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}%")
    } else {
        "-".to_string()
    }
}

/// Insert a comma between every group of three digits
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
