//! # Formatting Utilities
//!
//! Balance formatting for the onboarding page. For address formatting, use
//! [`shared::utils::truncate_address`].

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Examples
///
/// ```rust
/// use mint_web::utils::format::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100.00");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    let parts: Vec<&str> = formatted.split('.').collect();

    let integer_part = parts[0];
    let decimal_part = if parts.len() > 1 { parts[1] } else { "" };

    // Add commas to integer part
    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    let integer_with_commas: String = result.chars().rev().collect();

    if decimal_part.is_empty() {
        integer_with_commas
    } else {
        format!("{}.{}", integer_with_commas, decimal_part)
    }
}

/// Format MIST to SUI (9 decimals)
///
/// # Examples
///
/// ```rust
/// use mint_web::utils::format::format_mist_to_sui;
///
/// assert_eq!(format_mist_to_sui(1_000_000_000), "1.0000");
/// assert_eq!(format_mist_to_sui(500_000_000), "0.5000");
/// ```
pub fn format_mist_to_sui(mist: u64) -> String {
    let sui = mist as f64 / 1_000_000_000.0;
    format_number(sui, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
    }

    #[test]
    fn test_format_mist_to_sui() {
        assert_eq!(format_mist_to_sui(1_000_000_000), "1.0000");
        assert_eq!(format_mist_to_sui(20_000_000), "0.0200");
        assert_eq!(format_mist_to_sui(0), "0.0000");
    }
}
