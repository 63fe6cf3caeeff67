//! Number formatting for the result page.
//!
//! Amounts coming back from the calculator are rounded to cents, so two
//! fraction digits are enough to show them without losing anything.

/// Group the digits of a whole number in threes: `1234567` -> `"1,234,567"`
pub fn group_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Format a dollar amount with thousands separators and up to two fraction
/// digits, trailing zeros trimmed: `1234.5` -> `"1,234.5"`, `1000.0` -> `"1,000"`
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Rendered from the decimal expansion so amounts of any size keep every digit
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let mut formatted = group_digits(whole);

    let fraction = fraction.trim_end_matches('0');
    if !fraction.is_empty() {
        formatted.push('.');
        formatted.push_str(fraction);
    }

    if value < 0.0 && formatted != "0" {
        formatted.insert(0, '-');
    }
    formatted
}

/// `format_amount` with a leading dollar sign
pub fn format_dollars(value: f64) -> String {
    if value < 0.0 && format_amount(value).starts_with('-') {
        format!("-${}", format_amount(-value))
    } else {
        format!("${}", format_amount(value))
    }
}

/// Format a raw whole-dollar form value; anything that is not a plain
/// number is shown as typed.
pub fn format_input_dollars(raw: &str) -> String {
    match raw.trim().parse::<u64>() {
        Ok(value) => format!("${}", group_thousands(value)),
        Err(_) => format!("${}", raw.trim()),
    }
}

/// Percentage with two decimals: `0.9` -> `"0.90%"`
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(999_999), "999,999");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_amount_keeps_cents() {
        assert_eq!(format_amount(1_234.56), "1,234.56");
        assert_eq!(format_amount(1_234.5), "1,234.5");
        assert_eq!(format_amount(10_645.11), "10,645.11");
        assert_eq!(format_amount(0.07), "0.07");
    }

    #[test]
    fn test_format_amount_whole_numbers() {
        assert_eq!(format_amount(1_000.0), "1,000");
        assert_eq!(format_amount(1_600_000.0), "1,600,000");
        assert_eq!(format_amount(0.0), "0");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-2_500.25), "-2,500.25");
        assert_eq!(format_amount(-0.001), "0");
    }

    #[test]
    fn test_format_amount_beyond_u64() {
        let price = 18_446_744_073_709_551_615.0_f64 * 4.0 * 2.0 * 0.93;
        let formatted = format_amount(price);

        let digits: String = formatted.chars().filter(|c| *c != ',').collect();
        assert_eq!(digits.len(), 21);
        assert_eq!(digits.parse::<f64>().unwrap(), price);
        assert_eq!(format_amount(1e20), "100,000,000,000,000,000,000");
    }

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars(320_000.0), "$320,000");
        assert_eq!(format_dollars(-12.5), "-$12.5");
    }

    #[test]
    fn test_format_input_dollars() {
        assert_eq!(format_input_dollars("250000"), "$250,000");
        assert_eq!(format_input_dollars(" 42 "), "$42");
        assert_eq!(format_input_dollars("abc"), "$abc");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.9), "0.90%");
        assert_eq!(format_percent(2.456), "2.46%");
    }
}
