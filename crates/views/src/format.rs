//! Display formatting shared by the views.

/// Group digits in threes with commas: `2404` → `"2,404"`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Percentage without a trailing `.0`: `75.0` → `"75%"`, `67.7` → `"67.7%"`.
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}%", value as i64)
    } else {
        format!("{value}%")
    }
}

/// Fixed two-decimal rendering used for confidence and lift.
pub fn format_ratio(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(604), "604");
        assert_eq!(format_thousands(1800), "1,800");
        assert_eq!(format_thousands(2404), "2,404");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(75.0), "75%");
        assert_eq!(format_percent(67.7), "67.7%");
        assert_eq!(format_percent(0.3), "0.3%");
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(0.9), "0.90");
        assert_eq!(format_ratio(1.05), "1.05");
    }
}
