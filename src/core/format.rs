//! Display formatting for readings and limits.

/// Shortest decimal form of a value: `65`, `16.2`, `152.5`.
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

/// Value followed by its unit. Unitless values get no trailing space.
pub fn format_with_unit(value: f64, unit: &str) -> String {
    if unit.is_empty() {
        format_value(value)
    } else {
        format!("{} {unit}", format_value(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(65.0, "65")]
    #[case(16.2, "16.2")]
    #[case(152.5, "152.5")]
    #[case(0.8, "0.8")]
    #[case(6.68, "6.68")]
    #[case(1.0, "1")]
    fn test_format_value(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_value(value), expected);
    }

    #[test]
    fn test_with_unit() {
        assert_eq!(format_with_unit(16.2, "NTU"), "16.2 NTU");
        assert_eq!(format_with_unit(200.0, "mg/L as CaCO₃"), "200 mg/L as CaCO₃");
    }

    #[test]
    fn test_empty_unit_has_no_trailing_space() {
        assert_eq!(format_with_unit(6.68, ""), "6.68");
    }
}
