//! Significant-digit number rendering.

/// Format `value` with `digits` significant digits in `%g` style.
///
/// Trailing zeros are trimmed; scientific notation (`1.23e+03`) is used when
/// the decimal exponent is below -4 or at least `digits`. Returns `None` for
/// NaN and infinities.
pub fn format_significant(value: f64, digits: usize) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let digits = digits.max(1);
    if value == 0.0 {
        return Some("0".to_string());
    }

    // Round once through scientific notation to learn the decimal exponent.
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = scientific.split_once('e')?;
    let exponent: i32 = exponent.parse().ok()?;

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        return Some(format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.abs()
        ));
    }

    let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
    Some(trim_fraction(&format!("{:.*}", decimals, value)).to_string())
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g3(value: f64) -> String {
        format_significant(value, 3).unwrap()
    }

    #[test]
    fn test_fixed_notation() {
        assert_eq!(g3(85.5), "85.5");
        assert_eq!(g3(92.333), "92.3");
        assert_eq!(g3(100.0), "100");
        assert_eq!(g3(7.0), "7");
        assert_eq!(g3(0.5), "0.5");
        assert_eq!(g3(-12.34), "-12.3");
    }

    #[test]
    fn test_rounding_carries_into_exponent() {
        assert_eq!(g3(99.96), "100");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(g3(1234.0), "1.23e+03");
        assert_eq!(g3(0.00001234), "1.23e-05");
        assert_eq!(g3(1000.0), "1e+03");
    }

    #[test]
    fn test_zero_and_non_finite() {
        assert_eq!(g3(0.0), "0");
        assert!(format_significant(f64::NAN, 3).is_none());
        assert!(format_significant(f64::INFINITY, 3).is_none());
    }
}
