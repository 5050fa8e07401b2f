//! Operand evaluation and number formatting.
//!
//! Operands travel through the engine as decimal text. They are parsed into
//! `f64` only long enough to combine them, and results are rounded to
//! [`SIGNIFICANT_DIGITS`] before being rendered back to text.

use super::error::{CalcError, Result};
use super::key::Operator;

/// Precision that results are rounded to before display.
pub const SIGNIFICANT_DIGITS: usize = 15;

/// Magnitudes at or above this are rendered in exponent form.
const EXPONENT_ABOVE: f64 = 1e21;
/// Non-zero magnitudes below this are rendered in exponent form.
const EXPONENT_BELOW: f64 = 1e-6;

/// Combine two operands with `op`.
///
/// Returns the formatted result, or the reason the calculation failed.
pub fn evaluate(left: &str, op: Operator, right: &str) -> Result<String> {
    let lhs = parse_operand(left)?;
    let rhs = parse_operand(right)?;

    let value = match op {
        Operator::Add => lhs + rhs,
        Operator::Sub => lhs - rhs,
        Operator::Mul => lhs * rhs,
        Operator::Div => {
            if rhs == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            lhs / rhs
        }
    };

    format_number(value)
}

/// Divide the displayed value by 100.
pub fn percent_of(display: &str) -> Result<String> {
    format_number(parse_operand(display)? / 100.0)
}

/// Parse decimal operand text, rejecting anything that is not a finite number.
pub fn parse_operand(text: &str) -> Result<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CalcError::parse(text))
}

/// Round to [`SIGNIFICANT_DIGITS`] and render the shortest text that
/// round-trips to the rounded value.
pub fn format_number(value: f64) -> Result<String> {
    let rounded = round_significant(value);
    if !rounded.is_finite() {
        return Err(CalcError::NonFinite);
    }

    // Also folds -0 into "0".
    if rounded == 0.0 {
        return Ok("0".to_string());
    }

    let magnitude = rounded.abs();
    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        Ok(format!("{:e}", rounded))
    } else {
        Ok(rounded.to_string())
    }
}

fn round_significant(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value)
        .parse()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_evaluation() {
        assert_eq!(evaluate("7", Operator::Add, "3").unwrap(), "10");
        assert_eq!(evaluate("8", Operator::Sub, "2").unwrap(), "6");
        assert_eq!(evaluate("6", Operator::Mul, "7").unwrap(), "42");
        assert_eq!(evaluate("1", Operator::Div, "4").unwrap(), "0.25");
    }

    #[test]
    fn test_rounds_float_noise() {
        assert_eq!(evaluate("0.1", Operator::Add, "0.2").unwrap(), "0.3");
        assert_eq!(evaluate("1.1", Operator::Mul, "3").unwrap(), "3.3");
    }

    #[test]
    fn test_repeating_decimal() {
        let result = evaluate("1", Operator::Div, "3").unwrap();
        assert!(result.starts_with("0.333"));
        let value: f64 = result.parse().unwrap();
        assert!((value - 1.0 / 3.0).abs() < 1e-14);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            evaluate("1", Operator::Div, "0"),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            evaluate("1", Operator::Div, "-0"),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            evaluate("5", Operator::Div, "0."),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_invalid_operand() {
        assert_eq!(
            evaluate("Error", Operator::Add, "1"),
            Err(CalcError::parse("Error"))
        );
        assert!(matches!(
            evaluate("1", Operator::Add, "-"),
            Err(CalcError::Parse(_))
        ));
        assert!(matches!(
            evaluate("inf", Operator::Add, "1"),
            Err(CalcError::Parse(_))
        ));
    }

    #[test]
    fn test_overflow_is_an_error() {
        assert_eq!(
            evaluate("1e308", Operator::Mul, "10"),
            Err(CalcError::NonFinite)
        );
    }

    #[test]
    fn test_trailing_decimal_point_operand() {
        assert_eq!(evaluate("2.", Operator::Add, "3").unwrap(), "5");
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        assert_eq!(evaluate("-0", Operator::Mul, "5").unwrap(), "0");
        assert_eq!(format_number(-0.0).unwrap(), "0");
    }

    #[test]
    fn test_large_and_small_magnitudes() {
        assert_eq!(format_number(123456789012345.0).unwrap(), "123456789012345");
        assert_eq!(format_number(1e21).unwrap(), "1e21");
        assert_eq!(format_number(0.000001).unwrap(), "0.000001");
        assert_eq!(format_number(1.5e-7).unwrap(), "1.5e-7");
    }

    #[test]
    fn test_rounds_to_fifteen_significant_digits() {
        let result = format_number(1234567.891234567891).unwrap();
        assert_eq!(result, "1234567.89123457");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent_of("2").unwrap(), "0.02");
        assert_eq!(percent_of("-50").unwrap(), "-0.5");
        assert_eq!(percent_of("0").unwrap(), "0");
        assert!(percent_of("Error").is_err());
    }
}
