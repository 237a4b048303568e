use std::fmt;

/// Money is represented as integer cents so that balance checks compare exactly.
/// 1 unit = 100 cents, so 50.00 = 5000 cents.
pub type Cents = i64;

/// Sum of many `Cents`. Wide enough that no in-memory list of entries can overflow it.
pub type Total = i128;

/// Format cents as a two-decimal string.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: impl Into<Total>) -> String {
    let cents = cents.into();
    let sign = if cents < 0 { "-" } else { "" };
    format!("{}{}", sign, format_magnitude(cents))
}

/// Format cents with an explicit sign, as shown next to ledger entries.
/// Example: 5000 -> "+50.00", -1234 -> "-12.34", 0 -> "+0.00"
pub fn format_signed_cents(cents: impl Into<Total>) -> String {
    let cents = cents.into();
    let sign = if cents < 0 { "-" } else { "+" };
    format!("{}{}", sign, format_magnitude(cents))
}

fn format_magnitude(cents: Total) -> String {
    let abs_cents = cents.unsigned_abs();
    format!("{}.{:02}", abs_cents / 100, abs_cents % 100)
}

/// Parse a decimal string into cents.
///
/// Accepts an optional sign, whole units, an optional fractional part and an
/// optional exponent: "50.00" -> 5000, "+12.5" -> 1250, ".5" -> 50,
/// "1e3" -> 100000, "2.5E-1" -> 25. Digits may be grouped with single
/// underscores ("1_000"). Digits past the second decimal place round half
/// away from zero.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let (negative, body) = split_sign(input);

    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };

    let (units_str, decimal_str) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if units_str.is_empty() && decimal_str.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }
    let units = digit_group(units_str)?;
    let fraction = digit_group(decimal_str)?;
    let exponent = match exponent {
        Some(exp) => parse_exponent(exp)?,
        None => 0,
    };

    let digits: Vec<i64> = units.iter().chain(&fraction).copied().collect();
    if digits.iter().all(|&d| d == 0) {
        return Ok(0);
    }

    // Number of leading digits at or above the hundredths position
    let kept = i64::try_from(units.len())
        .unwrap_or(i64::MAX)
        .saturating_add(exponent)
        .saturating_add(2);
    let digit_at = |i: i64| {
        usize::try_from(i)
            .ok()
            .and_then(|i| digits.get(i))
            .copied()
            .unwrap_or(0)
    };

    let mut cents: Cents = 0;
    for i in 0..kept.max(0) {
        cents = cents
            .checked_mul(10)
            .and_then(|c| c.checked_add(digit_at(i)))
            .ok_or(ParseCentsError::Overflow)?;
    }
    let round_up = kept >= 0 && digit_at(kept) >= 5;
    let cents = cents
        .checked_add(i64::from(round_up))
        .ok_or(ParseCentsError::Overflow)?;

    Ok(if negative { -cents } else { cents })
}

fn split_sign(input: &str) -> (bool, &str) {
    match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    }
}

/// Decimal digits with optional single underscores between them.
fn digit_group(s: &str) -> Result<Vec<i64>, ParseCentsError> {
    if s.starts_with('_') || s.ends_with('_') || s.contains("__") {
        return Err(ParseCentsError::InvalidFormat);
    }
    s.bytes()
        .filter(|&b| b != b'_')
        .map(|b| {
            if b.is_ascii_digit() {
                Ok(i64::from(b - b'0'))
            } else {
                Err(ParseCentsError::InvalidFormat)
            }
        })
        .collect()
}

fn parse_exponent(s: &str) -> Result<i64, ParseCentsError> {
    let (negative, digits) = split_sign(s);
    if digits.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }
    let magnitude = digit_group(digits)?
        .into_iter()
        .fold(0i64, |exp, d| exp.saturating_mul(10).saturating_add(d));
    Ok(if negative { -magnitude } else { magnitude })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    InvalidFormat,
    Overflow,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::InvalidFormat => write!(f, "invalid money format"),
            ParseCentsError::Overflow => write!(f, "amount out of range"),
        }
    }
}

impl std::error::Error for ParseCentsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(5000), "50.00");
        assert_eq!(format_cents(1234), "12.34");
        assert_eq!(format_cents(1), "0.01");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(-5000), "-50.00");
        assert_eq!(format_cents(-1), "-0.01");
    }

    #[test]
    fn test_format_totals_beyond_cents_range() {
        let total = Total::from(i64::MAX) + 1;
        assert_eq!(format_cents(total), "92233720368547758.08");
    }

    #[test]
    fn test_format_signed_cents() {
        assert_eq!(format_signed_cents(10000), "+100.00");
        assert_eq!(format_signed_cents(-550), "-5.50");
        assert_eq!(format_signed_cents(0), "+0.00");
        assert_eq!(format_signed_cents(i64::MIN), "-92233720368547758.08");
    }

    #[test]
    fn test_parse_cents() {
        assert_eq!(parse_cents("50.00"), Ok(5000));
        assert_eq!(parse_cents("50"), Ok(5000));
        assert_eq!(parse_cents("12.34"), Ok(1234));
        assert_eq!(parse_cents("12.5"), Ok(1250));
        assert_eq!(parse_cents("0.01"), Ok(1));
        assert_eq!(parse_cents(".50"), Ok(50));
        assert_eq!(parse_cents("7."), Ok(700));
        assert_eq!(parse_cents("-50.00"), Ok(-5000));
        assert_eq!(parse_cents("+3.10"), Ok(310));
        assert_eq!(parse_cents("  42.42  "), Ok(4242));
    }

    #[test]
    fn test_parse_cents_negative_zero_is_zero() {
        assert_eq!(parse_cents("-0.00"), Ok(0));
        assert_eq!(parse_cents("-0e5"), Ok(0));
    }

    #[test]
    fn test_parse_cents_exponent() {
        assert_eq!(parse_cents("1e3"), Ok(100000));
        assert_eq!(parse_cents("1E3"), Ok(100000));
        assert_eq!(parse_cents("2.5e+2"), Ok(25000));
        assert_eq!(parse_cents("2.5E-1"), Ok(25));
        assert_eq!(parse_cents("1e-2"), Ok(1));
        assert_eq!(parse_cents("5e-3"), Ok(1));
        assert_eq!(parse_cents("4e-3"), Ok(0));
        assert_eq!(parse_cents("-1.5e1"), Ok(-1500));
        assert_eq!(parse_cents("1e-999999999999999999999"), Ok(0));
        assert_eq!(parse_cents("0e999999999999999999999"), Ok(0));
    }

    #[test]
    fn test_parse_cents_underscore_groups() {
        assert_eq!(parse_cents("1_000"), Ok(100000));
        assert_eq!(parse_cents("1_000.2_5"), Ok(100025));
        assert_eq!(parse_cents("1e1_0"), Ok(1_000_000_000_000));
    }

    #[test]
    fn test_parse_cents_rounds_extra_digits() {
        assert_eq!(parse_cents("100.994"), Ok(10099));
        assert_eq!(parse_cents("100.995"), Ok(10100));
        assert_eq!(parse_cents("-0.005"), Ok(-1));
        assert_eq!(parse_cents("0.0049"), Ok(0));
    }

    #[test]
    fn test_parse_cents_invalid() {
        let inputs = [
            "", " ", "abc", "12.34.56", "-", "+", ".", "--5", "nan", "inf", "infinity",
            "1,000", "5 0", "e5", "1e", "1e+", ".e1", "_1", "1_", "1__0", "1_.5", "1e_5",
        ];
        for input in inputs {
            assert_eq!(
                parse_cents(input),
                Err(ParseCentsError::InvalidFormat),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_cents_overflow() {
        assert_eq!(
            parse_cents("99999999999999999999"),
            Err(ParseCentsError::Overflow)
        );
        assert_eq!(
            parse_cents("92233720368547758.08"),
            Err(ParseCentsError::Overflow)
        );
        assert_eq!(parse_cents("1e999999999999"), Err(ParseCentsError::Overflow));
    }
}
