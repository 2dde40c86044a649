// Decimal rendering of f64 amounts: half-away-from-zero rounding and thousands grouping
use rust_decimal::{Decimal, RoundingStrategy};

/// An amount split into sign, integer digits and fraction digits, already rounded.
///
/// Rounding works on the shortest round-trip decimal form of the value
/// (what `{}` prints), not on its exact binary expansion, so `1.005` rounds
/// to `1.01`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundedDecimal {
    pub negative: bool,
    pub integer: String,
    pub fraction: String,
}

impl RoundedDecimal {
    /// Rounds `value` half away from zero to `digits` fraction digits.
    ///
    /// `value` must be finite. A result that is all zeros is never negative.
    /// Magnitudes `Decimal` cannot hold (above ~7.9e28) are rounded on the
    /// digit string instead.
    pub fn new(value: f64, digits: usize) -> Self {
        let repr = format!("{}", value.abs());
        let (integer, fraction) = match repr.parse::<Decimal>() {
            Ok(d) => round_decimal(d, digits),
            Err(_) => round_digits(&repr, digits),
        };
        let is_zero = integer.bytes().chain(fraction.bytes()).all(|d| d == b'0');

        Self {
            negative: value.is_sign_negative() && !is_zero,
            integer,
            fraction,
        }
    }

    /// Integer digits with `separator` between groups of three.
    pub fn grouped_integer(&self, separator: char) -> String {
        group_thousands(&self.integer, separator)
    }
}

fn round_decimal(value: Decimal, digits: usize) -> (String, String) {
    let rounded = value.round_dp_with_strategy(digits as u32, RoundingStrategy::MidpointAwayFromZero);
    let repr = rounded.to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let mut fraction = frac_part.to_string();
    fraction.truncate(digits);
    while fraction.len() < digits {
        fraction.push('0');
    }
    (int_part.to_string(), fraction)
}

fn round_digits(repr: &str, digits: usize) -> (String, String) {
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr, ""));

    let mut all: Vec<u8> = int_part.bytes().collect();
    let round_up = frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5');
    all.extend(frac_part.bytes().take(digits));
    all.resize(int_part.len() + digits, b'0');

    if round_up {
        increment(&mut all);
    }

    let split = all.len() - digits;
    (
        String::from_utf8_lossy(&all[..split]).into_owned(),
        String::from_utf8_lossy(&all[split..]).into_owned(),
    )
}

// Adds one unit in the last place, carrying leftwards; grows by a digit on overflow.
fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

pub fn group_thousands(integer: &str, separator: char) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: f64, digits: usize) -> String {
        let r = RoundedDecimal::new(value, digits);
        let sign = if r.negative { "-" } else { "" };
        if digits == 0 {
            format!("{}{}", sign, r.grouped_integer(','))
        } else {
            format!("{}{}.{}", sign, r.grouped_integer(','), r.fraction)
        }
    }

    #[test]
    fn test_pads_fraction() {
        assert_eq!(render(1234.5, 2), "1,234.50");
        assert_eq!(render(7.0, 2), "7.00");
        assert_eq!(render(0.0, 2), "0.00");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(render(1.005, 2), "1.01");
        assert_eq!(render(2.675, 2), "2.68");
        assert_eq!(render(-1.005, 2), "-1.01");
        assert_eq!(render(0.125, 2), "0.13");
        assert_eq!(render(0.124, 2), "0.12");
    }

    #[test]
    fn test_carry_propagates() {
        assert_eq!(render(9.999, 2), "10.00");
        assert_eq!(render(999999.995, 2), "1,000,000.00");
        assert_eq!(render(0.5, 0), "1");
    }

    #[test]
    fn test_zero_is_never_negative() {
        assert_eq!(render(-0.0, 2), "0.00");
        assert_eq!(render(-0.001, 2), "0.00");
        assert_eq!(render(-0.005, 2), "-0.01");
    }

    #[test]
    fn test_large_and_tiny_values() {
        assert_eq!(render(1e15, 2), "1,000,000,000,000,000.00");
        assert_eq!(render(1e-7, 2), "0.00");
        assert_eq!(render(123.4567, 3), "123.457");
    }

    #[test]
    fn test_beyond_decimal_range_uses_digit_rounding() {
        assert_eq!(render(1e30, 2), "1,000,000,000,000,000,000,000,000,000,000.00");
        assert_eq!(render(-1e30, 0), "-1,000,000,000,000,000,000,000,000,000,000");
        assert_eq!(round_digits("99.995", 2), ("100".to_string(), "00".to_string()));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", ','), "1");
        assert_eq!(group_thousands("123", ','), "123");
        assert_eq!(group_thousands("1234", ','), "1,234");
        assert_eq!(group_thousands("1234567", ','), "1,234,567");
    }
}
