use crate::models::Savings;

const NOT_AVAILABLE: &str = "n/a";

/// Two decimal places, no grouping: `6393.587` becomes `"6393.59"`.
/// Exact ties round away from zero, as `Number.prototype.toFixed` does.
pub fn fixed2(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}", sign, round_half_up(value.abs(), 2))
}

/// `value` (non-negative) rounded to `places` decimals, ties upward.
///
/// `{:.N}` rounds exact binary ties to even. Thirty digits are enough to
/// tell an exact tie from its nearest neighbouring doubles.
fn round_half_up(value: f64, places: usize) -> String {
    let long = format!("{:.30}", value);
    let (whole, frac) = long.split_once('.').unwrap_or((long.as_str(), ""));
    let mut digits: Vec<u8> = whole.bytes().chain(frac.bytes().take(places)).collect();
    let round_up = frac.as_bytes().get(places).is_some_and(|d| *d >= b'5');

    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - places;
    let (int_part, frac_part) = digits.split_at(split);
    let int_part = String::from_utf8_lossy(int_part);
    if places == 0 {
        int_part.into_owned()
    } else {
        format!("{}.{}", int_part, String::from_utf8_lossy(frac_part))
    }
}

/// Currency with thousands separators: `6393.59` becomes `"$6,393.59"`.
pub fn currency(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let fixed = round_half_up(value.abs(), 2);
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, group_thousands(whole), frac)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// A `[0, 1]` fraction as a percentage with one decimal: `0.95` becomes `"95.0%"`.
pub fn percent(fraction: f64) -> String {
    if !fraction.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{:.1}%", fraction * 100.0)
}

/// Amounts get two decimals; preformatted text is reproduced as given.
pub fn savings(value: &Savings) -> String {
    match value {
        Savings::Amount(v) => fixed2(*v),
        Savings::Text(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed2_rounds() {
        assert_eq!(fixed2(6393.587), "6393.59");
        assert_eq!(fixed2(1278.72), "1278.72");
        assert_eq!(fixed2(651.4), "651.40");
        assert_eq!(fixed2(0.0), "0.00");
    }

    #[test]
    fn test_fixed2_ties_round_up() {
        assert_eq!(fixed2(0.125), "0.13");
        assert_eq!(fixed2(1234.625), "1234.63");
        assert_eq!(fixed2(0.375), "0.38");
        assert_eq!(fixed2(-0.125), "-0.13");
        assert_eq!(fixed2(9.995), "9.99");
        assert_eq!(fixed2(99.999), "100.00");
    }

    #[test]
    fn test_fixed2_non_finite() {
        assert_eq!(fixed2(f64::NAN), "n/a");
        assert_eq!(fixed2(f64::INFINITY), "n/a");
    }

    #[test]
    fn test_currency_grouping() {
        assert_eq!(currency(6393.59, "$"), "$6,393.59");
        assert_eq!(currency(1234567.891, "$"), "$1,234,567.89");
        assert_eq!(currency(999.999, "$"), "$1,000.00");
        assert_eq!(currency(12.5, "€"), "€12.50");
        assert_eq!(currency(0.0, "$"), "$0.00");
        assert_eq!(currency(1234.625, "$"), "$1,234.63");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(currency(-1000.0, "$"), "-$1,000.00");
        assert_eq!(currency(-0.001, "$"), "$0.00");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0.95), "95.0%");
        assert_eq!(percent(1.0), "100.0%");
        assert_eq!(percent(0.0), "0.0%");
    }

    #[test]
    fn test_savings_text_verbatim() {
        assert_eq!(savings(&Savings::Text("$1,278.72".into())), "$1,278.72");
        assert_eq!(savings(&Savings::Text("12.5%".into())), "12.5%");
        assert_eq!(savings(&Savings::Amount(651.44)), "651.44");
    }
}
