//! Metric-prefix formatting for display.

use std::fmt;

use crate::units::Measurement;

/// Prefix table, strictly decreasing by factor.
pub const UNIT_SCALE: [(f64, &str); 9] = [
    (1e12, "T"),
    (1e9, "G"),
    (1e6, "M"),
    (1e3, "k"),
    (1.0, ""),
    (1e-3, "m"),
    (1e-6, "µ"),
    (1e-9, "n"),
    (1e-12, "p"),
];

const SIGNIFICANT_DIGITS: usize = 3;

/// Display text and the (possibly prefixed) unit it is expressed in.
#[derive(serde::Deserialize, serde::Serialize)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FormattedValue {
    pub value: String,
    pub unit: String,
}

impl FormattedValue {
    pub fn new(value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: unit.into(),
        }
    }
}

impl fmt::Display for FormattedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Renders `value` with the largest prefix whose factor does not exceed `|value|`,
/// to three significant digits, with halves rounded away from zero. The scan
/// compares `|value|` already rounded, so a carry moves to the next prefix.
///
/// Zero is shown as `"0"` in the bare base unit. Magnitudes below the pico range
/// fall back to exponent notation with two fractional digits.
pub fn format_with_unit(value: f64, base_unit: &str) -> FormattedValue {
    if value == 0.0 {
        return FormattedValue::new("0", base_unit);
    }

    if !value.is_finite() {
        let text = if value.is_nan() {
            "NaN"
        } else if value.is_sign_negative() {
            "-∞"
        } else {
            "∞"
        };
        return FormattedValue::new(text, base_unit);
    }

    if value.abs() < SMALLEST_FACTOR {
        return FormattedValue::new(to_exponential(value, SIGNIFICANT_DIGITS), base_unit);
    }

    // Select on the rounded magnitude so that 999.7 reads "1 k", not "1000".
    let magnitude = round_significant(value.abs(), SIGNIFICANT_DIGITS);
    for &(factor, prefix) in &UNIT_SCALE {
        if magnitude >= factor {
            let scaled = value / factor;
            return FormattedValue {
                value: to_significant(scaled, SIGNIFICANT_DIGITS),
                unit: format!("{prefix}{base_unit}"),
            };
        }
    }

    FormattedValue::new(to_exponential(value, SIGNIFICANT_DIGITS), base_unit)
}

impl Measurement {
    pub fn format(&self) -> FormattedValue {
        format_with_unit(self.magnitude, self.base_symbol())
    }
}

const SMALLEST_FACTOR: f64 = 1e-12;

/// Enough fractional digits to print any finite `f64` exactly.
const EXACT_DIGITS: usize = 800;

/// Leading `digits` decimal figures of `|x|` and the decimal exponent of the
/// first one, rounded half away from zero on the exact binary value.
fn round_half_up(x: f64, digits: usize) -> (String, i32) {
    let digits = digits.max(1);
    let exact = format!("{:.*e}", EXACT_DIGITS, x.abs());
    let Some((mantissa, exponent)) = exact.split_once('e') else {
        return ("0".repeat(digits), 0);
    };
    let mut exponent: i32 = exponent.parse().unwrap_or(0);
    let all: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    let mut kept = all[..digits.min(all.len())].to_vec();
    kept.resize(digits, b'0');

    if all.get(digits).is_some_and(|&next| next >= b'5') {
        let mut carry = true;
        for figure in kept.iter_mut().rev() {
            if *figure == b'9' {
                *figure = b'0';
            } else {
                *figure += 1;
                carry = false;
                break;
            }
        }
        if carry {
            // 999 -> 1000: keep the width, bump the exponent.
            kept.insert(0, b'1');
            kept.truncate(digits);
            exponent += 1;
        }
    }

    (String::from_utf8(kept).unwrap_or_default(), exponent)
}

fn round_significant(x: f64, digits: usize) -> f64 {
    let (figures, exponent) = round_half_up(x, digits);
    format!("0.{figures}e{}", exponent + 1).parse().unwrap_or(x)
}

/// Exponent notation with `digits` significant figures, e.g. `"4.50e-15"`.
fn to_exponential(x: f64, digits: usize) -> String {
    let (figures, exponent) = round_half_up(x, digits);
    let (lead, rest) = figures.split_at(1);
    let sign = if x.is_sign_negative() { "-" } else { "" };
    if rest.is_empty() {
        format!("{sign}{lead}e{exponent}")
    } else {
        format!("{sign}{lead}.{rest}e{exponent}")
    }
}

/// Rounds to `digits` significant digits and writes the result positionally,
/// dropping trailing zeros that follow a decimal point.
fn to_significant(x: f64, digits: usize) -> String {
    let (figures, exponent) = round_half_up(x, digits);

    let body = if exponent < 0 {
        let leading = "0".repeat((-exponent - 1) as usize);
        format!("0.{leading}{figures}")
    } else {
        let int_len = exponent as usize + 1;
        if int_len >= figures.len() {
            format!("{figures}{}", "0".repeat(int_len - figures.len()))
        } else {
            let (int_part, frac_part) = figures.split_at(int_len);
            format!("{int_part}.{frac_part}")
        }
    };

    let body = if body.contains('.') {
        body.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        body
    };

    if x.is_sign_negative() {
        format!("-{body}")
    } else {
        body
    }
}
