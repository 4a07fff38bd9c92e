//! Text form fields and how their contents become numbers.

use crate::{
    calculator::CircuitInputs,
    units::{CapacitanceUnit, ResistanceUnit},
};

/// Raw contents of the five input controls.
#[derive(serde::Deserialize, serde::Serialize)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldValues {
    pub capacitance: String,
    pub capacitance_unit: CapacitanceUnit,
    pub voltage: String,
    pub resistance: String,
    pub resistance_unit: ResistanceUnit,
}

impl Default for FieldValues {
    fn default() -> Self {
        Self {
            capacitance: "100".into(),
            capacitance_unit: CapacitanceUnit::Microfarad,
            voltage: "5".into(),
            resistance: "10".into(),
            resistance_unit: ResistanceUnit::Kiloohm,
        }
    }
}

impl FieldValues {
    /// Unparseable text becomes NaN here and is zeroed by the calculator.
    pub fn to_inputs(&self) -> CircuitInputs {
        CircuitInputs {
            capacitance: parse_number(&self.capacitance),
            capacitance_unit: self.capacitance_unit,
            voltage: parse_number(&self.voltage),
            resistance: parse_number(&self.resistance),
            resistance_unit: self.resistance_unit,
        }
    }
}

/// Reads the longest leading decimal literal of `text`, the way browsers read
/// number fields with `parseFloat`.
///
/// Leading whitespace is skipped and anything after the literal is ignored, so
/// `"12abc"` reads as 12. Text with no leading literal reads as NaN.
pub fn parse_number(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if mantissa_digits + (frac_end - frac_start) > 0 {
            mantissa_digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    // An exponent only counts if at least one digit follows it.
    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}
