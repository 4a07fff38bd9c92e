//! Unit selections for the calculator inputs and the quantity families it reports.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Raised when a unit symbol coming from text does not name a known unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("unknown capacitance unit `{0}`")]
    UnknownCapacitanceUnit(String),
    #[error("unknown resistance unit `{0}`")]
    UnknownResistanceUnit(String),
}

/// Capacitance unit offered by the capacitance selector.
#[derive(serde::Deserialize, serde::Serialize)]
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub enum CapacitanceUnit {
    Farad,
    Millifarad,
    #[default]
    Microfarad,
    Nanofarad,
    Picofarad,
}

/// Resistance unit offered by the resistance selector.
#[derive(serde::Deserialize, serde::Serialize)]
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub enum ResistanceUnit {
    Ohm,
    #[default]
    Kiloohm,
    Megaohm,
}

impl CapacitanceUnit {
    /// Every unit the capacitance selector offers.
    pub const ALL: [CapacitanceUnit; 5] = [
        CapacitanceUnit::Farad,
        CapacitanceUnit::Millifarad,
        CapacitanceUnit::Microfarad,
        CapacitanceUnit::Nanofarad,
        CapacitanceUnit::Picofarad,
    ];

    /// Multiplier from this unit to farads.
    pub fn factor(self) -> f64 {
        match self {
            CapacitanceUnit::Farad => 1.0,
            CapacitanceUnit::Millifarad => 1e-3,
            CapacitanceUnit::Microfarad => 1e-6,
            CapacitanceUnit::Nanofarad => 1e-9,
            CapacitanceUnit::Picofarad => 1e-12,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CapacitanceUnit::Farad => "F",
            CapacitanceUnit::Millifarad => "mF",
            CapacitanceUnit::Microfarad => "µF",
            CapacitanceUnit::Nanofarad => "nF",
            CapacitanceUnit::Picofarad => "pF",
        }
    }

    pub fn to_farads(self, value: f64) -> f64 {
        value * self.factor()
    }
}

impl ResistanceUnit {
    /// Every unit the resistance selector offers.
    pub const ALL: [ResistanceUnit; 3] = [
        ResistanceUnit::Ohm,
        ResistanceUnit::Kiloohm,
        ResistanceUnit::Megaohm,
    ];

    /// Multiplier from this unit to ohms.
    pub fn factor(self) -> f64 {
        match self {
            ResistanceUnit::Ohm => 1.0,
            ResistanceUnit::Kiloohm => 1e3,
            ResistanceUnit::Megaohm => 1e6,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ResistanceUnit::Ohm => "Ω",
            ResistanceUnit::Kiloohm => "kΩ",
            ResistanceUnit::Megaohm => "MΩ",
        }
    }

    pub fn to_ohms(self, value: f64) -> f64 {
        value * self.factor()
    }
}

impl fmt::Display for CapacitanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for ResistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for CapacitanceUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Micro sign (U+00B5), Greek mu (U+03BC) and plain `u` all mean micro.
        match s.trim() {
            "F" => Ok(CapacitanceUnit::Farad),
            "mF" => Ok(CapacitanceUnit::Millifarad),
            "\u{00b5}F" | "\u{03bc}F" | "uF" => Ok(CapacitanceUnit::Microfarad),
            "nF" => Ok(CapacitanceUnit::Nanofarad),
            "pF" => Ok(CapacitanceUnit::Picofarad),
            other => Err(UnitError::UnknownCapacitanceUnit(other.to_string())),
        }
    }
}

impl FromStr for ResistanceUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Greek omega (U+03A9) and the ohm sign (U+2126) are both accepted.
        match s.trim() {
            "Ω" | "\u{2126}" | "ohm" => Ok(ResistanceUnit::Ohm),
            "kΩ" | "k\u{2126}" | "kohm" => Ok(ResistanceUnit::Kiloohm),
            "MΩ" | "M\u{2126}" | "Mohm" => Ok(ResistanceUnit::Megaohm),
            other => Err(UnitError::UnknownResistanceUnit(other.to_string())),
        }
    }
}

/// The physical quantity a magnitude measures.
#[derive(serde::Deserialize, serde::Serialize)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitFamily {
    Capacitance,
    Resistance,
    Charge,
    Energy,
    Time,
}

impl UnitFamily {
    /// Symbol of the unprefixed SI unit.
    pub fn base_symbol(self) -> &'static str {
        match self {
            UnitFamily::Capacitance => "F",
            UnitFamily::Resistance => "Ω",
            UnitFamily::Charge => "C",
            UnitFamily::Energy => "J",
            UnitFamily::Time => "s",
        }
    }
}

/// A magnitude in base SI units together with what it measures.
#[derive(serde::Deserialize, serde::Serialize)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub magnitude: f64,
    pub family: UnitFamily,
}

impl Measurement {
    pub fn new(magnitude: f64, family: UnitFamily) -> Self {
        Self { magnitude, family }
    }

    pub fn base_symbol(&self) -> &'static str {
        self.family.base_symbol()
    }
}
