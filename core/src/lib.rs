//! Capacitor charge, stored energy and RC time constant, formatted with
//! automatically chosen metric prefixes.

pub mod calculator;
pub mod fields;
pub mod format;
pub mod readout;
pub mod units;

pub use calculator::{compute, CircuitInputs, CircuitResults};
pub use fields::{parse_number, FieldValues};
pub use format::{format_with_unit, FormattedValue, UNIT_SCALE};
pub use readout::{evaluate, Readouts};
pub use units::{CapacitanceUnit, Measurement, ResistanceUnit, UnitError, UnitFamily};
