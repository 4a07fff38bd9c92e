//! The whole field-to-display transition as one pure function.

use crate::{
    calculator::compute,
    fields::FieldValues,
    format::FormattedValue,
    units::Measurement,
};

/// Text shown in the three output slots.
#[derive(serde::Deserialize, serde::Serialize)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Readouts {
    pub charge: FormattedValue,
    pub energy: FormattedValue,
    pub time_constant: FormattedValue,
}

impl Readouts {
    pub fn iter(&self) -> impl Iterator<Item = &FormattedValue> {
        [&self.charge, &self.energy, &self.time_constant].into_iter()
    }
}

/// Formats one result for its slot. Exact zero is shown as `"0"` in the bare
/// base unit.
pub fn readout(measurement: Measurement) -> FormattedValue {
    if measurement.magnitude == 0.0 {
        FormattedValue::new("0", measurement.base_symbol())
    } else {
        measurement.format()
    }
}

/// Parses the fields, computes the circuit and formats every result.
pub fn evaluate(fields: &FieldValues) -> Readouts {
    let [charge, energy, time_constant] = compute(&fields.to_inputs()).measurements();

    Readouts {
        charge: readout(charge),
        energy: readout(energy),
        time_constant: readout(time_constant),
    }
}
