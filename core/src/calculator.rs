use crate::units::{CapacitanceUnit, Measurement, ResistanceUnit, UnitFamily};

/// Numeric inputs in the units the user selected.
#[derive(serde::Deserialize, serde::Serialize)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircuitInputs {
    pub capacitance: f64,
    pub capacitance_unit: CapacitanceUnit,
    /// Volts
    pub voltage: f64,
    pub resistance: f64,
    pub resistance_unit: ResistanceUnit,
}

/// Charge (C), stored energy (J) and RC time constant (s).
#[derive(serde::Deserialize, serde::Serialize)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CircuitResults {
    pub charge: f64,
    pub energy: f64,
    pub time_constant: f64,
}

impl CircuitResults {
    /// Results in display order: charge, energy, time constant.
    pub fn measurements(&self) -> [Measurement; 3] {
        [
            Measurement::new(self.charge, UnitFamily::Charge),
            Measurement::new(self.energy, UnitFamily::Energy),
            Measurement::new(self.time_constant, UnitFamily::Time),
        ]
    }
}

/// Anything that is not a finite positive number becomes zero.
pub fn sanitize_positive(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Anything that is not a finite non-negative number becomes zero.
pub fn sanitize_non_negative(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

/// Q = CV, E = CV²/2, τ = RC, after clamping the inputs to their valid domains.
pub fn compute(inputs: &CircuitInputs) -> CircuitResults {
    let capacitance = inputs
        .capacitance_unit
        .to_farads(sanitize_positive(inputs.capacitance));
    let voltage = sanitize_non_negative(inputs.voltage);
    let resistance = inputs
        .resistance_unit
        .to_ohms(sanitize_positive(inputs.resistance));

    CircuitResults {
        charge: capacitance * voltage,
        energy: 0.5 * capacitance * voltage * voltage,
        time_constant: resistance * capacitance,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn inputs(capacitance: f64, voltage: f64, resistance: f64) -> CircuitInputs {
        CircuitInputs {
            capacitance,
            capacitance_unit: CapacitanceUnit::Microfarad,
            voltage,
            resistance,
            resistance_unit: ResistanceUnit::Kiloohm,
        }
    }

    #[test]
    fn reference_circuit() {
        let out = compute(&inputs(100.0, 5.0, 10.0));
        assert_relative_eq!(out.charge, 5e-4, max_relative = 1e-12);
        assert_relative_eq!(out.energy, 1.25e-3, max_relative = 1e-12);
        assert_relative_eq!(out.time_constant, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn base_units_pass_through() {
        let out = compute(&CircuitInputs {
            capacitance: 2.0,
            capacitance_unit: CapacitanceUnit::Farad,
            voltage: 3.0,
            resistance: 4.0,
            resistance_unit: ResistanceUnit::Ohm,
        });
        assert_eq!(
            out,
            CircuitResults {
                charge: 6.0,
                energy: 9.0,
                time_constant: 8.0,
            }
        );
    }

    #[test]
    fn zero_capacitance_or_resistance_gives_zero_tau() {
        assert_eq!(compute(&inputs(0.0, 5.0, 10.0)).time_constant, 0.0);
        assert_eq!(compute(&inputs(100.0, 5.0, 0.0)).time_constant, 0.0);
        assert_eq!(compute(&inputs(100.0, 0.0, 0.0)).time_constant, 0.0);
    }

    #[test]
    fn voltage_does_not_affect_tau() {
        let low = compute(&inputs(47.0, 1.0, 2.2));
        let high = compute(&inputs(47.0, 400.0, 2.2));
        assert_eq!(low.time_constant, high.time_constant);
    }

    #[test]
    fn charge_and_energy_are_monotonic_in_voltage() {
        let mut last = compute(&inputs(10.0, 0.0, 1.0));
        for step in 1..200 {
            let next = compute(&inputs(10.0, step as f64 * 0.37, 1.0));
            assert!(next.charge >= last.charge);
            assert!(next.energy >= last.energy);
            last = next;
        }
    }

    #[test]
    fn invalid_inputs_clamp_to_zero() {
        for bad in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(compute(&inputs(bad, bad, bad)), CircuitResults::default());
        }
        let out = compute(&inputs(100.0, -5.0, 10.0));
        assert_eq!(out.charge, 0.0);
        assert_eq!(out.energy, 0.0);
        assert_relative_eq!(out.time_constant, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn sanitizers() {
        assert_eq!(sanitize_positive(0.0), 0.0);
        assert_eq!(sanitize_positive(-0.5), 0.0);
        assert_eq!(sanitize_positive(0.5), 0.5);
        assert_eq!(sanitize_non_negative(0.0), 0.0);
        assert_eq!(sanitize_non_negative(-0.5), 0.0);
        assert_eq!(sanitize_non_negative(f64::NAN), 0.0);
        assert_eq!(sanitize_non_negative(12.0), 12.0);
    }

    #[test]
    fn measurements_are_in_display_order() {
        let [q, e, tau] = compute(&inputs(100.0, 5.0, 10.0)).measurements();
        assert_eq!(q.family, UnitFamily::Charge);
        assert_eq!(e.family, UnitFamily::Energy);
        assert_eq!(tau.family, UnitFamily::Time);
    }
}
