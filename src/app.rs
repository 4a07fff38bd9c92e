use capcalc_core::{evaluate, CapacitanceUnit, FieldValues, Readouts, ResistanceUnit};
use egui::{Grid, TextEdit};

const RESULT_LABELS: [&str; 3] = ["Charge (Q)", "Energy (E)", "Time constant (τ)"];

pub struct CalculatorApp {
    fields: FieldValues,
    readouts: Readouts,
}

/// Startup values bundled with the app.
#[derive(serde::Deserialize, serde::Serialize, Debug, Default)]
struct CalculatorDefaults {
    fields: FieldValues,
}

impl CalculatorDefaults {
    fn load() -> Self {
        match ron::from_str(include_str!("defaults.ron")) {
            Ok(defaults) => defaults,
            Err(e) => {
                log::warn!("Bundled defaults are invalid, using built-in values: {e}");
                Self::default()
            }
        }
    }
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::with_fields(CalculatorDefaults::load().fields)
    }
}

impl CalculatorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let inst = Self::default();
        log::info!(
            "Starting with Q = {}, E = {}, τ = {}",
            inst.readouts.charge,
            inst.readouts.energy,
            inst.readouts.time_constant
        );
        inst
    }

    /// Evaluates immediately so the results are never blank.
    fn with_fields(fields: FieldValues) -> Self {
        let readouts = evaluate(&fields);
        Self { fields, readouts }
    }

    fn refresh(&mut self) {
        self.readouts = evaluate(&self.fields);
        log::debug!("{:?} -> {:?}", self.fields, self.readouts);
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("View", |ui| {
                    egui::widgets::global_theme_preference_buttons(ui);
                });
                if ui.button("Reset").clicked() {
                    self.reset();
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut changed = false;

            ui.strong("Inputs");
            Grid::new("inputs").num_columns(3).show(ui, |ui| {
                ui.label("Capacitance");
                changed |= ui
                    .add(TextEdit::singleline(&mut self.fields.capacitance).desired_width(80.0))
                    .changed();
                ui.horizontal(|ui| {
                    for unit in CapacitanceUnit::ALL {
                        changed |= ui
                            .selectable_value(&mut self.fields.capacitance_unit, unit, unit.symbol())
                            .changed();
                    }
                });
                ui.end_row();

                ui.label("Voltage");
                changed |= ui
                    .add(TextEdit::singleline(&mut self.fields.voltage).desired_width(80.0))
                    .changed();
                ui.label("V");
                ui.end_row();

                ui.label("Resistance");
                changed |= ui
                    .add(TextEdit::singleline(&mut self.fields.resistance).desired_width(80.0))
                    .changed();
                ui.horizontal(|ui| {
                    for unit in ResistanceUnit::ALL {
                        changed |= ui
                            .selectable_value(&mut self.fields.resistance_unit, unit, unit.symbol())
                            .changed();
                    }
                });
                ui.end_row();
            });

            if changed {
                self.refresh();
            }

            ui.separator();
            ui.strong("Results");
            Grid::new("results").num_columns(3).striped(true).show(ui, |ui| {
                for (label, readout) in RESULT_LABELS.iter().zip(self.readouts.iter()) {
                    ui.label(*label);
                    ui.monospace(&readout.value);
                    ui.label(&readout.unit);
                    ui.end_row();
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use capcalc_core::FormattedValue;

    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        let defaults: CalculatorDefaults =
            ron::from_str(include_str!("defaults.ron")).expect("defaults.ron");
        assert_eq!(defaults.fields, FieldValues::default());
    }

    #[test]
    fn startup_shows_results() {
        let app = CalculatorApp::default();
        assert_eq!(app.readouts.charge, FormattedValue::new("500", "µC"));
        assert_eq!(app.readouts.energy, FormattedValue::new("1.25", "mJ"));
        assert_eq!(app.readouts.time_constant, FormattedValue::new("1", "s"));
    }

    #[test]
    fn refresh_follows_field_edits() {
        let mut app = CalculatorApp::default();
        app.fields.voltage = "oops".into();
        app.refresh();
        assert_eq!(app.readouts.charge, FormattedValue::new("0", "C"));
        assert_eq!(app.readouts.energy, FormattedValue::new("0", "J"));
        assert_eq!(app.readouts.time_constant, FormattedValue::new("1", "s"));

        app.fields.resistance_unit = ResistanceUnit::Megaohm;
        app.refresh();
        assert_eq!(app.readouts.time_constant, FormattedValue::new("1", "ks"));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut app = CalculatorApp::default();
        app.fields.capacitance = "1".into();
        app.fields.capacitance_unit = CapacitanceUnit::Farad;
        app.refresh();
        app.reset();
        assert_eq!(app.fields, FieldValues::default());
        assert_eq!(app.readouts, evaluate(&FieldValues::default()));
    }
}
