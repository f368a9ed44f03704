//! Widgets generated from parameter descriptors.

use nx_core::{CurrentValues, ParamDescriptor, ParamSet, ParamValue};

/// Draw one widget row per descriptor; returns the values the user changed
/// this frame.
pub fn show(
    ui: &mut egui::Ui,
    params: &ParamSet,
    values: &CurrentValues,
) -> Vec<(String, ParamValue)> {
    let mut changes = Vec::new();
    egui::Grid::new("parameters")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            for (name, descriptor) in params {
                ui.label(descriptor.label());
                let changed = match descriptor {
                    ParamDescriptor::Numeric(p) => {
                        let mut value = values.number(name).unwrap_or(p.default);
                        let mut changed = false;
                        ui.horizontal(|ui| {
                            let slider = egui::Slider::new(&mut value, p.start..=p.stop)
                                .step_by(p.step)
                                .show_value(false);
                            changed |= ui.add(slider).changed();
                            let mut drag = egui::DragValue::new(&mut value)
                                .range(p.start..=p.stop)
                                .speed(p.step);
                            if p.integral {
                                drag = drag.fixed_decimals(0);
                            }
                            changed |= ui.add(drag).changed();
                        });
                        changed.then(|| ParamValue::Number(p.clamp(value)))
                    }
                    ParamDescriptor::Enumerated(p) => {
                        let current = values.choice(name).unwrap_or(&p.default);
                        let mut selected = None;
                        egui::ComboBox::from_id_salt(name)
                            .selected_text(current)
                            .show_ui(ui, |ui| {
                                for choice in &p.values {
                                    if ui.selectable_label(choice == current, choice).clicked()
                                        && choice != current
                                    {
                                        selected = Some(choice.clone());
                                    }
                                }
                            });
                        selected.map(ParamValue::Choice)
                    }
                };
                if let Some(value) = changed {
                    changes.push((name.to_string(), value));
                }
                ui.end_row();
            }
        });
    changes
}
