//! The calculator window: five scenario input fields, the break-even
//! headline, the cost/revenue chart with its legend, and the monospace
//! derivation block.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use engine::{BreakEvenReport, ScenarioInputs};

use crate::chart;
use crate::formatting;

/// Text buffers backing the five input fields.
///
/// Kept separate from [`ScenarioInputs`] so the user can type transient
/// states ("1.", "-", "") without the parsed value jumping around. Every
/// edit reparses into the scenario, with NaN standing in for unparseable
/// text — the computation carries it through visibly rather than blocking
/// the keystroke.
#[derive(Resource)]
pub struct InputBuffers {
    pub new_plant_cost: String,
    pub rd_cost: String,
    pub marketing_cost: String,
    pub unit_production_cost: String,
    pub price_per_plane: String,
}

impl Default for InputBuffers {
    fn default() -> Self {
        let defaults = ScenarioInputs::default();
        Self {
            new_plant_cost: formatting::fmt_entered(defaults.new_plant_cost),
            rd_cost: formatting::fmt_entered(defaults.rd_cost),
            marketing_cost: formatting::fmt_entered(defaults.marketing_cost),
            unit_production_cost: formatting::fmt_entered(defaults.unit_production_cost),
            price_per_plane: formatting::fmt_entered(defaults.price_per_plane),
        }
    }
}

pub fn calculator_ui(
    mut contexts: EguiContexts,
    mut buffers: ResMut<InputBuffers>,
    mut inputs: ResMut<ScenarioInputs>,
    report: Res<BreakEvenReport>,
) {
    egui::Window::new("Break-Even Calculator")
        .default_size([920.0, 660.0])
        .show(contexts.ctx_mut(), |ui| {
            scenario_fields(ui, &mut buffers, &mut inputs);

            ui.separator();
            ui.vertical_centered(|ui| {
                ui.heading(formatting::fmt_headline(report.break_even_point));
            });

            ui.horizontal(|ui| {
                chart::legend_item(ui, chart::COST_COLOR, "Total Costs");
                ui.add_space(12.0);
                chart::legend_item(ui, chart::REVENUE_COLOR, "Total Revenue");
            });

            let width = ui.available_width().max(320.0);
            chart::draw_break_even_chart(ui, &report.series, width, 340.0);

            ui.separator();
            ui.label(egui::RichText::new("Calculations:").strong());
            ui.label(egui::RichText::new(formatting::derivation_text(&report)).monospace());
        });
}

fn scenario_fields(
    ui: &mut egui::Ui,
    buffers: &mut InputBuffers,
    inputs: &mut ResMut<ScenarioInputs>,
) {
    egui::Grid::new("scenario_inputs")
        .num_columns(2)
        .spacing([16.0, 6.0])
        .show(ui, |ui| {
            // Only write through on an actual edit, so Bevy change detection
            // (and with it the recompute) fires exactly when a field changed.
            if scenario_field(ui, "New plant cost (bn $)", &mut buffers.new_plant_cost) {
                inputs.new_plant_cost = parse_field(&buffers.new_plant_cost);
            }
            if scenario_field(ui, "R&D cost (bn $)", &mut buffers.rd_cost) {
                inputs.rd_cost = parse_field(&buffers.rd_cost);
            }
            if scenario_field(ui, "Marketing cost (bn $)", &mut buffers.marketing_cost) {
                inputs.marketing_cost = parse_field(&buffers.marketing_cost);
            }
            if scenario_field(
                ui,
                "Unit production cost (m $)",
                &mut buffers.unit_production_cost,
            ) {
                inputs.unit_production_cost = parse_field(&buffers.unit_production_cost);
            }
            if scenario_field(ui, "Price per plane (m $)", &mut buffers.price_per_plane) {
                inputs.price_per_plane = parse_field(&buffers.price_per_plane);
            }
        });
}

fn scenario_field(ui: &mut egui::Ui, label: &str, buffer: &mut String) -> bool {
    ui.label(label);
    let response = ui.add(egui::TextEdit::singleline(buffer).desired_width(140.0));
    ui.end_row();
    response.changed()
}

fn parse_field(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}
