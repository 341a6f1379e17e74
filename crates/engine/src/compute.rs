//! The break-even computation: derived figures, headline rounding, and the
//! cost/revenue chart series.
//!
//! Everything here is a pure function of [`ScenarioInputs`]. Degenerate
//! scenarios (zero or negative profit per plane, NaN inputs) produce
//! non-finite figures rather than errors; the presentation layer decides
//! how to flag them.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{BN_TO_M, CHART_SAMPLES};
use crate::scenario::ScenarioInputs;

/// Figures derived from the inputs before the headline rounding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedFigures {
    /// Plant + R&D + marketing, in billions.
    pub fixed_costs: f64,
    /// Selling price minus unit production cost, in millions.
    pub profit_per_plane: f64,
    /// Fixed costs (scaled to millions) divided by per-plane profit.
    /// Fractional, negative, and non-finite values are all representable.
    pub break_even_raw: f64,
}

/// One point of the cost/revenue chart.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSample {
    /// Production volume, rounded to whole planes for display.
    pub units: u32,
    /// Fixed costs plus variable costs at this volume, in millions.
    pub total_costs: f64,
    /// Sales revenue at this volume, in millions.
    pub total_revenue: f64,
}

/// Everything one recomputation produces: the inputs it was computed from,
/// the intermediate figures, the headline break-even point (raw figure
/// rounded up at the tenths digit), and the chart series.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenReport {
    pub inputs: ScenarioInputs,
    pub derived: DerivedFigures,
    pub break_even_point: f64,
    pub series: Vec<ChartSample>,
}

impl Default for BreakEvenReport {
    fn default() -> Self {
        compute(&ScenarioInputs::default())
    }
}

/// Computes the full report for one scenario.
pub fn compute(inputs: &ScenarioInputs) -> BreakEvenReport {
    let fixed_costs = inputs.new_plant_cost + inputs.rd_cost + inputs.marketing_cost;
    let profit_per_plane = inputs.price_per_plane - inputs.unit_production_cost;
    let break_even_raw = fixed_costs * BN_TO_M / profit_per_plane;

    // Round up at the tenths digit. Non-finite values pass through under
    // IEEE semantics: ceil(inf) = inf, ceil(NaN) = NaN.
    let break_even_point = (break_even_raw * 10.0).ceil() / 10.0;

    BreakEvenReport {
        inputs: *inputs,
        derived: DerivedFigures {
            fixed_costs,
            profit_per_plane,
            break_even_raw,
        },
        break_even_point,
        series: build_series(fixed_costs, break_even_raw, inputs),
    }
}

/// Samples the cost and revenue lines at [`CHART_SAMPLES`] evenly spaced
/// volumes from zero to twice the break-even figure, by direct interpolation.
///
/// Scenarios with a non-finite or non-positive break-even volume collapse to
/// the single zero-volume sample, so the builder terminates for every input.
fn build_series(
    fixed_costs: f64,
    break_even_raw: f64,
    inputs: &ScenarioInputs,
) -> Vec<ChartSample> {
    let span = break_even_raw * 2.0;
    let count = if span.is_finite() && span > 0.0 {
        CHART_SAMPLES
    } else {
        1
    };

    (0..count)
        .map(|k| {
            // k == 0 is pinned to exactly zero so the degenerate single-sample
            // case never multiplies a non-finite span.
            let volume = if k == 0 {
                0.0
            } else {
                span * k as f64 / (CHART_SAMPLES - 1) as f64
            };
            ChartSample {
                units: volume.round() as u32,
                total_costs: fixed_costs * BN_TO_M + volume * inputs.unit_production_cost,
                total_revenue: volume * inputs.price_per_plane,
            }
        })
        .collect()
}
