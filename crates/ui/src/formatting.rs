//! Formatting helpers for the calculator panel: headline, axis amounts,
//! and the three-step derivation block.

use engine::config::BN_TO_M;
use engine::BreakEvenReport;

/// Headline break-even figure at one decimal. Degenerate scenarios are
/// flagged instead of printing "inf"/"NaN" at the top of the window.
pub fn fmt_headline(break_even_point: f64) -> String {
    if break_even_point.is_finite() {
        format!("Break-Even Point: {:.1} planes", break_even_point)
    } else {
        "Break-Even Point: N/A (no profit per plane)".to_string()
    }
}

/// Minimal display of a value as the user entered it ("105", "1.25").
pub fn fmt_entered(value: f64) -> String {
    format!("{value}")
}

/// Axis/readout label for dollar amounts expressed in millions.
pub fn fmt_amount(millions: f64) -> String {
    if millions.abs() >= 1000.0 {
        format!("${:.1}bn", millions / 1000.0)
    } else {
        format!("${millions:.0}m")
    }
}

/// The monospace derivation block shown next to the chart.
///
/// Precision follows the entry form: plant and R&D at two decimals,
/// marketing at three; summed and final figures at three; per-plane profit
/// at one; price and unit cost as entered.
pub fn derivation_text(report: &BreakEvenReport) -> String {
    let inputs = &report.inputs;
    let derived = &report.derived;
    format!(
        "1. Sum the fixed costs:\n   \
         {:.2} bn + {:.2} bn + {:.3} bn = {:.3} bn\n\n\
         2. Calculate the profit per plane:\n   \
         Profit per plane = Selling price - Unit production cost\n   \
         {} m - {} m = {:.1} m\n\n\
         3. Determine the break-even point:\n   \
         {:.3} m / {:.1} m = {:.3} planes",
        inputs.new_plant_cost,
        inputs.rd_cost,
        inputs.marketing_cost,
        derived.fixed_costs,
        fmt_entered(inputs.price_per_plane),
        fmt_entered(inputs.unit_production_cost),
        derived.profit_per_plane,
        derived.fixed_costs * BN_TO_M,
        derived.profit_per_plane,
        derived.break_even_raw,
    )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{compute, ScenarioInputs};

    #[test]
    fn test_headline_finite() {
        assert_eq!(fmt_headline(69.4), "Break-Even Point: 69.4 planes");
        assert_eq!(fmt_headline(-69.3), "Break-Even Point: -69.3 planes");
    }

    #[test]
    fn test_headline_degenerate() {
        assert_eq!(
            fmt_headline(f64::INFINITY),
            "Break-Even Point: N/A (no profit per plane)"
        );
        assert_eq!(
            fmt_headline(f64::NAN),
            "Break-Even Point: N/A (no profit per plane)"
        );
    }

    #[test]
    fn test_fmt_entered_minimal() {
        assert_eq!(fmt_entered(105.0), "105");
        assert_eq!(fmt_entered(1.25), "1.25");
        assert_eq!(fmt_entered(-0.5), "-0.5");
    }

    #[test]
    fn test_fmt_amount() {
        assert_eq!(fmt_amount(0.0), "$0m");
        assert_eq!(fmt_amount(640.0), "$640m");
        assert_eq!(fmt_amount(2775.0), "$2.8bn");
        assert_eq!(fmt_amount(14595.0), "$14.6bn");
        assert_eq!(fmt_amount(-2775.0), "$-2.8bn");
    }

    #[test]
    fn test_derivation_default_scenario() {
        let report = compute(&ScenarioInputs::default());
        let text = derivation_text(&report);
        let expected = "1. Sum the fixed costs:\n   \
                        1.25 bn + 1.50 bn + 0.025 bn = 2.775 bn\n\n\
                        2. Calculate the profit per plane:\n   \
                        Profit per plane = Selling price - Unit production cost\n   \
                        105 m - 65 m = 40.0 m\n\n\
                        3. Determine the break-even point:\n   \
                        2775.000 m / 40.0 m = 69.375 planes";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_derivation_survives_degenerate_figures() {
        let report = compute(&ScenarioInputs {
            unit_production_cost: 105.0,
            ..Default::default()
        });
        let text = derivation_text(&report);
        assert!(text.contains("105 m - 105 m = 0.0 m"));
        assert!(text.contains("inf planes"));
    }
}
