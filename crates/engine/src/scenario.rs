use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config;

/// The five user-editable figures driving the calculation.
///
/// Plant, R&D, and marketing costs are in billions of dollars; the per-plane
/// production cost and selling price are in millions. No range is enforced:
/// negative, zero, and NaN values flow through the computation unchanged.
///
/// `#[serde(default)]` lets the report protocol accept partial objects —
/// `{}` is the default scenario, `{"rd_cost": 2.0}` overrides one field.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInputs {
    pub new_plant_cost: f64,
    pub rd_cost: f64,
    pub marketing_cost: f64,
    pub unit_production_cost: f64,
    pub price_per_plane: f64,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            new_plant_cost: config::DEFAULT_NEW_PLANT_COST,
            rd_cost: config::DEFAULT_RD_COST,
            marketing_cost: config::DEFAULT_MARKETING_COST,
            unit_production_cost: config::DEFAULT_UNIT_PRODUCTION_COST,
            price_per_plane: config::DEFAULT_PRICE_PER_PLANE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let inputs = ScenarioInputs::default();
        assert_eq!(inputs.new_plant_cost, 1.25);
        assert_eq!(inputs.rd_cost, 1.5);
        assert_eq!(inputs.marketing_cost, 0.025);
        assert_eq!(inputs.unit_production_cost, 65.0);
        assert_eq!(inputs.price_per_plane, 105.0);
    }

    #[test]
    fn test_empty_object_deserializes_to_defaults() {
        let inputs: ScenarioInputs = serde_json::from_str("{}").expect("valid");
        assert_eq!(inputs, ScenarioInputs::default());
    }

    #[test]
    fn test_partial_override() {
        let inputs: ScenarioInputs =
            serde_json::from_str(r#"{"rd_cost": 2.0, "price_per_plane": 120.0}"#).expect("valid");
        assert_eq!(inputs.rd_cost, 2.0);
        assert_eq!(inputs.price_per_plane, 120.0);
        assert_eq!(inputs.new_plant_cost, 1.25);
        assert_eq!(inputs.unit_production_cost, 65.0);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        // Default serde behavior; the report protocol relies on this leniency.
        let inputs: ScenarioInputs =
            serde_json::from_str(r#"{"fleet_size": 10}"#).expect("valid");
        assert_eq!(inputs, ScenarioInputs::default());
    }
}
