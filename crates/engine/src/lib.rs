use bevy::prelude::*;

pub mod compute;
pub mod config;
pub mod scenario;

pub use compute::{compute, BreakEvenReport, ChartSample, DerivedFigures};
pub use scenario::ScenarioInputs;

/// Overwrites the report whenever the scenario inputs change.
///
/// Bevy change detection also fires on resource insertion, so the report is
/// consistent with the inputs from the first update without a separate
/// Startup system. UI systems that render from the report order themselves
/// after this one.
pub fn refresh_report(inputs: Res<ScenarioInputs>, mut report: ResMut<BreakEvenReport>) {
    if !inputs.is_changed() {
        return;
    }
    *report = compute(&inputs);
}

pub struct EnginePlugin;

impl Plugin for EnginePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScenarioInputs>()
            .init_resource::<BreakEvenReport>()
            .add_systems(Update, refresh_report);
    }
}
