use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod calculator_panel;
pub mod chart;
pub mod formatting;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<calculator_panel::InputBuffers>()
            .add_systems(Startup, theme::apply_theme)
            .add_systems(
                Update,
                // Render from a report that already reflects this frame's inputs.
                calculator_panel::calculator_ui.after(engine::refresh_report),
            );
    }
}
