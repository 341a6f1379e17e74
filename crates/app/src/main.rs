use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

mod report_mode;

fn main() {
    // Headless protocol mode for scripted use: scenario JSON lines on stdin,
    // report JSON lines on stdout, no window.
    if std::env::args().any(|arg| arg == "--report") {
        report_mode::run_report_mode();
        return;
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Break-Even Calculator".to_string(),
                resolution: (960.0, 720.0).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        // The calculator only changes on input; idle frames can run at low power.
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
            unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
        })
        .add_plugins((engine::EnginePlugin, ui::UiPlugin))
        .run();
}
