use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use simulation::config::PARAMS_ENV_VAR;
use simulation::params::DemoParams;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Rebind Keys".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((
        simulation::SimulationPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    // LogPlugin is installed by now, so load failures are reported.
    if let Some(params) = load_params() {
        app.insert_resource(params);
    }

    app.run();
}

/// Read `DemoParams` from the JSON file named by `REBIND_KEYS_PARAMS`, if set.
fn load_params() -> Option<DemoParams> {
    let path = std::env::var(PARAMS_ENV_VAR).ok()?;
    let json = match std::fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) => {
            warn!("Failed to read params file {path}: {e}; using defaults");
            return None;
        }
    };
    match DemoParams::from_json_str(&json) {
        Ok(params) => {
            info!("Loaded params from {path}: {params:?}");
            Some(params)
        }
        Err(e) => {
            warn!("Failed to parse params file {path}: {e}; using defaults");
            None
        }
    }
}
