use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

#[cfg(not(target_arch = "wasm32"))]
mod scene_script;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "BuildView".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            // Fill the host page's canvas on wasm32; ignored natively
            fit_canvas_to_parent: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(ClearColor(Color::srgb(0.08, 0.09, 0.11)))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((
        building::BuildingPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    // Script mode: replays a JSON list of scene commands, e.g.
    // BUILDVIEW_SCRIPT=tour.json with [{"Toggle":{"id":2}},{"SelectFloor":{"level":"Two"}}]
    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(path) = std::env::var("BUILDVIEW_SCRIPT") {
        scene_script::install(&mut app, path);
    }

    app.run();
}
