//! "Activity" window listing the most recent toggles (L to show/hide).

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use building::layout::{BuildingLayout, ObjectId};
use building::object_state::{ObjectState, ObjectStateStore};
use building::toggle_log::ToggleLog;

const RECENT_ROWS: usize = 8;

#[derive(Resource)]
pub struct ActivityPanelVisible(pub bool);

impl Default for ActivityPanelVisible {
    fn default() -> Self {
        Self(true)
    }
}

pub fn activity_panel_keybind(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut visible: ResMut<ActivityPanelVisible>,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    if keyboard.just_pressed(KeyCode::KeyL) {
        visible.0 = !visible.0;
    }
}

pub fn activity_panel_ui(
    mut contexts: EguiContexts,
    mut visible: ResMut<ActivityPanelVisible>,
    log: Res<ToggleLog>,
    store: Res<ObjectStateStore>,
    layout: Res<BuildingLayout>,
) {
    if !visible.0 {
        return;
    }

    let mut open = true;
    egui::Window::new("Activity")
        .open(&mut open)
        .resizable(false)
        .collapsible(true)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 10.0))
        .default_width(220.0)
        .show(contexts.ctx_mut(), |ui| {
            if store.is_empty() {
                ui.weak("No lights or doors in this building");
            } else {
                ui.label(format!(
                    "Lights on: {}   Doors open: {}",
                    store.lights_on(),
                    store.doors_open()
                ));
            }
            ui.separator();

            if log.is_empty() {
                ui.weak("Click a light or door");
                return;
            }
            // Newest first
            for (id, state) in log.last_n(RECENT_ROWS).iter().rev() {
                ui.label(activity_line(&layout, *id, *state));
            }
            ui.separator();
            ui.weak(format!("{} toggles total", log.total()));
        });

    if !open {
        visible.0 = false;
    }
}

pub fn activity_line(layout: &BuildingLayout, id: ObjectId, state: ObjectState) -> String {
    match layout.get(id) {
        Some(object) => format!("{}: {}", object.label, state.status_word()),
        None => format!("#{}: {}", id.0, state.status_word()),
    }
}
