//! Fixed top-left overlay with the "Floor 1" / "Floor 2" buttons.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use building::floors::{FloorLevel, SelectFloorEvent, SelectedFloor};

/// Screen offset of the selector from the top-left corner, in points.
const OVERLAY_OFFSET: egui::Vec2 = egui::vec2(10.0, 10.0);

pub fn floor_selector_ui(
    mut contexts: EguiContexts,
    selected: Res<SelectedFloor>,
    mut select: EventWriter<SelectFloorEvent>,
) {
    egui::Area::new(egui::Id::new("floor_selector"))
        .anchor(egui::Align2::LEFT_TOP, OVERLAY_OFFSET)
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal(|ui| {
                for (level, is_selected) in selector_buttons(selected.0) {
                    let button = egui::Button::new(level.label()).selected(is_selected);
                    if ui.add(button).clicked() {
                        select.send(SelectFloorEvent { level });
                    }
                }
            });
        });
}

/// One button per floor, in display order, with the highlighted one marked.
pub fn selector_buttons(selected: FloorLevel) -> [(FloorLevel, bool); 2] {
    FloorLevel::ALL.map(|level| (level, level == selected))
}

/// Number keys 1 and 2 select a floor.
pub fn floor_keybinds(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut select: EventWriter<SelectFloorEvent>,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    for key in keyboard.get_just_pressed() {
        if let Some(level) = floor_for_key(*key) {
            select.send(SelectFloorEvent { level });
        }
    }
}

pub fn floor_for_key(key: KeyCode) -> Option<FloorLevel> {
    match key {
        KeyCode::Digit1 | KeyCode::Numpad1 => Some(FloorLevel::One),
        KeyCode::Digit2 | KeyCode::Numpad2 => Some(FloorLevel::Two),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_marks_only_selected_floor() {
        let buttons = selector_buttons(FloorLevel::Two);
        assert_eq!(
            buttons,
            [(FloorLevel::One, false), (FloorLevel::Two, true)]
        );
        let labels: Vec<&str> = buttons.iter().map(|(level, _)| level.label()).collect();
        assert_eq!(labels, ["Floor 1", "Floor 2"]);
    }

    #[test]
    fn test_floor_keys() {
        assert_eq!(floor_for_key(KeyCode::Digit1), Some(FloorLevel::One));
        assert_eq!(floor_for_key(KeyCode::Numpad2), Some(FloorLevel::Two));
        assert_eq!(floor_for_key(KeyCode::Digit3), None);
        assert_eq!(floor_for_key(KeyCode::KeyL), None);
    }
}
