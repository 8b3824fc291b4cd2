//! Mesh picking: turns a primary click on a light or door into a toggle command.

use bevy::picking::events::{Click, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use building::object_state::ToggleObjectEvent;

use crate::camera::LeftClickDrag;
use crate::overlay_guard::pointer_over_overlay;
use crate::scene_meshes::SceneObjectMesh;

/// Observer attached to every light sphere and door panel.
pub fn on_fixture_click(
    trigger: Trigger<Pointer<Click>>,
    objects: Query<&SceneObjectMesh>,
    drag: Res<LeftClickDrag>,
    mut contexts: EguiContexts,
    mut toggles: EventWriter<ToggleObjectEvent>,
) {
    let over_overlay = pointer_over_overlay(&mut contexts);
    if !click_toggles(trigger.event().button, drag.is_dragging, over_overlay) {
        debug!("Click on {:?} ignored", trigger.entity());
        return;
    }
    let Ok(object) = objects.get(trigger.entity()) else {
        return;
    };
    toggles.send(ToggleObjectEvent { id: object.id });
}

/// A release only toggles for the primary button, when it did not end a
/// camera orbit and was not aimed at the overlay.
pub fn click_toggles(button: PointerButton, ended_drag: bool, over_overlay: bool) -> bool {
    button == PointerButton::Primary && !ended_drag && !over_overlay
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_click_toggles() {
        assert!(click_toggles(PointerButton::Primary, false, false));
    }

    #[test]
    fn test_other_buttons_ignored() {
        assert!(!click_toggles(PointerButton::Secondary, false, false));
        assert!(!click_toggles(PointerButton::Middle, false, false));
    }

    #[test]
    fn test_drag_release_ignored() {
        assert!(!click_toggles(PointerButton::Primary, true, false));
    }

    #[test]
    fn test_overlay_click_ignored() {
        assert!(!click_toggles(PointerButton::Primary, false, true));
    }
}
