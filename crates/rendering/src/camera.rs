use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::overlay_guard::pointer_over_overlay;

const PAN_SENSITIVITY: f32 = 0.0015;
const ZOOM_SPEED: f32 = 0.1;
const MIN_DISTANCE: f32 = 3.0;
const MAX_DISTANCE: f32 = 60.0;
const MIN_PITCH: f32 = -80.0 * std::f32::consts::PI / 180.0; // allow looking up at floor 2 from below
const MAX_PITCH: f32 = 85.0 * std::f32::consts::PI / 180.0;
const ORBIT_SENSITIVITY: f32 = 0.008;
const KEY_ORBIT_SPEED: f32 = 1.5; // radians per second
/// Focus may not wander further than this from the building centre.
const MAX_FOCUS_OFFSET: f32 = 20.0;

/// Orbital camera model: camera orbits around a focus point inside the building.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Point the camera looks at
    pub focus: Vec3,
    /// Horizontal rotation in radians
    pub yaw: f32,
    /// Elevation angle in radians (clamped between MIN_PITCH and MAX_PITCH)
    pub pitch: f32,
    /// Distance from focus point
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            // Halfway between the two slabs
            focus: Vec3::new(0.0, -1.5, 0.0),
            yaw: 0.6,
            pitch: 35.0_f32.to_radians(),
            distance: 16.0,
        }
    }
}

/// Tracks left-click drag state: differentiates click from drag.
/// When the mouse moves beyond `LEFT_DRAG_THRESHOLD` pixels from the initial press,
/// it becomes a camera orbit and mesh clicks are suppressed.
#[derive(Resource, Default)]
pub struct LeftClickDrag {
    pub pressed: bool,
    pub start_pos: Vec2,
    pub last_pos: Vec2,
    /// True once the mouse has moved beyond the threshold: a camera drag, not a click.
    pub is_dragging: bool,
}

#[derive(Resource, Default)]
pub struct CameraPanDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

const LEFT_DRAG_THRESHOLD: f32 = 5.0;

pub fn setup_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    let (pos, look_at) = orbit_to_transform(&orbit);

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(pos).looking_at(look_at, Vec3::Y),
    ));
    commands.insert_resource(orbit);
}

fn clamp_focus(focus: &mut Vec3) {
    *focus = focus.clamp(
        Vec3::splat(-MAX_FOCUS_OFFSET),
        Vec3::splat(MAX_FOCUS_OFFSET),
    );
}

pub fn orbit_to_transform(orbit: &OrbitCamera) -> (Vec3, Vec3) {
    // Spherical to cartesian offset from focus
    let x = orbit.distance * orbit.pitch.cos() * orbit.yaw.sin();
    let y = orbit.distance * orbit.pitch.sin();
    let z = orbit.distance * orbit.pitch.cos() * orbit.yaw.cos();
    let pos = orbit.focus + Vec3::new(x, y, z);
    (pos, orbit.focus)
}

/// System: apply OrbitCamera state to the actual camera Transform each frame.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let (pos, look_at) = orbit_to_transform(&orbit);
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = Transform::from_translation(pos).looking_at(look_at, Vec3::Y);
}

/// Left-mouse drag: orbit (horizontal = yaw, vertical = pitch), with a
/// threshold so a plain click still reaches the picked mesh.
pub fn camera_orbit_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut left_drag: ResMut<LeftClickDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) && !pointer_over_overlay(&mut contexts) {
        if let Some(pos) = window.cursor_position() {
            left_drag.pressed = true;
            left_drag.start_pos = pos;
            left_drag.last_pos = pos;
            left_drag.is_dragging = false;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        left_drag.pressed = false;
    }

    if !left_drag.pressed {
        return;
    }

    let Some(pos) = window.cursor_position() else {
        return;
    };
    if !left_drag.is_dragging && (pos - left_drag.start_pos).length() > LEFT_DRAG_THRESHOLD {
        left_drag.is_dragging = true;
        left_drag.last_pos = pos;
    }

    if left_drag.is_dragging {
        let delta = pos - left_drag.last_pos;
        orbit.yaw -= delta.x * ORBIT_SENSITIVITY;
        orbit.pitch = (orbit.pitch + delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
        left_drag.last_pos = pos;
    }
}

/// Clear the drag flag once the button has been up for a frame, after
/// picking has had the chance to see it on the release frame.
pub fn reset_left_drag(buttons: Res<ButtonInput<MouseButton>>, mut left_drag: ResMut<LeftClickDrag>) {
    if !buttons.pressed(MouseButton::Left) && !buttons.just_released(MouseButton::Left) {
        left_drag.is_dragging = false;
    }
}

/// Right- or middle-mouse drag: pan focus in the camera's screen plane.
pub fn camera_pan_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut drag: ResMut<CameraPanDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let pan_buttons = [MouseButton::Right, MouseButton::Middle];

    if buttons.any_just_pressed(pan_buttons) && !pointer_over_overlay(&mut contexts) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if !buttons.any_pressed(pan_buttons) {
        drag.dragging = false;
    }

    if drag.dragging {
        if let Some(pos) = window.cursor_position() {
            let delta = pos - drag.last_pos;
            let scale = orbit.distance * PAN_SENSITIVITY;
            let right = Vec3::new(orbit.yaw.cos(), 0.0, -orbit.yaw.sin());
            let up = Vec3::Y;
            orbit.focus += (-delta.x * right + delta.y * up) * scale;
            clamp_focus(&mut orbit.focus);
            drag.last_pos = pos;
        }
    }
}

/// Scroll wheel: zoom (change distance).
pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    mut orbit: ResMut<OrbitCamera>,
) {
    if pointer_over_overlay(&mut contexts) {
        scroll_evts.clear();
        return;
    }
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        orbit.distance = zoomed_distance(orbit.distance, dy);
    }
}

pub fn zoomed_distance(distance: f32, scroll: f32) -> f32 {
    let factor = 1.0 - scroll * ZOOM_SPEED;
    (distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE)
}

/// Arrow keys: orbit around the focus.
pub fn camera_rotate_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let mut dir = Vec2::ZERO;
    if keys.pressed(KeyCode::ArrowLeft) {
        dir.x -= 1.0;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        dir.x += 1.0;
    }
    if keys.pressed(KeyCode::ArrowUp) {
        dir.y += 1.0;
    }
    if keys.pressed(KeyCode::ArrowDown) {
        dir.y -= 1.0;
    }

    if dir != Vec2::ZERO {
        let step = KEY_ORBIT_SPEED * time.delta_secs();
        orbit.yaw += dir.x * step;
        orbit.pitch = (orbit.pitch + dir.y * step).clamp(MIN_PITCH, MAX_PITCH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_position_is_distance_from_focus() {
        let orbit = OrbitCamera::default();
        let (pos, look_at) = orbit_to_transform(&orbit);
        assert_eq!(look_at, orbit.focus);
        assert!((pos.distance(look_at) - orbit.distance).abs() < 1e-4);
        assert!(pos.y > look_at.y, "default view looks down on the building");
    }

    #[test]
    fn test_zoom_is_clamped() {
        assert_eq!(zoomed_distance(MIN_DISTANCE, 5.0), MIN_DISTANCE);
        assert_eq!(zoomed_distance(MAX_DISTANCE, -5.0), MAX_DISTANCE);
        assert!(zoomed_distance(10.0, 1.0) < 10.0);
    }

    #[test]
    fn test_clamp_focus() {
        let mut focus = Vec3::new(100.0, -100.0, 3.0);
        clamp_focus(&mut focus);
        assert_eq!(focus, Vec3::new(MAX_FOCUS_OFFSET, -MAX_FOCUS_OFFSET, 3.0));
    }
}
