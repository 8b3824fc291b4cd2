use bevy::color::Color;

/// Floor slab box dimensions (width, thickness, depth).
pub const FLOOR_SIZE: (f32, f32, f32) = (10.0, 0.1, 10.0);
/// Door panel box dimensions (width, height, thickness).
pub const DOOR_SIZE: (f32, f32, f32) = (1.0, 2.0, 0.1);
pub const LIGHT_RADIUS: f32 = 0.2;
pub const LIGHT_SEGMENTS: u32 = 16;

/// Vertical distance between the two floor slabs.
pub const FLOOR_SPACING: f32 = 3.0;
/// Height above a slab at which lights and doors are mounted.
pub const FIXTURE_HEIGHT: f32 = 1.0;

/// Scene-unit light intensity multiplied by this gives lumens for a `PointLight`.
pub const LUMENS_PER_INTENSITY: f32 = 60_000.0;
pub const POINT_LIGHT_RANGE: f32 = 8.0;
/// Scene-unit ambient intensity (0..1) multiplied by this gives Bevy ambient brightness.
pub const AMBIENT_BRIGHTNESS_SCALE: f32 = 800.0;
pub const AMBIENT_INTENSITY: f32 = 0.5;

pub const FLOOR_HIGHLIGHT_COLOR: Color = Color::srgb(0.678, 0.847, 0.902); // light blue
pub const FLOOR_IDLE_COLOR: Color = Color::srgb(0.502, 0.502, 0.502); // gray
pub const LIGHT_BASE_COLOR: Color = Color::srgb(1.0, 0.0, 0.0); // red
pub const LIGHT_OFF_COLOR: Color = Color::srgb(0.502, 0.502, 0.502); // gray
pub const DOOR_OPEN_COLOR: Color = Color::srgb(0.0, 0.502, 0.0); // green
pub const DOOR_CLOSED_COLOR: Color = Color::srgb(0.647, 0.165, 0.165); // brown
