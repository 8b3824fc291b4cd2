use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;

use building::BuildingSet;

pub mod camera;
pub mod overlay_guard;
pub mod picking;
pub mod scene_meshes;
pub mod visual_sync;

use camera::{CameraPanDrag, LeftClickDrag};

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MeshPickingPlugin)
            .init_resource::<LeftClickDrag>()
            .init_resource::<CameraPanDrag>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    scene_meshes::setup_lighting,
                    scene_meshes::spawn_building_meshes,
                ),
            )
            .add_systems(
                Update,
                (
                    camera::camera_orbit_drag,
                    camera::reset_left_drag.after(camera::camera_orbit_drag),
                    camera::camera_pan_drag,
                    camera::camera_zoom,
                    camera::camera_rotate_keyboard,
                    camera::apply_orbit_camera
                        .after(camera::camera_orbit_drag)
                        .after(camera::camera_pan_drag)
                        .after(camera::camera_zoom)
                        .after(camera::camera_rotate_keyboard),
                ),
            )
            .add_systems(
                Update,
                (
                    visual_sync::sync_toggled_fixtures,
                    visual_sync::sync_floor_colors,
                )
                    .after(BuildingSet::Report),
            );
    }
}
