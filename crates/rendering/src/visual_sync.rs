//! Redraw pass: applies state changes to meshes, materials, and emitters.
//!
//! Fixtures are updated from the `ObjectToggled` event queue; floor slabs are
//! recolored when `SelectedFloor` changes.

use bevy::prelude::*;

use building::floors::{floor_color, SelectedFloor};
use building::object_state::{ObjectState, ObjectToggled};

use crate::scene_meshes::{
    door_transform, emitter_light, DoorPanel, FloorSlab, LightFixture, SceneEntities,
};

pub fn sync_toggled_fixtures(
    mut commands: Commands,
    mut toggled: EventReader<ObjectToggled>,
    entities: Option<Res<SceneEntities>>,
    lights: Query<(&LightFixture, &MeshMaterial3d<StandardMaterial>)>,
    mut doors: Query<(&DoorPanel, &MeshMaterial3d<StandardMaterial>, &mut Transform)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(entities) = entities else {
        toggled.clear();
        return;
    };

    for event in toggled.read() {
        let Some(entity) = entities.get(event.id) else {
            warn!("No mesh spawned for object {}", event.id.0);
            continue;
        };

        match event.state {
            ObjectState::Light(state) => {
                let Ok((fixture, handle)) = lights.get(entity) else {
                    continue;
                };
                if let Some(material) = materials.get_mut(&handle.0) {
                    material.base_color = state.sphere_color(fixture.base_color);
                }
                match emitter_light(fixture, state) {
                    Some(light) => {
                        commands.entity(fixture.emitter).insert(light);
                    }
                    None => {
                        commands.entity(fixture.emitter).remove::<PointLight>();
                    }
                }
            }
            ObjectState::Door(state) => {
                let Ok((panel, handle, mut transform)) = doors.get_mut(entity) else {
                    continue;
                };
                *transform = door_transform(panel.position, state);
                if let Some(material) = materials.get_mut(&handle.0) {
                    material.base_color = state.color();
                }
            }
        }
    }
}

pub fn sync_floor_colors(
    selected: Res<SelectedFloor>,
    floors: Query<(&FloorSlab, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !selected.is_changed() {
        return;
    }
    for (slab, handle) in &floors {
        if let Some(material) = materials.get_mut(&handle.0) {
            material.base_color = floor_color(slab.level, selected.0);
        }
    }
}
