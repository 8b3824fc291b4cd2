//! Spawns one mesh per layout object: floor slabs, light spheres with their
//! point-light emitters, and door panels.
//!
//! Every light and door gets its own material so recoloring one never
//! affects another.

use bevy::picking::PickingBehavior;
use bevy::prelude::*;
use std::collections::HashMap;

use building::config::{
    AMBIENT_BRIGHTNESS_SCALE, AMBIENT_INTENSITY, DOOR_SIZE, FLOOR_SIZE, LIGHT_RADIUS,
    LIGHT_SEGMENTS, LUMENS_PER_INTENSITY, POINT_LIGHT_RANGE,
};
use building::floors::{floor_color, FloorLevel, SelectedFloor};
use building::layout::{BuildingLayout, ObjectId, ObjectKind};
use building::object_state::{DoorState, LightState, ObjectStateStore};

use crate::picking::on_fixture_click;

/// Links a spawned entity back to its layout object.
#[derive(Component, Debug, Clone, Copy)]
pub struct SceneObjectMesh {
    pub id: ObjectId,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct FloorSlab {
    pub level: FloorLevel,
}

/// Light sphere. The emitter is a child entity that carries a `PointLight`
/// only while the light is on.
#[derive(Component, Debug, Clone, Copy)]
pub struct LightFixture {
    pub base_color: Color,
    pub intensity: f32,
    pub emitter: Entity,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct DoorPanel {
    /// Centre of the panel; rotation is applied about it.
    pub position: Vec3,
}

/// Entity spawned for each layout object.
#[derive(Resource, Debug, Default)]
pub struct SceneEntities {
    pub by_id: HashMap<ObjectId, Entity>,
}

impl SceneEntities {
    pub fn get(&self, id: ObjectId) -> Option<Entity> {
        self.by_id.get(&id).copied()
    }
}

pub fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_INTENSITY * AMBIENT_BRIGHTNESS_SCALE,
    });
}

/// Point light for a fixture that is switched on.
pub fn point_light_for(intensity: f32, color: Color) -> PointLight {
    PointLight {
        color,
        intensity: intensity * LUMENS_PER_INTENSITY,
        range: POINT_LIGHT_RANGE,
        shadows_enabled: false,
        ..default()
    }
}

pub fn door_transform(position: Vec3, state: DoorState) -> Transform {
    Transform::from_translation(position).with_rotation(Quat::from_rotation_y(state.yaw()))
}

fn material(materials: &mut Assets<StandardMaterial>, color: Color) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: color,
        perceptual_roughness: 0.8,
        ..default()
    })
}

/// Startup: spawn meshes for the whole layout, styled from the current state.
pub fn spawn_building_meshes(
    mut commands: Commands,
    layout: Res<BuildingLayout>,
    store: Res<ObjectStateStore>,
    selected: Res<SelectedFloor>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let slab_mesh = meshes.add(Cuboid::new(FLOOR_SIZE.0, FLOOR_SIZE.1, FLOOR_SIZE.2));
    let sphere_mesh = meshes.add(
        Sphere::new(LIGHT_RADIUS)
            .mesh()
            .uv(LIGHT_SEGMENTS, LIGHT_SEGMENTS),
    );
    let door_mesh = meshes.add(Cuboid::new(DOOR_SIZE.0, DOOR_SIZE.1, DOOR_SIZE.2));

    let mut entities = SceneEntities::default();

    for object in layout.objects() {
        let tag = SceneObjectMesh { id: object.id };
        let name = Name::new(object.label.clone());

        let entity = match object.kind {
            ObjectKind::Floor { level } => commands
                .spawn((
                    tag,
                    name,
                    FloorSlab { level },
                    // Rays pass through slabs to the fixtures on the floor below
                    PickingBehavior::IGNORE,
                    Mesh3d(slab_mesh.clone()),
                    MeshMaterial3d(material(&mut materials, floor_color(level, selected.0))),
                    Transform::from_translation(object.position),
                ))
                .id(),
            ObjectKind::Light { intensity, color } => {
                let state = store.light(object.id).unwrap_or_default();
                let mut emitter = commands.spawn((Name::new("emitter"), Transform::default()));
                if state.emits_light() {
                    emitter.insert(point_light_for(intensity, color));
                }
                let emitter = emitter.id();

                commands
                    .spawn((
                        tag,
                        name,
                        LightFixture {
                            base_color: color,
                            intensity,
                            emitter,
                        },
                        Mesh3d(sphere_mesh.clone()),
                        MeshMaterial3d(material(&mut materials, state.sphere_color(color))),
                        Transform::from_translation(object.position),
                    ))
                    .add_child(emitter)
                    .observe(on_fixture_click)
                    .id()
            }
            ObjectKind::Door => {
                let state = store.door(object.id).unwrap_or_default();
                commands
                    .spawn((
                        tag,
                        name,
                        DoorPanel {
                            position: object.position,
                        },
                        Mesh3d(door_mesh.clone()),
                        MeshMaterial3d(material(&mut materials, state.color())),
                        door_transform(object.position, state),
                    ))
                    .observe(on_fixture_click)
                    .id()
            }
        };
        entities.by_id.insert(object.id, entity);
    }

    info!("Spawned {} scene objects", entities.by_id.len());
    commands.insert_resource(entities);
}

/// The `PointLight` an emitter should carry for `state`, if any.
pub fn emitter_light(fixture: &LightFixture, state: LightState) -> Option<PointLight> {
    state
        .emits_light()
        .then(|| point_light_for(fixture.intensity, fixture.base_color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use building::config::LIGHT_BASE_COLOR;
    use building::BuildingPlugin;

    fn spawned_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(BuildingPlugin)
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .add_systems(Startup, spawn_building_meshes);
        app.update();
        app
    }

    #[test]
    fn test_slabs_do_not_block_picking() {
        let mut app = spawned_app();
        let mut slabs = app
            .world_mut()
            .query::<(&FloorSlab, Option<&PickingBehavior>)>();
        let mut count = 0;
        for (_, picking) in slabs.iter(app.world()) {
            let picking = picking.expect("slab without PickingBehavior");
            assert!(!picking.should_block_lower);
            assert!(!picking.is_hoverable);
            count += 1;
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn test_fixtures_stay_pickable() {
        let mut app = spawned_app();
        let entities = app.world().resource::<SceneEntities>();
        assert_eq!(entities.by_id.len(), 14);

        let mut fixtures = app
            .world_mut()
            .query_filtered::<Option<&PickingBehavior>, Or<(With<LightFixture>, With<DoorPanel>)>>();
        let behaviors: Vec<_> = fixtures.iter(app.world()).collect();
        assert_eq!(behaviors.len(), 12);
        assert!(behaviors.iter().all(|b| b.is_none()));
    }

    #[test]
    fn test_point_light_scaled_from_intensity() {
        let light = point_light_for(1.0, LIGHT_BASE_COLOR);
        assert_eq!(light.intensity, LUMENS_PER_INTENSITY);
        assert_eq!(light.color, LIGHT_BASE_COLOR);
        assert_eq!(light.range, POINT_LIGHT_RANGE);
    }

    #[test]
    fn test_door_transform_rotation() {
        let pos = Vec3::new(-2.0, 1.0, 2.0);
        let closed = door_transform(pos, DoorState { is_open: false });
        let open = door_transform(pos, DoorState { is_open: true });
        assert_eq!(closed.translation, pos);
        assert_eq!(open.translation, pos);
        assert_eq!(closed.rotation, Quat::IDENTITY);
        let (yaw, _, _) = open.rotation.to_euler(EulerRot::YXZ);
        assert!((yaw - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_emitter_only_while_on() {
        let fixture = LightFixture {
            base_color: LIGHT_BASE_COLOR,
            intensity: 1.0,
            emitter: Entity::PLACEHOLDER,
        };
        assert!(emitter_light(&fixture, LightState { is_on: true }).is_some());
        assert!(emitter_light(&fixture, LightState { is_on: false }).is_none());
    }
}
