//! Static building layout: every floor slab, light, and door in the scene.
//!
//! Objects are declared once at startup and never move. An [`ObjectId`] is the
//! object's index in [`BuildingLayout::objects`], so ids are dense and stable.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{FIXTURE_HEIGHT, FLOOR_SPACING, LIGHT_BASE_COLOR};
use crate::floors::FloorLevel;

/// Identifier of a scene object (its index in the layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

/// What a scene object is, plus the per-kind constants it was declared with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectKind {
    Floor { level: FloorLevel },
    Light { intensity: f32, color: Color },
    Door,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub id: ObjectId,
    /// Name used when reporting state changes, e.g. "Floor 2 - Light 1".
    pub label: String,
    pub position: Vec3,
    pub kind: ObjectKind,
}

/// The full, immutable list of scene objects.
#[derive(Resource, Debug, Clone)]
pub struct BuildingLayout {
    objects: Vec<SceneObject>,
}

impl Default for BuildingLayout {
    fn default() -> Self {
        Self::two_floor_building()
    }
}

impl BuildingLayout {
    /// Build a layout from `(label, position, kind)` descriptors, assigning ids in order.
    pub fn from_descriptors<I, S>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec3, ObjectKind)>,
        S: Into<String>,
    {
        let objects = descriptors
            .into_iter()
            .enumerate()
            .map(|(i, (label, position, kind))| SceneObject {
                id: ObjectId(i as u32),
                label: label.into(),
                position,
                kind,
            })
            .collect();
        Self { objects }
    }

    /// Two stacked slabs, each with three lights along +x and three doors along -x.
    pub fn two_floor_building() -> Self {
        let mut descriptors: Vec<(String, Vec3, ObjectKind)> = vec![
            (
                "Floor 1".to_string(),
                Vec3::ZERO,
                ObjectKind::Floor {
                    level: FloorLevel::One,
                },
            ),
            (
                "Floor 2".to_string(),
                Vec3::new(0.0, -FLOOR_SPACING, 0.0),
                ObjectKind::Floor {
                    level: FloorLevel::Two,
                },
            ),
        ];

        for level in FloorLevel::ALL {
            let y = level.slab_height() + FIXTURE_HEIGHT;
            let prefix = match level {
                FloorLevel::One => String::new(),
                FloorLevel::Two => format!("{} - ", level.label()),
            };
            for (n, z) in [0.0, 2.0, -2.0].into_iter().enumerate() {
                descriptors.push((
                    format!("{prefix}Light {}", n + 1),
                    Vec3::new(2.0, y, z),
                    ObjectKind::Light {
                        intensity: 1.0,
                        color: LIGHT_BASE_COLOR,
                    },
                ));
            }
            for (n, z) in [0.0, 2.0, -2.0].into_iter().enumerate() {
                descriptors.push((
                    format!("{prefix}Door {}", n + 1),
                    Vec3::new(-2.0, y, z),
                    ObjectKind::Door,
                ));
            }
        }

        Self::from_descriptors(descriptors)
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0 as usize)
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn floors(&self) -> impl Iterator<Item = (&SceneObject, FloorLevel)> {
        self.objects.iter().filter_map(|o| match o.kind {
            ObjectKind::Floor { level } => Some((o, level)),
            _ => None,
        })
    }

    pub fn lights(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects
            .iter()
            .filter(|o| matches!(o.kind, ObjectKind::Light { .. }))
    }

    pub fn doors(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects
            .iter()
            .filter(|o| matches!(o.kind, ObjectKind::Door))
    }

    /// Look up an object by its report label.
    pub fn find_by_label(&self, label: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.label == label)
    }
}
