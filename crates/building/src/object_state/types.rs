use bevy::prelude::*;
use std::collections::BTreeMap;
use std::fmt;

use crate::config::{DOOR_CLOSED_COLOR, DOOR_OPEN_COLOR, LIGHT_OFF_COLOR};
use crate::layout::{BuildingLayout, ObjectId, ObjectKind};

/// On/off state of a light fixture. Lights start on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightState {
    pub is_on: bool,
}

impl Default for LightState {
    fn default() -> Self {
        Self { is_on: true }
    }
}

impl LightState {
    /// Sphere color: the fixture's own color while on, gray while off.
    pub fn sphere_color(&self, base: Color) -> Color {
        if self.is_on {
            base
        } else {
            LIGHT_OFF_COLOR
        }
    }

    /// Whether a point-light emitter should exist for this fixture.
    pub fn emits_light(&self) -> bool {
        self.is_on
    }
}

/// Open/closed state of a door. Doors start closed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DoorState {
    pub is_open: bool,
}

impl DoorState {
    /// Rotation about the vertical axis in radians: 0 closed, π/2 open.
    pub fn yaw(&self) -> f32 {
        if self.is_open {
            std::f32::consts::FRAC_PI_2
        } else {
            0.0
        }
    }

    pub fn color(&self) -> Color {
        if self.is_open {
            DOOR_OPEN_COLOR
        } else {
            DOOR_CLOSED_COLOR
        }
    }
}

/// State of one toggleable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectState {
    Light(LightState),
    Door(DoorState),
}

impl ObjectState {
    /// The boolean reported on toggle: `is_on` for lights, `is_open` for doors.
    pub fn is_active(&self) -> bool {
        match self {
            ObjectState::Light(light) => light.is_on,
            ObjectState::Door(door) => door.is_open,
        }
    }

    pub fn status_word(&self) -> &'static str {
        match (self, self.is_active()) {
            (ObjectState::Light(_), true) => "On",
            (ObjectState::Light(_), false) => "Off",
            (ObjectState::Door(_), true) => "Open",
            (ObjectState::Door(_), false) => "Closed",
        }
    }

    fn flipped(self) -> Self {
        match self {
            ObjectState::Light(light) => ObjectState::Light(LightState {
                is_on: !light.is_on,
            }),
            ObjectState::Door(door) => ObjectState::Door(DoorState {
                is_open: !door.is_open,
            }),
        }
    }
}

/// Why a toggle request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleError {
    /// No object with this id exists in the layout.
    UnknownObject(ObjectId),
    /// The object exists but has no state to flip (floor slabs).
    NotToggleable(ObjectId),
}

impl fmt::Display for ToggleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleError::UnknownObject(id) => write!(f, "no scene object with id {}", id.0),
            ToggleError::NotToggleable(id) => write!(f, "scene object {} cannot be toggled", id.0),
        }
    }
}

impl std::error::Error for ToggleError {}

/// Central store of every light and door state, keyed by object id.
///
/// Floors never appear here. The store is seeded from the [`BuildingLayout`]
/// with each kind's default state.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ObjectStateStore {
    states: BTreeMap<ObjectId, ObjectState>,
}

impl FromWorld for ObjectStateStore {
    fn from_world(world: &mut World) -> Self {
        match world.get_resource::<BuildingLayout>() {
            Some(layout) => Self::from_layout(layout),
            None => Self::from_layout(&BuildingLayout::default()),
        }
    }
}

impl ObjectStateStore {
    pub fn from_layout(layout: &BuildingLayout) -> Self {
        let states = layout
            .objects()
            .iter()
            .filter_map(|object| {
                let state = match object.kind {
                    ObjectKind::Light { .. } => ObjectState::Light(LightState::default()),
                    ObjectKind::Door => ObjectState::Door(DoorState::default()),
                    ObjectKind::Floor { .. } => return None,
                };
                Some((object.id, state))
            })
            .collect();
        Self { states }
    }

    pub fn get(&self, id: ObjectId) -> Option<ObjectState> {
        self.states.get(&id).copied()
    }

    pub fn light(&self, id: ObjectId) -> Option<LightState> {
        match self.get(id)? {
            ObjectState::Light(light) => Some(light),
            ObjectState::Door(_) => None,
        }
    }

    pub fn door(&self, id: ObjectId) -> Option<DoorState> {
        match self.get(id)? {
            ObjectState::Door(door) => Some(door),
            ObjectState::Light(_) => None,
        }
    }

    /// Flip the object's boolean and return its new state.
    ///
    /// `layout` distinguishes unknown ids from floors; the store is unchanged on error.
    pub fn toggle(
        &mut self,
        id: ObjectId,
        layout: &BuildingLayout,
    ) -> Result<ObjectState, ToggleError> {
        let Some(state) = self.states.get_mut(&id) else {
            return Err(match layout.get(id) {
                Some(_) => ToggleError::NotToggleable(id),
                None => ToggleError::UnknownObject(id),
            });
        };
        *state = state.flipped();
        Ok(*state)
    }

    pub fn lights_on(&self) -> usize {
        self.states
            .values()
            .filter(|s| matches!(s, ObjectState::Light(LightState { is_on: true })))
            .count()
    }

    pub fn doors_open(&self) -> usize {
        self.states
            .values()
            .filter(|s| matches!(s, ObjectState::Door(DoorState { is_open: true })))
            .count()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Command: flip the state of one light or door.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleObjectEvent {
    pub id: ObjectId,
}

/// Fired exactly once per accepted toggle, carrying the object's new state.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectToggled {
    pub id: ObjectId,
    pub state: ObjectState,
}
