//! # TestBuilding: headless integration test harness
//!
//! Wraps `bevy::app::App` + `BuildingPlugin` so tests can click objects and
//! select floors without a window or renderer, then assert on ECS state.

use bevy::ecs::event::EventCursor;
use bevy::prelude::*;

use crate::commands::{apply_scene_command, SceneCommand};
use crate::floors::{FloorLevel, SelectedFloor};
use crate::layout::{BuildingLayout, ObjectId};
use crate::object_state::{DoorState, LightState, ObjectStateStore, ObjectToggled};
use crate::toggle_log::ToggleLog;
use crate::BuildingPlugin;

pub struct TestBuilding {
    app: App,
    toggled_cursor: EventCursor<ObjectToggled>,
}

impl TestBuilding {
    /// The default two-floor building.
    pub fn new() -> Self {
        Self::with_layout(BuildingLayout::default())
    }

    /// A building with a custom layout. The layout is inserted before the
    /// plugin so the state store is seeded from it.
    pub fn with_layout(layout: BuildingLayout) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(layout);
        app.add_plugins(BuildingPlugin);
        // Run one update so Startup systems execute.
        app.update();
        Self {
            app,
            toggled_cursor: EventCursor::default(),
        }
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Id of the object with `label`. Panics if absent.
    pub fn id(&self, label: &str) -> ObjectId {
        self.layout()
            .find_by_label(label)
            .unwrap_or_else(|| panic!("no object labelled {label:?}"))
            .id
    }

    /// Click an object once and run a frame.
    pub fn click(&mut self, id: ObjectId) -> &mut Self {
        self.send(SceneCommand::Toggle { id })
    }

    pub fn click_label(&mut self, label: &str) -> &mut Self {
        let id = self.id(label);
        self.click(id)
    }

    /// Press a floor-select button and run a frame.
    pub fn select_floor(&mut self, level: FloorLevel) -> &mut Self {
        self.send(SceneCommand::SelectFloor { level })
    }

    /// Queue a command and run a frame.
    pub fn send(&mut self, command: SceneCommand) -> &mut Self {
        apply_scene_command(self.app.world_mut(), command);
        self.app.update();
        self
    }

    /// Queue several commands and run them all in a single frame.
    pub fn send_batch(&mut self, commands: &[SceneCommand]) -> &mut Self {
        for command in commands {
            apply_scene_command(self.app.world_mut(), *command);
        }
        self.app.update();
        self
    }

    pub fn tick(&mut self, frames: usize) -> &mut Self {
        for _ in 0..frames {
            self.app.update();
        }
        self
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn layout(&self) -> &BuildingLayout {
        self.app.world().resource::<BuildingLayout>()
    }

    pub fn store(&self) -> &ObjectStateStore {
        self.app.world().resource::<ObjectStateStore>()
    }

    pub fn light(&self, id: ObjectId) -> LightState {
        self.store()
            .light(id)
            .unwrap_or_else(|| panic!("object {} is not a light", id.0))
    }

    pub fn door(&self, id: ObjectId) -> DoorState {
        self.store()
            .door(id)
            .unwrap_or_else(|| panic!("object {} is not a door", id.0))
    }

    pub fn selected_floor(&self) -> FloorLevel {
        self.app.world().resource::<SelectedFloor>().0
    }

    pub fn toggle_log(&self) -> &ToggleLog {
        self.app.world().resource::<ToggleLog>()
    }

    /// `ObjectToggled` events fired since the previous call.
    pub fn drain_toggled(&mut self) -> Vec<ObjectToggled> {
        let events = self.app.world().resource::<Events<ObjectToggled>>();
        self.toggled_cursor.read(events).copied().collect()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}

impl Default for TestBuilding {
    fn default() -> Self {
        Self::new()
    }
}
