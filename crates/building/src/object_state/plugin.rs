use bevy::prelude::*;

use crate::layout::BuildingLayout;
use crate::toggle_log::ToggleLog;
use crate::BuildingSet;

use super::systems::{handle_toggle_commands, report_toggles};
use super::types::{ObjectStateStore, ObjectToggled, ToggleObjectEvent};

pub struct ObjectStatePlugin;

impl Plugin for ObjectStatePlugin {
    fn build(&self, app: &mut App) {
        // The store is seeded from the layout, so the layout must exist first.
        app.init_resource::<BuildingLayout>()
            .init_resource::<ObjectStateStore>()
            .init_resource::<ToggleLog>()
            .add_event::<ToggleObjectEvent>()
            .add_event::<ObjectToggled>()
            .add_systems(
                Update,
                (
                    handle_toggle_commands.in_set(BuildingSet::Apply),
                    report_toggles.in_set(BuildingSet::Report),
                ),
            );
    }
}
