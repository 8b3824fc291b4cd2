use bevy::prelude::*;

pub mod commands;
pub mod config;
pub mod floors;
pub mod layout;
pub mod object_state;
pub mod toggle_log;

#[cfg(test)]
pub mod test_harness;

/// Ordering of the building model's `Update` work within a frame.
///
/// Input systems (picking observers, UI, keybinds) enqueue commands,
/// `Apply` mutates state, `Report` logs and feeds the redraw systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum BuildingSet {
    Input,
    Apply,
    Report,
}

pub struct BuildingPlugin;

impl Plugin for BuildingPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (BuildingSet::Input, BuildingSet::Apply, BuildingSet::Report).chain(),
        )
        .init_resource::<floors::SelectedFloor>()
        .add_event::<floors::SelectFloorEvent>()
        .add_systems(
            Update,
            floors::handle_select_floor.in_set(BuildingSet::Apply),
        )
        .add_systems(Startup, log_layout_summary);

        app.add_plugins(object_state::ObjectStatePlugin);
    }
}

fn log_layout_summary(
    layout: Res<layout::BuildingLayout>,
    store: Res<object_state::ObjectStateStore>,
) {
    if layout.is_empty() {
        warn!("Building layout has no objects");
        return;
    }
    info!(
        "Building layout: {} objects ({} floors, {} lights, {} doors), {} toggleable",
        layout.len(),
        layout.floors().count(),
        layout.lights().count(),
        layout.doors().count(),
        store.len()
    );
}
