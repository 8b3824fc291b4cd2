use bevy::prelude::*;

use crate::layout::BuildingLayout;
use crate::toggle_log::ToggleLog;

use super::types::{ObjectStateStore, ObjectToggled, ToggleObjectEvent};

/// Apply queued toggle commands in order.
///
/// Each accepted command produces exactly one [`ObjectToggled`]. Rejected
/// commands are logged and produce nothing.
pub fn handle_toggle_commands(
    mut commands: EventReader<ToggleObjectEvent>,
    mut toggled: EventWriter<ObjectToggled>,
    mut store: ResMut<ObjectStateStore>,
    mut log: ResMut<ToggleLog>,
    layout: Res<BuildingLayout>,
) {
    for command in commands.read() {
        match store.toggle(command.id, &layout) {
            Ok(state) => {
                log.push(command.id, state);
                toggled.send(ObjectToggled {
                    id: command.id,
                    state,
                });
            }
            Err(err) => warn!("Ignoring toggle: {}", err),
        }
    }
}

/// Write one diagnostic line per state change, e.g. `Floor 2 - Light 1 is Off`.
pub fn report_toggles(mut toggled: EventReader<ObjectToggled>, layout: Res<BuildingLayout>) {
    for event in toggled.read() {
        let Some(object) = layout.get(event.id) else {
            continue;
        };
        info!("{}", toggle_report_line(&object.label, event));
    }
}

pub fn toggle_report_line(label: &str, event: &ObjectToggled) -> String {
    format!("{} is {}", label, event.state.status_word())
}
