mod plugin;
mod systems;
mod types;

pub use plugin::ObjectStatePlugin;
pub use systems::{handle_toggle_commands, report_toggles, toggle_report_line};
pub use types::{
    DoorState, LightState, ObjectState, ObjectStateStore, ObjectToggled, ToggleError,
    ToggleObjectEvent,
};
