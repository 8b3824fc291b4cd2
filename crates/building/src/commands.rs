//! Plain-data form of the two viewer commands.
//!
//! Input handlers emit the events directly; [`SceneCommand`] exists so scripted
//! drivers and tests can describe the same requests as serializable values.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::floors::{FloorLevel, SelectFloorEvent};
use crate::layout::ObjectId;
use crate::object_state::ToggleObjectEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneCommand {
    Toggle { id: ObjectId },
    SelectFloor { level: FloorLevel },
}

/// Queue `command` as its event; it takes effect on the next `Update`.
pub fn apply_scene_command(world: &mut World, command: SceneCommand) {
    match command {
        SceneCommand::Toggle { id } => {
            world.send_event(ToggleObjectEvent { id });
        }
        SceneCommand::SelectFloor { level } => {
            world.send_event(SelectFloorEvent { level });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_command_serialization() {
        let command = SceneCommand::Toggle { id: ObjectId(4) };
        let json = serde_json::to_string(&command).unwrap();
        assert_eq!(json, r#"{"Toggle":{"id":4}}"#);
        let decoded: SceneCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(command, decoded);

        let command = SceneCommand::SelectFloor {
            level: FloorLevel::Two,
        };
        let json = serde_json::to_string(&command).unwrap();
        let decoded: SceneCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(command, decoded);
    }

    #[test]
    fn test_script_parses_from_json_list() {
        let script = r#"[{"SelectFloor":{"level":"Two"}},{"Toggle":{"id":8}}]"#;
        let commands: Vec<SceneCommand> = serde_json::from_str(script).unwrap();
        assert_eq!(
            commands,
            vec![
                SceneCommand::SelectFloor {
                    level: FloorLevel::Two
                },
                SceneCommand::Toggle { id: ObjectId(8) },
            ]
        );
    }
}
