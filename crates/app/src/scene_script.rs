//! `BUILDVIEW_SCRIPT` mode: applies a JSON list of [`SceneCommand`]s one at a
//! time so a session can be replayed without a mouse.

use std::collections::VecDeque;

use bevy::prelude::*;

use building::commands::{apply_scene_command, SceneCommand};

/// Frames to wait before the first command so meshes are spawned and drawn.
const WARMUP_FRAMES: u32 = 60;
/// Frames between consecutive commands.
const STEP_FRAMES: u32 = 30;

#[derive(Resource, Debug, Default)]
struct SceneScript {
    frame: u32,
    pending: VecDeque<SceneCommand>,
}

pub fn parse_script(json: &str) -> Result<Vec<SceneCommand>, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn install(app: &mut App, path: String) {
    let commands = match std::fs::read_to_string(&path) {
        Ok(json) => match parse_script(&json) {
            Ok(commands) => commands,
            Err(err) => {
                warn!("Script {} is not a command list: {}", path, err);
                return;
            }
        },
        Err(err) => {
            warn!("Cannot read script {}: {}", path, err);
            return;
        }
    };

    info!("Replaying {} commands from {}", commands.len(), path);
    app.insert_resource(SceneScript {
        frame: 0,
        pending: commands.into(),
    })
    .add_systems(Update, drive_scene_script.before(building::BuildingSet::Input));
}

fn drive_scene_script(world: &mut World) {
    let command = {
        let Some(mut script) = world.get_resource_mut::<SceneScript>() else {
            return;
        };
        script.frame += 1;
        if script.frame < WARMUP_FRAMES || (script.frame - WARMUP_FRAMES) % STEP_FRAMES != 0 {
            return;
        }
        script.pending.pop_front()
    };

    match command {
        Some(command) => {
            debug!("Script: {:?}", command);
            apply_scene_command(world, command);
        }
        None => {
            info!("Script finished");
            world.remove_resource::<SceneScript>();
        }
    }
}
