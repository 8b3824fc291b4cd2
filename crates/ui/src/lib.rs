use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use building::BuildingSet;

pub mod activity_panel;
pub mod floor_selector;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<activity_panel::ActivityPanelVisible>()
            .add_systems(Startup, theme::apply_overlay_theme)
            .add_systems(
                Update,
                (
                    floor_selector::floor_selector_ui,
                    floor_selector::floor_keybinds,
                    activity_panel::activity_panel_keybind,
                )
                    .in_set(BuildingSet::Input),
            )
            .add_systems(
                Update,
                activity_panel::activity_panel_ui.after(BuildingSet::Report),
            );
    }
}
