//! Keeps overlay clicks and scrolls from reaching the 3D scene.

use bevy_egui::EguiContexts;

/// `true` while the cursor is over the floor selector or activity window, or
/// egui is mid-interaction.
pub fn pointer_over_overlay(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.is_pointer_over_area() || ctx.wants_pointer_input()
}
