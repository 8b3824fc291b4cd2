//! Floor selection: which building level is highlighted.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{FLOOR_HIGHLIGHT_COLOR, FLOOR_IDLE_COLOR, FLOOR_SPACING};

/// A building level. Only two exist, so a selection can never be out of range.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloorLevel {
    #[default]
    One,
    Two,
}

impl FloorLevel {
    pub const ALL: [FloorLevel; 2] = [FloorLevel::One, FloorLevel::Two];

    /// 1-based floor number as shown to the user.
    pub fn number(self) -> u8 {
        match self {
            FloorLevel::One => 1,
            FloorLevel::Two => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FloorLevel::One => "Floor 1",
            FloorLevel::Two => "Floor 2",
        }
    }

    /// World-space Y of this level's slab. Lower floors sit below floor 1.
    pub fn slab_height(self) -> f32 {
        -(f32::from(self.number()) - 1.0) * FLOOR_SPACING
    }
}

/// The floor whose slab is highlighted.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectedFloor(pub FloorLevel);

/// Request to highlight a floor.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectFloorEvent {
    pub level: FloorLevel,
}

/// Slab color for `level` given the current selection.
pub fn floor_color(level: FloorLevel, selected: FloorLevel) -> Color {
    if level == selected {
        FLOOR_HIGHLIGHT_COLOR
    } else {
        FLOOR_IDLE_COLOR
    }
}

/// Apply floor selection requests. Re-selecting the current floor leaves the
/// resource untouched so change detection does not fire.
pub fn handle_select_floor(
    mut events: EventReader<SelectFloorEvent>,
    mut selected: ResMut<SelectedFloor>,
) {
    for event in events.read() {
        if selected.0 == event.level {
            continue;
        }
        selected.0 = event.level;
        info!("Selected {}", event.level.label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_floor_one() {
        assert_eq!(SelectedFloor::default().0, FloorLevel::One);
    }

    #[test]
    fn test_numbers_match_labels() {
        for level in FloorLevel::ALL {
            assert_eq!(level.label(), format!("Floor {}", level.number()));
        }
    }

    #[test]
    fn test_slab_heights() {
        assert_eq!(FloorLevel::One.slab_height(), 0.0);
        assert_eq!(FloorLevel::Two.slab_height(), -3.0);
    }

    #[test]
    fn test_exactly_one_floor_highlighted() {
        for selected in FloorLevel::ALL {
            let highlighted = FloorLevel::ALL
                .iter()
                .filter(|&&level| floor_color(level, selected) == FLOOR_HIGHLIGHT_COLOR)
                .count();
            assert_eq!(highlighted, 1);
            assert_eq!(floor_color(selected, selected), FLOOR_HIGHLIGHT_COLOR);
        }
    }
}
