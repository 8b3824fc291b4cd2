//! Ring-buffer log of recently applied toggles.
//!
//! The [`ToggleLog`] resource keeps the last 64 `(ObjectId, ObjectState)`
//! pairs so the UI can show recent activity without listening to events itself.

use bevy::prelude::*;

use crate::layout::ObjectId;
use crate::object_state::ObjectState;

/// Maximum number of entries retained in the ring buffer.
pub const MAX_ENTRIES: usize = 64;

#[derive(Resource, Debug, Clone, Default)]
pub struct ToggleLog {
    entries: Vec<(ObjectId, ObjectState)>,
    total: u64,
}

impl ToggleLog {
    /// Record a toggle. If the buffer is full the oldest entry is evicted.
    pub fn push(&mut self, id: ObjectId, state: ObjectState) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.entries.push((id, state));
        self.total += 1;
    }

    /// Return the last `n` entries (or fewer if the log is shorter), oldest first.
    pub fn last_n(&self, n: usize) -> &[(ObjectId, ObjectState)] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Toggles recorded since startup, including evicted ones.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object_state::{DoorState, LightState};

    #[test]
    fn push_and_last_n() {
        let mut log = ToggleLog::default();
        log.push(ObjectId(2), ObjectState::Light(LightState { is_on: false }));
        log.push(ObjectId(5), ObjectState::Door(DoorState { is_open: true }));

        let last = log.last_n(1);
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].0, ObjectId(5));

        assert_eq!(log.last_n(10).len(), 2);
        assert_eq!(log.total(), 2);
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut log = ToggleLog::default();
        for i in 0..70 {
            log.push(
                ObjectId(i),
                ObjectState::Light(LightState { is_on: i % 2 == 0 }),
            );
        }
        assert_eq!(log.last_n(usize::MAX).len(), MAX_ENTRIES);
        assert_eq!(log.total(), 70);
        // The oldest retained should be id 6 (70 - 64)
        assert_eq!(log.last_n(MAX_ENTRIES)[0].0, ObjectId(6));
    }
}
