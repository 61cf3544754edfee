use glam::Vec2;

use crate::state::signal::DebouncedSet;

/// Number of touch point slots. A new point arriving while every slot is
/// held down is dropped.
pub const MAX_POINTS: usize = 10;

/// Touch point slots: parallel id/position arrays plus a double-buffered
/// down state per slot. Slot indices are stable for the lifetime of a touch;
/// a released slot is reclaimed by the next new point.
pub struct TouchState {
    ids: [u32; MAX_POINTS],
    positions: [Vec2; MAX_POINTS],
    states: DebouncedSet<MAX_POINTS>,
    dropped: u64,
}

impl TouchState {
    pub fn new() -> Self {
        Self {
            ids: [0; MAX_POINTS],
            positions: [Vec2::ZERO; MAX_POINTS],
            states: DebouncedSet::new(),
            dropped: 0,
        }
    }

    /// Record a touch sample. An active point with the same id is updated in
    /// place; a new down claims the first free slot; a new point with no free
    /// slot is dropped; a release for an unknown id is ignored.
    pub fn record(&mut self, id: u32, x: f32, y: f32, down: bool) {
        let position = Vec2::new(x, y);
        if let Some(slot) = self.index_of(id) {
            self.positions[slot] = position;
            self.states.set(slot, down);
            return;
        }
        if !down {
            return;
        }
        match (0..MAX_POINTS).find(|&slot| !self.states.is_down(slot)) {
            Some(slot) => {
                self.ids[slot] = id;
                self.positions[slot] = position;
                self.states.set(slot, true);
            }
            None => {
                self.dropped += 1;
                log::debug!("all {} touch slots occupied, dropping point {}", MAX_POINTS, id);
            }
        }
    }

    /// Slot index of an active point, if the id is currently down.
    pub fn index_of(&self, id: u32) -> Option<usize> {
        (0..MAX_POINTS).find(|&slot| self.states.is_down(slot) && self.ids[slot] == id)
    }

    /// Number of points currently down.
    pub fn point_count(&self) -> usize {
        self.states.down_count()
    }

    /// Id held by a slot. Valid for active slots and, until the next frame
    /// boundary, for just-released ones.
    pub fn id(&self, slot: usize) -> Option<u32> {
        if self.states.is_down(slot) || self.states.was_released(slot) {
            Some(self.ids[slot])
        } else {
            None
        }
    }

    /// Last known position of a slot. Valid for active slots and, until the
    /// next frame boundary, for just-released ones.
    pub fn position(&self, slot: usize) -> Option<Vec2> {
        if self.states.is_down(slot) || self.states.was_released(slot) {
            Some(self.positions[slot])
        } else {
            None
        }
    }

    pub fn is_down(&self, slot: usize) -> bool {
        self.states.is_down(slot)
    }

    pub fn was_pressed(&self, slot: usize) -> bool {
        self.states.was_pressed(slot)
    }

    pub fn was_released(&self, slot: usize) -> bool {
        self.states.was_released(slot)
    }

    /// Total new points discarded because every slot was occupied.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Frame boundary: snapshot the per-slot down states.
    pub fn advance(&mut self) {
        self.states.advance();
    }
}

impl Default for TouchState {
    fn default() -> Self {
        Self::new()
    }
}
