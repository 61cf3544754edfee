/// A set of N boolean signals, each tracked with a current and a previous
/// per-frame value so edges (press/release) can be detected by comparison.
///
/// Writers mutate only the current snapshot; `advance` is the only way the
/// previous snapshot changes. Out-of-range indices are ignored on write and
/// read as "up".
#[derive(Debug, Clone)]
pub struct DebouncedSet<const N: usize> {
    current: [bool; N],
    previous: [bool; N],
}

impl<const N: usize> DebouncedSet<N> {
    pub fn new() -> Self {
        Self {
            current: [false; N],
            previous: [false; N],
        }
    }

    /// Set the current value of one signal.
    pub fn set(&mut self, index: usize, value: bool) {
        if index < N {
            self.current[index] = value;
        }
    }

    pub fn is_down(&self, index: usize) -> bool {
        index < N && self.current[index]
    }

    pub fn is_up(&self, index: usize) -> bool {
        !self.is_down(index)
    }

    /// Down this frame, up the previous frame.
    pub fn was_pressed(&self, index: usize) -> bool {
        index < N && self.current[index] && !self.previous[index]
    }

    /// Up this frame, down the previous frame.
    pub fn was_released(&self, index: usize) -> bool {
        index < N && !self.current[index] && self.previous[index]
    }

    /// Copy the current snapshot into the previous one.
    pub fn advance(&mut self) {
        self.previous = self.current;
    }

    /// Force every signal (both snapshots) back to up.
    pub fn reset(&mut self) {
        self.current = [false; N];
        self.previous = [false; N];
    }

    /// Number of signals currently down.
    pub fn down_count(&self) -> usize {
        self.current.iter().filter(|&&v| v).count()
    }
}

impl<const N: usize> Default for DebouncedSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_edge_visible_until_advance() {
        let mut set: DebouncedSet<4> = DebouncedSet::new();
        set.set(2, true);
        assert!(set.is_down(2));
        assert!(set.was_pressed(2));
        set.advance();
        assert!(set.is_down(2));
        assert!(!set.was_pressed(2));
    }

    #[test]
    fn release_edge_visible_until_advance() {
        let mut set: DebouncedSet<4> = DebouncedSet::new();
        set.set(1, true);
        set.advance();
        set.set(1, false);
        assert!(set.was_released(1));
        assert!(set.is_up(1));
        set.advance();
        assert!(!set.was_released(1));
    }

    #[test]
    fn held_signal_stays_down_across_frames() {
        let mut set: DebouncedSet<4> = DebouncedSet::new();
        set.set(0, true);
        set.advance();
        set.advance();
        assert!(set.is_down(0));
        assert!(!set.was_pressed(0));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut set: DebouncedSet<4> = DebouncedSet::new();
        set.set(9, true);
        assert!(!set.is_down(9));
        assert!(set.is_up(9));
        assert!(!set.was_pressed(9));
        assert!(!set.was_released(9));
        assert_eq!(set.down_count(), 0);
    }

    #[test]
    fn reset_clears_both_snapshots() {
        let mut set: DebouncedSet<4> = DebouncedSet::new();
        set.set(3, true);
        set.advance();
        set.reset();
        assert!(set.is_up(3));
        assert!(!set.was_released(3));
    }
}
