use crate::events::queue::BoundedQueue;
use crate::state::signal::DebouncedSet;

/// Number of tracked key codes. Codes at or above this are dropped.
pub const MAX_KEYS: usize = 512;

/// Default capacity of the per-frame key-pressed and char-typed queues.
pub const DEFAULT_QUEUE_CAPACITY: usize = 16;

/// Double-buffered keyboard state plus the per-frame pressed/typed queues.
pub struct KeyboardState {
    keys: DebouncedSet<MAX_KEYS>,
    pressed_queue: BoundedQueue<u32>,
    char_queue: BoundedQueue<char>,
    exit_key: Option<u32>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::with_capacities(DEFAULT_QUEUE_CAPACITY, DEFAULT_QUEUE_CAPACITY)
    }

    pub fn with_capacities(key_queue: usize, char_queue: usize) -> Self {
        Self {
            keys: DebouncedSet::new(),
            pressed_queue: BoundedQueue::new(key_queue),
            char_queue: BoundedQueue::new(char_queue),
            exit_key: None,
        }
    }

    /// Record a key going down or up. Presses are also appended to the
    /// pressed queue (dropped when full). Out-of-range codes are ignored.
    pub fn record_transition(&mut self, code: u32, pressed: bool) {
        if code as usize >= MAX_KEYS {
            log::debug!("key code {} out of range, dropping", code);
            return;
        }
        self.keys.set(code as usize, pressed);
        if pressed {
            self.pressed_queue.push(code);
        }
    }

    /// Record a typed unicode codepoint. Invalid codepoints are ignored.
    pub fn record_char(&mut self, codepoint: u32) {
        match char::from_u32(codepoint) {
            Some(c) => {
                self.char_queue.push(c);
            }
            None => log::debug!("invalid codepoint {:#x}, dropping", codepoint),
        }
    }

    pub fn is_down(&self, code: u32) -> bool {
        self.keys.is_down(code as usize)
    }

    pub fn is_up(&self, code: u32) -> bool {
        self.keys.is_up(code as usize)
    }

    pub fn was_pressed(&self, code: u32) -> bool {
        self.keys.was_pressed(code as usize)
    }

    pub fn was_released(&self, code: u32) -> bool {
        self.keys.was_released(code as usize)
    }

    /// Pop the oldest key pressed this frame, if any.
    pub fn next_pressed(&mut self) -> Option<u32> {
        self.pressed_queue.pop()
    }

    /// Pop the oldest character typed this frame, if any.
    pub fn next_char(&mut self) -> Option<char> {
        self.char_queue.pop()
    }

    /// Iterate this frame's queued key presses without consuming them.
    pub fn pressed_keys(&self) -> impl Iterator<Item = u32> + '_ {
        self.pressed_queue.iter().copied()
    }

    /// Iterate this frame's typed characters without consuming them.
    pub fn typed_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.char_queue.iter().copied()
    }

    /// Number of key presses still queued this frame.
    pub fn pressed_count(&self) -> usize {
        self.pressed_queue.len()
    }

    /// Number of typed characters still queued this frame.
    pub fn char_count(&self) -> usize {
        self.char_queue.len()
    }

    /// The key that raises the window close flag when pressed, if any.
    pub fn exit_key(&self) -> Option<u32> {
        self.exit_key
    }

    pub fn set_exit_key(&mut self, code: Option<u32>) {
        self.exit_key = code;
    }

    /// Frame boundary: snapshot current into previous and clear the queues.
    /// Held keys stay down until an explicit release arrives.
    pub fn advance(&mut self) {
        self.keys.advance();
        self.pressed_queue.clear();
        self.char_queue.clear();
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_enqueues_and_sets_state() {
        let mut kb = KeyboardState::new();
        kb.record_transition(65, true);
        assert!(kb.is_down(65));
        assert!(kb.was_pressed(65));
        assert_eq!(kb.next_pressed(), Some(65));
        assert_eq!(kb.next_pressed(), None);
    }

    #[test]
    fn release_does_not_enqueue() {
        let mut kb = KeyboardState::new();
        kb.record_transition(65, true);
        kb.advance();
        kb.record_transition(65, false);
        assert!(kb.was_released(65));
        assert_eq!(kb.pressed_count(), 0);
    }

    #[test]
    fn queue_caps_at_capacity() {
        let mut kb = KeyboardState::with_capacities(4, 4);
        for code in 0..6 {
            kb.record_transition(code, true);
        }
        // Exactly 4 retained; the 5th and 6th were dropped
        assert_eq!(kb.pressed_count(), 4);
        assert_eq!(kb.next_pressed(), Some(0));
        assert_eq!(kb.next_pressed(), Some(1));
        assert_eq!(kb.next_pressed(), Some(2));
        assert_eq!(kb.next_pressed(), Some(3));
        assert_eq!(kb.next_pressed(), None);
        // State was still recorded for the dropped presses
        assert!(kb.is_down(5));
    }

    #[test]
    fn out_of_range_code_is_dropped_entirely() {
        let mut kb = KeyboardState::new();
        kb.record_transition(512, true);
        kb.record_transition(4096, true);
        assert!(!kb.is_down(512));
        assert_eq!(kb.pressed_count(), 0);
    }

    #[test]
    fn advance_clears_queues_but_not_held_keys() {
        let mut kb = KeyboardState::new();
        kb.record_transition(32, true);
        kb.record_char('a' as u32);
        kb.advance();
        assert_eq!(kb.pressed_count(), 0);
        assert_eq!(kb.char_count(), 0);
        assert!(kb.is_down(32));
        assert!(!kb.was_pressed(32));
    }

    #[test]
    fn chars_pop_in_typed_order() {
        let mut kb = KeyboardState::new();
        kb.record_char('h' as u32);
        kb.record_char('i' as u32);
        assert_eq!(kb.next_char(), Some('h'));
        assert_eq!(kb.next_char(), Some('i'));
        assert_eq!(kb.next_char(), None);
    }

    #[test]
    fn iterators_do_not_consume_queues() {
        let mut kb = KeyboardState::new();
        kb.record_transition(10, true);
        kb.record_transition(20, true);
        kb.record_char('x' as u32);
        assert_eq!(kb.pressed_keys().collect::<Vec<_>>(), vec![10, 20]);
        assert_eq!(kb.pressed_keys().count(), 2);
        assert_eq!(kb.typed_chars().collect::<Vec<_>>(), vec!['x']);
        assert_eq!(kb.next_pressed(), Some(10));
    }

    #[test]
    fn invalid_codepoint_is_dropped() {
        let mut kb = KeyboardState::new();
        kb.record_char(0xD800); // unpaired surrogate
        assert_eq!(kb.char_count(), 0);
    }
}
