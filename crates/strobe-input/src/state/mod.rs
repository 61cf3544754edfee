pub mod gamepad;
pub mod keyboard;
pub mod mouse;
pub mod signal;
pub mod touch;

use glam::Vec2;

use crate::api::app::AppConfig;
use crate::dispatch::EventSink;
use gamepad::GamepadState;
use keyboard::KeyboardState;
use mouse::MouseState;
use touch::TouchState;

/// The authoritative input snapshot for one application session: keyboard,
/// mouse, gamepad, and touch state, each double-buffered per frame.
///
/// One instance exists per running app, owned by the frame-loop driver and
/// passed explicitly to callbacks and app logic. Callbacks (the `EventSink`
/// impl) write only current-frame state and queues; `advance_frame` is the
/// only writer of previous-frame state; app logic only reads. There is no
/// internal locking — correctness comes from that phase ordering.
pub struct InputState {
    pub keyboard: KeyboardState,
    pub mouse: MouseState,
    pub gamepads: GamepadState,
    pub touch: TouchState,
}

impl InputState {
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    pub fn with_config(config: &AppConfig) -> Self {
        let mut keyboard =
            KeyboardState::with_capacities(config.key_queue_capacity, config.char_queue_capacity);
        keyboard.set_exit_key(config.exit_key);
        Self {
            keyboard,
            mouse: MouseState::new(),
            gamepads: GamepadState::new(),
            touch: TouchState::new(),
        }
    }

    /// Frame boundary, run exactly once per frame before that frame's events
    /// are applied: copies every current snapshot into the matching previous
    /// one, zeroes the wheel accumulator, and clears the key/char queues.
    /// Held keys and buttons stay down until an explicit release arrives.
    pub fn advance_frame(&mut self) {
        self.keyboard.advance();
        self.mouse.advance();
        self.gamepads.advance();
        self.touch.advance();
    }

    // -- Convenience queries delegating to the device states --

    pub fn is_key_down(&self, code: u32) -> bool {
        self.keyboard.is_down(code)
    }

    pub fn is_key_up(&self, code: u32) -> bool {
        self.keyboard.is_up(code)
    }

    pub fn was_key_pressed(&self, code: u32) -> bool {
        self.keyboard.was_pressed(code)
    }

    pub fn was_key_released(&self, code: u32) -> bool {
        self.keyboard.was_released(code)
    }

    /// Pop the oldest key pressed this frame. Drain before the next frame
    /// boundary or lose the rest.
    pub fn next_key_pressed(&mut self) -> Option<u32> {
        self.keyboard.next_pressed()
    }

    /// Pop the oldest character typed this frame.
    pub fn next_char_pressed(&mut self) -> Option<char> {
        self.keyboard.next_char()
    }

    /// Iterate this frame's queued key presses without consuming them.
    pub fn pressed_keys(&self) -> impl Iterator<Item = u32> + '_ {
        self.keyboard.pressed_keys()
    }

    /// Iterate this frame's typed characters without consuming them.
    pub fn typed_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.keyboard.typed_chars()
    }

    pub fn is_mouse_down(&self, button: u32) -> bool {
        self.mouse.is_down(button)
    }

    pub fn was_mouse_pressed(&self, button: u32) -> bool {
        self.mouse.was_pressed(button)
    }

    pub fn was_mouse_released(&self, button: u32) -> bool {
        self.mouse.was_released(button)
    }

    pub fn mouse_position(&self) -> Vec2 {
        self.mouse.position()
    }

    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse.delta()
    }

    pub fn wheel_move(&self) -> Vec2 {
        self.mouse.wheel_move()
    }

    pub fn touch_count(&self) -> usize {
        self.touch.point_count()
    }

    pub fn touch_position(&self, slot: usize) -> Option<Vec2> {
        self.touch.position(slot)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for InputState {
    fn record_key_transition(&mut self, code: u32, pressed: bool) {
        self.keyboard.record_transition(code, pressed);
    }

    fn record_char(&mut self, codepoint: u32) {
        self.keyboard.record_char(codepoint);
    }

    fn record_mouse_button(&mut self, button: u32, pressed: bool) {
        self.mouse.record_button(button, pressed);
    }

    fn record_mouse_move(&mut self, x: f32, y: f32) {
        self.mouse.record_move(x, y);
    }

    fn record_scroll(&mut self, dx: f32, dy: f32) {
        self.mouse.record_scroll(dx, dy);
    }

    fn record_cursor_presence(&mut self, on_screen: bool) {
        self.mouse.set_on_screen(on_screen);
    }

    fn record_gamepad_connect(&mut self, pad: u32, connected: bool) {
        self.gamepads.record_connect(pad, connected);
    }

    fn record_gamepad_button(&mut self, pad: u32, button: u32, pressed: bool) {
        self.gamepads.record_button(pad, button, pressed);
    }

    fn record_gamepad_axis(&mut self, pad: u32, axis: u32, value: f32) {
        self.gamepads.record_axis(pad, axis, value);
    }

    fn record_touch(&mut self, id: u32, x: f32, y: f32, down: bool) {
        self.touch.record(id, x, y, down);
    }

    fn exit_key(&self) -> Option<u32> {
        self.keyboard.exit_key()
    }
}
