use crate::events::InputEvent;
use crate::window::WindowState;

/// The record capability a backend adapter needs from input state.
///
/// Every method performs one mutation and returns immediately; none blocks,
/// allocates beyond a queue append, or surfaces an error. Out-of-range
/// indices and full queues degrade silently. Implemented by
/// [`InputState`](crate::InputState); test doubles can implement it too.
pub trait EventSink {
    fn record_key_transition(&mut self, code: u32, pressed: bool);
    fn record_char(&mut self, codepoint: u32);
    fn record_mouse_button(&mut self, button: u32, pressed: bool);
    fn record_mouse_move(&mut self, x: f32, y: f32);
    fn record_scroll(&mut self, dx: f32, dy: f32);
    fn record_cursor_presence(&mut self, on_screen: bool);
    fn record_gamepad_connect(&mut self, pad: u32, connected: bool);
    fn record_gamepad_button(&mut self, pad: u32, button: u32, pressed: bool);
    fn record_gamepad_axis(&mut self, pad: u32, axis: u32, value: f32);
    fn record_touch(&mut self, id: u32, x: f32, y: f32, down: bool);

    /// Key code that should raise the window close flag, if one is set.
    fn exit_key(&self) -> Option<u32> {
        None
    }
}

/// Apply one raw backend event: exactly one sink mutation for input events,
/// one flag update for window events.
///
/// Key auto-repeat is collapsed here — the key is already down, so the event
/// neither changes state nor re-enqueues the code. A key-down matching the
/// sink's exit key additionally requests window close.
pub fn apply_event<S: EventSink>(sink: &mut S, window: &mut WindowState, event: InputEvent) {
    match event {
        InputEvent::KeyDown { code } => {
            if sink.exit_key() == Some(code) {
                window.request_close();
            }
            sink.record_key_transition(code, true);
        }
        InputEvent::KeyUp { code } => sink.record_key_transition(code, false),
        InputEvent::KeyRepeat { .. } => {}
        InputEvent::CharInput { codepoint } => sink.record_char(codepoint),
        InputEvent::MouseButtonDown { button } => sink.record_mouse_button(button, true),
        InputEvent::MouseButtonUp { button } => sink.record_mouse_button(button, false),
        InputEvent::MouseMove { x, y } => sink.record_mouse_move(x, y),
        InputEvent::Scroll { dx, dy } => sink.record_scroll(dx, dy),
        InputEvent::CursorEnter { inside } => sink.record_cursor_presence(inside),
        InputEvent::GamepadConnected { pad } => sink.record_gamepad_connect(pad, true),
        InputEvent::GamepadDisconnected { pad } => sink.record_gamepad_connect(pad, false),
        InputEvent::GamepadButtonDown { pad, button } => {
            sink.record_gamepad_button(pad, button, true)
        }
        InputEvent::GamepadButtonUp { pad, button } => {
            sink.record_gamepad_button(pad, button, false)
        }
        InputEvent::GamepadAxis { pad, axis, value } => sink.record_gamepad_axis(pad, axis, value),
        InputEvent::TouchDown { id, x, y } => sink.record_touch(id, x, y, true),
        InputEvent::TouchUp { id, x, y } => sink.record_touch(id, x, y, false),
        InputEvent::TouchMove { id, x, y } => sink.record_touch(id, x, y, true),
        InputEvent::FocusChanged { focused } => window.set_focused(focused),
        InputEvent::Resized { width, height } => window.record_resize(width, height),
        InputEvent::Minimized { minimized } => window.set_minimized(minimized),
        InputEvent::Maximized { maximized } => window.set_maximized(maximized),
    }
}
