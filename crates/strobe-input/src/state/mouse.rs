use glam::Vec2;

use crate::state::signal::DebouncedSet;

/// Number of tracked mouse buttons (left/right/middle plus side buttons).
pub const MAX_BUTTONS: usize = 7;

/// Double-buffered mouse state: position, buttons, wheel accumulator,
/// and the offset/scale transform applied to reported coordinates.
pub struct MouseState {
    current_position: Vec2,
    previous_position: Vec2,
    offset: Vec2,
    scale: Vec2,
    buttons: DebouncedSet<MAX_BUTTONS>,
    current_wheel: Vec2,
    previous_wheel: Vec2,
    cursor_hidden: bool,
    on_screen: bool,
}

impl MouseState {
    pub fn new() -> Self {
        Self {
            current_position: Vec2::ZERO,
            previous_position: Vec2::ZERO,
            offset: Vec2::ZERO,
            scale: Vec2::ONE,
            buttons: DebouncedSet::new(),
            current_wheel: Vec2::ZERO,
            previous_wheel: Vec2::ZERO,
            cursor_hidden: false,
            on_screen: true,
        }
    }

    /// Record a cursor move. Only the current position changes; the previous
    /// position is touched exclusively by `advance`.
    pub fn record_move(&mut self, x: f32, y: f32) {
        self.current_position = Vec2::new(x, y);
    }

    /// Record a button going down or up. Out-of-range buttons are ignored.
    pub fn record_button(&mut self, button: u32, pressed: bool) {
        if button as usize >= MAX_BUTTONS {
            log::debug!("mouse button {} out of range, dropping", button);
            return;
        }
        self.buttons.set(button as usize, pressed);
    }

    /// Record a scroll delta. Multiple scroll events within one frame
    /// accumulate rather than overwrite.
    pub fn record_scroll(&mut self, dx: f32, dy: f32) {
        self.current_wheel += Vec2::new(dx, dy);
    }

    pub fn set_on_screen(&mut self, on_screen: bool) {
        self.on_screen = on_screen;
    }

    pub fn is_on_screen(&self) -> bool {
        self.on_screen
    }

    pub fn hide_cursor(&mut self) {
        self.cursor_hidden = true;
    }

    pub fn show_cursor(&mut self) {
        self.cursor_hidden = false;
    }

    pub fn is_cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    /// Translation applied to reported positions before scaling.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Scale applied to reported positions after the offset.
    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    /// Cursor position with the offset/scale transform applied.
    pub fn position(&self) -> Vec2 {
        (self.current_position + self.offset) * self.scale
    }

    /// Cursor position as delivered by the backend, untransformed.
    pub fn raw_position(&self) -> Vec2 {
        self.current_position
    }

    /// Untransformed cursor movement since the last frame boundary.
    pub fn delta(&self) -> Vec2 {
        self.current_position - self.previous_position
    }

    /// Scroll accumulated by this frame's events so far.
    pub fn wheel_move(&self) -> Vec2 {
        self.current_wheel
    }

    /// Scroll total of the previous frame.
    pub fn previous_wheel_move(&self) -> Vec2 {
        self.previous_wheel
    }

    pub fn is_down(&self, button: u32) -> bool {
        self.buttons.is_down(button as usize)
    }

    pub fn is_up(&self, button: u32) -> bool {
        self.buttons.is_up(button as usize)
    }

    pub fn was_pressed(&self, button: u32) -> bool {
        self.buttons.was_pressed(button as usize)
    }

    pub fn was_released(&self, button: u32) -> bool {
        self.buttons.was_released(button as usize)
    }

    /// Frame boundary: snapshot position/buttons/wheel and zero the
    /// wheel accumulator for the next frame.
    pub fn advance(&mut self) {
        self.buttons.advance();
        self.previous_position = self.current_position;
        self.previous_wheel = self.current_wheel;
        self.current_wheel = Vec2::ZERO;
    }
}

impl Default for MouseState {
    fn default() -> Self {
        Self::new()
    }
}
