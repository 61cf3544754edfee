use bytemuck::{Pod, Zeroable};

/// An app-level event communicated to the host at the end of a frame.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct AppEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl AppEvent {
    pub const FLOATS: usize = 4;
}

/// One active touch point in the flat snapshot buffer shared with the host.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct TouchSample {
    pub id: f32,
    pub x: f32,
    pub y: f32,
    pub down: f32,
}

impl TouchSample {
    pub const FLOATS: usize = 4;
}

/// Key codes for commonly queried keys. Codes follow the host backend's
/// layout-independent scheme (printable keys at their ASCII uppercase value,
/// function keys from 256 up); anything in [0, 512) is accepted.
pub mod keys {
    pub const SPACE: u32 = 32;
    pub const A: u32 = 65;
    pub const D: u32 = 68;
    pub const S: u32 = 83;
    pub const W: u32 = 87;
    pub const ESCAPE: u32 = 256;
    pub const ENTER: u32 = 257;
    pub const TAB: u32 = 258;
    pub const BACKSPACE: u32 = 259;
    pub const RIGHT: u32 = 262;
    pub const LEFT: u32 = 263;
    pub const DOWN: u32 = 264;
    pub const UP: u32 = 265;
    pub const LEFT_SHIFT: u32 = 340;
    pub const LEFT_CONTROL: u32 = 341;
}

/// Mouse button indices.
pub mod mouse_button {
    pub const LEFT: u32 = 0;
    pub const RIGHT: u32 = 1;
    pub const MIDDLE: u32 = 2;
    pub const SIDE: u32 = 3;
    pub const EXTRA: u32 = 4;
    pub const FORWARD: u32 = 5;
    pub const BACK: u32 = 6;
}

/// Gamepad button indices.
pub mod pad_button {
    pub const DPAD_UP: u32 = 0;
    pub const DPAD_DOWN: u32 = 1;
    pub const DPAD_LEFT: u32 = 2;
    pub const DPAD_RIGHT: u32 = 3;
    pub const FACE_UP: u32 = 4;
    pub const FACE_DOWN: u32 = 5;
    pub const FACE_LEFT: u32 = 6;
    pub const FACE_RIGHT: u32 = 7;
    pub const LEFT_BUMPER: u32 = 8;
    pub const RIGHT_BUMPER: u32 = 9;
    pub const LEFT_TRIGGER: u32 = 10;
    pub const RIGHT_TRIGGER: u32 = 11;
    pub const LEFT_THUMB: u32 = 12;
    pub const RIGHT_THUMB: u32 = 13;
    pub const SELECT: u32 = 14;
    pub const START: u32 = 15;
    pub const GUIDE: u32 = 16;
    pub const TOUCHPAD: u32 = 17;
}

/// Gamepad axis indices.
pub mod pad_axis {
    pub const LEFT_X: u32 = 0;
    pub const LEFT_Y: u32 = 1;
    pub const RIGHT_X: u32 = 2;
    pub const RIGHT_Y: u32 = 3;
    pub const LEFT_TRIGGER: u32 = 4;
    pub const RIGHT_TRIGGER: u32 = 5;
}
