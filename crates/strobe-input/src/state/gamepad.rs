use crate::state::signal::DebouncedSet;

/// Number of player slots.
pub const MAX_PADS: usize = 4;

/// Number of tracked buttons per pad.
pub const MAX_BUTTONS: usize = 18;

/// Number of tracked axes per pad.
pub const MAX_AXES: usize = 6;

/// State of a single pad: connection flag, last button pressed,
/// axis readings, and double-buffered button state.
#[derive(Debug, Clone)]
pub struct PadState {
    ready: bool,
    last_button: Option<u32>,
    axes: [f32; MAX_AXES],
    buttons: DebouncedSet<MAX_BUTTONS>,
}

impl PadState {
    fn new() -> Self {
        Self {
            ready: false,
            last_button: None,
            axes: [0.0; MAX_AXES],
            buttons: DebouncedSet::new(),
        }
    }

    /// Back to the disconnected default: axes centered, no buttons down.
    fn reset(&mut self) {
        self.ready = false;
        self.last_button = None;
        self.axes = [0.0; MAX_AXES];
        self.buttons.reset();
    }
}

impl Default for PadState {
    fn default() -> Self {
        Self::new()
    }
}

/// All pad slots. Indices outside [0, MAX_PADS) are ignored on write and
/// read as disconnected.
pub struct GamepadState {
    pads: [PadState; MAX_PADS],
}

impl GamepadState {
    pub fn new() -> Self {
        Self {
            pads: [
                PadState::new(),
                PadState::new(),
                PadState::new(),
                PadState::new(),
            ],
        }
    }

    /// Record a pad plugging in or unplugging. Unplugging resets the slot so
    /// no button stays stuck down.
    pub fn record_connect(&mut self, pad: u32, connected: bool) {
        let Some(slot) = self.slot_mut(pad) else {
            return;
        };
        if connected {
            slot.ready = true;
            log::info!("gamepad {} connected", pad);
        } else {
            slot.reset();
            log::info!("gamepad {} disconnected", pad);
        }
    }

    /// Record a button transition. Presses update the pad's last-button code.
    pub fn record_button(&mut self, pad: u32, button: u32, pressed: bool) {
        if button as usize >= MAX_BUTTONS {
            log::debug!("gamepad button {} out of range, dropping", button);
            return;
        }
        let Some(slot) = self.slot_mut(pad) else {
            return;
        };
        slot.buttons.set(button as usize, pressed);
        if pressed {
            slot.last_button = Some(button);
        }
    }

    /// Record an axis reading.
    pub fn record_axis(&mut self, pad: u32, axis: u32, value: f32) {
        if axis as usize >= MAX_AXES {
            log::debug!("gamepad axis {} out of range, dropping", axis);
            return;
        }
        let Some(slot) = self.slot_mut(pad) else {
            return;
        };
        slot.axes[axis as usize] = value;
    }

    pub fn is_ready(&self, pad: u32) -> bool {
        self.slot(pad).map(|s| s.ready).unwrap_or(false)
    }

    /// The code of the last button pressed on this pad, if any.
    pub fn last_button(&self, pad: u32) -> Option<u32> {
        self.slot(pad).and_then(|s| s.last_button)
    }

    /// Current axis reading, 0.0 for unknown pads or axes.
    pub fn axis(&self, pad: u32, axis: u32) -> f32 {
        match self.slot(pad) {
            Some(slot) if (axis as usize) < MAX_AXES => slot.axes[axis as usize],
            _ => 0.0,
        }
    }

    pub fn is_down(&self, pad: u32, button: u32) -> bool {
        self.slot(pad)
            .map(|s| s.buttons.is_down(button as usize))
            .unwrap_or(false)
    }

    pub fn is_up(&self, pad: u32, button: u32) -> bool {
        !self.is_down(pad, button)
    }

    pub fn was_pressed(&self, pad: u32, button: u32) -> bool {
        self.slot(pad)
            .map(|s| s.buttons.was_pressed(button as usize))
            .unwrap_or(false)
    }

    pub fn was_released(&self, pad: u32, button: u32) -> bool {
        self.slot(pad)
            .map(|s| s.buttons.was_released(button as usize))
            .unwrap_or(false)
    }

    /// Frame boundary: snapshot every pad's button state.
    pub fn advance(&mut self) {
        for pad in &mut self.pads {
            pad.buttons.advance();
        }
    }

    fn slot(&self, pad: u32) -> Option<&PadState> {
        self.pads.get(pad as usize)
    }

    fn slot_mut(&mut self, pad: u32) -> Option<&mut PadState> {
        let slot = self.pads.get_mut(pad as usize);
        if slot.is_none() {
            log::debug!("gamepad index {} out of range, dropping", pad);
        }
        slot
    }
}

impl Default for GamepadState {
    fn default() -> Self {
        Self::new()
    }
}
