use glam::Vec2;
use strobe_input::api::app::AppConfig;
use strobe_input::api::types::{keys, mouse_button};
use strobe_input::{App, AppContext, AppEvent, InputState};

const WORLD_W: f32 = 800.0;
const WORLD_H: f32 = 600.0;
const BASE_SPEED: f32 = 200.0;

/// Event kinds forwarded to the host.
mod events {
    /// The probe was marked at (a, b).
    pub const MARK: f32 = 1.0;
}

/// Moves a probe point around: WASD/arrows to steer, wheel to change speed,
/// click or touch to teleport, space to drop a mark event for the host.
pub struct ProbeApp {
    pos: Vec2,
    speed: f32,
}

impl ProbeApp {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(WORLD_W / 2.0, WORLD_H / 2.0),
            speed: BASE_SPEED,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }
}

impl App for ProbeApp {
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    fn init(&mut self, _ctx: &mut AppContext) {
        log::info!("ProbeApp: probe at {:?}", self.pos);
    }

    fn update(&mut self, ctx: &mut AppContext, input: &InputState, dt: f32) {
        let mut dir = Vec2::ZERO;
        if input.is_key_down(keys::W) || input.is_key_down(keys::UP) {
            dir.y -= 1.0;
        }
        if input.is_key_down(keys::S) || input.is_key_down(keys::DOWN) {
            dir.y += 1.0;
        }
        if input.is_key_down(keys::A) || input.is_key_down(keys::LEFT) {
            dir.x -= 1.0;
        }
        if input.is_key_down(keys::D) || input.is_key_down(keys::RIGHT) {
            dir.x += 1.0;
        }

        self.speed = (self.speed + input.wheel_move().y * 20.0).clamp(50.0, 1000.0);
        self.pos += dir * self.speed * dt;

        if input.was_mouse_pressed(mouse_button::LEFT) {
            self.pos = input.mouse_position();
        }
        if let Some(touch) = input.touch_position(0) {
            self.pos = touch;
        }

        self.pos.x = self.pos.x.clamp(0.0, WORLD_W);
        self.pos.y = self.pos.y.clamp(0.0, WORLD_H);

        for c in input.typed_chars() {
            log::debug!("ProbeApp: typed {:?}", c);
        }

        if input.was_key_pressed(keys::SPACE) {
            ctx.emit_event(AppEvent {
                kind: events::MARK,
                a: self.pos.x,
                b: self.pos.y,
                c: 0.0,
            });
        }

        if ctx.window.was_resized() {
            log::info!(
                "ProbeApp: surface resized to {}x{}",
                ctx.window.width(),
                ctx.window.height()
            );
        }
    }
}
