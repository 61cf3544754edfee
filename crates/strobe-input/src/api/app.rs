use serde::{Deserialize, Serialize};

use crate::api::types::{keys, AppEvent};
use crate::state::InputState;
use crate::window::WindowState;

/// Configuration for the input pipeline, provided by the app.
/// Loadable from a JSON string sent by the host; every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Capacity of the per-frame key-pressed queue.
    #[serde(default = "default_key_queue_capacity")]
    pub key_queue_capacity: usize,
    /// Capacity of the per-frame char-typed queue.
    #[serde(default = "default_char_queue_capacity")]
    pub char_queue_capacity: usize,
    /// Capacity of the raw backend event queue drained each frame.
    #[serde(default = "default_event_queue_capacity")]
    pub event_queue_capacity: usize,
    /// Maximum number of app events emitted per frame.
    #[serde(default = "default_max_app_events")]
    pub max_app_events: usize,
    /// Key that raises the window close flag when pressed. Null disables it.
    #[serde(default = "default_exit_key")]
    pub exit_key: Option<u32>,
}

fn default_key_queue_capacity() -> usize {
    16
}
fn default_char_queue_capacity() -> usize {
    16
}
fn default_event_queue_capacity() -> usize {
    256
}
fn default_max_app_events() -> usize {
    32
}
fn default_exit_key() -> Option<u32> {
    Some(keys::ESCAPE)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            key_queue_capacity: default_key_queue_capacity(),
            char_queue_capacity: default_char_queue_capacity(),
            event_queue_capacity: default_event_queue_capacity(),
            max_app_events: default_max_app_events(),
            exit_key: default_exit_key(),
        }
    }
}

impl AppConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The core contract every app must fulfill.
pub trait App {
    /// Return pipeline configuration. Called once before init.
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    /// Setup initial state.
    fn init(&mut self, ctx: &mut AppContext);

    /// The per-frame tick. Runs after the frame's input has been applied;
    /// read edges and queues here — the next frame boundary consumes them.
    fn update(&mut self, ctx: &mut AppContext, input: &InputState, dt: f32);
}

/// Mutable access to frame-loop state, passed to App::init and App::update.
pub struct AppContext {
    pub window: WindowState,
    pub events: Vec<AppEvent>,
    max_events: usize,
}

impl AppContext {
    pub fn new(max_events: usize) -> Self {
        Self {
            window: WindowState::new(),
            events: Vec::with_capacity(max_events),
            max_events,
        }
    }

    /// Emit an app event to be forwarded to the host. Events beyond the
    /// per-frame maximum are dropped.
    pub fn emit_event(&mut self, event: AppEvent) {
        if self.events.len() < self.max_events {
            self.events.push(event);
        } else {
            log::debug!("app event buffer full ({}), dropping event", self.max_events);
        }
    }

    /// Clear per-frame transient data (emitted events, transient window flags).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
        self.window.clear_transient();
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(default_max_app_events())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.key_queue_capacity, 16);
        assert_eq!(config.char_queue_capacity, 16);
        assert_eq!(config.event_queue_capacity, 256);
        assert_eq!(config.max_app_events, 32);
        assert_eq!(config.exit_key, Some(keys::ESCAPE));
    }

    #[test]
    fn config_from_json_partial() {
        let config = AppConfig::from_json(r#"{ "key_queue_capacity": 8 }"#).unwrap();
        assert_eq!(config.key_queue_capacity, 8);
        assert_eq!(config.char_queue_capacity, 16);
        assert_eq!(config.exit_key, Some(keys::ESCAPE));
    }

    #[test]
    fn config_from_json_disables_exit_key() {
        let config = AppConfig::from_json(r#"{ "exit_key": null }"#).unwrap();
        assert_eq!(config.exit_key, None);
    }

    #[test]
    fn config_from_json_rejects_garbage() {
        assert!(AppConfig::from_json("not json").is_err());
    }

    #[test]
    fn emit_event_respects_per_frame_cap() {
        let mut ctx = AppContext::new(2);
        for kind in 0..4 {
            ctx.emit_event(AppEvent {
                kind: kind as f32,
                ..AppEvent::default()
            });
        }
        assert_eq!(ctx.events.len(), 2);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn clear_frame_data_clears_transient_window_flags() {
        let mut ctx = AppContext::new(4);
        ctx.window.record_resize(100, 100);
        ctx.clear_frame_data();
        assert!(!ctx.window.was_resized());
        assert_eq!(ctx.window.width(), 100);
    }
}
