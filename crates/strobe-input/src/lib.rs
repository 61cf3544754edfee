pub mod api;
pub mod dispatch;
pub mod events;
pub mod state;
pub mod window;

// Re-export key types at crate root for convenience
pub use api::app::{App, AppConfig, AppContext};
pub use api::types::{AppEvent, TouchSample};
pub use dispatch::{apply_event, EventSink};
pub use events::queue::{BoundedQueue, InputQueue};
pub use events::InputEvent;
pub use state::gamepad::GamepadState;
pub use state::keyboard::KeyboardState;
pub use state::mouse::MouseState;
pub use state::signal::DebouncedSet;
pub use state::touch::TouchState;
pub use state::InputState;
pub use window::WindowState;
