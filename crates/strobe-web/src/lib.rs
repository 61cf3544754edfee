pub mod runner;

pub use runner::AppRunner;

/// Generate all `#[wasm_bindgen]` exports for an app.
///
/// Generates:
/// - `thread_local!` storage for the AppRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (app_init, app_tick, one entry per raw event
///   type, and the query/pointer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use strobe_input::*;
/// use strobe_web::AppRunner;
///
/// mod probe;
/// use probe::ProbeApp;
///
/// strobe_web::export_app!(ProbeApp, "probe-demo");
/// ```
///
/// # Arguments
///
/// - `$app_type`: The app struct type that implements `strobe_input::App`
/// - `$app_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_app {
    ($app_type:ty, $app_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::AppRunner<$app_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::AppRunner<$app_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("App not initialized. Call app_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn app_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let app = <$app_type>::new();
            let runner = $crate::AppRunner::new(app);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $app_name);
        }

        #[wasm_bindgen]
        pub fn app_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn app_load_config(json: &str) {
            with_runner(|r| r.load_config(json));
        }

        // ---- Raw event entry points ----

        #[wasm_bindgen]
        pub fn app_key_down(code: u32, repeat: bool) {
            with_runner(|r| {
                r.push_input(if repeat {
                    InputEvent::KeyRepeat { code }
                } else {
                    InputEvent::KeyDown { code }
                })
            });
        }

        #[wasm_bindgen]
        pub fn app_key_up(code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { code }));
        }

        #[wasm_bindgen]
        pub fn app_char_input(codepoint: u32) {
            with_runner(|r| r.push_input(InputEvent::CharInput { codepoint }));
        }

        #[wasm_bindgen]
        pub fn app_mouse_button_down(button: u32) {
            with_runner(|r| r.push_input(InputEvent::MouseButtonDown { button }));
        }

        #[wasm_bindgen]
        pub fn app_mouse_button_up(button: u32) {
            with_runner(|r| r.push_input(InputEvent::MouseButtonUp { button }));
        }

        #[wasm_bindgen]
        pub fn app_mouse_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::MouseMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn app_scroll(dx: f32, dy: f32) {
            with_runner(|r| r.push_input(InputEvent::Scroll { dx, dy }));
        }

        #[wasm_bindgen]
        pub fn app_cursor_enter(inside: bool) {
            with_runner(|r| r.push_input(InputEvent::CursorEnter { inside }));
        }

        #[wasm_bindgen]
        pub fn app_gamepad_connected(pad: u32) {
            with_runner(|r| r.push_input(InputEvent::GamepadConnected { pad }));
        }

        #[wasm_bindgen]
        pub fn app_gamepad_disconnected(pad: u32) {
            with_runner(|r| r.push_input(InputEvent::GamepadDisconnected { pad }));
        }

        #[wasm_bindgen]
        pub fn app_gamepad_button(pad: u32, button: u32, pressed: bool) {
            with_runner(|r| {
                r.push_input(if pressed {
                    InputEvent::GamepadButtonDown { pad, button }
                } else {
                    InputEvent::GamepadButtonUp { pad, button }
                })
            });
        }

        #[wasm_bindgen]
        pub fn app_gamepad_axis(pad: u32, axis: u32, value: f32) {
            with_runner(|r| r.push_input(InputEvent::GamepadAxis { pad, axis, value }));
        }

        #[wasm_bindgen]
        pub fn app_touch_down(id: u32, x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::TouchDown { id, x, y }));
        }

        #[wasm_bindgen]
        pub fn app_touch_up(id: u32, x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::TouchUp { id, x, y }));
        }

        #[wasm_bindgen]
        pub fn app_touch_move(id: u32, x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::TouchMove { id, x, y }));
        }

        #[wasm_bindgen]
        pub fn app_window_focus(focused: bool) {
            with_runner(|r| r.push_input(InputEvent::FocusChanged { focused }));
        }

        #[wasm_bindgen]
        pub fn app_window_resize(width: u32, height: u32) {
            with_runner(|r| r.push_input(InputEvent::Resized { width, height }));
        }

        #[wasm_bindgen]
        pub fn app_window_minimized(minimized: bool) {
            with_runner(|r| r.push_input(InputEvent::Minimized { minimized }));
        }

        #[wasm_bindgen]
        pub fn app_window_maximized(maximized: bool) {
            with_runner(|r| r.push_input(InputEvent::Maximized { maximized }));
        }

        // ---- Query accessors ----

        #[wasm_bindgen]
        pub fn app_should_close() -> bool {
            with_runner(|r| r.should_close())
        }

        #[wasm_bindgen]
        pub fn is_key_down(code: u32) -> bool {
            with_runner(|r| r.input().is_key_down(code))
        }

        #[wasm_bindgen]
        pub fn mouse_x() -> f32 {
            with_runner(|r| r.input().mouse_position().x)
        }

        #[wasm_bindgen]
        pub fn mouse_y() -> f32 {
            with_runner(|r| r.input().mouse_position().y)
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_app_events_ptr() -> *const f32 {
            with_runner(|r| r.app_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_app_events_len() -> u32 {
            with_runner(|r| r.app_events_len())
        }

        #[wasm_bindgen]
        pub fn get_touch_points_ptr() -> *const f32 {
            with_runner(|r| r.touch_points_ptr())
        }

        #[wasm_bindgen]
        pub fn get_touch_points_len() -> u32 {
            with_runner(|r| r.touch_points_len())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_app_events() -> u32 {
            with_runner(|r| r.max_app_events())
        }

        #[wasm_bindgen]
        pub fn get_max_touch_points() -> u32 {
            with_runner(|r| r.max_touch_points())
        }
    };
}
