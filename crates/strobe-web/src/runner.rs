use strobe_input::state::touch;
use strobe_input::{
    apply_event, App, AppConfig, AppContext, InputEvent, InputQueue, InputState, TouchSample,
};

/// Generic frame-loop runner that wires the input pipeline to an app.
///
/// Each concrete app (e.g., `probe-demo`) creates a `thread_local!` AppRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
///
/// Per tick, phases run in a fixed order: clear per-frame context data,
/// advance the input frame, apply the drained backend events, then run the
/// app update. Events pushed by the host between ticks are therefore applied
/// exactly once, and their edges are readable during that tick's update.
pub struct AppRunner<A: App> {
    app: A,
    ctx: AppContext,
    input: InputState,
    queue: InputQueue,
    config: AppConfig,
    initialized: bool,
    /// Flat buffer of touch samples for host-side reads.
    touch_buffer: Vec<TouchSample>,
}

impl<A: App> AppRunner<A> {
    pub fn new(app: A) -> Self {
        let config = app.config();
        Self {
            ctx: AppContext::new(config.max_app_events),
            input: InputState::with_config(&config),
            queue: InputQueue::new(config.event_queue_capacity),
            touch_buffer: Vec::with_capacity(touch::MAX_POINTS),
            config,
            app,
            initialized: false,
        }
    }

    /// Initialize the app. Call once after construction.
    pub fn init(&mut self) {
        self.app.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Replace the pipeline config with one sent by the host as JSON.
    /// Call before `init` — input state and queues are rebuilt. Malformed
    /// JSON keeps the current config.
    pub fn load_config(&mut self, json: &str) {
        match AppConfig::from_json(json) {
            Ok(config) => {
                self.input = InputState::with_config(&config);
                self.queue = InputQueue::new(config.event_queue_capacity);
                self.ctx = AppContext::new(config.max_app_events);
                self.config = config;
            }
            Err(e) => log::warn!("ignoring malformed config: {}", e),
        }
    }

    /// Push a raw backend event into the queue (called from JS).
    pub fn push_input(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    /// Run one frame tick.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        // Frame boundary: snapshot current into previous, reset accumulators
        self.input.advance_frame();

        // Apply the events the host delivered since the last tick
        for event in self.queue.drain() {
            apply_event(&mut self.input, &mut self.ctx.window, event);
        }

        // App logic reads this frame's state and edges
        self.app.update(&mut self.ctx, &self.input, dt);

        // Rebuild the touch snapshot for host reads
        self.rebuild_touch_buffer();
    }

    fn rebuild_touch_buffer(&mut self) {
        self.touch_buffer.clear();
        for slot in 0..touch::MAX_POINTS {
            let (Some(id), Some(pos)) = (self.input.touch.id(slot), self.input.touch.position(slot))
            else {
                continue;
            };
            self.touch_buffer.push(TouchSample {
                id: id as f32,
                x: pos.x,
                y: pos.y,
                down: if self.input.touch.is_down(slot) { 1.0 } else { 0.0 },
            });
        }
    }

    /// Whether the app or the exit key requested the loop to stop.
    pub fn should_close(&self) -> bool {
        self.ctx.window.should_close()
    }

    /// Read access to the input snapshot, for host-side queries.
    pub fn input(&self) -> &InputState {
        &self.input
    }

    // ---- Pointer accessors for host-side buffer reads ----

    pub fn app_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn app_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn touch_points_ptr(&self) -> *const f32 {
        self.touch_buffer.as_ptr() as *const f32
    }

    pub fn touch_points_len(&self) -> u32 {
        self.touch_buffer.len() as u32
    }

    // ---- Capacity accessors (read by the host to size its views) ----

    pub fn max_app_events(&self) -> u32 {
        self.config.max_app_events as u32
    }

    pub fn max_touch_points(&self) -> u32 {
        touch::MAX_POINTS as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use strobe_input::api::types::keys;
    use strobe_input::AppEvent;

    #[derive(Default)]
    struct Observed {
        /// (is_down, was_pressed, was_released) for key A, one entry per update
        key_a: Vec<(bool, bool, bool)>,
        resized: Vec<bool>,
        wheel_y: Vec<f32>,
    }

    struct ObserverApp {
        observed: Rc<RefCell<Observed>>,
        config: AppConfig,
        emit_per_frame: usize,
    }

    impl ObserverApp {
        fn new(observed: Rc<RefCell<Observed>>) -> Self {
            Self {
                observed,
                config: AppConfig::default(),
                emit_per_frame: 0,
            }
        }
    }

    impl App for ObserverApp {
        fn config(&self) -> AppConfig {
            self.config.clone()
        }

        fn init(&mut self, _ctx: &mut AppContext) {}

        fn update(&mut self, ctx: &mut AppContext, input: &InputState, _dt: f32) {
            let mut observed = self.observed.borrow_mut();
            observed.key_a.push((
                input.is_key_down(keys::A),
                input.was_key_pressed(keys::A),
                input.was_key_released(keys::A),
            ));
            observed.resized.push(ctx.window.was_resized());
            observed.wheel_y.push(input.wheel_move().y);
            for _ in 0..self.emit_per_frame {
                ctx.emit_event(AppEvent::default());
            }
        }
    }

    fn runner() -> (AppRunner<ObserverApp>, Rc<RefCell<Observed>>) {
        let observed = Rc::new(RefCell::new(Observed::default()));
        let mut runner = AppRunner::new(ObserverApp::new(observed.clone()));
        runner.init();
        (runner, observed)
    }

    #[test]
    fn tick_before_init_is_noop() {
        let observed = Rc::new(RefCell::new(Observed::default()));
        let mut runner = AppRunner::new(ObserverApp::new(observed.clone()));
        runner.tick(0.016);
        assert!(observed.borrow().key_a.is_empty());
    }

    #[test]
    fn frame_loop_edge_sequence() {
        let (mut runner, observed) = runner();

        runner.push_input(InputEvent::KeyDown { code: keys::A });
        runner.tick(0.016);
        runner.tick(0.016);
        runner.push_input(InputEvent::KeyUp { code: keys::A });
        runner.tick(0.016);
        runner.tick(0.016);

        let observed = observed.borrow();
        // Delivery frame: down with a press edge
        assert_eq!(observed.key_a[0], (true, true, false));
        // Held: still down, edge consumed by the boundary
        assert_eq!(observed.key_a[1], (true, false, false));
        // Release frame: up with a release edge
        assert_eq!(observed.key_a[2], (false, false, true));
        // Idle: edge consumed
        assert_eq!(observed.key_a[3], (false, false, false));
    }

    #[test]
    fn exit_key_requests_close() {
        let (mut runner, _observed) = runner();
        assert!(!runner.should_close());
        runner.push_input(InputEvent::KeyDown { code: keys::ESCAPE });
        runner.tick(0.016);
        assert!(runner.should_close());
    }

    #[test]
    fn backend_queue_overflow_drops_newest_event() {
        let observed = Rc::new(RefCell::new(Observed::default()));
        let mut app = ObserverApp::new(observed);
        app.config.event_queue_capacity = 2;
        let mut runner = AppRunner::new(app);
        runner.init();

        runner.push_input(InputEvent::KeyDown { code: 10 });
        runner.push_input(InputEvent::KeyDown { code: 20 });
        runner.push_input(InputEvent::KeyDown { code: 30 });
        runner.tick(0.016);

        assert!(runner.input().is_key_down(10));
        assert!(runner.input().is_key_down(20));
        assert!(!runner.input().is_key_down(30));
    }

    #[test]
    fn scroll_accumulates_within_tick_and_resets_after() {
        let (mut runner, observed) = runner();
        runner.push_input(InputEvent::Scroll { dx: 0.0, dy: 1.0 });
        runner.push_input(InputEvent::Scroll { dx: 0.0, dy: 2.0 });
        runner.tick(0.016);
        runner.tick(0.016);
        let observed = observed.borrow();
        assert_eq!(observed.wheel_y[0], 3.0);
        assert_eq!(observed.wheel_y[1], 0.0);
    }

    #[test]
    fn resized_flag_lasts_one_tick() {
        let (mut runner, observed) = runner();
        runner.push_input(InputEvent::Resized {
            width: 320,
            height: 200,
        });
        runner.tick(0.016);
        runner.tick(0.016);
        let observed = observed.borrow();
        assert_eq!(observed.resized, vec![true, false]);
    }

    #[test]
    fn app_events_are_per_frame() {
        let observed = Rc::new(RefCell::new(Observed::default()));
        let mut app = ObserverApp::new(observed);
        app.emit_per_frame = 3;
        let mut runner = AppRunner::new(app);
        runner.init();

        runner.tick(0.016);
        assert_eq!(runner.app_events_len(), 3);
        runner.tick(0.016);
        assert_eq!(runner.app_events_len(), 3);
    }

    #[test]
    fn touch_buffer_tracks_active_and_released_points() {
        let (mut runner, _observed) = runner();
        runner.push_input(InputEvent::TouchDown { id: 1, x: 1.0, y: 1.0 });
        runner.push_input(InputEvent::TouchDown { id: 2, x: 2.0, y: 2.0 });
        runner.tick(0.016);
        assert_eq!(runner.touch_points_len(), 2);

        runner.push_input(InputEvent::TouchUp { id: 1, x: 1.0, y: 1.0 });
        runner.tick(0.016);
        // Point 1 still visible this tick with down == 0
        assert_eq!(runner.touch_points_len(), 2);
        runner.tick(0.016);
        assert_eq!(runner.touch_points_len(), 1);
    }

    #[test]
    fn load_config_rebuilds_pipeline() {
        let observed = Rc::new(RefCell::new(Observed::default()));
        let mut runner = AppRunner::new(ObserverApp::new(observed));
        runner.load_config(r#"{ "exit_key": null, "event_queue_capacity": 4 }"#);
        runner.init();

        runner.push_input(InputEvent::KeyDown { code: keys::ESCAPE });
        runner.tick(0.016);
        assert!(!runner.should_close());
    }

    #[test]
    fn malformed_config_is_ignored() {
        let observed = Rc::new(RefCell::new(Observed::default()));
        let mut runner = AppRunner::new(ObserverApp::new(observed));
        runner.load_config("{ definitely not json");
        runner.init();
        runner.push_input(InputEvent::KeyDown { code: keys::ESCAPE });
        runner.tick(0.016);
        assert!(runner.should_close());
    }
}
