use wasm_bindgen::prelude::*;
use strobe_input::*;

mod probe;
use probe::ProbeApp;

strobe_web::export_app!(ProbeApp, "probe-demo");
