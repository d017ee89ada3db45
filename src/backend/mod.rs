// Target language backends
pub mod js;

pub use js::{emit_js, emit_js_with, JsEmitter};
