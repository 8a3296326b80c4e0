//! Circle of fifths API

use wasm_bindgen::prelude::*;

use super::helpers::serialize;
use crate::circle_of_fifths::{segments, CircleGeometry};

/// Labels and signatures for the twelve wedges, in drawing order
#[wasm_bindgen(js_name = circleOfFifths)]
pub fn circle_of_fifths() -> Result<JsValue, JsValue> {
    serialize(&segments(), "Failed to serialize circle of fifths")
}

/// Canvas size for the current viewport width
#[wasm_bindgen(js_name = circleCanvasSize)]
pub fn circle_canvas_size(viewport_width: f64) -> f64 {
    CircleGeometry::responsive(viewport_width).size
}

/// Map a click (canvas coordinates) to ring, segment and key label
#[wasm_bindgen(js_name = hitTestCircle)]
pub fn hit_test_circle(size: f64, x: f64, y: f64) -> Result<JsValue, JsValue> {
    let hit = CircleGeometry::new(size).hit_test(x, y);
    wasm_log!(
        "hitTestCircle: segment={} ring={:?} key={:?}",
        hit.segment,
        hit.ring,
        hit.key
    );
    serialize(&hit, "Failed to serialize circle hit")
}
