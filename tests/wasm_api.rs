//! WASM API test
//!
//! Exercises the exported functions the way the browser calls them.

#![cfg(target_arch = "wasm32")]

use serde_json::Value;
use theory_wasm::api::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn to_json(value: JsValue) -> Value {
    serde_wasm_bindgen::from_value(value).unwrap()
}

#[wasm_bindgen_test]
fn test_plan_transposition() {
    let result = plan_transposition("C", "B♭", Some("C".into()), Some("C".into())).unwrap();
    let json = to_json(result);
    assert_eq!(json["offset"], 2);
    assert_eq!(json["qualityName"], "Major 2nd");
    assert_eq!(json["direction"], "up");
    assert_eq!(json["transposedKey"]["name"], "D");
    assert_eq!(json["transposedKey"]["signature"], "2 sharps");
    assert_eq!(json["transposedNote"], "D");
}

#[wasm_bindgen_test]
fn test_placeholder_selections_are_ignored() {
    let result = plan_transposition("C", "E♭", Some("-".into()), Some("-".into())).unwrap();
    let json = to_json(result);
    assert_eq!(json["offset"], -3);
    assert!(json.get("transposedKey").is_none());
    assert!(json.get("transposedNote").is_none());
}

#[wasm_bindgen_test]
fn test_unknown_spelling_is_rejected() {
    let err = plan_transposition("H", "C", None, None).unwrap_err();
    assert_eq!(err.as_string().unwrap(), "Unknown spelling: 'H'");
    assert!(transpose_note("X", 1).is_err());
}

#[wasm_bindgen_test]
fn test_scalar_functions() {
    assert_eq!(instrument_interval("C", "B♭").unwrap(), -2);
    let err = instrument_interval("G", "C").unwrap_err();
    assert_eq!(err.as_string().unwrap(), "Unknown spelling: 'G'");
    assert_eq!(transpose_note("C", -2).unwrap(), "A♯/B♭");
    assert_eq!(get_key_signature("E♭").unwrap(), "3 flats");
    assert_eq!(get_dual_key_signature("B/C♭").unwrap(), "5 sharps/7 flats");
}

#[wasm_bindgen_test]
fn test_menus() {
    let keys = to_json(list_instrument_keys().unwrap());
    assert_eq!(keys.as_array().unwrap().len(), 8);

    let notes = to_json(list_chromatic_notes().unwrap());
    assert_eq!(notes[6], "F♯/G♭");

    let signatures = to_json(list_key_signatures().unwrap());
    assert_eq!(signatures.as_array().unwrap().len(), 15);
    assert_eq!(signatures[0]["relativeMinor"], "A");
}

#[wasm_bindgen_test]
fn test_circle_of_fifths() {
    let circle = to_json(circle_of_fifths().unwrap());
    assert_eq!(circle.as_array().unwrap().len(), 12);
    assert_eq!(circle[11]["major"], "C");
    assert_eq!(circle[11]["minor"], "Am");

    assert_eq!(circle_canvas_size(1024.0), 600.0);
    assert_eq!(circle_canvas_size(320.0), 288.0);

    let hit = to_json(hit_test_circle(600.0, 300.0, 300.0).unwrap());
    assert_eq!(hit["ring"], "center");
}

#[wasm_bindgen_test]
fn test_pick_scale() {
    let families = serde_wasm_bindgen::to_value(&["pentatonic"]).unwrap();
    let picked = to_json(pick_scale(families, None).unwrap());
    assert!(picked["name"].as_str().unwrap().contains("Pentatonic"));

    let none = serde_wasm_bindgen::to_value(&Vec::<String>::new()).unwrap();
    assert!(pick_scale(none, None).unwrap().is_null());

    let bad = serde_wasm_bindgen::to_value(&["minor"]).unwrap();
    assert!(pick_scale(bad, None).is_err());
}
