//! Transposition calculator API
//!
//! Menu data and the calculation behind the transposition form.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::helpers::{selected, serialize, theory_error};
use crate::models::key_signature::{dual_signature_of, signature_of};
use crate::models::{InstrumentKey, MajorKey, PitchClass};
use crate::transposition;

/// One entry of the key-signature select
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct KeySignatureOption {
    pub name: &'static str,
    pub signature: String,
    pub relative_minor: &'static str,
}

/// Build the key-signature menu in catalog order
pub fn key_signature_options() -> Vec<KeySignatureOption> {
    MajorKey::ALL
        .iter()
        .map(|key| KeySignatureOption {
            name: key.name(),
            signature: key.signature().descriptor(),
            relative_minor: key.relative_minor(),
        })
        .collect()
}

/// Plan a transposition between two instruments
///
/// # Parameters
/// - `source_instrument`, `target_instrument`: instrument keys ("B♭", "E♭", ...)
/// - `source_key`: optional key-signature name; "-" means none
/// - `source_note`: optional note spelling; "-" means none
///
/// # Returns
/// `{ offset, qualityName, direction, transposedKey?, transposedNote? }`
#[wasm_bindgen(js_name = planTransposition)]
pub fn plan_transposition(
    source_instrument: &str,
    target_instrument: &str,
    source_key: Option<String>,
    source_note: Option<String>,
) -> Result<JsValue, JsValue> {
    wasm_info!(
        "planTransposition called: {} -> {}",
        source_instrument,
        target_instrument
    );

    let source_key = selected(source_key);
    let source_note = selected(source_note);

    let result = transposition::plan_transposition(
        source_instrument,
        target_instrument,
        source_key.as_deref(),
        source_note.as_deref(),
    )
    .map_err(theory_error)?;

    wasm_log!("  {}", result.summary());
    serialize(&result, "Failed to serialize transposition result")
}

/// Signed semitone interval between two instrument keys
#[wasm_bindgen(js_name = instrumentInterval)]
pub fn instrument_interval(source: &str, target: &str) -> Result<i32, JsValue> {
    let interval = transposition::instrument_interval(source, target).map_err(theory_error)?;
    Ok(interval as i32)
}

/// Shift a note by `semitones` and return its canonical spelling
#[wasm_bindgen(js_name = transposeNote)]
pub fn transpose_note(note: &str, semitones: i32) -> Result<String, JsValue> {
    transposition::transpose(note, semitones)
        .map(str::to_string)
        .map_err(theory_error)
}

#[wasm_bindgen(js_name = getKeySignature)]
pub fn get_key_signature(key_name: &str) -> Result<String, JsValue> {
    signature_of(key_name).map_err(theory_error)
}

/// Descriptors for a compound key name such as "F♯/G♭"
#[wasm_bindgen(js_name = getDualKeySignature)]
pub fn get_dual_key_signature(key_name: &str) -> Result<String, JsValue> {
    dual_signature_of(key_name).map_err(theory_error)
}

#[wasm_bindgen(js_name = listInstrumentKeys)]
pub fn list_instrument_keys() -> Result<JsValue, JsValue> {
    let keys: Vec<&str> = InstrumentKey::ALL.iter().map(|k| k.as_str()).collect();
    serialize(&keys, "Failed to serialize instrument keys")
}

#[wasm_bindgen(js_name = listChromaticNotes)]
pub fn list_chromatic_notes() -> Result<JsValue, JsValue> {
    let notes: Vec<&str> = PitchClass::ALL.iter().map(|p| p.label()).collect();
    serialize(&notes, "Failed to serialize chromatic notes")
}

#[wasm_bindgen(js_name = listKeySignatures)]
pub fn list_key_signatures() -> Result<JsValue, JsValue> {
    serialize(&key_signature_options(), "Failed to serialize key signatures")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_signature_menu() {
        let options = key_signature_options();
        assert_eq!(options.len(), 15);
        assert_eq!(options[0].name, "C");
        assert_eq!(options[0].signature, "no accidentals");
        assert_eq!(options[1].signature, "1 sharp");
        assert_eq!(options[14].name, "C♭");
        assert_eq!(options[14].relative_minor, "A♭");
    }
}
