//! Scale practice API

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::helpers::{deserialize_strings, serialize, theory_error};
use crate::errors::{Result as TheoryResult, TheoryError};
use crate::scales::{self, Scale, ScaleFamily};

/// A scale as shown on the practice card
#[derive(Serialize, Clone, Debug)]
pub struct PickedScale {
    pub name: &'static str,
    pub range: String,
    /// None disables the "Show key" button
    pub key: Option<String>,
}

impl From<&Scale> for PickedScale {
    fn from(scale: &Scale) -> Self {
        Self {
            name: scale.name,
            range: scale.range.to_string(),
            key: scale.key(),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct FamilyOption {
    pub id: &'static str,
    pub title: &'static str,
}

/// Parse checkbox ids into families
pub fn parse_families(ids: &[String]) -> TheoryResult<Vec<ScaleFamily>> {
    ids.iter().map(|id| id.parse()).collect()
}

#[wasm_bindgen(js_name = listScaleFamilies)]
pub fn list_scale_families() -> Result<JsValue, JsValue> {
    let families: Vec<FamilyOption> = ScaleFamily::ALL
        .iter()
        .map(|f| FamilyOption {
            id: f.as_str(),
            title: f.title(),
        })
        .collect();
    serialize(&families, "Failed to serialize scale families")
}

/// Pick a random scale from the ticked families
///
/// # Parameters
/// - `families_js`: array of family ids ("major", "harmonic", ...)
/// - `previous`: name of the scale currently shown, if any
///
/// # Returns
/// `{ name, range, key }`, or `null` when no family is ticked
#[wasm_bindgen(js_name = pickScale)]
pub fn pick_scale(families_js: JsValue, previous: Option<String>) -> Result<JsValue, JsValue> {
    let ids = deserialize_strings(families_js, "Invalid scale family list")?;
    let families = parse_families(&ids).map_err(theory_error)?;
    wasm_info!("pickScale called with {} families", families.len());

    match scales::pick(&families, previous.as_deref()) {
        Ok(scale) => serialize(&PickedScale::from(scale), "Failed to serialize scale"),
        Err(TheoryError::NoScalesSelected) => Ok(JsValue::NULL),
        Err(e) => Err(theory_error(e)),
    }
}
