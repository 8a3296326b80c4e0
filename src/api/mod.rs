//! Music Theory WASM API
//!
//! JavaScript-facing functions, grouped by the tool that calls them.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, error conversion and logging macros
//! - `transposition`: transposition calculator and its menus
//! - `circle`: circle of fifths labels and click hit-testing
//! - `scales`: scale practice picker

#[macro_use]
pub mod helpers;
pub mod circle;
pub mod scales;
pub mod transposition;

pub use circle::{circle_canvas_size, circle_of_fifths, hit_test_circle};
pub use scales::{list_scale_families, pick_scale};
pub use transposition::{
    get_dual_key_signature, get_key_signature, instrument_interval, list_chromatic_notes,
    list_instrument_keys, list_key_signatures, plan_transposition, transpose_note,
};
