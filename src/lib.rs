//! Music Theory WASM Module
//!
//! Core logic behind three musician tools: the instrument transposition
//! calculator, the circle of fifths viewer and the scale practice picker.
//! Everything here is a pure function over static tables; the browser only
//! renders what these functions return.

pub mod api;
pub mod circle_of_fifths;
pub mod errors;
pub mod models;
pub mod scales;
pub mod transposition;

// Re-export commonly used types
pub use errors::{Result, TheoryError};
pub use models::*;
pub use transposition::{plan_transposition, Direction, TransposedKey, TranspositionResult};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        // A logger is already installed (e.g. the module was re-initialised)
        return;
    }

    log::info!("Music theory WASM module initialized");
}
