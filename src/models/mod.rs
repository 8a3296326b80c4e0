//! Models module for the theory engine
//!
//! Closed enumerations for everything a caller can name: pitch classes,
//! instrument keys, major keys and interval qualities. Text is parsed into
//! these once, at the boundary.

pub mod instrument_key;
pub mod interval_quality;
pub mod key_signature;
pub mod pitch_class;

// Re-export commonly used types
pub use instrument_key::InstrumentKey;
pub use interval_quality::IntervalQuality;
pub use key_signature::{KeyName, KeySignature, MajorKey};
pub use pitch_class::PitchClass;
