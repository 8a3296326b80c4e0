pub mod interval;
pub mod plan;
pub mod transpose;

pub use interval::{interval, interval_between, SemitoneInterval};
pub use plan::{
    instrument_interval, plan_transposition, Direction, TransposedKey, TranspositionResult,
};
pub use transpose::{shift, transpose};
