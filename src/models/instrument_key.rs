/// Keys of the supported transposing instruments
///
/// An instrument "in B♭" sounds a concert B♭ when it reads a written C.
/// Only these eight keys are offered by the transposition calculator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TheoryError;
use crate::models::PitchClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentKey {
    C,
    D,
    #[serde(rename = "E♭")]
    Eb,
    E,
    F,
    A,
    #[serde(rename = "B♭")]
    Bb,
    B,
}

impl InstrumentKey {
    /// Menu order
    pub const ALL: [InstrumentKey; 8] = [
        InstrumentKey::C,
        InstrumentKey::D,
        InstrumentKey::Eb,
        InstrumentKey::E,
        InstrumentKey::F,
        InstrumentKey::A,
        InstrumentKey::Bb,
        InstrumentKey::B,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentKey::C => "C",
            InstrumentKey::D => "D",
            InstrumentKey::Eb => "E♭",
            InstrumentKey::E => "E",
            InstrumentKey::F => "F",
            InstrumentKey::A => "A",
            InstrumentKey::Bb => "B♭",
            InstrumentKey::B => "B",
        }
    }

    /// Concert pitch class sounded by a written C
    pub fn pitch_class(&self) -> PitchClass {
        match self {
            InstrumentKey::C => PitchClass::C,
            InstrumentKey::D => PitchClass::D,
            InstrumentKey::Eb => PitchClass::Ds,
            InstrumentKey::E => PitchClass::E,
            InstrumentKey::F => PitchClass::F,
            InstrumentKey::A => PitchClass::A,
            InstrumentKey::Bb => PitchClass::As,
            InstrumentKey::B => PitchClass::B,
        }
    }
}

impl fmt::Display for InstrumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InstrumentKey {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(InstrumentKey::C),
            "D" => Ok(InstrumentKey::D),
            "E♭" => Ok(InstrumentKey::Eb),
            "E" => Ok(InstrumentKey::E),
            "F" => Ok(InstrumentKey::F),
            "A" => Ok(InstrumentKey::A),
            "B♭" => Ok(InstrumentKey::Bb),
            "B" => Ok(InstrumentKey::B),
            _ => {
                log::warn!("Rejected instrument key '{}'", s);
                Err(TheoryError::UnknownSpelling(s.to_string()))
            }
        }
    }
}
