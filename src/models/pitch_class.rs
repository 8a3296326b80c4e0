/// The twelve equal-tempered pitch classes
///
/// Index 0 is C, index 11 is B. The five black-key classes carry two
/// spellings and display as a compound "sharp/flat" label (e.g. "C♯/D♭").
///
/// Spellings are matched exactly: "♯" and "♭" are the only accepted
/// accidental glyphs, and case matters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TheoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    #[serde(rename = "C♯/D♭")]
    Cs,
    D,
    #[serde(rename = "D♯/E♭")]
    Ds,
    E,
    F,
    #[serde(rename = "F♯/G♭")]
    Fs,
    G,
    #[serde(rename = "G♯/A♭")]
    Gs,
    A,
    #[serde(rename = "A♯/B♭")]
    As,
    B,
}

/// Number of pitch classes in the chromatic cycle
pub const CHROMATIC_LEN: u8 = 12;

impl PitchClass {
    /// The chromatic table in cycle order
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Position in the cycle (C=0 … B=11)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Pitch class at a cycle position; any integer wraps mod 12
    pub fn from_index(index: i32) -> PitchClass {
        let wrapped = index.rem_euclid(CHROMATIC_LEN as i32) as usize;
        Self::ALL[wrapped]
    }

    /// Canonical display label, compound for the black keys
    pub fn label(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C♯/D♭",
            PitchClass::D => "D",
            PitchClass::Ds => "D♯/E♭",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F♯/G♭",
            PitchClass::G => "G",
            PitchClass::Gs => "G♯/A♭",
            PitchClass::A => "A",
            PitchClass::As => "A♯/B♭",
            PitchClass::B => "B",
        }
    }

    /// The individual names this pitch class may be written as
    pub fn spellings(self) -> &'static [&'static str] {
        match self {
            PitchClass::C => &["C"],
            PitchClass::Cs => &["C♯", "D♭"],
            PitchClass::D => &["D"],
            PitchClass::Ds => &["D♯", "E♭"],
            PitchClass::E => &["E"],
            PitchClass::F => &["F"],
            PitchClass::Fs => &["F♯", "G♭"],
            PitchClass::G => &["G"],
            PitchClass::Gs => &["G♯", "A♭"],
            PitchClass::A => &["A"],
            PitchClass::As => &["A♯", "B♭"],
            PitchClass::B => &["B"],
        }
    }

    /// True when `spelling` names this pitch class: the sole label, either
    /// half of a compound, or the full compound
    pub fn matches(self, spelling: &str) -> bool {
        spelling == self.label() || self.spellings().contains(&spelling)
    }

    /// Resolve a spelling to its pitch class
    pub fn resolve(spelling: &str) -> Result<PitchClass, TheoryError> {
        let pitch = match spelling {
            "C" => PitchClass::C,
            "C♯" | "D♭" | "C♯/D♭" => PitchClass::Cs,
            "D" => PitchClass::D,
            "D♯" | "E♭" | "D♯/E♭" => PitchClass::Ds,
            "E" => PitchClass::E,
            "F" => PitchClass::F,
            "F♯" | "G♭" | "F♯/G♭" => PitchClass::Fs,
            "G" => PitchClass::G,
            "G♯" | "A♭" | "G♯/A♭" => PitchClass::Gs,
            "A" => PitchClass::A,
            "A♯" | "B♭" | "A♯/B♭" => PitchClass::As,
            "B" => PitchClass::B,
            _ => {
                log::warn!("Rejected note spelling '{}'", spelling);
                return Err(TheoryError::UnknownSpelling(spelling.to_string()));
            }
        };
        Ok(pitch)
    }

    /// Next pitch class going up the cycle
    pub fn successor(self) -> PitchClass {
        Self::from_index(self.index() as i32 + 1)
    }

    /// Next pitch class going down the cycle
    pub fn predecessor(self) -> PitchClass {
        Self::from_index(self.index() as i32 - 1)
    }

    /// True for the five classes with two spellings
    pub fn is_compound(self) -> bool {
        self.spellings().len() == 2
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchClass::resolve(s)
    }
}
