//! Major key signature catalog
//!
//! Fifteen major keys: the twelve that own a distinct pitch class plus the
//! three enharmonic duplicates (F♯/G♭, C♯/D♭, B/C♭). Each duplicate keeps its
//! own accidental count, so "F♯" reads 6 sharps while "G♭" reads 6 flats.
//!
//! This table is independent of the chromatic [`PitchClass`] table. "C♭" is a
//! key name here but has no chromatic slot of its own; it reaches the cycle
//! through its twin, B.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, TheoryError};
use crate::models::PitchClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MajorKey {
    C,
    G,
    D,
    A,
    E,
    B,
    #[serde(rename = "F♯")]
    Fs,
    #[serde(rename = "C♯")]
    Cs,
    F,
    #[serde(rename = "B♭")]
    Bb,
    #[serde(rename = "E♭")]
    Eb,
    #[serde(rename = "A♭")]
    Ab,
    #[serde(rename = "D♭")]
    Db,
    #[serde(rename = "G♭")]
    Gb,
    #[serde(rename = "C♭")]
    Cb,
}

/// Sharp or flat count of a key; at most one of the two is nonzero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KeySignature {
    pub sharps: u8,
    pub flats: u8,
}

impl KeySignature {
    pub const fn sharps(count: u8) -> Self {
        Self { sharps: count, flats: 0 }
    }

    pub const fn flats(count: u8) -> Self {
        Self { sharps: 0, flats: count }
    }

    /// Human readable descriptor: "no accidentals", "1 sharp", "3 flats", ...
    pub fn descriptor(&self) -> String {
        if self.sharps > 0 {
            plural(self.sharps, "sharp")
        } else if self.flats > 0 {
            plural(self.flats, "flat")
        } else {
            "no accidentals".to_string()
        }
    }
}

fn plural(count: u8, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.descriptor())
    }
}

impl MajorKey {
    /// Catalog order: sharp keys by count, then flat keys by count
    pub const ALL: [MajorKey; 15] = [
        MajorKey::C,
        MajorKey::G,
        MajorKey::D,
        MajorKey::A,
        MajorKey::E,
        MajorKey::B,
        MajorKey::Fs,
        MajorKey::Cs,
        MajorKey::F,
        MajorKey::Bb,
        MajorKey::Eb,
        MajorKey::Ab,
        MajorKey::Db,
        MajorKey::Gb,
        MajorKey::Cb,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MajorKey::C => "C",
            MajorKey::G => "G",
            MajorKey::D => "D",
            MajorKey::A => "A",
            MajorKey::E => "E",
            MajorKey::B => "B",
            MajorKey::Fs => "F♯",
            MajorKey::Cs => "C♯",
            MajorKey::F => "F",
            MajorKey::Bb => "B♭",
            MajorKey::Eb => "E♭",
            MajorKey::Ab => "A♭",
            MajorKey::Db => "D♭",
            MajorKey::Gb => "G♭",
            MajorKey::Cb => "C♭",
        }
    }

    pub fn signature(&self) -> KeySignature {
        match self {
            MajorKey::C => KeySignature::sharps(0),
            MajorKey::G => KeySignature::sharps(1),
            MajorKey::D => KeySignature::sharps(2),
            MajorKey::A => KeySignature::sharps(3),
            MajorKey::E => KeySignature::sharps(4),
            MajorKey::B => KeySignature::sharps(5),
            MajorKey::Fs => KeySignature::sharps(6),
            MajorKey::Cs => KeySignature::sharps(7),
            MajorKey::F => KeySignature::flats(1),
            MajorKey::Bb => KeySignature::flats(2),
            MajorKey::Eb => KeySignature::flats(3),
            MajorKey::Ab => KeySignature::flats(4),
            MajorKey::Db => KeySignature::flats(5),
            MajorKey::Gb => KeySignature::flats(6),
            MajorKey::Cb => KeySignature::flats(7),
        }
    }

    /// Tonic pitch class; C♭ lands on B
    pub fn pitch_class(&self) -> PitchClass {
        match self {
            MajorKey::C => PitchClass::C,
            MajorKey::G => PitchClass::G,
            MajorKey::D => PitchClass::D,
            MajorKey::A => PitchClass::A,
            MajorKey::E => PitchClass::E,
            MajorKey::B | MajorKey::Cb => PitchClass::B,
            MajorKey::Fs | MajorKey::Gb => PitchClass::Fs,
            MajorKey::Cs | MajorKey::Db => PitchClass::Cs,
            MajorKey::F => PitchClass::F,
            MajorKey::Bb => PitchClass::As,
            MajorKey::Eb => PitchClass::Ds,
            MajorKey::Ab => PitchClass::Gs,
        }
    }

    pub fn relative_minor(&self) -> &'static str {
        match self {
            MajorKey::C => "A",
            MajorKey::G => "E",
            MajorKey::D => "B",
            MajorKey::A => "F♯",
            MajorKey::E => "C♯",
            MajorKey::B => "G♯",
            MajorKey::Fs => "D♯",
            MajorKey::Cs => "A♯",
            MajorKey::F => "D",
            MajorKey::Bb => "G",
            MajorKey::Eb => "C",
            MajorKey::Ab => "F",
            MajorKey::Db => "B♭",
            MajorKey::Gb => "E♭",
            MajorKey::Cb => "A♭",
        }
    }

    /// The other spelling of the same tonic, for the three duplicate pairs
    pub fn enharmonic(&self) -> Option<MajorKey> {
        match self {
            MajorKey::Fs => Some(MajorKey::Gb),
            MajorKey::Gb => Some(MajorKey::Fs),
            MajorKey::Cs => Some(MajorKey::Db),
            MajorKey::Db => Some(MajorKey::Cs),
            MajorKey::B => Some(MajorKey::Cb),
            MajorKey::Cb => Some(MajorKey::B),
            _ => None,
        }
    }
}

impl fmt::Display for MajorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MajorKey {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        MajorKey::ALL
            .iter()
            .copied()
            .find(|key| key.name() == s)
            .ok_or_else(|| TheoryError::UnknownKey(s.to_string()))
    }
}

/// A key name as accepted from callers: one entry, or an enharmonic pair
/// written "A/B"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyName {
    Single(MajorKey),
    Enharmonic(MajorKey, MajorKey),
}

impl KeyName {
    /// Parse a single key name or a compound of two enharmonic twins
    pub fn parse(name: &str) -> Result<KeyName> {
        match name.split_once('/') {
            None => name.parse().map(KeyName::Single),
            Some((first, second)) => {
                let first: MajorKey = first.parse()?;
                let second: MajorKey = second.parse()?;
                if first.enharmonic() == Some(second) {
                    Ok(KeyName::Enharmonic(first, second))
                } else {
                    log::warn!("Rejected compound key '{}': halves are not enharmonic", name);
                    Err(TheoryError::UnknownKey(name.to_string()))
                }
            }
        }
    }

    pub fn pitch_class(&self) -> PitchClass {
        match self {
            KeyName::Single(key) | KeyName::Enharmonic(key, _) => key.pitch_class(),
        }
    }
}

// Reverse index: pitch class -> catalog entries, in catalog order
static KEYS_BY_PITCH_CLASS: Lazy<Vec<Vec<MajorKey>>> = Lazy::new(|| {
    let mut index = vec![Vec::new(); PitchClass::ALL.len()];
    for key in MajorKey::ALL {
        index[key.pitch_class().index() as usize].push(key);
    }
    index
});

/// Catalog entries whose tonic is `pitch`; two for the duplicate pairs
pub fn keys_for_pitch_class(pitch: PitchClass) -> &'static [MajorKey] {
    KEYS_BY_PITCH_CLASS
        .get(pitch.index() as usize)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Display name for a pitch class as a key: "D", "B♭", or "F♯/G♭"
pub fn key_name_for_pitch_class(pitch: PitchClass) -> String {
    keys_for_pitch_class(pitch)
        .iter()
        .map(MajorKey::name)
        .collect::<Vec<_>>()
        .join("/")
}

/// Descriptor for one key name
pub fn signature_of(key_name: &str) -> Result<String> {
    let key: MajorKey = key_name.parse()?;
    Ok(key.signature().descriptor())
}

/// Descriptors for every "/"-separated part of `key_name`, rejoined with "/"
pub fn dual_signature_of(key_name: &str) -> Result<String> {
    let parts = key_name
        .split('/')
        .map(signature_of)
        .collect::<Result<Vec<_>>>()?;
    Ok(parts.join("/"))
}
