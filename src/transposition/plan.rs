//! Instrument-to-instrument transposition
//!
//! Music written for one transposing instrument is re-spelled so that another
//! instrument sounds the same concert pitch. The written material moves
//! opposite to the interval between the two instrument keys: going from a C
//! instrument to a B♭ instrument (B♭ is a tone below C) writes everything a
//! tone higher.

use serde::Serialize;
use std::fmt;

use super::interval::{interval_between, SemitoneInterval};
use super::transpose::shift;
use crate::errors::Result;
use crate::models::key_signature::{dual_signature_of, key_name_for_pitch_class, KeyName};
use crate::models::{InstrumentKey, IntervalQuality, PitchClass};

/// Which way the written material moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Unison,
}

impl Direction {
    pub fn of_offset(offset: SemitoneInterval) -> Direction {
        match offset {
            o if o > 0 => Direction::Up,
            o if o < 0 => Direction::Down,
            _ => Direction::Unison,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Unison => "unison",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Key signature after transposition, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransposedKey {
    /// "D", or "F♯/G♭" when the pitch class owns two catalog entries
    pub name: String,
    /// "2 sharps", or "6 sharps/6 flats" for a compound name
    pub signature: String,
}

/// Outcome of a transposition request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranspositionResult {
    /// Semitones applied to the written material
    pub offset: SemitoneInterval,
    #[serde(rename = "qualityName")]
    pub quality: IntervalQuality,
    pub direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transposed_key: Option<TransposedKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transposed_note: Option<String>,
}

impl TranspositionResult {
    fn unison() -> Self {
        Self {
            offset: 0,
            quality: IntervalQuality::Unison,
            direction: Direction::Unison,
            transposed_key: None,
            transposed_note: None,
        }
    }

    /// Headline sentence for the result panel
    pub fn summary(&self) -> String {
        match self.direction {
            Direction::Unison => "No transposition needed, keys are in unison".to_string(),
            direction => format!(
                "Transposing {} {} {}",
                direction,
                self.quality.article(),
                self.quality
            ),
        }
    }
}

/// Offset to apply to written material between two instruments
pub fn instrument_offset(source: InstrumentKey, target: InstrumentKey) -> SemitoneInterval {
    -interval_between(source.pitch_class(), target.pitch_class())
}

/// Interval between two instrument-key spellings
///
/// Only the eight instrument keys are accepted; any other spelling fails with
/// `UnknownSpelling` even when it names a valid pitch class.
pub fn instrument_interval(source: &str, target: &str) -> Result<SemitoneInterval> {
    let source: InstrumentKey = source.parse()?;
    let target: InstrumentKey = target.parse()?;
    Ok(interval_between(source.pitch_class(), target.pitch_class()))
}

/// Re-spell a key for the given offset, looking the result back up in the catalog
pub fn transpose_key(key: KeyName, offset: SemitoneInterval) -> Result<TransposedKey> {
    let pitch = shift(key.pitch_class(), offset as i32);
    let name = key_name_for_pitch_class(pitch);
    let signature = dual_signature_of(&name)?;
    Ok(TransposedKey { name, signature })
}

/// Typed transposition: every argument has already been validated
pub fn plan(
    source: InstrumentKey,
    target: InstrumentKey,
    key: Option<KeyName>,
    note: Option<PitchClass>,
) -> Result<TranspositionResult> {
    if source == target {
        log::debug!("{} -> {}: unison, nothing to re-spell", source, target);
        return Ok(TranspositionResult::unison());
    }

    let offset = instrument_offset(source, target);
    let quality = IntervalQuality::of_interval(offset);
    let direction = Direction::of_offset(offset);
    log::debug!(
        "{} -> {}: offset {} ({} {})",
        source,
        target,
        offset,
        direction,
        quality
    );

    let transposed_key = key.map(|k| transpose_key(k, offset)).transpose()?;
    let transposed_note = note.map(|n| shift(n, offset as i32).label().to_string());

    Ok(TranspositionResult {
        offset,
        quality,
        direction,
        transposed_key,
        transposed_note,
    })
}

/// Text boundary: parse every input first, then plan
///
/// A bad instrument key or note fails with `UnknownSpelling`, a bad key name
/// with `UnknownKey`, before any arithmetic happens.
pub fn plan_transposition(
    source: &str,
    target: &str,
    key_signature: Option<&str>,
    note: Option<&str>,
) -> Result<TranspositionResult> {
    let source: InstrumentKey = source.parse()?;
    let target: InstrumentKey = target.parse()?;
    let key = key_signature.map(KeyName::parse).transpose()?;
    let note = note.map(PitchClass::resolve).transpose()?;

    plan(source, target, key, note)
}
