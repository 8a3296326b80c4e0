//! Scale practice catalog and picker
//!
//! Scales are grouped into families the player can tick. The picker draws one
//! scale at random from the ticked families, never repeating the scale that is
//! currently on screen when there is any alternative.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, TheoryError};
use crate::models::KeySignature;
use crate::models::KeySignature as Sig;
use self::ScaleRange::{Twelfth, TwoOctaves};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleFamily {
    Major,
    Harmonic,
    Melodic,
    Chromatic,
    Pentatonic,
    Dominant,
    Diminished,
}

impl ScaleFamily {
    /// Fixed order used when several families are combined
    pub const ALL: [ScaleFamily; 7] = [
        ScaleFamily::Major,
        ScaleFamily::Harmonic,
        ScaleFamily::Melodic,
        ScaleFamily::Chromatic,
        ScaleFamily::Pentatonic,
        ScaleFamily::Dominant,
        ScaleFamily::Diminished,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleFamily::Major => "major",
            ScaleFamily::Harmonic => "harmonic",
            ScaleFamily::Melodic => "melodic",
            ScaleFamily::Chromatic => "chromatic",
            ScaleFamily::Pentatonic => "pentatonic",
            ScaleFamily::Dominant => "dominant",
            ScaleFamily::Diminished => "diminished",
        }
    }

    /// Checkbox label
    pub fn title(&self) -> &'static str {
        match self {
            ScaleFamily::Major => "Major",
            ScaleFamily::Harmonic => "Harmonic Minor",
            ScaleFamily::Melodic => "Melodic Minor",
            ScaleFamily::Chromatic => "Chromatic",
            ScaleFamily::Pentatonic => "Pentatonic",
            ScaleFamily::Dominant => "Dominant 7th",
            ScaleFamily::Diminished => "Diminished 7th",
        }
    }

    pub fn scales(&self) -> &'static [Scale] {
        match self {
            ScaleFamily::Major => MAJOR_SCALES,
            ScaleFamily::Harmonic => HARMONIC_MINOR_SCALES,
            ScaleFamily::Melodic => MELODIC_MINOR_SCALES,
            ScaleFamily::Chromatic => CHROMATIC_SCALES,
            ScaleFamily::Pentatonic => PENTATONIC_SCALES,
            ScaleFamily::Dominant => DOMINANT_7TH_SCALES,
            ScaleFamily::Diminished => DIMINISHED_7TH_SCALES,
        }
    }
}

impl fmt::Display for ScaleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for ScaleFamily {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        ScaleFamily::ALL
            .iter()
            .copied()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| TheoryError::UnknownScaleFamily(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScaleRange {
    #[serde(rename = "2 octaves")]
    TwoOctaves,
    #[serde(rename = "12th")]
    Twelfth,
}

impl fmt::Display for ScaleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleRange::TwoOctaves => write!(f, "2 octaves"),
            ScaleRange::Twelfth => write!(f, "12th"),
        }
    }
}

/// A practice item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Scale {
    pub name: &'static str,
    pub range: ScaleRange,
    /// None for scales without a home key (chromatic, diminished 7th)
    pub signature: Option<KeySignature>,
}

impl Scale {
    const fn keyed(name: &'static str, range: ScaleRange, signature: KeySignature) -> Self {
        Self { name, range, signature: Some(signature) }
    }

    const fn keyless(name: &'static str, range: ScaleRange) -> Self {
        Self { name, range, signature: None }
    }

    /// Key descriptor to reveal on request, e.g. "3 flats"
    pub fn key(&self) -> Option<String> {
        self.signature.map(|sig| sig.descriptor())
    }
}

const MAJOR_SCALES: &[Scale] = &[
    Scale::keyed("C Major", TwoOctaves, Sig::sharps(0)),
    Scale::keyed("G Major", Twelfth, Sig::sharps(1)),
    Scale::keyed("D Major", Twelfth, Sig::sharps(2)),
    Scale::keyed("A Major", TwoOctaves, Sig::sharps(3)),
    Scale::keyed("E Major", Twelfth, Sig::sharps(4)),
    Scale::keyed("B Major", TwoOctaves, Sig::sharps(5)),
    Scale::keyed("F♯ Major", TwoOctaves, Sig::sharps(6)),
    Scale::keyed("F Major", Twelfth, Sig::flats(1)),
    Scale::keyed("B♭ Major", TwoOctaves, Sig::flats(2)),
    Scale::keyed("E♭ Major", Twelfth, Sig::flats(3)),
    Scale::keyed("A♭ Major", TwoOctaves, Sig::flats(4)),
    Scale::keyed("D♭ Major", Twelfth, Sig::flats(5)),
    Scale::keyed("G♭ Major", Twelfth, Sig::flats(6)),
];

const HARMONIC_MINOR_SCALES: &[Scale] = &[
    Scale::keyed("A Harmonic Minor", TwoOctaves, Sig::sharps(0)),
    Scale::keyed("E Harmonic Minor", Twelfth, Sig::sharps(1)),
    Scale::keyed("B Harmonic Minor", TwoOctaves, Sig::sharps(2)),
    Scale::keyed("F♯ Harmonic Minor", TwoOctaves, Sig::sharps(3)),
    Scale::keyed("C♯ Harmonic Minor", TwoOctaves, Sig::sharps(4)),
    Scale::keyed("G♯ Harmonic Minor", Twelfth, Sig::sharps(5)),
    Scale::keyed("D♯ Harmonic Minor", Twelfth, Sig::sharps(6)),
    Scale::keyed("D Harmonic Minor", Twelfth, Sig::flats(1)),
    Scale::keyed("G Harmonic Minor", Twelfth, Sig::flats(2)),
    Scale::keyed("C Harmonic Minor", TwoOctaves, Sig::flats(3)),
    Scale::keyed("F Harmonic Minor", Twelfth, Sig::flats(4)),
    Scale::keyed("B♭ Harmonic Minor", TwoOctaves, Sig::flats(5)),
    Scale::keyed("E♭ Harmonic Minor", TwoOctaves, Sig::flats(6)),
];

const MELODIC_MINOR_SCALES: &[Scale] = &[
    Scale::keyed("A Melodic Minor", TwoOctaves, Sig::sharps(0)),
    Scale::keyed("E Melodic Minor", Twelfth, Sig::sharps(1)),
    Scale::keyed("B Melodic Minor", TwoOctaves, Sig::sharps(2)),
    Scale::keyed("F♯ Melodic Minor", TwoOctaves, Sig::sharps(3)),
    Scale::keyed("C♯ Melodic Minor", TwoOctaves, Sig::sharps(4)),
    Scale::keyed("G♯ Melodic Minor", Twelfth, Sig::sharps(5)),
    Scale::keyed("D♯ Melodic Minor", Twelfth, Sig::sharps(6)),
    Scale::keyed("D Melodic Minor", Twelfth, Sig::flats(1)),
    Scale::keyed("G Melodic Minor", Twelfth, Sig::flats(2)),
    Scale::keyed("C Melodic Minor", TwoOctaves, Sig::flats(3)),
    Scale::keyed("F Melodic Minor", Twelfth, Sig::flats(4)),
    Scale::keyed("B♭ Melodic Minor", TwoOctaves, Sig::flats(5)),
    Scale::keyed("E♭ Melodic Minor", TwoOctaves, Sig::flats(6)),
];

const CHROMATIC_SCALES: &[Scale] = &[
    Scale::keyless("Chromatic scale starting on C", TwoOctaves),
    Scale::keyless("Chromatic scale starting on B", TwoOctaves),
    Scale::keyless("Chromatic scale starting on F♯", TwoOctaves),
    Scale::keyless("Chromatic scale starting on A", TwoOctaves),
    Scale::keyless("Chromatic scale starting on B♭", TwoOctaves),
    Scale::keyless("Chromatic scale starting on G", TwoOctaves),
    Scale::keyless("Chromatic scale starting on A♭", TwoOctaves),
];

const PENTATONIC_SCALES: &[Scale] = &[
    Scale::keyed("C Pentatonic", TwoOctaves, Sig::sharps(0)),
    Scale::keyed("G Pentatonic", TwoOctaves, Sig::sharps(1)),
    Scale::keyed("D Pentatonic", Twelfth, Sig::sharps(2)),
    Scale::keyed("A Pentatonic", TwoOctaves, Sig::sharps(3)),
    Scale::keyed("E Pentatonic", Twelfth, Sig::sharps(4)),
    Scale::keyed("B Pentatonic", TwoOctaves, Sig::sharps(5)),
    Scale::keyed("F♯ Pentatonic", TwoOctaves, Sig::sharps(6)),
    Scale::keyed("F Pentatonic", Twelfth, Sig::flats(1)),
    Scale::keyed("B♭ Pentatonic", TwoOctaves, Sig::flats(2)),
    Scale::keyed("E♭ Pentatonic", Twelfth, Sig::flats(3)),
    Scale::keyed("A♭ Pentatonic", TwoOctaves, Sig::flats(4)),
    Scale::keyed("D♭ Pentatonic", Twelfth, Sig::flats(5)),
    Scale::keyed("G♭ Pentatonic", Twelfth, Sig::flats(6)),
];

const DOMINANT_7TH_SCALES: &[Scale] = &[
    Scale::keyed("Dominant 7th in the key of C", TwoOctaves, Sig::sharps(0)),
    Scale::keyed("Dominant 7th in the key of G", Twelfth, Sig::sharps(1)),
    Scale::keyed("Dominant 7th in the key of D", TwoOctaves, Sig::sharps(2)),
    Scale::keyed("Dominant 7th in the key of A", Twelfth, Sig::sharps(3)),
    Scale::keyed("Dominant 7th in the key of E", Twelfth, Sig::sharps(4)),
    Scale::keyed("Dominant 7th in the key of B", TwoOctaves, Sig::sharps(5)),
    Scale::keyed("Dominant 7th in the key of F♯", TwoOctaves, Sig::sharps(6)),
    Scale::keyed("Dominant 7th in the key of B♭", Twelfth, Sig::flats(2)),
    Scale::keyed("Dominant 7th in the key of E♭", TwoOctaves, Sig::flats(3)),
    Scale::keyed("Dominant 7th in the key of A♭", Twelfth, Sig::flats(4)),
    Scale::keyed("Dominant 7th in the key of D♭", TwoOctaves, Sig::flats(5)),
    Scale::keyed("Dominant 7th in the key of G♭", Twelfth, Sig::flats(6)),
];

const DIMINISHED_7TH_SCALES: &[Scale] = &[
    Scale::keyless("Diminished 7th starting on G", TwoOctaves),
    Scale::keyless("Diminished 7th starting on A", TwoOctaves),
    Scale::keyless("Diminished 7th starting on G♯", TwoOctaves),
    Scale::keyless("Diminished 7th starting on B♭", TwoOctaves),
    Scale::keyless("Diminished 7th starting on F♯", TwoOctaves),
    Scale::keyless("Diminished 7th starting on B", TwoOctaves),
    Scale::keyless("Diminished 7th starting on C", TwoOctaves),
];

/// All scales of the selected families, in family order
///
/// Selecting a family twice does not double its weight.
pub fn candidates(families: &[ScaleFamily]) -> Vec<&'static Scale> {
    ScaleFamily::ALL
        .iter()
        .copied()
        .filter(|family| families.contains(family))
        .flat_map(|family| family.scales().iter())
        .collect()
}

/// Pick a scale, drawing indices from `draw(bound)` (must return < bound)
///
/// The `previous` scale is excluded unless it is the only candidate.
pub fn pick_with<F>(
    families: &[ScaleFamily],
    previous: Option<&str>,
    mut draw: F,
) -> Result<&'static Scale>
where
    F: FnMut(usize) -> Result<usize>,
{
    let all = candidates(families);
    if all.is_empty() {
        return Err(TheoryError::NoScalesSelected);
    }
    let fresh: Vec<&'static Scale> = all
        .iter()
        .copied()
        .filter(|scale| Some(scale.name) != previous)
        .collect();
    // A lone candidate may repeat
    let pool = if fresh.is_empty() { all } else { fresh };

    let index = draw(pool.len())?;
    let picked = pool[index % pool.len()];
    log::debug!("Picked '{}' from {} candidates", picked.name, pool.len());
    Ok(picked)
}

/// Pick a scale using platform randomness
pub fn pick(families: &[ScaleFamily], previous: Option<&str>) -> Result<&'static Scale> {
    pick_with(families, previous, random_index)
}

/// Uniform index in `0..bound` from the OS / browser entropy source
fn random_index(bound: usize) -> Result<usize> {
    uniform_below(bound, || {
        let mut bytes = [0u8; 8];
        getrandom::getrandom(&mut bytes).map_err(|e| TheoryError::Entropy(e.to_string()))?;
        Ok(u64::from_le_bytes(bytes))
    })
}

/// Map raw 64-bit draws onto `0..bound` without modulo bias
///
/// Draws from the incomplete top block of the u64 range are rejected and
/// redrawn.
fn uniform_below<F>(bound: usize, mut next: F) -> Result<usize>
where
    F: FnMut() -> Result<u64>,
{
    let bound = bound.max(1) as u64;
    let limit = u64::MAX - u64::MAX % bound;
    loop {
        let value = next()?;
        if value < limit {
            return Ok((value % bound) as usize);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_sizes() {
        assert_eq!(ScaleFamily::Major.scales().len(), 13);
        assert_eq!(ScaleFamily::Harmonic.scales().len(), 13);
        assert_eq!(ScaleFamily::Melodic.scales().len(), 13);
        assert_eq!(ScaleFamily::Chromatic.scales().len(), 7);
        assert_eq!(ScaleFamily::Pentatonic.scales().len(), 13);
        assert_eq!(ScaleFamily::Dominant.scales().len(), 12);
        assert_eq!(ScaleFamily::Diminished.scales().len(), 7);
    }

    #[test]
    fn test_key_descriptors() {
        let c = &MAJOR_SCALES[0];
        assert_eq!(c.key().as_deref(), Some("no accidentals"));
        assert_eq!(MAJOR_SCALES[1].key().as_deref(), Some("1 sharp"));
        assert_eq!(MAJOR_SCALES[8].key().as_deref(), Some("2 flats"));
        assert_eq!(CHROMATIC_SCALES[0].key(), None);
    }

    #[test]
    fn test_family_parse() {
        assert_eq!("major".parse::<ScaleFamily>().unwrap(), ScaleFamily::Major);
        assert_eq!("diminished".parse::<ScaleFamily>().unwrap(), ScaleFamily::Diminished);
        assert_eq!(
            "blues".parse::<ScaleFamily>(),
            Err(TheoryError::UnknownScaleFamily("blues".into()))
        );
    }

    #[test]
    fn test_candidates_follow_family_order() {
        let picked = candidates(&[ScaleFamily::Diminished, ScaleFamily::Major, ScaleFamily::Major]);
        assert_eq!(picked.len(), 20);
        assert_eq!(picked[0].name, "C Major");
        assert_eq!(picked[13].name, "Diminished 7th starting on G");
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(pick_with(&[], None, |_| Ok(0)), Err(TheoryError::NoScalesSelected));
    }

    #[test]
    fn test_previous_is_excluded() {
        let scale = pick_with(&[ScaleFamily::Major], Some("C Major"), |_| Ok(0)).unwrap();
        assert_eq!(scale.name, "G Major");
    }

    #[test]
    fn test_draw_bound_shrinks_when_previous_excluded() {
        let mut seen_bound = 0;
        pick_with(&[ScaleFamily::Chromatic], Some("Chromatic scale starting on C"), |bound| {
            seen_bound = bound;
            Ok(bound - 1)
        })
        .unwrap();
        assert_eq!(seen_bound, 6);
    }

    #[test]
    fn test_uniform_below_redraws_the_biased_tail() {
        // u64::MAX is a multiple of 3, so the top value alone is outside the even blocks
        let mut draws = vec![u64::MAX, 5].into_iter();
        let index = uniform_below(3, || Ok(draws.next().unwrap())).unwrap();
        assert_eq!(index, 2);
        assert_eq!(draws.next(), None);

        let mut draws = vec![u64::MAX - 2, 7].into_iter();
        assert_eq!(uniform_below(2, || Ok(draws.next().unwrap())).unwrap(), 1);
        assert_eq!(draws.next(), Some(7));
    }

    #[test]
    fn test_uniform_below_passes_entropy_errors() {
        let err = uniform_below(4, || Err(TheoryError::Entropy("offline".into())));
        assert_eq!(err, Err(TheoryError::Entropy("offline".into())));
    }

    #[test]
    fn test_random_pick_never_repeats() {
        let mut previous: Option<&str> = None;
        for _ in 0..50 {
            let scale = pick(&[ScaleFamily::Diminished], previous).unwrap();
            assert_ne!(Some(scale.name), previous);
            previous = Some(scale.name);
        }
    }
}
