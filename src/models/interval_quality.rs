/// Interval names by semitone magnitude (0 = unison … 12 = octave)

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalQuality {
    Unison,
    MinorSecond,
    MajorSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    AugmentedFourth,
    PerfectFifth,
    MinorSixth,
    MajorSixth,
    MinorSeventh,
    MajorSeventh,
    Octave,
}

impl IntervalQuality {
    pub const ALL: [IntervalQuality; 13] = [
        IntervalQuality::Unison,
        IntervalQuality::MinorSecond,
        IntervalQuality::MajorSecond,
        IntervalQuality::MinorThird,
        IntervalQuality::MajorThird,
        IntervalQuality::PerfectFourth,
        IntervalQuality::AugmentedFourth,
        IntervalQuality::PerfectFifth,
        IntervalQuality::MinorSixth,
        IntervalQuality::MajorSixth,
        IntervalQuality::MinorSeventh,
        IntervalQuality::MajorSeventh,
        IntervalQuality::Octave,
    ];

    /// Quality for an absolute semitone count; `None` past the octave
    pub fn from_semitones(semitones: u8) -> Option<IntervalQuality> {
        Self::ALL.get(semitones as usize).copied()
    }

    /// Quality of a signed interval (direction is ignored)
    ///
    /// Panics past the octave; intervals inside the cycle are in [-11, 11].
    pub fn of_interval(interval: i8) -> IntervalQuality {
        let magnitude = interval.unsigned_abs();
        debug_assert!(magnitude <= 12, "interval {} is wider than an octave", interval);
        Self::ALL[magnitude as usize]
    }

    pub fn semitones(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            IntervalQuality::Unison => "Unison",
            IntervalQuality::MinorSecond => "Minor 2nd",
            IntervalQuality::MajorSecond => "Major 2nd",
            IntervalQuality::MinorThird => "Minor 3rd",
            IntervalQuality::MajorThird => "Major 3rd",
            IntervalQuality::PerfectFourth => "Perfect 4th",
            IntervalQuality::AugmentedFourth => "Augmented 4th",
            IntervalQuality::PerfectFifth => "Perfect 5th",
            IntervalQuality::MinorSixth => "Minor 6th",
            IntervalQuality::MajorSixth => "Major 6th",
            IntervalQuality::MinorSeventh => "Minor 7th",
            IntervalQuality::MajorSeventh => "Major 7th",
            IntervalQuality::Octave => "Octave",
        }
    }

    /// Indefinite article for prose ("an Augmented 4th", "a Major 2nd")
    pub fn article(self) -> &'static str {
        match self {
            IntervalQuality::AugmentedFourth | IntervalQuality::Octave => "an",
            _ => "a",
        }
    }
}

impl fmt::Display for IntervalQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for IntervalQuality {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirteen_names() {
        assert_eq!(IntervalQuality::ALL.len(), 13);
        assert_eq!(IntervalQuality::from_semitones(0).unwrap().name(), "Unison");
        assert_eq!(IntervalQuality::from_semitones(5).unwrap().name(), "Perfect 4th");
        assert_eq!(IntervalQuality::from_semitones(7).unwrap().name(), "Perfect 5th");
        assert_eq!(IntervalQuality::from_semitones(12).unwrap().name(), "Octave");
        assert_eq!(IntervalQuality::from_semitones(13), None);
    }

    #[test]
    fn test_major_minor_distinction() {
        assert_eq!(IntervalQuality::from_semitones(1).unwrap().name(), "Minor 2nd");
        assert_eq!(IntervalQuality::from_semitones(2).unwrap().name(), "Major 2nd");
        assert_eq!(IntervalQuality::from_semitones(3).unwrap().name(), "Minor 3rd");
        assert_eq!(IntervalQuality::from_semitones(4).unwrap().name(), "Major 3rd");
    }

    #[test]
    fn test_tritone() {
        assert_eq!(IntervalQuality::from_semitones(6), Some(IntervalQuality::AugmentedFourth));
        assert_eq!(IntervalQuality::AugmentedFourth.article(), "an");
    }

    #[test]
    fn test_of_interval_ignores_sign() {
        assert_eq!(IntervalQuality::of_interval(-2), IntervalQuality::MajorSecond);
        assert_eq!(IntervalQuality::of_interval(2), IntervalQuality::MajorSecond);
        assert_eq!(IntervalQuality::of_interval(0), IntervalQuality::Unison);
        assert_eq!(IntervalQuality::of_interval(-12), IntervalQuality::Octave);
    }

    #[test]
    #[should_panic]
    fn test_of_interval_rejects_more_than_an_octave() {
        IntervalQuality::of_interval(13);
    }

    #[test]
    fn test_semitones_match_position() {
        for (i, quality) in IntervalQuality::ALL.iter().enumerate() {
            assert_eq!(quality.semitones() as usize, i);
        }
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&IntervalQuality::MinorThird).unwrap();
        assert_eq!(json, "\"Minor 3rd\"");
    }
}
