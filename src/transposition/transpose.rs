/// Semitone shifts over the chromatic cycle

use crate::errors::Result;
use crate::models::PitchClass;

/// Shift a pitch class by any number of semitones, wrapping mod 12
pub fn shift(pitch: PitchClass, semitones: i32) -> PitchClass {
    PitchClass::from_index(pitch.index() as i32 + semitones.rem_euclid(12))
}

/// Shift a spelling and return the canonical label of the result
///
/// Black keys come back in compound form ("A♯/B♭").
pub fn transpose(spelling: &str, semitones: i32) -> Result<&'static str> {
    let pitch = PitchClass::resolve(spelling)?;
    Ok(shift(pitch, semitones).label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TheoryError;

    #[test]
    fn test_down_a_tone() {
        assert_eq!(transpose("C", -2).unwrap(), "A♯/B♭");
        assert_eq!(transpose("D", -2).unwrap(), "C");
    }

    #[test]
    fn test_up_a_tone() {
        assert_eq!(transpose("D", 2).unwrap(), "E");
        assert_eq!(transpose("B", 2).unwrap(), "C♯/D♭");
    }

    #[test]
    fn test_zero_is_canonical_identity() {
        assert_eq!(transpose("D♭", 0).unwrap(), "C♯/D♭");
        assert_eq!(transpose("G", 0).unwrap(), "G");
    }

    #[test]
    fn test_large_shifts_wrap() {
        assert_eq!(transpose("C", 12).unwrap(), "C");
        assert_eq!(transpose("C", -13).unwrap(), "B");
        assert_eq!(transpose("E", 25).unwrap(), "F");
    }

    #[test]
    fn test_unknown_spelling() {
        assert_eq!(transpose("C♭", 1), Err(TheoryError::UnknownSpelling("C♭".into())));
    }
}
