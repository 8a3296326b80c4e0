/// Shortest signed distance between two pitch classes
///
/// Walks the chromatic cycle in both directions from the source until the
/// target is reached and keeps the shorter path. A tritone is equally far
/// both ways; it always resolves ascending (+6).

use crate::errors::Result;
use crate::models::PitchClass;

/// Signed semitone distance in [-11, 11]; 0 is unison
pub type SemitoneInterval = i8;

/// Typed form: total over all pitch-class pairs
pub fn interval_between(source: PitchClass, target: PitchClass) -> SemitoneInterval {
    if source == target {
        return 0;
    }

    let forwards = steps_until(source, target, PitchClass::successor);
    let backwards = steps_until(source, target, PitchClass::predecessor);
    log::trace!(
        "interval {} -> {}: forwards={}, backwards={}",
        source,
        target,
        forwards,
        backwards
    );

    if backwards < forwards {
        -(backwards as SemitoneInterval)
    } else {
        // Equal paths (tritone) go up
        forwards as SemitoneInterval
    }
}

/// Count steps from `from` to `to` using `step`; at most 11 for distinct classes
fn steps_until(from: PitchClass, to: PitchClass, step: fn(PitchClass) -> PitchClass) -> u8 {
    let mut current = from;
    let mut count = 0u8;
    loop {
        current = step(current);
        count += 1;
        if current == to || count >= 12 {
            return count;
        }
    }
}

/// Interval between two spellings; raw-identical text short-circuits to unison
pub fn interval(source: &str, target: &str) -> Result<SemitoneInterval> {
    if source == target {
        PitchClass::resolve(source)?;
        return Ok(0);
    }
    let source = PitchClass::resolve(source)?;
    let target = PitchClass::resolve(target)?;
    Ok(interval_between(source, target))
}
