// Instrument transposition scenarios through the public API

use pretty_assertions::assert_eq;
use theory_wasm::models::key_signature::{dual_signature_of, signature_of};
use theory_wasm::transposition::{interval, transpose};
use theory_wasm::{plan_transposition, Direction, TheoryError, TransposedKey};

/// (source note, expected written note) for a C part copied to a D instrument
const C_TO_D: [(&str, &str); 12] = [
    ("C", "A♯/B♭"),
    ("C♯/D♭", "B"),
    ("D", "C"),
    ("D♯/E♭", "C♯/D♭"),
    ("E", "D"),
    ("F", "D♯/E♭"),
    ("F♯", "E"),
    ("G", "F"),
    ("G♯/A♭", "F♯/G♭"),
    ("A", "G"),
    ("A♯/B♭", "G♯/A♭"),
    ("B", "A"),
];

#[test]
fn test_c_to_d_instrument_every_note() {
    for (note, expected) in C_TO_D {
        let result = plan_transposition("C", "D", None, Some(note)).unwrap();
        assert_eq!(result.summary(), "Transposing down a Major 2nd");
        assert_eq!(result.transposed_note.as_deref(), Some(expected), "note {}", note);
    }
}

#[test]
fn test_c_to_e_flat_is_down_a_minor_third() {
    let result = plan_transposition("C", "E♭", None, Some("C")).unwrap();
    assert_eq!(result.offset, -3);
    assert_eq!(result.summary(), "Transposing down a Minor 3rd");
    assert_eq!(result.transposed_note.as_deref(), Some("A"));

    // Either half of a compound spelling is accepted
    let result = plan_transposition("C", "E♭", None, Some("C♯")).unwrap();
    assert_eq!(result.transposed_note.as_deref(), Some("A♯/B♭"));
}

#[test]
fn test_c_to_a_is_up_a_minor_third() {
    let result = plan_transposition("C", "A", Some("C"), Some("G")).unwrap();
    assert_eq!(result.offset, 3);
    assert_eq!(result.direction, Direction::Up);
    assert_eq!(result.transposed_note.as_deref(), Some("A♯/B♭"));
    assert_eq!(
        result.transposed_key,
        Some(TransposedKey {
            name: "E♭".into(),
            signature: "3 flats".into(),
        })
    );
}

#[test]
fn test_c_to_b_flat_key_signature() {
    // Concert C for a B♭ instrument is written in D
    let result = plan_transposition("C", "B♭", Some("C"), None).unwrap();
    assert_eq!(result.summary(), "Transposing up a Major 2nd");
    assert_eq!(result.transposed_key.unwrap().name, "D");
}

#[test]
fn test_b_flat_to_c_scenario() {
    assert_eq!(interval("B♭", "C").unwrap(), 2);
    let result = plan_transposition("B♭", "C", None, Some("D")).unwrap();
    assert_eq!(result.offset, -2);
    assert_eq!(result.transposed_note.as_deref(), Some("C"));
    assert_eq!(transpose("D", 2).unwrap(), "E");
}

#[test]
fn test_signature_scenarios() {
    assert_eq!(signature_of("G").unwrap(), "1 sharp");
    assert_eq!(dual_signature_of("F♯/G♭").unwrap(), "6 sharps/6 flats");
}

#[test]
fn test_unison_scenario() {
    assert_eq!(interval("C", "C").unwrap(), 0);
    let result = plan_transposition("C", "C", Some("D"), Some("E")).unwrap();
    assert_eq!(result.direction, Direction::Unison);
    assert_eq!(result.transposed_key, None);
    assert_eq!(result.transposed_note, None);
}

#[test]
fn test_tritone_scenario() {
    assert_eq!(interval("E♭", "A").unwrap(), 6);
    assert_eq!(interval("A", "E♭").unwrap(), 6);

    let result = plan_transposition("E♭", "A", Some("A"), Some("D")).unwrap();
    assert_eq!(result.offset, -6);
    assert_eq!(result.quality.name(), "Augmented 4th");
    assert_eq!(result.transposed_note.as_deref(), Some("G♯/A♭"));
    assert_eq!(result.transposed_key.unwrap().name, "E♭");
}

#[test]
fn test_enharmonic_key_inputs() {
    // Both spellings of a duplicate key, and the compound, land on the same key
    for key in ["F♯", "G♭", "F♯/G♭"] {
        let result = plan_transposition("B♭", "E♭", Some(key), None).unwrap();
        assert_eq!(result.offset, -5);
        let transposed = result.transposed_key.unwrap();
        assert_eq!(transposed.name, "C♯/D♭");
        assert_eq!(transposed.signature, "7 sharps/5 flats");
    }
}

#[test]
fn test_c_flat_key_resolves_through_b() {
    let result = plan_transposition("C", "D", Some("C♭"), None).unwrap();
    let transposed = result.transposed_key.unwrap();
    assert_eq!(transposed.name, "A");
    assert_eq!(transposed.signature, "3 sharps");
}

#[test]
fn test_boundary_errors() {
    assert_eq!(
        plan_transposition("H", "C", None, None).unwrap_err(),
        TheoryError::UnknownSpelling("H".into())
    );
    assert_eq!(
        plan_transposition("C", "D", Some("Z"), None).unwrap_err(),
        TheoryError::UnknownKey("Z".into())
    );
    assert_eq!(
        plan_transposition("C", "D", None, Some("Cb")).unwrap_err(),
        TheoryError::UnknownSpelling("Cb".into())
    );
}
