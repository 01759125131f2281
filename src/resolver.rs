//! # Note Resolver
//!
//! Turns a root and a template into concrete notes on the keyboard.
//!
//! ## Octave Rule
//! Every template is laid out as one ascending span starting at the root in
//! octave 4. A note whose pitch-class index is below the root's index has
//! wrapped past B and lands in octave 5:
//!
//! ```text
//! root B, major scale:  B4 C#5 D#5 E5 F#5 G#5 A#5
//! root C, major scale:  C4 D4 E4 F4 G4 A4 B4
//! ```
//!
//! ## Enharmonic Display
//! Keys conventionally written with flats (F, Bb, Eb, Ab, Db, Gb, Cb) display
//! their notes with flat names. Spelling never changes the resolved notes,
//! only their names. A minor scale is spelled like its relative major, so
//! D minor shows Bb.
//!
//! ## Failure
//! [`resolve_symbol`] reports unknown roots and chord types as errors.
//! [`notes_for_symbol`] and [`resolve_named`] fail soft and return no notes.

use crate::error::ChordViewError;
use crate::pitch::{Note, PitchClass, Root, Spelling};
use crate::symbol::parse_symbol;
use crate::templates::Template;

/// Octave the root is placed in
pub const BASE_OCTAVE: i8 = 4;

/// Resolve semitone offsets against a root.
///
/// ```
/// use chordview::{resolve, PitchClass};
///
/// let notes: Vec<String> = resolve(PitchClass::A, &[0, 4, 7])
///     .iter()
///     .map(|n| n.to_string())
///     .collect();
/// assert_eq!(notes, vec!["A4", "C#5", "E5"]);
/// ```
pub fn resolve(root: PitchClass, offsets: &[u8]) -> Vec<Note> {
    let root_index = root.index();
    offsets
        .iter()
        .map(|&offset| {
            let index = (root_index + offset as usize) % 12;
            let octave = if index >= root_index {
                BASE_OCTAVE
            } else {
                BASE_OCTAVE + 1
            };
            Note::new(PitchClass::ALL[index], octave)
        })
        .collect()
}

pub fn resolve_template(root: PitchClass, template: Template) -> Vec<Note> {
    resolve(root, template.intervals())
}

/// Resolve a template against a root given by name; an unknown name yields no notes.
pub fn resolve_named(root: &str, template: Template) -> Vec<Note> {
    match PitchClass::parse(root.trim()) {
        Some((pitch, _)) => resolve_template(pitch, template),
        None => {
            log::warn!("ignoring unknown root '{}'", root);
            Vec::new()
        }
    }
}

/// Resolve a chord or scale symbol such as `Cmaj7`, `Bbm` or `F major`.
///
/// # Errors
/// [`ChordViewError::EmptySymbol`], [`ChordViewError::UnknownRoot`] or
/// [`ChordViewError::UnknownChordType`] when the symbol does not parse.
pub fn resolve_symbol(symbol: &str) -> Result<Vec<Note>, ChordViewError> {
    let selection = parse_symbol(symbol)?;
    Ok(selection.notes())
}

/// Like [`resolve_symbol`] but returns an empty list for anything unrecognized.
pub fn notes_for_symbol(symbol: &str) -> Vec<Note> {
    resolve_symbol(symbol).unwrap_or_else(|e| {
        log::warn!("no notes for '{}': {}", symbol, e);
        Vec::new()
    })
}

/// Whether a key on this root is conventionally written with flats
pub fn prefers_flats(root: Root) -> bool {
    match root.pitch {
        PitchClass::F
        | PitchClass::ASharp
        | PitchClass::DSharp
        | PitchClass::GSharp
        | PitchClass::CSharp => true,
        // Gb and Cb; written as F# and B these are sharp keys
        PitchClass::FSharp | PitchClass::B => root.spelling == Spelling::Flat,
        _ => false,
    }
}

/// Spelling used to display notes built on `root` with `template`
pub fn display_spelling(root: Root, template: Template) -> Spelling {
    let key = match template {
        Template::MinorScale => Root::new(root.pitch.transpose(3), root.spelling),
        _ => root,
    };
    if prefers_flats(key) {
        Spelling::Flat
    } else {
        Spelling::Sharp
    }
}

/// Names of `notes` in the given spelling
pub fn spell(notes: &[Note], spelling: Spelling) -> Vec<String> {
    notes.iter().map(|note| note.spelled(spelling)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{ChordQuality, CHORD_QUALITIES, MAJOR_SCALE};

    fn names(notes: &[Note]) -> Vec<String> {
        notes.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_chord_note_count_matches_template() {
        for root in PitchClass::ALL {
            for quality in CHORD_QUALITIES {
                let notes = resolve_template(root, Template::Chord(quality));
                assert_eq!(
                    notes.len(),
                    quality.intervals().len(),
                    "{}{}",
                    root,
                    quality.symbol()
                );
            }
        }
    }

    #[test]
    fn test_c_major_scale() {
        let notes = resolve(PitchClass::C, &MAJOR_SCALE);
        assert_eq!(names(&notes), vec!["C4", "D4", "E4", "F4", "G4", "A4", "B4"]);
    }

    #[test]
    fn test_b_major_scale_wraps_into_octave_5() {
        let notes = resolve_template(PitchClass::B, Template::MajorScale);
        assert_eq!(
            names(&notes),
            vec!["B4", "C#5", "D#5", "E5", "F#5", "G#5", "A#5"]
        );
    }

    #[test]
    fn test_root_always_in_base_octave() {
        for root in PitchClass::ALL {
            let notes = resolve_template(root, Template::MinorScale);
            assert_eq!(notes[0], Note::new(root, BASE_OCTAVE));
            assert!(notes.windows(2).all(|w| w[0] < w[1]), "ascending from {}", root);
        }
    }

    #[test]
    fn test_g7_wraps_after_b() {
        let notes = resolve_template(PitchClass::G, Template::Chord(ChordQuality::Dominant7));
        assert_eq!(names(&notes), vec!["G4", "B4", "D5", "F5"]);
    }

    #[test]
    fn test_unknown_root_is_empty() {
        assert!(resolve_named("H", Template::MajorScale).is_empty());
        assert!(resolve_named("", Template::Chord(ChordQuality::Major)).is_empty());
        assert_eq!(resolve_named("Eb", Template::Chord(ChordQuality::Major)).len(), 3);
    }

    #[test]
    fn test_unknown_chord_type_is_error_or_empty() {
        assert_eq!(
            resolve_symbol("Csus4"),
            Err(ChordViewError::UnknownChordType {
                symbol: "Csus4".to_string(),
                quality: "sus4".to_string(),
            })
        );
        assert!(notes_for_symbol("Csus4").is_empty());
        assert!(notes_for_symbol("Xm7").is_empty());
    }

    #[test]
    fn test_f_major_scale_spells_b_flat() {
        let root = Root::from(PitchClass::F);
        let spelling = display_spelling(root, Template::MajorScale);
        let notes = resolve_template(PitchClass::F, Template::MajorScale);
        assert_eq!(
            spell(&notes, spelling),
            vec!["F4", "G4", "A4", "Bb4", "C5", "D5", "E5"]
        );
    }

    #[test]
    fn test_flat_preferred_keys() {
        let flat = |s: &str| prefers_flats(Root::parse(s).unwrap());
        for key in ["F", "Bb", "Eb", "Ab", "Db", "Gb", "Cb"] {
            assert!(flat(key), "{} should prefer flats", key);
        }
        for key in ["C", "G", "D", "A", "E", "B", "F#"] {
            assert!(!flat(key), "{} should prefer sharps", key);
        }
        // Table roots are sharp-named but still conventional flat keys
        assert!(flat("A#"));
    }

    #[test]
    fn test_minor_scale_uses_relative_major_spelling() {
        let d = Root::from(PitchClass::D);
        assert_eq!(display_spelling(d, Template::MinorScale), Spelling::Flat);
        assert_eq!(display_spelling(d, Template::MajorScale), Spelling::Sharp);
        let e = Root::from(PitchClass::E);
        assert_eq!(display_spelling(e, Template::MinorScale), Spelling::Sharp);
    }

    #[test]
    fn test_spelling_does_not_change_pitches() {
        let root = Root::parse("Bb").unwrap();
        let notes = resolve_template(root.pitch, Template::Chord(ChordQuality::Minor7));
        let spelled = spell(&notes, display_spelling(root, Template::Chord(ChordQuality::Minor7)));
        assert_eq!(spelled, vec!["Bb4", "Db5", "F5", "Ab5"]);
        let reparsed: Vec<Note> = spelled.iter().filter_map(|s| Note::parse(s)).collect();
        assert_eq!(reparsed, notes);
    }
}
