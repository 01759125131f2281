//! # Symbol Parsing
//!
//! Parses the text forms a user can type into a [`Selection`].
//!
//! ## Grammar
//! ```text
//! chord := root quality            e.g. C, Cm, F#7, Bbm7, Ebmaj7, Gdim, Caug
//! scale := root ws ("major" | "minor") [ws "scale"]
//! root  := letter [ "#" | "b" ]    letter in A-G
//! ```
//!
//! Qualities are the chord table symbols: `""`, `m`, `7`, `m7`, `maj7`, `dim`,
//! `aug`. Anything else is reported as an unknown chord type rather than
//! guessed at.

use crate::error::ChordViewError;
use crate::pitch::Root;
use crate::selection::Selection;
use crate::templates::{ChordQuality, Template};

/// Parse a chord or scale symbol.
///
/// # Example
/// ```
/// use chordview::{parse_symbol, ChordQuality, PitchClass, Template};
///
/// let selection = parse_symbol("Ebmaj7")?;
/// assert_eq!(selection.root.pitch, PitchClass::DSharp);
/// assert_eq!(selection.template, Template::Chord(ChordQuality::Major7));
///
/// let scale = parse_symbol("A minor scale")?;
/// assert_eq!(scale.template, Template::MinorScale);
/// # Ok::<(), chordview::ChordViewError>(())
/// ```
pub fn parse_symbol(input: &str) -> Result<Selection, ChordViewError> {
    let symbol = input.trim();
    let mut chars = symbol.char_indices();
    let (_, letter) = chars.next().ok_or(ChordViewError::EmptySymbol)?;

    // Root is the letter plus an optional accidental
    let root_len = match chars.next() {
        Some((i, '#')) | Some((i, 'b')) => i + 1,
        Some((i, _)) => i,
        None => symbol.len(),
    };
    let (root_text, rest) = symbol.split_at(root_len);
    let root = Root::parse(root_text)
        .ok_or_else(|| ChordViewError::UnknownRoot(letter.to_string()))?;

    if let Some(template) = parse_scale_words(rest) {
        return Ok(Selection::new(root, template));
    }

    let quality = ChordQuality::from_symbol(rest).ok_or_else(|| {
        ChordViewError::UnknownChordType {
            symbol: symbol.to_string(),
            quality: rest.to_string(),
        }
    })?;
    Ok(Selection::chord(root, quality))
}

/// `" major"`, `" minor scale"`, ... after the root
fn parse_scale_words(rest: &str) -> Option<Template> {
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let words: Vec<String> = rest.split_whitespace().map(|w| w.to_lowercase()).collect();
    let template = match words.first().map(String::as_str) {
        Some("major") => Template::MajorScale,
        Some("minor") => Template::MinorScale,
        _ => return None,
    };
    match words.len() {
        1 => Some(template),
        2 if words[1] == "scale" => Some(template),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::{PitchClass, Spelling};

    #[test]
    fn test_parse_every_table_symbol() {
        let cases = [
            ("C", ChordQuality::Major),
            ("Cm", ChordQuality::Minor),
            ("C7", ChordQuality::Dominant7),
            ("Cm7", ChordQuality::Minor7),
            ("Cmaj7", ChordQuality::Major7),
            ("Cdim", ChordQuality::Diminished),
            ("Caug", ChordQuality::Augmented),
        ];
        for (text, quality) in cases {
            let selection = parse_symbol(text).unwrap();
            assert_eq!(selection.root.pitch, PitchClass::C);
            assert_eq!(selection.template, Template::Chord(quality), "{}", text);
        }
    }

    #[test]
    fn test_parse_accidentals() {
        let selection = parse_symbol("F#m7").unwrap();
        assert_eq!(selection.root.pitch, PitchClass::FSharp);
        assert_eq!(selection.root.spelling, Spelling::Sharp);

        let selection = parse_symbol("Bbdim").unwrap();
        assert_eq!(selection.root.pitch, PitchClass::ASharp);
        assert_eq!(selection.root.spelling, Spelling::Flat);
        assert_eq!(selection.template, Template::Chord(ChordQuality::Diminished));

        // B followed by a quality is not read as a flat
        let selection = parse_symbol("Bm").unwrap();
        assert_eq!(selection.root.pitch, PitchClass::B);
    }

    #[test]
    fn test_parse_scales() {
        assert_eq!(parse_symbol("F major").unwrap().template, Template::MajorScale);
        assert_eq!(parse_symbol("  d MINOR Scale ").unwrap().template, Template::MinorScale);
        assert_eq!(parse_symbol("Gb major").unwrap().root.spelling, Spelling::Flat);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_symbol(""), Err(ChordViewError::EmptySymbol));
        assert_eq!(parse_symbol("   "), Err(ChordViewError::EmptySymbol));
        assert_eq!(parse_symbol("H7"), Err(ChordViewError::UnknownRoot("H".to_string())));
        assert!(matches!(
            parse_symbol("Csus4"),
            Err(ChordViewError::UnknownChordType { .. })
        ));
        assert!(matches!(
            parse_symbol("C major key"),
            Err(ChordViewError::UnknownChordType { .. })
        ));
        assert!(matches!(
            parse_symbol("C dorian"),
            Err(ChordViewError::UnknownChordType { .. })
        ));
    }
}
