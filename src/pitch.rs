//! # Pitch Types
//!
//! The twelve chromatic pitch classes, their sharp and flat spellings, and
//! notes pinned to an octave.
//!
//! ## Indexing
//! Pitch classes are indexed 0-11 starting at C:
//! `0=C, 1=C#/Db, 2=D, 3=D#/Eb, 4=E, 5=F, 6=F#/Gb, 7=G, 8=G#/Ab, 9=A, 10=A#/Bb, 11=B`.
//! All arithmetic is modular, so `B + 1 = C`.
//!
//! ## Spelling
//! The canonical spelling is sharp (`C#`), matching the chord table. A flat
//! spelling only changes how black keys are named; the pitch class is the same.

use std::fmt;

/// Natural letter names, used when parsing spelled roots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    /// Semitone offset from C
    pub fn semitone(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }
}

/// Which name to use for a black key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Spelling {
    #[default]
    Sharp,
    Flat,
}

/// One of the twelve chromatic steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    /// All pitch classes in ascending order from C
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Pitch class for any semitone count; wraps in both directions.
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(12) as usize]
    }

    /// Move up (or down, for negative values) by a number of semitones
    pub fn transpose(self, semitones: i32) -> Self {
        Self::from_index(self.index() as i32 + semitones)
    }

    pub fn is_black(self) -> bool {
        matches!(
            self,
            PitchClass::CSharp
                | PitchClass::DSharp
                | PitchClass::FSharp
                | PitchClass::GSharp
                | PitchClass::ASharp
        )
    }

    pub fn sharp_name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }

    /// Flat spelling. Only the five black keys change; this is the
    /// sharp-to-flat table used for enharmonic display.
    pub fn flat_name(self) -> &'static str {
        match self {
            PitchClass::CSharp => "Db",
            PitchClass::DSharp => "Eb",
            PitchClass::FSharp => "Gb",
            PitchClass::GSharp => "Ab",
            PitchClass::ASharp => "Bb",
            other => other.sharp_name(),
        }
    }

    pub fn name(self, spelling: Spelling) -> &'static str {
        match spelling {
            Spelling::Sharp => self.sharp_name(),
            Spelling::Flat => self.flat_name(),
        }
    }

    /// Parse a spelled pitch such as `C`, `F#`, `Bb`, `Cb` or `E#`.
    ///
    /// Returns the pitch class and the spelling it was written with. Natural
    /// names report [`Spelling::Sharp`].
    ///
    /// ```
    /// use chordview::{PitchClass, Spelling};
    ///
    /// assert_eq!(PitchClass::parse("Bb"), Some((PitchClass::ASharp, Spelling::Flat)));
    /// assert_eq!(PitchClass::parse("Cb"), Some((PitchClass::B, Spelling::Flat)));
    /// assert_eq!(PitchClass::parse("H"), None);
    /// ```
    pub fn parse(s: &str) -> Option<(Self, Spelling)> {
        let mut chars = s.chars();
        let letter = Letter::from_char(chars.next()?)?;
        let (offset, spelling) = match chars.next() {
            None => (0, Spelling::Sharp),
            Some('#') => (1, Spelling::Sharp),
            Some('b') => (-1, Spelling::Flat),
            Some(_) => return None,
        };
        if chars.next().is_some() {
            return None;
        }
        Some((Self::from_index(letter.semitone() + offset), spelling))
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sharp_name())
    }
}

/// The root of a chord or scale, remembering how it was spelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Root {
    pub pitch: PitchClass,
    pub spelling: Spelling,
}

impl Root {
    pub fn new(pitch: PitchClass, spelling: Spelling) -> Self {
        Self { pitch, spelling }
    }

    /// Name as written. Flat-spelled B and E are `Cb` and `Fb`.
    pub fn name(self) -> &'static str {
        match (self.pitch, self.spelling) {
            (PitchClass::B, Spelling::Flat) => "Cb",
            (PitchClass::E, Spelling::Flat) => "Fb",
            (pitch, spelling) => pitch.name(spelling),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        PitchClass::parse(s).map(|(pitch, spelling)| Self { pitch, spelling })
    }
}

impl From<PitchClass> for Root {
    fn from(pitch: PitchClass) -> Self {
        Self {
            pitch,
            spelling: Spelling::Sharp,
        }
    }
}

/// A pitch class pinned to an octave (scientific pitch notation, C4 = middle C)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Note {
    pub octave: i8,
    pub pitch: PitchClass,
}

impl Note {
    pub fn new(pitch: PitchClass, octave: i8) -> Self {
        Self { octave, pitch }
    }

    /// MIDI note number (C4 = 60)
    pub fn midi(self) -> i32 {
        (self.octave as i32 + 1) * 12 + self.pitch.index() as i32
    }

    /// Note name using the given spelling, e.g. `Bb4`
    pub fn spelled(self, spelling: Spelling) -> String {
        format!("{}{}", self.pitch.name(spelling), self.octave)
    }

    /// Parse `C4`, `F#5`, `Bb3`. The octave is read as written, so `Cb4` is B4.
    pub fn parse(s: &str) -> Option<Self> {
        let split = s.find(|c: char| c.is_ascii_digit() || c == '-')?;
        let (name, octave) = s.split_at(split);
        let (pitch, _) = PitchClass::parse(name)?;
        let octave = octave.parse().ok()?;
        Some(Self { octave, pitch })
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch.sharp_name(), self.octave)
    }
}
