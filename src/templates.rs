//! Static chord and scale templates.
//!
//! A template is an ordered list of semitone offsets from a root. The chord
//! qualities are listed in the order the chord table shows them.

/// Major scale intervals
pub const MAJOR_SCALE: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Natural minor scale intervals
pub const NATURAL_MINOR_SCALE: [u8; 7] = [0, 2, 3, 5, 7, 8, 10];

/// Chord qualities shown in the chord table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordQuality {
    Major,
    Minor,
    Dominant7,
    Minor7,
    Major7,
    Diminished,
    Augmented,
}

/// Table order
pub const CHORD_QUALITIES: [ChordQuality; 7] = [
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Dominant7,
    ChordQuality::Minor7,
    ChordQuality::Major7,
    ChordQuality::Diminished,
    ChordQuality::Augmented,
];

impl ChordQuality {
    /// Suffix appended to the root in a chord symbol (`""` for major)
    pub fn symbol(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Dominant7 => "7",
            ChordQuality::Minor7 => "m7",
            ChordQuality::Major7 => "maj7",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChordQuality::Major => "Major",
            ChordQuality::Minor => "Minor",
            ChordQuality::Dominant7 => "Dominant 7",
            ChordQuality::Minor7 => "Minor 7",
            ChordQuality::Major7 => "Major 7",
            ChordQuality::Diminished => "Diminished",
            ChordQuality::Augmented => "Augmented",
        }
    }

    pub fn intervals(self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Dominant7 => &[0, 4, 7, 10],
            ChordQuality::Minor7 => &[0, 3, 7, 10],
            ChordQuality::Major7 => &[0, 4, 7, 11],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Augmented => &[0, 4, 8],
        }
    }

    /// Look up a quality by its exact table symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        CHORD_QUALITIES.iter().copied().find(|q| q.symbol() == symbol)
    }

    /// Position in [`CHORD_QUALITIES`]
    pub fn table_index(self) -> usize {
        self as usize
    }
}

/// Anything the resolver can apply to a root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    Chord(ChordQuality),
    MajorScale,
    MinorScale,
}

impl Template {
    pub fn intervals(self) -> &'static [u8] {
        match self {
            Template::Chord(quality) => quality.intervals(),
            Template::MajorScale => &MAJOR_SCALE,
            Template::MinorScale => &NATURAL_MINOR_SCALE,
        }
    }
}
