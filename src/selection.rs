//! The current selection: a root plus the template applied to it.

use std::fmt;

use crate::pitch::{Note, PitchClass, Root, Spelling};
use crate::resolver::{display_spelling, resolve_template, spell};
use crate::templates::{ChordQuality, Template};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    pub root: Root,
    pub template: Template,
}

impl Default for Selection {
    fn default() -> Self {
        Self::chord(PitchClass::C, ChordQuality::Major)
    }
}

impl Selection {
    pub fn new(root: impl Into<Root>, template: Template) -> Self {
        Self {
            root: root.into(),
            template,
        }
    }

    pub fn chord(root: impl Into<Root>, quality: ChordQuality) -> Self {
        Self::new(root, Template::Chord(quality))
    }

    pub fn major_scale(root: impl Into<Root>) -> Self {
        Self::new(root, Template::MajorScale)
    }

    pub fn minor_scale(root: impl Into<Root>) -> Self {
        Self::new(root, Template::MinorScale)
    }

    pub fn is_scale(&self) -> bool {
        !matches!(self.template, Template::Chord(_))
    }

    /// Resolved notes, root first
    pub fn notes(&self) -> Vec<Note> {
        resolve_template(self.root.pitch, self.template)
    }

    /// The note the keyboard marks as root
    pub fn root_note(&self) -> Option<Note> {
        self.notes().first().copied()
    }

    pub fn spelling(&self) -> Spelling {
        display_spelling(self.root, self.template)
    }

    pub fn spelled_notes(&self) -> Vec<String> {
        spell(&self.notes(), self.spelling())
    }

    /// Display label: `Cmaj7`, `Bbm`, `F major scale`, `D minor scale`.
    ///
    /// The root is named in the same spelling as the notes.
    pub fn label(&self) -> String {
        self.label_with(self.spelling())
    }

    pub fn label_with(&self, spelling: Spelling) -> String {
        let root = if spelling == Spelling::Flat && self.root.spelling == Spelling::Flat {
            self.root.name()
        } else {
            self.root.pitch.name(spelling)
        };
        match self.template {
            Template::Chord(quality) => format!("{}{}", root, quality.symbol()),
            Template::MajorScale => format!("{} major scale", root),
            Template::MinorScale => format!("{} minor scale", root),
        }
    }

    /// Same selection with the root re-spelled for display
    pub fn with_spelling(self, spelling: Spelling) -> Self {
        Self {
            root: Root::new(self.root.pitch, spelling),
            ..self
        }
    }

    /// Same root and template ignoring how the root was spelled
    pub fn same_cell(&self, other: &Selection) -> bool {
        self.root.pitch == other.root.pitch && self.template == other.template
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
