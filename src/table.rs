//! # Chord Table
//!
//! The selection grid: one column per root and one row per template.
//!
//! ## Layout
//! ```text
//!              C    C#   D   ...  B
//! Major scale  C    C#   D        B
//! Minor scale  C    C#   D        B      (A  A#  B ... G# when aligned)
//! ------------------------------------   divider, never selectable
//! Major        C    C#   D        B
//! Minor        Cm   C#m  Dm       Bm
//! ...          (one row per chord quality, in table order)
//! ```
//!
//! ## Minor Alignment
//! With alignment on, the minor-scale row is shifted by three semitones so
//! each minor scale sits under its relative major (A minor under C). Only the
//! layout changes; turning it off restores the chromatic order.
//!
//! ## Focus Navigation
//! Arrow keys move a focus cell. Moves wrap at every edge and skip the divider
//! row.

use serde::Serialize;

use crate::pitch::PitchClass;
use crate::selection::Selection;
use crate::templates::{ChordQuality, Template, CHORD_QUALITIES};

pub const COLUMNS: usize = 12;

/// Semitones between a minor root and its relative major
const RELATIVE_MAJOR_OFFSET: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    MajorScale,
    MinorScale,
    Divider,
    Chord(ChordQuality),
}

/// Rows top to bottom
pub const ROWS: [Row; 10] = [
    Row::MajorScale,
    Row::MinorScale,
    Row::Divider,
    Row::Chord(CHORD_QUALITIES[0]),
    Row::Chord(CHORD_QUALITIES[1]),
    Row::Chord(CHORD_QUALITIES[2]),
    Row::Chord(CHORD_QUALITIES[3]),
    Row::Chord(CHORD_QUALITIES[4]),
    Row::Chord(CHORD_QUALITIES[5]),
    Row::Chord(CHORD_QUALITIES[6]),
];

impl Row {
    pub fn is_selectable(self) -> bool {
        self != Row::Divider
    }

    pub fn label(self) -> &'static str {
        match self {
            Row::MajorScale => "Major scale",
            Row::MinorScale => "Minor scale",
            Row::Divider => "",
            Row::Chord(quality) => quality.name(),
        }
    }

    fn template(self) -> Option<Template> {
        match self {
            Row::MajorScale => Some(Template::MajorScale),
            Row::MinorScale => Some(Template::MinorScale),
            Row::Divider => None,
            Row::Chord(quality) => Some(Template::Chord(quality)),
        }
    }

    fn index_of(template: Template) -> usize {
        match template {
            Template::MajorScale => 0,
            Template::MinorScale => 1,
            Template::Chord(quality) => 3 + quality.table_index(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Table layout; the only layout option is minor alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChordTable {
    pub align_minor: bool,
}

impl ChordTable {
    pub fn new(align_minor: bool) -> Self {
        Self { align_minor }
    }

    pub fn toggled(self) -> Self {
        Self {
            align_minor: !self.align_minor,
        }
    }

    pub fn row(&self, index: usize) -> Option<Row> {
        ROWS.get(index).copied()
    }

    /// Column headers: the chromatic roots
    pub fn column_labels(&self) -> Vec<&'static str> {
        PitchClass::ALL.iter().map(|pc| pc.sharp_name()).collect()
    }

    /// Root shown in a cell, or `None` for the divider and out-of-range cells
    pub fn root_at(&self, position: Position) -> Option<PitchClass> {
        if position.column >= COLUMNS {
            return None;
        }
        match self.row(position.row)? {
            Row::Divider => None,
            Row::MinorScale if self.align_minor => Some(PitchClass::from_index(
                position.column as i32 - RELATIVE_MAJOR_OFFSET as i32,
            )),
            _ => Some(PitchClass::ALL[position.column]),
        }
    }

    /// Roots along one row, left to right
    pub fn row_roots(&self, row: usize) -> Vec<PitchClass> {
        (0..COLUMNS)
            .filter_map(|column| self.root_at(Position::new(row, column)))
            .collect()
    }

    /// What clicking a cell selects
    pub fn cell(&self, position: Position) -> Option<Selection> {
        let root = self.root_at(position)?;
        let template = self.row(position.row)?.template()?;
        Some(Selection::new(root, template))
    }

    /// Text shown in a cell, in the table's sharp spelling
    pub fn cell_label(&self, position: Position) -> String {
        let (Some(root), Some(row)) = (self.root_at(position), self.row(position.row)) else {
            return String::new();
        };
        match row {
            Row::Chord(quality) => format!("{}{}", root.sharp_name(), quality.symbol()),
            Row::MinorScale => format!("{}m", root.sharp_name()),
            _ => root.sharp_name().to_string(),
        }
    }

    /// Cell that shows `selection` as active
    pub fn position_of(&self, selection: &Selection) -> Position {
        let root = selection.root.pitch.index();
        let column = match selection.template {
            Template::MinorScale if self.align_minor => (root + RELATIVE_MAJOR_OFFSET) % COLUMNS,
            _ => root,
        };
        Position::new(Row::index_of(selection.template), column)
    }

    /// Move focus one cell, wrapping at the edges and skipping the divider
    pub fn step(&self, from: Position, direction: Direction) -> Position {
        let rows = ROWS.len();
        let mut row = from.row % rows;
        let mut column = from.column % COLUMNS;
        loop {
            match direction {
                Direction::Up => row = (row + rows - 1) % rows,
                Direction::Down => row = (row + 1) % rows,
                Direction::Left => column = (column + COLUMNS - 1) % COLUMNS,
                Direction::Right => column = (column + 1) % COLUMNS,
            }
            if ROWS[row].is_selectable() {
                return Position::new(row, column);
            }
            // A horizontal move cannot leave the divider row
            if matches!(direction, Direction::Left | Direction::Right) {
                row = (row + 1) % rows;
                return Position::new(row, column);
            }
        }
    }
}
