//! Plain-text rendering for the terminal.

use crate::keyboard::{KeyState, Keyboard};
use crate::pitch::{Note, Spelling};
use crate::table::{ChordTable, Position, COLUMNS, ROWS};

const LABEL_WIDTH: usize = 12;
const CELL_WIDTH: usize = 11;
const KEY_WIDTH: usize = 4;

/// Render the chord table. The active cell is shown as `[Cm7]`, the focused
/// cell as `<Cm7>`, and a cell that is both as `[<Cm7>]`.
pub fn table_text(table: &ChordTable, active: Position, focus: Option<Position>) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:<width$}", "", width = LABEL_WIDTH));
    for label in table.column_labels() {
        out.push_str(&format!("{:<width$}", label, width = CELL_WIDTH));
    }
    push_line(&mut out);

    for (row_index, row) in ROWS.iter().enumerate() {
        if !row.is_selectable() {
            out.push_str(&"-".repeat(LABEL_WIDTH + CELL_WIDTH * COLUMNS));
            push_line(&mut out);
            continue;
        }
        out.push_str(&format!("{:<width$}", row.label(), width = LABEL_WIDTH));
        for column in 0..COLUMNS {
            let position = Position::new(row_index, column);
            let mut cell = table.cell_label(position);
            if focus == Some(position) {
                cell = format!("<{}>", cell);
            }
            if position == active {
                cell = format!("[{}]", cell);
            }
            out.push_str(&format!("{:<width$}", cell, width = CELL_WIDTH));
        }
        push_line(&mut out);
    }

    out
}

/// Render the keyboard as a row of key names above a row of marks:
/// `R` for the root, `*` for other highlighted keys, `.` otherwise.
pub fn keyboard_text(
    keyboard: &Keyboard,
    notes: &[Note],
    root: Option<Note>,
    spelling: Spelling,
) -> String {
    let states = keyboard.key_states(notes, root);
    let mut names = String::new();
    let mut marks = String::new();

    for (key, state) in &states {
        names.push_str(&format!("{:<width$}", key.note.pitch.name(spelling), width = KEY_WIDTH));
        let mark = match state {
            KeyState::Root => "R",
            KeyState::Highlighted => "*",
            KeyState::Idle => ".",
        };
        marks.push_str(&format!("{:<width$}", mark, width = KEY_WIDTH));
    }

    let mut out = String::new();
    out.push_str(names.trim_end());
    out.push('\n');
    out.push_str(marks.trim_end());
    out.push('\n');
    out
}

fn push_line(out: &mut String) {
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
    out.push('\n');
}
