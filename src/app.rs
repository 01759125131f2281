//! # Viewer State Machine
//!
//! [`App`] owns the only mutable state of the viewer: the current selection,
//! the focused table cell and the minor-alignment flag. Front ends feed it
//! [`Event`]s and render the [`ViewModel`] it derives.
//!
//! ## Transitions
//! - `Click(pos)` selects the cell under `pos` and moves focus there.
//!   Clicks on the divider or outside the grid are ignored.
//! - `Move(dir)` moves focus only; the selection is unchanged.
//! - `Activate` selects the focused cell (Enter / Space).
//! - `ToggleMinorAlignment` relayouts the minor row. The selected scale stays
//!   selected and focus follows its root to the new column.
//! - `Select(sel)` selects directly, e.g. from a typed symbol.
//!
//! ## Example
//! ```rust
//! use chordview::{App, Event, Position, ViewerConfig};
//!
//! let mut app = App::new(ViewerConfig::default());
//! app.update(Event::Click(Position::new(7, 5)));
//! let view = app.view();
//! assert_eq!(view.label, "Fmaj7");
//! assert_eq!(view.notes, vec!["F4", "A4", "C5", "E5"]);
//! ```

use serde::Serialize;

use crate::config::ViewerConfig;
use crate::keyboard::{KeyState, Keyboard};
use crate::pitch::{Note, Spelling};
use crate::selection::Selection;
use crate::table::{ChordTable, Direction, Position, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Click(Position),
    Move(Direction),
    Activate,
    ToggleMinorAlignment,
    Select(Selection),
}

/// Everything a front end needs to draw one frame
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub label: String,
    pub notes: Vec<String>,
    pub keys: Vec<KeyView>,
    pub active: Position,
    pub focus: Position,
    pub align_minor: bool,
    pub table: TableView,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeyView {
    pub name: String,
    pub midi: i32,
    pub black: bool,
    pub white_index: usize,
    pub state: KeyState,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RowView {
    pub label: String,
    pub selectable: bool,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct App {
    config: ViewerConfig,
    table: ChordTable,
    selection: Selection,
    focus: Position,
}

impl App {
    pub fn new(config: ViewerConfig) -> Self {
        let table = ChordTable::new(config.align_minor);
        let selection = config.initial;
        let focus = table.position_of(&selection);
        Self {
            config,
            table,
            selection,
            focus,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn focus(&self) -> Position {
        self.focus
    }

    pub fn table(&self) -> ChordTable {
        self.table
    }

    pub fn keyboard(&self) -> Keyboard {
        self.config.keyboard
    }

    /// Apply an event. Returns true when the highlighted notes changed.
    pub fn update(&mut self, event: Event) -> bool {
        match event {
            Event::Click(position) => match self.table.cell(position) {
                Some(selection) => {
                    self.focus = position;
                    self.select(selection)
                }
                None => {
                    log::debug!("ignoring click outside selectable cells at {:?}", position);
                    false
                }
            },
            Event::Move(direction) => {
                self.focus = self.table.step(self.focus, direction);
                false
            }
            Event::Activate => match self.table.cell(self.focus) {
                Some(selection) => self.select(selection),
                None => false,
            },
            Event::ToggleMinorAlignment => {
                let focused = self.table.cell(self.focus);
                self.table = self.table.toggled();
                if let Some(selection) = focused {
                    self.focus = self.table.position_of(&selection);
                }
                let state = if self.table.align_minor { "on" } else { "off" };
                log::debug!("minor alignment {}", state);
                false
            }
            Event::Select(selection) => {
                self.focus = self.table.position_of(&selection);
                self.select(selection)
            }
        }
    }

    /// Map a DOM `KeyboardEvent.key`; unknown keys are ignored.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if let Some(direction) = Direction::from_key(key) {
            return self.update(Event::Move(direction));
        }
        match key {
            "Enter" | " " => self.update(Event::Activate),
            _ => false,
        }
    }

    fn select(&mut self, selection: Selection) -> bool {
        let changed = !self.selection.same_cell(&selection);
        log::debug!("selected {}", selection);
        self.selection = selection;
        changed
    }

    pub fn spelling(&self) -> Spelling {
        if self.config.flat_spelling {
            self.selection.spelling()
        } else {
            Spelling::Sharp
        }
    }

    pub fn highlighted_notes(&self) -> Vec<Note> {
        self.selection.notes()
    }

    pub fn label(&self) -> String {
        self.selection.label_with(self.spelling())
    }

    pub fn view(&self) -> ViewModel {
        let spelling = self.spelling();
        let notes = self.highlighted_notes();
        let keys = self
            .config
            .keyboard
            .key_states(&notes, self.selection.root_note())
            .into_iter()
            .map(|(key, state)| KeyView {
                name: key.note.spelled(spelling),
                midi: key.note.midi(),
                black: key.is_black(),
                white_index: key.white_index,
                state,
            })
            .collect();

        ViewModel {
            label: self.label(),
            notes: notes.iter().map(|n| n.spelled(spelling)).collect(),
            keys,
            active: self.table.position_of(&self.selection),
            focus: self.focus,
            align_minor: self.table.align_minor,
            table: self.table_view(),
        }
    }

    fn table_view(&self) -> TableView {
        let columns = self.table.column_labels().into_iter().map(String::from).collect();
        let rows = ROWS
            .iter()
            .enumerate()
            .map(|(index, row)| RowView {
                label: row.label().to_string(),
                selectable: row.is_selectable(),
                cells: (0..crate::table::COLUMNS)
                    .map(|column| self.table.cell_label(Position::new(index, column)))
                    .collect(),
            })
            .collect();
        TableView { columns, rows }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}
