pub mod app;
pub mod config;
pub mod error;
pub mod keyboard;
pub mod pitch;
pub mod render;
pub mod resolver;
pub mod selection;
pub mod symbol;
pub mod table;
pub mod templates;

pub use app::{App, Event, ViewModel};
pub use config::ViewerConfig;
pub use error::*;
pub use keyboard::{Key, KeyState, Keyboard};
pub use pitch::{Note, PitchClass, Root, Spelling};
pub use resolver::{notes_for_symbol, resolve, resolve_named, resolve_symbol, resolve_template};
pub use selection::Selection;
pub use symbol::parse_symbol;
pub use table::{ChordTable, Direction, Position, Row};
pub use templates::{ChordQuality, Template, CHORD_QUALITIES};

/// Resolve a symbol and return its note names in display spelling.
/// This is the main entry point for the library.
///
/// ```
/// assert_eq!(
///     chordview::lookup("F major")?,
///     vec!["F4", "G4", "A4", "Bb4", "C5", "D5", "E5"]
/// );
/// # Ok::<(), chordview::ChordViewError>(())
/// ```
pub fn lookup(symbol: &str) -> Result<Vec<String>, ChordViewError> {
    let selection = parse_symbol(symbol)?;
    Ok(selection.spelled_notes())
}
