//! # Error Types
//!
//! Errors raised while looking up chords and scales or loading viewer
//! configuration.
//!
//! The view layer never surfaces these to the user: a failed lookup simply
//! highlights nothing. The strict entry points ([`crate::resolve_symbol`],
//! [`crate::parse_symbol`]) return them so callers can decide.
//!
//! ## Usage
//! ```rust
//! use chordview::{resolve_symbol, ChordViewError};
//!
//! match resolve_symbol("Csus4") {
//!     Ok(notes) => println!("{} notes", notes.len()),
//!     Err(ChordViewError::UnknownChordType { quality, .. }) => {
//!         eprintln!("no template for '{}'", quality);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChordViewError {
    /// The symbol was empty or only whitespace.
    ///
    /// # Example
    /// ```
    /// # use chordview::ChordViewError;
    /// assert_eq!(ChordViewError::EmptySymbol.to_string(), "Empty chord symbol");
    /// ```
    #[error("Empty chord symbol")]
    EmptySymbol,

    /// The root is not one of the note letters A-G (with optional # or b).
    ///
    /// # Example
    /// ```
    /// # use chordview::ChordViewError;
    /// let err = ChordViewError::UnknownRoot("H".to_string());
    /// assert_eq!(err.to_string(), "Unknown root note: H");
    /// ```
    #[error("Unknown root note: {0}")]
    UnknownRoot(String),

    /// The root parsed but the remainder names no chord template.
    ///
    /// # Example
    /// ```
    /// # use chordview::ChordViewError;
    /// let err = ChordViewError::UnknownChordType {
    ///     symbol: "Csus4".to_string(),
    ///     quality: "sus4".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Unknown chord type 'sus4' in symbol 'Csus4'");
    /// ```
    #[error("Unknown chord type '{quality}' in symbol '{symbol}'")]
    UnknownChordType { symbol: String, quality: String },

    /// Invalid viewer configuration (malformed YAML or out-of-range values).
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
