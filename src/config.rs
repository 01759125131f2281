//! # Viewer Configuration
//!
//! Optional YAML settings for the viewer. Every key may be omitted.
//!
//! ```yaml
//! keyboard-octaves: 2    # 1-4
//! start-octave: 4        # the keyboard must span octaves 4 and 5
//! align-minor: false     # line minor scales up under their relative major
//! initial: C             # selection shown on start
//! flat-spelling: true    # spell flat keys (F, Bb, ...) with flats
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ChordViewError;
use crate::keyboard::Keyboard;
use crate::pitch::{Note, PitchClass};
use crate::resolver::BASE_OCTAVE;
use crate::selection::Selection;
use crate::symbol::parse_symbol;

/// Raw config for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    keyboard_octaves: Option<u8>,
    start_octave: Option<i8>,
    align_minor: Option<bool>,
    initial: Option<String>,
    flat_spelling: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub keyboard: Keyboard,
    pub align_minor: bool,
    pub initial: Selection,
    pub flat_spelling: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            keyboard: Keyboard::default(),
            align_minor: false,
            initial: Selection::default(),
            flat_spelling: true,
        }
    }
}

impl ViewerConfig {
    /// Parse YAML settings, filling in defaults for missing keys.
    ///
    /// ```
    /// use chordview::ViewerConfig;
    ///
    /// let config = ViewerConfig::from_yaml("align-minor: true\ninitial: Am7")?;
    /// assert!(config.align_minor);
    /// assert_eq!(config.initial.label(), "Am7");
    /// assert_eq!(config.keyboard.octaves, 2);
    /// # Ok::<(), chordview::ChordViewError>(())
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self, ChordViewError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| ChordViewError::ConfigError(e.to_string()))?;
        let defaults = Self::default();

        let octaves = raw.keyboard_octaves.unwrap_or(defaults.keyboard.octaves);
        if !(1..=4).contains(&octaves) {
            return Err(ChordViewError::ConfigError(format!(
                "keyboard-octaves must be between 1 and 4, got {}",
                octaves
            )));
        }
        let start_octave = raw.start_octave.unwrap_or(defaults.keyboard.start_octave);
        if !(0..=8).contains(&start_octave) {
            return Err(ChordViewError::ConfigError(format!(
                "start-octave must be between 0 and 8, got {}",
                start_octave
            )));
        }

        // Resolved notes always fall in the base octave and the one above it
        let keyboard = Keyboard::new(start_octave, octaves);
        let lowest = Note::new(PitchClass::C, BASE_OCTAVE);
        let highest = Note::new(PitchClass::B, BASE_OCTAVE + 1);
        if !keyboard.contains(lowest) || !keyboard.contains(highest) {
            return Err(ChordViewError::ConfigError(format!(
                "keyboard (start-octave {}, keyboard-octaves {}) must cover octaves {} and {}",
                start_octave,
                octaves,
                BASE_OCTAVE,
                BASE_OCTAVE + 1
            )));
        }

        let initial = match &raw.initial {
            Some(symbol) => parse_symbol(symbol).map_err(|e| {
                ChordViewError::ConfigError(format!("initial selection '{}': {}", symbol, e))
            })?,
            None => defaults.initial,
        };

        Ok(Self {
            keyboard,
            align_minor: raw.align_minor.unwrap_or(defaults.align_minor),
            initial,
            flat_spelling: raw.flat_spelling.unwrap_or(defaults.flat_spelling),
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChordViewError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ChordViewError::ConfigError(format!("cannot read '{}': {}", path.display(), e))
        })?;
        log::debug!("loaded viewer config from {}", path.display());
        Self::from_yaml(&content)
    }
}
