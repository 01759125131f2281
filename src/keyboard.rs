//! Piano keyboard model.
//!
//! The keyboard starts on C of `start_octave` and spans whole octaves. Each
//! octave has seven white keys and a black key after C, D, F, G and A.
//! Highlighting is computed from resolved notes; a note outside the keyboard
//! range is simply not shown.

use serde::Serialize;

use crate::pitch::{Note, PitchClass};

/// Key state used for coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyState {
    Idle,
    Highlighted,
    Root,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub note: Note,
    /// Index of this white key, or of the white key a black key sits on
    pub white_index: usize,
}

impl Key {
    pub fn is_black(&self) -> bool {
        self.note.pitch.is_black()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyboard {
    pub start_octave: i8,
    pub octaves: u8,
}

impl Default for Keyboard {
    fn default() -> Self {
        Self {
            start_octave: 4,
            octaves: 2,
        }
    }
}

impl Keyboard {
    pub fn new(start_octave: i8, octaves: u8) -> Self {
        Self {
            start_octave,
            octaves,
        }
    }

    pub fn white_key_count(&self) -> usize {
        self.octaves as usize * 7
    }

    /// All keys, lowest first
    pub fn keys(&self) -> Vec<Key> {
        let mut keys = Vec::with_capacity(self.octaves as usize * 12);
        let mut white_index = 0;
        for octave in 0..self.octaves {
            let octave = self.start_octave + octave as i8;
            for pitch in PitchClass::ALL {
                if !pitch.is_black() && !keys.is_empty() {
                    white_index += 1;
                }
                keys.push(Key {
                    note: Note::new(pitch, octave),
                    white_index,
                });
            }
        }
        keys
    }

    pub fn contains(&self, note: Note) -> bool {
        let lowest = self.start_octave as i32;
        let highest = lowest + self.octaves as i32;
        (lowest..highest).contains(&(note.octave as i32))
    }

    /// State of every key for a highlight set
    pub fn key_states(&self, highlighted: &[Note], root: Option<Note>) -> Vec<(Key, KeyState)> {
        self.keys()
            .into_iter()
            .map(|key| {
                let state = if root == Some(key.note) {
                    KeyState::Root
                } else if highlighted.contains(&key.note) {
                    KeyState::Highlighted
                } else {
                    KeyState::Idle
                };
                (key, state)
            })
            .collect()
    }
}
