//! SVG keyboard rendering.
//!
//! White keys are drawn first so black keys overlap them. Geometry follows
//! the browser keyboard: white keys 40x150, black keys 24x90 offset 28 from
//! the left edge of the white key they sit on.

use crate::keyboard::{Key, KeyState, Keyboard};
use crate::pitch::{Note, Spelling};

const WHITE_WIDTH: u32 = 40;
const WHITE_HEIGHT: u32 = 150;
const BLACK_WIDTH: u32 = 24;
const BLACK_HEIGHT: u32 = 90;
const BLACK_OFFSET: u32 = 28;
const LABEL_BASELINE: u32 = 140;

/// Theme colors (dark theme: primary #90caf9, secondary #f48fb1)
fn fill(key: &Key, state: KeyState) -> &'static str {
    match (key.is_black(), state) {
        (false, KeyState::Idle) => "#ffffff",
        (false, KeyState::Highlighted) => "#e3f2fd",
        (false, KeyState::Root) => "#f48fb1",
        (true, KeyState::Idle) => "#000000",
        (true, KeyState::Highlighted) => "#42a5f5",
        (true, KeyState::Root) => "#bf5f82",
    }
}

/// Render the keyboard with the given notes highlighted
pub fn keyboard_svg(
    keyboard: &Keyboard,
    notes: &[Note],
    root: Option<Note>,
    spelling: Spelling,
) -> String {
    let states = keyboard.key_states(notes, root);
    let width = keyboard.white_key_count() as u32 * WHITE_WIDTH;
    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = WHITE_HEIGHT
    ));
    svg.push('\n');

    for (key, state) in states.iter().filter(|(k, _)| !k.is_black()) {
        let x = key.white_index as u32 * WHITE_WIDTH;
        svg.push_str(&format!(
            "  <rect class=\"key white {}\" data-note=\"{}\" x=\"{}\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"#000000\"/>\n",
            state_class(*state),
            escape_xml(&key.note.to_string()),
            x,
            WHITE_WIDTH,
            WHITE_HEIGHT,
            fill(key, *state)
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"12\" font-weight=\"bold\">{}</text>\n",
            x + WHITE_WIDTH / 2,
            LABEL_BASELINE,
            escape_xml(key.note.pitch.name(spelling))
        ));
    }

    for (key, state) in states.iter().filter(|(k, _)| k.is_black()) {
        let x = key.white_index as u32 * WHITE_WIDTH + BLACK_OFFSET;
        svg.push_str(&format!(
            "  <rect class=\"key black {}\" data-note=\"{}\" x=\"{}\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
            state_class(*state),
            escape_xml(&key.note.to_string()),
            x,
            BLACK_WIDTH,
            BLACK_HEIGHT,
            fill(key, *state)
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

fn state_class(state: KeyState) -> &'static str {
    match state {
        KeyState::Idle => "idle",
        KeyState::Highlighted => "highlighted",
        KeyState::Root => "root",
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
