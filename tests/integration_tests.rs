//! Integration tests for the chord viewer
//!
//! Tests the path from a typed symbol or table click to highlighted keys.

use chordview::render::{keyboard_svg, table_text};
use chordview::{
    lookup, notes_for_symbol, resolve_symbol, App, ChordQuality, ChordViewError, Direction, Event,
    KeyState, PitchClass, Position, Selection, Template, ViewerConfig, CHORD_QUALITIES,
};

#[test]
fn test_every_table_chord_resolves() {
    for root in PitchClass::ALL {
        for quality in CHORD_QUALITIES {
            let symbol = format!("{}{}", root.sharp_name(), quality.symbol());
            let notes = resolve_symbol(&symbol).expect("table symbols always resolve");
            assert_eq!(notes.len(), quality.intervals().len(), "{}", symbol);
        }
    }
}

#[test]
fn test_lookup_c_major_scale() {
    let notes = lookup("C major").unwrap();
    assert_eq!(notes, vec!["C4", "D4", "E4", "F4", "G4", "A4", "B4"]);
}

#[test]
fn test_lookup_b_major_scale_wraps() {
    let notes = lookup("B major scale").unwrap();
    assert_eq!(notes, vec!["B4", "C#5", "D#5", "E5", "F#5", "G#5", "A#5"]);
}

#[test]
fn test_lookup_flat_keys() {
    assert_eq!(lookup("F major").unwrap()[3], "Bb4");
    assert_eq!(lookup("Eb").unwrap(), vec!["Eb4", "G4", "Bb4"]);
    assert_eq!(lookup("D minor").unwrap(), vec!["D4", "E4", "F4", "G4", "A4", "Bb4", "C5"]);
    assert_eq!(lookup("Gb major").unwrap(), vec!["Gb4", "Ab4", "Bb4", "B4", "Db5", "Eb5", "F5"]);
}

#[test]
fn test_lookup_sharp_keys_stay_sharp() {
    assert_eq!(lookup("E").unwrap(), vec!["E4", "G#4", "B4"]);
    assert_eq!(lookup("F# major").unwrap()[0], "F#4");
}

#[test]
fn test_malformed_symbols_fail_soft() {
    assert!(notes_for_symbol("Hmaj7").is_empty());
    assert!(notes_for_symbol("Cadd9").is_empty());
    assert!(notes_for_symbol("").is_empty());
    assert!(matches!(lookup("Cadd9"), Err(ChordViewError::UnknownChordType { .. })));
}

#[test]
fn test_click_every_cell_lights_template_notes() {
    let mut app = App::default();
    let table = app.table();
    for (row, _) in chordview::table::ROWS.iter().enumerate() {
        for column in 0..chordview::table::COLUMNS {
            let position = Position::new(row, column);
            let Some(expected) = table.cell(position) else {
                continue;
            };
            app.update(Event::Click(position));
            let view = app.view();
            let lit = view.keys.iter().filter(|k| k.state != KeyState::Idle).count();
            assert_eq!(lit, expected.template.intervals().len(), "{}", expected);
            assert_eq!(view.active, position);
        }
    }
}

#[test]
fn test_arrow_keys_skip_divider_and_wrap() {
    let mut app = App::default();
    app.update(Event::Select(Selection::major_scale(PitchClass::C)));
    assert_eq!(app.focus(), Position::new(0, 0));

    app.handle_key("ArrowDown");
    app.handle_key("ArrowDown");
    assert_eq!(app.focus(), Position::new(3, 0));

    app.handle_key("ArrowUp");
    assert_eq!(app.focus(), Position::new(1, 0));
    app.handle_key("ArrowUp");
    app.handle_key("ArrowUp");
    assert_eq!(app.focus(), Position::new(9, 0));

    app.handle_key("ArrowLeft");
    assert_eq!(app.focus(), Position::new(9, 11));
    app.handle_key("Enter");
    assert_eq!(app.selection(), Selection::chord(PitchClass::B, ChordQuality::Augmented));
}

#[test]
fn test_walk_full_cycle_returns_home() {
    let mut app = App::default();
    let start = app.focus();
    for _ in 0..9 {
        app.update(Event::Move(Direction::Down));
    }
    assert_eq!(app.focus(), start);
    for _ in 0..12 {
        app.update(Event::Move(Direction::Right));
    }
    assert_eq!(app.focus(), start);
}

#[test]
fn test_minor_alignment_round_trip() {
    let mut app = App::default();
    let before = table_text(&app.table(), app.view().active, None);
    app.update(Event::ToggleMinorAlignment);
    let aligned = table_text(&app.table(), app.view().active, None);
    assert_ne!(before, aligned);
    app.update(Event::ToggleMinorAlignment);
    let after = table_text(&app.table(), app.view().active, None);
    assert_eq!(before, after);
}

#[test]
fn test_config_drives_initial_view() {
    let yaml = "initial: A minor\nalign-minor: true\nkeyboard-octaves: 3";
    let config = ViewerConfig::from_yaml(yaml).unwrap();
    let app = App::new(config);
    let view = app.view();
    assert_eq!(view.label, "A minor scale");
    assert_eq!(view.active, Position::new(1, 0));
    assert_eq!(view.keys.len(), 36);
    assert_eq!(app.selection().template, Template::MinorScale);
}

#[test]
fn test_config_keyboard_always_shows_highlights() {
    assert!(ViewerConfig::from_yaml("start-octave: 6\ninitial: G7").is_err());

    let yaml = "start-octave: 4\nkeyboard-octaves: 3\ninitial: G7";
    let config = ViewerConfig::from_yaml(yaml).unwrap();
    let view = App::new(config).view();
    let lit: Vec<&str> = view
        .keys
        .iter()
        .filter(|k| k.state != KeyState::Idle)
        .map(|k| k.name.as_str())
        .collect();
    assert_eq!(lit, vec!["G4", "B4", "D5", "F5"]);
}

#[test]
fn test_typed_flat_root_label() {
    let mut app = App::default();
    app.update(Event::Select(chordview::parse_symbol("Cb major").unwrap()));
    let view = app.view();
    assert_eq!(view.label, "Cb major scale");
    assert_eq!(view.notes, vec!["B4", "Db5", "Eb5", "E5", "Gb5", "Ab5", "Bb5"]);
}

#[test]
fn test_svg_for_selection() {
    let mut app = App::default();
    app.update(Event::Select(Selection::chord(PitchClass::G, ChordQuality::Dominant7)));
    let notes = app.highlighted_notes();
    let svg = keyboard_svg(&app.keyboard(), &notes, app.selection().root_note(), app.spelling());
    assert!(svg.contains("class=\"key white root\" data-note=\"G4\""));
    assert!(svg.contains("class=\"key white highlighted\" data-note=\"F5\""));
}
