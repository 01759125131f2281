use serde::Serialize;
use wasm_bindgen::prelude::*;

use chordview::render::keyboard_svg;
use chordview::{App, ChordViewError, Event, Position, ViewerConfig};

#[derive(Serialize)]
struct LookupError {
    message: String,
    kind: &'static str,
}

fn error_to_lookup_error(e: ChordViewError) -> LookupError {
    let kind = match e {
        ChordViewError::EmptySymbol => "empty",
        ChordViewError::UnknownRoot(_) => "root",
        ChordViewError::UnknownChordType { .. } => "chord-type",
        ChordViewError::ConfigError(_) => "config",
    };
    LookupError {
        message: e.to_string(),
        kind,
    }
}

fn to_js_error(e: ChordViewError) -> JsValue {
    let error = error_to_lookup_error(e);
    JsValue::from_str(&serde_json::to_string(&error).unwrap_or_else(|_| error.message.clone()))
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by a previous start()
        return;
    }
    log::info!("chord viewer module initialized");
}

/// Resolve a chord or scale symbol to spelled note names as a JSON array
#[wasm_bindgen]
pub fn notes_for(symbol: &str) -> Result<String, JsValue> {
    let notes = chordview::lookup(symbol).map_err(to_js_error)?;
    serde_json::to_string(&notes).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Viewer state held on the JS side between events
#[wasm_bindgen]
pub struct ChordViewer {
    app: App,
}

#[wasm_bindgen]
impl ChordViewer {
    /// Create a viewer, optionally from YAML settings
    #[wasm_bindgen(constructor)]
    pub fn new(config_yaml: Option<String>) -> Result<ChordViewer, JsValue> {
        let config = match config_yaml {
            Some(yaml) => ViewerConfig::from_yaml(&yaml).map_err(to_js_error)?,
            None => ViewerConfig::default(),
        };
        Ok(ChordViewer {
            app: App::new(config),
        })
    }

    /// Table cell clicked. Returns true when the keyboard needs redrawing.
    pub fn click(&mut self, row: usize, column: usize) -> bool {
        self.app.update(Event::Click(Position::new(row, column)))
    }

    /// `KeyboardEvent.key` from the table's keydown handler
    pub fn key(&mut self, key: &str) -> bool {
        self.app.handle_key(key)
    }

    /// Select by symbol, e.g. from a search box
    pub fn select(&mut self, symbol: &str) -> Result<bool, JsValue> {
        let selection = chordview::parse_symbol(symbol).map_err(to_js_error)?;
        Ok(self.app.update(Event::Select(selection)))
    }

    pub fn toggle_minor_alignment(&mut self) {
        self.app.update(Event::ToggleMinorAlignment);
    }

    /// Current view model as JSON
    pub fn view_json(&self) -> String {
        serde_json::to_string(&self.app.view()).unwrap_or_else(|e| {
            log::error!("failed to serialize view: {}", e);
            "{}".to_string()
        })
    }

    pub fn keyboard_svg(&self) -> String {
        let notes = self.app.highlighted_notes();
        keyboard_svg(
            &self.app.keyboard(),
            &notes,
            self.app.selection().root_note(),
            self.app.spelling(),
        )
    }

    pub fn label(&self) -> String {
        self.app.label()
    }
}
