//! Browser bindings
//!
//! `WebCalculator` wraps one [`Evaluator`] per page. Every entry point
//! returns the formatted display so the page only has to write text.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::config::DisplayConfig;
use crate::core::{Evaluator, Key, Readout};
use crate::wasm::keymap::{element_id, key_from_element_id, key_from_keyboard};

/// Browser calculator, the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct WebCalculator {
    evaluator: Evaluator,
    config: DisplayConfig,
    display: String,
    mount_id: Option<String>,
}

impl Default for WebCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WebCalculator {
    /// Creates a calculator showing `0`
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        let evaluator = Evaluator::new();
        let config = DisplayConfig::default();
        let display = Readout::Input(evaluator.input().to_string()).render(&config);
        Self {
            evaluator,
            config,
            display,
            mount_id: None,
        }
    }

    /// Current display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.display.clone()
    }

    /// Selected operator symbol, `=` after a total, empty otherwise
    #[wasm_bindgen(getter)]
    pub fn selection(&self) -> String {
        self.evaluator.selection().symbol()
    }

    /// Presses a keypad token (`0`-`9`, `.`, `sign`, `+ - * /`, `=`, `clear`)
    pub fn press(&mut self, token: &str) -> Result<String, JsValue> {
        let key = Key::parse(token).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.apply(key))
    }

    /// Handles a `KeyboardEvent.key`; unmapped keys return `None`
    pub fn key_down(&mut self, name: &str) -> Option<String> {
        key_from_keyboard(name).map(|key| self.apply(key))
    }

    /// Handles a click on a keypad element id
    pub fn click(&mut self, id: &str) -> Option<String> {
        key_from_element_id(id).map(|key| self.apply(key))
    }

    /// Element id of the button a token belongs to
    pub fn button_id(token: &str) -> Option<String> {
        Key::parse(token).ok().map(|key| element_id(key).to_string())
    }

    /// Binds the display to a DOM element and writes the current text
    pub fn mount(&mut self, element_id: &str) -> Result<(), JsValue> {
        self.mount_id = Some(element_id.to_string());
        self.write_display()
    }

    fn apply(&mut self, key: Key) -> String {
        self.display = self.evaluator.press(key).render(&self.config);
        if let Err(e) = self.write_display() {
            console::error_1(&e);
        }
        self.display.clone()
    }

    fn write_display(&self) -> Result<(), JsValue> {
        let Some(id) = &self.mount_id else {
            return Ok(());
        };
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{id}")))?;
        element.set_text_content(Some(&self.display));
        Ok(())
    }
}
