//! WASM frontend for the calculator
//!
//! Key mapping is plain Rust and always compiled; the `wasm-bindgen`
//! surface needs the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod keymap;

#[cfg(feature = "wasm")]
pub use browser::WebCalculator;
pub use keymap::{element_id, key_from_element_id, key_from_keyboard};
