//! Pixel Pad - grid-based pixel-art drawing pad in WASM
//!
//! Architecture:
//! - core/     - Value types (colors, cells), errors, console logging
//! - spatial/  - Grid model and raster surface
//! - domain/   - Color history, guide overlay, configuration
//! - pad/      - Controller orchestration + JS facade
//! - web/      - DOM wiring for the standalone page (wasm32 only)

pub mod core;
pub mod spatial;
pub mod domain;
pub mod pad;
#[cfg(target_arch = "wasm32")]
pub mod web;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize panic reporting and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    crate::core::logging::install();

    log::info!("pixel pad v{} initialized", version());
}

/// Get crate version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{CellCoord, Color, PadError};
pub use domain::PadConfig;
pub use pad::{DrawingPad, InputEvent, PadCore};
