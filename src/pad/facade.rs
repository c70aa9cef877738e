use wasm_bindgen::prelude::*;

use crate::core::CellCoord;

use super::commands::PressOutcome;
use super::confirm::FixedAnswer;
use super::dispatch::PointerButton;
use super::PadCore;

/// JS-facing drawing pad
#[wasm_bindgen]
pub struct DrawingPad {
    core: PadCore,
}

#[wasm_bindgen]
impl DrawingPad {
    /// Pad with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: PadCore::with_defaults(),
        }
    }

    /// Pad from a JSON config; missing fields take defaults
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<DrawingPad, JsValue> {
        let core = PadCore::from_config_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.surface_width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.surface_height() }

    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> u32 { self.core.dimensions().columns }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.dimensions().rows }

    #[wasm_bindgen(getter)]
    pub fn cell_width(&self) -> f64 { self.core.cell_size().width }

    #[wasm_bindgen(getter)]
    pub fn cell_height(&self) -> f64 { self.core.cell_size().height }

    /// Current paint color as `#rrggbb`
    #[wasm_bindgen(getter)]
    pub fn active_color(&self) -> String {
        self.core.active_color().to_hex()
    }

    pub fn set_active_color(&mut self, hex: &str) -> bool {
        self.core.set_active_color(hex)
    }

    /// Handle a mousedown at a canvas-local position.
    /// Returns true when the surface changed or the active color was picked.
    pub fn press(&mut self, x: f64, y: f64, button: i16, modifier: bool) -> bool {
        !matches!(
            self.core.press(x, y, PointerButton::from_dom(button), modifier),
            PressOutcome::Ignored | PressOutcome::NothingToPick(_)
        )
    }

    /// Resize from the two grid inputs. Invalid input returns false and changes nothing.
    pub fn resize(&mut self, columns: &str, rows: &str) -> bool {
        self.core.resize_from_input(columns, rows)
    }

    /// Clear after the host has asked the user; `confirmed == false` is a no-op
    pub fn clear(&mut self, confirmed: bool) -> bool {
        self.core.clear(&mut FixedAnswer(confirmed))
    }

    pub fn set_guide_visible(&mut self, visible: bool) {
        self.core.set_guide_visible(visible);
    }

    #[wasm_bindgen(getter)]
    pub fn guide_visible(&self) -> bool {
        self.core.guide_visible()
    }

    /// Bumps each time the guide must be rebuilt
    #[wasm_bindgen(getter)]
    pub fn guide_revision(&self) -> u32 {
        self.core.guide().revision()
    }

    pub fn guide_vertical_lines(&self) -> Vec<f64> {
        self.core.guide().vertical_lines(self.core.surface_width())
    }

    pub fn guide_horizontal_lines(&self) -> Vec<f64> {
        self.core.guide().horizontal_lines(self.core.surface_height())
    }

    /// Recorded color for a cell, or undefined
    pub fn history_color(&self, x: u32, y: u32) -> Option<String> {
        self.core
            .history()
            .lookup(CellCoord::new(x, y))
            .map(|c| c.to_hex())
    }

    pub fn history_json(&self) -> String {
        self.core.history().to_json()
    }

    /// Encoded image bytes for download
    pub fn export_image(&self) -> Result<Vec<u8>, JsValue> {
        self.core
            .export()
            .map(|image| image.bytes)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn export_filename(&self) -> String {
        self.core.config().export_filename()
    }

    #[wasm_bindgen(getter)]
    pub fn export_mime_type(&self) -> String {
        self.core.config().export_format.mime_type().to_string()
    }

    // === RENDER API ===

    /// Pointer to the full ABGR pixel buffer
    pub fn pixels_ptr(&self) -> *const u32 {
        self.core.pixels_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.core.pixels_len()
    }

    pub fn pixels_len_bytes(&self) -> usize {
        self.core.pixels_len_bytes()
    }

    /// Grab the region painted since the last call; false when nothing changed
    pub fn collect_dirty_rect(&mut self) -> bool {
        self.core.collect_dirty_rect()
    }

    pub fn dirty_x(&self) -> u32 {
        self.core.pending_rect().map(|r| r.x).unwrap_or(0)
    }

    pub fn dirty_y(&self) -> u32 {
        self.core.pending_rect().map(|r| r.y).unwrap_or(0)
    }

    pub fn dirty_w(&self) -> u32 {
        self.core.pending_rect().map(|r| r.w).unwrap_or(0)
    }

    pub fn dirty_h(&self) -> u32 {
        self.core.pending_rect().map(|r| r.h).unwrap_or(0)
    }

    /// Copy the dirty region into the transfer buffer (row-major, w * h pixels)
    /// and return a pointer to it
    pub fn extract_dirty_pixels(&mut self) -> *const u32 {
        self.core.extract_pending_pixels();
        self.core.rect_transfer_ptr()
    }
}

impl Default for DrawingPad {
    fn default() -> Self {
        Self::new()
    }
}
