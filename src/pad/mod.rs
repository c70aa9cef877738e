//! Drawing pad controller
//!
//! `PadCore` owns every piece of session state: grid model, raster surface,
//! color history, guide overlay and the active color. There are no globals;
//! hosts construct one instance and route every input through it.
//!
//! Operations live in the files below and are attached to `PadCore` here:
//! - commands/  - paint, pick-back, resize, clear, save
//! - input/     - event -> handler mapping
//! - render/    - dirty-region extraction for the host blit
//! - init/      - construction and simple setters

use crate::core::{CellCoord, Color, PadError};
use crate::domain::{ColorHistory, GuideOverlay, PadConfig};
use crate::spatial::{CellSize, DirtyRect, GridDimensions, GridModel, RasterSurface};

#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "commands/confirm.rs"]
mod confirm;
#[path = "input/dispatch.rs"]
mod dispatch;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use commands::{ExportedImage, PressOutcome};
pub use confirm::{ConfirmGate, FixedAnswer, CLEAR_PROMPT};
pub use dispatch::{DispatchOutcome, InputEvent, PointerButton};
pub use facade::DrawingPad;

/// The drawing pad
pub struct PadCore {
    config: PadConfig,
    grid: GridModel,
    surface: RasterSurface,
    history: ColorHistory,
    guide: GuideOverlay,

    // State
    active_color: Color,

    // Host blit support
    pending_rect: Option<DirtyRect>,
    rect_transfer_buffer: Vec<u32>,
}

impl PadCore {
    pub fn new(config: PadConfig) -> Result<Self, PadError> {
        init::create_pad_core(config)
    }

    pub fn with_defaults() -> Self {
        init::create_default_pad_core()
    }

    pub fn from_config_json(json: &str) -> Result<Self, PadError> {
        Self::new(PadConfig::from_json(json)?)
    }

    pub fn config(&self) -> &PadConfig { &self.config }

    pub fn surface(&self) -> &RasterSurface { &self.surface }

    pub fn history(&self) -> &ColorHistory { &self.history }

    pub fn guide(&self) -> &GuideOverlay { &self.guide }

    pub fn surface_width(&self) -> u32 { self.surface.width() }

    pub fn surface_height(&self) -> u32 { self.surface.height() }

    pub fn dimensions(&self) -> GridDimensions { self.grid.dimensions() }

    pub fn cell_size(&self) -> CellSize { self.grid.cell_size() }

    pub fn pixel_to_cell(&self, px: f64, py: f64) -> Option<CellCoord> {
        self.grid.pixel_to_cell(px, py)
    }

    pub fn active_color(&self) -> Color {
        settings::active_color(self)
    }

    /// Ignored (returns false) unless `hex` parses as a color
    pub fn set_active_color(&mut self, hex: &str) -> bool {
        settings::set_active_color(self, hex)
    }

    pub fn set_guide_visible(&mut self, visible: bool) {
        settings::set_guide_visible(self, visible);
    }

    pub fn guide_visible(&self) -> bool {
        settings::guide_visible(self)
    }

    // === COMMANDS ===

    /// Primary press paints, primary + modifier picks back, anything else is ignored
    pub fn press(&mut self, px: f64, py: f64, button: PointerButton, modifier: bool) -> PressOutcome {
        commands::press(self, px, py, button, modifier)
    }

    /// Paint `cell` with the active color and record it
    pub fn fill_cell(&mut self, cell: CellCoord) -> bool {
        commands::fill_cell(self, cell)
    }

    /// Copy the cell's recorded color into the active color
    pub fn pick_color(&mut self, cell: CellCoord) -> Option<Color> {
        commands::pick_color(self, cell)
    }

    /// Silent on failure: returns false and keeps the previous grid
    pub fn resize(&mut self, columns: i64, rows: i64) -> bool {
        commands::resize(self, GridDimensions::from_signed(columns, rows))
    }

    pub fn resize_from_input(&mut self, columns: &str, rows: &str) -> bool {
        commands::resize(self, GridDimensions::parse(columns, rows))
    }

    /// Ask `gate` first; nothing changes if it says no
    pub fn clear<G: ConfirmGate + ?Sized>(&mut self, gate: &mut G) -> bool {
        commands::clear(self, gate)
    }

    pub fn export(&self) -> Result<ExportedImage, PadError> {
        commands::export(self)
    }

    // === INPUT ===

    pub fn dispatch<G: ConfirmGate + ?Sized>(
        &mut self,
        event: InputEvent,
        gate: &mut G,
    ) -> Result<DispatchOutcome, PadError> {
        dispatch::dispatch(self, event, gate)
    }

    // === RENDER ===

    /// Move the surface's dirty region into the pending slot; false when clean
    pub fn collect_dirty_rect(&mut self) -> bool {
        render_extract::collect_dirty_rect(self)
    }

    pub fn pending_rect(&self) -> Option<DirtyRect> {
        self.pending_rect
    }

    /// Copy the pending region, tightly packed row-major, into the transfer buffer
    pub fn extract_pending_pixels(&mut self) -> &[u32] {
        render_extract::extract_pending_pixels(self)
    }

    pub fn rect_transfer_ptr(&self) -> *const u32 {
        self.rect_transfer_buffer.as_ptr()
    }

    pub fn pixels_ptr(&self) -> *const u32 {
        self.surface.pixels_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.surface.size()
    }

    pub fn pixels_len_bytes(&self) -> usize {
        self.surface.pixels_len_bytes()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
