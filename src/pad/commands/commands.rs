use crate::core::{CellCoord, Color, PadError};
use crate::spatial::GridDimensions;

use super::confirm::{ConfirmGate, CLEAR_PROMPT};
use super::dispatch::PointerButton;
use super::PadCore;

/// What a single press did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    Painted(CellCoord),
    Picked(Color),
    /// Modifier press on a cell with no recorded color
    NothingToPick(CellCoord),
    /// Non-primary button or off-surface position
    Ignored,
}

/// Encoded surface ready to hand to the host as a download
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedImage {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime_type: &'static str,
}

pub(super) fn press(
    pad: &mut PadCore,
    px: f64,
    py: f64,
    button: PointerButton,
    modifier: bool,
) -> PressOutcome {
    if button != PointerButton::Primary {
        return PressOutcome::Ignored;
    }

    let Some(cell) = pad.grid.pixel_to_cell(px, py) else {
        return PressOutcome::Ignored;
    };

    if modifier {
        match pick_color(pad, cell) {
            Some(color) => PressOutcome::Picked(color),
            None => PressOutcome::NothingToPick(cell),
        }
    } else if fill_cell(pad, cell) {
        PressOutcome::Painted(cell)
    } else {
        PressOutcome::Ignored
    }
}

pub(super) fn fill_cell(pad: &mut PadCore, cell: CellCoord) -> bool {
    if !pad.grid.contains(cell) {
        return false;
    }

    let rect = pad.grid.cell_rect(cell);
    let color = pad.active_color;
    // History only ever holds colors that actually reached the surface
    if !pad.surface.fill_rect(rect.x, rect.y, rect.width, rect.height, color) {
        return false;
    }
    pad.history.record_fill(cell, color);
    true
}

pub(super) fn pick_color(pad: &mut PadCore, cell: CellCoord) -> Option<Color> {
    let color = pad.history.lookup(cell)?;
    pad.active_color = color;
    Some(color)
}

pub(super) fn resize(pad: &mut PadCore, requested: Result<GridDimensions, PadError>) -> bool {
    match requested {
        Ok(dims) => {
            pad.grid.configure(dims);
            pad.guide.sync(dims);
            log::info!("grid resized to {}x{}", dims.columns, dims.rows);
            true
        }
        Err(err) => {
            // Invalid resize input is dropped without telling the user
            log::debug!("resize rejected: {}", err);
            false
        }
    }
}

pub(super) fn clear<G: ConfirmGate + ?Sized>(pad: &mut PadCore, gate: &mut G) -> bool {
    if !gate.confirm(CLEAR_PROMPT) {
        return false;
    }

    pad.surface.fill_all(pad.config.background_color);
    if pad.config.clear_resets_history {
        pad.history.clear();
    }
    log::info!(
        "surface cleared (history {})",
        if pad.config.clear_resets_history { "reset" } else { "kept" }
    );
    true
}

pub(super) fn export(pad: &PadCore) -> Result<ExportedImage, PadError> {
    let format = pad.config.export_format;
    let bytes = pad
        .surface
        .export_image_with_quality(format, pad.config.jpeg_quality)?;

    Ok(ExportedImage {
        bytes,
        filename: pad.config.export_filename(),
        mime_type: format.mime_type(),
    })
}
