use crate::core::PadError;
use crate::domain::{ColorHistory, GuideOverlay, PadConfig};
use crate::spatial::{GridDimensions, GridModel, RasterSurface};

use super::PadCore;

pub(super) fn create_pad_core(config: PadConfig) -> Result<PadCore, PadError> {
    config.validate()?;
    let dims = config.grid_dimensions()?;
    Ok(build(config, dims))
}

pub(super) fn create_default_pad_core() -> PadCore {
    let config = PadConfig::default();
    let dims = GridDimensions {
        columns: config.columns,
        rows: config.rows,
    };
    build(config, dims)
}

fn build(config: PadConfig, dims: GridDimensions) -> PadCore {
    log::info!(
        "pad {}x{} px, grid {}x{}",
        config.surface_width,
        config.surface_height,
        dims.columns,
        dims.rows
    );

    PadCore {
        grid: GridModel::new(config.surface_width, config.surface_height, dims),
        // Surface starts solid background, like a freshly initialized canvas
        surface: RasterSurface::new(
            config.surface_width,
            config.surface_height,
            config.background_color,
        ),
        history: ColorHistory::new(),
        guide: GuideOverlay::new(dims, config.guide_visible),
        active_color: config.default_color,
        pending_rect: None,
        // Start small; `extract_pending_pixels` grows it on demand.
        rect_transfer_buffer: Vec::new(),
        config,
    }
}
