//! Raster surface - the fixed-size pixel buffer everything is painted into
//!
//! Pixels are ABGR packed `u32` in one row-major `Vec`, so the host can view
//! the buffer as RGBA bytes and hand it to `putImageData` without conversion.

use crate::core::Color;

mod dirty;
mod export;
mod fill;
mod indexing;

pub use dirty::DirtyRect;
pub use export::{ExportFormat, DEFAULT_JPEG_QUALITY};

pub struct RasterSurface {
    width: u32,
    height: u32,
    size: usize,

    pixels: Vec<u32>,

    // Union of everything painted since the host last collected it
    dirty: Option<DirtyRect>,
}

impl RasterSurface {
    /// New surface filled solid with `background`
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let size = width as usize * height as usize;
        let mut surface = Self {
            width,
            height,
            size,
            pixels: vec![background.to_abgr(); size],
            dirty: None,
        };
        surface.mark_dirty(DirtyRect::full(width, height));
        surface
    }
}
