use serde::Deserialize;

use crate::core::{Color, PadError};
use crate::spatial::surface::DEFAULT_JPEG_QUALITY;
use crate::spatial::{ExportFormat, GridDimensions};

pub const DEFAULT_SURFACE_SIZE: u32 = 400;
pub const DEFAULT_GRID_SIZE: u32 = 16;
pub const DEFAULT_PAINT_COLOR: Color = Color::rgb(0x00, 0x95, 0x78); // #009578
pub const DEFAULT_BACKGROUND: Color = Color::WHITE;
pub const DEFAULT_EXPORT_BASENAME: &str = "Pixel_image";

/// Largest surface accepted, in pixels (8192x8192, a 256 MiB buffer).
/// Keeps `width * height` well inside a 32-bit `usize`.
pub const MAX_SURFACE_PIXELS: u64 = 1 << 26;

/// Everything a pad is constructed from. Missing JSON fields take the defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    pub surface_width: u32,
    pub surface_height: u32,
    pub columns: u32,
    pub rows: u32,
    pub default_color: Color,
    pub background_color: Color,
    pub guide_visible: bool,
    /// Whether a confirmed clear also forgets the per-cell color history
    pub clear_resets_history: bool,
    pub export_format: ExportFormat,
    pub jpeg_quality: u8,
    pub export_basename: String,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            surface_width: DEFAULT_SURFACE_SIZE,
            surface_height: DEFAULT_SURFACE_SIZE,
            columns: DEFAULT_GRID_SIZE,
            rows: DEFAULT_GRID_SIZE,
            default_color: DEFAULT_PAINT_COLOR,
            background_color: DEFAULT_BACKGROUND,
            guide_visible: true,
            clear_resets_history: true,
            export_format: ExportFormat::Png,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            export_basename: DEFAULT_EXPORT_BASENAME.to_string(),
        }
    }
}

impl PadConfig {
    pub fn from_json(json: &str) -> Result<Self, PadError> {
        let config: PadConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PadError> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Err(PadError::Config(format!(
                "surface must be non-empty, got {}x{}",
                self.surface_width, self.surface_height
            )));
        }
        let pixels = self.surface_width as u64 * self.surface_height as u64;
        if pixels > MAX_SURFACE_PIXELS {
            return Err(PadError::Config(format!(
                "surface {}x{} exceeds {} pixels",
                self.surface_width, self.surface_height, MAX_SURFACE_PIXELS
            )));
        }
        self.grid_dimensions()?;
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(PadError::Config(format!(
                "jpeg_quality must be 1..=100, got {}",
                self.jpeg_quality
            )));
        }
        if self.export_basename.trim().is_empty() {
            return Err(PadError::Config("export_basename is empty".to_string()));
        }
        Ok(())
    }

    pub fn grid_dimensions(&self) -> Result<GridDimensions, PadError> {
        GridDimensions::new(self.columns, self.rows)
    }

    pub fn export_filename(&self) -> String {
        format!("{}.{}", self.export_basename, self.export_format.extension())
    }
}
