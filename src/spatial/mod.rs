pub mod grid;
pub mod surface;

pub use grid::{CellSize, GridDimensions, GridModel, PixelRect};
pub use surface::{DirtyRect, ExportFormat, RasterSurface};
