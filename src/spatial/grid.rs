//! Grid model - column/row counts laid over a fixed-size surface
//!
//! Cell size is never stored; it is derived from the surface size and the
//! current dimensions each time it is asked for, so a resize can never leave
//! a stale cell size behind.

use crate::core::{CellCoord, PadError};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridDimensions {
    pub columns: u32,
    pub rows: u32,
}

impl GridDimensions {
    pub fn new(columns: u32, rows: u32) -> Result<Self, PadError> {
        if columns == 0 || rows == 0 {
            return Err(PadError::InvalidDimensions {
                columns: columns as i64,
                rows: rows as i64,
            });
        }
        Ok(Self { columns, rows })
    }

    /// Accepts signed host values; anything below 1 is rejected.
    pub fn from_signed(columns: i64, rows: i64) -> Result<Self, PadError> {
        if columns <= 0 || rows <= 0 || columns > u32::MAX as i64 || rows > u32::MAX as i64 {
            return Err(PadError::InvalidDimensions { columns, rows });
        }
        Ok(Self {
            columns: columns as u32,
            rows: rows as u32,
        })
    }

    /// Parse two host text inputs the way the page's integer inputs are read.
    pub fn parse(columns: &str, rows: &str) -> Result<Self, PadError> {
        let columns = parse_leading_int(columns)?;
        let rows = parse_leading_int(rows)?;
        Self::from_signed(columns, rows)
    }

    pub fn cell_count(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }
}

/// Cell size in (possibly fractional) surface pixels
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellSize {
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned rectangle in fractional surface pixels
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub struct GridModel {
    surface_width: u32,
    surface_height: u32,
    dims: GridDimensions,
}

impl GridModel {
    pub fn new(surface_width: u32, surface_height: u32, dims: GridDimensions) -> Self {
        Self {
            surface_width,
            surface_height,
            dims,
        }
    }

    #[inline]
    pub fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.dims.columns
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.dims.rows
    }

    /// Replace the dimensions. The caller is responsible for resyncing the guide.
    pub fn configure(&mut self, dims: GridDimensions) {
        self.dims = dims;
    }

    pub fn cell_size(&self) -> CellSize {
        CellSize {
            width: self.surface_width as f64 / self.dims.columns as f64,
            height: self.surface_height as f64 / self.dims.rows as f64,
        }
    }

    /// Map a surface-local pixel position to the cell under it.
    /// Returns `None` for positions off the surface.
    pub fn pixel_to_cell(&self, px: f64, py: f64) -> Option<CellCoord> {
        if !(px >= 0.0 && py >= 0.0) {
            return None;
        }
        if px >= self.surface_width as f64 || py >= self.surface_height as f64 {
            return None;
        }

        let size = self.cell_size();
        let x = (px / size.width).floor() as u32;
        let y = (py / size.height).floor() as u32;

        // Guard against float error right at the far edge
        Some(CellCoord::new(
            x.min(self.dims.columns - 1),
            y.min(self.dims.rows - 1),
        ))
    }

    /// Region covered by `cell`: `index * cellSize`, no rounding
    pub fn cell_rect(&self, cell: CellCoord) -> PixelRect {
        let size = self.cell_size();
        PixelRect {
            x: cell.x as f64 * size.width,
            y: cell.y as f64 * size.height,
            width: size.width,
            height: size.height,
        }
    }

    pub fn contains(&self, cell: CellCoord) -> bool {
        cell.x < self.dims.columns && cell.y < self.dims.rows
    }
}

/// Integer parse of host text: leading whitespace, optional sign, then the
/// leading run of decimal digits. Trailing text is ignored (`"12px"` -> 12,
/// `"3.9"` -> 3); no digits at all is an error.
pub fn parse_leading_int(text: &str) -> Result<i64, PadError> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return Err(PadError::NotANumber(text.to_string()));
    }

    // Saturate instead of overflowing; anything this large is rejected later anyway.
    let magnitude = rest[..digits_len].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add((b - b'0') as i64)
    });

    Ok(if negative { -magnitude } else { magnitude })
}
