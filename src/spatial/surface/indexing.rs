use super::*;

impl RasterSurface {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && x < self.width as i64 && y >= 0 && y < self.height as i64
    }

    // === Pixel access ===
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if !self.in_bounds(x as i64, y as i64) {
            return None;
        }
        Some(Color::from_abgr(self.pixels[self.index(x, y)]))
    }

    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pointer into linear memory (for zero-copy JS views)
    pub fn pixels_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    pub fn pixels_len_bytes(&self) -> usize {
        self.size * std::mem::size_of::<u32>()
    }
}
