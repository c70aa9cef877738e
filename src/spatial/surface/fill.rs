use super::*;

/// Snap a fractional edge to the nearest pixel boundary, clamped to `[0, max]`.
/// Adjacent rects share the same rounded edge, so cells tile without gaps.
#[inline]
fn snap_edge(v: f64, max: u32) -> u32 {
    if !(v > 0.0) {
        return 0;
    }
    v.round().min(max as f64) as u32
}

/// Pixel span `[lo, hi)` covered by `start..start + len`, or `None` when it
/// misses the surface. A sliver narrower than one pixel still gets one.
fn snap_span(start: f64, len: f64, max: u32) -> Option<(u32, u32)> {
    let end = start + len;
    if max == 0 || !(len > 0.0) || !(end > 0.0) || !(start < max as f64) {
        return None;
    }

    let mut lo = snap_edge(start, max);
    let mut hi = snap_edge(end, max);
    if hi <= lo {
        lo = lo.min(max - 1);
        hi = lo + 1;
    }
    Some((lo, hi))
}

impl RasterSurface {
    /// Paint an axis-aligned rect solid. No blending, no anti-aliasing;
    /// whatever falls outside the surface is clipped. Returns false when
    /// nothing was painted.
    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) -> bool {
        let Some((x0, x1)) = snap_span(x, width, self.width) else {
            return false;
        };
        let Some((y0, y1)) = snap_span(y, height, self.height) else {
            return false;
        };

        let packed = color.to_abgr();
        let stride = self.width as usize;
        for row in y0..y1 {
            let start = row as usize * stride;
            self.pixels[start + x0 as usize..start + x1 as usize].fill(packed);
        }

        self.mark_dirty(DirtyRect { x: x0, y: y0, w: x1 - x0, h: y1 - y0 });
        true
    }

    /// Paint the whole surface (initialization and clear)
    pub fn fill_all(&mut self, color: Color) {
        self.pixels.fill(color.to_abgr());
        self.mark_dirty(DirtyRect::full(self.width, self.height));
    }

    /// True when every pixel equals `color`
    pub fn is_solid(&self, color: Color) -> bool {
        let packed = color.to_abgr();
        self.pixels.iter().all(|&p| p == packed)
    }
}
