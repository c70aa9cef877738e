use super::*;

/// Dirty region in whole surface pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirtyRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl DirtyRect {
    pub fn full(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, w: width, h: height }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Smallest rect covering both
    pub fn union(&self, other: &DirtyRect) -> DirtyRect {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = (self.x + self.w).max(other.x + other.w);
        let y1 = (self.y + self.h).max(other.y + other.h);
        DirtyRect { x: x0, y: y0, w: x1 - x0, h: y1 - y0 }
    }
}

impl RasterSurface {
    pub(super) fn mark_dirty(&mut self, rect: DirtyRect) {
        if rect.is_empty() {
            return;
        }
        self.dirty = Some(match self.dirty {
            Some(prev) => prev.union(&rect),
            None => rect,
        });
    }

    /// Peek without clearing
    pub fn dirty_rect(&self) -> Option<DirtyRect> {
        self.dirty
    }

    /// Hand the dirty region to the host and reset it
    pub fn take_dirty_rect(&mut self) -> Option<DirtyRect> {
        self.dirty.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_covers_both_rects() {
        let a = DirtyRect { x: 10, y: 10, w: 5, h: 5 };
        let b = DirtyRect { x: 2, y: 12, w: 3, h: 10 };
        assert_eq!(a.union(&b), DirtyRect { x: 2, y: 10, w: 13, h: 12 });
    }

    #[test]
    fn new_surface_starts_fully_dirty_and_take_resets() {
        let mut surface = RasterSurface::new(8, 6, Color::WHITE);
        assert_eq!(surface.take_dirty_rect(), Some(DirtyRect::full(8, 6)));
        assert_eq!(surface.take_dirty_rect(), None);
    }
}
