//! Guide overlay - grid lines drawn over the surface
//!
//! Purely derived from the grid dimensions. `revision` bumps on every sync so
//! a host can rebuild its overlay lazily. Visibility is a separate flag.

use crate::spatial::GridDimensions;

/// Most cells a DOM overlay is built for; past this the guide is left empty
pub const MAX_DOM_CELLS: u64 = 1 << 20;

pub struct GuideOverlay {
    columns: u32,
    rows: u32,
    visible: bool,
    revision: u32,
}

impl GuideOverlay {
    pub fn new(dims: GridDimensions, visible: bool) -> Self {
        let mut guide = Self {
            columns: 0,
            rows: 0,
            visible,
            revision: 0,
        };
        guide.sync(dims);
        guide
    }

    /// Follow new grid dimensions. Does not touch visibility.
    pub fn sync(&mut self, dims: GridDimensions) {
        self.columns = dims.columns;
        self.rows = dims.rows;
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn revision(&self) -> u32 {
        self.revision
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cell_count(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }

    /// Child elements a DOM overlay needs, or `None` when the grid is too
    /// fine to draw that way
    pub fn dom_cell_count(&self) -> Option<usize> {
        let count = self.cell_count();
        if count > MAX_DOM_CELLS {
            return None;
        }
        usize::try_from(count).ok()
    }

    /// X offsets of the interior vertical lines
    pub fn vertical_lines(&self, surface_width: u32) -> Vec<f64> {
        interior_lines(self.columns, surface_width)
    }

    /// Y offsets of the interior horizontal lines
    pub fn horizontal_lines(&self, surface_height: u32) -> Vec<f64> {
        interior_lines(self.rows, surface_height)
    }

    /// CSS `grid-template-columns` / `grid-template-rows` for a DOM overlay
    pub fn css_template(&self) -> (String, String) {
        (
            format!("repeat({}, 1fr)", self.columns),
            format!("repeat({}, 1fr)", self.rows),
        )
    }
}

fn interior_lines(count: u32, extent: u32) -> Vec<f64> {
    let step = extent as f64 / count as f64;
    (1..count).map(|i| i as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(c: u32, r: u32) -> GridDimensions {
        GridDimensions::new(c, r).unwrap()
    }

    #[test]
    fn sync_follows_dimensions_and_bumps_revision() {
        let mut guide = GuideOverlay::new(dims(4, 4), true);
        let first = guide.revision();
        guide.sync(dims(8, 2));
        assert_eq!((guide.columns(), guide.rows()), (8, 2));
        assert_eq!(guide.revision(), first + 1);
        assert_eq!(guide.cell_count(), 16);
    }

    #[test]
    fn visibility_is_independent_of_sync() {
        let mut guide = GuideOverlay::new(dims(4, 4), false);
        let revision = guide.revision();
        guide.set_visible(true);
        assert_eq!(guide.revision(), revision);
        guide.sync(dims(5, 5));
        assert!(guide.is_visible());
    }

    #[test]
    fn dom_cell_count_is_capped() {
        assert_eq!(GuideOverlay::new(dims(16, 16), true).dom_cell_count(), Some(256));
        assert_eq!(GuideOverlay::new(dims(1024, 1024), true).dom_cell_count(), Some(1 << 20));
        // 2^32 cells would wrap to zero as a 32-bit usize
        assert_eq!(GuideOverlay::new(dims(65536, 65536), true).dom_cell_count(), None);
    }

    #[test]
    fn line_offsets_are_interior_only() {
        let guide = GuideOverlay::new(dims(4, 2), true);
        assert_eq!(guide.vertical_lines(400), vec![100.0, 200.0, 300.0]);
        assert_eq!(guide.horizontal_lines(400), vec![200.0]);
        assert!(GuideOverlay::new(dims(1, 1), true).vertical_lines(400).is_empty());
    }

    #[test]
    fn css_template_repeats_fractions() {
        let guide = GuideOverlay::new(dims(12, 9), true);
        assert_eq!(
            guide.css_template(),
            ("repeat(12, 1fr)".to_string(), "repeat(9, 1fr)".to_string())
        );
    }
}
