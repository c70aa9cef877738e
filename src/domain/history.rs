//! Color history - last color painted into each cell
//!
//! Only read by the color-pick-back gesture. Entries are overwritten on every
//! fill and never removed individually.

use std::collections::{BTreeMap, HashMap};

use crate::core::{CellCoord, Color};

#[derive(Default, Clone)]
pub struct ColorHistory {
    entries: HashMap<CellCoord, Color>,
}

impl ColorHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_fill(&mut self, cell: CellCoord, color: Color) {
        self.entries.insert(cell, color);
    }

    /// `None` means the cell was never filled (or history was reset)
    pub fn lookup(&self, cell: CellCoord) -> Option<Color> {
        self.entries.get(&cell).copied()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `{"x_y": "#rrggbb", ...}`, keys sorted by (x, y)
    pub fn to_json(&self) -> String {
        let sorted: BTreeMap<CellCoord, Color> = self.entries.iter().map(|(k, v)| (*k, *v)).collect();
        let keyed: serde_json::Map<String, serde_json::Value> = sorted
            .into_iter()
            .map(|(cell, color)| (cell.key(), serde_json::Value::String(color.to_hex())))
            .collect();
        serde_json::Value::Object(keyed).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEAL: Color = Color::rgb(0x00, 0x95, 0x78);

    #[test]
    fn lookup_returns_last_recorded_color() {
        let mut history = ColorHistory::new();
        let cell = CellCoord::new(2, 3);
        assert_eq!(history.lookup(cell), None);

        history.record_fill(cell, Color::BLACK);
        history.record_fill(cell, TEAL);
        assert_eq!(history.lookup(cell), Some(TEAL));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn cells_are_keyed_by_both_components() {
        let mut history = ColorHistory::new();
        history.record_fill(CellCoord::new(1, 2), TEAL);
        assert_eq!(history.lookup(CellCoord::new(2, 1)), None);
    }

    #[test]
    fn json_snapshot_uses_composite_keys() {
        let mut history = ColorHistory::new();
        history.record_fill(CellCoord::new(1, 0), TEAL);
        history.record_fill(CellCoord::new(0, 5), Color::WHITE);

        let parsed: serde_json::Value = serde_json::from_str(&history.to_json()).unwrap();
        assert_eq!(parsed["1_0"], "#009578");
        assert_eq!(parsed["0_5"], "#ffffff");
    }

    #[test]
    fn clear_drops_everything() {
        let mut history = ColorHistory::new();
        history.record_fill(CellCoord::new(0, 0), TEAL);
        history.clear();
        assert!(history.is_empty());
    }
}
