use std::fmt;
use std::str::FromStr;

/// Integer (column, row) address of one grid cell
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    pub x: u32,
    pub y: u32,
}

impl CellCoord {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Composite `x_y` key used when history is handed to the host
    pub fn key(self) -> String {
        format!("{}_{}", self.x, self.y)
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.x, self.y)
    }
}

impl FromStr for CellCoord {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once('_')
            .ok_or_else(|| format!("cell key '{}' has no separator", s))?;
        let x = x.parse::<u32>().map_err(|e| e.to_string())?;
        let y = y.parse::<u32>().map_err(|e| e.to_string())?;
        Ok(Self { x, y })
    }
}
