//! Shared value types: colors, cell addresses, errors, logging

pub mod cell;
pub mod color;
pub mod error;
pub mod logging;

pub use cell::CellCoord;
pub use color::Color;
pub use error::PadError;
