pub mod config;
pub mod guide;
pub mod history;

pub use config::PadConfig;
pub use guide::GuideOverlay;
pub use history::ColorHistory;
