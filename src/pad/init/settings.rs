use crate::core::Color;

use super::PadCore;

pub(super) fn active_color(pad: &PadCore) -> Color {
    pad.active_color
}

pub(super) fn set_active_color(pad: &mut PadCore, hex: &str) -> bool {
    match Color::parse_hex(hex) {
        Ok(color) => {
            pad.active_color = color;
            true
        }
        Err(err) => {
            log::debug!("ignoring color input: {}", err);
            false
        }
    }
}

pub(super) fn set_guide_visible(pad: &mut PadCore, visible: bool) {
    pad.guide.set_visible(visible);
}

pub(super) fn guide_visible(pad: &PadCore) -> bool {
    pad.guide.is_visible()
}
