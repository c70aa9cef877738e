use crate::core::{Color, PadError};
use crate::spatial::GridDimensions;

use super::commands::{ExportedImage, PressOutcome};
use super::confirm::ConfirmGate;
use super::PadCore;

/// Which pointer button went down
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl PointerButton {
    /// DOM `MouseEvent.button` numbering
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

/// Everything the host can send. Positions are surface-local pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Press {
        x: f64,
        y: f64,
        button: PointerButton,
        modifier: bool,
    },
    SetColor(String),
    ToggleGuide(bool),
    Resize {
        columns: String,
        rows: String,
    },
    Clear,
    Save,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DispatchOutcome {
    Press(PressOutcome),
    ColorChanged(Color),
    ColorRejected,
    GuideVisible(bool),
    Resized(GridDimensions),
    ResizeRejected,
    Cleared,
    ClearDeclined,
    Saved(ExportedImage),
}

impl DispatchOutcome {
    /// True when surface pixels may have changed and the host should blit
    pub fn needs_redraw(&self) -> bool {
        matches!(
            self,
            DispatchOutcome::Press(PressOutcome::Painted(_)) | DispatchOutcome::Cleared
        )
    }

    /// True when the guide overlay must be rebuilt or re-shown
    pub fn needs_guide_update(&self) -> bool {
        matches!(
            self,
            DispatchOutcome::Resized(_) | DispatchOutcome::GuideVisible(_)
        )
    }
}

pub(super) fn dispatch<G: ConfirmGate + ?Sized>(
    pad: &mut PadCore,
    event: InputEvent,
    gate: &mut G,
) -> Result<DispatchOutcome, PadError> {
    let outcome = match event {
        InputEvent::Press { x, y, button, modifier } => {
            DispatchOutcome::Press(pad.press(x, y, button, modifier))
        }
        InputEvent::SetColor(hex) => {
            if pad.set_active_color(&hex) {
                DispatchOutcome::ColorChanged(pad.active_color())
            } else {
                DispatchOutcome::ColorRejected
            }
        }
        InputEvent::ToggleGuide(visible) => {
            pad.set_guide_visible(visible);
            DispatchOutcome::GuideVisible(visible)
        }
        InputEvent::Resize { columns, rows } => {
            if pad.resize_from_input(&columns, &rows) {
                DispatchOutcome::Resized(pad.dimensions())
            } else {
                DispatchOutcome::ResizeRejected
            }
        }
        InputEvent::Clear => {
            if pad.clear(gate) {
                DispatchOutcome::Cleared
            } else {
                DispatchOutcome::ClearDeclined
            }
        }
        InputEvent::Save => DispatchOutcome::Saved(pad.export()?),
    };
    Ok(outcome)
}
