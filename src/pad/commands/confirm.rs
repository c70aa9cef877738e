/// Prompt shown before the surface is wiped
pub const CLEAR_PROMPT: &str = "Are you sure you wish to clear the canvas?";

/// Blocking yes/no question answered by the host before a destructive action
pub trait ConfirmGate {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> ConfirmGate for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Gate with a preset answer (host already asked, or tests)
#[derive(Clone, Copy, Debug)]
pub struct FixedAnswer(pub bool);

impl ConfirmGate for FixedAnswer {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}
