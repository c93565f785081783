use crate::game_view::Viewport;

/// Decides when the event loop needs a new frame.
///
/// The game has no animation, so a frame is only due when the state
/// revision or the terminal size changed since the last draw.
#[derive(Debug, Clone, Default)]
pub struct RedrawGate {
    last: Option<(u64, Viewport)>,
}

impl RedrawGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` (and records the frame) when a redraw is due.
    pub fn should_draw(&mut self, revision: u64, viewport: Viewport) -> bool {
        let frame = (revision, viewport);
        if self.last == Some(frame) {
            return false;
        }
        self.last = Some(frame);
        true
    }

    /// Force the next call to `should_draw` to return `true`.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
