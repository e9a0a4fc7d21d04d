//! Status line fed by the board's notifications.

use crate::core::StatusSink;

/// Keeps the latest human-readable status message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    text: String,
    final_score: Option<u32>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Score reported when the last session ended
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    /// Forget the previous session's message
    pub fn reset(&mut self) {
        self.text.clear();
        self.final_score = None;
    }
}

impl StatusSink for StatusBar {
    fn lines_cleared(&mut self, score: u32, lines: u32) {
        self.text = format!("Score {} / {} lines", score, lines);
    }

    fn game_over(&mut self, final_score: u32) {
        self.final_score = Some(final_score);
        self.text = format!("Game over: {}", final_score);
    }
}
