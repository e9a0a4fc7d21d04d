//! Status notifications for display layers.
//!
//! The board calls its sink synchronously at exactly two points: after a lock
//! clears at least one row, and once when the session ends. A sink receives
//! plain values and holds no reference to the board.

/// Observer for score and game-over notifications.
pub trait StatusSink {
    /// Rows were cleared; `score` and `lines` are the new session totals.
    fn lines_cleared(&mut self, score: u32, lines: u32);

    /// The session ended because the next piece could not spawn.
    fn game_over(&mut self, final_score: u32);
}

/// The unit sink ignores every notification.
impl StatusSink for () {
    fn lines_cleared(&mut self, _score: u32, _lines: u32) {}

    fn game_over(&mut self, _final_score: u32) {}
}

/// A recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusEvent {
    LinesCleared { score: u32, lines: u32 },
    GameOver { final_score: u32 },
}

impl StatusSink for Vec<StatusEvent> {
    fn lines_cleared(&mut self, score: u32, lines: u32) {
        self.push(StatusEvent::LinesCleared { score, lines });
    }

    fn game_over(&mut self, final_score: u32) {
        self.push(StatusEvent::GameOver { final_score });
    }
}

impl<S: StatusSink + ?Sized> StatusSink for &mut S {
    fn lines_cleared(&mut self, score: u32, lines: u32) {
        (**self).lines_cleared(score, lines);
    }

    fn game_over(&mut self, final_score: u32) {
        (**self).game_over(final_score);
    }
}
