use crate::types::{Coord, SessionState, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Copied board state for renderers and other read-only consumers.
///
/// `cells[y][x]` uses board coordinates: row 0 is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    pub cells: [[ShapeKind; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active_kind: ShapeKind,
    pub active_cells: Option<[Coord; 4]>,
    pub score: u32,
    pub lines: u32,
    pub state: SessionState,
}

impl BoardSnapshot {
    pub fn clear(&mut self) {
        self.cells = [[ShapeKind::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active_kind = ShapeKind::Empty;
        self.active_cells = None;
        self.score = 0;
        self.lines = 0;
        self.state = SessionState::NotStarted;
    }

    pub fn paused(&self) -> bool {
        self.state == SessionState::Paused
    }

    pub fn game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    pub fn playable(&self) -> bool {
        self.state == SessionState::Running
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            cells: [[ShapeKind::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active_kind: ShapeKind::Empty,
            active_cells: None,
            score: 0,
            lines: 0,
            state: SessionState::NotStarted,
        }
    }
}
