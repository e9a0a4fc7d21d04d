//! Board module - the session state machine and the movement rules
//!
//! The board owns the grid, the active piece and its pivot, the score and the
//! session state. Every movement, rotation and drop funnels through
//! [`Board::try_set_piece`], which either commits a placement or leaves the
//! board untouched. Rejected moves are plain `false` results, not errors.
//!
//! States: `NotStarted -> Running <-> Paused`, `Running -> GameOver` when a
//! spawn fails, and [`Board::start`] begins a fresh session from any state.
//! Commands other than `start`/`resume` are no-ops unless the board is running.

use std::fmt;

use crate::grid::Grid;
use crate::piece::ActivePiece;
use crate::rng::{PieceSource, UniformShapes};
use crate::scoring::{LinesScoring, ScoringPolicy};
use crate::snapshot::BoardSnapshot;
use crate::status::StatusSink;
use crate::types::{
    Command, Coord, LockOutcome, RotationDirection, SessionState, ShapeKind, Shift, BOARD_HEIGHT,
    BOARD_WIDTH,
};

/// Pivot column for every spawn
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2 + 1) as i8;

pub struct Board<R = UniformShapes, S = ()> {
    grid: Grid,
    active: ActivePiece,
    pivot: Coord,
    score: u32,
    lines: u32,
    state: SessionState,
    /// Outcome of the most recent lock; a pending respawn is consumed by `tick`.
    last_lock: Option<LockOutcome>,
    source: R,
    sink: S,
    scoring: Box<dyn ScoringPolicy>,
}

impl Board<UniformShapes, ()> {
    /// Board with a uniform randomizer and no status observer
    pub fn seeded(seed: u32) -> Self {
        Self::new(UniformShapes::new(seed), ())
    }
}

impl<R: PieceSource, S: StatusSink> Board<R, S> {
    /// Create an idle board. Call [`Board::start`] to begin a session.
    pub fn new(source: R, sink: S) -> Self {
        Self {
            grid: Grid::new(),
            active: ActivePiece::empty(),
            pivot: (SPAWN_X, BOARD_HEIGHT as i8 - 1),
            score: 0,
            lines: 0,
            state: SessionState::NotStarted,
            last_lock: None,
            source,
            sink,
            scoring: Box::new(LinesScoring),
        }
    }

    /// Replace the scoring policy (one point per row by default)
    pub fn with_scoring(mut self, policy: impl ScoringPolicy + 'static) -> Self {
        self.scoring = Box::new(policy);
        self
    }

    // ---------------------------------------------------------------------
    // Session lifecycle
    // ---------------------------------------------------------------------

    /// Begin a new session: empty grid, zeroed counters, first piece spawned.
    pub fn start(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.lines = 0;
        self.last_lock = None;
        self.active = ActivePiece::empty();
        self.state = SessionState::Running;
        self.spawn_piece();
    }

    pub fn pause(&mut self) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        self.state = SessionState::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != SessionState::Paused {
            return false;
        }
        self.state = SessionState::Running;
        true
    }

    /// Flip between running and paused; other states are left alone
    pub fn toggle_pause(&mut self) -> bool {
        match self.state {
            SessionState::Running => self.pause(),
            SessionState::Paused => self.resume(),
            _ => false,
        }
    }

    /// One gravity step.
    ///
    /// Spawns the next piece if the previous lock left a respawn pending,
    /// otherwise soft-drops the active piece. Returns false when the board is
    /// not running.
    pub fn tick(&mut self) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        if self.is_respawn_pending() {
            self.spawn_piece();
        } else {
            self.soft_drop();
        }
        true
    }

    /// Dispatch a discrete command. Returns whether it changed anything.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_horizontal(Shift::Left),
            Command::MoveRight => self.move_horizontal(Shift::Right),
            Command::RotateClockwise => self.rotate(RotationDirection::Clockwise),
            Command::RotateCounterClockwise => self.rotate(RotationDirection::CounterClockwise),
            Command::SoftDrop => {
                if !self.can_act() {
                    return false;
                }
                self.soft_drop();
                true
            }
            Command::HardDrop => self.hard_drop().is_some(),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::TogglePause => self.toggle_pause(),
            Command::Start => {
                self.start();
                true
            }
        }
    }

    // ---------------------------------------------------------------------
    // Movement rules
    // ---------------------------------------------------------------------

    /// Place `piece` with its pivot at (x, y) if every cell is in bounds and
    /// vacant. On success the piece and pivot become the active ones; on
    /// failure nothing changes.
    pub fn try_set_piece(&mut self, piece: ActivePiece, x: i8, y: i8) -> bool {
        let fits = piece
            .absolute_cells((x, y))
            .iter()
            .all(|&(cx, cy)| self.grid.is_vacant(cx, cy));
        if !fits {
            return false;
        }
        self.active = piece;
        self.pivot = (x, y);
        true
    }

    pub fn move_horizontal(&mut self, shift: Shift) -> bool {
        if !self.can_act() {
            return false;
        }
        let (x, y) = self.pivot;
        self.try_set_piece(self.active, x + shift.dx(), y)
    }

    /// Rotate in place. A rotation that does not fit is rejected; there is no
    /// kick search.
    pub fn rotate(&mut self, direction: RotationDirection) -> bool {
        if !self.can_act() {
            return false;
        }
        let (x, y) = self.pivot;
        self.try_set_piece(self.active.rotated(direction), x, y)
    }

    /// Move down one row, locking the piece if it cannot move.
    ///
    /// Returns true if the piece moved.
    pub fn soft_drop(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }
        let (x, y) = self.pivot;
        if self.try_set_piece(self.active, x, y - 1) {
            return true;
        }
        self.lock_current_piece();
        false
    }

    /// Drop to the lowest reachable row and lock there.
    pub fn hard_drop(&mut self) -> Option<LockOutcome> {
        if !self.can_act() {
            return None;
        }
        let (x, mut y) = self.pivot;
        while self.try_set_piece(self.active, x, y - 1) {
            y -= 1;
        }
        self.lock_current_piece()
    }

    /// Write the active piece into the grid, clear full rows, then either
    /// spawn the next piece (no rows cleared) or leave a respawn pending for
    /// the next tick.
    ///
    /// Returns None when there is no piece to lock or the board is not running.
    pub fn lock_current_piece(&mut self) -> Option<LockOutcome> {
        if !self.can_act() {
            return None;
        }

        let kind = self.active.kind();
        for (x, y) in self.active.absolute_cells(self.pivot) {
            self.grid.set(x, y, kind);
        }
        self.active = ActivePiece::empty();

        let cleared = self.clear_full_lines();
        let outcome = if cleared > 0 {
            LockOutcome::PendingRespawn { lines: cleared }
        } else if self.spawn_piece() {
            LockOutcome::Respawned
        } else {
            LockOutcome::ToppedOut
        };
        self.last_lock = Some(outcome);
        Some(outcome)
    }

    /// Remove all full rows, add them to the line count and score, and notify
    /// the sink. Returns the number of rows removed by this call; always 0
    /// unless the board is running.
    pub fn clear_full_lines(&mut self) -> u32 {
        if self.state != SessionState::Running {
            return 0;
        }
        let cleared = self.grid.clear_full_rows().len() as u32;
        if cleared == 0 {
            return 0;
        }

        let points = self.scoring.points(cleared, self.lines);
        self.lines = self.lines.saturating_add(cleared);
        self.score = self.score.saturating_add(points);
        self.sink.lines_cleared(self.score, self.lines);
        cleared
    }

    /// Bring in the next piece with its top cell on the top row.
    ///
    /// If it does not fit the session ends: the active piece becomes `Empty`,
    /// the state becomes `GameOver` and the sink gets the final score.
    pub fn spawn_piece(&mut self) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        if self.is_respawn_pending() {
            self.last_lock = None;
        }

        let kind = self.source.next_kind();
        debug_assert!(!kind.is_empty(), "piece source returned Empty");

        let piece = ActivePiece::new(kind);
        let y = (BOARD_HEIGHT as i8 - 1) + piece.min_offset_y();
        if self.try_set_piece(piece, SPAWN_X, y) {
            return true;
        }

        self.active = ActivePiece::empty();
        self.state = SessionState::GameOver;
        self.sink.game_over(self.score);
        false
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// Cell contents at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the 10x22 grid. Use [`Board::get`] for a
    /// checked lookup.
    pub fn cell_at(&self, x: i8, y: i8) -> ShapeKind {
        match self.grid.get(x, y) {
            Some(kind) => kind,
            None => panic!(
                "cell_at({}, {}) is outside the {}x{} board",
                x, y, BOARD_WIDTH, BOARD_HEIGHT
            ),
        }
    }

    pub fn get(&self, x: i8, y: i8) -> Option<ShapeKind> {
        self.grid.get(x, y)
    }

    /// Overwrite a locked cell, for setting up positions.
    ///
    /// Returns false if (x, y) is out of bounds or under the falling piece.
    pub fn set_cell(&mut self, x: i8, y: i8, kind: ShapeKind) -> bool {
        if let Some(cells) = self.active_piece_cells() {
            if cells.contains(&(x, y)) {
                return false;
            }
        }
        self.grid.set(x, y, kind)
    }

    /// Absolute cells of the active piece, or None when no piece is falling
    pub fn active_piece_cells(&self) -> Option<[Coord; 4]> {
        if self.active.is_empty() {
            return None;
        }
        Some(self.active.absolute_cells(self.pivot))
    }

    pub fn active_piece_kind(&self) -> ShapeKind {
        self.active.kind()
    }

    pub fn active_piece(&self) -> ActivePiece {
        self.active
    }

    pub fn pivot(&self) -> Coord {
        self.pivot
    }

    pub fn current_score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines
    }

    pub fn session_state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == SessionState::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    pub fn is_respawn_pending(&self) -> bool {
        matches!(self.last_lock, Some(LockOutcome::PendingRespawn { .. }))
    }

    pub fn last_lock(&self) -> Option<LockOutcome> {
        self.last_lock
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn source(&self) -> &R {
        &self.source
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        for (y, row) in out.cells.iter_mut().enumerate() {
            row.copy_from_slice(self.grid.row(y));
        }
        out.active_kind = self.active.kind();
        out.active_cells = self.active_piece_cells();
        out.score = self.score;
        out.lines = self.lines;
        out.state = self.state;
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Running with a piece in play
    fn can_act(&self) -> bool {
        self.state == SessionState::Running && !self.active.is_empty()
    }
}

impl<R, S> fmt::Debug for Board<R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("state", &self.state)
            .field("active", &self.active)
            .field("pivot", &self.pivot)
            .field("score", &self.score)
            .field("lines", &self.lines)
            .field("last_lock", &self.last_lock)
            .field("scoring", &self.scoring)
            .finish_non_exhaustive()
    }
}
