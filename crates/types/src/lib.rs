//! Shared vocabulary for the falling-block engine.
//!
//! Everything in this crate is plain data with no dependencies, so the rules
//! engine, the terminal view and the driver can all agree on the same types.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (x in `0..10`, left to right)
//! - **Height**: 22 rows (y in `0..22`, row 0 is the bottom row)
//!
//! # Examples
//!
//! ```
//! use falltris_types::{Command, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(ShapeKind::from_str("line"), Some(ShapeKind::Line));
//! assert!(ShapeKind::Empty.is_empty());
//! assert_eq!(ShapeKind::ALL_PIECES.len(), 7);
//!
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 22);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (22 rows)
pub const BOARD_HEIGHT: u8 = 22;

/// Default gravity cadence in milliseconds (one soft drop per tick)
pub const DEFAULT_TICK_MS: u32 = 400;

/// Displacement of one piece cell from the pivot.
///
/// `dx` grows to the right. `dy` is expressed in the piece's local frame, which
/// grows *down* the board: the cell lands on `(pivot.x + dx, pivot.y - dy)`.
pub type Offset = (i8, i8);

/// Absolute board coordinate `(x, y)`.
pub type Coord = (i8, i8);

/// Contents of one grid cell, and the kind of a piece.
///
/// `Empty` marks an unoccupied cell (and the "no active piece" placeholder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    #[default]
    Empty,
    Z,
    S,
    Line,
    T,
    Square,
    L,
    MirroredL,
}

impl ShapeKind {
    /// The seven tetrominoes a randomizer may hand out.
    pub const ALL_PIECES: [ShapeKind; 7] = [
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::Line,
        ShapeKind::T,
        ShapeKind::Square,
        ShapeKind::L,
        ShapeKind::MirroredL,
    ];

    pub fn is_empty(&self) -> bool {
        matches!(self, ShapeKind::Empty)
    }

    /// Parse a kind from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use falltris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("Z"), Some(ShapeKind::Z));
    /// assert_eq!(ShapeKind::from_str("square"), Some(ShapeKind::Square));
    /// assert_eq!(ShapeKind::from_str("mirrored_l"), Some(ShapeKind::MirroredL));
    /// assert_eq!(ShapeKind::from_str("hexomino"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "empty" => Some(ShapeKind::Empty),
            "z" => Some(ShapeKind::Z),
            "s" => Some(ShapeKind::S),
            "line" | "i" => Some(ShapeKind::Line),
            "t" => Some(ShapeKind::T),
            "square" | "o" => Some(ShapeKind::Square),
            "l" => Some(ShapeKind::L),
            "mirrored_l" | "mirroredl" | "j" => Some(ShapeKind::MirroredL),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Empty => "empty",
            ShapeKind::Z => "z",
            ShapeKind::S => "s",
            ShapeKind::Line => "line",
            ShapeKind::T => "t",
            ShapeKind::Square => "square",
            ShapeKind::L => "l",
            ShapeKind::MirroredL => "mirrored_l",
        }
    }
}

/// Direction of a quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    /// `(dx, dy) -> (-dy, dx)`
    Clockwise,
    /// `(dx, dy) -> (dy, -dx)`
    CounterClockwise,
}

impl RotationDirection {
    pub fn reversed(&self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

/// One-column horizontal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    Left,
    Right,
}

impl Shift {
    /// Column delta of this move (-1 or +1)
    pub fn dx(&self) -> i8 {
        match self {
            Shift::Left => -1,
            Shift::Right => 1,
        }
    }
}

/// Session lifecycle.
///
/// `NotStarted -> Running <-> Paused`, `Running -> GameOver`, and `start()`
/// leads back to `Running` from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    NotStarted,
    Running,
    Paused,
    GameOver,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::NotStarted => "not_started",
            SessionState::Running => "running",
            SessionState::Paused => "paused",
            SessionState::GameOver => "game_over",
        }
    }
}

/// Result of committing the active piece into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockOutcome {
    /// No rows were cleared and the next piece spawned immediately.
    Respawned,
    /// Rows were cleared; the next `tick()` spawns the next piece.
    PendingRespawn { lines: u32 },
    /// No rows were cleared and the next piece could not spawn.
    ToppedOut,
}

/// Discrete commands a driver can issue to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    RotateClockwise,
    RotateCounterClockwise,
    SoftDrop,
    HardDrop,
    Pause,
    Resume,
    TogglePause,
    Start,
}

impl Command {
    /// Parse a command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use falltris_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("rotateccw"), Some(Command::RotateCounterClockwise));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotatecw" | "rotateclockwise" => Some(Command::RotateClockwise),
            "rotateccw" | "rotatecounterclockwise" => Some(Command::RotateCounterClockwise),
            "softdrop" => Some(Command::SoftDrop),
            "harddrop" => Some(Command::HardDrop),
            "pause" => Some(Command::Pause),
            "resume" => Some(Command::Resume),
            "togglepause" => Some(Command::TogglePause),
            "start" | "restart" => Some(Command::Start),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::RotateClockwise => "rotateCw",
            Command::RotateCounterClockwise => "rotateCcw",
            Command::SoftDrop => "softDrop",
            Command::HardDrop => "hardDrop",
            Command::Pause => "pause",
            Command::Resume => "resume",
            Command::TogglePause => "togglePause",
            Command::Start => "start",
        }
    }
}
