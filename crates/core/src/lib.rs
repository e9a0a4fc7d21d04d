//! Core rules engine - pure, deterministic, and testable
//!
//! This crate decides whether a piece may occupy a position, how pieces rotate,
//! how completed rows are detected and compacted, how scoring accrues and when a
//! session ends. It has **no dependencies** on rendering, input devices or files:
//! a driver feeds it discrete commands and periodic ticks and reads back state.
//!
//! # Module Structure
//!
//! - [`shapes`]: canonical cell offsets for every [`ShapeKind`]
//! - [`piece`]: the falling piece and its quarter-turn rotation
//! - [`grid`]: 10x22 flat cell storage with full-row compaction
//! - [`board`]: the session state machine and movement/lock/spawn rules
//! - [`rng`]: injectable piece randomizers (seeded or scripted)
//! - [`scoring`]: pluggable scoring policies
//! - [`status`]: the observer contract for score and game-over notifications
//! - [`snapshot`]: a copied, read-only view of the board for outer layers
//!
//! # Coordinates
//!
//! x grows to the right, y grows *up* and row 0 is the bottom of the well.
//! Piece offsets are expressed in a local frame whose y grows down the board,
//! so an offset `(dx, dy)` lands on `(pivot.x + dx, pivot.y - dy)`.
//!
//! # Example
//!
//! ```
//! use falltris_core::{Board, ScriptedShapes};
//! use falltris_types::ShapeKind;
//!
//! let mut board = Board::new(ScriptedShapes::new(vec![ShapeKind::Line]), ());
//! board.start();
//! assert_eq!(board.active_piece_kind(), ShapeKind::Line);
//!
//! board.hard_drop();
//! for y in 0..4 {
//!     assert_eq!(board.cell_at(6, y), ShapeKind::Line);
//! }
//! assert_eq!(board.current_score(), 0);
//! assert_eq!(board.lines_cleared(), 0);
//! ```
//!
//! # Timing
//!
//! The engine holds no clock. A driver calls [`Board::tick`] at its own cadence
//! (400ms by default, see [`falltris_types::DEFAULT_TICK_MS`]); every tick is one
//! gravity step.

pub mod board;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;
pub mod status;

pub use falltris_types as types;
pub use falltris_types::ShapeKind;

// Re-export commonly used types for convenience
pub use board::Board;
pub use grid::Grid;
pub use piece::ActivePiece;
pub use rng::{PieceSource, ScriptedShapes, SimpleRng, UniformShapes};
pub use scoring::{ClassicScoring, LinesScoring, ScoringPolicy, ScoringRule};
pub use shapes::{offsets_for, PieceShape};
pub use snapshot::BoardSnapshot;
pub use status::{StatusEvent, StatusSink};
