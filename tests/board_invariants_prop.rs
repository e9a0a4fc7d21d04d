//! Property tests for the board rules.
//!
//! Invariants covered:
//! - A quarter turn followed by its reverse restores the piece exactly.
//! - `try_set_piece` either commits a placement that fits or changes nothing.
//! - Under arbitrary command streams the grid keeps its shape, score and line
//!   count never decrease, and a falling piece never overlaps locked cells.

use proptest::prelude::*;

use falltris::core::{ActivePiece, Board, ScriptedShapes, UniformShapes};
use falltris::types::{Command, RotationDirection, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

const COMMANDS: [Command; 9] = [
    Command::MoveLeft,
    Command::MoveRight,
    Command::RotateClockwise,
    Command::RotateCounterClockwise,
    Command::SoftDrop,
    Command::HardDrop,
    Command::Pause,
    Command::Resume,
    Command::TogglePause,
];

fn any_kind() -> impl Strategy<Value = ShapeKind> {
    prop::sample::select(ShapeKind::ALL_PIECES.to_vec())
}

fn turned(kind: ShapeKind, turns: &[bool]) -> ActivePiece {
    turns.iter().fold(ActivePiece::new(kind), |piece, &cw| {
        piece.rotated(if cw {
            RotationDirection::Clockwise
        } else {
            RotationDirection::CounterClockwise
        })
    })
}

proptest! {
    #[test]
    fn reverse_turn_restores_piece(
        kind in any_kind(),
        turns in prop::collection::vec(any::<bool>(), 0..8),
        clockwise in any::<bool>(),
    ) {
        let piece = turned(kind, &turns);
        let direction = if clockwise {
            RotationDirection::Clockwise
        } else {
            RotationDirection::CounterClockwise
        };
        prop_assert_eq!(piece.rotated(direction).rotated(direction.reversed()), piece);
    }

    #[test]
    fn try_set_piece_commits_or_changes_nothing(
        kind in any_kind(),
        turns in prop::collection::vec(any::<bool>(), 0..4),
        x in -3i8..13,
        y in -3i8..25,
        blocks in prop::collection::vec((0i8..10, 0i8..18), 0..30),
    ) {
        let mut board = Board::new(ScriptedShapes::new(vec![ShapeKind::Square]), ());
        board.start();
        for &(bx, by) in &blocks {
            board.set_cell(bx, by, ShapeKind::Z);
        }

        let piece = turned(kind, &turns);
        let fits = piece
            .absolute_cells((x, y))
            .iter()
            .all(|&(cx, cy)| board.get(cx, cy) == Some(ShapeKind::Empty));
        let before = board.snapshot();

        let placed = board.try_set_piece(piece, x, y);
        prop_assert_eq!(placed, fits);
        if placed {
            prop_assert_eq!(board.active_piece(), piece);
            prop_assert_eq!(board.pivot(), (x, y));
        } else {
            prop_assert_eq!(board.snapshot(), before);
        }
        // Locked cells are never touched by a placement.
        prop_assert_eq!(board.grid().cells().to_vec(), before.cells.concat());
    }

    #[test]
    fn random_play_keeps_board_consistent(
        seed in any::<u32>(),
        script in prop::collection::vec((0usize..COMMANDS.len(), any::<bool>()), 1..300),
    ) {
        let mut board: Board<UniformShapes, ()> = Board::seeded(seed);
        board.start();
        let mut score = 0;
        let mut lines = 0;

        for (idx, tick) in script {
            board.apply(COMMANDS[idx]);
            if tick {
                board.tick();
            }

            prop_assert_eq!(
                board.grid().cells().len(),
                BOARD_WIDTH as usize * BOARD_HEIGHT as usize
            );
            prop_assert!(board.current_score() >= score);
            prop_assert!(board.lines_cleared() >= lines);
            // One point per row by default.
            prop_assert_eq!(board.current_score(), board.lines_cleared());
            score = board.current_score();
            lines = board.lines_cleared();

            if let Some(cells) = board.active_piece_cells() {
                for (cx, cy) in cells {
                    prop_assert_eq!(board.get(cx, cy), Some(ShapeKind::Empty));
                }
            }
            if board.is_game_over() {
                prop_assert_eq!(board.active_piece_kind(), ShapeKind::Empty);
                break;
            }
        }
    }
}
