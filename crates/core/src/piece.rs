//! Piece module - the currently falling tetromino
//!
//! An [`ActivePiece`] is a kind plus four offsets. Rotation never mutates a
//! piece in place: it returns a new piece the board may or may not accept.
//! There are no wall kicks; a rotation yields only the rotated offsets.

use crate::shapes::{self, PieceShape};
use crate::types::{Coord, RotationDirection, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    kind: ShapeKind,
    offsets: PieceShape,
}

impl ActivePiece {
    /// Create a piece in its spawn orientation
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            offsets: shapes::offsets_for(kind),
        }
    }

    /// The "no active piece" placeholder
    pub fn empty() -> Self {
        Self::new(ShapeKind::Empty)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn offsets(&self) -> &PieceShape {
        &self.offsets
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_empty()
    }

    /// Quarter turn clockwise: `(dx, dy) -> (-dy, dx)`.
    ///
    /// The square comes back unchanged; its cell set is rotation-invariant.
    pub fn rotate_clockwise(&self) -> Self {
        self.map_offsets(|(dx, dy)| (-dy, dx))
    }

    /// Quarter turn counter-clockwise: `(dx, dy) -> (dy, -dx)`.
    pub fn rotate_counter_clockwise(&self) -> Self {
        self.map_offsets(|(dx, dy)| (dy, -dx))
    }

    pub fn rotated(&self, direction: RotationDirection) -> Self {
        match direction {
            RotationDirection::Clockwise => self.rotate_clockwise(),
            RotationDirection::CounterClockwise => self.rotate_counter_clockwise(),
        }
    }

    fn map_offsets(&self, f: impl Fn((i8, i8)) -> (i8, i8)) -> Self {
        if self.kind == ShapeKind::Square {
            return *self;
        }
        let mut offsets = self.offsets;
        for offset in &mut offsets {
            *offset = f(*offset);
        }
        Self {
            kind: self.kind,
            offsets,
        }
    }

    /// Board cells the piece covers when its pivot sits at `pivot`.
    ///
    /// Offsets grow down the board, so `dy` is subtracted from the pivot row.
    pub fn absolute_cells(&self, pivot: Coord) -> [Coord; 4] {
        let (px, py) = pivot;
        self.offsets.map(|(dx, dy)| (px + dx, py - dy))
    }

    /// Smallest `dy` among the offsets.
    ///
    /// Spawning at row `(height - 1) + min_offset_y()` puts the piece's top cell
    /// on the top row.
    pub fn min_offset_y(&self) -> i8 {
        shapes::min_offset_y(&self.offsets)
    }
}

impl Default for ActivePiece {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::normalized;

    #[test]
    fn test_new_copies_table_offsets() {
        let piece = ActivePiece::new(ShapeKind::T);
        assert_eq!(piece.kind(), ShapeKind::T);
        assert_eq!(*piece.offsets(), [(-1, 0), (0, 0), (1, 0), (0, 1)]);
    }

    #[test]
    fn test_clockwise_formula() {
        let piece = ActivePiece::new(ShapeKind::Line).rotate_clockwise();
        assert_eq!(*piece.offsets(), [(1, 0), (0, 0), (-1, 0), (-2, 0)]);
    }

    #[test]
    fn test_counter_clockwise_formula() {
        let piece = ActivePiece::new(ShapeKind::Line).rotate_counter_clockwise();
        assert_eq!(*piece.offsets(), [(-1, 0), (0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn test_square_rotation_is_identity() {
        let square = ActivePiece::new(ShapeKind::Square);
        assert_eq!(square.rotate_clockwise(), square);
        assert_eq!(square.rotate_counter_clockwise(), square);
    }

    #[test]
    fn test_four_turns_restore_offsets() {
        for kind in ShapeKind::ALL_PIECES {
            let piece = ActivePiece::new(kind);
            let spun = piece
                .rotate_clockwise()
                .rotate_clockwise()
                .rotate_clockwise()
                .rotate_clockwise();
            assert_eq!(spun, piece, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotation_keeps_kind_and_cell_count() {
        let piece = ActivePiece::new(ShapeKind::Z).rotated(RotationDirection::Clockwise);
        assert_eq!(piece.kind(), ShapeKind::Z);
        let cells = normalized(piece.offsets());
        assert!(cells.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn test_absolute_cells_subtract_dy() {
        let piece = ActivePiece::new(ShapeKind::Line);
        assert_eq!(
            piece.absolute_cells((6, 20)),
            [(6, 21), (6, 20), (6, 19), (6, 18)]
        );
    }

    #[test]
    fn test_empty_piece() {
        let piece = ActivePiece::empty();
        assert!(piece.is_empty());
        assert_eq!(piece.absolute_cells((3, 4)), [(3, 4); 4]);
        assert_eq!(piece.min_offset_y(), 0);
    }
}
