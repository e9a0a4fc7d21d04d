//! Shapes module - canonical tetromino geometry
//!
//! Every kind maps to exactly four offsets from its pivot. The mapping is a
//! `match` on the kind, so reordering [`ShapeKind`] cannot shift geometry.

use crate::types::{Offset, ShapeKind};

/// Shape of a piece - 4 cell offsets from the pivot
pub type PieceShape = [Offset; 4];

/// Get the spawn-orientation offsets for a kind.
///
/// `Empty` maps to four `(0, 0)` offsets.
pub fn offsets_for(kind: ShapeKind) -> PieceShape {
    match kind {
        ShapeKind::Empty => [(0, 0); 4],
        ShapeKind::Z => [(0, -1), (0, 0), (-1, 0), (-1, 1)],
        ShapeKind::S => [(0, -1), (0, 0), (1, 0), (1, 1)],
        ShapeKind::Line => [(0, -1), (0, 0), (0, 1), (0, 2)],
        ShapeKind::T => [(-1, 0), (0, 0), (1, 0), (0, 1)],
        ShapeKind::Square => [(0, 0), (1, 0), (0, 1), (1, 1)],
        ShapeKind::L => [(-1, -1), (0, -1), (0, 0), (0, 1)],
        ShapeKind::MirroredL => [(1, -1), (0, -1), (0, 0), (0, 1)],
    }
}

/// Smallest `dy` among the offsets
pub fn min_offset_y(shape: &PieceShape) -> i8 {
    shape.iter().map(|&(_, dy)| dy).min().unwrap_or(0)
}

/// Offsets sorted into a canonical order, for set comparisons.
pub fn normalized(shape: &PieceShape) -> PieceShape {
    let mut out = *shape;
    out.sort_unstable();
    out
}
