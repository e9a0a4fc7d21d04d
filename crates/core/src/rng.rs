//! RNG module - injectable piece randomizers
//!
//! The board never constructs its own randomness. Its creator hands it a
//! [`PieceSource`]: [`UniformShapes`] draws uniformly over the seven kinds from a
//! seeded LCG, and [`ScriptedShapes`] replays a fixed sequence for tests and
//! deterministic replays.

use crate::types::ShapeKind;

/// Supplies the kind of every spawned piece.
///
/// Implementations must only return one of [`ShapeKind::ALL_PIECES`].
pub trait PieceSource {
    fn next_kind(&mut self) -> ShapeKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of a power-of-two LCG cycle quickly; use the high half.
        (self.next_u32() >> 16) % max
    }

    /// Current state (seed this to replay the sequence from here)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform choice over the seven piece kinds
#[derive(Debug, Clone)]
pub struct UniformShapes {
    rng: SimpleRng,
}

impl UniformShapes {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for UniformShapes {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for UniformShapes {
    fn next_kind(&mut self) -> ShapeKind {
        let idx = self.rng.next_range(ShapeKind::ALL_PIECES.len() as u32) as usize;
        ShapeKind::ALL_PIECES[idx]
    }
}

/// Replays a fixed sequence of kinds, cycling when it runs out.
///
/// `Empty` entries are skipped; an empty or all-`Empty` script falls back to
/// `Line`.
#[derive(Debug, Clone)]
pub struct ScriptedShapes {
    script: Vec<ShapeKind>,
    pos: usize,
}

impl ScriptedShapes {
    pub fn new(script: Vec<ShapeKind>) -> Self {
        let script: Vec<ShapeKind> = script.into_iter().filter(|k| !k.is_empty()).collect();
        Self { script, pos: 0 }
    }

    /// Number of kinds handed out so far
    pub fn drawn(&self) -> usize {
        self.pos
    }
}

impl PieceSource for ScriptedShapes {
    fn next_kind(&mut self) -> ShapeKind {
        if self.script.is_empty() {
            return ShapeKind::Line;
        }
        let kind = self.script[self.pos % self.script.len()];
        self.pos += 1;
        kind
    }
}

impl<P: PieceSource + ?Sized> PieceSource for Box<P> {
    fn next_kind(&mut self) -> ShapeKind {
        (**self).next_kind()
    }
}
