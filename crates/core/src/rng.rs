//! RNG module - uniform random piece selection
//!
//! Every spawn draws one of the seven kinds with equal probability; there is
//! no bag. The generator is a small LCG so a seed reproduces a whole game.

use crate::types::ShapeKind;

/// Anything that can hand out the next kind to spawn.
///
/// The session only ever talks to this trait, so tests can script the
/// exact piece order.
pub trait KindSource {
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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 16) % max
    }
}

impl KindSource for SimpleRng {
    fn next_kind(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.next_range(ShapeKind::ALL.len() as u32) as usize]
    }
}

/// Replays a fixed sequence of kinds, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedKinds {
    kinds: Vec<ShapeKind>,
    next: usize,
}

impl ScriptedKinds {
    pub fn new(kinds: impl Into<Vec<ShapeKind>>) -> Self {
        let kinds = kinds.into();
        assert!(!kinds.is_empty(), "scripted kind list must not be empty");
        Self { kinds, next: 0 }
    }
}

impl KindSource for ScriptedKinds {
    fn next_kind(&mut self) -> ShapeKind {
        let kind = self.kinds[self.next % self.kinds.len()];
        self.next += 1;
        kind
    }
}
