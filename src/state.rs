use serde::Serialize;

use crate::encode::{encode, StateKey};
use crate::error::Error;
use crate::piece::Piece;
use crate::types::{Color, Face, Variant, MAX_ORDER, MIN_ORDER};

/// Discrete state of every piece of one puzzle.
///
/// Constructed solved; subsequently mutated only through
/// [`crate::engine::apply::apply_move`] — directly on the authoritative
/// instance for scrambles and replay, or on disposable clones inside a
/// search. `Clone` yields an independent deep copy with no aliasing, which
/// is what lets every search branch mutate freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    order: u8,
    variant: Variant,
    pieces: Vec<Piece>,
}

impl CubeState {
    /// Solved cube of the given order. Orders outside
    /// [`MIN_ORDER`]..=[`MAX_ORDER`] are a configuration error.
    #[allow(clippy::cast_possible_truncation)] // order^3 <= 125
    pub fn new(order: u8, variant: Variant) -> Result<Self, Error> {
        if !(MIN_ORDER..=MAX_ORDER).contains(&order) {
            return Err(Error::UnsupportedOrder { order });
        }
        let count = usize::from(order).pow(3);
        let mut pieces = Vec::with_capacity(count);
        for id in 0..count {
            pieces.push(Piece::solved(order, id as u8));
        }
        Ok(Self {
            order,
            variant,
            pieces,
        })
    }

    #[inline]
    pub fn order(&self) -> u8 {
        self.order
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[inline]
    pub(crate) fn pieces_mut(&mut self) -> &mut [Piece] {
        &mut self.pieces
    }

    /// True iff every piece sits in its home slot with every sticker
    /// showing its solved color. Stricter than "looks solved": a whole-cube
    /// rotation leaves the colors uniform but moves pieces off their home
    /// slots and does not count.
    pub fn is_solved(&self) -> bool {
        self.pieces.iter().all(|p| p.is_home(self.order))
    }

    /// Canonical content key; see [`crate::encode`].
    #[inline]
    pub fn key(&self) -> StateKey {
        encode(self)
    }

    /// Read-only point query for renderer collaborators.
    pub fn piece_at(&self, pos: [i8; 3]) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.pos() == pos)
    }

    /// Sticker shown at grid direction `face` by the piece at `pos`, if any.
    pub fn sticker_at(&self, pos: [i8; 3], face: Face) -> Option<Color> {
        self.piece_at(pos).and_then(|p| p.sticker(face))
    }

    /// Render-facing snapshot: one view per piece, serializable, detached
    /// from the live state.
    pub fn snapshot(&self) -> Vec<PieceView> {
        self.pieces
            .iter()
            .map(|p| PieceView {
                id: p.id(),
                pos: p.pos(),
                stickers: p.stickers().collect(),
            })
            .collect()
    }
}

/// One piece as seen by a renderer: identity, doubled-lattice position, and
/// the stickers currently visible. Positions halve to true lattice units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceView {
    pub id: u8,
    pub pos: [i8; 3],
    pub stickers: Vec<(Face, Color)>,
}
