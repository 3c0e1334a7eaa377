//! Canonical state encoding for search deduplication.
//!
//! Two states encode to the same [`StateKey`] iff every piece has the same
//! position and the same orientation entries. The key is an exact byte
//! transcription rather than a hash, so equality of keys is equality of
//! content and the seen-set can never drop a state to a collision.

use crate::piece::Piece;
use crate::state::CubeState;
use crate::types::Face;

/// Bytes per piece: id, three position coordinates, six orientation slots.
const TOKEN_LEN: usize = 10;

/// Canonical content key of one [`CubeState`]. Opaque; meaningful only to
/// compare and hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey(Box<[u8]>);

impl StateKey {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Encodes `state` into its canonical key.
///
/// Pieces are serialized in id order regardless of how the state stores
/// them, behind a leading order byte so keys of different orders can never
/// compare equal by accident.
pub fn encode(state: &CubeState) -> StateKey {
    let mut by_id: Vec<&Piece> = state.pieces().iter().collect();
    by_id.sort_unstable_by_key(|p| p.id());

    let mut buf = Vec::with_capacity(1 + by_id.len() * TOKEN_LEN);
    buf.push(state.order());
    for piece in by_id {
        buf.push(piece.id());
        for c in piece.pos() {
            #[allow(clippy::cast_sign_loss)]
            buf.push(c as u8);
        }
        for face in Face::ALL {
            let slot = match piece.sticker(face) {
                None => 0,
                #[allow(clippy::cast_possible_truncation)]
                Some(color) => color.index() as u8 + 1,
            };
            buf.push(slot);
        }
    }
    StateKey(buf.into_boxed_slice())
}
