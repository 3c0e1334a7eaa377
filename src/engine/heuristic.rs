//! Move-count estimate used to seed and grow IDA* thresholds.

use crate::state::CubeState;
use crate::types::solved_color;

/// Estimated moves to solve `state`.
///
/// Each misplaced piece contributes 1; each correctly-placed piece
/// contributes one per sticker showing the wrong color for its direction.
/// The sum is divided by 4 (one quarter turn touches at most a slice's
/// worth of pieces) and rounded up. Fast and cheap, but not a proven lower
/// bound, so searches treat it as ordering guidance rather than a
/// certificate: a threshold that prunes on it may skip an optimal line.
pub fn heuristic(state: &CubeState) -> u32 {
    let order = state.order();
    let mut raw: u32 = 0;
    for piece in state.pieces() {
        if piece.pos() != piece.origin(order) {
            raw += 1;
        } else {
            for (face, color) in piece.stickers() {
                if color != solved_color(face) {
                    raw += 1;
                }
            }
        }
    }
    raw.div_ceil(4)
}
