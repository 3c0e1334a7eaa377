//! Validated quarter-turn application.
//!
//! The public entry point is pure: it borrows the input state, validates
//! the move against the state's order, and returns a rotated clone. The
//! crate-internal [`apply_move_unchecked`] skips re-validation for callers
//! that already draw their moves from [`crate::moves::generate_legal_moves`]
//! and own the state they mutate, which is every search hot loop.

use crate::error::Error;
use crate::moves::Move;
use crate::state::CubeState;
use crate::types::is_valid_coord;

/// Applies one quarter turn and returns the resulting state.
///
/// Every piece whose coordinate on the move's axis equals the move's slice
/// rotates about that axis: its position maps under the exact signed
/// integer quarter turn and its orientation entries shift one step around
/// the matching 4-cycle of directions. Pieces outside the slice are
/// untouched. Fails with [`Error::SliceOutOfRange`] when the slice is not a
/// lattice coordinate of this order.
pub fn apply_move(state: &CubeState, mv: Move) -> Result<CubeState, Error> {
    if !is_valid_coord(state.order(), mv.slice) {
        return Err(Error::SliceOutOfRange {
            order: state.order(),
            slice: mv.slice,
        });
    }
    let mut next = state.clone();
    apply_move_unchecked(&mut next, mv);
    Ok(next)
}

/// In-place rotation with no slice validation. Callers must pass a move
/// whose slice exists for `state.order()`.
pub(crate) fn apply_move_unchecked(state: &mut CubeState, mv: Move) {
    let axis = mv.axis.index();
    for piece in state.pieces_mut() {
        if piece.pos()[axis] == mv.slice {
            piece.rotate(mv.axis, mv.dir);
        }
    }
}

/// Replays `moves` in order on a clone of `state`.
pub fn apply_all(state: &CubeState, moves: &[Move]) -> Result<CubeState, Error> {
    let mut current = state.clone();
    for mv in moves {
        current = apply_move(&current, *mv)?;
    }
    Ok(current)
}
