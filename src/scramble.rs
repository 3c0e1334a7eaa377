//! Deterministic scramble generation.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::engine::apply::apply_move_unchecked;
use crate::error::Error;
use crate::moves::{filter_moves, generate_legal_moves, Move};
use crate::state::CubeState;
use crate::types::{Variant, MAX_ORDER, MIN_ORDER};

/// Deterministic RNG factory for a given (seed, order) pair.
///
/// Derives a per-scramble 64-bit seed as `seed ^ (order << 56)` so the same
/// user seed gives unrelated scrambles on different orders, then feeds a
/// PCG 64-bit generator for reproducible sequences across runs.
#[inline]
fn rng_for_scramble(seed: u64, order: u8) -> impl Rng {
    let derived: u64 = seed ^ (u64::from(order) << 56);
    Pcg64::seed_from_u64(derived)
}

/// `len` random legal moves for the given order, reproducible per seed.
/// No move is the exact inverse of the one before it, so every scramble
/// needs its full length of turns to undo naively.
pub fn scramble_moves(order: u8, len: usize, seed: u64) -> Result<Vec<Move>, Error> {
    if !(MIN_ORDER..=MAX_ORDER).contains(&order) {
        return Err(Error::UnsupportedOrder { order });
    }
    let all = generate_legal_moves(order);
    let mut rng = rng_for_scramble(seed, order);
    let mut out = Vec::with_capacity(len);
    let mut last: Option<Move> = None;
    for _ in 0..len {
        let candidates = filter_moves(&all, last);
        let mv = candidates[rng.gen_range(0..candidates.len())];
        out.push(mv);
        last = Some(mv);
    }
    Ok(out)
}

/// Fresh solved cube scrambled by [`scramble_moves`]; returns the state and
/// the move list that produced it.
pub fn scramble_state(
    order: u8,
    variant: Variant,
    len: usize,
    seed: u64,
) -> Result<(CubeState, Vec<Move>), Error> {
    let moves = scramble_moves(order, len, seed)?;
    let mut state = CubeState::new(order, variant)?;
    for mv in &moves {
        apply_move_unchecked(&mut state, *mv);
    }
    Ok((state, moves))
}
