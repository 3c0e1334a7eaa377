//! Quarter-turn moves and legal-move generation.
//!
//! Text notation is `axis:slice:dir` where `axis` is `x`/`y`/`z`, `slice`
//! is the layer coordinate in true lattice units (halves allowed, so a 2×2
//! layer reads `0.5` or `-0.5`), and `dir` is `+` (clockwise looking down
//! the positive axis) or `-`. Internally slices are stored doubled, like
//! every other coordinate in the crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::{coord_values, Axis, Spin};

/// One quarter turn of one slice. `slice` is a doubled coordinate and must
/// be a value that exists for the cube's order; [`crate::engine::apply`]
/// rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub axis: Axis,
    pub slice: i8,
    pub dir: Spin,
}

impl Move {
    #[inline]
    pub fn new(axis: Axis, slice: i8, dir: Spin) -> Self {
        Self { axis, slice, dir }
    }

    /// The move that undoes this one: same layer, opposite spin.
    #[inline]
    pub fn inverse(self) -> Self {
        Self {
            dir: self.dir.flip(),
            ..self
        }
    }

    #[inline]
    pub fn is_inverse_of(self, other: Move) -> bool {
        self.axis == other.axis && self.slice == other.slice && self.dir == other.dir.flip()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.slice < 0 { "-" } else { "" };
        let halves = self.slice.unsigned_abs();
        if halves % 2 == 0 {
            write!(f, "{}:{}{}:{}", self.axis.letter(), sign, halves / 2, self.dir)
        } else {
            write!(
                f,
                "{}:{}{}.5:{}",
                self.axis.letter(),
                sign,
                halves / 2,
                self.dir
            )
        }
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let bad = || Error::MoveFormat {
            text: s.to_string(),
        };
        let mut parts = s.split(':');
        let axis = parts.next().ok_or_else(bad)?;
        let slice = parts.next().ok_or_else(bad)?;
        let dir = parts.next().ok_or_else(bad)?;
        if parts.next().is_some() {
            return Err(bad());
        }
        let axis = match axis {
            "x" | "X" => Axis::X,
            "y" | "Y" => Axis::Y,
            "z" | "Z" => Axis::Z,
            _ => return Err(bad()),
        };
        let dir = match dir {
            "+" => Spin::Cw,
            "-" => Spin::Ccw,
            _ => return Err(bad()),
        };
        let slice = parse_slice(slice).ok_or_else(bad)?;
        Ok(Move { axis, slice, dir })
    }
}

/// Parses a true-unit slice coordinate (`1`, `-2`, `0.5`, `-1.5`) into its
/// doubled value. Returns `None` for anything else.
fn parse_slice(text: &str) -> Option<i8> {
    let (neg, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (int_part, half) = match rest.split_once('.') {
        Some((i, "5")) => (i, true),
        Some((i, "0")) => (i, false),
        Some(_) => return None,
        None => (rest, false),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let units: i16 = int_part.parse().ok()?;
    let doubled = units.checked_mul(2)? + i16::from(half);
    let doubled = if neg { -doubled } else { doubled };
    i8::try_from(doubled).ok()
}

/// Every legal quarter turn for a cube of the given order, in a fixed
/// deterministic order: axes X, Y, Z; slices ascending; `+` before `-`.
///
/// For odd orders the exact-center slice is omitted. That is sound while
/// same-face center stickers are interchangeable (true through 4×4, and for
/// the 5×5 face centers this model actually tracks), but a model that
/// distinguishes individual center positions would need the inner slices
/// restored here.
pub fn generate_legal_moves(order: u8) -> Vec<Move> {
    let mut out = Vec::new();
    for axis in Axis::all() {
        for slice in coord_values(order) {
            if slice == 0 {
                continue;
            }
            out.push(Move::new(axis, slice, Spin::Cw));
            out.push(Move::new(axis, slice, Spin::Ccw));
        }
    }
    out
}

/// Copies `moves` minus the exact inverse of `last`. This is the only
/// pruning the blind searches apply; it cannot skip a state that is not
/// reachable by some other same-length path through the remaining moves.
pub fn filter_moves(moves: &[Move], last: Option<Move>) -> Vec<Move> {
    moves
        .iter()
        .copied()
        .filter(|m| !last.is_some_and(|prev| m.is_inverse_of(prev)))
        .collect()
}
