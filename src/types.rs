use std::fmt;

use serde::{Deserialize, Serialize};

/// Rotation axis of a quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    pub fn all() -> [Axis; 3] {
        [Axis::X, Axis::Y, Axis::Z]
    }

    /// Index into `[i8; 3]` position arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    #[inline]
    pub fn letter(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }
}

/// Sense of a quarter turn, viewed from the positive end of its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spin {
    Cw,
    Ccw,
}

impl Spin {
    #[inline]
    pub fn flip(self) -> Spin {
        match self {
            Spin::Cw => Spin::Ccw,
            Spin::Ccw => Spin::Cw,
        }
    }
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Spin::Cw => "+",
            Spin::Ccw => "-",
        })
    }
}

/// The six fixed world-relative directions a sticker can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosX,
        Face::NegX,
        Face::PosY,
        Face::NegY,
        Face::PosZ,
        Face::NegZ,
    ];

    /// Index into `[Option<Color>; 6]` orientation arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Face::PosX => 0,
            Face::NegX => 1,
            Face::PosY => 2,
            Face::NegY => 3,
            Face::PosZ => 4,
            Face::NegZ => 5,
        }
    }

    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Face::PosX | Face::NegX => Axis::X,
            Face::PosY | Face::NegY => Axis::Y,
            Face::PosZ | Face::NegZ => Axis::Z,
        }
    }

    /// +1 for the positive end of the axis, -1 for the negative end.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Face::PosX | Face::PosY | Face::PosZ => 1,
            Face::NegX | Face::NegY | Face::NegZ => -1,
        }
    }

    #[inline]
    pub fn opposite(self) -> Face {
        match self {
            Face::PosX => Face::NegX,
            Face::NegX => Face::PosX,
            Face::PosY => Face::NegY,
            Face::NegY => Face::PosY,
            Face::PosZ => Face::NegZ,
            Face::NegZ => Face::PosZ,
        }
    }

    /// Image of this direction under a signed quarter turn about `axis`.
    ///
    /// Directions on the turn axis map to themselves; the other four form a
    /// 4-cycle whose sense matches [`rotate_pos`]: a sticker facing `f` on a
    /// piece at `p` faces `f.rotated(..)` once the piece sits at
    /// `rotate_pos(p, ..)`.
    #[inline]
    pub fn rotated(self, axis: Axis, dir: Spin) -> Face {
        let cycle: [Face; 4] = match axis {
            Axis::X => [Face::PosY, Face::PosZ, Face::NegY, Face::NegZ],
            Axis::Y => [Face::PosZ, Face::PosX, Face::NegZ, Face::NegX],
            Axis::Z => [Face::PosX, Face::PosY, Face::NegX, Face::NegY],
        };
        let Some(i) = cycle.iter().position(|f| *f == self) else {
            return self; // on the turn axis
        };
        let j = match dir {
            Spin::Cw => (i + 1) % 4,
            Spin::Ccw => (i + 3) % 4,
        };
        cycle[j]
    }

    /// Unit position vector of this direction.
    #[inline]
    pub fn unit(self) -> [i8; 3] {
        let mut v = [0i8; 3];
        v[self.axis().index()] = self.sign();
        v
    }
}

/// Solid sticker colors in the canonical arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Green,
    Blue,
}

impl Color {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Yellow => 1,
            Color::Red => 2,
            Color::Orange => 3,
            Color::Green => 4,
            Color::Blue => 5,
        }
    }

    #[inline]
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }
}

/// Color a direction shows in the solved state: White up, Green front,
/// Red right, and their opposites.
#[inline]
pub fn solved_color(face: Face) -> Color {
    match face {
        Face::PosY => Color::White,
        Face::NegY => Color::Yellow,
        Face::PosX => Color::Red,
        Face::NegX => Color::Orange,
        Face::PosZ => Color::Green,
        Face::NegZ => Color::Blue,
    }
}

/// Cosmetic build variant. Mirror builds render differently but share move
/// and solve semantics with normal builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Normal,
    Mirror,
}

pub const MIN_ORDER: u8 = 2;
pub const MAX_ORDER: u8 = 5;

/// Doubled-lattice coordinate values for one axis, ascending.
///
/// Coordinates are stored doubled so even orders stay integral: order 2 uses
/// {-1, +1}, order 3 uses {-2, 0, +2}, order 4 uses {-3, -1, +1, +3}. The
/// outer shell sits at `±(order - 1)`.
#[inline]
#[allow(clippy::cast_possible_truncation)] // |value| <= span < 2 * MAX_ORDER
pub fn coord_values(order: u8) -> impl Iterator<Item = i8> {
    let span = i16::from(order) - 1;
    (0..i16::from(order)).map(move |i| (2 * i - span) as i8)
}

/// True iff `c` is one of the doubled coordinate values for `order`.
#[inline]
pub fn is_valid_coord(order: u8, c: i8) -> bool {
    let span = i16::from(order) - 1;
    let c = i16::from(c);
    c.abs() <= span && (c + span) % 2 == 0
}

/// Doubled coordinate of the outer shell: a piece is on the boundary along
/// an axis iff its coordinate there is `±shell(order)`.
#[inline]
#[allow(clippy::cast_possible_wrap)]
pub fn shell(order: u8) -> i8 {
    (order.max(1) - 1) as i8
}

/// Original lattice position for piece `id` (ids enumerate x fastest, then
/// y, then z, matching construction order).
#[inline]
#[allow(clippy::cast_possible_truncation)] // |value| <= span < 2 * MAX_ORDER
pub fn lattice_origin(order: u8, id: u8) -> [i8; 3] {
    let n = u16::from(order);
    let i = u16::from(id);
    let span = i16::from(order) - 1;
    let comp = |k: u16| (2 * (k as i16) - span) as i8;
    [comp(i % n), comp((i / n) % n), comp(i / (n * n))]
}

/// Image of a doubled-lattice position under a signed quarter turn.
///
/// Exact integer permutation with sign flips; right-handed about the
/// positive axis for [`Spin::Cw`].
#[inline]
pub fn rotate_pos(p: [i8; 3], axis: Axis, dir: Spin) -> [i8; 3] {
    let [x, y, z] = p;
    match (axis, dir) {
        (Axis::X, Spin::Cw) => [x, -z, y],
        (Axis::X, Spin::Ccw) => [x, z, -y],
        (Axis::Y, Spin::Cw) => [z, y, -x],
        (Axis::Y, Spin::Ccw) => [-z, y, x],
        (Axis::Z, Spin::Cw) => [-y, x, z],
        (Axis::Z, Spin::Ccw) => [y, -x, z],
    }
}
