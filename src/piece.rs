use crate::types::{lattice_origin, rotate_pos, shell, solved_color, Axis, Color, Face, Spin};

/// One sub-cube. Identity is the immutable `id` (its original lattice
/// slot); position and orientation change under quarter turns.
///
/// `faces` holds, for each world direction the piece currently occupies on
/// the outer shell, the original face color now pointing that way. Interior
/// directions carry `None`. The multiset of colors is fixed at construction
/// and only ever permuted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    id: u8,
    pos: [i8; 3],
    faces: [Option<Color>; 6],
}

impl Piece {
    /// Piece in its solved slot for a cube of the given order: boundary
    /// directions get the canonical color, everything else stays bare.
    pub(crate) fn solved(order: u8, id: u8) -> Self {
        let pos = lattice_origin(order, id);
        let shell = shell(order);
        let mut faces = [None; 6];
        for face in Face::ALL {
            if pos[face.axis().index()] == shell * face.sign() {
                faces[face.index()] = Some(solved_color(face));
            }
        }
        Self { id, pos, faces }
    }

    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Current doubled-lattice position.
    #[inline]
    pub fn pos(&self) -> [i8; 3] {
        self.pos
    }

    /// Color currently showing toward `face`, if this piece is on the outer
    /// shell in that direction.
    #[inline]
    pub fn sticker(&self, face: Face) -> Option<Color> {
        self.faces[face.index()]
    }

    /// All `(direction, color)` pairs this piece currently shows.
    pub fn stickers(&self) -> impl Iterator<Item = (Face, Color)> + '_ {
        Face::ALL
            .into_iter()
            .filter_map(|f| self.faces[f.index()].map(|c| (f, c)))
    }

    /// Home position for this piece on a cube of the given order.
    #[inline]
    pub fn origin(&self, order: u8) -> [i8; 3] {
        lattice_origin(order, self.id)
    }

    /// True iff the piece sits in its home slot with every sticker showing
    /// its solved color.
    pub(crate) fn is_home(&self, order: u8) -> bool {
        self.pos == self.origin(order)
            && Face::ALL
                .into_iter()
                .all(|f| match self.faces[f.index()] {
                    Some(c) => c == solved_color(f),
                    None => true,
                })
    }

    /// Quarter-turn this piece about `axis`: position mapped by the exact
    /// integer rotation, orientation entries 4-cycled across the
    /// perpendicular directions. Keeps the entries-on-boundary invariant
    /// because both maps are the same rotation.
    pub(crate) fn rotate(&mut self, axis: Axis, dir: Spin) {
        self.pos = rotate_pos(self.pos, axis, dir);
        let mut rotated = [None; 6];
        for face in Face::ALL {
            if let Some(color) = self.faces[face.index()] {
                rotated[face.rotated(axis, dir).index()] = Some(color);
            }
        }
        self.faces = rotated;
    }
}
