//! Direction and offset tables for every piece type.
//!
//! Each entry is a `(d_row, d_column)` step. Sliding pieces repeat their
//! steps until blocked; the king and knight apply each offset once. The
//! table order fixes the order in which generated moves are emitted.

pub type Offset = (i8, i8);

pub const ROOK_DIRECTIONS: [Offset; 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

pub const BISHOP_DIRECTIONS: [Offset; 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

pub const QUEEN_DIRECTIONS: [Offset; 8] = concat_directions(ROOK_DIRECTIONS, BISHOP_DIRECTIONS);

pub const KING_OFFSETS: [Offset; 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
];

pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
];

const fn concat_directions(straight: [Offset; 4], diagonal: [Offset; 4]) -> [Offset; 8] {
    let mut table = [(0, 0); 8];
    let mut i = 0usize;

    while i < 4 {
        table[i] = straight[i];
        table[i + 4] = diagonal[i];
        i += 1;
    }

    table
}
