//! Canonical chess-rule constants.
//!
//! Static rule data shared by the board and the move generators: board
//! dimensions, the back-rank layout, pawn geometry, and promotion choices.

use crate::board_state::chess_types::{Color, PieceType};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// Back-rank piece order from column 1 to column 8.
pub const BACK_RANK_LAYOUT: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Pieces a pawn may promote to, in the order promotion moves are emitted.
pub const PROMOTION_TYPES: [PieceType; 4] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
];

/// Row offset of a single pawn step. Rows increase toward Black's back rank.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

#[inline]
pub const fn back_rank_row(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => BOARD_SIZE,
    }
}

/// Row pawns start on, and the only row a double step is allowed from.
#[inline]
pub const fn pawn_start_row(color: Color) -> i8 {
    match color {
        Color::White => 2,
        Color::Black => BOARD_SIZE - 1,
    }
}

#[inline]
pub const fn promotion_row(color: Color) -> i8 {
    back_rank_row(color.opposite())
}
