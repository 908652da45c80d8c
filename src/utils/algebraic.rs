//! Position conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and one-based
//! `Position`s. Column 1 is file `a`, row 1 is rank `1`.

use crate::board_state::position::Position;
use crate::chess_errors::{ChessErrors, ChessResult};

/// Convert algebraic notation (for example: "e4") to a position.
#[inline]
pub fn algebraic_to_position(square: &str) -> ChessResult<Position> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicSquare(square.to_owned()));
    }

    Ok(Position::new((rank - b'0') as i8, (file - b'a') as i8 + 1))
}

/// Convert an on-board position to algebraic notation (for example: "e4").
#[inline]
pub fn position_to_algebraic(position: Position) -> ChessResult<String> {
    if !position.is_on_board() {
        return Err(ChessErrors::PositionOutOfRange(position));
    }

    let file_char = char::from(b'a' + (position.column() - 1) as u8);
    let rank_char = char::from(b'0' + position.row() as u8);

    Ok(format!("{file_char}{rank_char}"))
}
