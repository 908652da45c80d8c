//! Pseudo-legal king and knight move generation.
//!
//! Each fixed offset yields at most one move: the target must be on the board
//! and not hold one of the mover's own pieces. Castling is not generated.

use crate::board_state::board::Board;
use crate::board_state::chess_types::Color;
use crate::board_state::position::Position;
use crate::move_generation::square_status::{square_status, SquareStatus};
use crate::moves::chess_move::ChessMove;
use crate::moves::move_offsets::{Offset, KING_OFFSETS, KNIGHT_OFFSETS};

pub fn generate_king_moves(
    board: &Board,
    from: Position,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    generate_stepping_moves(board, from, color, &KING_OFFSETS, out);
}

pub fn generate_knight_moves(
    board: &Board,
    from: Position,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    generate_stepping_moves(board, from, color, &KNIGHT_OFFSETS, out);
}

fn generate_stepping_moves(
    board: &Board,
    from: Position,
    color: Color,
    offsets: &[Offset],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_column) in offsets {
        let to = from.offset(d_row, d_column);
        if square_status(board, to, color) != SquareStatus::Blocked {
            out.push(ChessMove::new(from, to, None));
        }
    }
}
