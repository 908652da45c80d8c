//! Pseudo-legal rook, bishop and queen move generation.
//!
//! Each direction is walked one square at a time from the origin. Empty
//! squares are added and the walk continues; an enemy square is added as a
//! capture and ends the walk; an own piece or the board edge ends the walk
//! without adding anything.

use crate::board_state::board::Board;
use crate::board_state::chess_types::Color;
use crate::board_state::position::Position;
use crate::move_generation::square_status::{square_status, SquareStatus};
use crate::moves::chess_move::ChessMove;
use crate::moves::move_offsets::{Offset, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

pub fn generate_rook_moves(
    board: &Board,
    from: Position,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    generate_sliding_moves(board, from, color, &ROOK_DIRECTIONS, out);
}

pub fn generate_bishop_moves(
    board: &Board,
    from: Position,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    generate_sliding_moves(board, from, color, &BISHOP_DIRECTIONS, out);
}

pub fn generate_queen_moves(
    board: &Board,
    from: Position,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    generate_sliding_moves(board, from, color, &QUEEN_DIRECTIONS, out);
}

fn generate_sliding_moves(
    board: &Board,
    from: Position,
    color: Color,
    directions: &[Offset],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_column) in directions {
        trace_ray(board, from, color, d_row, d_column, out);
    }
}

fn trace_ray(
    board: &Board,
    from: Position,
    color: Color,
    d_row: i8,
    d_column: i8,
    out: &mut Vec<ChessMove>,
) {
    let mut to = from.offset(d_row, d_column);

    loop {
        match square_status(board, to, color) {
            SquareStatus::Empty => out.push(ChessMove::new(from, to, None)),
            SquareStatus::Enemy => {
                out.push(ChessMove::new(from, to, None));
                break;
            }
            SquareStatus::Blocked => break,
        }
        to = to.offset(d_row, d_column);
    }
}
