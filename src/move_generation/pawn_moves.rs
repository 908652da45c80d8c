//! Pseudo-legal pawn move generation.
//!
//! Single and double pushes onto empty squares, diagonal captures onto enemy
//! pieces, and promotion expansion on the farthest rank. En passant is not
//! generated.

use crate::board_state::board::Board;
use crate::board_state::chess_rules::{
    pawn_direction, pawn_start_row, promotion_row, PROMOTION_TYPES,
};
use crate::board_state::chess_types::Color;
use crate::board_state::position::Position;
use crate::move_generation::square_status::{square_status, SquareStatus};
use crate::moves::chess_move::ChessMove;

pub fn generate_pawn_moves(board: &Board, from: Position, color: Color, out: &mut Vec<ChessMove>) {
    let direction = pawn_direction(color);

    let one_step = from.offset(direction, 0);
    if square_status(board, one_step, color) == SquareStatus::Empty {
        push_pawn_move(from, one_step, color, out);

        if from.row() == pawn_start_row(color) {
            let two_step = from.offset(2 * direction, 0);
            if square_status(board, two_step, color) == SquareStatus::Empty {
                push_pawn_move(from, two_step, color, out);
            }
        }
    }

    for d_column in [-1, 1] {
        let to = from.offset(direction, d_column);
        if square_status(board, to, color) == SquareStatus::Enemy {
            push_pawn_move(from, to, color, out);
        }
    }
}

fn push_pawn_move(from: Position, to: Position, color: Color, out: &mut Vec<ChessMove>) {
    if to.row() == promotion_row(color) {
        for promotion in PROMOTION_TYPES {
            out.push(ChessMove::new(from, to, Some(promotion)));
        }
    } else {
        out.push(ChessMove::new(from, to, None));
    }
}
