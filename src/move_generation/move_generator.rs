//! Pseudo-legal move generation entry points.
//!
//! Reads the piece on a square and dispatches to the sliding, stepping or
//! pawn generator for its type. Generation only reads the board. Moves that
//! leave the mover's king in check are not filtered; that belongs to a
//! legality layer implementing `MoveGenerator` on top of this one.

use log::{debug, trace};

use crate::board_state::board::Board;
use crate::board_state::chess_types::{Color, Piece, PieceType};
use crate::board_state::position::Position;
use crate::chess_errors::{ChessErrors, ChessResult};
use crate::move_generation::pawn_moves::generate_pawn_moves;
use crate::move_generation::sliding_moves::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};
use crate::move_generation::stepping_moves::{generate_king_moves, generate_knight_moves};
use crate::moves::chess_move::ChessMove;

pub trait MoveGenerator {
    /// Moves for the piece standing on `position`.
    ///
    /// Fails with `NoPieceAtPosition` for an empty square and
    /// `PositionOutOfRange` for a square off the board.
    fn piece_moves(&self, board: &Board, position: Position) -> ChessResult<Vec<ChessMove>>;

    /// Moves for every piece of `color`, in row-major order of their squares.
    fn moves_for_color(&self, board: &Board, color: Color) -> ChessResult<Vec<ChessMove>> {
        let mut out = Vec::new();
        for (position, piece) in board.pieces() {
            if piece.color() == color {
                out.extend(self.piece_moves(board, position)?);
            }
        }
        Ok(out)
    }
}

/// Geometry and occupancy only; king safety is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn piece_moves(&self, board: &Board, position: Position) -> ChessResult<Vec<ChessMove>> {
        let Some(piece) = board.get_piece(position)? else {
            debug!("move generation requested for empty square {position}");
            return Err(ChessErrors::NoPieceAtPosition(position));
        };
        moves_for_piece(board, position, piece)
    }
}

#[inline]
pub fn piece_moves(board: &Board, position: Position) -> ChessResult<Vec<ChessMove>> {
    PseudoLegalMoveGenerator.piece_moves(board, position)
}

/// Moves `piece` would have standing on `position`. The square itself is not
/// read, so the piece need not actually be on the board.
pub fn moves_for_piece(
    board: &Board,
    position: Position,
    piece: Piece,
) -> ChessResult<Vec<ChessMove>> {
    if !position.is_on_board() {
        return Err(ChessErrors::PositionOutOfRange(position));
    }

    let color = piece.color();
    let mut out = Vec::with_capacity(32);

    match piece.piece_type() {
        PieceType::King => generate_king_moves(board, position, color, &mut out),
        PieceType::Queen => generate_queen_moves(board, position, color, &mut out),
        PieceType::Bishop => generate_bishop_moves(board, position, color, &mut out),
        PieceType::Knight => generate_knight_moves(board, position, color, &mut out),
        PieceType::Rook => generate_rook_moves(board, position, color, &mut out),
        PieceType::Pawn => generate_pawn_moves(board, position, color, &mut out),
    }

    trace!("{piece} at {position}: {} pseudo-legal moves", out.len());
    Ok(out)
}
