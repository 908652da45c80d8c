use crate::board_state::chess_types::PieceType;
use crate::chess_errors::{ChessErrors, ChessResult};
use crate::moves::chess_move::ChessMove;
use crate::utils::algebraic::{algebraic_to_position, position_to_algebraic};

/// Formats a move as long algebraic text, e.g. `e2e4` or `e7e8q`.
pub fn move_to_long_algebraic(mv: ChessMove) -> ChessResult<String> {
    let mut out = String::with_capacity(5);
    out.push_str(&position_to_algebraic(mv.start())?);
    out.push_str(&position_to_algebraic(mv.end())?);

    if let Some(promotion) = mv.promotion_piece() {
        out.push(promotion_to_char(promotion)?);
    }

    Ok(out)
}

/// Parses long algebraic text. Only the coordinates and promotion suffix are
/// checked; whether the move is possible on some board is not.
pub fn long_algebraic_to_move(long_algebraic: &str) -> ChessResult<ChessMove> {
    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(ChessErrors::InvalidLongAlgebraicMove(long_algebraic.to_owned()));
    }

    let start = algebraic_to_position(&long_algebraic[0..2])?;
    let end = algebraic_to_position(&long_algebraic[2..4])?;
    let promotion = long_algebraic[4..]
        .chars()
        .next()
        .map(promotion_from_char)
        .transpose()?;

    Ok(ChessMove::new(start, end, promotion))
}

fn promotion_to_char(piece_type: PieceType) -> ChessResult<char> {
    match piece_type {
        PieceType::Queen => Ok('q'),
        PieceType::Rook => Ok('r'),
        PieceType::Bishop => Ok('b'),
        PieceType::Knight => Ok('n'),
        PieceType::King => Err(ChessErrors::InvalidPromotionPiece('k')),
        PieceType::Pawn => Err(ChessErrors::InvalidPromotionPiece('p')),
    }
}

fn promotion_from_char(ch: char) -> ChessResult<PieceType> {
    match ch.to_ascii_lowercase() {
        'q' => Ok(PieceType::Queen),
        'r' => Ok(PieceType::Rook),
        'b' => Ok(PieceType::Bishop),
        'n' => Ok(PieceType::Knight),
        _ => Err(ChessErrors::InvalidPromotionPiece(ch)),
    }
}
