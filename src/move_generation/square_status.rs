use crate::board_state::board::Board;
use crate::board_state::chess_types::Color;
use crate::board_state::position::Position;

/// How a candidate destination looks from the mover's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareStatus {
    Empty,
    /// Occupied by the opponent; the square can be captured.
    Enemy,
    /// Occupied by the mover's own color, or off the board.
    Blocked,
}

#[inline]
pub fn square_status(board: &Board, position: Position, mover: Color) -> SquareStatus {
    if !position.is_on_board() {
        return SquareStatus::Blocked;
    }

    match board.get_piece(position) {
        Ok(None) => SquareStatus::Empty,
        Ok(Some(piece)) if piece.color() != mover => SquareStatus::Enemy,
        Ok(Some(_)) | Err(_) => SquareStatus::Blocked,
    }
}

#[cfg(test)]
mod tests {
    use super::{square_status, SquareStatus};
    use crate::board_state::board::Board;
    use crate::board_state::chess_types::{Color, Piece, PieceType};
    use crate::board_state::position::Position;

    #[test]
    fn classifies_empty_enemy_own_and_off_board() {
        let mut board = Board::new();
        board
            .add_piece(Position::new(3, 3), Piece::new(Color::White, PieceType::Pawn))
            .expect("on board");
        board
            .add_piece(Position::new(6, 6), Piece::new(Color::Black, PieceType::Pawn))
            .expect("on board");

        let white = Color::White;
        assert_eq!(square_status(&board, Position::new(4, 4), white), SquareStatus::Empty);
        assert_eq!(square_status(&board, Position::new(6, 6), white), SquareStatus::Enemy);
        assert_eq!(square_status(&board, Position::new(3, 3), white), SquareStatus::Blocked);
        assert_eq!(square_status(&board, Position::new(0, 3), white), SquareStatus::Blocked);
        assert_eq!(square_status(&board, Position::new(3, 9), white), SquareStatus::Blocked);

        assert_eq!(
            square_status(&board, Position::new(3, 3), Color::Black),
            SquareStatus::Enemy
        );
    }
}
