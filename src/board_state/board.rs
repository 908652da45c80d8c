//! Mailbox board representation.
//!
//! `Board` is an 8×8 grid of optional pieces addressed with one-based
//! `Position`s. It only stores placement: no side to move, castling rights,
//! or history. Equality and hashing are structural over all 64 squares.

use std::fmt;

use log::debug;

use crate::board_state::chess_rules::{back_rank_row, pawn_start_row, BACK_RANK_LAYOUT, BOARD_SIZE};
use crate::board_state::chess_types::{Color, Piece, PieceType};
use crate::board_state::position::Position;
use crate::chess_errors::{ChessErrors, ChessResult};
use crate::utils::render_board::render_board;

const SIDE: usize = BOARD_SIZE as usize;

/// Piece placement for a single chess position.
///
/// The derived `Hash` walks the squares row by row, so equal boards always
/// hash equally and empty squares contribute a fixed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    // [row - 1][column - 1]
    squares: [[Option<Piece>; SIDE]; SIDE],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [[None; SIDE]; SIDE],
        }
    }
}

impl Board {
    /// An empty board.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// A board holding the standard starting position.
    pub fn standard() -> Self {
        let mut board = Self::new();
        board.reset_board();
        board
    }

    /// Writes `piece` (or an empty square for `None`) at `position`,
    /// replacing whatever was there.
    pub fn add_piece(
        &mut self,
        position: Position,
        piece: impl Into<Option<Piece>>,
    ) -> ChessResult<()> {
        let (row, column) = square_index(position)?;
        self.squares[row][column] = piece.into();
        Ok(())
    }

    /// The piece at `position`, or `None` if the square is empty.
    pub fn get_piece(&self, position: Position) -> ChessResult<Option<Piece>> {
        let (row, column) = square_index(position)?;
        Ok(self.squares[row][column])
    }

    /// Clears the board and sets up the standard starting position.
    pub fn reset_board(&mut self) {
        *self = Self::default();

        for color in Color::ALL {
            let home = row_index(back_rank_row(color));
            let pawns = row_index(pawn_start_row(color));
            for (column, piece_type) in BACK_RANK_LAYOUT.into_iter().enumerate() {
                self.squares[home][column] = Some(Piece::new(color, piece_type));
                self.squares[pawns][column] = Some(Piece::new(color, PieceType::Pawn));
            }
        }

        debug!("board reset to the standard starting position");
    }

    /// Every occupied square, row 1 column 1 first, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, squares)| {
            squares.iter().enumerate().filter_map(move |(column, square)| {
                square.map(|piece| (Position::new(row as i8 + 1, column as i8 + 1), piece))
            })
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

#[inline]
fn row_index(row: i8) -> usize {
    (row - 1) as usize
}

fn square_index(position: Position) -> ChessResult<(usize, usize)> {
    if !position.is_on_board() {
        return Err(ChessErrors::PositionOutOfRange(position));
    }
    Ok((row_index(position.row()), (position.column() - 1) as usize))
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::Board;
    use crate::board_state::chess_types::{Color, Piece, PieceType};
    use crate::board_state::position::Position;
    use crate::chess_errors::ChessErrors;

    fn hash_of(board: &Board) -> u64 {
        let mut hasher = DefaultHasher::new();
        board.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn add_then_get_returns_the_piece() {
        let mut board = Board::new();
        let queen = Piece::new(Color::Black, PieceType::Queen);
        let square = Position::new(8, 4);

        assert_eq!(board.get_piece(square).expect("on board"), None);
        board.add_piece(square, queen).expect("on board");
        assert_eq!(board.get_piece(square).expect("on board"), Some(queen));
    }

    #[test]
    fn last_write_wins_and_none_clears() {
        let mut board = Board::new();
        let square = Position::new(3, 3);
        board
            .add_piece(square, Piece::new(Color::White, PieceType::Knight))
            .expect("on board");
        board
            .add_piece(square, Piece::new(Color::Black, PieceType::Bishop))
            .expect("on board");
        assert_eq!(
            board.get_piece(square).expect("on board"),
            Some(Piece::new(Color::Black, PieceType::Bishop))
        );

        board.add_piece(square, None).expect("on board");
        assert_eq!(board.get_piece(square).expect("on board"), None);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn out_of_range_positions_are_rejected() {
        let mut board = Board::new();
        for bad in [
            Position::new(0, 1),
            Position::new(9, 1),
            Position::new(1, 0),
            Position::new(1, 9),
            Position::new(-3, -3),
        ] {
            assert_eq!(board.get_piece(bad), Err(ChessErrors::PositionOutOfRange(bad)));
            assert_eq!(
                board.add_piece(bad, Piece::new(Color::White, PieceType::Pawn)),
                Err(ChessErrors::PositionOutOfRange(bad))
            );
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn reset_board_places_the_standard_layout() {
        let board = Board::standard();
        assert_eq!(board.pieces().count(), 32);

        assert_eq!(
            board.get_piece(Position::new(1, 5)).expect("on board"),
            Some(Piece::new(Color::White, PieceType::King))
        );
        assert_eq!(
            board.get_piece(Position::new(1, 4)).expect("on board"),
            Some(Piece::new(Color::White, PieceType::Queen))
        );
        assert_eq!(
            board.get_piece(Position::new(8, 5)).expect("on board"),
            Some(Piece::new(Color::Black, PieceType::King))
        );
        assert_eq!(
            board.get_piece(Position::new(8, 8)).expect("on board"),
            Some(Piece::new(Color::Black, PieceType::Rook))
        );
        for column in 1..=8 {
            assert_eq!(
                board.get_piece(Position::new(2, column)).expect("on board"),
                Some(Piece::new(Color::White, PieceType::Pawn))
            );
            assert_eq!(
                board.get_piece(Position::new(7, column)).expect("on board"),
                Some(Piece::new(Color::Black, PieceType::Pawn))
            );
            for row in 3..=6 {
                assert_eq!(board.get_piece(Position::new(row, column)).expect("on board"), None);
            }
        }
    }

    #[test]
    fn reset_board_clears_previous_content() {
        let mut board = Board::new();
        board
            .add_piece(Position::new(4, 4), Piece::new(Color::White, PieceType::Queen))
            .expect("on board");
        board.reset_board();
        assert_eq!(board.get_piece(Position::new(4, 4)).expect("on board"), None);
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn reset_boards_are_equal_until_a_pawn_is_removed() {
        let mut a = Board::new();
        a.reset_board();
        let b = Board::standard();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        a.add_piece(Position::new(2, 5), None).expect("on board");
        assert_ne!(a, b);
    }

    #[test]
    fn empty_board_differs_from_any_single_piece_board() {
        let empty = Board::new();
        for row in 1..=8 {
            for column in 1..=8 {
                let mut single = Board::new();
                let pawn = Piece::new(Color::Black, PieceType::Pawn);
                single
                    .add_piece(Position::new(row, column), pawn)
                    .expect("on board");
                assert_ne!(empty, single);
            }
        }
    }

    #[test]
    fn equal_boards_built_in_different_orders_hash_equally() {
        let rook = Piece::new(Color::White, PieceType::Rook);
        let king = Piece::new(Color::Black, PieceType::King);

        let mut a = Board::new();
        a.add_piece(Position::new(1, 1), rook).expect("on board");
        a.add_piece(Position::new(8, 8), king).expect("on board");

        let mut b = Board::new();
        b.add_piece(Position::new(8, 8), king).expect("on board");
        b.add_piece(Position::new(5, 5), rook).expect("on board");
        b.add_piece(Position::new(5, 5), None).expect("on board");
        b.add_piece(Position::new(1, 1), rook).expect("on board");

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn pieces_iterates_in_row_major_order() {
        let mut board = Board::new();
        let pawn = Piece::new(Color::White, PieceType::Pawn);
        board.add_piece(Position::new(5, 2), pawn).expect("on board");
        board.add_piece(Position::new(1, 7), pawn).expect("on board");
        board.add_piece(Position::new(5, 1), pawn).expect("on board");

        let squares: Vec<Position> = board.pieces().map(|(square, _)| square).collect();
        assert_eq!(
            squares,
            vec![Position::new(1, 7), Position::new(5, 1), Position::new(5, 2)]
        );
    }
}
