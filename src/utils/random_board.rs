//! Random piece placements for property tests and benchmarks.
//!
//! Boards are arbitrary placements, not reachable game positions: any piece
//! may stand on any square, including pawns on either back rank.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board_state::board::Board;
use crate::board_state::chess_rules::BOARD_SIZE;
use crate::board_state::chess_types::{Color, Piece, PieceType};
use crate::board_state::position::Position;
use crate::chess_errors::ChessResult;

/// Builds a board with `piece_count` pieces (capped at 64) on distinct
/// squares, each with a uniformly random color and type.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R, piece_count: usize) -> ChessResult<Board> {
    let mut squares: Vec<Position> = (1..=BOARD_SIZE)
        .flat_map(|row| (1..=BOARD_SIZE).map(move |column| Position::new(row, column)))
        .collect();
    squares.shuffle(rng);

    let mut board = Board::new();
    for square in squares.into_iter().take(piece_count) {
        board.add_piece(square, random_piece(rng))?;
    }

    Ok(board)
}

pub fn random_piece<R: Rng + ?Sized>(rng: &mut R) -> Piece {
    let color = Color::ALL[rng.random_range(0..Color::ALL.len())];
    let piece_type = PieceType::ALL[rng.random_range(0..PieceType::ALL.len())];
    Piece::new(color, piece_type)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::random_board;

    #[test]
    fn places_the_requested_number_of_pieces() {
        let mut rng = StdRng::seed_from_u64(11);
        for count in [0, 1, 12, 64] {
            let board = random_board(&mut rng, count).expect("squares are on the board");
            assert_eq!(board.pieces().count(), count);
        }

        let board = random_board(&mut rng, 100).expect("squares are on the board");
        assert_eq!(board.pieces().count(), 64);
    }

    #[test]
    fn same_seed_builds_the_same_board() {
        let a = random_board(&mut StdRng::seed_from_u64(3), 20).expect("on board");
        let b = random_board(&mut StdRng::seed_from_u64(3), 20).expect("on board");
        assert_eq!(a, b);
    }
}
