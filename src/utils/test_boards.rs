//! Text diagrams for building test boards.
//!
//! A diagram is eight lines, row 8 first. `.` is an empty square, uppercase
//! letters are White pieces and lowercase letters are Black pieces
//! (`K Q B N R P`). Whitespace inside a line is ignored.

use crate::board_state::board::Board;
use crate::board_state::chess_types::{Color, Piece, PieceType};
use crate::board_state::position::Position;

pub fn board_from_diagram(diagram: &str) -> Board {
    let rows: Vec<&str> = diagram
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    assert_eq!(rows.len(), 8, "diagram must have 8 rows");

    let mut board = Board::new();
    for (i, line) in rows.iter().enumerate() {
        let row = 8 - i as i8;
        let cells: Vec<char> = line.chars().filter(|ch| !ch.is_whitespace()).collect();
        assert_eq!(cells.len(), 8, "row {row} must have 8 squares");

        for (j, ch) in cells.into_iter().enumerate() {
            if ch == '.' {
                continue;
            }
            let position = Position::new(row, j as i8 + 1);
            board
                .add_piece(position, piece_from_char(ch))
                .expect("diagram squares are on the board");
        }
    }

    board
}

fn piece_from_char(ch: char) -> Piece {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let piece_type = match ch.to_ascii_lowercase() {
        'k' => PieceType::King,
        'q' => PieceType::Queen,
        'b' => PieceType::Bishop,
        'n' => PieceType::Knight,
        'r' => PieceType::Rook,
        'p' => PieceType::Pawn,
        other => panic!("unknown piece character '{other}' in diagram"),
    };
    Piece::new(color, piece_type)
}
