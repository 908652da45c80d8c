//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and
//! diagnostics in text environments. Row 8 is printed first so White sits at
//! the bottom.

use crate::board_state::board::Board;
use crate::board_state::chess_rules::BOARD_SIZE;
use crate::board_state::position::Position;

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (1..=BOARD_SIZE).rev() {
        let rank_char = char::from(b'0' + row as u8);
        out.push(rank_char);
        out.push(' ');

        for column in 1..=BOARD_SIZE {
            match board.get_piece(Position::new(row, column)) {
                Ok(Some(piece)) => out.push(piece.to_unicode()),
                Ok(None) => out.push('·'),
                Err(_) => out.push('?'),
            }

            if column < BOARD_SIZE {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
