use std::fmt;

use crate::board_state::chess_types::PieceType;
use crate::board_state::position::Position;
use crate::utils::long_algebraic::move_to_long_algebraic;

/// A candidate move: where a piece starts, where it lands, and the piece a
/// pawn promotes to when it reaches the farthest rank.
///
/// The moving piece itself is not recorded, so two moves are equal whenever
/// their endpoints and promotion match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChessMove {
    start: Position,
    end: Position,
    promotion: Option<PieceType>,
}

impl ChessMove {
    #[inline]
    pub const fn new(start: Position, end: Position, promotion: Option<PieceType>) -> Self {
        Self {
            start,
            end,
            promotion,
        }
    }

    #[inline]
    pub const fn start(self) -> Position {
        self.start
    }

    #[inline]
    pub const fn end(self) -> Position {
        self.end
    }

    #[inline]
    pub const fn promotion_piece(self) -> Option<PieceType> {
        self.promotion
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match move_to_long_algebraic(*self) {
            Ok(text) => f.write_str(&text),
            Err(_) => {
                write!(f, "{}->{}", self.start, self.end)?;
                match self.promotion {
                    Some(piece_type) => write!(f, "={piece_type}"),
                    None => Ok(()),
                }
            }
        }
    }
}
