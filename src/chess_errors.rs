//! Errors used throughout the move-generation engine.
//!
//! `ChessErrors` is the single error type returned by board access, move
//! generation, and the notation helpers. Each variant carries the offending
//! value so callers can log or display precise diagnostics.
//!
//! Usage guidelines:
//! - Functions in the crate return `ChessResult<T>` for every failure mode
//!   that a caller can trigger (bad coordinates, empty squares, bad text).
//! - The surrounding game layer decides whether a failure is a user-facing
//!   error (malformed request) or a programming defect.

use thiserror::Error;

use crate::board_state::position::Position;

/// Unified error type for the engine.
///
/// When matching on `ChessErrors`:
/// - `NoPieceAtPosition` and `PositionOutOfRange` are precondition
///   violations of the board and generator APIs.
/// - The parsing variants are recoverable and suitable for presenting to
///   end users.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Moves were requested for a square that holds no piece.
    ///
    /// Payload: the empty square.
    #[error("no piece at position {0}")]
    NoPieceAtPosition(Position),

    /// A board read or write addressed a square outside 1..=8 on either axis.
    ///
    /// Payload: the offending position.
    #[error("position {0} is out of range (rows and columns must be 1-8)")]
    PositionOutOfRange(Position),

    /// A two-character algebraic square (for example `e4`) failed to parse.
    ///
    /// Payload: the original text.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicSquare(String),

    /// A long algebraic move (for example `e7e8q`) failed to parse.
    ///
    /// Payload: the original text.
    #[error("invalid long algebraic move: {0}")]
    InvalidLongAlgebraicMove(String),

    /// A promotion suffix did not name a queen, rook, bishop or knight.
    ///
    /// Payload: the offending character.
    #[error("invalid promotion piece: {0}")]
    InvalidPromotionPiece(char),
}

/// Result alias used by every fallible operation in the crate.
pub type ChessResult<T> = Result<T, ChessErrors>;
