//! Crate root module declarations for the piece_moves engine.
//!
//! This file exposes the board model, the move value type, pseudo-legal move
//! generation, and notation/diagnostic helpers so game-rule layers, tests,
//! and benchmarks can import stable module paths.

pub mod chess_errors;

pub mod board_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
}

pub mod moves {
    pub mod chess_move;
    pub mod move_offsets;
}

pub mod move_generation {
    pub mod move_generator;
    pub mod pawn_moves;
    pub mod sliding_moves;
    pub mod square_status;
    pub mod stepping_moves;
}

pub mod utils {
    pub mod algebraic;
    pub mod long_algebraic;
    pub mod random_board;
    pub mod render_board;
    #[cfg(test)]
    pub(crate) mod test_boards;
}
