//! Crate root module declarations for the tap-to-move board core.
//!
//! Exposes the board model, coordinate codec, move history and the
//! selection controller, plus the text front-end used by the binaries.

pub mod board_state {
    pub mod board_cells;
    pub mod board_setup;
    pub mod board_types;
    pub mod piece_grid;
}

pub mod history {
    pub mod history_stack;
    pub mod move_record;
}

pub mod controller {
    pub mod board_controller;
    pub mod board_outcome;
    pub mod selection;
}

pub mod front_end {
    pub mod text_loop;
}

pub mod config;
pub mod errors;
pub mod session;

pub mod utils {
    pub mod algebraic;
    pub mod fen_layout;
    pub mod render_board;
}
