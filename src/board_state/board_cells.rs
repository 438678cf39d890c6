//! Board-state seam between the interaction core and whatever draws the board.
//!
//! The controller reads and moves occupants and toggles highlights only
//! through this trait. A GUI implements it over its widgets; the crate's own
//! [`PieceGrid`](crate::board_state::piece_grid::PieceGrid) implements it in
//! memory for the text front-end and for tests.

use crate::board_state::board_types::{Coordinate, Piece};

pub trait BoardCells {
    fn occupant(&self, coordinate: Coordinate) -> Option<Piece>;

    fn set_occupant(&mut self, coordinate: Coordinate, occupant: Option<Piece>);

    /// Highlight on/off. Off means the cell falls back to its checkerboard
    /// shade, see [`Coordinate::shade`].
    fn set_highlighted(&mut self, coordinate: Coordinate, highlighted: bool);
}
