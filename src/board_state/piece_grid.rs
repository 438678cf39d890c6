//! In-memory 8x8 board.
//!
//! `PieceGrid` stores one optional occupant per cell plus a highlight bitmask
//! (bit `Coordinate::index()` set when the cell is highlighted). It is the
//! board the text front-end drives and the one the tests observe.

use crate::board_state::board_cells::BoardCells;
use crate::board_state::board_setup::BACK_RANK;
use crate::board_state::board_types::*;
use crate::errors::BoardErrors;
use crate::utils::fen_layout::{generate_placement, parse_placement};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceGrid {
    cells: [[Option<Piece>; 8]; 8],
    highlighted: u64,
}

impl PieceGrid {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting layout: dark pieces on rows 0-1, light on rows 6-7.
    pub fn new_game() -> Self {
        let mut grid = Self::new_empty();
        for (col, kind) in BACK_RANK.iter().copied().enumerate() {
            grid.cells[0][col] = Some(Piece::new(Color::Dark, kind));
            grid.cells[1][col] = Some(Piece::new(Color::Dark, PieceKind::Pawn));
            grid.cells[6][col] = Some(Piece::new(Color::Light, PieceKind::Pawn));
            grid.cells[7][col] = Some(Piece::new(Color::Light, kind));
        }
        grid
    }

    #[inline]
    pub fn from_placement(placement: &str) -> Result<Self, BoardErrors> {
        parse_placement(placement)
    }

    #[inline]
    pub fn placement(&self) -> String {
        generate_placement(self)
    }

    #[inline]
    pub fn is_highlighted(&self, coordinate: Coordinate) -> bool {
        self.highlighted & (1u64 << coordinate.index()) != 0
    }

    pub fn highlighted_cells(&self) -> Vec<Coordinate> {
        Coordinate::all().filter(|c| self.is_highlighted(*c)).collect()
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }
}

impl BoardCells for PieceGrid {
    #[inline]
    fn occupant(&self, coordinate: Coordinate) -> Option<Piece> {
        self.cells[coordinate.row() as usize][coordinate.col() as usize]
    }

    #[inline]
    fn set_occupant(&mut self, coordinate: Coordinate, occupant: Option<Piece>) {
        self.cells[coordinate.row() as usize][coordinate.col() as usize] = occupant;
    }

    #[inline]
    fn set_highlighted(&mut self, coordinate: Coordinate, highlighted: bool) {
        let mask = 1u64 << coordinate.index();
        if highlighted {
            self.highlighted |= mask;
        } else {
            self.highlighted &= !mask;
        }
    }
}
