//! Plain value types shared by the board, the codec and the controller.
//!
//! Pieces carry identity only. Nothing here knows how a piece moves.

use crate::errors::BoardErrors;

pub use crate::board_state::piece_grid::PieceGrid;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

/// Piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Occupant identity of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Checkerboard base color of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareShade {
    Light,
    Dark,
}

/// Grid position. Row 0 is rank 8 as displayed, col 0 is file a.
///
/// Both components are always in `0..=7`; the only public way to build one
/// from raw integers is [`Coordinate::new`], which checks the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    pub fn new(row: i32, col: i32) -> Result<Self, BoardErrors> {
        let in_range = |v: i32| (0..i32::from(BOARD_SIZE)).contains(&v);
        if !in_range(row) || !in_range(col) {
            return Err(BoardErrors::InvalidCoordinate(row, col));
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major cell index in `0..64`.
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    #[inline]
    pub const fn shade(self) -> SquareShade {
        if (self.row + self.col) % 2 == 0 {
            SquareShade::Light
        } else {
            SquareShade::Dark
        }
    }

    /// All 64 coordinates, row-major from (0, 0).
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coordinate { row, col }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_rejects_out_of_range_components() {
        assert!(Coordinate::new(0, 0).is_ok());
        assert!(Coordinate::new(7, 7).is_ok());
        assert_eq!(
            Coordinate::new(8, 0),
            Err(BoardErrors::InvalidCoordinate(8, 0))
        );
        assert_eq!(
            Coordinate::new(3, -1),
            Err(BoardErrors::InvalidCoordinate(3, -1))
        );
    }

    #[test]
    fn shade_follows_parity() {
        let a8 = Coordinate::new(0, 0).expect("in range");
        let b8 = Coordinate::new(0, 1).expect("in range");
        let e2 = Coordinate::new(6, 4).expect("in range");
        assert_eq!(a8.shade(), SquareShade::Light);
        assert_eq!(b8.shade(), SquareShade::Dark);
        assert_eq!(e2.shade(), SquareShade::Light);
    }

    #[test]
    fn all_visits_each_cell_once_in_index_order() {
        let indices: Vec<usize> = Coordinate::all().map(Coordinate::index).collect();
        assert_eq!(indices, (0..64).collect::<Vec<_>>());
    }
}
