//! Grid coordinate and algebraic square conversions.
//!
//! Converts between `(row, col)` grid positions, where row 0 is the top rank
//! as displayed, and human-readable squares such as `e2`. File `a` is column
//! 0 and rank = 8 - row.

use crate::board_state::board_types::{Coordinate, BOARD_SIZE};
use crate::errors::BoardErrors;

/// Two-character algebraic square, for example `"e4"`.
pub type Notation = String;

/// Convert a grid coordinate to algebraic notation.
#[inline]
pub fn to_notation(coordinate: Coordinate) -> Notation {
    let file_char = char::from(b'a' + coordinate.col());
    let rank_char = char::from(b'0' + (BOARD_SIZE - coordinate.row()));
    format!("{file_char}{rank_char}")
}

/// Convert raw grid indices to algebraic notation, rejecting indices outside `0..=7`.
#[inline]
pub fn grid_to_notation(row: i32, col: i32) -> Result<Notation, BoardErrors> {
    Ok(to_notation(Coordinate::new(row, col)?))
}

/// Convert algebraic notation (for example: "e4") to a grid coordinate.
pub fn from_notation(notation: &str) -> Result<Coordinate, BoardErrors> {
    let bytes = notation.as_bytes();
    if bytes.len() != 2 {
        return Err(BoardErrors::InvalidNotation(notation.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(BoardErrors::InvalidNotation(notation.to_owned()));
    }

    let row = i32::from(BOARD_SIZE) - i32::from(rank - b'0');
    let col = i32::from(file - b'a');
    Coordinate::new(row, col)
}
