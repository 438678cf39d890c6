//! FEN piece-placement reader and writer for `PieceGrid`.
//!
//! Only the first FEN field is meaningful here: the board has no side to
//! move, castling rights or clocks. A full FEN string is accepted and its
//! trailing fields are ignored.

use crate::board_state::board_cells::BoardCells;
use crate::board_state::board_types::*;
use crate::errors::BoardErrors;

pub fn parse_placement(fen: &str) -> Result<PieceGrid, BoardErrors> {
    let placement = fen
        .split_whitespace()
        .next()
        .ok_or_else(|| BoardErrors::InvalidPlacement("missing board layout".to_owned()))?;

    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != BOARD_SIZE as usize {
        return Err(BoardErrors::InvalidPlacement(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut grid = PieceGrid::new_empty();

    // FEN lists rank 8 first, which is grid row 0.
    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(BoardErrors::InvalidPlacement(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| {
                BoardErrors::InvalidPlacement(format!("invalid piece character '{ch}'"))
            })?;

            if col >= BOARD_SIZE as usize {
                return Err(BoardErrors::InvalidPlacement(format!(
                    "rank {} has too many files",
                    BOARD_SIZE as usize - row
                )));
            }

            let coordinate = Coordinate::new(row as i32, col as i32)?;
            grid.set_occupant(coordinate, Some(piece));
            col += 1;
        }

        if col != BOARD_SIZE as usize {
            return Err(BoardErrors::InvalidPlacement(format!(
                "rank {} does not sum to 8 files",
                BOARD_SIZE as usize - row
            )));
        }
    }

    Ok(grid)
}

pub fn generate_placement(grid: &PieceGrid) -> String {
    let mut out = String::new();
    let mut empty_count = 0u8;

    for coordinate in Coordinate::all() {
        if coordinate.col() == 0 && coordinate.row() > 0 {
            if empty_count > 0 {
                out.push(char::from(b'0' + empty_count));
                empty_count = 0;
            }
            out.push('/');
        }

        match grid.occupant(coordinate) {
            Some(piece) => {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(piece));
            }
            None => empty_count += 1,
        }
    }

    if empty_count > 0 {
        out.push(char::from(b'0' + empty_count));
    }

    out
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

fn piece_to_fen_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::Light => ch.to_ascii_uppercase(),
        Color::Dark => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_placement, parse_placement};
    use crate::board_state::board_cells::BoardCells;
    use crate::board_state::board_setup::STARTING_PLACEMENT;
    use crate::board_state::board_types::*;
    use crate::errors::BoardErrors;

    #[test]
    fn starting_placement_matches_new_game() {
        let grid = parse_placement(STARTING_PLACEMENT).expect("start layout should parse");
        assert_eq!(grid, PieceGrid::new_game());
        assert_eq!(generate_placement(&grid), STARTING_PLACEMENT);
    }

    #[test]
    fn full_fen_string_is_accepted() {
        let grid = parse_placement("8/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        let e2 = Coordinate::new(6, 4).expect("in range");
        assert_eq!(
            grid.occupant(e2),
            Some(Piece::new(Color::Light, PieceKind::Pawn))
        );
        assert_eq!(grid.piece_count(), 2);
        assert_eq!(generate_placement(&grid), "8/8/8/8/8/8/4P3/4K3");
    }

    #[test]
    fn malformed_layouts_are_rejected() {
        for bad in [
            "",
            "8/8/8/8/8/8/8",
            "8/8/8/8/8/8/8/9",
            "8/8/8/8/8/8/8/7",
            "8/8/8/8/8/8/8/ppppppppp",
            "8/8/8/8/8/8/8/7x",
        ] {
            assert!(
                matches!(parse_placement(bad), Err(BoardErrors::InvalidPlacement(_))),
                "{bad:?} should not parse"
            );
        }
    }
}
