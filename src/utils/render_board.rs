//! Terminal-oriented board renderer.
//!
//! Draws a `PieceGrid` with row 0 (rank 8) on top. Every cell is two
//! characters wide: a marker column (`*` when highlighted, blank otherwise)
//! followed by the piece or shade symbol. With `ansi_colors` set, each cell is
//! also painted with its palette color as a 24-bit terminal background.

use crate::board_state::board_cells::BoardCells;
use crate::board_state::board_types::*;
use crate::config::BoardConfig;

pub fn render_board(grid: &PieceGrid, config: &BoardConfig) -> String {
    let mut out = String::new();
    let files = "  a b c d e f g h";

    if config.show_coordinates {
        out.push_str(files);
        out.push('\n');
    }

    for row in 0..BOARD_SIZE {
        let rank_char = char::from(b'0' + (BOARD_SIZE - row));
        if config.show_coordinates {
            out.push(rank_char);
        }

        for col in 0..BOARD_SIZE {
            let Ok(coordinate) = Coordinate::new(i32::from(row), i32::from(col)) else {
                continue;
            };
            let highlighted = grid.is_highlighted(coordinate);

            if config.ansi_colors {
                push_ansi_background(&mut out, config.cell_color(coordinate, highlighted));
            }
            out.push(if highlighted { '*' } else { ' ' });
            out.push(cell_symbol(grid.occupant(coordinate), coordinate, config));
            if config.ansi_colors {
                out.push_str(ANSI_RESET);
            }
        }

        if config.show_coordinates {
            out.push(' ');
            out.push(rank_char);
        }
        out.push('\n');
    }

    if config.show_coordinates {
        out.push_str(files);
    } else {
        out.pop();
    }

    out
}

const ANSI_RESET: &str = "\x1b[0m";

fn push_ansi_background(out: &mut String, argb: u32) {
    let red = (argb >> 16) & 0xFF;
    let green = (argb >> 8) & 0xFF;
    let blue = argb & 0xFF;
    out.push_str(&format!("\x1b[48;2;{red};{green};{blue}m"));
}

fn cell_symbol(occupant: Option<Piece>, coordinate: Coordinate, config: &BoardConfig) -> char {
    match occupant {
        Some(piece) if config.unicode_pieces => piece_to_unicode(piece),
        Some(piece) => piece_to_ascii(piece),
        None if config.unicode_pieces => '·',
        None => match coordinate.shade() {
            SquareShade::Light => '.',
            SquareShade::Dark => ':',
        },
    }
}

fn piece_to_ascii(piece: Piece) -> char {
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

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::board_state::board_cells::BoardCells;
    use crate::board_state::board_types::*;
    use crate::config::BoardConfig;

    #[test]
    fn renders_starting_layout_with_labels() {
        let text = render_board(&PieceGrid::new_game(), &BoardConfig::default());
        println!("\n{text}");

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[7], "2 ♙ ♙ ♙ ♙ ♙ ♙ ♙ ♙ 2");
        assert_eq!(lines[9], "  a b c d e f g h");
    }

    #[test]
    fn ascii_mode_marks_highlights_and_shades() {
        let config = BoardConfig {
            unicode_pieces: false,
            show_coordinates: false,
            ..BoardConfig::default()
        };
        let mut grid = PieceGrid::new_empty();
        let e2 = Coordinate::new(6, 4).expect("in range");
        grid.set_occupant(e2, Some(Piece::new(Color::Light, PieceKind::Pawn)));
        grid.set_highlighted(e2, true);

        let text = render_board(&grid, &config);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], " . : . : . : . :");
        assert_eq!(lines[6], " . : . :*P : . :");
    }

    #[test]
    fn highlight_in_last_column_keeps_row_width() {
        let mut grid = PieceGrid::new_game();
        let h8 = Coordinate::new(0, 7).expect("in range");
        grid.set_highlighted(h8, true);

        let text = render_board(&grid, &BoardConfig::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞*♜ 8");
        assert_eq!(lines[1].chars().count(), lines[2].chars().count());
    }

    #[test]
    fn ansi_mode_paints_cells_from_palette() {
        let mut config = BoardConfig {
            ansi_colors: true,
            ..BoardConfig::default()
        };
        let mut grid = PieceGrid::new_empty();
        let a8 = Coordinate::new(0, 0).expect("in range");
        let b8 = Coordinate::new(0, 1).expect("in range");
        grid.set_highlighted(b8, true);

        let text = render_board(&grid, &config);
        assert!(text.contains("\x1b[48;2;204;204;204m ·\x1b[0m"));
        assert!(text.contains("\x1b[48;2;51;51;51m ·\x1b[0m"));
        assert!(text.contains("\x1b[48;2;255;215;0m*·\x1b[0m"));
        assert!(!grid.is_highlighted(a8));

        config.set_option("Highlight", "0xFF00FF00").expect("hex color");
        let repainted = render_board(&grid, &config);
        assert_ne!(text, repainted);
        assert!(repainted.contains("\x1b[48;2;0;255;0m*·\x1b[0m"));
    }
}
