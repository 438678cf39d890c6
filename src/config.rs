//! Presentation settings for the board front-end.
//!
//! Colors are ARGB words. A cell shows `highlight_argb` while selected and
//! otherwise its checkerboard shade from [`Coordinate::shade`]. The text
//! renderer paints them only when `ansi_colors` is on.

use crate::board_state::board_types::{Coordinate, SquareShade};
use crate::errors::BoardErrors;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub light_square_argb: u32,
    pub dark_square_argb: u32,
    pub highlight_argb: u32,
    pub unicode_pieces: bool,
    pub show_coordinates: bool,
    pub ansi_colors: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            light_square_argb: 0xFFCC_CCCC,
            dark_square_argb: 0xFF33_3333,
            highlight_argb: 0xFFFF_D700,
            unicode_pieces: true,
            show_coordinates: true,
            ansi_colors: false,
        }
    }
}

impl BoardConfig {
    pub fn cell_color(&self, coordinate: Coordinate, highlighted: bool) -> u32 {
        if highlighted {
            return self.highlight_argb;
        }
        match coordinate.shade() {
            SquareShade::Light => self.light_square_argb,
            SquareShade::Dark => self.dark_square_argb,
        }
    }

    /// Set one option by name, case-insensitively.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), BoardErrors> {
        if name.eq_ignore_ascii_case("LightSquare") {
            self.light_square_argb = parse_argb(name, value)?;
        } else if name.eq_ignore_ascii_case("DarkSquare") {
            self.dark_square_argb = parse_argb(name, value)?;
        } else if name.eq_ignore_ascii_case("Highlight") {
            self.highlight_argb = parse_argb(name, value)?;
        } else if name.eq_ignore_ascii_case("UnicodePieces") {
            self.unicode_pieces = parse_switch(name, value)?;
        } else if name.eq_ignore_ascii_case("ShowCoordinates") {
            self.show_coordinates = parse_switch(name, value)?;
        } else if name.eq_ignore_ascii_case("AnsiColors") {
            self.ansi_colors = parse_switch(name, value)?;
        } else {
            return Err(BoardErrors::UnknownOption(name.to_owned()));
        }
        Ok(())
    }

    /// One `option ...` line per setting with its current value.
    pub fn describe_options(&self) -> Vec<String> {
        vec![
            format!("option name LightSquare type string default {:#010X}", self.light_square_argb),
            format!("option name DarkSquare type string default {:#010X}", self.dark_square_argb),
            format!("option name Highlight type string default {:#010X}", self.highlight_argb),
            format!("option name UnicodePieces type check default {}", self.unicode_pieces),
            format!("option name ShowCoordinates type check default {}", self.show_coordinates),
            format!("option name AnsiColors type check default {}", self.ansi_colors),
        ]
    }
}

fn parse_argb(name: &str, value: &str) -> Result<u32, BoardErrors> {
    let digits = value
        .trim()
        .trim_start_matches("0x")
        .trim_start_matches("0X")
        .trim_start_matches('#');
    u32::from_str_radix(digits, 16)
        .map_err(|_| BoardErrors::InvalidOptionValue(name.to_owned(), value.to_owned()))
}

fn parse_switch(name: &str, value: &str) -> Result<bool, BoardErrors> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(BoardErrors::InvalidOptionValue(
            name.to_owned(),
            value.to_owned(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::BoardConfig;
    use crate::board_state::board_types::Coordinate;
    use crate::errors::BoardErrors;

    #[test]
    fn cell_color_uses_parity_unless_highlighted() {
        let config = BoardConfig::default();
        let a8 = Coordinate::new(0, 0).expect("in range");
        let b8 = Coordinate::new(0, 1).expect("in range");
        assert_eq!(config.cell_color(a8, false), 0xFFCCCCCC);
        assert_eq!(config.cell_color(b8, false), 0xFF333333);
        assert_eq!(config.cell_color(b8, true), 0xFFFFD700);
    }

    #[test]
    fn set_option_parses_colors_and_switches() {
        let mut config = BoardConfig::default();
        config.set_option("highlight", "0xFF00FF00").expect("hex color");
        config.set_option("DarkSquare", "#FF101010").expect("hash color");
        config.set_option("UnicodePieces", "off").expect("switch");
        assert_eq!(config.highlight_argb, 0xFF00FF00);
        assert_eq!(config.dark_square_argb, 0xFF101010);
        assert!(!config.unicode_pieces);
        assert!(config.describe_options()[1].ends_with("0xFF101010"));
    }

    #[test]
    fn set_option_rejects_unknown_names_and_bad_values() {
        let mut config = BoardConfig::default();
        assert_eq!(
            config.set_option("Threads", "4"),
            Err(BoardErrors::UnknownOption("Threads".to_owned()))
        );
        assert_eq!(
            config.set_option("ShowCoordinates", "maybe"),
            Err(BoardErrors::InvalidOptionValue(
                "ShowCoordinates".to_owned(),
                "maybe".to_owned()
            ))
        );
        assert_eq!(config, BoardConfig::default());
    }
}
