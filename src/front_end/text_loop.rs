//! Line-oriented front-end and command loop.
//!
//! Stands in for a graphical board: each text command maps to one board event
//! (tap, commit, undo, redo) or to a query, and every outcome is printed as a
//! single line. Parse errors are reported as `info string ...` lines and never
//! end the loop.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::board_state::board_types::PieceGrid;
use crate::config::BoardConfig;
use crate::controller::board_controller::BoardSelectionController;
use crate::history::history_stack::HistoryStack;
use crate::history::move_record::MoveRecord;
use crate::session::Session;
use crate::utils::algebraic::from_notation;
use crate::utils::render_board::render_board;

const HELP_LINES: &[&str] = &[
    "tap <square>        select a cell, e.g. 'tap e2'",
    "move                commit the selected move",
    "undo | redo         step through move history",
    "board               print the board",
    "history             list undo and redo entries",
    "fen                 print the piece placement",
    "position startpos | position fen <placement>",
    "setoption name <Name> value <Value>",
    "options             list settings",
    "quit",
];

pub fn run_stdio_loop(session: Session, config: BoardConfig, grid: PieceGrid) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut front_end = TextFrontEnd::new(session, config, grid);

    writeln!(stdout, "{}", front_end.session.welcome_message())?;
    writeln!(stdout, "{}", render_board(front_end.controller.board(), &front_end.config))?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = front_end.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct TextFrontEnd {
    session: Session,
    config: BoardConfig,
    controller: BoardSelectionController<PieceGrid>,
}

impl TextFrontEnd {
    pub fn new(session: Session, config: BoardConfig, grid: PieceGrid) -> Self {
        Self {
            session,
            config,
            controller: BoardSelectionController::new(grid),
        }
    }

    #[inline]
    pub fn controller(&self) -> &BoardSelectionController<PieceGrid> {
        &self.controller
    }

    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Handle one input line. Returns `true` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        debug!(user = self.session.username(), command = trimmed, "command received");

        match cmd {
            "tap" => {
                let square = parts.next().unwrap_or_default();
                match from_notation(square) {
                    Ok(cell) => {
                        let outcome = self.controller.on_cell_tapped(cell);
                        writeln!(out, "{outcome}")?;
                    }
                    Err(err) => {
                        warn!(square, error = %err, "tap ignored");
                        writeln!(out, "info string tap error: {err}")?;
                    }
                }
            }
            "move" => {
                let outcome = self.controller.on_commit_requested();
                writeln!(out, "{outcome}")?;
            }
            "undo" => {
                let outcome = self.controller.on_undo_requested();
                writeln!(out, "{outcome}")?;
            }
            "redo" => {
                let outcome = self.controller.on_redo_requested();
                writeln!(out, "{outcome}")?;
            }
            "board" => {
                writeln!(out, "{}", render_board(self.controller.board(), &self.config))?;
            }
            "history" => {
                writeln!(out, "undo: {}", format_history(self.controller.undo_history()))?;
                writeln!(out, "redo: {}", format_history(self.controller.redo_history()))?;
            }
            "fen" => {
                writeln!(out, "{}", self.controller.board().placement())?;
            }
            "position" => {
                if let Err(err) = self.handle_position(trimmed) {
                    writeln!(out, "info string position error: {err}")?;
                }
            }
            "setoption" => {
                if let Err(err) = self.handle_setoption(trimmed) {
                    writeln!(out, "info string setoption error: {err}")?;
                }
            }
            "options" => {
                for line in self.config.describe_options() {
                    writeln!(out, "{line}")?;
                }
            }
            "help" => {
                for line in HELP_LINES {
                    writeln!(out, "{line}")?;
                }
            }
            "quit" => {
                return Ok(true);
            }
            _ => {
                writeln!(out, "info string unknown command: {cmd}")?;
            }
        }

        Ok(false)
    }

    fn handle_position(&mut self, line: &str) -> Result<(), String> {
        let mut tokens = line.split_whitespace();
        let _ = tokens.next(); // "position"

        let grid = match tokens.next() {
            Some("startpos") => PieceGrid::new_game(),
            Some("fen") => {
                let fen = tokens.collect::<Vec<_>>().join(" ");
                PieceGrid::from_placement(&fen).map_err(|err| err.to_string())?
            }
            Some(other) => return Err(format!("expected startpos or fen, got '{other}'")),
            None => return Err("missing position type".to_owned()),
        };

        self.controller.reset(grid);
        Ok(())
    }

    fn handle_setoption(&mut self, line: &str) -> Result<(), String> {
        let mut tokens = line.split_whitespace();
        let _ = tokens.next(); // setoption

        let mut name_tokens = Vec::<&str>::new();
        let mut value_tokens = Vec::<&str>::new();
        let mut mode = "";

        for tok in tokens {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok),
                _ if mode == "value" => value_tokens.push(tok),
                _ => {}
            }
        }

        let name = name_tokens.join(" ");
        let value = value_tokens.join(" ");
        self.config
            .set_option(&name, &value)
            .map_err(|err| err.to_string())
    }
}

fn format_history(stack: &HistoryStack<MoveRecord>) -> String {
    if stack.is_empty() {
        return "-".to_owned();
    }
    stack
        .iter()
        .map(MoveRecord::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
