//! Tap-driven move controller with undo/redo.
//!
//! `BoardSelectionController` turns discrete UI events (cell tap, commit,
//! undo, redo) into board mutations through the [`BoardCells`] seam and
//! reports each event as a [`BoardOutcome`].
//!
//! There is no move legality: any occupant may be relocated to any cell and
//! whatever sat on the destination is overwritten. Committing a move clears
//! the redo history, so redo only ever replays a single line.
//!
//! All events run to completion on the caller's thread. A host dispatching
//! events from several threads must put the whole controller behind one lock.

use tracing::{debug, info, warn};

use crate::board_state::board_cells::BoardCells;
use crate::board_state::board_types::Coordinate;
use crate::controller::board_outcome::BoardOutcome;
use crate::controller::selection::Selection;
use crate::errors::BoardErrors;
use crate::history::history_stack::HistoryStack;
use crate::history::move_record::MoveRecord;
use crate::utils::algebraic::{from_notation, to_notation};

#[derive(Debug, Clone)]
pub struct BoardSelectionController<B: BoardCells> {
    board: B,
    selection: Selection,
    undo_stack: HistoryStack<MoveRecord>,
    redo_stack: HistoryStack<MoveRecord>,
}

impl<B: BoardCells> BoardSelectionController<B> {
    pub fn new(board: B) -> Self {
        Self {
            board,
            selection: Selection::Idle,
            undo_stack: HistoryStack::new(),
            redo_stack: HistoryStack::new(),
        }
    }

    /// Swap in a new board, dropping the selection and both histories.
    pub fn reset(&mut self, board: B) {
        self.board = board;
        self.selection = Selection::Idle;
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    #[inline]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[inline]
    pub fn board(&self) -> &B {
        &self.board
    }

    #[inline]
    pub fn into_board(self) -> B {
        self.board
    }

    #[inline]
    pub fn undo_history(&self) -> &HistoryStack<MoveRecord> {
        &self.undo_stack
    }

    #[inline]
    pub fn redo_history(&self) -> &HistoryStack<MoveRecord> {
        &self.redo_stack
    }

    pub fn on_cell_tapped(&mut self, cell: Coordinate) -> BoardOutcome {
        match self.selection {
            Selection::Idle => {
                self.selection = Selection::SourceSelected(cell);
                self.board.set_highlighted(cell, true);
                debug!(cell = %to_notation(cell), "source selected");
                BoardOutcome::SourceSelected(cell)
            }
            Selection::SourceSelected(source) if source != cell => {
                self.selection = Selection::BothSelected {
                    source,
                    destination: cell,
                };
                self.board.set_highlighted(cell, true);
                debug!(cell = %to_notation(cell), "destination selected");
                BoardOutcome::DestinationSelected(cell)
            }
            // Re-tapping the source, or any tap once both ends are picked,
            // cancels. There is no way to re-pick a single end.
            _ => {
                self.clear_selection();
                debug!(cell = %to_notation(cell), "selection cleared");
                BoardOutcome::SelectionCleared
            }
        }
    }

    pub fn on_commit_requested(&mut self) -> BoardOutcome {
        let Selection::BothSelected {
            source,
            destination,
        } = self.selection
        else {
            return BoardOutcome::SelectionIncomplete;
        };

        let Some(piece) = self.board.occupant(source) else {
            return BoardOutcome::EmptySource;
        };

        let from = to_notation(source);
        let to = to_notation(destination);

        self.undo_stack.push(MoveRecord::new(from.clone(), to.clone()));
        self.redo_stack.clear();

        self.board.set_occupant(destination, Some(piece));
        self.board.set_occupant(source, None);
        self.clear_selection();

        info!(%from, %to, "move committed");
        BoardOutcome::MoveCommitted { from, to }
    }

    pub fn on_undo_requested(&mut self) -> BoardOutcome {
        let Some(record) = self.undo_stack.pop() else {
            return BoardOutcome::NothingToUndo;
        };

        let resolved = resolve_record(&record);
        let outcome = match resolved {
            Ok((from, to)) => {
                let occupant = self.board.occupant(to);
                self.board.set_occupant(from, occupant);
                self.board.set_occupant(to, None);
                info!(from = record.from(), to = record.to(), "move undone");
                BoardOutcome::MoveUndone {
                    from: record.from().to_owned(),
                    to: record.to().to_owned(),
                }
            }
            Err(err) => {
                warn!(record = %record, error = %err, "undo lookup failed, board left unchanged");
                invalid_notation_outcome(err)
            }
        };

        self.redo_stack.push(record);
        outcome
    }

    pub fn on_redo_requested(&mut self) -> BoardOutcome {
        let Some(record) = self.redo_stack.pop() else {
            return BoardOutcome::NothingToRedo;
        };

        let resolved = resolve_record(&record);
        let outcome = match resolved {
            Ok((from, to)) => {
                let occupant = self.board.occupant(from);
                self.board.set_occupant(to, occupant);
                self.board.set_occupant(from, None);
                info!(from = record.from(), to = record.to(), "move redone");
                BoardOutcome::MoveRedone {
                    from: record.from().to_owned(),
                    to: record.to().to_owned(),
                }
            }
            Err(err) => {
                warn!(record = %record, error = %err, "redo lookup failed, board left unchanged");
                invalid_notation_outcome(err)
            }
        };

        self.undo_stack.push(record);
        outcome
    }

    fn clear_selection(&mut self) {
        for cell in self.selection.cells() {
            self.board.set_highlighted(cell, false);
        }
        self.selection = Selection::Idle;
    }
}

/// Both endpoints or neither.
fn resolve_record(record: &MoveRecord) -> Result<(Coordinate, Coordinate), BoardErrors> {
    let from = from_notation(record.from())?;
    let to = from_notation(record.to())?;
    Ok((from, to))
}

fn invalid_notation_outcome(err: BoardErrors) -> BoardOutcome {
    match err {
        BoardErrors::InvalidNotation(notation) => BoardOutcome::InvalidNotation(notation),
        other => BoardOutcome::InvalidNotation(other.to_string()),
    }
}
