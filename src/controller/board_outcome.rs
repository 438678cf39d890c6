//! Semantic results of board events.
//!
//! The controller reports every event as one of these values; rendering them
//! (toast, status bar, text line) is the caller's business. `Display` gives
//! the stock English wording.

use std::fmt;

use crate::board_state::board_types::Coordinate;
use crate::utils::algebraic::{to_notation, Notation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardOutcome {
    /// A tap in `Idle` picked the source cell.
    SourceSelected(Coordinate),
    /// A tap picked the destination cell; the move is ready to commit.
    DestinationSelected(Coordinate),
    /// A tap reset the pending selection.
    SelectionCleared,

    MoveCommitted { from: Notation, to: Notation },
    MoveUndone { from: Notation, to: Notation },
    MoveRedone { from: Notation, to: Notation },

    /// Commit requested without both endpoints picked.
    SelectionIncomplete,
    /// Commit requested but the source cell holds no piece.
    EmptySource,
    NothingToUndo,
    NothingToRedo,
    /// A history entry could not be resolved to board cells.
    ///
    /// Payload: the notation that failed to parse.
    InvalidNotation(String),
}

impl BoardOutcome {
    /// True for the conditions that leave the board untouched and should be
    /// surfaced to the user as a notice.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            BoardOutcome::SelectionIncomplete
                | BoardOutcome::EmptySource
                | BoardOutcome::NothingToUndo
                | BoardOutcome::NothingToRedo
                | BoardOutcome::InvalidNotation(_)
        )
    }
}

impl fmt::Display for BoardOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardOutcome::SourceSelected(at) => write!(f, "Selected {}", to_notation(*at)),
            BoardOutcome::DestinationSelected(at) => write!(f, "Target {}", to_notation(*at)),
            BoardOutcome::SelectionCleared => write!(f, "Selection cleared"),
            BoardOutcome::MoveCommitted { from, to } => write!(f, "Move made: {from} to {to}"),
            BoardOutcome::MoveUndone { from, to } => write!(f, "Undone move: {from} to {to}"),
            BoardOutcome::MoveRedone { from, to } => write!(f, "Redone move: {from} to {to}"),
            BoardOutcome::SelectionIncomplete => {
                write!(f, "Select a piece and a target cell first")
            }
            BoardOutcome::EmptySource => write!(f, "No piece selected to move"),
            BoardOutcome::NothingToUndo => write!(f, "No moves to undo"),
            BoardOutcome::NothingToRedo => write!(f, "No moves to redo"),
            BoardOutcome::InvalidNotation(notation) => write!(f, "Invalid position: {notation}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BoardOutcome;

    #[test]
    fn display_uses_user_facing_wording() {
        let committed = BoardOutcome::MoveCommitted {
            from: "e2".to_owned(),
            to: "e4".to_owned(),
        };
        assert_eq!(committed.to_string(), "Move made: e2 to e4");
        assert_eq!(BoardOutcome::NothingToUndo.to_string(), "No moves to undo");
        assert_eq!(
            BoardOutcome::SelectionIncomplete.to_string(),
            "Select a piece and a target cell first"
        );
        assert!(!committed.is_rejection());
        assert!(BoardOutcome::EmptySource.is_rejection());
    }
}
