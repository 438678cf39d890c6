use std::fmt;

use crate::utils::algebraic::Notation;

/// One executed relocation, kept for undo/redo.
///
/// Endpoints are stored as notation and resolved back to grid coordinates
/// on every undo/redo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    from: Notation,
    to: Notation,
}

impl MoveRecord {
    pub fn new(from: Notation, to: Notation) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn from(&self) -> &str {
        &self.from
    }

    #[inline]
    pub fn to(&self) -> &str {
        &self.to
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
