use crate::board_state::board_types::Coordinate;

/// Pending from/to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    SourceSelected(Coordinate),
    BothSelected {
        source: Coordinate,
        destination: Coordinate,
    },
}

impl Selection {
    #[inline]
    pub fn source(self) -> Option<Coordinate> {
        match self {
            Selection::Idle => None,
            Selection::SourceSelected(source) | Selection::BothSelected { source, .. } => {
                Some(source)
            }
        }
    }

    #[inline]
    pub fn destination(self) -> Option<Coordinate> {
        match self {
            Selection::BothSelected { destination, .. } => Some(destination),
            _ => None,
        }
    }

    /// Every selected cell, source first.
    pub fn cells(self) -> impl Iterator<Item = Coordinate> {
        self.source().into_iter().chain(self.destination())
    }
}
