/// The error type for [`Grid::random_empty_cell`](crate::Grid::random_empty_cell).
///
/// A spawn was requested on a grid without a single empty cell. Correct
/// orchestration checks legality before spawning, so hitting this indicates
/// a sequencing bug in the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EmptyGridExhausted;

impl std::error::Error for EmptyGridExhausted {}

impl std::fmt::Display for EmptyGridExhausted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No empty cell left to spawn a tile into")
    }
}

/// The error type for [`Cell::apply_pending_merge`](crate::Cell::apply_pending_merge).
///
/// A merge was applied to a cell that does not hold both a resident and a
/// merge-incoming tile. This is an invariant violation; the board state can
/// no longer be trusted and the move must be aborted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidMergeState {
    pub x: u8,
    pub y: u8,
}

impl std::error::Error for InvalidMergeState {}

impl std::fmt::Display for InvalidMergeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cell ({}, {}) has no pending merge to apply",
            self.x, self.y
        )
    }
}

/// The error type for one turn.
///
/// Every variant is an engine bug, not a recoverable game situation: an
/// illegal direction is reported through
/// [`MoveOutcome::moved`](crate::MoveOutcome) instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnError {
    EmptyGridExhausted(EmptyGridExhausted),
    InvalidMergeState(InvalidMergeState),
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::EmptyGridExhausted(err) => Some(err),
            TurnError::InvalidMergeState(err) => Some(err),
        }
    }
}

impl std::fmt::Display for TurnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnError::EmptyGridExhausted(_) => {
                write!(f, "Tried to spawn a tile after a move that left no empty cell")
            }
            TurnError::InvalidMergeState(_) => {
                write!(f, "The merge phase found a cell in an invalid state")
            }
        }
    }
}

impl From<EmptyGridExhausted> for TurnError {
    fn from(err: EmptyGridExhausted) -> Self {
        TurnError::EmptyGridExhausted(err)
    }
}

impl From<InvalidMergeState> for TurnError {
    fn from(err: InvalidMergeState) -> Self {
        TurnError::InvalidMergeState(err)
    }
}
