use thiserror::Error;

/// Error types for the Shapley aggregation engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapleyError {
    /// No orderings were processed, so there is nothing to average over
    #[error("Cannot average over zero orderings; the player set is empty.")]
    DivisionByZero,

    /// Monte Carlo sampling needs at least one trial
    #[error("The number of Monte Carlo trials must be positive, got {trials}.")]
    InvalidTrialCount { trials: i64 },

    /// The value function left out a player that is part of the ordering
    #[error("The value function returned no marginal value for player {player}.")]
    MissingPlayer { player: String },

    /// The value function reported a player that is not part of the ordering
    #[error("The value function returned player {player}, which is not in the ordering.")]
    UnexpectedPlayer { player: String },

    /// Players must be distinct
    #[error("Player {player} appears more than once in the player set.")]
    DuplicatePlayer { player: String },
}

/// Coarse classification of [`ShapleyError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DivisionByZero,
    InvalidArgument,
}

impl ShapleyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShapleyError::DivisionByZero => ErrorKind::DivisionByZero,
            ShapleyError::InvalidTrialCount { .. }
            | ShapleyError::MissingPlayer { .. }
            | ShapleyError::UnexpectedPlayer { .. }
            | ShapleyError::DuplicatePlayer { .. } => ErrorKind::InvalidArgument,
        }
    }
}

/// Result type alias for Shapley operations
pub type Result<T> = std::result::Result<T, ShapleyError>;
