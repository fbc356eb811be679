//! Engine error taxonomy.
//!
//! Precondition violations surface as typed variants; benign game
//! conditions (empty piles, unqualified bonus checks, vacant summits)
//! are not errors and never appear here.

use thiserror::Error;

use crate::core::player::PlayerId;
use crate::core::state::Phase;

/// Errors raised by engine transitions and queries.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    /// Game creation with a player count outside 2-4.
    #[error("game requires 2-4 players, got {0}")]
    InvalidPlayerCount(usize),

    /// A transition was requested in the wrong phase.
    #[error("transition requires the {expected} phase, but the game is in {actual}")]
    IllegalPhaseTransition {
        /// Phase the transition requires.
        expected: Phase,
        /// Phase the state was actually in.
        actual: Phase,
    },

    /// A player id that does not match any player in the state.
    #[error("{0} not found in this game")]
    PlayerNotFound(PlayerId),

    /// A grouping that is not a set partition of the four die slots.
    #[error("grouping must assign every die to exactly one group")]
    InvalidGrouping,

    /// A ones-modification targeting the locked first "1", or an
    /// out-of-range replacement face.
    #[error("illegal modification of die slot {0}")]
    InvalidModification(usize),

    /// Results were requested before the game ended.
    #[error("game has not ended")]
    GameNotEnded,
}

/// Convenience alias for engine results.
pub type Result<T> = std::result::Result<T, RulesError>;
