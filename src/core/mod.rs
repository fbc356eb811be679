//! Core engine types: players, mountains, dice, RNG, aggregate state.
//!
//! These are the fundamental building blocks the rules primitives and
//! the turn flow operate on. Everything here is a plain value type;
//! behavior lives in `rules`, `flow`, and `endgame`.

pub mod dice;
pub mod mountain;
pub mod player;
pub mod rng;
pub mod state;

pub use dice::{dice_rolled, fresh_dice, Dice, Die, OneModifications, DICE_COUNT};
pub use mountain::{Mountain, MountainId, MountainMap};
pub use player::{Player, PlayerColor, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use state::{GameBuilder, GameState, Phase, BONUS_TOKENS};
