//! # mountain-goats
//!
//! Rules engine for the Mountain Goats dice game: 2-4 players roll four
//! dice, partition them into groups, climb the six numbered mountains,
//! collect summit tokens, knock each other off contested summits, and
//! race for the cross-mountain bonus tokens before the game ends.
//!
//! ## Design Principles
//!
//! 1. **Snapshot Transitions**: Every mutating operation takes a state
//!    snapshot and returns a new, fully independent one. Callers may
//!    keep any number of old snapshots (undo, persistence, previews)
//!    without aliasing hazards; `im` persistent structures keep the
//!    clones cheap.
//!
//! 2. **Typed Phase Machine**: A closed `Phase` enum with transitions
//!    that fail fast on the wrong phase, as distinguishable error
//!    variants. A transition either fully applies or is rejected before
//!    any mutation is observable.
//!
//! 3. **Seeded Randomness**: Dice rolling is the only nondeterminism,
//!    and the RNG rides inside the snapshot. Same seed, same inputs,
//!    same game.
//!
//! ## Modules
//!
//! - `core`: players, mountains, dice, RNG, the aggregate `GameState`
//! - `rules`: stateless primitives (grouping enumeration, the
//!   multiple-ones rule, movement/knockoff/bonus)
//! - `flow`: the per-turn phase state machine
//! - `endgame`: end trigger, final-round countdown, rankings with
//!   tiebreakers
//! - `error`: the engine error taxonomy

pub mod core;
pub mod endgame;
pub mod error;
pub mod flow;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Dice, Die, GameBuilder, GameRng, GameRngState, GameState, Mountain, MountainId, MountainMap,
    OneModifications, Phase, Player, PlayerColor, PlayerId, BONUS_TOKENS, DICE_COUNT,
};

pub use crate::error::RulesError;

pub use crate::rules::{
    apply_one_modifications, check_and_award_bonus_token, count_ones, find_modifiable_ones,
    generate_all_groupings, group_sum, grouping, move_goat, valid_groupings,
    valid_moves_from_groups, validate_groups, will_collect_token, will_knock_off, Group, Grouping,
    GroupingOption,
};

pub use crate::flow::{
    all_dice_grouped, assign_die_to_group, execute_end_turn, execute_groups, execute_modify_ones,
    execute_roll, groups_from_dice, turn_state, MoveOutcome, TurnResult, TurnView,
};

pub use crate::endgame::{
    check_end_condition, end_game, end_game_reason, game_results, remaining_turns,
    should_game_end, start_last_round, GameResults, PlayerRanking,
};
