//! End-game evaluation: trigger detection, final-round countdown, and
//! final rankings.

pub mod evaluator;
pub mod results;

pub use evaluator::{
    check_end_condition, end_game, end_game_reason, remaining_turns, should_game_end,
    start_last_round,
};
pub use results::{game_results, GameResults, PlayerRanking};
