//! End-of-game triggering and the final-round countdown.
//!
//! The trigger is evaluated after every grouping confirmation: once the
//! bonus pile is empty or three mountains are bare, the last round
//! starts, and the game ends when play comes back around to the
//! starting player so everyone gets an equal number of turns.

use crate::core::state::{GameState, Phase};

/// Whether the end condition currently holds.
///
/// True iff the bonus pile is empty or at least 3 of the 6 mountains
/// have exhausted their token piles. Pure predicate.
#[must_use]
pub fn check_end_condition(state: &GameState) -> bool {
    state.bonus_token_pile.is_empty() || state.exhausted_mountain_count() >= 3
}

/// Latch the last-round flag.
///
/// Idempotent; the turn flow calls this the first time
/// `check_end_condition` fires.
#[must_use]
pub fn start_last_round(state: &GameState) -> GameState {
    let mut next = state.clone();
    if !next.last_round_started {
        tracing::info!(turn = next.turn_count, "last round started");
    }
    next.last_round_started = true;
    next
}

/// Whether the final round has completed.
///
/// True iff the last round has started and the turn has cycled back to
/// the starting player.
#[must_use]
pub fn should_game_end(state: &GameState) -> bool {
    state.last_round_started && state.current_player_index == state.starting_player_index
}

/// Mark the game ended. Terminal: no transition leaves `Ended`.
#[must_use]
pub fn end_game(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.phase = Phase::Ended;
    tracing::info!(turns = next.turn_count, "game ended");
    next
}

/// Turns left until the game ends, for display. `None` before the last
/// round starts.
#[must_use]
pub fn remaining_turns(state: &GameState) -> Option<usize> {
    if !state.last_round_started {
        return None;
    }

    let current = state.current_player_index;
    let start = state.starting_player_index;
    Some(if current >= start {
        state.players.len() - current + start
    } else {
        start - current
    })
}

/// Why the game is ending, as a diagnostic note. `None` before the last
/// round starts.
#[must_use]
pub fn end_game_reason(state: &GameState) -> Option<String> {
    if !state.last_round_started {
        return None;
    }

    if state.bonus_token_pile.is_empty() {
        return Some("all bonus tokens have been claimed".to_string());
    }

    let exhausted = state.exhausted_mountains();
    if exhausted.len() >= 3 {
        let ids: Vec<String> = exhausted.iter().map(|m| m.raw().to_string()).collect();
        return Some(format!(
            "{} mountains have exhausted their token piles: {}",
            exhausted.len(),
            ids.join(", ")
        ));
    }

    None
}
