//! Goat movement, knockoffs, token collection, and the bonus award.
//!
//! All functions here take a state snapshot and return a new one (or a
//! pure answer); the input is never mutated. A transition either fully
//! applies or fails before any change is observable.

use crate::core::mountain::MountainId;
use crate::core::player::{Player, PlayerId};
use crate::core::state::GameState;
use crate::error::{Result, RulesError};

/// Move a player's goat one step up a mountain.
///
/// A goat already at the summit stands still and collects a token if the
/// pile has one. Otherwise the goat advances by exactly one step; on
/// reaching the summit it knocks every other summit occupant back to
/// base and collects a token if the pile has one. An empty pile makes
/// collection a benign no-op.
///
/// The knockoff sweep deliberately checks all other players rather than
/// assuming a single occupant.
///
/// Fails with `PlayerNotFound` for an unknown id.
pub fn move_goat(
    state: &GameState,
    player_id: PlayerId,
    mountain_id: MountainId,
) -> Result<GameState> {
    let mut next = state.clone();
    let player_index = next
        .player_index(player_id)
        .ok_or(RulesError::PlayerNotFound(player_id))?;

    let summit = next.mountains[mountain_id].summit();
    let position = next.players[player_index].goat_positions[mountain_id];

    // Standing on the summit: collect without moving, no knockoff sweep.
    if position == summit {
        if let Some(token) = next.mountains[mountain_id].pop_token() {
            next.players[player_index].collected_tokens[mountain_id].push_back(token);
        }
        return Ok(next);
    }

    let new_position = position + 1;
    next.players[player_index].goat_positions[mountain_id] = new_position;

    if new_position == summit {
        for (i, other) in next.players.iter_mut().enumerate() {
            if i != player_index && other.goat_positions[mountain_id] == summit {
                other.goat_positions[mountain_id] = 0;
                tracing::info!(
                    knocked = %other.name,
                    mountain = %mountain_id,
                    "goat knocked off summit"
                );
            }
        }

        if let Some(token) = next.mountains[mountain_id].pop_token() {
            next.players[player_index].collected_tokens[mountain_id].push_back(token);
        }
    }

    Ok(next)
}

/// Award the front bonus token if the player qualifies.
///
/// Qualification: at least one collected token from every mountain, with
/// a non-empty bonus pile. Anything else (including an unknown id) is a
/// benign no-op; this never fails.
#[must_use]
pub fn check_and_award_bonus_token(state: &GameState, player_id: PlayerId) -> GameState {
    let mut next = state.clone();

    let Some(player_index) = next.player_index(player_id) else {
        return next;
    };
    if !next.players[player_index].has_token_from_each_mountain() {
        return next;
    }
    let Some(bonus) = next.bonus_token_pile.pop_front() else {
        return next;
    };

    next.players[player_index].bonus_tokens.push_back(bonus);
    tracing::info!(
        player = %next.players[player_index].name,
        value = bonus,
        "bonus token awarded"
    );
    next
}

/// Preview, without mutating, who a move on this mountain would knock
/// off.
///
/// Only a goat exactly one step below the summit can knock anyone off;
/// in every other situation (including an unknown player id) this is
/// `None`.
#[must_use]
pub fn will_knock_off<'a>(
    state: &'a GameState,
    player_id: PlayerId,
    mountain_id: MountainId,
) -> Option<&'a Player> {
    let player = state.player(player_id)?;
    let summit = state.mountains[mountain_id].summit();

    if player.goat_positions[mountain_id] != summit - 1 {
        return None;
    }

    state
        .players
        .iter()
        .find(|other| other.id != player_id && other.goat_positions[mountain_id] == summit)
}

/// Preview whether a move on this mountain would collect a token.
///
/// True iff the pile still has tokens and the goat is at the summit or
/// one step below it.
#[must_use]
pub fn will_collect_token(state: &GameState, player_id: PlayerId, mountain_id: MountainId) -> bool {
    let Some(player) = state.player(player_id) else {
        return false;
    };
    let mountain = &state.mountains[mountain_id];

    !mountain.is_exhausted() && player.goat_positions[mountain_id] >= mountain.summit() - 1
}
