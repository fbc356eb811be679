//! The per-turn phase state machine.
//!
//! Sequences the rules primitives into phases:
//!
//! ```text
//! rolling -> grouping -> moving -> rolling (next player) -> ... -> ended
//! ```
//!
//! `execute_roll` and `execute_groups` enforce their phase precondition
//! with a typed error. The multiple-ones step happens inside the
//! grouping phase, before any grouping is confirmed: the caller presents
//! `find_modifiable_ones` and applies the player's choices through
//! `execute_modify_ones`, which changes no phase and may be called
//! repeatedly (the engine keeps no history of the step; presenting it at
//! most once per roll is the display layer's job).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::dice::{fresh_dice, Dice, Die, OneModifications};
use crate::core::mountain::MountainId;
use crate::core::state::{GameState, Phase};
use crate::error::{Result, RulesError};
use crate::rules::grouping::{valid_moves_from_groups, validate_groups, Group, Grouping};
use crate::rules::movement::{check_and_award_bonus_token, move_goat, will_knock_off};
use crate::rules::ones::{apply_one_modifications, find_modifiable_ones};

/// What one executed move did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The mountain the goat moved on (or collected from at the summit).
    pub mountain: MountainId,
    /// Value of the token collected, if any.
    pub token_collected: Option<u8>,
    /// Name of the player knocked off the summit, if any.
    pub knocked_off: Option<String>,
}

/// Result of confirming a grouping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    /// The state after all moves and the bonus check.
    pub state: GameState,
    /// Per-move outcomes in execution order.
    pub moves: Vec<MoveOutcome>,
    /// Bonus token value awarded this turn, if any.
    pub bonus_awarded: Option<u8>,
}

/// Roll four fresh dice for the current player.
///
/// Requires the `Rolling` phase; transitions to `Grouping`
/// unconditionally (any multiple-ones handling happens there).
pub fn execute_roll(state: &GameState) -> Result<GameState> {
    if state.phase != Phase::Rolling {
        return Err(RulesError::IllegalPhaseTransition {
            expected: Phase::Rolling,
            actual: state.phase,
        });
    }

    let mut next = state.clone();
    let values = next.rng.roll_dice();
    next.current_dice = values.map(Die::rolled);
    next.phase = Phase::Grouping;

    tracing::debug!(player = %next.current_player().name, ?values, "dice rolled");
    Ok(next)
}

/// Apply the player's replacement faces for extra ones.
///
/// Phase is unchanged. Fails with `InvalidModification` if the locked
/// first "1" is targeted or a face is outside 1-6, with no partial
/// application.
pub fn execute_modify_ones(state: &GameState, mods: &OneModifications) -> Result<GameState> {
    let dice = apply_one_modifications(&state.current_dice, mods)?;
    let mut next = state.clone();
    next.current_dice = dice;
    Ok(next)
}

/// Confirm a grouping and execute its moves.
///
/// Requires the `Grouping` phase and a grouping that partitions the die
/// slots (`InvalidGrouping` otherwise). Each valid move executes in
/// supplied-group order against the state left by the previous move, so
/// a second move to the same mountain sees the first one's
/// consequences. Dice are annotated with their group index for display,
/// the bonus check runs once for the acting player, and the phase
/// becomes `Moving`.
pub fn execute_groups(state: &GameState, groups: &[Group]) -> Result<TurnResult> {
    if state.phase != Phase::Grouping {
        return Err(RulesError::IllegalPhaseTransition {
            expected: Phase::Grouping,
            actual: state.phase,
        });
    }
    if !validate_groups(groups) {
        return Err(RulesError::InvalidGrouping);
    }

    let mut next = state.clone();
    let player_id = next.current_player().id;

    let targets = valid_moves_from_groups(&next.current_dice, groups);
    let mut moves = Vec::with_capacity(targets.len());

    for mountain_id in targets {
        let knocked_off = will_knock_off(&next, player_id, mountain_id).map(|p| p.name.clone());
        let pile_before = next.mountains[mountain_id].token_pile.len();

        next = move_goat(&next, player_id, mountain_id)?;

        let token_collected = if next.mountains[mountain_id].token_pile.len() < pile_before {
            Some(mountain_id.raw())
        } else {
            None
        };

        moves.push(MoveOutcome {
            mountain: mountain_id,
            token_collected,
            knocked_off,
        });
    }

    for (group_index, group) in groups.iter().enumerate() {
        for &slot in group {
            next.current_dice[slot].group = Some(group_index as u8);
        }
    }

    let bonus_before = next.players[next.current_player_index].bonus_tokens.len();
    next = check_and_award_bonus_token(&next, player_id);
    let bonus_tokens = &next.players[next.current_player_index].bonus_tokens;
    let bonus_awarded = if bonus_tokens.len() > bonus_before {
        bonus_tokens.back().copied()
    } else {
        None
    };

    next.phase = Phase::Moving;
    tracing::debug!(
        player = %next.players[next.current_player_index].name,
        move_count = moves.len(),
        "grouping executed"
    );

    Ok(TurnResult {
        state: next,
        moves,
        bonus_awarded,
    })
}

/// Hand the turn to the next player.
///
/// Advances the seat, counts the completed turn, resets the dice, and
/// returns to `Rolling`. Legal from any phase: the display layer drives
/// this from `Moving` (see `TurnView::can_end_turn`), but
/// replay/recovery callers may re-sequence turns freely.
#[must_use]
pub fn execute_end_turn(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.current_player_index = (next.current_player_index + 1) % next.players.len();
    next.turn_count += 1;
    next.current_dice = fresh_dice();
    next.phase = Phase::Rolling;
    next
}

/// Read-only view of what the current player may do.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnView {
    pub phase: Phase,
    pub current_player_name: String,
    pub can_roll: bool,
    pub can_group: bool,
    pub can_end_turn: bool,
    /// True exactly when grouping is pending an unresolved multiple-ones
    /// decision: grouping phase, at least one modifiable "1", and no die
    /// modified yet.
    pub has_modifiable_ones: bool,
    /// Slots of the ones the player may still change.
    pub modifiable_one_slots: Vec<usize>,
}

/// Derive the current turn view from a snapshot.
#[must_use]
pub fn turn_state(state: &GameState) -> TurnView {
    let modifiable_one_slots = find_modifiable_ones(&state.current_dice);
    let has_modifiable_ones = state.phase == Phase::Grouping
        && !modifiable_one_slots.is_empty()
        && !state.current_dice.iter().any(|d| d.modified);

    TurnView {
        phase: state.phase,
        current_player_name: state.current_player().name.clone(),
        can_roll: state.phase == Phase::Rolling,
        can_group: state.phase == Phase::Grouping && !has_modifiable_ones,
        can_end_turn: state.phase == Phase::Moving,
        has_modifiable_ones,
        modifiable_one_slots,
    }
}

/// Assign (or clear) a die's display group.
///
/// Pure helper for callers assembling a grouping die by die before
/// confirming it.
#[must_use]
pub fn assign_die_to_group(dice: &Dice, slot: usize, group: Option<u8>) -> Dice {
    let mut out = *dice;
    if let Some(die) = out.get_mut(slot) {
        die.group = group;
    }
    out
}

/// Rebuild a grouping from per-die group annotations.
///
/// Groups appear in order of first annotated die; unassigned dice are
/// skipped (the result only partitions the slots once every die carries
/// a group).
#[must_use]
pub fn groups_from_dice(dice: &Dice) -> Grouping {
    let mut labels: SmallVec<[u8; 4]> = SmallVec::new();
    let mut grouping = Grouping::new();

    for (slot, die) in dice.iter().enumerate() {
        if let Some(label) = die.group {
            match labels.iter().position(|&l| l == label) {
                Some(i) => grouping[i].push(slot),
                None => {
                    labels.push(label);
                    grouping.push(Group::from_slice(&[slot]));
                }
            }
        }
    }
    grouping
}

/// Whether every die has been assigned to a group.
#[must_use]
pub fn all_dice_grouped(dice: &Dice) -> bool {
    dice.iter().all(|d| d.group.is_some())
}
