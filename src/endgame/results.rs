//! Final ranking with tiebreakers.
//!
//! Scores are sorted descending, then a single adjacent scan resolves
//! equal-score pairs: more goats currently at a summit wins; failing
//! that, the highest-numbered summited mountain wins (no summit counts
//! as 0); failing both, the pair stays tied in place. Ranks are dense:
//! equal scores share a rank, and the rank only moves when the score
//! changes.

use serde::{Deserialize, Serialize};

use crate::core::mountain::MountainId;
use crate::core::player::Player;
use crate::core::state::{GameState, Phase};
use crate::error::{Result, RulesError};

/// One player's final standing. The embedded player carries the full
/// score breakdown: per-mountain collected tokens and bonus tokens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerRanking {
    pub player: Player,
    /// Dense rank, 1 = winner.
    pub rank: usize,
    /// Mountain tokens plus bonus tokens.
    pub score: u32,
    /// Goats standing on a summit at game end.
    pub goats_at_summit: usize,
    /// Highest-numbered mountain summited at game end.
    pub highest_summit: Option<MountainId>,
    /// Diagnostic tiebreaker note, attached to the top entry only.
    pub tiebreaker_reason: Option<String>,
}

/// Full game results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameResults {
    /// All players, best first.
    pub rankings: Vec<PlayerRanking>,
    /// The rank-1 player.
    pub winner: Player,
    /// True iff the top scores are equal and no tiebreaker separated
    /// them.
    pub is_tie: bool,
    /// Whether any tiebreaker reordered or judged an equal-score pair.
    pub tiebreaker_applied: bool,
    /// Diagnostic note describing the decisive tiebreaker, if any.
    pub tiebreaker_explanation: Option<String>,
}

struct Standing {
    player: Player,
    score: u32,
    goats: usize,
    highest: Option<MountainId>,
}

/// Compute the final rankings.
///
/// Fails with `GameNotEnded` unless the phase is `Ended`.
pub fn game_results(state: &GameState) -> Result<GameResults> {
    if state.phase != Phase::Ended {
        return Err(RulesError::GameNotEnded);
    }

    let mut standings: Vec<Standing> = state
        .players
        .iter()
        .map(|p| Standing {
            score: p.total_score(),
            goats: p.goats_at_summit(),
            highest: p.highest_summit_mountain(),
            player: p.clone(),
        })
        .collect();

    // Stable sort keeps seating order within equal scores until a
    // tiebreaker says otherwise.
    standings.sort_by(|a, b| b.score.cmp(&a.score));

    let mut tiebreaker_applied = false;
    let mut tiebreaker_explanation: Option<String> = None;

    for i in 0..standings.len().saturating_sub(1) {
        if standings[i].score != standings[i + 1].score {
            continue;
        }

        if standings[i].goats != standings[i + 1].goats {
            tiebreaker_applied = true;
            if standings[i].goats < standings[i + 1].goats {
                standings.swap(i, i + 1);
            }
            tiebreaker_explanation = Some(format!(
                "{} wins the tiebreaker with {} goats at a summit vs {}",
                standings[i].player.name,
                standings[i].goats,
                standings[i + 1].goats
            ));
        } else {
            let upper = standings[i].highest.map_or(0, MountainId::raw);
            let lower = standings[i + 1].highest.map_or(0, MountainId::raw);
            if upper != lower {
                tiebreaker_applied = true;
                if upper < lower {
                    standings.swap(i, i + 1);
                }
                tiebreaker_explanation = Some(format!(
                    "{} wins the tiebreaker with a goat on mountain {} vs mountain {}",
                    standings[i].player.name,
                    upper.max(lower),
                    upper.min(lower)
                ));
            }
        }
    }

    let mut rankings = Vec::with_capacity(standings.len());
    let mut current_rank = 1;
    let mut previous_score: Option<u32> = None;

    for (i, standing) in standings.into_iter().enumerate() {
        if previous_score != Some(standing.score) {
            current_rank = i + 1;
        }
        previous_score = Some(standing.score);

        rankings.push(PlayerRanking {
            rank: current_rank,
            score: standing.score,
            goats_at_summit: standing.goats,
            highest_summit: standing.highest,
            tiebreaker_reason: if i == 0 && tiebreaker_applied {
                tiebreaker_explanation.clone()
            } else {
                None
            },
            player: standing.player,
        });
    }

    let winner = rankings[0].player.clone();
    let is_tie =
        rankings.len() > 1 && rankings[0].score == rankings[1].score && !tiebreaker_applied;

    Ok(GameResults {
        rankings,
        winner,
        is_tie,
        tiebreaker_applied,
        tiebreaker_explanation,
    })
}
