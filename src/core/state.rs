//! The aggregate game state and its construction.
//!
//! ## GameState
//!
//! The canonical snapshot: players, mountains, bonus pile, current dice,
//! phase, and turn bookkeeping. Every mutating engine operation clones
//! the input snapshot and returns a new one; callers may keep old
//! snapshots for undo, persistence, or speculative previews without
//! aliasing hazards. The inner `im` collections make those clones cheap.
//!
//! ## GameBuilder
//!
//! Fluent setup for a new game. Assigns player ids in seating order and
//! seeds the dice RNG (from entropy unless a seed is supplied).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::dice::{fresh_dice, Dice};
use super::mountain::{Mountain, MountainId, MountainMap};
use super::player::{Player, PlayerColor, PlayerId};
use super::rng::GameRng;
use crate::error::{Result, RulesError};

/// The fixed bonus-token values, claimed highest-first.
pub const BONUS_TOKENS: [u8; 4] = [15, 12, 9, 6];

/// Turn phase state machine value.
///
/// `Setup` is the pre-game placeholder a caller may hold before a game
/// exists; no engine transition ever enters it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Setup,
    Rolling,
    Grouping,
    Moving,
    Ended,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "setup",
            Phase::Rolling => "rolling",
            Phase::Grouping => "grouping",
            Phase::Moving => "moving",
            Phase::Ended => "ended",
        };
        f.write_str(name)
    }
}

/// Complete game state snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Players in seating order, fixed for the game's lifetime.
    pub players: Vec<Player>,
    /// Index of the player whose turn it is.
    pub current_player_index: usize,
    /// The six mountains and their token piles.
    pub mountains: MountainMap<Mountain>,
    /// Remaining bonus tokens, consumed from the front.
    pub bonus_token_pile: Vector<u8>,
    /// The four dice of the current turn.
    pub current_dice: Dice,
    /// Current phase.
    pub phase: Phase,
    /// Completed turns, incremented once per `execute_end_turn`.
    pub turn_count: u32,
    /// Latched true the first time the end condition fires.
    pub last_round_started: bool,
    /// Seat that took the first turn; the final round ends when play
    /// returns here.
    pub starting_player_index: usize,
    /// Dice randomness; rides in the snapshot so saved games keep their
    /// roll stream.
    pub rng: GameRng,
}

impl GameState {
    /// Create the initial state for a fresh game.
    ///
    /// Mountains get piles sized for the player count, the bonus pile
    /// starts at [15, 12, 9, 6], and the first seat is both current and
    /// starting player, ready to roll.
    ///
    /// Fails with `InvalidPlayerCount` outside 2-4 players.
    pub fn new(players: Vec<Player>, seed: u64) -> Result<Self> {
        if !(2..=4).contains(&players.len()) {
            return Err(RulesError::InvalidPlayerCount(players.len()));
        }

        let player_count = players.len();
        Ok(Self {
            players,
            current_player_index: 0,
            mountains: MountainMap::new(|id| Mountain::new(id, player_count)),
            bonus_token_pile: BONUS_TOKENS.iter().copied().collect(),
            current_dice: fresh_dice(),
            phase: Phase::Rolling,
            turn_count: 0,
            last_round_started: false,
            starting_player_index: 0,
            rng: GameRng::new(seed),
        })
    }

    /// Number of players in the game.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Look up a player's seating index by id.
    #[must_use]
    pub fn player_index(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Number of mountains whose token pile is exhausted.
    #[must_use]
    pub fn exhausted_mountain_count(&self) -> usize {
        self.mountains
            .iter()
            .filter(|(_, m)| m.is_exhausted())
            .count()
    }

    /// Ids of mountains whose token pile is exhausted, ascending.
    #[must_use]
    pub fn exhausted_mountains(&self) -> Vec<MountainId> {
        self.mountains
            .iter()
            .filter(|(_, m)| m.is_exhausted())
            .map(|(id, _)| id)
            .collect()
    }
}

/// Fluent game setup.
///
/// ```
/// use mountain_goats::core::{GameBuilder, Phase, PlayerColor};
///
/// let state = GameBuilder::new()
///     .add_player("Heidi", PlayerColor::Red)
///     .add_player("Peter", PlayerColor::Blue)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(state.player_count(), 2);
/// assert_eq!(state.phase, Phase::Rolling);
/// ```
#[derive(Debug, Default)]
pub struct GameBuilder {
    players: Vec<Player>,
    seed: Option<u64>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player; ids are assigned in seating order.
    ///
    /// Color uniqueness is the caller's contract, as it is for direct
    /// `GameState::new` construction.
    #[must_use]
    pub fn add_player(mut self, name: impl Into<String>, color: PlayerColor) -> Self {
        let id = PlayerId::new(self.players.len() as u32);
        self.players.push(Player::new(id, name, color));
        self
    }

    /// Seed the dice RNG for reproducible games.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the initial state.
    ///
    /// Fails with `InvalidPlayerCount` outside 2-4 players.
    pub fn build(self) -> Result<GameState> {
        let seed = self.seed.unwrap_or_else(|| GameRng::from_entropy().seed());
        GameState::new(self.players, seed)
    }
}
