//! Player identity and per-player game holdings.
//!
//! ## PlayerId
//!
//! Stable type-safe identifier. Ids are assigned by the caller (or by
//! `GameBuilder`) and never change for the lifetime of a game.
//!
//! ## Player
//!
//! One goat position per mountain, the tokens collected from each
//! mountain, and any bonus tokens. Positions only ever advance by one
//! step or reset to base via a knockoff; collection lists are
//! append-only.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::mountain::{MountainId, MountainMap};

/// Stable player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// The four goat colors. Uniqueness per game is the caller's contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl PlayerColor {
    /// All colors in seating order.
    pub const ALL: [PlayerColor; 4] = [
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Green,
        PlayerColor::Yellow,
    ];
}

/// A player and everything they hold on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identity.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Goat color.
    pub color: PlayerColor,
    /// Goat position per mountain, 0 = base, `path_length` = summit.
    pub goat_positions: MountainMap<u8>,
    /// Tokens collected per mountain, append-only.
    pub collected_tokens: MountainMap<Vector<u8>>,
    /// Bonus token values collected, append-only.
    pub bonus_tokens: Vector<u8>,
}

impl Player {
    /// Create a player with all goats at base and nothing collected.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            goat_positions: MountainMap::with_value(0),
            collected_tokens: MountainMap::new(|_| Vector::new()),
            bonus_tokens: Vector::new(),
        }
    }

    /// Total score: every collected mountain token plus every bonus token.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        let mountain: u32 = self
            .collected_tokens
            .iter()
            .flat_map(|(_, tokens)| tokens.iter())
            .map(|&v| u32::from(v))
            .sum();
        let bonus: u32 = self.bonus_tokens.iter().map(|&v| u32::from(v)).sum();
        mountain + bonus
    }

    /// Whether the player holds at least one token from every mountain.
    ///
    /// This is the bonus-token qualification test.
    #[must_use]
    pub fn has_token_from_each_mountain(&self) -> bool {
        self.collected_tokens.iter().all(|(_, tokens)| !tokens.is_empty())
    }

    /// Number of this player's goats currently standing on a summit.
    #[must_use]
    pub fn goats_at_summit(&self) -> usize {
        self.goat_positions
            .iter()
            .filter(|&(id, &pos)| pos == id.path_length())
            .count()
    }

    /// The highest-numbered mountain where this player's goat is at the
    /// summit, if any. Second-level tiebreaker input.
    #[must_use]
    pub fn highest_summit_mountain(&self) -> Option<MountainId> {
        self.goat_positions
            .iter()
            .filter(|&(id, &pos)| pos == id.path_length())
            .map(|(id, _)| id)
            .max()
    }
}
