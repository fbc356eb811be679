//! Mountains: the six numbered tracks goats ascend.
//!
//! ## MountainId
//!
//! Type-safe track identifier restricted to 5-10. The id doubles as the
//! dice-sum target for reaching the track and as the point value of every
//! token in its pile.
//!
//! ## MountainMap
//!
//! Fixed-size per-mountain storage backed by `[T; 6]` with O(1) access.
//! Supports iteration and indexing by `MountainId`.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Mountain identifier (5-10).
///
/// A dice group whose values sum to a mountain id moves a goat on that
/// mountain; sums outside 5-10 target no mountain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MountainId(u8);

impl MountainId {
    /// All mountain ids in ascending order.
    pub const ALL: [MountainId; 6] = [
        MountainId(5),
        MountainId(6),
        MountainId(7),
        MountainId(8),
        MountainId(9),
        MountainId(10),
    ];

    /// Interpret a dice-group sum as a mountain id.
    ///
    /// Returns `None` for sums outside 5-10 (the dice in such a group are
    /// wasted for the turn).
    ///
    /// ```
    /// use mountain_goats::core::MountainId;
    ///
    /// assert!(MountainId::try_from_sum(7).is_some());
    /// assert!(MountainId::try_from_sum(4).is_none());
    /// assert!(MountainId::try_from_sum(11).is_none());
    /// ```
    #[must_use]
    pub fn try_from_sum(sum: u32) -> Option<Self> {
        if (5..=10).contains(&sum) {
            Some(Self(sum as u8))
        } else {
            None
        }
    }

    /// Get the raw id value (5-10).
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Steps from base to summit. Fixed per id and deliberately
    /// asymmetric: the high-value mountain 10 has the shortest path.
    #[must_use]
    pub const fn path_length(self) -> u8 {
        match self.0 {
            5 => 4,
            6 => 5,
            7 => 6,
            8 => 5,
            9 => 4,
            _ => 3, // 10
        }
    }

    /// Token count for a full (4-player) pile. Equals the id.
    #[must_use]
    pub const fn base_token_count(self) -> u8 {
        self.0
    }

    /// Position index within `MountainId::ALL`.
    #[must_use]
    const fn index(self) -> usize {
        (self.0 - 5) as usize
    }
}

impl std::fmt::Display for MountainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mountain {}", self.0)
    }
}

/// Per-mountain data storage with O(1) access.
///
/// Backed by a `[T; 6]` with one entry per mountain id 5-10.
///
/// ## Example
///
/// ```
/// use mountain_goats::core::{MountainId, MountainMap};
///
/// let mut positions: MountainMap<u8> = MountainMap::with_value(0);
/// let ten = MountainId::try_from_sum(10).unwrap();
///
/// positions[ten] = 2;
/// assert_eq!(positions[ten], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MountainMap<T> {
    data: [T; 6],
}

impl<T> MountainMap<T> {
    /// Create a new map with values from a factory function.
    ///
    /// The factory receives the `MountainId` for each entry.
    pub fn new(factory: impl Fn(MountainId) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(MountainId::ALL[i])),
        }
    }

    /// Create a new map with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a mountain's entry.
    #[must_use]
    pub fn get(&self, id: MountainId) -> &T {
        &self.data[id.index()]
    }

    /// Get a mutable reference to a mountain's entry.
    pub fn get_mut(&mut self, id: MountainId) -> &mut T {
        &mut self.data[id.index()]
    }

    /// Iterate over (MountainId, &T) pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (MountainId, &T)> {
        MountainId::ALL.iter().copied().zip(self.data.iter())
    }
}

impl<T> Index<MountainId> for MountainMap<T> {
    type Output = T;

    fn index(&self, id: MountainId) -> &Self::Output {
        self.get(id)
    }
}

impl<T> IndexMut<MountainId> for MountainMap<T> {
    fn index_mut(&mut self, id: MountainId) -> &mut Self::Output {
        self.get_mut(id)
    }
}

/// A numbered track with its remaining token pile.
///
/// The pile is a stack popped from the back; its length only decreases
/// after creation. Every token carries the mountain's id as its value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mountain {
    /// Track identity.
    pub id: MountainId,
    /// Steps from base to summit.
    pub path_length: u8,
    /// Remaining point tokens, top at the back.
    pub token_pile: Vector<u8>,
}

impl Mountain {
    /// Create a mountain with a fresh pile sized for `player_count`.
    #[must_use]
    pub fn new(id: MountainId, player_count: usize) -> Self {
        Self {
            id,
            path_length: id.path_length(),
            token_pile: Self::starting_pile(id, player_count),
        }
    }

    /// Build the starting token pile for a mountain.
    ///
    /// The full pile holds `base_token_count` tokens, each valued at the
    /// mountain id. Smaller games play with thinner piles: 2 players
    /// remove two tokens per pile, 3 players remove one. The subtraction
    /// saturates so a pile can never go negative.
    #[must_use]
    pub fn starting_pile(id: MountainId, player_count: usize) -> Vector<u8> {
        let deduction: u8 = match player_count {
            2 => 2,
            3 => 1,
            _ => 0,
        };
        let count = id.base_token_count().saturating_sub(deduction);
        std::iter::repeat(id.raw()).take(count as usize).collect()
    }

    /// The summit position on this track.
    #[must_use]
    pub fn summit(&self) -> u8 {
        self.path_length
    }

    /// Pop the top token, if any remain.
    pub fn pop_token(&mut self) -> Option<u8> {
        self.token_pile.pop_back()
    }

    /// Whether the pile has been emptied.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.token_pile.is_empty()
    }
}
