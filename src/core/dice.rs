//! Dice: the four dice rolled each turn.
//!
//! A die's identity is its slot index 0-3 in the `[Die; 4]` array. Dice
//! are recreated wholesale at each roll; group assignments and the
//! modified flag never survive into the next roll.

use serde::{Deserialize, Serialize};

/// Number of dice rolled per turn.
pub const DICE_COUNT: usize = 4;

/// The four dice of the current turn, slot 0 first.
pub type Dice = [Die; DICE_COUNT];

/// A single die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    /// Face value: 0 before the first roll of a turn, otherwise 1-6.
    pub value: u8,
    /// Grouping this die was assigned to, for display.
    pub group: Option<u8>,
    /// Whether this die was an extra "1" that got changed.
    pub modified: bool,
}

impl Die {
    /// A die that has not been rolled yet.
    #[must_use]
    pub const fn unrolled() -> Self {
        Self {
            value: 0,
            group: None,
            modified: false,
        }
    }

    /// A freshly rolled die showing `value`.
    #[must_use]
    pub const fn rolled(value: u8) -> Self {
        Self {
            value,
            group: None,
            modified: false,
        }
    }
}

/// Four unrolled dice, as handed to a player whose turn is starting.
#[must_use]
pub const fn fresh_dice() -> Dice {
    [Die::unrolled(); DICE_COUNT]
}

/// Whether every die shows a rolled face.
#[must_use]
pub fn dice_rolled(dice: &Dice) -> bool {
    dice.iter().all(|d| d.value > 0)
}

/// Replacement faces for extra ones, keyed by die slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneModifications {
    slots: [Option<u8>; DICE_COUNT],
}

impl OneModifications {
    /// An empty modification set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; DICE_COUNT],
        }
    }

    /// Request that the die in `slot` be changed to `value`.
    #[must_use]
    pub const fn with(mut self, slot: usize, value: u8) -> Self {
        self.slots[slot] = Some(value);
        self
    }

    /// The requested replacement for `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<u8> {
        self.slots.get(slot).copied().flatten()
    }

    /// Iterate over (slot, replacement value) pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, v)| v.map(|value| (slot, value)))
    }

    /// Whether no modification is requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
