//! Dice grouping: set partitions of the four die slots.
//!
//! A grouping partitions the rolled dice into 1-4 non-empty groups. Each
//! group's sum either targets a mountain (5-10) or wastes its dice for
//! the turn. For four dice there are exactly 15 distinct partitions (the
//! Bell number B(4)), enumerated here recursively: the first slot either
//! forms its own group or joins each group of a partition of the rest.

use smallvec::SmallVec;

use crate::core::dice::{Dice, DICE_COUNT};
use crate::core::mountain::MountainId;

/// One group of die slots. At most four entries, so it stays inline.
pub type Group = SmallVec<[usize; DICE_COUNT]>;

/// A full grouping: 1-4 non-empty groups.
pub type Grouping = SmallVec<[Group; DICE_COUNT]>;

/// Build a grouping from slices of die slots.
///
/// ```
/// use mountain_goats::rules::{grouping, validate_groups};
///
/// let g = grouping(&[&[0, 1], &[2, 3]]);
/// assert!(validate_groups(&g));
/// ```
#[must_use]
pub fn grouping(groups: &[&[usize]]) -> Grouping {
    groups.iter().map(|g| Group::from_slice(g)).collect()
}

/// Check that a grouping is a set partition of the die slots.
///
/// Valid iff every slot 0-3 appears in exactly one group: no omissions,
/// no duplicates, no out-of-range indices.
#[must_use]
pub fn validate_groups(groups: &[Group]) -> bool {
    let mut seen = [false; DICE_COUNT];
    let mut assigned = 0usize;

    for group in groups {
        for &slot in group {
            if slot >= DICE_COUNT || seen[slot] {
                return false;
            }
            seen[slot] = true;
            assigned += 1;
        }
    }

    assigned == DICE_COUNT
}

/// Sum of the die values a group references.
///
/// Out-of-range slots contribute 0; valid input never contains any.
#[must_use]
pub fn group_sum(dice: &Dice, group: &[usize]) -> u32 {
    group
        .iter()
        .map(|&slot| dice.get(slot).map_or(0, |d| u32::from(d.value)))
        .sum()
}

/// Extract the mountain moves a grouping produces, in group order.
///
/// Groups summing outside 5-10 yield no move. The same mountain may
/// appear more than once; each occurrence is an independent move.
#[must_use]
pub fn valid_moves_from_groups(dice: &Dice, groups: &[Group]) -> Vec<MountainId> {
    groups
        .iter()
        .filter_map(|group| MountainId::try_from_sum(group_sum(dice, group)))
        .collect()
}

/// Enumerate every set partition of the four die slots.
///
/// Exactly 15 groupings, each covering all slots once, no partition
/// repeated. Group-label order within a partition carries no meaning.
#[must_use]
pub fn generate_all_groupings() -> Vec<Grouping> {
    let slots: [usize; DICE_COUNT] = std::array::from_fn(|i| i);
    partitions(&slots)
}

fn partitions(slots: &[usize]) -> Vec<Grouping> {
    let Some((&first, rest)) = slots.split_first() else {
        return vec![Grouping::new()];
    };

    let mut out = Vec::new();
    for partial in partitions(rest) {
        // The first slot forms its own group.
        let mut own = Grouping::new();
        own.push(Group::from_slice(&[first]));
        own.extend(partial.iter().cloned());
        out.push(own);

        // Or joins each existing group in turn.
        for i in 0..partial.len() {
            let mut joined = partial.clone();
            joined[i].insert(0, first);
            out.push(joined);
        }
    }
    out
}

/// A grouping paired with the moves it would produce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupingOption {
    /// The partition of die slots.
    pub grouping: Grouping,
    /// Mountain moves the partition yields, in group order.
    pub moves: Vec<MountainId>,
}

/// All groupings of the current dice that produce at least one move.
#[must_use]
pub fn valid_groupings(dice: &Dice) -> Vec<GroupingOption> {
    generate_all_groupings()
        .into_iter()
        .filter_map(|g| {
            let moves = valid_moves_from_groups(dice, &g);
            if moves.is_empty() {
                None
            } else {
                Some(GroupingOption { grouping: g, moves })
            }
        })
        .collect()
}
