//! The multiple-ones rule.
//!
//! When a roll shows more than one "1", the first rolled "1" (lowest
//! slot) is locked and every further "1" may be changed to any face the
//! player likes before grouping. Changed dice carry a `modified` flag so
//! the display layer can mark them.

use crate::core::dice::{Dice, Die, OneModifications};
use crate::error::{Result, RulesError};

/// Count the dice showing a "1".
#[must_use]
pub fn count_ones(dice: &Dice) -> usize {
    dice.iter().filter(|d| d.value == 1).count()
}

/// Slot of the locked first "1", if the roll contains any ones.
#[must_use]
fn locked_one_slot(dice: &Dice) -> Option<usize> {
    dice.iter().position(|d| d.value == 1)
}

/// Slots of the ones a player may change, in slot order.
///
/// The first rolled "1" is always locked and never appears here.
///
/// ```
/// use mountain_goats::core::Die;
/// use mountain_goats::rules::find_modifiable_ones;
///
/// let dice = [1, 1, 1, 4].map(Die::rolled);
/// assert_eq!(find_modifiable_ones(&dice), vec![1, 2]);
/// ```
#[must_use]
pub fn find_modifiable_ones(dice: &Dice) -> Vec<usize> {
    dice.iter()
        .enumerate()
        .filter(|(_, d)| d.value == 1)
        .map(|(slot, _)| slot)
        .skip(1)
        .collect()
}

/// Apply replacement faces to extra ones.
///
/// Dice whose slot carries a requested value take that value and are
/// flagged modified; all other dice pass through unchanged. Targeting
/// the locked first "1", or requesting a face outside 1-6, fails with
/// `InvalidModification` before anything is applied.
pub fn apply_one_modifications(dice: &Dice, mods: &OneModifications) -> Result<Dice> {
    let locked = locked_one_slot(dice);

    for (slot, value) in mods.iter() {
        if Some(slot) == locked || !(1..=6).contains(&value) {
            return Err(RulesError::InvalidModification(slot));
        }
    }

    let mut out = *dice;
    for (slot, value) in mods.iter() {
        out[slot] = Die {
            value,
            modified: true,
            ..out[slot]
        };
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::Die;

    fn dice_of(values: [u8; 4]) -> Dice {
        values.map(Die::rolled)
    }

    #[test]
    fn test_count_ones() {
        assert_eq!(count_ones(&dice_of([1, 1, 1, 4])), 3);
        assert_eq!(count_ones(&dice_of([2, 3, 4, 5])), 0);
        assert_eq!(count_ones(&dice_of([1, 1, 1, 1])), 4);
    }

    #[test]
    fn test_first_one_is_locked() {
        assert_eq!(find_modifiable_ones(&dice_of([1, 1, 1, 4])), vec![1, 2]);
        assert_eq!(find_modifiable_ones(&dice_of([4, 1, 2, 1])), vec![3]);
        assert!(find_modifiable_ones(&dice_of([1, 2, 3, 4])).is_empty());
        assert!(find_modifiable_ones(&dice_of([2, 3, 4, 5])).is_empty());
    }

    #[test]
    fn test_apply_modifications() {
        let dice = dice_of([1, 1, 1, 4]);
        let mods = OneModifications::new().with(1, 5).with(2, 4);

        let out = apply_one_modifications(&dice, &mods).unwrap();

        assert_eq!(out.map(|d| d.value), [1, 5, 4, 4]);
        assert!(!out[0].modified);
        assert!(out[1].modified);
        assert!(out[2].modified);
        assert!(!out[3].modified);
    }

    #[test]
    fn test_locked_slot_rejected() {
        let dice = dice_of([4, 1, 1, 2]);
        // Slot 1 holds the first "1" and is locked.
        let mods = OneModifications::new().with(1, 6);

        assert_eq!(
            apply_one_modifications(&dice, &mods).unwrap_err(),
            RulesError::InvalidModification(1)
        );
    }

    #[test]
    fn test_out_of_range_face_rejected() {
        let dice = dice_of([1, 1, 2, 3]);
        let mods = OneModifications::new().with(1, 7);

        assert_eq!(
            apply_one_modifications(&dice, &mods).unwrap_err(),
            RulesError::InvalidModification(1)
        );
    }

    #[test]
    fn test_rejection_applies_nothing() {
        let dice = dice_of([1, 1, 1, 4]);
        let mods = OneModifications::new().with(2, 6).with(0, 3);

        assert!(apply_one_modifications(&dice, &mods).is_err());
        // Caller's dice are untouched by construction; the returned error
        // carries no partially-applied state.
    }

    #[test]
    fn test_empty_modifications_pass_through() {
        let dice = dice_of([3, 1, 1, 6]);
        let out = apply_one_modifications(&dice, &OneModifications::new()).unwrap();
        assert_eq!(out, dice);
    }
}
