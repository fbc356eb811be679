//! Stateless rules primitives.
//!
//! Pure functions the turn flow sequences into phases: grouping
//! enumeration and validation, the multiple-ones rule, and goat
//! movement with knockoff and token collection.

pub mod grouping;
pub mod movement;
pub mod ones;

pub use grouping::{
    generate_all_groupings, group_sum, grouping, valid_groupings, valid_moves_from_groups,
    validate_groups, Group, Grouping, GroupingOption,
};
pub use movement::{check_and_award_bonus_token, move_goat, will_collect_token, will_knock_off};
pub use ones::{apply_one_modifications, count_ones, find_modifiable_ones};
