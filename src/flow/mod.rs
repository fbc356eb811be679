//! Turn flow controller: the phase state machine over the rules
//! primitives.

pub mod turn;

pub use turn::{
    all_dice_grouped, assign_die_to_group, execute_end_turn, execute_groups, execute_modify_ones,
    execute_roll, groups_from_dice, turn_state, MoveOutcome, TurnResult, TurnView,
};
