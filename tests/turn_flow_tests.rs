//! Turn flow integration tests.
//!
//! Drives whole turns through the public API: roll, resolve extra ones,
//! confirm a grouping, end the turn.

use mountain_goats::{
    execute_end_turn, execute_groups, execute_modify_ones, execute_roll, find_modifiable_ones,
    grouping, turn_state, Die, GameBuilder, GameState, MountainId, OneModifications, Phase,
    PlayerColor, RulesError,
};

fn mid(n: u8) -> MountainId {
    MountainId::try_from_sum(n as u32).unwrap()
}

fn new_game(count: usize) -> GameState {
    let names = ["Heidi", "Peter", "Clara", "Sebastian"];
    let mut builder = GameBuilder::new();
    for i in 0..count {
        builder = builder.add_player(names[i], PlayerColor::ALL[i]);
    }
    builder.seed(42).build().unwrap()
}

/// Force known dice into a grouping-phase state.
fn with_dice(mut state: GameState, values: [u8; 4]) -> GameState {
    state.current_dice = values.map(Die::rolled);
    state.phase = Phase::Grouping;
    state
}

#[test]
fn test_one_complete_turn() {
    let state = new_game(2);

    let rolled = execute_roll(&state).unwrap();
    assert_eq!(rolled.phase, Phase::Grouping);

    // Group all four dice together; whatever the sum, confirmation must
    // succeed and land in the moving phase.
    let result = execute_groups(&rolled, &grouping(&[&[0, 1, 2, 3]])).unwrap();
    assert_eq!(result.state.phase, Phase::Moving);

    let next_turn = execute_end_turn(&result.state);
    assert_eq!(next_turn.phase, Phase::Rolling);
    assert_eq!(next_turn.current_player_index, 1);
    assert_eq!(next_turn.turn_count, 1);
}

#[test]
fn test_double_roll_rejected() {
    let state = new_game(2);
    let rolled = execute_roll(&state).unwrap();

    assert!(matches!(
        execute_roll(&rolled),
        Err(RulesError::IllegalPhaseTransition { .. })
    ));
}

/// Rolling [1,1,1,4] locks the first "1"; modifying the other two to 5
/// and 4 yields [1,5,4,4] with their flags set.
#[test]
fn test_multiple_ones_scenario() {
    let state = with_dice(new_game(2), [1, 1, 1, 4]);

    assert_eq!(find_modifiable_ones(&state.current_dice), vec![1, 2]);
    let view = turn_state(&state);
    assert!(view.has_modifiable_ones);
    assert!(!view.can_group);

    let mods = OneModifications::new().with(1, 5).with(2, 4);
    let modified = execute_modify_ones(&state, &mods).unwrap();

    assert_eq!(modified.current_dice.map(|d| d.value), [1, 5, 4, 4]);
    assert!(!modified.current_dice[0].modified);
    assert!(modified.current_dice[1].modified);
    assert!(modified.current_dice[2].modified);
    assert!(!modified.current_dice[3].modified);

    // Resolved: grouping is now allowed.
    let view = turn_state(&modified);
    assert!(!view.has_modifiable_ones);
    assert!(view.can_group);

    // [1,4] -> 5 and [5,4] -> 9.
    let result = execute_groups(&modified, &grouping(&[&[0, 3], &[1, 2]])).unwrap();
    assert_eq!(result.moves.len(), 2);
    assert_eq!(result.moves[0].mountain, mid(5));
    assert_eq!(result.moves[1].mountain, mid(9));
}

#[test]
fn test_modifying_locked_one_rejected() {
    let state = with_dice(new_game(2), [1, 1, 3, 4]);
    let err = execute_modify_ones(&state, &OneModifications::new().with(0, 6)).unwrap_err();
    assert_eq!(err, RulesError::InvalidModification(0));
}

/// Four players on mountain 10 (path length 3): a player at position 2
/// whose group sums to 10 reaches the summit, collects a token valued
/// 10, and knocks the occupant at position 3 back to base.
#[test]
fn test_mountain_ten_summit_contest() {
    let mut state = with_dice(new_game(4), [4, 6, 1, 1]);
    state.players[0].goat_positions[mid(10)] = 2;
    state.players[2].goat_positions[mid(10)] = 3;

    // [4,6] -> 10; the two ones are wasted in their own group.
    let result = execute_groups(&state, &grouping(&[&[0, 1], &[2, 3]])).unwrap();

    assert_eq!(result.state.players[0].goat_positions[mid(10)], 3);
    assert_eq!(result.state.players[0].collected_tokens[mid(10)].len(), 1);
    assert_eq!(result.state.players[0].collected_tokens[mid(10)][0], 10);
    assert_eq!(result.state.players[2].goat_positions[mid(10)], 0);

    assert_eq!(result.moves.len(), 1);
    assert_eq!(result.moves[0].token_collected, Some(10));
    assert_eq!(result.moves[0].knocked_off.as_deref(), Some("Clara"));
}

#[test]
fn test_grouping_must_cover_all_dice() {
    let state = with_dice(new_game(2), [2, 3, 4, 5]);

    assert_eq!(
        execute_groups(&state, &grouping(&[&[0, 1], &[2]])).unwrap_err(),
        RulesError::InvalidGrouping
    );
    assert_eq!(
        execute_groups(&state, &grouping(&[&[0, 1], &[1, 2, 3]])).unwrap_err(),
        RulesError::InvalidGrouping
    );
}

#[test]
fn test_end_turn_cycles_all_seats() {
    let mut state = new_game(3);
    for expected in [1, 2, 0, 1] {
        state = execute_end_turn(&state);
        assert_eq!(state.current_player_index, expected);
    }
    assert_eq!(state.turn_count, 4);
}

#[test]
fn test_rejected_transition_leaves_no_trace() {
    let state = with_dice(new_game(2), [2, 3, 4, 5]);
    let before = state.clone();

    let _ = execute_groups(&state, &grouping(&[&[0]]));
    let _ = execute_roll(&state);

    assert_eq!(state, before);
}
