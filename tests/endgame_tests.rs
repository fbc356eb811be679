//! End-game integration tests: trigger, final-round countdown, results.

use mountain_goats::{
    check_end_condition, end_game, end_game_reason, execute_end_turn, game_results,
    remaining_turns, should_game_end, start_last_round, GameBuilder, GameState, MountainId, Phase,
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
    builder.seed(7).build().unwrap()
}

#[test]
fn test_trigger_then_full_circle_ends_game() {
    let mut state = new_game(3);
    state.bonus_token_pile.clear();
    assert!(check_end_condition(&state));

    // Trigger fires mid-round, on player 1's turn.
    state.current_player_index = 1;
    state = start_last_round(&state);
    assert!(state.last_round_started);
    assert!(!should_game_end(&state));
    assert_eq!(remaining_turns(&state), Some(2));

    state = execute_end_turn(&state);
    assert!(!should_game_end(&state));
    assert_eq!(remaining_turns(&state), Some(1));

    state = execute_end_turn(&state);
    assert!(should_game_end(&state));

    let ended = end_game(&state);
    assert_eq!(ended.phase, Phase::Ended);
    assert!(game_results(&ended).is_ok());
}

#[test]
fn test_three_bare_piles_trigger() {
    let mut state = new_game(4);
    state.mountains[mid(6)].token_pile.clear();
    state.mountains[mid(7)].token_pile.clear();
    assert!(!check_end_condition(&state));

    state.mountains[mid(9)].token_pile.clear();
    assert!(check_end_condition(&state));

    state = start_last_round(&state);
    let reason = end_game_reason(&state).unwrap();
    assert!(reason.contains("6, 7, 9"));
}

#[test]
fn test_results_before_end_rejected() {
    let state = new_game(2);
    assert_eq!(game_results(&state).unwrap_err(), RulesError::GameNotEnded);
}

/// Equal totals in a 2-player game rank the player with more summit
/// goats first, with the tiebreaker marked as applied.
#[test]
fn test_equal_scores_broken_by_summit_goats() {
    let mut state = new_game(2);

    // Same 10 points each.
    state.players[0].collected_tokens[mid(5)].push_back(5);
    state.players[0].collected_tokens[mid(5)].push_back(5);
    state.players[1].collected_tokens[mid(10)].push_back(10);

    // Peter holds two summits, Heidi none.
    state.players[1].goat_positions[mid(5)] = mid(5).path_length();
    state.players[1].goat_positions[mid(10)] = mid(10).path_length();

    let results = game_results(&end_game(&state)).unwrap();

    assert_eq!(results.winner.name, "Peter");
    assert!(results.tiebreaker_applied);
    assert!(!results.is_tie);
    assert_eq!(results.rankings[0].goats_at_summit, 2);
    assert_eq!(results.rankings[0].rank, 1);
    assert_eq!(results.rankings[1].rank, 1);
    assert!(results
        .tiebreaker_explanation
        .as_ref()
        .unwrap()
        .contains("Peter"));
}

#[test]
fn test_four_player_rankings_and_breakdown() {
    let mut state = new_game(4);

    state.players[0].collected_tokens[mid(8)].push_back(8); // 8
    state.players[1].collected_tokens[mid(10)].push_back(10);
    state.players[1].bonus_tokens.push_back(12); // 22
    state.players[2].collected_tokens[mid(5)].push_back(5); // 5
                                                            // Sebastian: 0

    let results = game_results(&end_game(&state)).unwrap();

    let names: Vec<_> = results
        .rankings
        .iter()
        .map(|r| r.player.name.as_str())
        .collect();
    assert_eq!(names, vec!["Peter", "Heidi", "Clara", "Sebastian"]);
    assert_eq!(
        results.rankings.iter().map(|r| r.rank).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );

    // The embedded player carries the breakdown.
    let peter = &results.rankings[0].player;
    assert_eq!(peter.collected_tokens[mid(10)].len(), 1);
    assert_eq!(peter.bonus_tokens.len(), 1);
}
