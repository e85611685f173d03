//! Match tests: search agents against each other and against baselines.

use rust_adversarial::play::status_line;
use rust_adversarial::{
    Agent, Algorithm, Arena, FirstLegalAgent, GameResult, MatchConfig, Move, PlayerId,
    RandomAgent, SearchAgent, SearchConfig, TicTacToe,
};

fn arena() -> Arena<TicTacToe> {
    Arena::new(TicTacToe::new(), MatchConfig::default())
}

// =============================================================================
// Self-Play Tests
// =============================================================================

#[test]
fn test_alpha_beta_self_play_draws() {
    let game = TicTacToe::new();
    let mut first = SearchAgent::new(game, SearchConfig::alpha_beta());
    let mut second = SearchAgent::new(game, SearchConfig::alpha_beta());

    let record = arena().play(&mut first, &mut second).unwrap();

    assert_eq!(record.result, GameResult::Draw);
    assert_eq!(record.plies(), 9);
    assert_eq!(record.moves[0].action, Move::new(0, 0));
    assert_eq!(record.actions_by(PlayerId::FIRST).count(), 5);
    assert_eq!(record.actions_by(PlayerId::SECOND).count(), 4);
}

#[test]
fn test_algorithms_play_the_same_game() {
    let game = TicTacToe::new();
    let play = |algorithm: Algorithm| {
        let config = SearchConfig::default().with_algorithm(algorithm);
        let mut first = SearchAgent::new(game, config.clone());
        let mut second = SearchAgent::new(game, config);
        arena().play(&mut first, &mut second).unwrap()
    };

    let pruned = play(Algorithm::AlphaBeta);
    let exhaustive = play(Algorithm::Minimax);

    assert_eq!(pruned.moves, exhaustive.moves);
    assert_eq!(pruned.result, exhaustive.result);
    assert!(pruned.stats_for(PlayerId::FIRST).nodes < exhaustive.stats_for(PlayerId::FIRST).nodes);
    assert_eq!(exhaustive.stats_for(PlayerId::SECOND).cutoffs, 0);
}

#[test]
fn test_record_plies_are_sequential() {
    let game = TicTacToe::new();
    let mut first = SearchAgent::new(game, SearchConfig::alpha_beta());
    let mut second = FirstLegalAgent::new(game);

    let record = arena().play(&mut first, &mut second).unwrap();

    for (i, mv) in record.moves.iter().enumerate() {
        assert_eq!(mv.ply as usize, i);
        let expected = if i % 2 == 0 { PlayerId::FIRST } else { PlayerId::SECOND };
        assert_eq!(mv.player, expected);
    }
}

// =============================================================================
// Baseline Tests
// =============================================================================

#[test]
fn test_search_never_loses_to_random_as_first() {
    let game = TicTacToe::new();
    let mut random = RandomAgent::new(game, 2024);

    for _ in 0..20 {
        let mut searcher = SearchAgent::new(game, SearchConfig::alpha_beta());
        let mut opponent = random.fork();

        let record = arena().play(&mut searcher, &mut opponent).unwrap();
        assert_ne!(record.result, GameResult::Winner(PlayerId::SECOND));
    }
}

#[test]
fn test_search_never_loses_to_random_as_second() {
    let game = TicTacToe::new();
    let mut random = RandomAgent::new(game, 99);

    for _ in 0..20 {
        let mut opponent = random.fork();
        let mut searcher = SearchAgent::new(game, SearchConfig::alpha_beta());

        let record = arena().play(&mut opponent, &mut searcher).unwrap();
        assert_ne!(record.result, GameResult::Winner(PlayerId::FIRST));
        assert_eq!(record.stats_for(PlayerId::FIRST).nodes, 0);
    }
}

#[test]
fn test_search_never_loses_to_first_legal() {
    let game = TicTacToe::new();

    let mut searcher = SearchAgent::new(game, SearchConfig::minimax());
    let mut naive = FirstLegalAgent::new(game);
    let record = arena().play(&mut searcher, &mut naive).unwrap();
    assert_ne!(record.result, GameResult::Winner(PlayerId::SECOND));

    let mut naive = FirstLegalAgent::new(game);
    let mut searcher = SearchAgent::new(game, SearchConfig::alpha_beta());
    let record = arena().play(&mut naive, &mut searcher).unwrap();
    assert_ne!(record.result, GameResult::Winner(PlayerId::FIRST));
}

#[test]
fn test_boxed_agents() {
    let game = TicTacToe::new();
    let mut first: Box<dyn Agent<TicTacToe>> = Box::new(FirstLegalAgent::new(game));
    let mut second: Box<dyn Agent<TicTacToe>> = Box::new(RandomAgent::new(game, 5));

    let record = arena().play(first.as_mut(), second.as_mut()).unwrap();

    assert!(record.plies() >= 5);
    assert!(record.plies() <= 9);
}

// =============================================================================
// Mid-Game Start Tests
// =============================================================================

#[test]
fn test_play_from_position_finishes_win() {
    let game = TicTacToe::new();
    let start = game.parse_state("xx./oo./...").unwrap();
    let mut first = SearchAgent::new(game, SearchConfig::alpha_beta());
    let mut second = SearchAgent::new(game, SearchConfig::alpha_beta());
    let mut lines = Vec::new();

    let record = arena()
        .play_from(start, &mut first, &mut second, |_, state| {
            lines.push(status_line(&game, state));
        })
        .unwrap();

    assert_eq!(record.plies(), 1);
    assert_eq!(record.result, GameResult::Winner(PlayerId::FIRST));
    assert_eq!(lines, vec!["P1 won".to_string()]);
}

#[test]
fn test_play_from_second_to_move() {
    let game = TicTacToe::new();
    // o blocks (0, 2) but x still forces a win
    let start = game.parse_state("xx./o../...").unwrap();
    let mut first = SearchAgent::new(game, SearchConfig::alpha_beta());
    let mut second = SearchAgent::new(game, SearchConfig::alpha_beta());

    let record = arena()
        .play_from(start, &mut first, &mut second, |_, _| {})
        .unwrap();

    assert_eq!(record.moves[0].player, PlayerId::SECOND);
    assert_eq!(record.moves[0].action, Move::new(0, 2));
    assert_eq!(record.moves[0].ply, 0);
    assert_eq!(record.result, GameResult::Winner(PlayerId::FIRST));
}
