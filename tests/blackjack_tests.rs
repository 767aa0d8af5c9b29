//! Blackjack game integration tests.
//!
//! Full games driven through `Game` with fixed cards, checking turn order,
//! bust handling and the final standings.

use rust_blackjack::cards::{Card, Rank};
use rust_blackjack::core::{GameConfig, GameError, PlayerId};
use rust_blackjack::games::blackjack::{rank_hands, Game, Hand, Seat};

fn ace() -> Card {
    Rank::Ace.card()
}

fn king() -> Card {
    Rank::King.card()
}

fn five() -> Card {
    Rank::Five.card()
}

fn new_game(names: &[&str]) -> Game {
    Game::new(GameConfig::new(names.iter().copied())).unwrap()
}

/// Test that an empty table is rejected.
#[test]
fn test_initialization_edge() {
    let result = Game::new(GameConfig::new(Vec::<&str>::new()));
    assert!(matches!(result, Err(GameError::InvalidArgument(_))));
}

/// Test a simple single-player game.
#[test]
fn test_singleplayer() {
    let mut game = new_game(&["bob"]);
    assert!(game.hit_with(ace()).unwrap());
    assert!(game.hit_with(king()).unwrap());
    game.stay().unwrap();

    assert_eq!(game.winner().unwrap(), PlayerId::new(0));
    assert_eq!(game.ranked_names().unwrap(), vec!["bob"]);
}

/// Test two players who both stay.
#[test]
fn test_multiplayer_nonbust() {
    let mut game = new_game(&["bob", "jane"]);
    assert!(game.hit_with(ace()).unwrap());
    assert!(game.hit_with(king()).unwrap());
    game.stay().unwrap();
    assert!(game.hit_with(king()).unwrap());
    assert!(game.hit_with(king()).unwrap());
    game.stay().unwrap();

    assert_eq!(game.ranked_names().unwrap()[0], "bob");
}

/// Test that a bust ends the turn without an explicit stay.
#[test]
fn test_multiplayer_bust() {
    let mut game = new_game(&["bob", "jane"]);
    assert!(game.hit_with(ace()).unwrap());
    assert!(game.hit_with(king()).unwrap());
    game.stay().unwrap();
    assert!(game.hit_with(king()).unwrap());
    assert!(game.hit_with(king()).unwrap());
    assert!(!game.hit_with(king()).unwrap());

    assert!(game.is_game_over());
    assert_eq!(game.winner().unwrap(), PlayerId::new(0));
}

/// Test a four-player game mixing stays and busts.
#[test]
fn test_multiplayer_rankings_complex() {
    let mut game = new_game(&["bob", "jane", "joe", "katy"]);

    // bob busts with 25
    assert!(game.hit_with(king()).unwrap());
    assert!(game.hit_with(king()).unwrap());
    assert!(!game.hit_with(five()).unwrap());

    // jane stays with 15
    assert!(game.hit_with(king()).unwrap());
    assert!(game.hit_with(five()).unwrap());
    game.stay().unwrap();

    // joe stays with 20
    assert!(game.hit_with(king()).unwrap());
    assert!(game.hit_with(king()).unwrap());
    game.stay().unwrap();

    // katy stays with 21
    assert!(game.hit_with(king()).unwrap());
    assert!(game.hit_with(king()).unwrap());
    assert!(game.hit_with(ace()).unwrap());
    game.stay().unwrap();

    assert_eq!(game.ranked_names().unwrap(), vec!["katy", "joe", "jane", "bob"]);
    assert_eq!(
        game.rankings().unwrap(),
        vec![PlayerId::new(3), PlayerId::new(2), PlayerId::new(1), PlayerId::new(0)]
    );
}

/// Test that standings do not depend on the order hands enter the heap.
#[test]
fn test_ranking_independent_of_insertion_order() {
    let build = |cards: &[Card]| {
        let mut hand = Hand::new();
        for card in cards {
            hand.add_card(card.clone()).unwrap();
        }
        hand
    };
    let hands = [
        ("bust-25", build(&[king(), king(), five()])),
        ("15", build(&[king(), five()])),
        ("20", build(&[king(), king()])),
        ("21", build(&[king(), king(), ace()])),
    ];

    let orders = [[0, 1, 2, 3], [3, 2, 1, 0], [1, 3, 0, 2], [2, 0, 3, 1]];
    for order in orders {
        let seats = order.iter().map(|&i| Seat {
            player: PlayerId::new(i as u8),
            name: hands[i].0,
            hand: &hands[i].1,
        });
        let names: Vec<_> = rank_hands(seats).iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["21", "20", "15", "bust-25"], "order {order:?}");
    }
}

/// Test that standings borrow the game's own hands.
#[test]
fn test_standings_borrow_live_hands() {
    let mut game = new_game(&["solo"]);
    game.hit_with(Rank::Nine.card()).unwrap();
    game.stay().unwrap();

    let standings = game.standings().unwrap();
    let live = game.hand(PlayerId::new(0)).unwrap();
    assert!(std::ptr::eq(standings[0].hand, live));
    assert_eq!(standings[0].hand.best_score(), 9);
}

/// Test the game phase errors.
#[test]
fn test_phase_errors() {
    let mut game = new_game(&["bob"]);
    assert!(matches!(game.rankings(), Err(GameError::IllegalState(_))));

    game.stay().unwrap();
    assert!(matches!(game.hit_with(king()), Err(GameError::IllegalState(_))));
    assert!(matches!(game.current_player_name(), Err(GameError::IllegalState(_))));
}

/// Test a fully random pre-dealt game plays to completion.
#[test]
fn test_seeded_game_plays_out() {
    let config = GameConfig::numbered(4).pre_deal().with_seed(2024);
    let mut game = Game::new(config).unwrap();

    while !game.is_game_over() {
        // Simple strategy: hit below 17
        if game.current_hand().unwrap().best_score() < 17 {
            game.hit().unwrap();
        } else {
            game.stay().unwrap();
        }
    }

    let rankings = game.rankings().unwrap();
    assert_eq!(rankings.len(), 4);

    let priorities: Vec<_> = rankings
        .iter()
        .map(|&p| game.hand(p).unwrap().priority())
        .collect();
    assert!(priorities.windows(2).all(|w| w[0] >= w[1]), "{priorities:?}");
}

/// Test that a score past `i32::MAX` is an error and leaves the hand as it was.
#[test]
fn test_hand_score_overflow() {
    let big = Card::new("big", [i32::MAX]).unwrap();
    let mut hand = Hand::new();
    hand.add_card(big.clone()).unwrap();

    let result = hand.add_card(big);
    assert!(matches!(result, Err(GameError::InvalidArgument(_))));
    assert_eq!(hand.cards().len(), 1);
    assert_eq!(hand.possible_scores(), &[i32::MAX]);
}
