//! Turn state for a table of blackjack players.

use log::info;

use crate::cards::{Card, Deck};
use crate::core::{GameConfig, GameError, PlayerId, PlayerMap, Result};

use super::hand::Hand;
use super::ranking::{rank_hands, Seat};

/// A named player and their hand.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    fn new(name: String) -> Self {
        Self {
            name,
            hand: Hand::new(),
        }
    }

    /// Player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Player's hand.
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
}

/// A game of 21 with any number of players from 1 to 26.
///
/// Seats play in order. A turn lasts until the player stays or busts; the
/// game is over once the last seat has finished.
///
/// ```
/// use rust_blackjack::cards::Rank;
/// use rust_blackjack::core::GameConfig;
/// use rust_blackjack::games::blackjack::Game;
///
/// let mut game = Game::new(GameConfig::new(["bob", "jane"])).unwrap();
/// game.hit_with(Rank::Ace.card()).unwrap();
/// game.hit_with(Rank::King.card()).unwrap();
/// game.stay().unwrap();
/// game.hit_with(Rank::Nine.card()).unwrap();
/// game.stay().unwrap();
/// assert_eq!(game.ranked_names().unwrap(), vec!["bob", "jane"]);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    players: PlayerMap<Player>,
    /// Seat whose turn it is; equals the seat count once the game is over.
    current: usize,
    deck: Deck,
}

impl Game {
    /// Seat the configured players and, if requested, deal two cards each.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let players =
            PlayerMap::from_vec(config.player_names.into_iter().map(Player::new).collect());
        let mut game = Self {
            players,
            current: 0,
            deck: Deck::new(config.seed),
        };

        if config.pre_deal {
            for (_, player) in game.players.iter_mut() {
                for _ in 0..2 {
                    let card = game
                        .deck
                        .draw()
                        .ok_or_else(|| GameError::empty("Ran out of cards"))?;
                    player.hand.add_card(card)?;
                }
            }
        }

        info!(
            "new game with {} players (pre-deal: {}, seed: {})",
            game.player_count(),
            config.pre_deal,
            game.deck.seed()
        );
        Ok(game)
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Every seat has finished its turn.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.current >= self.player_count()
    }

    /// Seat whose turn it is.
    pub fn current_player(&self) -> Result<PlayerId> {
        if self.is_game_over() {
            return Err(GameError::illegal("Cannot get the current player if the game is over"));
        }
        Ok(PlayerId::new(self.current as u8))
    }

    /// Hand of the seat whose turn it is.
    pub fn current_hand(&self) -> Result<&Hand> {
        let player = self.current_player()?;
        Ok(&self.players[player].hand)
    }

    /// Name of the seat whose turn it is.
    pub fn current_player_name(&self) -> Result<&str> {
        let player = self.current_player()?;
        Ok(self.players[player].name.as_str())
    }

    /// A seat's player, or `None` for an unknown seat.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.players.get(player)
    }

    /// A seat's hand, or `None` for an unknown seat.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&Hand> {
        self.player(player).map(Player::hand)
    }

    /// A seat's name, or `None` for an unknown seat.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> Option<&str> {
        self.player(player).map(Player::name)
    }

    /// Cards not yet dealt.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Draw a card for the current seat.
    ///
    /// Returns `Ok(false)` if the card busts the hand, which also ends the
    /// turn, and `Ok(true)` otherwise. Fails once the game is over or when
    /// the deck has run out.
    pub fn hit(&mut self) -> Result<bool> {
        self.ensure_in_progress("hit")?;
        let card = self
            .deck
            .draw()
            .ok_or_else(|| GameError::empty("Ran out of cards"))?;
        self.deal(card)
    }

    /// Give the current seat a specific card instead of drawing one.
    pub fn hit_with(&mut self, card: Card) -> Result<bool> {
        self.ensure_in_progress("hit")?;
        self.deal(card)
    }

    /// End the current seat's turn.
    pub fn stay(&mut self) -> Result<()> {
        self.ensure_in_progress("stay")?;
        let player = &self.players[PlayerId::new(self.current as u8)];
        info!("{} stays with {}", player.name, player.hand.best_score());
        self.finish_turn();
        Ok(())
    }

    /// Final standings, best hand first.
    ///
    /// Only available once every seat has finished.
    pub fn standings(&self) -> Result<Vec<Seat<'_>>> {
        if !self.is_game_over() {
            return Err(GameError::illegal("Game is still in progress!"));
        }
        let seats = self.players.iter().map(|(player, p)| Seat {
            player,
            name: &p.name,
            hand: &p.hand,
        });
        Ok(rank_hands(seats))
    }

    /// Seats in ranking order (first place first).
    pub fn rankings(&self) -> Result<Vec<PlayerId>> {
        let rankings: Vec<PlayerId> = self.standings()?.iter().map(|s| s.player).collect();
        info!("final rankings: {:?}", rankings);
        Ok(rankings)
    }

    /// Player names in ranking order.
    pub fn ranked_names(&self) -> Result<Vec<&str>> {
        Ok(self.standings()?.iter().map(|s| s.name).collect())
    }

    /// The first-place seat.
    pub fn winner(&self) -> Result<PlayerId> {
        self.standings()?
            .first()
            .map(|s| s.player)
            .ok_or_else(|| GameError::empty("No players to rank"))
    }

    fn ensure_in_progress(&self, action: &str) -> Result<()> {
        if self.is_game_over() {
            return Err(GameError::illegal(format!("Cannot {action} when game is over!")));
        }
        Ok(())
    }

    fn deal(&mut self, card: Card) -> Result<bool> {
        let player = &mut self.players[PlayerId::new(self.current as u8)];
        player.hand.add_card(card)?;
        if player.hand.is_bust() {
            info!("{} busts with {}", player.name, player.hand.best_score());
            self.finish_turn();
            return Ok(false);
        }
        Ok(true)
    }

    fn finish_turn(&mut self) {
        if !self.is_game_over() {
            self.current += 1;
        }
        if self.is_game_over() {
            info!("game over");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn game(names: &[&str]) -> Game {
        Game::new(GameConfig::new(names.iter().copied())).unwrap()
    }

    #[test]
    fn test_new_requires_players() {
        let err = Game::new(GameConfig::new(Vec::<String>::new())).unwrap_err();
        assert!(matches!(err, GameError::InvalidArgument(_)));

        assert!(Game::new(GameConfig::numbered(27)).is_err());
    }

    #[test]
    fn test_single_player() {
        let mut game = game(&["bob"]);
        assert_eq!(game.current_player_name(), Ok("bob"));

        assert_eq!(game.hit_with(Rank::Ace.card()), Ok(true));
        assert_eq!(game.hit_with(Rank::King.card()), Ok(true));
        game.stay().unwrap();

        assert!(game.is_game_over());
        assert_eq!(game.winner(), Ok(PlayerId::new(0)));
    }

    #[test]
    fn test_bust_ends_turn() {
        let mut game = game(&["bob", "jane"]);
        game.hit_with(Rank::King.card()).unwrap();
        game.hit_with(Rank::King.card()).unwrap();
        assert_eq!(game.hit_with(Rank::King.card()), Ok(false));

        assert_eq!(game.current_player(), Ok(PlayerId::new(1)));
        assert!(game.hand(PlayerId::new(0)).unwrap().is_bust());
    }

    #[test]
    fn test_actions_after_game_over() {
        let mut game = game(&["bob"]);
        game.stay().unwrap();

        assert!(matches!(game.hit(), Err(GameError::IllegalState(_))));
        assert!(matches!(game.stay(), Err(GameError::IllegalState(_))));
        assert!(matches!(game.current_hand(), Err(GameError::IllegalState(_))));
    }

    #[test]
    fn test_rankings_before_game_over() {
        let game = game(&["bob", "jane"]);
        assert!(matches!(game.rankings(), Err(GameError::IllegalState(_))));
        assert!(matches!(game.winner(), Err(GameError::IllegalState(_))));
    }

    #[test]
    fn test_pre_deal() {
        let game = Game::new(GameConfig::numbered(3).pre_deal().with_seed(5)).unwrap();

        for player in PlayerId::all(3) {
            assert_eq!(game.hand(player).unwrap().cards().len(), 2);
        }
        assert_eq!(game.deck().remaining(), 46);
        assert_eq!(game.deck().seed(), 5);
        assert_eq!(game.player_name(PlayerId::new(2)), Some("Player 3"));
    }

    #[test]
    fn test_hit_draws_from_deck() {
        let mut game = Game::new(GameConfig::new(["solo"]).with_seed(9)).unwrap();
        game.hit().unwrap();

        assert_eq!(game.deck().remaining(), 51);
        let drawn = game.hand(PlayerId::new(0)).unwrap().most_recent_card().unwrap();
        assert!(drawn.suit().is_some());
    }

    #[test]
    fn test_hit_on_empty_deck() {
        // 26 seats dealt two cards each use up the whole deck
        let mut game = Game::new(GameConfig::numbered(26).pre_deal()).unwrap();
        assert!(game.deck().is_empty());

        assert!(matches!(game.hit(), Err(GameError::EmptyCollection(_))));
        assert_eq!(game.current_player(), Ok(PlayerId::new(0)));
        assert_eq!(game.hit_with(Rank::Two.card()).map(|_| ()), Ok(()));
    }
}
