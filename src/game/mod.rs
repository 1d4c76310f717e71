//! Round engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::{DealerHand, Hand};

mod actions;
mod dealer;
pub mod state;

pub use state::GameState;

/// A single-player blackjack round engine.
///
/// The game owns the deck, the player's hand, and the dealer's hand, and
/// drives one round at a time through [`GameState`]. Turn and resolution
/// methods return structured results; rendering is left to the caller.
#[derive(Debug)]
pub struct Game {
    /// Cards remaining in the deck.
    deck: Deck,
    /// Current round state.
    state: GameState,
    /// The player's hand.
    player_hand: Hand,
    /// The dealer's hand.
    dealer_hand: DealerHand,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed, holding a freshly shuffled
    /// deck and empty hands.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Game, GameState};
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.state(), GameState::Setup);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);

        Self {
            deck,
            state: GameState::Setup,
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            rng,
        }
    }

    /// Deals the initial two cards to each side, alternating player, dealer,
    /// player, dealer. The dealer's first card is the up-card; the second
    /// stays face down until the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in [`GameState::Setup`] or fewer
    /// than four cards remain in the deck.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Setup {
            return Err(DealError::InvalidState);
        }
        if self.deck.len() < 4 {
            return Err(DealError::EmptyDeck);
        }

        for _ in 0..2 {
            let card = self.deck.draw().map_err(|_| DealError::EmptyDeck)?;
            self.player_hand.add_card(card);
            let card = self.deck.draw().map_err(|_| DealError::EmptyDeck)?;
            self.dealer_hand.add_card(card);
        }

        self.state = GameState::PlayerTurn;
        Ok(())
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Result<Card, crate::error::DeckError> {
        self.deck.draw()
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Replaces the deck with an explicit card sequence.
    ///
    /// Intended for rigged decks in tests; normal play shuffles a standard
    /// deck at construction and on [`Game::clear_round`].
    pub fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Resets for a new round: fresh shuffled 52-card deck, empty hands,
    /// state back to [`GameState::Setup`].
    ///
    /// Rounds are fully independent; no card or status carries over.
    pub fn clear_round(&mut self) {
        self.deck = Deck::standard();
        self.deck.shuffle(&mut self.rng);
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.state = GameState::Setup;
    }
}
