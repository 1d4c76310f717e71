use crate::card::Card;
use crate::error::{DealerError, ResolveError};
use crate::hand::HandStatus;
use crate::result::{Outcome, RoundSummary};

use super::{Game, GameState};

/// The dealer draws until reaching this value or higher.
const DEALER_STAND_VALUE: u8 = 17;

impl Game {
    /// Dealer plays out their hand according to the house rules.
    ///
    /// The hole card is always revealed. If the player has already busted the
    /// dealer does not draw; otherwise the dealer hits while below 17 and
    /// stands at 17 or higher, busts included.
    ///
    /// Returns the cards drawn by the dealer, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// empties while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, DealerError> {
        if self.state != GameState::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        self.dealer_hand.reveal_hole();

        let mut drawn = Vec::new();

        if self.player_hand.status() == HandStatus::Bust {
            self.state = GameState::Resolution;
            return Ok(drawn);
        }

        while self.dealer_hand.value() < DEALER_STAND_VALUE {
            let card = self.draw().map_err(|_| DealerError::EmptyDeck)?;
            self.dealer_hand.add_card(card);
            drawn.push(card);
        }

        self.state = GameState::Resolution;
        Ok(drawn)
    }

    /// Resolves the round and returns the outcome.
    ///
    /// Precedence: a player bust loses regardless of the dealer's total; then
    /// a dealer bust wins for the player; then the higher value wins; equal
    /// totals push. Exactly one outcome is reported.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in resolution state.
    pub fn resolve(&self) -> Result<RoundSummary, ResolveError> {
        if self.state != GameState::Resolution {
            return Err(ResolveError::InvalidState);
        }

        let player_value = self.player_hand.value();
        let dealer_value = self.dealer_hand.value();
        let player_bust = self.player_hand.is_bust();
        let dealer_bust = self.dealer_hand.is_bust();

        let outcome = if player_bust {
            Outcome::DealerWins
        } else if dealer_bust {
            Outcome::PlayerWins
        } else if player_value > dealer_value {
            Outcome::PlayerWins
        } else if player_value < dealer_value {
            Outcome::DealerWins
        } else {
            Outcome::Push
        };

        Ok(RoundSummary {
            outcome,
            player_value,
            dealer_value,
            player_bust,
            dealer_bust,
        })
    }
}
