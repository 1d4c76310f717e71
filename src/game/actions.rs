use crate::card::Card;
use crate::decision::{Action, DecisionProvider, TableView};
use crate::error::ActionError;
use crate::hand::HandStatus;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        if self.player_hand.status() != HandStatus::Active {
            return Err(ActionError::HandNotActive);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Busting ends the player's turn; the transition to
    /// [`GameState::DealerTurn`] happens here and is one-way.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, the hand has
    /// already stood or busted, or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw().map_err(|_| ActionError::EmptyDeck)?;
        self.player_hand.add_card(card);

        if self.player_hand.status() == HandStatus::Bust {
            self.state = GameState::DealerTurn;
        }

        Ok(card)
    }

    /// Player action: Stand (keep the current hand and end the turn).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the hand
    /// has already stood or busted.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.player_hand.set_status(HandStatus::Stand);
        self.state = GameState::DealerTurn;
        Ok(())
    }

    /// Plays out the entire player turn using the given decision provider.
    ///
    /// The provider sees only the player's cards and the dealer's up-card.
    /// Returns the cards drawn, in order. The turn ends on stand or bust.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the deck
    /// empties while drawing.
    pub fn play_player_turn<P>(&mut self, provider: &mut P) -> Result<Vec<Card>, ActionError>
    where
        P: DecisionProvider + ?Sized,
    {
        self.ensure_player_turn()?;

        let up_card = *self
            .dealer_hand
            .up_card()
            .ok_or(ActionError::InvalidState)?;

        let mut drawn = Vec::new();
        while self.state == GameState::PlayerTurn {
            let view = TableView {
                player_cards: self.player_hand.cards(),
                player_value: self.player_hand.value(),
                dealer_up_card: up_card,
            };

            match provider.decide(view) {
                Action::Hit => drawn.push(self.hit()?),
                Action::Stand => self.stand()?,
            }
        }

        Ok(drawn)
    }
}
