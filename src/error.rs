//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards left. A standard 52-card deck never exhausts in
    /// normal play, so this indicates a logic defect and is fatal to the round.
    #[error("deck is empty")]
    Empty,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    EmptyDeck,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The player's hand has already stood or busted.
    #[error("hand is not active")]
    HandNotActive,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur while the dealer plays out their hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid game state for dealer play.
    #[error("invalid game state for dealer play")]
    InvalidState,
    /// No cards left in the deck while the dealer must draw.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Invalid game state for resolution.
    #[error("invalid game state for resolution")]
    InvalidState,
}
