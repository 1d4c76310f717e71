//! Round outcome types.

/// Outcome of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher value).
    PlayerWins,
    /// Dealer wins (player busts or dealer has the higher value).
    DealerWins,
    /// Push (equal non-bust totals).
    Push,
}

/// Result of a round after resolution.
///
/// Values are the raw blackjack totals; a bust reports the real value over 21
/// rather than clamping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
