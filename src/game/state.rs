//! Game state types.

/// Round state.
///
/// Every operation on [`Game`](super::Game) validates its entry state, so
/// transitions are explicit and exhaustively testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Fresh shuffled deck, empty hands, waiting for the deal.
    Setup,
    /// Waiting for player hit-or-stand decisions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the outcome can be resolved.
    Resolution,
}
