//! A single-player blackjack round engine.
//!
//! The crate provides a [`Game`] type that manages the full round flow:
//! dealing, player hit-or-stand decisions, dealer play against fixed house
//! rules (hit until 17), and resolution. Turn and resolution methods return
//! structured results, so the engine runs headless; the bundled binary is one
//! possible front end.
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, GameState};
//!
//! let mut game = Game::new(42);
//! game.deal().unwrap();
//! assert_eq!(game.state(), GameState::PlayerTurn);
//! ```

pub mod card;
pub mod decision;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, SUITS, Suit};
pub use decision::{Action, AlwaysStand, DecisionProvider, FromFn, Scripted, TableView, from_fn};
pub use deck::Deck;
pub use error::{ActionError, DealError, DealerError, DeckError, ResolveError};
pub use game::{Game, GameState};
pub use hand::{DealerHand, Hand, HandStatus};
pub use result::{Outcome, RoundSummary};
