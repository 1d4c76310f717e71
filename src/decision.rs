//! Pluggable hit-or-stand decision providers.

use crate::card::Card;

/// A player decision at a single turn point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw one more card.
    Hit,
    /// End the turn without drawing.
    Stand,
}

/// The table state visible to the player at a decision point.
///
/// The dealer's hole card is not included; only the up-card is visible while
/// the player acts.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    /// The player's cards, in draw order.
    pub player_cards: &'a [Card],
    /// The player's current hand value.
    pub player_value: u8,
    /// The dealer's face-up card.
    pub dealer_up_card: Card,
}

/// Source of hit-or-stand decisions for the player's turn.
///
/// Implementations range from an interactive stdin prompt to scripted
/// sequences for headless tests.
pub trait DecisionProvider {
    /// Decides the next action given the visible table state.
    fn decide(&mut self, view: TableView<'_>) -> Action;
}

/// A provider that always stands. Useful as a baseline in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysStand;

impl DecisionProvider for AlwaysStand {
    fn decide(&mut self, _view: TableView<'_>) -> Action {
        Action::Stand
    }
}

/// A provider that replays a fixed action sequence, then stands.
#[derive(Debug, Clone)]
pub struct Scripted {
    actions: Vec<Action>,
    next: usize,
}

impl Scripted {
    /// Creates a provider that plays `actions` in order.
    #[must_use]
    pub const fn new(actions: Vec<Action>) -> Self {
        Self { actions, next: 0 }
    }
}

impl DecisionProvider for Scripted {
    fn decide(&mut self, _view: TableView<'_>) -> Action {
        let action = self.actions.get(self.next).copied();
        self.next += 1;
        action.unwrap_or(Action::Stand)
    }
}

/// A [`DecisionProvider`] backed by a closure. Created with [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

/// Wraps a closure as a [`DecisionProvider`].
pub const fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut(TableView<'_>) -> Action,
{
    FromFn(f)
}

impl<F> DecisionProvider for FromFn<F>
where
    F: FnMut(TableView<'_>) -> Action,
{
    fn decide(&mut self, view: TableView<'_>) -> Action {
        (self.0)(view)
    }
}
