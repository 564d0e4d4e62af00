//! Error type shared by the whole crate.
//!
//! Only construction problems are errors. Illegal moves are ordinary
//! outcomes and are reported as `false` by the engine, and empty-pile
//! queries come back as `None`.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, YukonError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YukonError {
    /// A card rank outside 1..=13 was requested.
    #[error("invalid rank {0}: rank must be between 1 and 13")]
    InvalidRank(u8),

    /// `Deck::draw` was asked for more cards than remain.
    #[error("not enough cards in deck: requested {requested}, {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },

    /// A deck built from explicit cards is not a permutation of the 52 cards.
    #[error("invalid deck: {0}")]
    InvalidDeck(String),

    /// The deal did not place exactly 52 cards. This is a logic defect.
    #[error("deal invariant violated: {dealt} cards dealt, {left_in_deck} left in deck (expected 52 and 0)")]
    DealInvariant { dealt: usize, left_in_deck: usize },

    /// A position built from explicit piles does not hold 52 cards.
    #[error("position holds {0} cards, expected 52")]
    CardCount(usize),

    #[error("invalid deal number: {0}")]
    InvalidDealNumber(String),

    #[error("invalid deck list: {0}")]
    InvalidDeckList(String),
}
