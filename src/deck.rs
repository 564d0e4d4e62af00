//! The undealt deck.

use num_bigint::BigUint;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::card::{Card, standard_deck};
use crate::deal_code;
use crate::error::{Result, YukonError};

/// Ordered sequence of cards not yet dealt. Index 0 is drawn first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A fresh deck: one face-down card per (rank, suit), in standard order.
    pub fn new() -> Self {
        Deck {
            cards: standard_deck(),
        }
    }

    /// A deck in an explicit order. The cards must be a permutation of
    /// the 52 distinct cards. Every card comes back face-down.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        deal_code::validate_permutation(&cards)?;
        Ok(Deck {
            cards: cards
                .into_iter()
                .map(|c| Card::new(c.suit(), c.rank()))
                .collect(),
        })
    }

    /// A deck with nothing left to deal.
    pub(crate) fn exhausted() -> Self {
        Deck { cards: Vec::new() }
    }

    /// The deck named by a deal number (see [`crate::deal_code`]).
    pub fn from_deal_number(n: &BigUint) -> Result<Self> {
        Ok(Deck {
            cards: deal_code::deck_from_deal_number(n)?,
        })
    }

    /// A fresh deck shuffled with a `StdRng` seeded from `seed`.
    ///
    /// The same seed always produces the same order.
    pub fn shuffled_from_seed(seed: u64) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(&mut StdRng::seed_from_u64(seed));
        deck
    }

    /// Uniformly permute the remaining cards (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Remove and return the first `n` cards, in order.
    ///
    /// Fails with [`YukonError::InsufficientCards`] if fewer than `n` remain,
    /// leaving the deck untouched.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>> {
        if n > self.cards.len() {
            return Err(YukonError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Remove and return the next card.
    pub fn draw_one(&mut self) -> Result<Card> {
        if self.cards.is_empty() {
            return Err(YukonError::InsufficientCards {
                requested: 1,
                remaining: 0,
            });
        }
        Ok(self.cards.remove(0))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Deal number of the current order. Only defined for a full deck.
    pub fn deal_number(&self) -> Result<BigUint> {
        deal_code::deal_number(&self.cards)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn new_deck_is_complete_and_face_down() {
        let deck = Deck::new();
        assert_eq!(deck.len(), 52);
        assert!(deck.cards().iter().all(|c| !c.is_face_up()));
        assert!(deal_code::validate_permutation(deck.cards()).is_ok());
        assert_eq!(deck.cards()[0], Card::new(Suit::Hearts, Rank::Ace));
    }

    #[test]
    fn draw_takes_cards_from_the_front() {
        let mut deck = Deck::new();
        let expected: Vec<Card> = deck.cards()[..5].to_vec();
        let drawn = deck.draw(5).unwrap();
        assert_eq!(drawn, expected);
        assert_eq!(deck.len(), 47);

        let next = deck.draw_one().unwrap();
        assert_eq!(next, Card::new(Suit::Hearts, Rank::Six));
        assert_eq!(deck.len(), 46);
    }

    #[test]
    fn drawing_too_many_fails_without_mutation() {
        let mut deck = Deck::new();
        deck.draw(50).unwrap();
        let err = deck.draw(3).unwrap_err();
        assert_eq!(
            err,
            YukonError::InsufficientCards {
                requested: 3,
                remaining: 2
            }
        );
        assert_eq!(deck.len(), 2);

        deck.draw(2).unwrap();
        assert!(deck.is_empty());
        assert!(deck.draw_one().is_err());
        assert!(deck.draw(0).unwrap().is_empty());
    }

    #[test]
    fn seeded_shuffles_are_reproducible_permutations() {
        let a = Deck::shuffled_from_seed(42);
        let b = Deck::shuffled_from_seed(42);
        let c = Deck::shuffled_from_seed(43);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Deck::new());
        assert!(deal_code::validate_permutation(a.cards()).is_ok());
    }

    #[test]
    fn deal_number_identifies_the_order() {
        let deck = Deck::shuffled_from_seed(7);
        let n = deck.deal_number().unwrap();
        assert_eq!(Deck::from_deal_number(&n).unwrap(), deck);
    }

    #[test]
    fn from_cards_turns_everything_face_down() {
        let cards: Vec<Card> = standard_deck().into_iter().map(Card::face_up).collect();
        let deck = Deck::from_cards(cards).unwrap();
        assert_eq!(deck, Deck::new());
    }

    #[test]
    fn from_cards_rejects_non_permutations() {
        let mut cards = standard_deck();
        cards[3] = cards[4];
        assert!(matches!(Deck::from_cards(cards), Err(YukonError::InvalidDeck(_))));
    }
}
