//! Piles of cards: tableau columns and foundations.
//!
//! Both roles share one structure (a bottom-to-top `Vec<Card>`) and one
//! run-accept protocol; `PileKind` selects which stacking rule applies.

use crate::card::{Card, Rank, is_next_in_suit, is_one_lower_opposite_color};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileKind {
    /// One of the seven playing columns.
    Tableau,
    /// One of the four Ace-to-King piles.
    Foundation,
}

/// An ordered stack of cards. Index 0 is the bottom, the last card is the
/// top (the playing edge).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pile {
    kind: PileKind,
    cards: Vec<Card>,
}

impl Pile {
    pub fn new(kind: PileKind) -> Self {
        Pile {
            kind,
            cards: Vec::new(),
        }
    }

    pub fn tableau() -> Self {
        Pile::new(PileKind::Tableau)
    }

    pub fn foundation() -> Self {
        Pile::new(PileKind::Foundation)
    }

    /// A pile holding `cards`, bottom first. No rule is checked.
    pub fn with_cards(kind: PileKind, cards: Vec<Card>) -> Self {
        Pile { kind, cards }
    }

    #[inline]
    pub fn kind(&self) -> PileKind {
        self.kind
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards, bottom to top.
    #[inline]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn face_down_count(&self) -> usize {
        self.cards.iter().filter(|c| !c.is_face_up()).count()
    }

    pub fn face_up_count(&self) -> usize {
        self.len() - self.face_down_count()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Append a card to the top. No legality check.
    #[inline]
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the top card, or `None` if the pile is empty.
    ///
    /// If the card underneath is face-down it is turned face-up.
    pub fn pop(&mut self) -> Option<Card> {
        let card = self.cards.pop()?;
        self.reveal_top_if_face_down();
        Some(card)
    }

    /// Top card without removing it.
    #[inline]
    pub fn peek(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Remove and return the cards from `start` to the top, in order.
    ///
    /// Returns `None` and leaves the pile alone if `start` is out of bounds.
    /// The new top card is not revealed; see [`Pile::reveal_top_if_face_down`].
    pub fn extract_run(&mut self, start: usize) -> Option<Vec<Card>> {
        if start >= self.cards.len() {
            return None;
        }
        Some(self.cards.split_off(start))
    }

    /// Cards from `start` to the top, without removing them.
    pub fn run_from(&self, start: usize) -> Option<&[Card]> {
        self.cards.get(start..).filter(|run| !run.is_empty())
    }

    /// Whether `run` may be dropped onto this pile.
    ///
    /// Only the run's bottom card (`run[0]`) is checked against this pile;
    /// the order of the cards above it is the caller's business.
    ///
    /// - Tableau: an empty column takes a King; otherwise the bottom card
    ///   must be one rank lower than the top card and the opposite color.
    /// - Foundation: exactly one card; an empty pile takes an Ace,
    ///   otherwise the same suit one rank higher than the top card.
    pub fn can_accept_run(&self, run: &[Card]) -> bool {
        let Some(&base) = run.first() else {
            return false;
        };
        match self.kind {
            PileKind::Tableau => match self.peek() {
                None => base.rank() == Rank::King,
                Some(top) => is_one_lower_opposite_color(base, top),
            },
            PileKind::Foundation => {
                run.len() == 1
                    && match self.peek() {
                        None => base.rank() == Rank::Ace,
                        Some(top) => is_next_in_suit(base, top),
                    }
            }
        }
    }

    /// Single-card form of [`Pile::can_accept_run`].
    #[inline]
    pub fn can_accept(&self, card: Card) -> bool {
        self.can_accept_run(std::slice::from_ref(&card))
    }

    /// Append `run` to the top, in order. No legality check.
    pub fn accept_run(&mut self, run: Vec<Card>) {
        self.cards.extend(run);
    }

    /// Turn the top card face-up if it is face-down.
    pub fn reveal_top_if_face_down(&mut self) {
        if let Some(top) = self.cards.last_mut() {
            top.flip();
        }
    }

    /// True if this foundation is empty or an Ace-up run of one suit.
    pub fn is_ordered_foundation(&self) -> bool {
        let Some(&first) = self.cards.first() else {
            return true;
        };
        first.rank() == Rank::Ace && self.cards.windows(2).all(|w| is_next_in_suit(w[1], w[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn up(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank).face_up()
    }

    fn down(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn empty_pile_queries() {
        let mut p = Pile::tableau();
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
        assert_eq!(p.peek(), None);
        assert_eq!(p.pop(), None);
        assert_eq!(p.extract_run(0), None);
    }

    #[test]
    fn push_pop_basic() {
        let mut p = Pile::tableau();
        let c1 = up(Suit::Hearts, Rank::Ace);
        let c2 = up(Suit::Clubs, Rank::Two);
        p.push(c1);
        p.push(c2);
        assert_eq!(p.peek(), Some(c2));
        assert_eq!(p.pop(), Some(c2));
        assert_eq!(p.pop(), Some(c1));
        assert!(p.is_empty());
    }

    #[test]
    fn pop_reveals_face_down_card_underneath() {
        let mut p = Pile::tableau();
        p.push(down(Suit::Clubs, Rank::Five));
        p.push(up(Suit::Hearts, Rank::Six));
        assert_eq!(p.face_down_count(), 1);

        p.pop();
        assert_eq!(p.peek(), Some(up(Suit::Clubs, Rank::Five)));
        assert_eq!(p.face_down_count(), 0);
    }

    #[test]
    fn pop_leaves_face_up_card_underneath_alone() {
        let mut p = Pile::tableau();
        p.push(down(Suit::Spades, Rank::Two));
        p.push(up(Suit::Clubs, Rank::Five));
        p.push(up(Suit::Hearts, Rank::Six));

        p.pop();
        assert_eq!(p.peek(), Some(up(Suit::Clubs, Rank::Five)));
        assert_eq!(p.get(0), Some(down(Suit::Spades, Rank::Two)));
    }

    #[test]
    fn extract_run_preserves_order() {
        let mut p = Pile::tableau();
        let k = up(Suit::Clubs, Rank::King);
        let q = up(Suit::Hearts, Rank::Queen);
        let j = up(Suit::Diamonds, Rank::Jack);
        p.push(k);
        p.push(q);
        p.push(j);

        assert_eq!(p.run_from(1), Some(&[q, j][..]));
        let run = p.extract_run(1).unwrap();
        assert_eq!(run, vec![q, j]);
        assert_eq!(p.cards(), &[k]);

        assert_eq!(p.extract_run(1), None);
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn extract_run_does_not_reveal() {
        let mut p = Pile::tableau();
        p.push(down(Suit::Clubs, Rank::Four));
        p.push(up(Suit::Hearts, Rank::Nine));
        p.extract_run(1).unwrap();
        assert_eq!(p.face_down_count(), 1);
        p.reveal_top_if_face_down();
        assert_eq!(p.face_down_count(), 0);
    }

    #[test]
    fn tableau_accepts_one_lower_opposite_color() {
        let mut p = Pile::tableau();
        p.push(up(Suit::Clubs, Rank::King));

        assert!(p.can_accept_run(&[up(Suit::Hearts, Rank::Queen)]));
        assert!(!p.can_accept_run(&[up(Suit::Spades, Rank::Queen)]));
        assert!(!p.can_accept_run(&[up(Suit::Diamonds, Rank::Jack)]));
        assert!(!p.can_accept_run(&[]));
    }

    #[test]
    fn only_the_bottom_card_of_a_run_is_checked() {
        let mut p = Pile::tableau();
        p.push(up(Suit::Spades, Rank::Nine));
        let run = [
            up(Suit::Diamonds, Rank::Eight),
            up(Suit::Diamonds, Rank::Ace),
            up(Suit::Clubs, Rank::King),
        ];
        assert!(p.can_accept_run(&run));
    }

    #[test]
    fn empty_tableau_takes_only_a_king() {
        let p = Pile::tableau();
        assert!(p.can_accept(up(Suit::Spades, Rank::King)));
        assert!(!p.can_accept(up(Suit::Hearts, Rank::Queen)));
    }

    #[test]
    fn foundation_builds_up_in_suit() {
        let mut f = Pile::foundation();
        assert!(!f.can_accept(up(Suit::Hearts, Rank::Two)));
        assert!(f.can_accept(up(Suit::Hearts, Rank::Ace)));
        f.push(up(Suit::Hearts, Rank::Ace));

        assert!(f.can_accept(up(Suit::Hearts, Rank::Two)));
        assert!(!f.can_accept(up(Suit::Diamonds, Rank::Two)));
        assert!(!f.can_accept(up(Suit::Hearts, Rank::Three)));
        assert!(!f.can_accept_run(&[up(Suit::Hearts, Rank::Two), up(Suit::Clubs, Rank::Ace)]));

        f.push(up(Suit::Hearts, Rank::Two));
        assert!(f.is_ordered_foundation());
        f.push(up(Suit::Clubs, Rank::Three));
        assert!(!f.is_ordered_foundation());
    }

    #[test]
    fn accept_run_appends_in_order() {
        let mut p = Pile::tableau();
        p.push(up(Suit::Clubs, Rank::King));
        let run = vec![up(Suit::Hearts, Rank::Queen), up(Suit::Spades, Rank::Jack)];
        p.accept_run(run.clone());
        assert_eq!(&p.cards()[1..], &run[..]);
        assert_eq!(p.kind(), PileKind::Tableau);
    }
}
