//! Card, Suit, Rank and Color types for a standard 52-card deck.
//!
//! - `Card` is a small `Copy` record: rank, suit, and a face-up flag.
//! - `Suit` carries its color, so red/black checks never look at raw fields.
//!
//! A game holds exactly one card per (rank, suit), so that pair is the
//! card's identity. Copying a pile of cards is therefore a deep copy.

use core::fmt;

use crate::error::{Result, YukonError};

/// Number of suits in a standard deck.
pub const NUM_SUITS: u8 = 4;
/// Number of ranks in a standard deck.
pub const NUM_RANKS: u8 = 13;
/// Number of cards in a standard deck.
pub const CARDS_PER_DECK: u8 = NUM_SUITS * NUM_RANKS;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Red,
    Black,
}

/// The four suits, in the order a fresh deck is built.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum Suit {
    Hearts = 0,
    Diamonds = 1,
    Clubs = 2,
    Spades = 3,
}

/// The thirteen ranks. Discriminants are the rank numbers 1..=13.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King, // 13
}

/// A playing card.
///
/// Equality compares the face-up flag as well, which is what snapshot
/// comparisons want. Use [`Card::same_card`] to ask whether two values
/// denote the same physical card regardless of orientation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// Create a face-down card from a suit and rank.
    #[inline]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card {
            rank,
            suit,
            face_up: false,
        }
    }

    /// Create a face-down card from a rank number in 1..=13.
    ///
    /// Fails with [`YukonError::InvalidRank`] outside that range.
    pub fn from_rank_number(rank: u8, suit: Suit) -> Result<Self> {
        Ok(Card::new(suit, Rank::from_number(rank)?))
    }

    /// Create a face-down card from a raw index in 0..=51.
    ///
    /// The mapping is:
    /// ```text
    /// index = suit as u8 * 13 + (rank number - 1)
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        if index >= CARDS_PER_DECK {
            return None;
        }
        let suit = Suit::from_u8(index / NUM_RANKS)?;
        let rank = Rank::from_number(index % NUM_RANKS + 1).ok()?;
        Some(Card::new(suit, rank))
    }

    /// Raw 0..=51 index of this card; orientation is not encoded.
    #[inline]
    pub fn index(self) -> u8 {
        self.suit as u8 * NUM_RANKS + (self.rank as u8 - 1)
    }

    #[inline]
    pub fn suit(self) -> Suit {
        self.suit
    }

    #[inline]
    pub fn rank(self) -> Rank {
        self.rank
    }

    /// Rank number in 1..=13 (Ace=1, King=13).
    #[inline]
    pub fn rank_number(self) -> u8 {
        self.rank.number()
    }

    #[inline]
    pub fn color(self) -> Color {
        self.suit.color()
    }

    #[inline]
    pub fn is_red(self) -> bool {
        self.color() == Color::Red
    }

    #[inline]
    pub fn is_black(self) -> bool {
        self.color() == Color::Black
    }

    #[inline]
    pub fn is_face_up(self) -> bool {
        self.face_up
    }

    /// Turn the card face-up. Calling it on a face-up card does nothing.
    #[inline]
    pub fn flip(&mut self) {
        self.face_up = true;
    }

    /// Builder-style variant of [`Card::flip`], handy when laying out
    /// positions by hand.
    #[inline]
    pub fn face_up(mut self) -> Self {
        self.flip();
        self
    }

    /// True if both values denote the same physical card (same rank and
    /// suit), whatever their orientation.
    #[inline]
    pub fn same_card(self, other: Card) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }

    /// Short string like "AH", "7C", "TD", "KS".
    pub fn short_str(self) -> String {
        format!("{}{}", self.rank.short_char(), self.suit.short_char())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_str())
    }
}

impl Suit {
    /// All suits in a fixed, reproducible order.
    pub const ALL: [Suit; NUM_SUITS as usize] =
        [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Construct a suit from a small integer 0..=3.
    #[inline]
    pub fn from_u8(v: u8) -> Option<Self> {
        Suit::ALL.get(v as usize).copied()
    }

    #[inline]
    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Single-character representation: 'H', 'D', 'C', or 'S'.
    #[inline]
    pub fn short_char(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

impl Rank {
    /// All ranks in a fixed, reproducible order (Ace..King).
    pub const ALL: [Rank; NUM_RANKS as usize] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Construct a rank from its number in 1..=13.
    pub fn from_number(n: u8) -> Result<Self> {
        match n {
            1..=13 => Ok(Rank::ALL[(n - 1) as usize]),
            _ => Err(YukonError::InvalidRank(n)),
        }
    }

    /// Rank number in 1..=13 (Ace=1, King=13).
    #[inline]
    pub fn number(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn short_char(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }
}

/// Tableau stacking rule: can `upper` be placed on `lower`?
///
/// True if `upper` is exactly one rank lower than `lower` and of the
/// opposite color.
#[inline]
pub fn is_one_lower_opposite_color(upper: Card, lower: Card) -> bool {
    upper.rank_number() + 1 == lower.rank_number() && upper.color() != lower.color()
}

/// Foundation stacking rule: can `upper` be placed on `lower`?
///
/// True if `upper` is the same suit and exactly one rank higher.
#[inline]
pub fn is_next_in_suit(upper: Card, lower: Card) -> bool {
    upper.suit() == lower.suit() && upper.rank_number() == lower.rank_number() + 1
}

/// Generate a standard 52-card deck in a fixed order, all face-down.
///
/// Suits follow `Suit::ALL` order, and ranks follow `Rank::ALL` order.
pub fn standard_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect()
}
