//! Deal numbers: naming an exact deck order with a single integer.
//!
//! Every ordering of the 52 cards maps to a unique integer in `0..52!`
//! through its Lehmer code (factorial number system). The standard
//! ordered deck is deal 0. Since `52!` is about 8e67 the numbers are
//! `BigUint`s.
//!
//! This module also accepts a bracketed list of card indices such as
//!   [51, 32, 3, ...]
//! where each integer is `Card::index()`, so a deal can be pasted from
//! a log line and replayed.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::card::{CARDS_PER_DECK, Card};
use crate::error::{Result, YukonError};

const DECK_LEN: usize = CARDS_PER_DECK as usize;

/// `52!`, the number of distinct deals.
pub fn deal_count() -> BigUint {
    (1..=DECK_LEN as u32).fold(BigUint::one(), |acc, k| acc * BigUint::from(k))
}

/// Check that `cards` holds each of the 52 cards exactly once.
///
/// Orientation is ignored; only (rank, suit) identity matters.
pub fn validate_permutation(cards: &[Card]) -> Result<()> {
    if cards.len() != DECK_LEN {
        return Err(YukonError::InvalidDeck(format!(
            "deck must have {} cards, got {}",
            DECK_LEN,
            cards.len()
        )));
    }
    let mut seen = [false; DECK_LEN];
    for (pos, &c) in cards.iter().enumerate() {
        let idx = c.index() as usize;
        if seen[idx] {
            let first = cards.iter().position(|&o| o.same_card(c)).unwrap_or(pos);
            return Err(YukonError::InvalidDeck(format!(
                "duplicate card {} at positions {} and {}",
                c, first, pos
            )));
        }
        seen[idx] = true;
    }
    Ok(())
}

/// Deal number of a 52-card order.
pub fn deal_number(cards: &[Card]) -> Result<BigUint> {
    validate_permutation(cards)?;

    // Remaining card indices, kept sorted; each Lehmer digit is the
    // position of the next card among those not yet used.
    let mut remaining: Vec<u8> = (0..CARDS_PER_DECK).collect();
    let mut n = BigUint::zero();

    for (i, card) in cards.iter().enumerate() {
        let radix = (DECK_LEN - i) as u32;
        let pos = remaining
            .binary_search(&card.index())
            .map_err(|_| YukonError::InvalidDeck(format!("card {} seen twice", card)))?;
        remaining.remove(pos);
        n = n * BigUint::from(radix) + BigUint::from(pos as u32);
    }

    Ok(n)
}

/// Rebuild the face-down deck order named by `n`.
///
/// Fails with [`YukonError::InvalidDealNumber`] when `n >= 52!`.
pub fn deck_from_deal_number(n: &BigUint) -> Result<Vec<Card>> {
    let mut digits = [0usize; DECK_LEN];
    let mut rest = n.clone();

    for i in (0..DECK_LEN).rev() {
        let radix = BigUint::from((DECK_LEN - i) as u32);
        let digit = (&rest % &radix)
            .to_usize()
            .ok_or_else(|| YukonError::InvalidDealNumber(n.to_string()))?;
        digits[i] = digit;
        rest /= radix;
    }

    if !rest.is_zero() {
        return Err(YukonError::InvalidDealNumber(format!(
            "{} is not below 52! = {}",
            n,
            deal_count()
        )));
    }

    let mut remaining: Vec<u8> = (0..CARDS_PER_DECK).collect();
    let mut cards = Vec::with_capacity(DECK_LEN);
    for digit in digits {
        let idx = remaining.remove(digit);
        let card = Card::from_index(idx)
            .ok_or_else(|| YukonError::InvalidDealNumber(n.to_string()))?;
        cards.push(card);
    }
    Ok(cards)
}

/// Parse a decimal deal number.
///
/// Whitespace and the separators `_` and `,` are ignored, so
/// "1_234 567" parses as 1234567.
pub fn parse_deal_number(s: &str) -> Result<BigUint> {
    let cleaned: String = s
        .chars()
        .filter(|&ch| !(ch.is_whitespace() || ch == '_' || ch == ','))
        .collect();
    if cleaned.is_empty() {
        return Err(YukonError::InvalidDealNumber("empty deal number".to_string()));
    }
    if !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return Err(YukonError::InvalidDealNumber(format!(
            "deal number contains non-digits: {:?}",
            s
        )));
    }
    let n = BigUint::parse_bytes(cleaned.as_bytes(), 10)
        .ok_or_else(|| YukonError::InvalidDealNumber(format!("could not parse {:?}", s)))?;
    if n >= deal_count() {
        return Err(YukonError::InvalidDealNumber(format!(
            "{} is not below 52!",
            n
        )));
    }
    Ok(n)
}

/// Parse a single bracketed integer list (e.g. "[1, 2, 3]") into a deck.
///
/// The list must contain exactly 52 integers, each in 0..=51, with no
/// duplicates. Cards come back face-down.
pub fn parse_deck_list(s: &str) -> Result<Vec<Card>> {
    let open = s
        .find('[')
        .ok_or_else(|| YukonError::InvalidDeckList("missing '['".to_string()))?;
    let close = s
        .rfind(']')
        .ok_or_else(|| YukonError::InvalidDeckList("missing ']'".to_string()))?;
    if close <= open {
        return Err(YukonError::InvalidDeckList("malformed [...] list".to_string()));
    }

    let mut cards = Vec::with_capacity(DECK_LEN);
    for part in s[open + 1..close].split(',') {
        let t = part.trim();
        if t.is_empty() {
            continue;
        }
        let v: u8 = t
            .parse()
            .map_err(|_| YukonError::InvalidDeckList(format!("could not parse '{}' as u8", t)))?;
        let card = Card::from_index(v).ok_or_else(|| {
            YukonError::InvalidDeckList(format!("card index {} out of range 0..=51", v))
        })?;
        cards.push(card);
    }

    validate_permutation(&cards).map_err(|e| YukonError::InvalidDeckList(e.to_string()))?;
    Ok(cards)
}

/// Render a deck as the bracketed index list accepted by [`parse_deck_list`].
pub fn format_deck_list(cards: &[Card]) -> String {
    let parts: Vec<String> = cards.iter().map(|c| c.index().to_string()).collect();
    format!("[{}]", parts.join(", "))
}
