//! The Yukon rules engine.
//
//! `Yukon` owns the whole table for one game:
//!   - seven tableau columns,
//!   - four foundations,
//!   - the deck (empty once the deal is done),
//!   - the phase of the game (dealing, in play, won).
//!
//! Every move operation validates first and mutates second, so a rejected
//! move leaves the table exactly as it was. Rejections are reported as
//! `false`; they are ordinary outcomes, not errors.

use log::{debug, error, trace};
use rand::Rng;

use crate::card::{CARDS_PER_DECK, Card};
use crate::deal_code;
use crate::deck::Deck;
use crate::error::{Result, YukonError};
use crate::moves::{Move, generate_legal_moves};
use crate::pile::{Pile, PileKind};

/// Number of tableau columns.
pub const NUM_COLS: usize = 7;
/// Number of foundation piles.
pub const NUM_FOUNDATIONS: usize = 4;
/// Cards in a complete foundation (Ace..King).
pub const FOUNDATION_FULL: usize = 13;

const DECK_LEN: usize = CARDS_PER_DECK as usize;

/// Face-up cards dealt onto each column, after the face-down ones.
/// Column `i` receives `i` face-down cards first.
const FACE_UP_PER_COLUMN: [usize; NUM_COLS] = [1, 5, 5, 5, 5, 5, 5];

/// Where a game is in its lifecycle.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GamePhase {
    /// Piles are being filled from the deck.
    Dealing,
    /// The deal is done and moves are being played.
    InPlay,
    /// All four foundations were completed. Terminal for moves: playing a
    /// card back does not leave this phase, though restoring a snapshot
    /// does when the restored position is not won.
    Won,
}

/// Deep copy of the 11 piles, face flags included.
///
/// Cards are plain values, so a snapshot shares nothing with the engine it
/// was taken from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Snapshot {
    tableau: [Vec<Card>; NUM_COLS],
    foundations: [Vec<Card>; NUM_FOUNDATIONS],
}

impl Snapshot {
    pub fn tableau(&self) -> &[Vec<Card>; NUM_COLS] {
        &self.tableau
    }

    pub fn foundations(&self) -> &[Vec<Card>; NUM_FOUNDATIONS] {
        &self.foundations
    }

    pub fn total_cards(&self) -> usize {
        self.tableau.iter().chain(self.foundations.iter()).map(Vec::len).sum()
    }
}

/// One game of Yukon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Yukon {
    tableau: [Pile; NUM_COLS],
    foundations: [Pile; NUM_FOUNDATIONS],
    deck: Deck,
    phase: GamePhase,
}

impl Yukon {
    /// Start a new game from a deck shuffled with the thread-local RNG.
    pub fn new_game() -> Result<Self> {
        Self::new_game_with_rng(&mut rand::thread_rng())
    }

    /// Start a new game, shuffling with `rng`.
    pub fn new_game_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Result<Self> {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        Self::from_deck(deck)
    }

    /// Start a new game whose shuffle is determined by `seed`.
    pub fn new_game_with_seed(seed: u64) -> Result<Self> {
        debug!("new game from seed {}", seed);
        Self::from_deck(Deck::shuffled_from_seed(seed))
    }

    /// Deal `deck` in its current order. The deck must be full.
    pub fn from_deck(deck: Deck) -> Result<Self> {
        let mut game = Yukon {
            tableau: std::array::from_fn(|_| Pile::tableau()),
            foundations: std::array::from_fn(|_| Pile::foundation()),
            deck,
            phase: GamePhase::Dealing,
        };
        game.deal_with_shape(&FACE_UP_PER_COLUMN)?;
        Ok(game)
    }

    /// Build an arbitrary position from explicit piles, bottom card first.
    ///
    /// The piles together must hold each of the 52 cards exactly once.
    /// Stacking rules are not checked, so any position can be analysed.
    pub fn from_piles(
        tableau: [Vec<Card>; NUM_COLS],
        foundations: [Vec<Card>; NUM_FOUNDATIONS],
    ) -> Result<Self> {
        let all: Vec<Card> = tableau.iter().chain(foundations.iter()).flatten().copied().collect();
        if all.len() != DECK_LEN {
            return Err(YukonError::CardCount(all.len()));
        }
        deal_code::validate_permutation(&all)?;

        let mut game = Yukon {
            tableau: tableau.map(|cards| Pile::with_cards(PileKind::Tableau, cards)),
            foundations: foundations.map(|cards| Pile::with_cards(PileKind::Foundation, cards)),
            deck: Deck::exhausted(),
            phase: GamePhase::InPlay,
        };
        game.update_phase();
        Ok(game)
    }

    /// Deal the deck onto the tableau: column `i` gets `i` face-down cards
    /// followed by `face_up[i]` face-up cards.
    ///
    /// Anything other than all 52 cards landing on the table is a defect
    /// and aborts construction with [`YukonError::DealInvariant`].
    fn deal_with_shape(&mut self, face_up: &[usize; NUM_COLS]) -> Result<()> {
        for pile in self.tableau.iter_mut().chain(self.foundations.iter_mut()) {
            pile.clear();
        }
        self.phase = GamePhase::Dealing;

        let deal_number = if log::log_enabled!(log::Level::Debug) {
            self.deck.deal_number().ok()
        } else {
            None
        };

        for (col_idx, column) in self.tableau.iter_mut().enumerate() {
            for card in self.deck.draw(col_idx)? {
                column.push(card);
            }
            for _ in 0..face_up[col_idx] {
                let mut card = self.deck.draw_one()?;
                card.flip();
                column.push(card);
            }
        }

        let dealt: usize = self.tableau.iter().map(Pile::len).sum();
        if dealt != DECK_LEN || !self.deck.is_empty() {
            error!(
                "deal placed {} cards with {} left in the deck",
                dealt,
                self.deck.len()
            );
            return Err(YukonError::DealInvariant {
                dealt,
                left_in_deck: self.deck.len(),
            });
        }

        if let Some(n) = deal_number {
            debug!("dealt deal number {}", n);
        }
        self.phase = GamePhase::InPlay;
        Ok(())
    }

    // ----- Observation -----

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn tableau(&self) -> &[Pile; NUM_COLS] {
        &self.tableau
    }

    pub fn foundations(&self) -> &[Pile; NUM_FOUNDATIONS] {
        &self.foundations
    }

    pub fn column(&self, col: usize) -> Option<&Pile> {
        self.tableau.get(col)
    }

    pub fn foundation(&self, idx: usize) -> Option<&Pile> {
        self.foundations.get(idx)
    }

    /// Raw mutable access to a column.
    ///
    /// This bypasses every rule and the 52-card invariant; it exists for
    /// setting up positions by hand.
    pub fn column_mut(&mut self, col: usize) -> Option<&mut Pile> {
        self.tableau.get_mut(col)
    }

    /// Raw mutable access to a foundation. Same caveats as [`Yukon::column_mut`].
    pub fn foundation_mut(&mut self, idx: usize) -> Option<&mut Pile> {
        self.foundations.get_mut(idx)
    }

    /// Cards still in the deck (zero after the deal).
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Cards on the table plus cards in the deck.
    pub fn total_cards(&self) -> usize {
        let on_table: usize = self
            .tableau
            .iter()
            .chain(self.foundations.iter())
            .map(Pile::len)
            .sum();
        on_table + self.deck.len()
    }

    // ----- Moves -----

    /// Move the cards of column `src` from `start` to the top onto
    /// column `dst`.
    ///
    /// Rejected (returning `false`, nothing changed) when the columns are
    /// equal or out of range, `start` is out of range or face-down, or the
    /// destination does not accept the run's bottom card.
    pub fn move_run(&mut self, src: usize, start: usize, dst: usize) -> bool {
        if src == dst || src >= NUM_COLS || dst >= NUM_COLS {
            trace!("move_run rejected: columns {} -> {}", src, dst);
            return false;
        }
        let Some(run) = self.tableau[src].run_from(start) else {
            trace!("move_run rejected: no card at column {} index {}", src, start);
            return false;
        };
        if !run[0].is_face_up() {
            trace!("move_run rejected: {} is face-down", run[0]);
            return false;
        }
        if !self.tableau[dst].can_accept_run(run) {
            trace!("move_run rejected: column {} does not take {}", dst, run[0]);
            return false;
        }

        let Some(run) = self.tableau[src].extract_run(start) else {
            return false;
        };
        self.tableau[dst].accept_run(run);
        self.tableau[src].reveal_top_if_face_down();
        self.update_phase();
        true
    }

    /// Move the top card of column `src` onto foundation `foundation`.
    ///
    /// Legal iff that card is face-up and the foundation takes it (an Ace
    /// on an empty foundation, or the next rank of the same suit).
    pub fn move_to_foundation(&mut self, src: usize, foundation: usize) -> bool {
        let Some(card) = self.tableau.get(src).and_then(Pile::peek) else {
            trace!("move_to_foundation rejected: column {} empty or absent", src);
            return false;
        };
        if !card.is_face_up() || !self.can_place_on_foundation(card, foundation) {
            trace!("move_to_foundation rejected: {} -> foundation {}", card, foundation);
            return false;
        }

        let Some(card) = self.tableau[src].pop() else {
            return false;
        };
        self.foundations[foundation].push(card);
        self.update_phase();
        true
    }

    /// Move the top card of column `src` to the first foundation that
    /// takes it.
    pub fn move_to_any_foundation(&mut self, src: usize) -> bool {
        (0..NUM_FOUNDATIONS).any(|f| self.move_to_foundation(src, f))
    }

    /// Whether `card` could be placed on foundation `foundation` right now.
    /// Out-of-range indices give `false`.
    pub fn can_place_on_foundation(&self, card: Card, foundation: usize) -> bool {
        self.foundations
            .get(foundation)
            .is_some_and(|pile| pile.can_accept(card))
    }

    /// First foundation that would take `card`, if any.
    pub fn foundation_for(&self, card: Card) -> Option<usize> {
        (0..NUM_FOUNDATIONS).find(|&f| self.can_place_on_foundation(card, f))
    }

    /// Move the top card of foundation `foundation` back onto column `dst`,
    /// under the usual tableau rule for a single card.
    pub fn move_from_foundation(&mut self, foundation: usize, dst: usize) -> bool {
        let Some(card) = self.foundations.get(foundation).and_then(Pile::peek) else {
            trace!("move_from_foundation rejected: foundation {} empty or absent", foundation);
            return false;
        };
        if !self.tableau.get(dst).is_some_and(|pile| pile.can_accept(card)) {
            trace!("move_from_foundation rejected: {} -> column {}", card, dst);
            return false;
        }

        let Some(card) = self.foundations[foundation].pop() else {
            return false;
        };
        self.tableau[dst].push(card);
        self.update_phase();
        true
    }

    /// Apply a [`Move`] value; see [`Move::apply`].
    pub fn apply(&mut self, mv: Move) -> bool {
        mv.apply(self)
    }

    /// Every move that is legal in the current position.
    pub fn legal_moves(&self) -> Vec<Move> {
        generate_legal_moves(self)
    }

    /// True iff all four foundations hold 13 cards.
    pub fn check_win(&self) -> bool {
        self.foundations.iter().all(|f| f.len() == FOUNDATION_FULL)
    }

    /// Enter `Won` once the last card reaches a foundation.
    ///
    /// Moves never leave `Won`, even if a card is played back afterwards;
    /// only `restore` recomputes the phase from scratch.
    fn update_phase(&mut self) {
        if self.phase == GamePhase::InPlay && self.check_win() {
            self.phase = GamePhase::Won;
        }
    }

    // ----- Undo support -----

    /// Deep copy of all 11 piles.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tableau: std::array::from_fn(|i| self.tableau[i].cards().to_vec()),
            foundations: std::array::from_fn(|i| self.foundations[i].cards().to_vec()),
        }
    }

    /// Replace all 11 piles with the contents of `snapshot`.
    ///
    /// The phase is recomputed: `Won` if the restored foundations are
    /// complete, `InPlay` otherwise.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        for (pile, cards) in self.tableau.iter_mut().zip(snapshot.tableau.iter()) {
            *pile = Pile::with_cards(PileKind::Tableau, cards.clone());
        }
        for (pile, cards) in self.foundations.iter_mut().zip(snapshot.foundations.iter()) {
            *pile = Pile::with_cards(PileKind::Foundation, cards.clone());
        }
        self.phase = GamePhase::InPlay;
        self.update_phase();
    }
}

// ----- Tests -----
