//! A play session: one engine plus its undo history.
//
//! The control loop owns exactly one `Session`. Starting a new game
//! replaces the engine and the history together, so they can never
//! disagree.
//!
//! History invariants:
//!   - the first entry is the position right after the deal,
//!   - the last entry is always the current position,
//!   - undo drops the last entry and restores the new last one, and does
//!     nothing when only the first entry is left.

use log::debug;

use crate::error::Result;
use crate::game::{Snapshot, Yukon};
use crate::moves::Move;

#[derive(Clone, Debug)]
pub struct Session {
    game: Yukon,
    history: Vec<Snapshot>,
    /// Moves that produced `history[1..]`, in order.
    moves: Vec<Move>,
}

impl Session {
    /// A session around a freshly shuffled game.
    pub fn new() -> Result<Self> {
        Ok(Self::from_engine(Yukon::new_game()?))
    }

    /// A session around the game dealt from `seed`.
    pub fn with_seed(seed: u64) -> Result<Self> {
        Ok(Self::from_engine(Yukon::new_game_with_seed(seed)?))
    }

    /// A session whose starting position is `game` as it stands.
    pub fn from_engine(game: Yukon) -> Self {
        let history = vec![game.snapshot()];
        Session {
            game,
            history,
            moves: Vec::new(),
        }
    }

    /// Replace the game and its history with a freshly shuffled deal.
    ///
    /// On error the current session is left as it was.
    pub fn new_game(&mut self) -> Result<()> {
        *self = Self::new()?;
        debug!("session restarted");
        Ok(())
    }

    /// Replace the game and its history with the deal for `seed`.
    pub fn new_game_with_seed(&mut self, seed: u64) -> Result<()> {
        *self = Self::with_seed(seed)?;
        debug!("session restarted from seed {}", seed);
        Ok(())
    }

    /// Read-only view of the engine, for rendering.
    pub fn engine(&self) -> &Yukon {
        &self.game
    }

    /// Play `mv`. On success the new position is recorded for undo.
    pub fn play(&mut self, mv: Move) -> bool {
        if !mv.apply(&mut self.game) {
            return false;
        }
        self.history.push(self.game.snapshot());
        self.moves.push(mv);
        true
    }

    pub fn move_run(&mut self, src: usize, start: usize, dst: usize) -> bool {
        self.play(Move::column_to_column(src, start, dst))
    }

    pub fn move_to_foundation(&mut self, src: usize, foundation: usize) -> bool {
        self.play(Move::column_to_foundation(src, foundation))
    }

    pub fn move_from_foundation(&mut self, foundation: usize, dst: usize) -> bool {
        self.play(Move::foundation_to_column(foundation, dst))
    }

    /// Send the top card of `src` to whichever foundation takes it.
    pub fn move_to_any_foundation(&mut self, src: usize) -> bool {
        let Some(card) = self.game.column(src).and_then(|c| c.peek()) else {
            return false;
        };
        match self.game.foundation_for(card) {
            Some(f) => self.move_to_foundation(src, f),
            None => false,
        }
    }

    /// Step back one move. Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        self.moves.pop();
        if let Some(previous) = self.history.last() {
            self.game.restore(previous);
        }
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.len() > 1
    }

    /// Number of recorded positions, including the post-deal one.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The moves played since the deal, minus any undone.
    pub fn moves_played(&self) -> &[Move] {
        &self.moves
    }

    pub fn is_won(&self) -> bool {
        self.game.check_win()
    }
}
