//! Move representation and move generation for Yukon.
//
//! This module defines a compact `Move` type, a generator listing every
//! legal move in a position, an `apply` method that plays a move through
//! the engine, and a human-readable `describe`. A presentation layer uses
//! the generator for hints; nothing here searches beyond one move.

use crate::game::Yukon;

/// The kinds of move Yukon allows.
///
/// Indices are 0-based internally but printed 1-based for humans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Move the cards of a column from `src_index` to the top onto another
    /// column. `src_index` counts from the bottom of the column (0).
    /// The cards above the moved card need not be in sequence.
    ColumnToColumn {
        src_col: u8,
        src_index: u8,
        dst_col: u8,
    },

    /// Move the top card of a column to a foundation.
    ColumnToFoundation { src_col: u8, foundation: u8 },

    /// Move the top card of a foundation back onto a column.
    FoundationToColumn { foundation: u8, dst_col: u8 },
}

/// A single move, wrapping a `MoveKind` for future extensibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub kind: MoveKind,
}

/// Narrow a caller's index to the compact `u8` form.
///
/// Anything that does not fit saturates to `u8::MAX`. No column or
/// foundation has that index and no column is that tall, so the engine
/// rejects the move instead of playing a truncated one.
#[inline]
fn index_u8(i: usize) -> u8 {
    u8::try_from(i).unwrap_or(u8::MAX)
}

impl Move {
    pub fn column_to_column(src_col: usize, src_index: usize, dst_col: usize) -> Self {
        Move {
            kind: MoveKind::ColumnToColumn {
                src_col: index_u8(src_col),
                src_index: index_u8(src_index),
                dst_col: index_u8(dst_col),
            },
        }
    }

    pub fn column_to_foundation(src_col: usize, foundation: usize) -> Self {
        Move {
            kind: MoveKind::ColumnToFoundation {
                src_col: index_u8(src_col),
                foundation: index_u8(foundation),
            },
        }
    }

    pub fn foundation_to_column(foundation: usize, dst_col: usize) -> Self {
        Move {
            kind: MoveKind::FoundationToColumn {
                foundation: index_u8(foundation),
                dst_col: index_u8(dst_col),
            },
        }
    }
}

// ----- Public move generation -----

/// Generate all legal moves from the given position.
///
/// This does **not** apply or prioritize moves. The order is:
///   - Column -> Foundation (top face-up card, first foundation taking it)
///   - Column -> Column (every face-up start index, every destination)
///   - Foundation -> Column
///
/// A run whose bottom card is already at the bottom of its column is not
/// offered to an empty column; that move would change nothing.
pub fn generate_legal_moves(game: &Yukon) -> Vec<Move> {
    let mut moves = Vec::new();

    // Column -> Foundation
    for (col_idx, col) in game.tableau().iter().enumerate() {
        let Some(card) = col.peek() else {
            continue;
        };
        if !card.is_face_up() {
            continue;
        }
        if let Some(f_idx) = game.foundation_for(card) {
            moves.push(Move::column_to_foundation(col_idx, f_idx));
        }
    }

    // Column -> Column
    for (src_idx, src) in game.tableau().iter().enumerate() {
        for start in 0..src.len() {
            let Some(run) = src.run_from(start) else {
                continue;
            };
            if !run[0].is_face_up() {
                continue;
            }
            for (dst_idx, dst) in game.tableau().iter().enumerate() {
                if dst_idx == src_idx {
                    continue;
                }
                if dst.is_empty() && start == 0 {
                    continue;
                }
                if dst.can_accept_run(run) {
                    moves.push(Move::column_to_column(src_idx, start, dst_idx));
                }
            }
        }
    }

    // Foundation -> Column
    for (f_idx, foundation) in game.foundations().iter().enumerate() {
        let Some(card) = foundation.peek() else {
            continue;
        };
        for (dst_idx, dst) in game.tableau().iter().enumerate() {
            if dst.can_accept(card) {
                moves.push(Move::foundation_to_column(f_idx, dst_idx));
            }
        }
    }

    moves
}

// ----- Application -----

impl Move {
    /// Play this move through the engine.
    ///
    /// Legality is checked by the engine; an illegal move returns `false`
    /// and changes nothing.
    pub fn apply(&self, game: &mut Yukon) -> bool {
        match self.kind {
            MoveKind::ColumnToColumn {
                src_col,
                src_index,
                dst_col,
            } => game.move_run(src_col as usize, src_index as usize, dst_col as usize),

            MoveKind::ColumnToFoundation {
                src_col,
                foundation,
            } => game.move_to_foundation(src_col as usize, foundation as usize),

            MoveKind::FoundationToColumn {
                foundation,
                dst_col,
            } => game.move_from_foundation(foundation as usize, dst_col as usize),
        }
    }

    /// Render a move as a human-readable string, using the position it
    /// would be played from to name the cards involved.
    pub fn describe(&self, game: &Yukon) -> String {
        match self.kind {
            MoveKind::ColumnToColumn {
                src_col,
                src_index,
                dst_col,
            } => {
                let s = src_col as usize;
                let d = dst_col as usize;
                let Some(col) = game.column(s) else {
                    return format!("Column {} -> Column {} (no such column)", s + 1, d + 1);
                };
                let start = src_index as usize;
                match col.get(start) {
                    None => format!("Column {} (no card at {}) -> Column {}", s + 1, start, d + 1),
                    Some(first) if start + 1 == col.len() => {
                        format!("Column {}: {} -> Column {}", s + 1, first, d + 1)
                    }
                    Some(first) => format!(
                        "Column {}: {}..{} -> Column {}",
                        s + 1,
                        first,
                        col.peek().unwrap_or(first),
                        d + 1
                    ),
                }
            }

            MoveKind::ColumnToFoundation {
                src_col,
                foundation,
            } => {
                let s = src_col as usize;
                match game.column(s).and_then(|c| c.peek()) {
                    Some(card) => format!(
                        "Column {}: {} -> Foundation {}",
                        s + 1,
                        card,
                        foundation as usize + 1
                    ),
                    None => format!("Column {} (empty) -> Foundation {}", s + 1, foundation as usize + 1),
                }
            }

            MoveKind::FoundationToColumn {
                foundation,
                dst_col,
            } => {
                let f = foundation as usize;
                match game.foundation(f).and_then(|p| p.peek()) {
                    Some(card) => format!(
                        "Foundation {}: {} -> Column {}",
                        f + 1,
                        card,
                        dst_col as usize + 1
                    ),
                    None => format!("Foundation {} (empty) -> Column {}", f + 1, dst_col as usize + 1),
                }
            }
        }
    }

    /// True if this move sends a card to a foundation.
    pub fn is_foundation_play(&self) -> bool {
        matches!(self.kind, MoveKind::ColumnToFoundation { .. })
    }
}

// ----- Tests -----
