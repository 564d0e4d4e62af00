//! Human-readable rendering of a Yukon table.
//!
//! Face-down cards are shown as "XX" and face-up cards with their
//! `short_str()` rank/suit code. This is the observation surface used by
//! the CLI and by tests; a graphical front end reads the piles directly.

use crate::card::Card;
use crate::game::{NUM_COLS, Yukon};

/// Format a single card for display, either face-up or face-down.
pub fn format_card_visible(card: Card) -> String {
    if card.is_face_up() {
        card.short_str()
    } else {
        "XX".to_string()
    }
}

/// Render the foundation row, showing the top card of each pile.
///   - Empty foundation: `[  ]`
///   - Non-empty: e.g. `[AH]`, `[7C]`, `[KD]`
pub fn render_foundations(game: &Yukon) -> String {
    let parts: Vec<String> = game
        .foundations()
        .iter()
        .map(|f| match f.peek() {
            Some(card) => format!("[{}]", card.short_str()),
            None => "[  ]".to_string(),
        })
        .collect();
    format!("Foundations: {}", parts.join(" "))
}

/// Render all tableau columns as a multi-line string.
///
/// Columns are top-justified: row 0 holds the bottom card of every column,
/// and the last non-empty row of a column is its playing edge.
pub fn render_columns(game: &Yukon) -> String {
    let mut s = String::new();

    s.push_str("Columns:\n");
    s.push_str("      ");
    for col_idx in 0..NUM_COLS {
        s.push_str(&format!(" C{} ", col_idx + 1));
    }
    s.push('\n');

    let max_height = game.tableau().iter().map(|c| c.len()).max().unwrap_or(0);

    for row in 0..max_height {
        s.push_str("      ");
        for col in game.tableau() {
            match col.get(row) {
                Some(card) => s.push_str(&format!("{:>3} ", format_card_visible(card))),
                None => s.push_str("    "),
            }
        }
        s.push('\n');
    }

    s
}

/// Render the whole table: foundations, then columns.
pub fn render_table(game: &Yukon) -> String {
    let mut s = String::new();
    s.push_str(&render_foundations(game));
    s.push('\n');
    s.push('\n');
    s.push_str(&render_columns(game));
    s
}

/// Print a table to stdout using `render_table`.
pub fn print_table(game: &Yukon) {
    println!("{}", render_table(game));
}

/// One-line summary of the top card of each column.
///
/// Example:
///   Playing edge: C1: 4S  C2: 2H  C3: JS  C4: JD  C5: TC  C6: 7C  C7: 2D
pub fn render_playing_edge(game: &Yukon) -> String {
    let parts: Vec<String> = game
        .tableau()
        .iter()
        .enumerate()
        .map(|(i, col)| match col.peek() {
            Some(card) => format!("C{}: {:>2}", i + 1, format_card_visible(card)),
            None => format!("C{}: --", i + 1),
        })
        .collect();
    format!("Playing edge: {}", parts.join("  "))
}

/// Debug helper: every pile with all cards shown, bottom -> top.
pub fn render_full_piles_debug(game: &Yukon) -> String {
    fn line(label: String, cards: &[Card]) -> String {
        if cards.is_empty() {
            format!("  {}: <empty>", label)
        } else {
            let names: Vec<String> = cards.iter().map(|c| c.short_str()).collect();
            format!("  {}: {}", label, names.join(" "))
        }
    }

    let mut lines = vec!["Full piles (all cards shown, bottom -> top):".to_string()];
    for (i, col) in game.tableau().iter().enumerate() {
        lines.push(line(format!("C{}", i + 1), col.cards()));
    }
    for (i, f) in game.foundations().iter().enumerate() {
        lines.push(line(format!("F{}", i + 1), f.cards()));
    }
    lines.join("\n")
}
