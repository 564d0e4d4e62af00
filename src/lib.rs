pub mod card;
pub mod deal_code;
pub mod deck;
pub mod display;
pub mod error;
pub mod game;
pub mod moves;
pub mod pile;
pub mod session;

use std::env;

use num_bigint::BigUint;

pub use crate::card::{Card, Color, Rank, Suit};
pub use crate::deck::Deck;
pub use crate::error::{Result, YukonError};
pub use crate::game::{GamePhase, Snapshot, Yukon};
pub use crate::moves::{Move, MoveKind};
pub use crate::pile::{Pile, PileKind};
pub use crate::session::Session;

use crate::display::{print_table, render_full_piles_debug, render_playing_edge};

/// Settings for one run of the `yukon` binary.
///
/// At most one deal source is used, in order of preference:
/// `deck`, then `deal`, then `seed`, then a fresh random shuffle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: Option<u64>,
    pub deal: Option<BigUint>,
    pub deck: Option<Vec<Card>>,
    pub show_moves: bool,
    pub demo: bool,
    pub debug_piles: bool,
}

impl RunConfig {
    /// Parse command-line arguments (without the program name).
    ///
    /// Returns the config plus one warning per argument that was not
    /// understood; such arguments are otherwise ignored.
    pub fn from_args<I, S>(args: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cfg = RunConfig::default();
        let mut warnings = Vec::new();

        // Very small hand-rolled argument parser.
        for arg in args {
            let arg = arg.as_ref();
            if arg == "--moves" {
                cfg.show_moves = true;
            } else if arg == "--demo" {
                cfg.demo = true;
            } else if arg == "--debug-piles" {
                cfg.debug_piles = true;
            } else if let Some(rest) = arg.strip_prefix("--seed=") {
                match rest.parse::<u64>() {
                    Ok(v) => cfg.seed = Some(v),
                    Err(_) => warnings.push(format!("could not parse seed from '{}'", rest)),
                }
            } else if let Some(rest) = arg.strip_prefix("--deal=") {
                match deal_code::parse_deal_number(rest) {
                    Ok(n) => cfg.deal = Some(n),
                    Err(e) => warnings.push(format!("ignoring --deal: {}", e)),
                }
            } else if let Some(rest) = arg.strip_prefix("--deck=") {
                match deal_code::parse_deck_list(rest) {
                    Ok(cards) => cfg.deck = Some(cards),
                    Err(e) => warnings.push(format!("ignoring --deck: {}", e)),
                }
            } else {
                warnings.push(format!(
                    "unrecognized argument '{}'; supported: --seed=<u64>, --deal=<decimal>, \
                     --deck=[..], --moves, --demo, --debug-piles",
                    arg
                ));
            }
        }

        (cfg, warnings)
    }

    /// The full, undealt deck this config names.
    pub fn build_deck(&self) -> Result<Deck> {
        if let Some(cards) = &self.deck {
            Deck::from_cards(cards.clone())
        } else if let Some(n) = &self.deal {
            Deck::from_deal_number(n)
        } else if let Some(seed) = self.seed {
            Ok(Deck::shuffled_from_seed(seed))
        } else {
            let mut deck = Deck::new();
            deck.shuffle(&mut rand::thread_rng());
            Ok(deck)
        }
    }

    /// Deal the game this config names.
    pub fn deal_game(&self) -> Result<Yukon> {
        Yukon::from_deck(self.build_deck()?)
    }
}

/// Play foundation moves until none is left. Returns how many were played.
///
/// Each step takes the first foundation play the move generator offers.
pub fn play_foundation_moves(session: &mut Session) -> usize {
    let mut played = 0;
    loop {
        let next = session
            .engine()
            .legal_moves()
            .into_iter()
            .find(|mv| mv.is_foundation_play());
        match next {
            Some(mv) if session.play(mv) => played += 1,
            _ => break,
        }
    }
    played
}

/// Entry point for the `yukon` binary.
///
/// Currently this:
///   - Parses a very small command-line surface:
///       * `--seed=<u64>`       → deal from a seeded shuffle
///       * `--deal=<decimal>`   → deal the deck with this deal number
///       * `--deck=[i, ...]`    → deal an explicit list of 52 card indices
///       * `--moves`            → list the legal moves of the dealt position
///       * `--demo`             → greedily play foundation moves
///       * `--debug-piles`      → dump every pile with all cards shown
///   - Deals one game and prints its deal number and table. The deal
///     number can be passed back with `--deal=` to replay the same game.
///
/// Example:
///   cargo run -- --seed=12345 --moves
pub fn run() {
    println!("yukon: Yukon solitaire rules engine");
    println!();

    let (cfg, warnings) = RunConfig::from_args(env::args().skip(1));
    for w in &warnings {
        eprintln!("Warning: {}", w);
    }

    let dealt = cfg.build_deck().and_then(|deck| {
        let deal_number = deck.deal_number()?;
        Ok((deal_number, Yukon::from_deck(deck)?))
    });
    let (deal_number, game) = match dealt {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("Error: could not deal: {}", e);
            return;
        }
    };

    println!("Deal number: {}", deal_number);
    println!();

    let mut session = Session::from_engine(game);

    print_table(session.engine());
    println!("{}", render_playing_edge(session.engine()));
    if cfg.debug_piles {
        println!("{}", render_full_piles_debug(session.engine()));
    }

    if cfg.show_moves {
        let moves = session.engine().legal_moves();
        println!();
        println!("Legal moves ({} total):", moves.len());
        for (i, mv) in moves.iter().enumerate() {
            println!("  {:2}: {}", i + 1, mv.describe(session.engine()));
        }
    }

    if cfg.demo {
        let played = play_foundation_moves(&mut session);
        println!();
        println!("Foundation moves played: {}", played);
        print_table(session.engine());
        println!("Phase: {:?}", session.engine().phase());
    }
}
