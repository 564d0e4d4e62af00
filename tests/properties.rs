//! Property-based tests for whole-game invariants.
//!
//! Each case deals a seeded game and plays a random walk of legal moves,
//! checking the table after every step.

use proptest::prelude::*;

use yukon::deal_code::{deal_count, deal_number, deck_from_deal_number};
use yukon::game::{NUM_COLS, NUM_FOUNDATIONS};
use yukon::{Deck, GamePhase, Move, Session, Snapshot, Yukon};

fn config() -> ProptestConfig {
    ProptestConfig::with_cases(64)
}

/// Play up to `choices.len()` legal moves, picking each by index modulo
/// the number of legal moves. Stops early when no move is left.
fn random_walk(session: &mut Session, choices: &[usize]) {
    for &choice in choices {
        let moves = session.engine().legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[choice % moves.len()];
        assert!(session.play(mv), "generated move {:?} was rejected", mv);
    }
}

fn check_table(game: &Yukon) -> Result<(), TestCaseError> {
    prop_assert_eq!(game.total_cards(), 52);
    prop_assert_eq!(game.deck_len(), 0);

    for (i, f) in game.foundations().iter().enumerate() {
        prop_assert!(f.is_ordered_foundation(), "foundation {} out of order: {:?}", i, f.cards());
    }
    for (i, col) in game.tableau().iter().enumerate() {
        if let Some(top) = col.peek() {
            prop_assert!(top.is_face_up(), "column {} has a face-down top", i);
        }
        // Face-down cards only ever sit below face-up ones.
        let downs = col.face_down_count();
        prop_assert!(col.cards()[..downs].iter().all(|c| !c.is_face_up()));
    }

    // A complete table is always `Won`; `Won` itself is sticky under moves.
    if game.check_win() {
        prop_assert_eq!(game.phase(), GamePhase::Won);
    } else {
        prop_assert_ne!(game.phase(), GamePhase::Dealing);
    }
    Ok(())
}

fn arb_move() -> impl Strategy<Value = Move> {
    prop_oneof![
        (0..NUM_COLS + 1, 0usize..14, 0..NUM_COLS + 1)
            .prop_map(|(s, i, d)| Move::column_to_column(s, i, d)),
        (0..NUM_COLS + 1, 0..NUM_FOUNDATIONS + 1)
            .prop_map(|(s, f)| Move::column_to_foundation(s, f)),
        (0..NUM_FOUNDATIONS + 1, 0..NUM_COLS + 1)
            .prop_map(|(f, d)| Move::foundation_to_column(f, d)),
        // Indices past u8 range must be rejected, not truncated.
        (any::<usize>(), any::<usize>(), any::<usize>())
            .prop_map(|(s, i, d)| Move::column_to_column(s, i, d)),
    ]
}

proptest! {
    #![proptest_config(config())]

    /// Every deal puts all 52 cards on the table in the Yukon shape.
    #[test]
    fn prop_deal_shape(seed in any::<u64>()) {
        let game = Yukon::new_game_with_seed(seed).unwrap();
        prop_assert_eq!(game.phase(), GamePhase::InPlay);
        prop_assert!(game.foundations().iter().all(|f| f.is_empty()));
        for (i, col) in game.tableau().iter().enumerate() {
            let face_up = if i == 0 { 1 } else { 5 };
            prop_assert_eq!(col.face_down_count(), i);
            prop_assert_eq!(col.face_up_count(), face_up);
        }
        check_table(&game)?;
    }

    /// The same seed always deals the same table.
    #[test]
    fn prop_seeded_deals_repeat(seed in any::<u64>()) {
        let a = Yukon::new_game_with_seed(seed).unwrap();
        let b = Yukon::new_game_with_seed(seed).unwrap();
        prop_assert_eq!(a.snapshot(), b.snapshot());
    }

    /// Invariants hold after every move of a random legal walk.
    #[test]
    fn prop_random_play_keeps_invariants(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<usize>(), 0..80),
    ) {
        let mut session = Session::with_seed(seed).unwrap();
        for &choice in &choices {
            let moves = session.engine().legal_moves();
            if moves.is_empty() {
                break;
            }
            prop_assert!(session.play(moves[choice % moves.len()]));
            check_table(session.engine())?;
        }
    }

    /// A rejected move leaves every pile exactly as it was.
    #[test]
    fn prop_rejected_moves_change_nothing(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<usize>(), 0..30),
        attempts in prop::collection::vec(arb_move(), 1..20),
    ) {
        let mut session = Session::with_seed(seed).unwrap();
        random_walk(&mut session, &choices);

        let mut game = session.engine().clone();
        for mv in attempts {
            let before: Snapshot = game.snapshot();
            if !mv.apply(&mut game) {
                prop_assert_eq!(game.snapshot(), before);
            }
            check_table(&game)?;
        }
    }

    /// Undoing every move returns to the dealt position.
    #[test]
    fn prop_undo_round_trip(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<usize>(), 0..40),
    ) {
        let mut session = Session::with_seed(seed).unwrap();
        let start = session.engine().snapshot();
        random_walk(&mut session, &choices);

        let played = session.moves_played().len();
        prop_assert_eq!(session.history_len(), played + 1);
        for _ in 0..played {
            prop_assert!(session.undo());
        }
        prop_assert!(!session.undo());
        prop_assert_eq!(session.engine().snapshot(), start);
        prop_assert_eq!(session.engine().phase(), GamePhase::InPlay);
    }

    /// Deal numbers name deck orders one-to-one.
    #[test]
    fn prop_deal_number_round_trip(seed in any::<u64>()) {
        let deck = Deck::shuffled_from_seed(seed);
        let n = deal_number(deck.cards()).unwrap();
        prop_assert!(n < deal_count());
        prop_assert_eq!(deck_from_deal_number(&n).unwrap(), deck.cards().to_vec());
        prop_assert_eq!(Deck::from_deal_number(&n).unwrap(), deck);
    }
}
