//! Property tests for the turn and effect state machines.

use proptest::prelude::*;

use duelcore::core::{PlayerId, RulesError};
use duelcore::effects::{EffectDuration, EffectKind};
use duelcore::player::Player;
use duelcore::Board;

fn board_with(a: u8, b: u8) -> Board {
    Board::new([
        Player::new(PlayerId::new(a), "Aria", 30, 6),
        Player::new(PlayerId::new(b), "Bram", 30, 6),
    ])
    .unwrap()
}

proptest! {
    /// Any registered id can become current; any other id errors and
    /// leaves the current player untouched.
    #[test]
    fn set_current_player_total_over_ids(a: u8, b: u8, probe: u8) {
        prop_assume!(a != b);
        let mut board = board_with(a, b);

        let probe = PlayerId::new(probe);
        let before = board.current_player();

        if probe == PlayerId::new(a) || probe == PlayerId::new(b) {
            board.set_current_player(probe).unwrap();
            prop_assert_eq!(board.current_player(), probe);
        } else {
            prop_assert_eq!(
                board.set_current_player(probe).unwrap_err(),
                RulesError::UnknownPlayer(probe)
            );
            prop_assert_eq!(board.current_player(), before);
        }
    }

    /// Switching the current player an even number of times is a no-op.
    #[test]
    fn switch_current_player_involution(a: u8, b: u8, switches in 0usize..32) {
        prop_assume!(a != b);
        let mut board = board_with(a, b);
        let start = board.current_player();

        for _ in 0..switches * 2 {
            board.switch_current_player();
        }
        prop_assert_eq!(board.current_player(), start);
    }

    /// N increments from turn 1 always yield 1 + N.
    #[test]
    fn increment_turn_number_counts(n in 0u32..500) {
        let mut board = board_with(0, 1);
        for _ in 0..n {
            board.increment_turn_number();
        }
        prop_assert_eq!(board.turn_number(), 1 + n);
    }

    /// A countdown effect survives exactly d - 1 end-of-turn passes.
    #[test]
    fn effect_expires_after_exact_duration(d in 1u32..40) {
        let mut board = board_with(0, 1);
        let id = board.attach_effect(
            EffectKind::Regeneration { player: PlayerId::new(0), amount: 1 },
            EffectDuration::Turns(d),
            "Regeneration",
        );

        for _ in 0..d - 1 {
            board.process_end_of_turn_effects();
            prop_assert!(board.has_effect(id));
        }

        board.process_end_of_turn_effects();
        prop_assert!(!board.has_effect(id));
    }

    /// Permanent effects survive any number of end-of-turn passes.
    #[test]
    fn permanent_effect_never_expires(passes in 0usize..200) {
        let mut board = board_with(0, 1);
        let id = board.attach_effect(
            EffectKind::Corrosion { player: PlayerId::new(1), amount: 0 },
            EffectDuration::Permanent,
            "Curse",
        );

        for _ in 0..passes {
            board.process_end_of_turn_effects();
        }
        prop_assert!(board.has_effect(id));
    }

    /// End-of-turn processing removes expired effects and nothing else.
    #[test]
    fn end_of_turn_keeps_active_set_consistent(
        durations in prop::collection::vec(0u32..5, 0..12),
    ) {
        let mut board = board_with(0, 1);

        let ids: Vec<_> = durations
            .iter()
            .map(|&d| {
                board.attach_effect(
                    EffectKind::Regeneration { player: PlayerId::new(0), amount: 1 },
                    EffectDuration::Turns(d),
                    "Timed",
                )
            })
            .collect();

        board.process_end_of_turn_effects();

        for (id, &d) in ids.iter().zip(&durations) {
            // Effects that started expired, or with one turn left, are gone.
            prop_assert_eq!(board.has_effect(*id), d > 1);
        }
    }
}
