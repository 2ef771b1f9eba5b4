use ciclo_core::Level;
use proptest::prelude::*;

proptest! {
    #[test]
    fn construction_always_lands_in_range(value in any::<u8>()) {
        let level = Level::new(value);
        prop_assert!(level.value() <= 3);
        prop_assert!((0.0..=1.0).contains(&level.score()));
    }

    #[test]
    fn score_is_monotonic(a in 0u8..=3, b in 0u8..=3) {
        let (la, lb) = (Level::new(a), Level::new(b));
        if la < lb {
            prop_assert!(la.score() < lb.score());
        }
    }

    #[test]
    fn raise_then_lower_never_escapes_range(value in any::<u8>(), steps in 0u8..10) {
        let level = Level::new(value).raised().lowered_by(steps);
        prop_assert!(level.value() <= 3);
    }

    #[test]
    fn serde_round_trips_through_u8(value in 0u8..=3) {
        let level = Level::new(value);
        let json = serde_json::to_string(&level).unwrap();
        let back: Level = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(level, back);
    }
}
