use eagleport_core::{Angle, Point};
use proptest::prelude::*;

proptest! {
    #[test]
    fn four_quarter_turns_are_identity(
        x in -1_000_000_000i64..1_000_000_000,
        y in -1_000_000_000i64..1_000_000_000,
        cx in -1_000_000_000i64..1_000_000_000,
        cy in -1_000_000_000i64..1_000_000_000,
    ) {
        let p = Point::from_nm(x, y);
        let center = Point::from_nm(cx, cy);
        let mut rotated = p;
        for _ in 0..4 {
            rotated = rotated.rotated(Angle::DEG90, center);
        }
        prop_assert_eq!(rotated, p);
    }

    #[test]
    fn half_turn_mirrors_through_center(
        x in -1_000_000_000i64..1_000_000_000,
        y in -1_000_000_000i64..1_000_000_000,
    ) {
        let p = Point::from_nm(x, y);
        prop_assert_eq!(p.rotated(Angle::DEG180, Point::default()), Point::from_nm(-x, -y));
    }
}

#[test]
fn test_negative_quarter_turn_is_clockwise() {
    let p = Point::from_nm(1_000_000, 0);
    assert_eq!(p.rotated(-Angle::DEG90, Point::default()), Point::from_nm(0, -1_000_000));
}
