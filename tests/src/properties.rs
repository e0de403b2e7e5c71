#![cfg(test)]
use proptest::prelude::*;
use rectangle_core::{Dimension, Rectangle, RectangleError};

const SIDE: std::ops::RangeInclusive<i64> = 1..=10_000;

proptest! {
    #[test]
    fn measures_follow_the_formulas(w in SIDE, h in SIDE) {
        let r = Rectangle::new(w, Some(h)).unwrap();
        prop_assert_eq!(r.area(), i128::from(w * h));
        prop_assert_eq!(r.perimeter(), i128::from(2 * (w + h)));
    }

    #[test]
    fn measures_hold_for_any_positive_sides(w in 1..=i64::MAX, h in 1..=i64::MAX) {
        let r = Rectangle::new(w, Some(h)).unwrap();
        prop_assert_eq!(r.area(), i128::from(w) * i128::from(h));
        prop_assert_eq!(r.perimeter(), 2 * (i128::from(w) + i128::from(h)));
    }

    #[test]
    fn missing_height_is_a_square(w in SIDE) {
        let implicit = Rectangle::new(w, None).unwrap();
        let explicit = Rectangle::new(w, Some(w)).unwrap();
        prop_assert_eq!(implicit.width(), explicit.width());
        prop_assert_eq!(implicit.height(), explicit.height());
        prop_assert_eq!(implicit.area(), explicit.area());
    }

    #[test]
    fn non_positive_width_is_rejected(w in -10_000_i64..=0, h in SIDE) {
        prop_assert_eq!(
            Rectangle::new(w, Some(h)).unwrap_err(),
            RectangleError::InvalidDimension { dimension: Dimension::Width, value: w }
        );
    }

    #[test]
    fn non_positive_height_is_rejected(w in SIDE, h in -10_000_i64..=0) {
        prop_assert_eq!(
            Rectangle::new(w, Some(h)).unwrap_err(),
            RectangleError::InvalidDimension { dimension: Dimension::Height, value: h }
        );
    }

    #[test]
    fn failed_setters_keep_previous_sides(w in SIDE, h in SIDE, bad in -10_000_i64..=0) {
        let mut r = Rectangle::new(w, Some(h)).unwrap();
        prop_assert!(r.set_width(bad).is_err());
        prop_assert!(r.set_height(bad).is_err());
        prop_assert_eq!((r.width(), r.height()), (w, h));
    }

    #[test]
    fn comparisons_agree_with_area(
        (aw, ah) in (SIDE, SIDE),
        (bw, bh) in (SIDE, SIDE),
    ) {
        let a = Rectangle::new(aw, Some(ah)).unwrap();
        let b = Rectangle::new(bw, Some(bh)).unwrap();

        prop_assert_eq!(a.equals(&b).unwrap(), a.area() == b.area());
        prop_assert_eq!(a.less_than(&b).unwrap(), a.area() < b.area());
        prop_assert_eq!(a.less_or_equal(&b).unwrap(), a.area() <= b.area());
        prop_assert_eq!(a == b, a.area() == b.area());
    }

    #[test]
    fn combined_height_is_sum_of_heights(
        (aw, ah) in (SIDE, SIDE),
        (bw, bh) in (SIDE, SIDE),
    ) {
        let a = Rectangle::new(aw, Some(ah)).unwrap();
        let b = Rectangle::new(bw, Some(bh)).unwrap();

        let sum = a.combine(&b).unwrap();
        prop_assert_eq!(sum.width(), aw + bw);
        prop_assert_eq!(sum.height(), ah + bh);
    }
}
