#![cfg(test)]
use rectangle_core::{Dimension, Rectangle, RectangleError};

fn rect(width: i64, height: i64) -> Rectangle {
    Rectangle::new(width, Some(height)).unwrap()
}

/// Chains combine and difference the way a caller composing shapes would.
#[test]
fn combine_then_difference_round_trip() {
    let base = rect(2, 3);
    let extra = rect(4, 1);

    let sum: Rectangle = (base + extra).unwrap();
    assert_eq!(format!("{sum:?}"), "Rectangle(6, 4)");
    assert_eq!(sum.area(), 24);

    let back: Rectangle = (sum - extra).unwrap();
    assert_eq!((back.width(), back.height()), (2, 3));
}

#[test]
fn difference_is_symmetric_in_perimeter_order() {
    let big = rect(5, 5);
    let small = rect(1, 1);

    let forward = big.difference(&small).unwrap();
    let backward = small.difference(&big).unwrap();

    assert_eq!(
        (forward.width(), forward.height()),
        (backward.width(), backward.height())
    );
    assert_eq!(format!("{forward:?}"), "Rectangle(4, 4)");
}

#[test]
fn difference_surfaces_nested_validation_error() {
    let result = rect(10, 1) - rect(1, 5);

    assert_eq!(
        result.unwrap_err(),
        RectangleError::InvalidDimension {
            dimension: Dimension::Height,
            value: -4,
        }
    );
}

#[test]
fn mismatched_operands_fail_before_computing() {
    let r = rect(3, 4);

    for result in [
        r.less_than(&12_i64),
        r.equals(&String::from("12")),
        r.less_or_equal(&12_u64),
    ] {
        assert!(matches!(result, Err(RectangleError::TypeMismatch { .. })));
    }

    let err = r.combine(&3_i32).unwrap_err();
    assert_eq!(err.to_string(), "operand must be a Rectangle, got i32");
}

#[test]
fn sorting_orders_by_area() {
    let mut shapes = vec![rect(3, 3), rect(1, 2), rect(2, 6), rect(1, 1)];
    shapes.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let areas: Vec<i128> = shapes.iter().map(Rectangle::area).collect();
    assert_eq!(areas, [1, 2, 9, 12]);
}

#[test]
fn debug_string_rebuilds_equivalent_rectangle() {
    let original = rect(8, 3);
    let rebuilt: Rectangle = format!("{original:?}").parse().unwrap();

    assert_eq!(
        (rebuilt.width(), rebuilt.height()),
        (original.width(), original.height())
    );
}
