//! Coordinate Dialect and Error Contract Tests
//!
//! Every supported bracket dialect must parse to the same structure,
//! and the error message text is part of the protocol boundary.

use gui_action_parser::{Point, frame_normalizer, normalize_coordinates, parse_coordinates};

#[test]
fn test_two_token_dialects_agree() {
    let dialects = [
        "(100, 200)",
        "[100, 200]",
        "<point>100 200</point>",
        "<point>100, 200</point>",
        "<point>100 200<point>",
        "100 200",
        "100, 200",
        "100,200",
    ];

    for dialect in dialects {
        let coords = parse_coordinates(dialect)
            .unwrap_or_else(|e| panic!("dialect {:?} failed: {}", dialect, e));
        assert_eq!(
            coords.raw,
            Some(Point::new(100.0, 200.0)),
            "raw mismatch for {:?}",
            dialect
        );
        let boxed = coords.reference_box.expect("degenerate box expected");
        assert_eq!(
            (boxed.x1, boxed.y1, boxed.x2, boxed.y2),
            (100.0, 200.0, 100.0, 200.0),
            "box mismatch for {:?}",
            dialect
        );
        assert!(coords.normalized.is_none());
    }
}

#[test]
fn test_four_token_box_uses_middle_pair() {
    let coords = parse_coordinates("1 2 3 4").unwrap();
    assert_eq!(coords.raw, Some(Point::new(2.0, 3.0)));
    let boxed = coords.reference_box.unwrap();
    assert_eq!((boxed.x1, boxed.y1, boxed.x2, boxed.y2), (1.0, 2.0, 3.0, 4.0));
}

#[test]
fn test_error_messages_are_stable() {
    assert_eq!(
        parse_coordinates("(1.1)").unwrap_err().to_string(),
        "Insufficient coordinate, at least 2 numbers required"
    );
    assert_eq!(
        parse_coordinates("a, b").unwrap_err().to_string(),
        "Invalid number at position 0: a"
    );
}

#[test]
fn test_normalization_pipeline() {
    let coords = parse_coordinates("<point>250 750</point>").unwrap();

    let default_normalized = normalize_coordinates(&coords);
    assert_eq!(default_normalized.normalized, Some(Point::new(0.25, 0.75)));

    let by_frame = frame_normalizer(1000.0, 500.0);
    let frame_normalized = by_frame(&coords);
    assert_eq!(frame_normalized.normalized, Some(Point::new(0.25, 1.5)));

    // Additive in both cases
    assert_eq!(default_normalized.raw, coords.raw);
    assert_eq!(default_normalized.reference_box, coords.reference_box);
}
