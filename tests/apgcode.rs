use life_seed::apg::WechslerDecoder;
use life_seed::{ApgCode, ApgError, Coord, PatternKind};

#[test]
fn single_strip_marks_low_rows() {
    let mut decoder = WechslerDecoder::new("3");
    let cells: Vec<Coord> = decoder.by_ref().map(Result::unwrap).collect();
    assert_eq!(cells, vec![Coord::new(0, 0), Coord::new(0, 1)]);
    assert_eq!(decoder.column(), 1);
    assert_eq!(decoder.row_offset(), 0);
}

#[test]
fn row_break_moves_to_next_band() {
    let mut decoder = WechslerDecoder::new("z");
    assert!(decoder.next().is_none());
    assert_eq!((decoder.column(), decoder.row_offset()), (0, 5));

    let cells: Result<Vec<Coord>, ApgError> = WechslerDecoder::new("z3").collect();
    assert_eq!(cells.unwrap(), vec![Coord::new(0, 5), Coord::new(0, 6)]);
}

#[test]
fn dangling_escape_is_rejected() {
    for body in ["y", "y!"] {
        let result: Result<Vec<Coord>, ApgError> = WechslerDecoder::new(body).collect();
        assert!(
            matches!(result, Err(ApgError::MalformedInput { .. })),
            "{body:?} should be malformed"
        );
    }
}

#[test]
fn spaceship_code_parses() {
    let code: ApgCode = "xq4_3".parse().unwrap();
    assert_eq!(code.kind(), PatternKind::Spaceship);
    assert_eq!(code.period(), 4);
    assert_eq!(code.body(), "3");
}

#[test]
fn error_taxonomy() {
    assert!(matches!(
        ApgCode::parse("xq4"),
        Err(ApgError::MalformedCode { .. })
    ));
    assert!(matches!(
        ApgCode::parse("ov_p2_3"),
        Err(ApgError::UnrecognizedPatternKind(_))
    ));
    let code = ApgCode::parse("xp2_7?").unwrap();
    assert!(matches!(code.decode(), Err(ApgError::MalformedInput { .. })));
}

#[test]
fn multi_band_pattern() {
    // A column of ten cells spanning two bands.
    let code = ApgCode::parse("xp2_vzv").unwrap();
    let cells = code.decode().unwrap();
    let expected: Vec<Coord> = (0..10).map(|y| Coord::new(0, y)).collect();
    assert_eq!(cells, expected);
    assert_eq!(
        code.bounding_box().unwrap(),
        Some((Coord::new(0, 0), Coord::new(0, 9)))
    );
}
