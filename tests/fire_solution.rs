use approx::assert_abs_diff_eq;
use mortar_calc::algorithms::range_table::Interpolation;
use mortar_calc::algorithms::grid_coordinates::resolve;
use mortar_calc::algorithms::vector::Vec2;
use mortar_calc::{
    calculate_solution, validate_grid, ApiError, FireControlApi, FiringSolutionCalculator,
    GridError, GridReference, RangeTable, SolutionReport, TextFormatter, GRID_CELL_SIZE_M,
};

#[test]
fn test_resolve_e5_cell_centre() {
    let reference = GridReference::parse("E5").unwrap();
    let pos = resolve(&reference, GRID_CELL_SIZE_M).unwrap();
    assert_eq!(pos.x, 4.0 * 300.0 + 150.0);
    assert_eq!(pos.y, -(4.0 * 300.0 + 150.0));
}

#[test]
fn test_same_grid_solution() {
    let solution = calculate_solution("E5-26", "E5-26").unwrap();
    assert_eq!(solution.range, 0);
    assert!(solution.too_close);
    assert!(!solution.too_far);
    assert_eq!(solution.mils, None);
}

#[test]
fn test_envelope_scenarios() {
    let calc = FiringSolutionCalculator::default();

    let max = calc.solve_displacement(&Vec2::new(0.0, 1250.0)).unwrap();
    assert_eq!((max.mils, max.too_close, max.too_far), (Some(800), false, false));

    let close = calc.solve_displacement(&Vec2::new(0.0, 25.0)).unwrap();
    assert_eq!((close.mils, close.too_close, close.too_far), (None, true, false));

    let far = calc.solve_displacement(&Vec2::new(0.0, 1300.0)).unwrap();
    assert_eq!((far.mils, far.too_close, far.too_far), (None, false, true));
}

#[test]
fn test_exact_key_interpolation() {
    let table = RangeTable::standard_mortar();
    assert_eq!(table.interpolate(1250.0), Interpolation::Elevation(800.0));
    assert_eq!(table.interpolate(25.0), Interpolation::OutOfBounds);
}

#[test]
fn test_reverse_solution_bearing() {
    let forward = calculate_solution("E5-26", "C2-29").unwrap();
    let backward = calculate_solution("C2-29", "E5-26").unwrap();

    assert_eq!(forward.range, backward.range);
    assert_ne!(forward.bearing_deg, backward.bearing_deg);
    let expected = (forward.bearing_deg + 180.0) % 360.0;
    assert_abs_diff_eq!(backward.bearing_deg, expected, epsilon = 0.1 + 1e-9);
}

#[test]
fn test_grammar_valid_but_unmappable() {
    assert!(validate_grid("E5-105"));
    let err = calculate_solution("E5-105", "E6").unwrap_err();
    assert_eq!(err, GridError::UnmappedSubgridDigit { digit: '0', position: 2 });
    assert!(!err.is_malformed());

    assert!(!validate_grid("E5-1a"));
    assert!(calculate_solution("E5-1a", "E6").unwrap_err().is_malformed());
}

#[test]
fn test_rows_are_not_capped_at_26() {
    let far = calculate_solution("A1", "A30").unwrap();
    assert!(far.too_far);
    assert_eq!(far.mils, None);

    let north = calculate_solution("A1", "A0").unwrap();
    assert_eq!((north.range, north.mils), (300, Some(1475)));
}

#[test]
fn test_unusable_cell_size_never_yields_nan() {
    let reference = GridReference::parse("E5").unwrap();
    let err = resolve(&reference, f64::NAN).unwrap_err();
    assert!(matches!(err, GridError::InvalidCellSize { .. }));

    let calc = FiringSolutionCalculator::default();
    assert!(calc.solve_displacement(&Vec2::new(f64::NAN, 0.0)).is_err());
}

#[test]
fn test_front_end_flow() {
    let api = FireControlApi::new();
    let solution = api.calculate_grids("e5-26", "c2-29").unwrap();
    let report = SolutionReport::new("e5-26", "c2-29", solution.clone());
    let text = TextFormatter::new().format_text(&report);

    assert!(text.starts_with(&format!("Range: {} m\n", solution.range)));
    assert!(text.ends_with("E5-26 -> C2-29"));

    let err = api.calculate_grids("e5 26", "c2-29").unwrap_err();
    assert_eq!(err, ApiError::InvalidOrigin { grid: "e5 26".to_string() });
}
