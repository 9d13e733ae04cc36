use svgdata::chain::{segments_from_subpaths, OptimizedPathCollection, PathLine};
use svgdata::geometry::{BoundingBox, Point};
use svgdata::path::{parse_path_data, write_path_data};

fn optimize_data(data: &str) -> OptimizedPathCollection {
    let subpaths = parse_path_data(data).expect("path data should be valid");
    let mut opc = OptimizedPathCollection::new();
    opc.add_subpaths(&subpaths);
    opc.optimize();
    opc
}

#[test]
fn test_join_reversed_subpath() {
    let opc = optimize_data("M0 0L10 0M20 0L10 0");
    assert_eq!(opc.num_paths(), 1);
    assert!(!opc.paths()[0].is_closed());
    assert_eq!(write_path_data(&opc.to_path_data()), "M0 0L10 0L20 0");
}

#[test]
fn test_join_curves_into_loop() {
    let opc = optimize_data("M0 0C0 5 5 10 10 10 M10 10L10 0 M10 0L0 0");
    assert_eq!(opc.num_paths(), 1);
    assert!(opc.paths()[0].is_closed());
    // the last sub-path ends where the curve starts, so is joined in front
    assert_eq!(
        write_path_data(&opc.to_path_data()),
        "M10 0L0 0C0 5 5 10 10 10L10 0Z"
    );
}

#[test]
fn test_disjoint_subpaths() {
    let opc = optimize_data("M0 0L1 1M5 5L6 6");
    assert_eq!(opc.num_paths(), 2);
    assert_eq!(write_path_data(&opc.to_path_data()), "M0 0L1 1M5 5L6 6");
}

#[test]
fn test_segments_from_parsed_data() {
    // the moveto produces no segment
    let subpaths = parse_path_data("M0 0 h10 v10 h-10 z").unwrap();
    let segments = segments_from_subpaths(&subpaths);
    assert_eq!(segments.len(), 4);

    let mut opc = OptimizedPathCollection::new();
    for segment in segments.into_iter().rev() {
        opc.add_segment(segment);
    }
    opc.optimize();
    assert_eq!(opc.num_paths(), 1);
    assert!(opc.paths()[0].is_closed());
    assert_eq!(opc.paths()[0].len(), 4);
}

#[test]
fn test_bounds() {
    let mut opc = OptimizedPathCollection::new();
    assert!(opc.bounds().is_none());

    opc.add_segment(Box::new(PathLine::new(
        Point::new(2., 3.),
        Point::new(-1., 7.),
    )));
    opc.add_segment(Box::new(PathLine::new(
        Point::new(10., 0.),
        Point::new(12., 1.),
    )));
    opc.optimize();
    assert_eq!(opc.num_paths(), 2);
    assert_eq!(opc.bounds(), Some(BoundingBox::new(-1., 0., 12., 7.)));
}
