use svgdata::geometry::Point;
use svgdata::path::{parse_path_data, write_path_data, PathData};
use svgdata::Error;

fn normalize(data: &str) -> String {
    data.parse::<PathData>()
        .expect("path data should be valid")
        .to_string()
}

#[test]
fn test_normalize_separators() {
    assert_eq!(normalize("M 10,20 L 30 , 40"), "M10 20L30 40");
    assert_eq!(normalize("M10-20L-30-40"), "M10-20L-30-40");
    assert_eq!(normalize("\tM 1e1 2E1\n l .5 -.5 \r\n"), "M10 20l0.5-0.5");
    assert_eq!(normalize("M0 0 1 1 2 2"), "M0 0L1 1L2 2");
}

#[test]
fn test_normalize_is_stable() {
    for data in [
        "M 0,0 L 10,10 Z",
        "m 5 5 h 10 v 10 h -10 z m 20 0 l 5 5",
        "M0 0C 1 2 3 4 5 6 S 7 8 9 10 Q 1 1 2 2 T 3 3",
        "M0 0 A 5 5 30 1 0 10 10 a5,5 0 0,1 -10,-10",
        "10 20 30 40",
    ] {
        let once = normalize(data);
        assert_eq!(normalize(&once), once, "{data}");
        assert_eq!(
            parse_path_data(&once).unwrap(),
            parse_path_data(data).unwrap(),
            "{data}"
        );
    }
}

#[test]
fn test_subpath_endpoints() {
    let subpaths = parse_path_data("m 5 5 h 10 v 10 h -10 z m 20 0 l 5 5").unwrap();
    assert_eq!(subpaths.len(), 2);

    assert_eq!(subpaths[0].start(), Point::new(5., 5.));
    assert_eq!(subpaths[0].end(), Point::new(5., 5.));
    assert!(subpaths[0].is_closed());

    // relative moveto after closepath is from the start of the closed sub-path
    assert_eq!(subpaths[1].start(), Point::new(25., 5.));
    assert_eq!(subpaths[1].end(), Point::new(30., 10.));
    assert!(!subpaths[1].is_closed());
}

#[test]
fn test_command_positions() {
    let pd: PathData = "M1 1 h2 v3 l-2 -3".parse().unwrap();
    let ends: Vec<Point> = pd.commands().map(|c| c.end()).collect();
    assert_eq!(
        ends,
        vec![
            Point::new(1., 1.),
            Point::new(3., 1.),
            Point::new(3., 4.),
            Point::new(1., 1.),
        ]
    );
    let starts: Vec<Point> = pd.commands().map(|c| c.start()).collect();
    assert_eq!(starts[1], Point::new(1., 1.));
    assert_eq!(starts[3], Point::new(3., 4.));
}

#[test]
fn test_error_messages() {
    let err = parse_path_data("M0 0 X 1 1").unwrap_err();
    assert_eq!(err.to_string(), "Unrecognized path command 'X' at offset 5");
    assert_eq!(err.offset(), Some(5));

    let err = parse_path_data("M0 0 L 5").unwrap_err();
    assert_eq!(err.to_string(), "Path command 'L' truncated at offset 8");

    let err = parse_path_data("M0 0 L 5 .").unwrap_err();
    assert!(matches!(err, Error::MalformedNumber { offset: 9 }));
}

#[test]
fn test_empty_data() {
    assert!(parse_path_data("").unwrap().is_empty());
    assert_eq!(write_path_data(&[]), "");
}
