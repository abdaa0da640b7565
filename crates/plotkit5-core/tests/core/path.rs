use plotkit5_core::{PathSet, Polyline, Transform, Vec2};

fn two_strokes() -> PathSet {
    let mut path = PathSet::new();
    path.add(Polyline::from_points([(0.0, 0.0), (10.0, 0.0)]));
    path.add(Polyline::from_points([(20.0, 0.0), (30.0, 0.0)]));
    path
}

#[test]
fn test_down_up_and_total_length() {
    let path = two_strokes();
    assert_eq!(path.down_length(), 20.0);
    assert_eq!(path.up_length(), 10.0);
    assert_eq!(path.length(), 30.0);
}

#[test]
fn test_add_drops_empty_strokes() {
    let mut path = PathSet::new();
    path.add(Polyline::new());
    assert!(path.is_empty());
    path.add(Polyline::from_points([(1.0, 1.0)]));
    assert_eq!(path.len(), 1);
}

#[test]
fn test_append_preserves_order() {
    let mut a = PathSet::from_stroke(Polyline::from_points([(0.0, 0.0), (1.0, 0.0)]));
    let b = PathSet::from_stroke(Polyline::from_points([(2.0, 0.0), (3.0, 0.0)]));
    a.append(b);
    assert_eq!(a.len(), 2);
    assert_eq!(a.strokes()[1].first(), Some(Vec2::new(2.0, 0.0)));
}

#[test]
fn test_join_merges_within_tolerance() {
    let mut path = PathSet::new();
    path.add(Polyline::from_points([(0.0, 0.0), (10.0, 0.0)]));
    path.add(Polyline::from_points([(10.5, 0.0), (20.0, 0.0)]));
    path.add(Polyline::from_points([(40.0, 0.0), (50.0, 0.0)]));

    let joined = path.join(1.0);
    assert_eq!(joined.len(), 2);
    assert_eq!(joined.strokes()[0].len(), 4);
    assert_eq!(joined.strokes()[0].last(), Some(Vec2::new(20.0, 0.0)));

    // Below the gap nothing merges.
    let unjoined = path.join(0.1);
    assert_eq!(unjoined.len(), 3);
}

#[test]
fn test_from_point_stream_splits_on_nan() {
    let stream = vec![
        (0.0, 0.0),
        (1.0, 0.0),
        (f64::NAN, f64::NAN),
        (5.0, 5.0),
        (6.0, 5.0),
        (7.0, 5.0),
    ];
    let path = PathSet::from_point_stream(stream);
    assert_eq!(path.len(), 2);
    assert_eq!(path.strokes()[0].len(), 2);
    assert_eq!(path.strokes()[1].len(), 3);
}

#[test]
fn test_from_point_stream_ignores_leading_and_repeated_breaks() {
    let stream = vec![
        (f64::NAN, 0.0),
        (0.0, 0.0),
        (1.0, 0.0),
        (f64::NAN, 0.0),
        (f64::INFINITY, 0.0),
        (2.0, 0.0),
        (3.0, 0.0),
    ];
    let path = PathSet::from_point_stream(stream);
    assert_eq!(path.len(), 2);
}

#[test]
fn test_transform_helpers() {
    let path = two_strokes();

    let moved = path.translated(5.0, -1.0);
    assert_eq!(moved.strokes()[0].first(), Some(Vec2::new(5.0, -1.0)));

    let scaled = path.scaled(2.0, 2.0);
    assert_eq!(scaled.strokes()[1].last(), Some(Vec2::new(60.0, 0.0)));

    let rotated = path.rotated(90.0);
    let p = rotated.strokes()[0].last().unwrap();
    assert!(p.x.abs() < 1e-9);
    assert!((p.y - 10.0).abs() < 1e-9);

    // Identity transform leaves the set equal.
    assert_eq!(path.transformed(&Transform::IDENTITY), path);
}

#[test]
fn test_bounds_cover_all_strokes() {
    let path = two_strokes();
    let (min, max) = path.bounds().unwrap();
    assert_eq!(min, Vec2::new(0.0, 0.0));
    assert_eq!(max, Vec2::new(30.0, 0.0));
    assert!(PathSet::new().bounds().is_none());
}
