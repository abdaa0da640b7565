use plotkit5_core::{Polyline, Vec2};

#[test]
fn test_horizontal_segment_length_and_normal() {
    let segment = Polyline::from_points([(0.0, 0.0), (10.0, 0.0)]);
    assert_eq!(segment.perimeter(), 10.0);
    // Perpendicular to the x-axis; the left-normal convention gives (0, 1).
    assert_eq!(segment.normal_at(0), Vec2::new(0.0, 1.0));
    assert_eq!(segment.normal_at(1), Vec2::new(0.0, 1.0));
    assert_eq!(segment.tangent_at(0), Vec2::new(1.0, 0.0));
}

#[test]
fn test_degenerate_polylines_have_empty_caches() {
    let empty = Polyline::new();
    assert_eq!(empty.perimeter(), 0.0);
    assert_eq!(empty.normal_at(0), Vec2::ZERO);

    let single = Polyline::from_points([(3.0, 4.0)]);
    assert_eq!(single.perimeter(), 0.0);
    assert_eq!(single.tangent_at(0), Vec2::ZERO);
}

#[test]
fn test_duplicate_points_never_produce_nan() {
    let poly = Polyline::from_points([(0.0, 0.0), (0.0, 0.0), (1.0, 0.0)]);
    for i in 0..3 {
        let n = poly.normal_at(i);
        let t = poly.tangent_at(i);
        assert!(n.x.is_finite() && n.y.is_finite());
        assert!(t.x.is_finite() && t.y.is_finite());
    }
    // The duplicate-backed vertex still gets the one usable direction.
    assert_eq!(poly.tangent_at(1), Vec2::new(1.0, 0.0));

    let offset = poly.offset(1.0);
    for p in offset.points() {
        assert!(p.x.is_finite() && p.y.is_finite());
    }
}

#[test]
fn test_closed_perimeter_includes_wraparound() {
    let mut square = Polyline::from_points([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    assert_eq!(square.perimeter(), 30.0);
    square.set_closed(true);
    assert_eq!(square.perimeter(), 40.0);
    square.set_closed(false);
    assert_eq!(square.perimeter(), 30.0);
}

#[test]
fn test_line_to_invalidates_length() {
    let mut poly = Polyline::from_points([(0.0, 0.0), (10.0, 0.0)]);
    assert_eq!(poly.perimeter(), 10.0);
    poly.line_to((10.0, 10.0));
    assert_eq!(poly.perimeter(), 20.0);
}

#[test]
fn test_offset_of_straight_segment_is_parallel() {
    let segment = Polyline::from_points([(0.0, 0.0), (10.0, 0.0)]);
    let d = 2.5;
    let offset = segment.offset(d);
    assert_eq!(offset.len(), 2);
    for (orig, moved) in segment.points().iter().zip(offset.points()) {
        let displacement = *moved - *orig;
        // Perpendicular to the original tangent, at distance d.
        assert!(displacement.dot(Vec2::new(1.0, 0.0)).abs() < 1e-12);
        assert!((displacement.length() - d).abs() < 1e-12);
    }
    assert!((offset.perimeter() - 10.0).abs() < 1e-12);
}

#[test]
fn test_offset_square_shrinks_uniformly() {
    // CCW square: vertex normals bisect at 45 degrees and point inward,
    // the miter factor is sqrt(2), so offsetting by 1 moves every corner
    // exactly one unit along both axes.
    let square =
        Polyline::closed_from_points([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let inset = square.offset(1.0);
    let (min, max) = inset.bounds().unwrap();
    assert!((min.x - 1.0).abs() < 1e-9);
    assert!((min.y - 1.0).abs() < 1e-9);
    assert!((max.x - 9.0).abs() < 1e-9);
    assert!((max.y - 9.0).abs() < 1e-9);
}

#[test]
fn test_offset_zero_and_degenerate_are_identity() {
    let segment = Polyline::from_points([(0.0, 0.0), (10.0, 0.0)]);
    assert_eq!(segment.offset(0.0), segment);
    let dot = Polyline::from_points([(5.0, 5.0)]);
    assert_eq!(dot.offset(3.0), dot);
}

#[test]
fn test_resample_keeps_exact_endpoints() {
    let segment = Polyline::from_points([(0.0, 0.0), (10.0, 0.0)]);
    let resampled = segment.resample_by_spacing(3.0);
    let xs: Vec<f64> = resampled.points().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 3.0, 6.0, 9.0, 10.0]);
    assert_eq!(resampled.last(), Some(Vec2::new(10.0, 0.0)));
}

#[test]
fn test_resample_walks_corners() {
    let bent = Polyline::from_points([(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)]);
    let resampled = bent.resample_by_spacing(2.0);
    let expected = [
        Vec2::new(0.0, 0.0),
        Vec2::new(2.0, 0.0),
        Vec2::new(4.0, 0.0),
        Vec2::new(4.0, 2.0),
        Vec2::new(4.0, 4.0),
    ];
    assert_eq!(resampled.points(), &expected);
}

#[test]
fn test_point_at_length_interpolates() {
    let segment = Polyline::from_points([(0.0, 0.0), (10.0, 0.0)]);
    assert_eq!(segment.point_at_length(2.5), Some(Vec2::new(2.5, 0.0)));
    assert_eq!(segment.point_at_length(-1.0), Some(Vec2::new(0.0, 0.0)));
    assert_eq!(segment.point_at_length(99.0), Some(Vec2::new(10.0, 0.0)));
}

#[test]
fn test_reversed_flips_point_order() {
    let poly = Polyline::from_points([(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
    let rev = poly.reversed();
    assert_eq!(rev.first(), Some(Vec2::new(10.0, 0.0)));
    assert_eq!(rev.last(), Some(Vec2::new(0.0, 0.0)));
    assert_eq!(rev.len(), 3);
    assert_eq!(rev.perimeter(), poly.perimeter());
}

#[test]
fn test_stroke_path_pass_count() {
    let segment = Polyline::from_points([(0.0, 0.0), (10.0, 0.0)]);

    // Stroke narrower than the pen: just the centerline.
    let single = segment.stroke_path(0.2, 0.2);
    assert_eq!(single.len(), 1);

    // Stroke of 1.0 with a 0.2 pen: passes at +0.5, +0.3, +0.1, -0.1, -0.3.
    let multi = segment.stroke_path(1.0, 0.2);
    assert_eq!(multi.len(), 5);
    let (min, max) = multi.bounds().unwrap();
    assert!((max.y - 0.5).abs() < 1e-9);
    assert!((min.y + 0.3).abs() < 1e-9);
}

#[test]
fn test_buffer_insets_a_square() {
    let square =
        Polyline::closed_from_points([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let rings = square.buffer(-1.0);
    assert_eq!(rings.len(), 1);
    let (min, max) = rings[0].bounds().unwrap();
    assert!((min.x - 1.0).abs() < 1e-9);
    assert!((min.y - 1.0).abs() < 1e-9);
    assert!((max.x - 9.0).abs() < 1e-9);
    assert!((max.y - 9.0).abs() < 1e-9);
}

#[test]
fn test_fill_path_stays_inside_outline() {
    let square =
        Polyline::closed_from_points([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let fill = square.fill_path(2.0, 0.15);
    assert!(!fill.is_empty());
    let (min, max) = fill.bounds().unwrap();
    assert!(min.x >= 0.9 && min.y >= 0.9);
    assert!(max.x <= 9.1 && max.y <= 9.1);
}

#[test]
fn test_fill_path_rejects_open_outline() {
    let open = Polyline::from_points([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    assert!(open.fill_path(2.0, 0.15).is_empty());
}
