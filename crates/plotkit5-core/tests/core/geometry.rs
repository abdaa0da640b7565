use plotkit5_core::{Transform, Vec2};

#[test]
fn test_identity_transform_is_noop() {
    let t = Transform::IDENTITY;
    let points = [
        Vec2::new(0.0, 0.0),
        Vec2::new(0.1 + 0.2, 1e-300),
        Vec2::new(-1234.5678, 9.87654321e8),
    ];
    for p in points {
        let q = t.apply(p);
        assert_eq!(p.x.to_bits(), q.x.to_bits());
        assert_eq!(p.y.to_bits(), q.y.to_bits());
    }
}

#[test]
fn test_repeated_identity_accumulates_no_error() {
    let t = Transform::IDENTITY;
    let mut p = Vec2::new(0.3, -0.7);
    let original = p;
    for _ in 0..10_000 {
        p = t.apply(p);
    }
    assert_eq!(p, original);
}

#[test]
fn test_composition_order_anchor_rotate_scale_translate() {
    // Anchor at (10, 0), rotate 180, scale 2x, translate (1, 1).
    let t = Transform {
        translate: Vec2::new(1.0, 1.0),
        rotate_deg: 180.0,
        scale: Vec2::new(2.0, 2.0),
        anchor: Vec2::new(10.0, 0.0),
    };
    // (12, 0): anchor-relative (2, 0) -> rotated (-2, 0) -> scaled (-4, 0)
    // -> re-anchored (6, 0) -> translated (7, 1).
    let p = t.apply(Vec2::new(12.0, 0.0));
    assert!((p.x - 7.0).abs() < 1e-9);
    assert!((p.y - 1.0).abs() < 1e-9);
}

#[test]
fn test_scalar_scale_constructor_normalizes_to_pair() {
    let t = Transform::scaling(3.0);
    assert_eq!(t.scale, Vec2::new(3.0, 3.0));
    assert_eq!(t.apply(Vec2::new(1.0, 2.0)), Vec2::new(3.0, 6.0));
}

#[test]
fn test_is_identity_detects_each_component() {
    assert!(Transform::IDENTITY.is_identity());
    assert!(!Transform::translation(0.0, 1.0).is_identity());
    assert!(!Transform::rotation(1.0, Vec2::ZERO).is_identity());
    assert!(!Transform::scaling(2.0).is_identity());
}
