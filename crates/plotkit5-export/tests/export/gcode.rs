use plotkit5_core::{PathSet, Polyline};
use plotkit5_export::{gcode, GcodeConfig};

fn single_stroke() -> PathSet {
    PathSet::from_stroke(Polyline::from_points([(0.0, 0.0), (10.0, 0.0)]))
}

#[test]
fn test_single_stroke_program() {
    let config = GcodeConfig::default().with_heights(3.0, -0.5);
    let program = gcode::generate(&single_stroke(), &config);
    let expected = "M3\n\
                    G0 Z3.0 F800\n\
                    G0 X0.0 Y0.0\n\
                    G1 Z-0.5 F500\n\
                    G1 X10.0 Y0.0 F300\n\
                    G0 Z3.0\n\
                    G0 X0 Y0\n\
                    M5\n";
    assert_eq!(program, expected);
}

#[test]
fn test_feed_rate_only_on_first_move_after_plunge() {
    let path = PathSet::from_stroke(Polyline::from_points([
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (0.0, 10.0),
    ]));
    let program = gcode::generate(&path, &GcodeConfig::default());
    let feed_moves = program
        .lines()
        .filter(|l| l.starts_with("G1 X") && l.contains('F'))
        .count();
    let plain_moves = program
        .lines()
        .filter(|l| l.starts_with("G1 X") && !l.contains('F'))
        .count();
    assert_eq!(feed_moves, 1);
    assert_eq!(plain_moves, 2);
}

#[test]
fn test_each_stroke_gets_its_own_lift_and_plunge() {
    let mut path = PathSet::new();
    path.add(Polyline::from_points([(0.0, 0.0), (1.0, 0.0)]));
    path.add(Polyline::from_points([(5.0, 5.0), (6.0, 5.0)]));
    let config = GcodeConfig::default();
    let program = gcode::generate(&path, &config);

    let raises = program.matches("G0 Z3.0").count();
    let plunges = program.matches("G1 Z1.0").count();
    // One raise per stroke plus the footer raise.
    assert_eq!(raises, 3);
    assert_eq!(plunges, 2);
    // Sticky feed: each plunge re-arms the feed rate.
    assert_eq!(program.matches("F300").count(), 2);
}

#[test]
fn test_closed_stroke_returns_to_start() {
    let path = PathSet::from_stroke(Polyline::closed_from_points([
        (0.0, 0.0),
        (10.0, 0.0),
        (5.0, 5.0),
    ]));
    let program = gcode::generate(&path, &GcodeConfig::default());
    // Three edges: two stored spans plus the wrap back to the start.
    let moves = program.lines().filter(|l| l.starts_with("G1 X")).count();
    assert_eq!(moves, 3);
    assert!(program.contains("G1 X0.0 Y0.0"));
}

#[test]
fn test_multipass_repeats_at_each_depth() {
    let config = GcodeConfig::default().with_heights(3.0, 0.0);
    let program = gcode::generate_passes(&single_stroke(), &config, &[-0.5, -1.0, -1.5]);

    assert_eq!(program.matches("M3").count(), 1);
    assert_eq!(program.matches("M5").count(), 1);
    assert_eq!(program.matches("G1 Z-0.5 F500").count(), 1);
    assert_eq!(program.matches("G1 Z-1.0 F500").count(), 1);
    assert_eq!(program.matches("G1 Z-1.5 F500").count(), 1);
    // The drawing moves repeat once per pass.
    assert_eq!(program.matches("G1 X10.0 Y0.0").count(), 3);
}

#[test]
fn test_footer_homes_and_stops() {
    let program = gcode::generate(&single_stroke(), &GcodeConfig::default());
    let tail: Vec<&str> = program.lines().rev().take(3).collect();
    assert_eq!(tail, vec!["M5", "G0 X0 Y0", "G0 Z3.0"]);
}

#[test]
fn test_write_gcode_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("out.gcode");
    gcode::write_gcode(&single_stroke(), &GcodeConfig::default(), &file).unwrap();
    let written = std::fs::read_to_string(&file).unwrap();
    assert!(written.starts_with("M3\n"));
    assert!(written.ends_with("M5\n"));
}

#[test]
fn test_config_serde_round_trip() {
    let config = GcodeConfig::default().with_heights(5.0, -1.0).with_move_speed(450.0);
    let json = serde_json::to_string(&config).unwrap();
    let back: GcodeConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, back);
}
