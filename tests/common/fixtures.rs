use facemetrics::engine::{LandmarkSet, Point2D, LANDMARK_COUNT};
use serde_json::Value;

/// Frontal synthetic face in a 400x400 frame.
///
/// Hand-computed measurements: bigonial width 176, bizygomatic width 200
/// (jaw ratio 0.88), cheek height 30 over face height 190, canthal tilt
/// 3 px, pupils at (150,182)/(250,182) (IPD 100, zero asymmetry), mouth
/// reference at y=283 (midface ratio 100/101). Analysis of this face
/// scores 95 with traits Chiseled/Average/Neutral and only the fallback
/// advice line.
#[rustfmt::skip]
pub const FRONTAL_FACE: [(f64, f64); LANDMARK_COUNT] = [
    // jaw 0-16
    (100.0, 180.0), (102.0, 205.0), (105.0, 230.0), (108.0, 256.0),
    (112.0, 280.0), (126.0, 300.0), (146.0, 318.0), (172.0, 332.0),
    (200.0, 340.0), (228.0, 332.0), (254.0, 318.0), (274.0, 300.0),
    (288.0, 280.0), (292.0, 256.0), (295.0, 230.0), (298.0, 205.0),
    (300.0, 180.0),
    // eyebrows 17-26
    (118.0, 158.0), (128.0, 152.0), (140.0, 150.0), (153.0, 152.0),
    (165.0, 156.0), (235.0, 156.0), (247.0, 152.0), (260.0, 150.0),
    (272.0, 152.0), (282.0, 158.0),
    // nose 27-35
    (200.0, 180.0), (200.0, 198.0), (200.0, 216.0), (200.0, 235.0),
    (182.0, 244.0), (191.0, 247.0), (200.0, 249.0), (209.0, 247.0),
    (218.0, 244.0),
    // eyes 36-47
    (135.0, 180.0), (145.0, 176.0), (155.0, 176.0), (165.0, 183.0),
    (155.0, 188.0), (145.0, 188.0), (235.0, 183.0), (245.0, 176.0),
    (255.0, 176.0), (265.0, 180.0), (255.0, 188.0), (245.0, 188.0),
    // mouth 48-67
    (160.0, 290.0), (172.0, 282.0), (186.0, 277.0), (200.0, 276.0),
    (214.0, 277.0), (228.0, 282.0), (240.0, 290.0), (228.0, 300.0),
    (214.0, 306.0), (200.0, 308.0), (186.0, 306.0), (172.0, 300.0),
    (168.0, 290.0), (184.0, 284.0), (200.0, 283.0), (214.0, 284.0),
    (232.0, 290.0), (214.0, 296.0), (200.0, 298.0), (184.0, 296.0),
];

pub fn frontal_face_points() -> Vec<Point2D> {
    FRONTAL_FACE
        .iter()
        .map(|&(x, y)| Point2D::new(x, y))
        .collect()
}

pub fn frontal_face() -> LandmarkSet {
    LandmarkSet::new(frontal_face_points()).expect("fixture is 68 points")
}

/// Same face with a collapsed bizygomatic width (P16.x == P0.x), which
/// must surface as degenerate geometry rather than NaN.
pub fn degenerate_face_points() -> Vec<Point2D> {
    let mut points = frontal_face_points();
    points[16].x = points[0].x;
    points
}

/// JSON payload for `POST /api/analyze`.
pub fn analyze_payload(points: &[Point2D]) -> Value {
    serde_json::json!({
        "landmarks": points
            .iter()
            .map(|p| serde_json::json!({ "x": p.x, "y": p.y }))
            .collect::<Vec<_>>(),
    })
}
