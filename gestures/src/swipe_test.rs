#![allow(clippy::float_cmp)]

use super::*;
use crate::pointer::PointerType;

fn input(id: i32, t: f64, x: f64, y: f64) -> PointerInput {
    PointerInput {
        pointer_id: id,
        pointer_type: Some(PointerType::Touch),
        is_primary: true,
        point: Point::new(x, y),
        time_ms: t,
    }
}

fn stroke(rec: &mut SwipeRecognizer, from: (f64, f64), to: (f64, f64), ms: f64) -> Option<SwipeData> {
    rec.handle(PointerPhase::Down, &input(1, 0.0, from.0, from.1));
    rec.handle(PointerPhase::Up, &input(1, ms, to.0, to.1))
}

// =============================================================
// SwipeDirection / SwipeMotion
// =============================================================

#[test]
fn direction_defaults_to_both() {
    assert_eq!(SwipeDirection::default(), SwipeDirection::Both);
}

#[test]
fn direction_parses_names() {
    assert_eq!("left".parse::<SwipeDirection>().unwrap(), SwipeDirection::Left);
    assert_eq!("vertical".parse::<SwipeDirection>().unwrap(), SwipeDirection::Vertical);
    assert!(matches!("sideways".parse::<SwipeDirection>(), Err(GestureError::UnknownDirection(_))));
}

#[test]
fn direction_display_matches_serde() {
    for d in [SwipeDirection::Both, SwipeDirection::Horizontal, SwipeDirection::Down] {
        assert_eq!(serde_json::to_value(d).unwrap(), serde_json::Value::String(d.to_string()));
    }
}

#[test]
fn direction_filters() {
    assert!(SwipeDirection::Both.accepts(SwipeMotion::Up));
    assert!(SwipeDirection::Horizontal.accepts(SwipeMotion::Left));
    assert!(!SwipeDirection::Horizontal.accepts(SwipeMotion::Down));
    assert!(SwipeDirection::Vertical.accepts(SwipeMotion::Down));
    assert!(SwipeDirection::Left.accepts(SwipeMotion::Left));
    assert!(!SwipeDirection::Left.accepts(SwipeMotion::Right));
}

#[test]
fn motion_uses_dominant_axis() {
    assert_eq!(SwipeMotion::from_delta(10.0, 3.0), Some(SwipeMotion::Right));
    assert_eq!(SwipeMotion::from_delta(-10.0, 3.0), Some(SwipeMotion::Left));
    assert_eq!(SwipeMotion::from_delta(1.0, -30.0), Some(SwipeMotion::Up));
    assert_eq!(SwipeMotion::from_delta(1.0, 30.0), Some(SwipeMotion::Down));
    assert_eq!(SwipeMotion::from_delta(5.0, 5.0), Some(SwipeMotion::Right));
    assert_eq!(SwipeMotion::from_delta(0.0, 0.0), None);
}

#[test]
fn motion_names_match_serde() {
    for motion in [SwipeMotion::Left, SwipeMotion::Right, SwipeMotion::Up, SwipeMotion::Down] {
        assert_eq!(serde_json::to_value(motion).unwrap(), serde_json::json!(motion.as_str()));
    }
}

// =============================================================
// Recognition
// =============================================================

#[test]
fn fast_long_stroke_swipes() {
    let mut rec = SwipeRecognizer::new(SwipeDirection::Both, SwipeOptions::default());
    let data = stroke(&mut rec, (0.0, 0.0), (-100.0, 10.0), 100.0).unwrap();
    assert_eq!(data.motion, SwipeMotion::Left);
    assert_eq!(data.dx, -100.0);
    assert_eq!(data.dy, 10.0);
    assert_eq!(data.point, Point::new(-100.0, 10.0));
    assert!(data.velocity > 1.0);
}

#[test]
fn short_stroke_is_rejected() {
    let mut rec = SwipeRecognizer::new(SwipeDirection::Both, SwipeOptions::default());
    assert!(stroke(&mut rec, (0.0, 0.0), (40.0, 0.0), 10.0).is_none());
}

#[test]
fn slow_stroke_is_rejected() {
    let mut rec = SwipeRecognizer::new(SwipeDirection::Both, SwipeOptions::default());
    assert!(stroke(&mut rec, (0.0, 0.0), (100.0, 0.0), 1000.0).is_none());
}

#[test]
fn filtered_direction_is_rejected() {
    let mut rec = SwipeRecognizer::new(SwipeDirection::Left, SwipeOptions::default());
    assert!(stroke(&mut rec, (0.0, 0.0), (100.0, 0.0), 50.0).is_none());
    assert!(stroke(&mut rec, (0.0, 0.0), (-100.0, 0.0), 50.0).is_some());
}

#[test]
fn zero_duration_stroke_does_not_divide_by_zero() {
    let mut rec = SwipeRecognizer::new(SwipeDirection::Both, SwipeOptions::default());
    let data = stroke(&mut rec, (0.0, 0.0), (0.0, 80.0), 0.0).unwrap();
    assert_eq!(data.velocity, 80.0);
    assert_eq!(data.motion, SwipeMotion::Down);
}

#[test]
fn custom_thresholds_apply() {
    let options = SwipeOptions { threshold_px: 10.0, velocity: 0.01, ..SwipeOptions::default() };
    let mut rec = SwipeRecognizer::new(SwipeDirection::Both, options);
    assert!(stroke(&mut rec, (0.0, 0.0), (0.0, -12.0), 500.0).is_some());
}

#[test]
fn cancel_drops_stroke() {
    let mut rec = SwipeRecognizer::new(SwipeDirection::Both, SwipeOptions::default());
    rec.handle(PointerPhase::Down, &input(1, 0.0, 0.0, 0.0));
    rec.handle(PointerPhase::Cancel, &input(1, 10.0, 0.0, 0.0));
    assert!(rec.handle(PointerPhase::Up, &input(1, 50.0, 200.0, 0.0)).is_none());
}

#[test]
fn up_from_other_pointer_is_ignored() {
    let mut rec = SwipeRecognizer::new(SwipeDirection::Both, SwipeOptions::default());
    rec.handle(PointerPhase::Down, &input(1, 0.0, 0.0, 0.0));
    assert!(rec.handle(PointerPhase::Up, &input(7, 50.0, 200.0, 0.0)).is_none());
}
