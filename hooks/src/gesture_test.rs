#![cfg(not(feature = "web"))]

use serde_json::json;

use super::*;

fn bag(value: serde_json::Value) -> OptionsBag {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

fn with_owner(test: impl FnOnce()) {
    let owner = Owner::new();
    owner.with(test);
}

#[test]
fn first_dispatch_fixes_kind() {
    with_owner(|| {
        let handle = use_gesture(GestureTarget::window());
        assert_eq!(handle.kind(), None);
        handle.dispatch(GestureKind::DoubleTap, |_, _| (), OptionsBag::new()).unwrap();
        assert_eq!(handle.kind(), Some(GestureKind::DoubleTap));
    });
}

#[test]
fn inert_activation_reports_inactive() {
    with_owner(|| {
        let handle = use_gesture(GestureTarget::window());
        assert!(!handle.is_active());
        handle.dispatch(GestureKind::Tap, |_, _| (), OptionsBag::new()).unwrap();
        // Without the `web` feature nothing is attached, so nothing listens.
        assert!(!handle.is_active());
    });
}

#[test]
fn kind_change_is_rejected() {
    with_owner(|| {
        let handle = use_gesture(GestureTarget::window());
        handle.dispatch(GestureKind::Tap, |_, _| (), OptionsBag::new()).unwrap();
        let err = handle.dispatch(GestureKind::Swipe, |_, _| (), OptionsBag::new()).unwrap_err();
        assert_eq!(err.to_string(), "gesture type cannot change after the first activation");
        assert_eq!(handle.kind(), Some(GestureKind::Tap));
    });
}

#[test]
fn same_kind_redispatch_is_allowed() {
    with_owner(|| {
        let handle = use_gesture(GestureTarget::window());
        handle.dispatch(GestureKind::Swipe, |_, _| true, bag(json!({ "direction": "left" }))).unwrap();
        handle
            .dispatch(GestureKind::Swipe, |_, _| Response::Continue, bag(json!({ "direction": "up", "velocity": 1.5 })))
            .unwrap();
        assert_eq!(handle.kind(), Some(GestureKind::Swipe));
    });
}

#[test]
fn invalid_options_are_reported() {
    with_owner(|| {
        let handle = use_gesture(GestureTarget::window());
        let err = handle.dispatch(GestureKind::Press, |_, _| (), bag(json!({ "delay": "soon" }))).unwrap_err();
        assert!(matches!(err, GestureError::InvalidOptions(_)));
        let err = handle.dispatch(GestureKind::Press, |_, _| (), bag(json!({ "eventOnce": 1 }))).unwrap_err();
        assert!(matches!(err, GestureError::InvalidOptions(_)));
    });
}

#[test]
fn unknown_swipe_direction_is_reported() {
    with_owner(|| {
        let handle = use_gesture(GestureTarget::window());
        let err = handle.dispatch(GestureKind::Swipe, |_, _| (), bag(json!({ "direction": "sideways" }))).unwrap_err();
        assert!(matches!(err, GestureError::UnknownDirection(ref name) if name == "sideways"));
    });
}

#[test]
fn disposed_handle_reports_disposed() {
    let owner = Owner::new();
    let handle = owner.with(|| use_gesture(GestureTarget::window()));
    owner.cleanup();
    assert!(matches!(handle.dispatch(GestureKind::Tap, |_, _| (), OptionsBag::new()), Err(GestureError::Disposed)));
    assert!(!handle.is_active());
}

#[test]
fn teardown_keeps_kind() {
    with_owner(|| {
        let handle = use_gesture(GestureTarget::window());
        handle.dispatch(GestureKind::Pinch, |_, _| (), OptionsBag::new()).unwrap();
        handle.teardown();
        assert!(!handle.is_active());
        assert_eq!(handle.kind(), Some(GestureKind::Pinch));
        assert!(handle.dispatch(GestureKind::Drag, |_, _| (), OptionsBag::new()).is_err());
    });
}
