use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;

use super::*;

// =============================================================
// Recording backend
// =============================================================

#[derive(Debug, Clone, PartialEq)]
struct Call {
    kind: GestureKind,
    direction: Option<SwipeDirection>,
    options: OptionsBag,
}

/// Activation that records when it is dropped.
struct Tracked {
    id: usize,
    released: Rc<RefCell<Vec<usize>>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.released.borrow_mut().push(self.id);
    }
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
    callbacks: Vec<GestureCallback<()>>,
    released: Rc<RefCell<Vec<usize>>>,
}

impl Recorder {
    fn record(
        &mut self,
        kind: GestureKind,
        direction: Option<SwipeDirection>,
        callback: GestureCallback<()>,
        options: OptionsBag,
    ) -> Result<Tracked, GestureError> {
        self.calls.push(Call { kind, direction, options });
        self.callbacks.push(callback);
        Ok(Tracked { id: self.calls.len(), released: Rc::clone(&self.released) })
    }
}

impl Recognizers for Recorder {
    type Event = ();
    type Activation = Tracked;

    fn tap(&mut self, callback: GestureCallback<()>, options: OptionsBag) -> Result<Tracked, GestureError> {
        self.record(GestureKind::Tap, None, callback, options)
    }

    fn double_tap(&mut self, callback: GestureCallback<()>, options: OptionsBag) -> Result<Tracked, GestureError> {
        self.record(GestureKind::DoubleTap, None, callback, options)
    }

    fn press(&mut self, callback: GestureCallback<()>, options: OptionsBag) -> Result<Tracked, GestureError> {
        self.record(GestureKind::Press, None, callback, options)
    }

    fn swipe(
        &mut self,
        callback: GestureCallback<()>,
        direction: SwipeDirection,
        options: OptionsBag,
    ) -> Result<Tracked, GestureError> {
        self.record(GestureKind::Swipe, Some(direction), callback, options)
    }

    fn drag(&mut self, callback: GestureCallback<()>, options: OptionsBag) -> Result<Tracked, GestureError> {
        self.record(GestureKind::Drag, None, callback, options)
    }

    fn pinch(&mut self, callback: GestureCallback<()>, options: OptionsBag) -> Result<Tracked, GestureError> {
        self.record(GestureKind::Pinch, None, callback, options)
    }
}

fn bag(value: serde_json::Value) -> OptionsBag {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

fn noop() -> GestureCallback<()> {
    Box::new(|_, _| Response::Continue)
}

fn dispatcher() -> GestureDispatcher<Recorder> {
    GestureDispatcher::new(Recorder::default())
}

// =============================================================
// GestureKind
// =============================================================

#[test]
fn kind_names_round_trip() {
    for kind in GestureKind::ALL {
        assert_eq!(kind.as_str().parse::<GestureKind>().unwrap(), kind);
        assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.as_str()));
    }
}

#[test]
fn double_tap_wire_name_is_doubletap() {
    assert_eq!(GestureKind::DoubleTap.to_string(), "doubletap");
    assert_eq!(serde_json::from_value::<GestureKind>(json!("doubletap")).unwrap(), GestureKind::DoubleTap);
}

#[test]
fn unknown_kind_is_rejected() {
    assert!(matches!("hover".parse::<GestureKind>(), Err(GestureError::UnknownKind(name)) if name == "hover"));
}

#[test]
fn gesture_data_reports_kind() {
    let p = Point::new(1.0, 2.0);
    assert_eq!(GestureData::Tap(p).kind(), GestureKind::Tap);
    assert_eq!(GestureData::DoubleTap(p).kind(), GestureKind::DoubleTap);
    assert_eq!(GestureData::Press(p).point(), p);
}

// =============================================================
// Routing
// =============================================================

#[test]
fn each_kind_routes_to_its_recognizer() {
    for kind in GestureKind::ALL {
        let mut d = dispatcher();
        d.dispatch(kind, noop(), OptionsBag::new()).unwrap();
        assert_eq!(d.recognizers().calls.len(), 1);
        assert_eq!(d.recognizers().calls[0].kind, kind);
        assert_eq!(d.kind(), Some(kind));
        assert!(d.is_active());
    }
}

#[test]
fn non_swipe_options_forward_unchanged() {
    let mut d = dispatcher();
    let options = bag(json!({ "delay": 250, "threshold": 4, "direction": "left" }));
    d.dispatch(GestureKind::DoubleTap, noop(), options.clone()).unwrap();
    let call = &d.recognizers().calls[0];
    assert_eq!(call.options, options);
    assert_eq!(call.direction, None);
}

#[test]
fn swipe_direction_is_split_out_of_options() {
    let mut d = dispatcher();
    d.dispatch(GestureKind::Swipe, noop(), bag(json!({ "direction": "left", "threshold": 50, "velocity": 0.5 })))
        .unwrap();
    let call = &d.recognizers().calls[0];
    assert_eq!(call.direction, Some(SwipeDirection::Left));
    assert_eq!(call.options, bag(json!({ "threshold": 50, "velocity": 0.5 })));
    assert!(!call.options.contains_key(DIRECTION_KEY));
}

#[test]
fn swipe_direction_defaults_to_both() {
    let mut d = dispatcher();
    d.dispatch(GestureKind::Swipe, noop(), bag(json!({ "threshold": 123 }))).unwrap();
    let call = &d.recognizers().calls[0];
    assert_eq!(call.direction, Some(SwipeDirection::Both));
    assert_eq!(call.options, bag(json!({ "threshold": 123 })));
}

#[test]
fn null_swipe_direction_means_default() {
    let mut d = dispatcher();
    d.dispatch(GestureKind::Swipe, noop(), bag(json!({ "direction": null }))).unwrap();
    assert_eq!(d.recognizers().calls[0].direction, Some(SwipeDirection::Both));
}

#[test]
fn unknown_swipe_direction_is_named_in_error() {
    let mut d = dispatcher();
    let err = d.dispatch(GestureKind::Swipe, noop(), bag(json!({ "direction": "diagonal" }))).unwrap_err();
    assert!(matches!(err, GestureError::UnknownDirection(ref name) if name == "diagonal"));
    assert!(d.recognizers().calls.is_empty());
}

#[test]
fn non_string_swipe_direction_is_invalid_options() {
    let mut d = dispatcher();
    let err = d.dispatch(GestureKind::Swipe, noop(), bag(json!({ "direction": ["left"] }))).unwrap_err();
    assert!(matches!(err, GestureError::InvalidOptions(_)));
    assert!(d.recognizers().calls.is_empty());
}

#[test]
fn mistyped_options_never_reach_backend() {
    let mut d = dispatcher();
    let err = d.dispatch(GestureKind::Press, noop(), bag(json!({ "delay": "soon" }))).unwrap_err();
    assert!(matches!(err, GestureError::InvalidOptions(_)));
    assert!(d.recognizers().calls.is_empty());
}

#[test]
fn callback_is_forwarded() {
    let hits = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&hits);
    let mut d = dispatcher();
    d.dispatch(
        GestureKind::Tap,
        Box::new(move |_, data| {
            sink.borrow_mut().push(data);
            Response::PreventDefault
        }),
        OptionsBag::new(),
    )
    .unwrap();

    let response = (d.recognizers.callbacks[0])(&(), GestureData::Tap(Point::new(4.0, 5.0)));
    assert_eq!(response, Response::PreventDefault);
    assert_eq!(*hits.borrow(), vec![GestureData::Tap(Point::new(4.0, 5.0))]);
}

// =============================================================
// Kind invariant
// =============================================================

#[test]
fn changing_kind_fails_with_fixed_message() {
    let mut d = dispatcher();
    d.dispatch(GestureKind::Tap, noop(), OptionsBag::new()).unwrap();
    let err = d.dispatch(GestureKind::Swipe, noop(), OptionsBag::new()).unwrap_err();
    assert!(matches!(err, GestureError::KindChanged { from: GestureKind::Tap, to: GestureKind::Swipe }));
    assert_eq!(err.to_string(), "gesture type cannot change after the first activation");
}

#[test]
fn rejected_change_leaves_active_recognizer_alone() {
    let mut d = dispatcher();
    d.dispatch(GestureKind::Tap, noop(), OptionsBag::new()).unwrap();
    assert!(d.dispatch(GestureKind::Pinch, noop(), OptionsBag::new()).is_err());
    assert!(d.is_active());
    assert_eq!(d.kind(), Some(GestureKind::Tap));
    assert_eq!(d.recognizers().calls.len(), 1);
    assert!(d.recognizers().released.borrow().is_empty());
}

#[test]
fn bad_direction_on_redispatch_keeps_working_recognizer() {
    let mut d = dispatcher();
    d.dispatch(GestureKind::Swipe, noop(), bag(json!({ "direction": "left" }))).unwrap();
    let err = d.dispatch(GestureKind::Swipe, noop(), bag(json!({ "direction": "diagonal" }))).unwrap_err();
    assert!(matches!(err, GestureError::UnknownDirection(_)));
    assert!(d.is_active());
    assert_eq!(d.recognizers().calls.len(), 1);
    assert!(d.recognizers().released.borrow().is_empty());
}

#[test]
fn bad_options_on_redispatch_keep_working_recognizer() {
    let mut d = dispatcher();
    d.dispatch(GestureKind::DoubleTap, noop(), bag(json!({ "delay": 250 }))).unwrap();
    let err = d.dispatch(GestureKind::DoubleTap, noop(), bag(json!({ "delay": "x" }))).unwrap_err();
    assert!(matches!(err, GestureError::InvalidOptions(_)));
    assert!(d.is_active());
    assert_eq!(d.active().map(|t| t.id), Some(1));
    assert!(d.recognizers().released.borrow().is_empty());
}

#[test]
fn same_kind_redispatch_replaces_activation() {
    let mut d = dispatcher();
    d.dispatch(GestureKind::Drag, noop(), OptionsBag::new()).unwrap();
    d.dispatch(GestureKind::Drag, noop(), bag(json!({ "threshold": 3 }))).unwrap();
    assert_eq!(d.recognizers().calls.len(), 2);
    assert_eq!(*d.recognizers().released.borrow(), vec![1]);
    assert!(d.is_active());
}

#[test]
fn kind_survives_teardown() {
    let mut d = dispatcher();
    d.dispatch(GestureKind::Press, noop(), OptionsBag::new()).unwrap();
    d.teardown();
    assert!(!d.is_active());
    assert_eq!(*d.recognizers().released.borrow(), vec![1]);
    assert!(d.dispatch(GestureKind::Tap, noop(), OptionsBag::new()).is_err());
}

#[test]
fn first_dispatch_captures_kind_even_on_error() {
    let mut d = dispatcher();
    assert!(d.dispatch(GestureKind::Swipe, noop(), bag(json!({ "direction": 3 }))).is_err());
    assert_eq!(d.kind(), Some(GestureKind::Swipe));
    assert!(matches!(
        d.dispatch(GestureKind::Tap, noop(), OptionsBag::new()),
        Err(GestureError::KindChanged { .. })
    ));
}

#[test]
fn dropping_dispatcher_releases_activation() {
    let released = {
        let mut d = dispatcher();
        d.dispatch(GestureKind::Tap, noop(), OptionsBag::new()).unwrap();
        Rc::clone(&d.recognizers().released)
    };
    assert_eq!(*released.borrow(), vec![1]);
}

// =============================================================
// take_direction
// =============================================================

#[test]
fn take_direction_removes_key() {
    let mut options = bag(json!({ "direction": "up", "velocity": 1 }));
    assert_eq!(take_direction(&mut options).unwrap(), SwipeDirection::Up);
    assert_eq!(options, bag(json!({ "velocity": 1 })));
}

#[test]
fn take_direction_parses_names_through_from_str() {
    let mut options = bag(json!({ "direction": "sideways" }));
    assert!(matches!(take_direction(&mut options), Err(GestureError::UnknownDirection(name)) if name == "sideways"));
    assert!(options.is_empty());
}

// =============================================================
// validate_options
// =============================================================

#[test]
fn validate_accepts_defaults_for_every_kind() {
    for kind in GestureKind::ALL {
        assert!(validate_options(kind, &OptionsBag::new()).is_ok());
    }
}

#[test]
fn validate_rejects_wrong_types() {
    let options = bag(json!({ "threshold": "far" }));
    for kind in [GestureKind::Tap, GestureKind::Swipe, GestureKind::Drag] {
        assert!(matches!(validate_options(kind, &options), Err(GestureError::InvalidOptions(_))));
    }
    assert!(matches!(
        validate_options(GestureKind::Pinch, &bag(json!({ "eventOnce": "yes" }))),
        Err(GestureError::InvalidOptions(_))
    ));
}
