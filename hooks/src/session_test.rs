#![allow(clippy::float_cmp)]

use std::cell::Cell;
use std::rc::Weak;

use gestures::double_tap::DoubleTapRecognizer;
use gestures::drag::{DragData, DragRecognizer};
use gestures::options::{DoubleTapOptions, DragOptions, ListenerOptions, PressOptions, TapOptions};
use gestures::press::PressRecognizer;
use gestures::recognizer::GesturePhase;
use gestures::tap::TapRecognizer;
use gestures::{Point, PointerType};

use super::*;

/// Stand-in for a DOM pointer event that records the invoker's side effects.
#[derive(Debug, Clone, Default)]
struct FakeEvent {
    id: u32,
    stopped: Rc<Cell<bool>>,
    prevented: Rc<Cell<bool>>,
}

impl FakeEvent {
    fn numbered(id: u32) -> Self {
        Self { id, ..Self::default() }
    }
}

impl EventControl for FakeEvent {
    fn stop_immediate_propagation(&self) {
        self.stopped.set(true);
    }

    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}

fn input(t: f64, x: f64, y: f64) -> PointerInput {
    PointerInput { pointer_id: 1, pointer_type: Some(PointerType::Touch), is_primary: true, point: Point::new(x, y), time_ms: t }
}

fn once() -> ListenerOptions {
    ListenerOptions { once: true, ..ListenerOptions::default() }
}

/// Callback that records every activation it sees.
fn recorder<D: Clone + 'static>() -> (Rc<RefCell<Vec<D>>>, impl FnMut(&FakeEvent, D) -> Response + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |_: &FakeEvent, data: D| {
        sink.borrow_mut().push(data);
        Response::Continue
    })
}

// =============================================================
// eventOnce
// =============================================================

#[test]
fn once_cancels_after_double_tap() {
    let token = CancelToken::new();
    let (seen, callback) = recorder::<Point>();
    let options = DoubleTapOptions { listener: once(), ..DoubleTapOptions::default() };
    let session = Session::start(DoubleTapRecognizer::new(options), callback, token.clone());
    let event = FakeEvent::default();

    session.on_input(PointerPhase::Up, &input(0.0, 10.0, 10.0), &event);
    assert!(!token.is_cancelled());
    session.on_input(PointerPhase::Up, &input(120.0, 12.0, 10.0), &event);
    assert!(token.is_cancelled());

    session.on_input(PointerPhase::Up, &input(200.0, 12.0, 10.0), &event);
    session.on_input(PointerPhase::Up, &input(250.0, 12.0, 10.0), &event);
    assert_eq!(*seen.borrow(), vec![Point::new(12.0, 10.0)]);
}

#[test]
fn without_once_session_stays_live() {
    let token = CancelToken::new();
    let (seen, callback) = recorder::<Point>();
    let session = Session::start(DoubleTapRecognizer::new(DoubleTapOptions::default()), callback, token.clone());
    let event = FakeEvent::default();

    for t in [0.0, 100.0, 1000.0, 1100.0] {
        session.on_input(PointerPhase::Up, &input(t, 0.0, 0.0), &event);
    }
    assert_eq!(seen.borrow().len(), 2);
    assert!(!token.is_cancelled());
}

#[test]
fn drag_with_once_cancels_only_on_end() {
    let token = CancelToken::new();
    let (seen, callback) = recorder::<DragData>();
    let options = DragOptions { listener: once(), threshold_px: 5.0 };
    let session = Session::start(DragRecognizer::new(options), callback, token.clone());
    let event = FakeEvent::default();

    session.on_input(PointerPhase::Down, &input(0.0, 0.0, 0.0), &event);
    session.on_input(PointerPhase::Move, &input(10.0, 20.0, 0.0), &event);
    assert!(!token.is_cancelled());
    session.on_input(PointerPhase::Move, &input(20.0, 30.0, 0.0), &event);
    assert!(!token.is_cancelled());
    session.on_input(PointerPhase::Up, &input(30.0, 40.0, 0.0), &event);
    assert!(token.is_cancelled());

    let phases: Vec<GesturePhase> = seen.borrow().iter().map(|d| d.phase).collect();
    assert_eq!(phases, vec![GesturePhase::Start, GesturePhase::Move, GesturePhase::End]);
}

// =============================================================
// Cancellation
// =============================================================

#[test]
fn cancel_resets_pending_double_tap_sample() {
    let token = CancelToken::new();
    let (_, callback) = recorder::<Point>();
    let session = Session::start(DoubleTapRecognizer::new(DoubleTapOptions::default()), callback, token.clone());

    session.on_input(PointerPhase::Up, &input(0.0, 10.0, 10.0), &FakeEvent::default());
    assert!(session.recognizer().pending().is_some());
    token.cancel();
    assert!(session.recognizer().pending().is_none());
}

#[test]
fn cancelled_session_ignores_events() {
    let token = CancelToken::new();
    let (seen, callback) = recorder::<Point>();
    let session = Session::start(PressRecognizer::new(PressOptions::default()), callback, token.clone());
    token.cancel();

    assert_eq!(session.on_input(PointerPhase::Down, &input(0.0, 0.0, 0.0), &FakeEvent::default()), None);
    session.on_timer(600.0);
    assert!(!session.recognizer().is_holding());
    assert!(seen.borrow().is_empty());
}

// =============================================================
// Press timer
// =============================================================

#[test]
fn press_down_arms_timer_with_its_event() {
    let token = CancelToken::new();
    let (_, callback) = recorder::<Point>();
    let session = Session::start(PressRecognizer::new(PressOptions::default()), callback, token);

    let timer = session.on_input(PointerPhase::Down, &input(0.0, 5.0, 5.0), &FakeEvent::numbered(1));
    assert_eq!(timer, Some(TimerCommand::Start { delay_ms: PressOptions::default().delay_ms }));
    assert!(session.is_armed());
}

#[test]
fn press_release_clears_timer() {
    let token = CancelToken::new();
    let (seen, callback) = recorder::<Point>();
    let session = Session::start(PressRecognizer::new(PressOptions::default()), callback, token);

    session.on_input(PointerPhase::Down, &input(0.0, 5.0, 5.0), &FakeEvent::default());
    let timer = session.on_input(PointerPhase::Up, &input(100.0, 5.0, 5.0), &FakeEvent::default());
    assert_eq!(timer, Some(TimerCommand::Clear));
    assert!(!session.is_armed());

    session.on_timer(500.0);
    assert!(seen.borrow().is_empty());
}

#[test]
fn press_timer_fires_with_arming_event() {
    let token = CancelToken::new();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let callback = move |event: &FakeEvent, at: Point| {
        sink.borrow_mut().push((event.id, at));
        Response::PreventDefault
    };
    let session = Session::start(PressRecognizer::new(PressOptions::default()), callback, token.clone());
    let arming = FakeEvent::numbered(7);

    session.on_input(PointerPhase::Down, &input(0.0, 5.0, 6.0), &arming);
    session.on_timer(500.0);

    assert_eq!(*events.borrow(), vec![(7, Point::new(5.0, 6.0))]);
    assert!(arming.prevented.get());
    assert!(!session.is_armed());
    assert!(!token.is_cancelled());
}

#[test]
fn press_with_once_cancels_when_timer_fires() {
    let token = CancelToken::new();
    let (seen, callback) = recorder::<Point>();
    let options = PressOptions { listener: once(), ..PressOptions::default() };
    let session = Session::start(PressRecognizer::new(options), callback, token.clone());

    session.on_input(PointerPhase::Down, &input(0.0, 1.0, 1.0), &FakeEvent::default());
    session.on_timer(500.0);
    assert!(token.is_cancelled());
    assert_eq!(seen.borrow().len(), 1);

    assert_eq!(session.on_input(PointerPhase::Down, &input(900.0, 1.0, 1.0), &FakeEvent::default()), None);
}

// =============================================================
// Invoker wiring
// =============================================================

#[test]
fn stop_immediate_applies_before_callback() {
    let token = CancelToken::new();
    let event = FakeEvent::default();
    let stopped_at_callback = Rc::new(Cell::new(false));
    let probe = Rc::clone(&stopped_at_callback);
    let callback = move |ev: &FakeEvent, _: Point| {
        probe.set(ev.stopped.get());
        Response::Continue
    };
    let options = TapOptions {
        listener: ListenerOptions { stop_immediate: true, ..ListenerOptions::default() },
        ..TapOptions::default()
    };
    let session = Session::start(TapRecognizer::new(options), callback, token);

    session.on_input(PointerPhase::Down, &input(0.0, 0.0, 0.0), &event);
    session.on_input(PointerPhase::Up, &input(50.0, 0.0, 0.0), &event);
    assert!(stopped_at_callback.get());
    assert!(!event.prevented.get());
}

type TapCallback = Box<dyn FnMut(&FakeEvent, Point) -> Response>;
type TapSession = Session<TapRecognizer, TapCallback, FakeEvent>;

#[test]
fn reentrant_activation_is_skipped() {
    let token = CancelToken::new();
    let slot: Rc<RefCell<Weak<TapSession>>> = Rc::new(RefCell::new(Weak::new()));
    let calls = Rc::new(Cell::new(0));

    let inner_slot = Rc::clone(&slot);
    let inner_calls = Rc::clone(&calls);
    let callback: TapCallback = Box::new(move |event, _| {
        inner_calls.set(inner_calls.get() + 1);
        // Synchronously replay a full tap on the same session.
        if let Some(session) = inner_slot.borrow().upgrade() {
            session.on_input(PointerPhase::Down, &input(60.0, 0.0, 0.0), event);
            session.on_input(PointerPhase::Up, &input(70.0, 0.0, 0.0), event);
        }
        Response::Continue
    });
    let session = Session::start(TapRecognizer::new(TapOptions::default()), callback, token);
    *slot.borrow_mut() = Rc::downgrade(&session);

    let event = FakeEvent::default();
    session.on_input(PointerPhase::Down, &input(0.0, 0.0, 0.0), &event);
    session.on_input(PointerPhase::Up, &input(50.0, 0.0, 0.0), &event);
    assert_eq!(calls.get(), 1);

    // The session still works once the outer callback has returned.
    session.on_input(PointerPhase::Down, &input(100.0, 0.0, 0.0), &event);
    session.on_input(PointerPhase::Up, &input(150.0, 0.0, 0.0), &event);
    assert_eq!(calls.get(), 2);
}
