//! DOM listener wiring for a single recognizer.
//!
//! One closure is registered per pointer phase the recognizer asks for. All
//! of them feed the same [`Session`] and share the press timer; the
//! activation's token detaches them.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gestures::{PointerInput, PointerPhase, Recognizer, Response, TimerCommand};
use gloo_timers::callback::Timeout;
use js_sys::Date;
use leptos::logging::warn;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{EventTarget, PointerEvent};

use crate::activation::Activation;
use crate::session::Session;

/// A [`Session`] plus the browser timer it asked for.
struct Host<R, F> {
    session: Rc<Session<R, F, PointerEvent>>,
    timer: RefCell<Option<Timeout>>,
}

impl<R, F> Host<R, F>
where
    R: Recognizer + 'static,
    F: FnMut(&PointerEvent, R::Output) -> Response + 'static,
{
    fn on_event(self: &Rc<Self>, phase: PointerPhase, event: &PointerEvent) {
        let input = PointerInput::from_event(event, Date::now());
        match self.session.on_input(phase, &input, event) {
            Some(TimerCommand::Start { delay_ms }) => {
                let weak: Weak<Self> = Rc::downgrade(self);
                let timeout = Timeout::new(timer_millis(delay_ms), move || {
                    if let Some(host) = weak.upgrade() {
                        host.on_timeout();
                    }
                });
                // Replacing the slot drops (and clears) any older timer.
                *self.timer.borrow_mut() = Some(timeout);
            }
            Some(TimerCommand::Clear) => self.clear_timer(),
            None => {}
        }
    }

    fn on_timeout(&self) {
        // Dropping the timer from inside its own callback is fine: the
        // closure is freed once the call returns.
        self.clear_timer();
        self.session.on_timer(Date::now());
    }

    fn clear_timer(&self) {
        self.timer.borrow_mut().take();
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn timer_millis(delay_ms: f64) -> u32 {
    delay_ms.clamp(0.0, f64::from(u32::MAX)) as u32
}

/// Register `recognizer` on `target`, reporting activations to `callback`.
///
/// Listeners are detached and the recognizer reset when `activation` is
/// cancelled. Registration failures are logged and skipped.
pub(crate) fn attach<R, F>(target: &EventTarget, recognizer: R, callback: F, activation: &mut Activation)
where
    R: Recognizer + 'static,
    F: FnMut(&PointerEvent, R::Output) -> Response + 'static,
{
    let token = activation.token().clone();
    if token.is_cancelled() {
        return;
    }
    let capture = recognizer.listener().capture;
    let phases = recognizer.phases();
    let host = Rc::new(Host {
        session: Session::start(recognizer, callback, token.clone()),
        timer: RefCell::new(None),
    });

    {
        let weak = Rc::downgrade(&host);
        token.on_cancel(move || {
            if let Some(host) = weak.upgrade() {
                host.clear_timer();
            }
        });
    }

    for &phase in phases {
        let name = phase.event_name();
        let host_for_cb = Rc::clone(&host);
        let closure = Closure::wrap(Box::new(move |event: PointerEvent| {
            host_for_cb.on_event(phase, &event);
        }) as Box<dyn FnMut(PointerEvent)>);
        let function: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();

        if let Err(err) = target.add_event_listener_with_callback_and_bool(name, &function, capture) {
            warn!("gesture listener for {name} could not be attached: {err:?}");
            continue;
        }

        let target = target.clone();
        token.on_cancel(move || {
            if let Err(err) = target.remove_event_listener_with_callback_and_bool(name, &function, capture) {
                warn!("gesture listener for {name} could not be detached: {err:?}");
            }
        });
        activation.keep(closure);
    }
    log::debug!("gesture listeners attached: {phases:?}");
}
