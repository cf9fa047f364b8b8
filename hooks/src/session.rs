//! Listener state for one attached recognizer.
//!
//! Every phase listener of an activation feeds the same [`Session`]: it runs
//! the recognizer, remembers which event armed a pending timer, and hands
//! activations to the invoker. The session never touches the DOM or a clock;
//! the browser host converts events to [`PointerInput`] and owns the timer.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use gestures::invoke::invoke;
use gestures::{CancelToken, EventControl, InvokeOptions, PointerInput, PointerPhase, Recognizer, Response, TimerCommand};

pub(crate) struct Session<R, F, E> {
    recognizer: RefCell<R>,
    callback: RefCell<F>,
    token: CancelToken,
    invoke: InvokeOptions,
    /// Event that armed the pending timer; handed to the callback when it fires.
    armed_by: RefCell<Option<E>>,
}

impl<R, F, E> Session<R, F, E>
where
    R: Recognizer + 'static,
    F: FnMut(&E, R::Output) -> Response + 'static,
    E: EventControl + Clone + 'static,
{
    /// Start a session bound to `token`. Cancelling the token resets the
    /// recognizer and forgets the armed event.
    pub(crate) fn start(recognizer: R, callback: F, token: CancelToken) -> Rc<Self> {
        let invoke = recognizer.listener().invoke_options();
        let session = Rc::new(Self {
            recognizer: RefCell::new(recognizer),
            callback: RefCell::new(callback),
            token,
            invoke,
            armed_by: RefCell::new(None),
        });
        let weak = Rc::downgrade(&session);
        session.token.on_cancel(move || {
            if let Some(session) = weak.upgrade() {
                session.reset();
            }
        });
        session
    }

    /// Feed one pointer event through the recognizer.
    ///
    /// Returns the timer request the host must apply. Nothing is returned
    /// once the session is cancelled, including when this very event
    /// completed an `eventOnce` activation.
    pub(crate) fn on_input(&self, phase: PointerPhase, input: &PointerInput, event: &E) -> Option<TimerCommand> {
        if self.token.is_cancelled() {
            return None;
        }
        let (output, timer) = {
            let mut recognizer = self.recognizer.borrow_mut();
            let output = recognizer.handle(phase, input);
            (output, recognizer.take_timer())
        };
        match timer {
            Some(TimerCommand::Start { .. }) => *self.armed_by.borrow_mut() = Some(event.clone()),
            Some(TimerCommand::Clear) => {
                self.armed_by.borrow_mut().take();
            }
            None => {}
        }
        if let Some(output) = output {
            self.fire(event, output);
        }
        timer.filter(|_| !self.token.is_cancelled())
    }

    /// The host's timer expired at `now_ms`.
    pub(crate) fn on_timer(&self, now_ms: f64) {
        if self.token.is_cancelled() {
            return;
        }
        let output = self.recognizer.borrow_mut().on_timer(now_ms);
        let event = self.armed_by.borrow_mut().take();
        if let (Some(output), Some(event)) = (output, event) {
            self.fire(&event, output);
        }
    }

    fn fire(&self, event: &E, output: R::Output) {
        let options = InvokeOptions { once: self.invoke.once && R::completes(&output), ..self.invoke };
        // A callback that synchronously re-dispatches a pointer event on its
        // own target lands back here while the outer call is still running.
        let Ok(mut callback) = self.callback.try_borrow_mut() else {
            log::warn!("gesture callback re-entered from its own event; nested activation skipped");
            return;
        };
        invoke(event, output, |ev, data| (*callback)(ev, data), options, || self.token.cancel());
    }

    fn reset(&self) {
        self.armed_by.borrow_mut().take();
        self.recognizer.borrow_mut().reset();
    }

    #[cfg(test)]
    fn recognizer(&self) -> std::cell::Ref<'_, R> {
        self.recognizer.borrow()
    }

    #[cfg(test)]
    fn is_armed(&self) -> bool {
        self.armed_by.borrow().is_some()
    }
}
