//! The interface shared by all six recognizers.

use crate::options::ListenerOptions;
use crate::pointer::{PointerInput, PointerPhase};

/// Timer request from a recognizer that needs wall-clock expiry (press).
///
/// Recognizers never own timers; the host reads the request with
/// [`Recognizer::take_timer`] after each event and schedules accordingly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerCommand {
    /// (Re)start the timer; it should call [`Recognizer::on_timer`] after `delay_ms`.
    Start { delay_ms: f64 },
    /// Drop any pending timer.
    Clear,
}

/// Lifecycle phase reported by continuous gestures (drag, pinch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    Start,
    Move,
    End,
}

/// A stateful pointer-event recognizer.
///
/// The host attaches one listener per entry in [`phases`](Recognizer::phases),
/// feeds every event through [`handle`](Recognizer::handle), and passes each
/// returned output to the action invoker.
pub trait Recognizer {
    /// Data reported to the user callback on activation.
    type Output;

    /// DOM pointer phases this recognizer needs listeners for.
    fn phases(&self) -> &'static [PointerPhase];

    /// Listener options (pointer types, capture, once, stop-immediate).
    fn listener(&self) -> &ListenerOptions;

    /// Process one event. Returns `Some` when the gesture activates.
    fn handle(&mut self, phase: PointerPhase, input: &PointerInput) -> Option<Self::Output>;

    /// Pending timer request, if the last event produced one.
    fn take_timer(&mut self) -> Option<TimerCommand> {
        None
    }

    /// Called by the host when a timer started via [`TimerCommand::Start`] expires.
    fn on_timer(&mut self, _now_ms: f64) -> Option<Self::Output> {
        None
    }

    /// Whether `output` finishes the gesture, for one-shot (`eventOnce`) teardown.
    ///
    /// Discrete gestures finish on every activation; continuous ones only on
    /// their `End` phase.
    fn completes(_output: &Self::Output) -> bool
    where
        Self: Sized,
    {
        true
    }

    /// Drop all in-flight state. Called on teardown.
    fn reset(&mut self);
}
