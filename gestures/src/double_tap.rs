//! Double-tap recognizer.
//!
//! Converts a stream of pointer-up events into double-tap activations. The
//! recognizer is a two-state machine:
//!
//! - `Idle`: nothing pending. A qualifying tap is recorded and the machine
//!   arms; nothing fires.
//! - `Armed`: one tap pending. The next qualifying tap either confirms the
//!   double-tap (within `delay` and `threshold`, both inclusive), firing with
//!   the second tap's position and returning to `Idle`, or replaces the
//!   pending tap and stays armed.
//!
//! There is no expiry timer: staleness is decided by comparing timestamps
//! when the next tap arrives. Consequently a triple-tap yields one
//! activation, and a slow first tap is discarded without ever firing.

#[cfg(test)]
#[path = "double_tap_test.rs"]
mod double_tap_test;

use crate::guard::should_handle;
use crate::options::{DoubleTapOptions, ListenerOptions};
use crate::pointer::{Point, PointerInput, PointerPhase};
use crate::recognizer::Recognizer;

/// A tap waiting for its confirming partner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Wall-clock time of the tap in milliseconds.
    pub time_ms: f64,
    /// Client-space position of the tap.
    pub point: Point,
}

impl PointerSample {
    #[must_use]
    pub fn of(input: &PointerInput) -> Self {
        Self { time_ms: input.time_ms, point: input.point }
    }
}

/// Observable state of a [`DoubleTapRecognizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoubleTapState {
    Idle,
    Armed,
}

#[derive(Debug, Clone)]
pub struct DoubleTapRecognizer {
    options: DoubleTapOptions,
    pending: Option<PointerSample>,
}

impl DoubleTapRecognizer {
    #[must_use]
    pub fn new(options: DoubleTapOptions) -> Self {
        Self { options, pending: None }
    }

    #[must_use]
    pub fn options(&self) -> &DoubleTapOptions {
        &self.options
    }

    #[must_use]
    pub fn state(&self) -> DoubleTapState {
        if self.pending.is_some() { DoubleTapState::Armed } else { DoubleTapState::Idle }
    }

    /// The tap currently waiting for a partner, if any.
    #[must_use]
    pub fn pending(&self) -> Option<PointerSample> {
        self.pending
    }

    /// Feed one pointer-up event. Returns the second tap's position on a
    /// confirmed double-tap.
    ///
    /// The pending sample is cleared before the activation is returned, so
    /// whatever the callback does the machine is already back to `Idle`.
    pub fn on_pointer_up(&mut self, input: &PointerInput) -> Option<Point> {
        if !should_handle(input, self.options.listener.pointer_types) {
            return None;
        }

        let sample = PointerSample::of(input);
        let Some(pending) = self.pending.take() else {
            self.pending = Some(sample);
            return None;
        };

        let elapsed_ms = (sample.time_ms - pending.time_ms).floor();
        let distance = sample.point.distance(pending.point);
        if elapsed_ms <= self.options.delay_ms && distance <= self.options.threshold_px {
            log::debug!("double tap at ({}, {}) after {elapsed_ms}ms", sample.point.x, sample.point.y);
            return Some(sample.point);
        }

        log::trace!("double tap re-armed: {elapsed_ms}ms, {distance:.1}px");
        self.pending = Some(sample);
        None
    }
}

impl Recognizer for DoubleTapRecognizer {
    type Output = Point;

    fn phases(&self) -> &'static [PointerPhase] {
        &[PointerPhase::Up]
    }

    fn listener(&self) -> &ListenerOptions {
        &self.options.listener
    }

    fn handle(&mut self, phase: PointerPhase, input: &PointerInput) -> Option<Point> {
        match phase {
            PointerPhase::Up => self.on_pointer_up(input),
            PointerPhase::Down | PointerPhase::Move | PointerPhase::Cancel => None,
        }
    }

    fn reset(&mut self) {
        self.pending = None;
    }
}
