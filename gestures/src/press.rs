//! Press (long-press) recognizer.
//!
//! A press arms on pointer-down and fires when the host's timer expires,
//! unless the pointer travels past `threshold`, lifts, or is cancelled first.
//! The recognizer only requests timers through [`TimerCommand`]; it never
//! schedules anything itself.

#[cfg(test)]
#[path = "press_test.rs"]
mod press_test;

use crate::guard::should_handle;
use crate::options::{ListenerOptions, PressOptions};
use crate::pointer::{Point, PointerInput, PointerPhase};
use crate::recognizer::{Recognizer, TimerCommand};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Holding {
    pointer_id: i32,
    origin: Point,
}

#[derive(Debug, Clone)]
pub struct PressRecognizer {
    options: PressOptions,
    holding: Option<Holding>,
    timer: Option<TimerCommand>,
}

impl PressRecognizer {
    #[must_use]
    pub fn new(options: PressOptions) -> Self {
        Self { options, holding: None, timer: None }
    }

    /// Whether a press is armed and waiting for its timer.
    #[must_use]
    pub fn is_holding(&self) -> bool {
        self.holding.is_some()
    }

    fn abandon(&mut self) {
        if self.holding.take().is_some() {
            self.timer = Some(TimerCommand::Clear);
        }
    }

    fn holds(&self, input: &PointerInput) -> bool {
        self.holding.is_some_and(|h| h.pointer_id == input.pointer_id)
    }
}

impl Recognizer for PressRecognizer {
    type Output = Point;

    fn phases(&self) -> &'static [PointerPhase] {
        &[PointerPhase::Down, PointerPhase::Move, PointerPhase::Up, PointerPhase::Cancel]
    }

    fn listener(&self) -> &ListenerOptions {
        &self.options.listener
    }

    fn handle(&mut self, phase: PointerPhase, input: &PointerInput) -> Option<Point> {
        match phase {
            PointerPhase::Down => {
                if should_handle(input, self.options.listener.pointer_types) {
                    self.holding = Some(Holding { pointer_id: input.pointer_id, origin: input.point });
                    self.timer = Some(TimerCommand::Start { delay_ms: self.options.delay_ms });
                }
            }
            PointerPhase::Move => {
                let strayed = self
                    .holding
                    .is_some_and(|h| h.pointer_id == input.pointer_id && input.point.distance(h.origin) > self.options.threshold_px);
                if strayed {
                    self.abandon();
                }
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                if self.holds(input) {
                    self.abandon();
                }
            }
        }
        None
    }

    fn take_timer(&mut self) -> Option<TimerCommand> {
        self.timer.take()
    }

    fn on_timer(&mut self, _now_ms: f64) -> Option<Point> {
        let holding = self.holding.take()?;
        log::debug!("press at ({}, {})", holding.origin.x, holding.origin.y);
        Some(holding.origin)
    }

    fn reset(&mut self) {
        self.holding = None;
        self.timer = None;
    }
}
