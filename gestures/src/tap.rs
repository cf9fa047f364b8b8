//! Tap recognizer: a short contact that does not travel.

#[cfg(test)]
#[path = "tap_test.rs"]
mod tap_test;

use crate::double_tap::PointerSample;
use crate::guard::should_handle;
use crate::options::{ListenerOptions, TapOptions};
use crate::pointer::{Point, PointerInput, PointerPhase};
use crate::recognizer::Recognizer;

#[derive(Debug, Clone)]
pub struct TapRecognizer {
    options: TapOptions,
    down: Option<(i32, PointerSample)>,
}

impl TapRecognizer {
    #[must_use]
    pub fn new(options: TapOptions) -> Self {
        Self { options, down: None }
    }

    fn on_up(&mut self, input: &PointerInput) -> Option<Point> {
        let (pointer_id, start) = self.down.take()?;
        if pointer_id != input.pointer_id {
            return None;
        }
        let elapsed_ms = (input.time_ms - start.time_ms).floor();
        let distance = input.point.distance(start.point);
        (elapsed_ms <= self.options.delay_ms && distance <= self.options.threshold_px).then_some(input.point)
    }
}

impl Recognizer for TapRecognizer {
    type Output = Point;

    fn phases(&self) -> &'static [PointerPhase] {
        &[PointerPhase::Down, PointerPhase::Up, PointerPhase::Cancel]
    }

    fn listener(&self) -> &ListenerOptions {
        &self.options.listener
    }

    fn handle(&mut self, phase: PointerPhase, input: &PointerInput) -> Option<Point> {
        match phase {
            PointerPhase::Down => {
                if should_handle(input, self.options.listener.pointer_types) {
                    self.down = Some((input.pointer_id, PointerSample::of(input)));
                }
                None
            }
            PointerPhase::Up => self.on_up(input),
            PointerPhase::Cancel => {
                self.down = None;
                None
            }
            PointerPhase::Move => None,
        }
    }

    fn reset(&mut self) {
        self.down = None;
    }
}
