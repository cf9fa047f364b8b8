//! Drag recognizer: reports `Start`, `Move` and `End` while a pointer travels.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::guard::should_handle;
use crate::options::{DragOptions, ListenerOptions};
use crate::pointer::{Point, PointerInput, PointerPhase};
use crate::recognizer::{GesturePhase, Recognizer};

/// Reported for each drag step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragData {
    pub phase: GesturePhase,
    /// Current pointer position.
    pub point: Point,
    /// Displacement from the pointer-down position.
    pub dx: f64,
    pub dy: f64,
}

#[derive(Debug, Clone, Copy)]
struct Track {
    pointer_id: i32,
    origin: Point,
    last: Point,
    started: bool,
}

impl Track {
    fn data(&self, phase: GesturePhase, point: Point) -> DragData {
        DragData { phase, point, dx: point.x - self.origin.x, dy: point.y - self.origin.y }
    }
}

#[derive(Debug, Clone)]
pub struct DragRecognizer {
    options: DragOptions,
    track: Option<Track>,
}

impl DragRecognizer {
    #[must_use]
    pub fn new(options: DragOptions) -> Self {
        Self { options, track: None }
    }

    /// Whether a drag has passed its threshold and not yet ended.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.track.is_some_and(|t| t.started)
    }

    fn on_move(&mut self, input: &PointerInput) -> Option<DragData> {
        let threshold = self.options.threshold_px;
        let track = self.track.as_mut().filter(|t| t.pointer_id == input.pointer_id)?;
        track.last = input.point;
        if track.started {
            return Some(track.data(GesturePhase::Move, input.point));
        }
        if input.point.distance(track.origin) > threshold {
            track.started = true;
            return Some(track.data(GesturePhase::Start, input.point));
        }
        None
    }

    fn on_end(&mut self, input: &PointerInput, lifted: bool) -> Option<DragData> {
        let track = self.track.filter(|t| t.pointer_id == input.pointer_id)?;
        self.track = None;
        if !track.started {
            return None;
        }
        let point = if lifted { input.point } else { track.last };
        Some(track.data(GesturePhase::End, point))
    }
}

impl Recognizer for DragRecognizer {
    type Output = DragData;

    fn phases(&self) -> &'static [PointerPhase] {
        &[PointerPhase::Down, PointerPhase::Move, PointerPhase::Up, PointerPhase::Cancel]
    }

    fn listener(&self) -> &ListenerOptions {
        &self.options.listener
    }

    fn handle(&mut self, phase: PointerPhase, input: &PointerInput) -> Option<DragData> {
        match phase {
            PointerPhase::Down => {
                if should_handle(input, self.options.listener.pointer_types) {
                    self.track =
                        Some(Track { pointer_id: input.pointer_id, origin: input.point, last: input.point, started: false });
                }
                None
            }
            PointerPhase::Move => self.on_move(input),
            PointerPhase::Up => self.on_end(input, true),
            PointerPhase::Cancel => self.on_end(input, false),
        }
    }

    fn completes(output: &DragData) -> bool {
        output.phase == GesturePhase::End
    }

    fn reset(&mut self) {
        self.track = None;
    }
}
