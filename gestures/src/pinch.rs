//! Pinch recognizer: two contacts moving toward or away from each other.
//!
//! Unlike the other recognizers, pinch must see secondary contacts, so it
//! filters by pointer type only.

#[cfg(test)]
#[path = "pinch_test.rs"]
mod pinch_test;

use crate::guard::pointer_type_allowed;
use crate::options::{ListenerOptions, PinchOptions};
use crate::pointer::{Point, PointerInput, PointerPhase};
use crate::recognizer::{GesturePhase, Recognizer};

/// Reported for each pinch step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchData {
    pub phase: GesturePhase,
    /// Current contact distance divided by the distance at `Start`.
    pub scale: f64,
    /// Current distance between the two contacts.
    pub distance: f64,
    /// Midpoint between the two contacts.
    pub center: Point,
}

#[derive(Debug, Clone, Copy)]
struct Contact {
    pointer_id: i32,
    point: Point,
}

#[derive(Debug, Clone)]
pub struct PinchRecognizer {
    options: PinchOptions,
    contacts: Vec<Contact>,
    start_distance: Option<f64>,
    last: Option<PinchData>,
}

impl PinchRecognizer {
    #[must_use]
    pub fn new(options: PinchOptions) -> Self {
        Self { options, contacts: Vec::with_capacity(2), start_distance: None, last: None }
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.start_distance.is_some()
    }

    fn span(&self) -> Option<(f64, Point)> {
        match self.contacts.as_slice() {
            [a, b] => Some((a.point.distance(b.point), a.point.midpoint(b.point))),
            _ => None,
        }
    }

    fn on_down(&mut self, input: &PointerInput) -> Option<PinchData> {
        if !pointer_type_allowed(input, self.options.listener.pointer_types)
            || self.contacts.len() >= 2
            || self.contacts.iter().any(|c| c.pointer_id == input.pointer_id)
        {
            return None;
        }
        self.contacts.push(Contact { pointer_id: input.pointer_id, point: input.point });
        let (distance, center) = self.span()?;
        self.start_distance = Some(distance);
        let data = PinchData { phase: GesturePhase::Start, scale: 1.0, distance, center };
        self.last = Some(data);
        Some(data)
    }

    fn on_move(&mut self, input: &PointerInput) -> Option<PinchData> {
        let contact = self.contacts.iter_mut().find(|c| c.pointer_id == input.pointer_id)?;
        contact.point = input.point;
        let start = self.start_distance?;
        let (distance, center) = self.span()?;
        let scale = if start > f64::EPSILON { distance / start } else { 1.0 };
        let data = PinchData { phase: GesturePhase::Move, scale, distance, center };
        self.last = Some(data);
        Some(data)
    }

    fn on_release(&mut self, input: &PointerInput) -> Option<PinchData> {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.pointer_id != input.pointer_id);
        if self.contacts.len() == before {
            return None;
        }
        self.start_distance.take()?;
        let last = self.last.take()?;
        log::debug!("pinch ended at scale {:.3}", last.scale);
        Some(PinchData { phase: GesturePhase::End, ..last })
    }
}

impl Recognizer for PinchRecognizer {
    type Output = PinchData;

    fn phases(&self) -> &'static [PointerPhase] {
        &[PointerPhase::Down, PointerPhase::Move, PointerPhase::Up, PointerPhase::Cancel]
    }

    fn listener(&self) -> &ListenerOptions {
        &self.options.listener
    }

    fn handle(&mut self, phase: PointerPhase, input: &PointerInput) -> Option<PinchData> {
        match phase {
            PointerPhase::Down => self.on_down(input),
            PointerPhase::Move => self.on_move(input),
            PointerPhase::Up | PointerPhase::Cancel => self.on_release(input),
        }
    }

    fn completes(output: &PinchData) -> bool {
        output.phase == GesturePhase::End
    }

    fn reset(&mut self) {
        self.contacts.clear();
        self.start_distance = None;
        self.last = None;
    }
}
