//! Pointer model: points, pointer types, and the framework-neutral event view.
//!
//! Recognizers never see a browser event directly. The host converts each
//! `web_sys::PointerEvent` into a [`PointerInput`] (see
//! [`PointerInput::from_event`]) and hands that to the recognizer, which keeps
//! every state machine in this crate testable without a browser.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use serde::{Deserialize, Serialize};

/// A point in client (CSS pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Midpoint between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point { x: (self.x + other.x) * 0.5, y: (self.y + other.y) * 0.5 }
    }
}

/// Kind of device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerType {
    Touch,
    Mouse,
    Pen,
}

impl PointerType {
    /// Parse the browser's `pointerType` string.
    ///
    /// Returns `None` for anything outside the three standard values
    /// (including the empty string some browsers report).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "touch" => Some(Self::Touch),
            "mouse" => Some(Self::Mouse),
            "pen" => Some(Self::Pen),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Touch => "touch",
            Self::Mouse => "mouse",
            Self::Pen => "pen",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Self::Touch => 0b001,
            Self::Mouse => 0b010,
            Self::Pen => 0b100,
        }
    }
}

/// A set of [`PointerType`]s.
///
/// Serialized as a list of lowercase names, e.g. `["touch", "pen"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PointerType>", into = "Vec<PointerType>")]
pub struct PointerTypes {
    bits: u8,
}

impl PointerTypes {
    /// Touch, mouse and pen.
    pub const ALL: Self = Self { bits: 0b111 };

    /// The empty set. A guard configured with it rejects every event.
    pub const NONE: Self = Self { bits: 0 };

    #[must_use]
    pub fn contains(self, pointer_type: PointerType) -> bool {
        self.bits & pointer_type.bit() != 0
    }

    /// Returns a copy of the set with `pointer_type` added.
    #[must_use]
    pub fn with(self, pointer_type: PointerType) -> Self {
        Self { bits: self.bits | pointer_type.bit() }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Members in a stable order (touch, mouse, pen).
    pub fn iter(self) -> impl Iterator<Item = PointerType> {
        [PointerType::Touch, PointerType::Mouse, PointerType::Pen]
            .into_iter()
            .filter(move |t| self.contains(*t))
    }
}

impl Default for PointerTypes {
    fn default() -> Self {
        Self::ALL
    }
}

impl FromIterator<PointerType> for PointerTypes {
    fn from_iter<I: IntoIterator<Item = PointerType>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

impl From<Vec<PointerType>> for PointerTypes {
    fn from(types: Vec<PointerType>) -> Self {
        types.into_iter().collect()
    }
}

impl From<PointerTypes> for Vec<PointerType> {
    fn from(types: PointerTypes) -> Self {
        types.iter().collect()
    }
}

/// Which pointer event a [`PointerInput`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// `pointerdown`
    Down,
    /// `pointermove`
    Move,
    /// `pointerup`
    Up,
    /// `pointercancel`
    Cancel,
}

impl PointerPhase {
    /// DOM event name for this phase.
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Down => "pointerdown",
            Self::Move => "pointermove",
            Self::Up => "pointerup",
            Self::Cancel => "pointercancel",
        }
    }
}

/// Framework-neutral snapshot of one pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    /// Browser-assigned id of the contact.
    pub pointer_id: i32,
    /// `None` when the browser reports a type outside touch/mouse/pen.
    pub pointer_type: Option<PointerType>,
    /// Whether this is the primary contact of a multi-contact interaction.
    pub is_primary: bool,
    /// Client-space position in CSS pixels.
    pub point: Point,
    /// Wall-clock time of the event in milliseconds.
    pub time_ms: f64,
}

impl PointerInput {
    /// Snapshot a browser pointer event, stamping it with `time_ms`.
    ///
    /// The caller supplies the clock so every recognizer attached to the same
    /// event sees the same time.
    #[must_use]
    pub fn from_event(event: &web_sys::PointerEvent, time_ms: f64) -> Self {
        Self {
            pointer_id: event.pointer_id(),
            pointer_type: PointerType::parse(&event.pointer_type()),
            is_primary: event.is_primary(),
            point: Point::new(f64::from(event.client_x()), f64::from(event.client_y())),
            time_ms,
        }
    }
}
