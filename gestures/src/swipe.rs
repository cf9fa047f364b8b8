//! Swipe recognizer: a fast, long-enough stroke between pointer-down and -up.

#[cfg(test)]
#[path = "swipe_test.rs"]
mod swipe_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::double_tap::PointerSample;
use crate::error::GestureError;
use crate::guard::should_handle;
use crate::options::{ListenerOptions, SwipeOptions};
use crate::pointer::{Point, PointerInput, PointerPhase};
use crate::recognizer::Recognizer;

/// Which swipe motions a recognizer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Any motion on either axis.
    #[default]
    Both,
    Horizontal,
    Vertical,
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    #[must_use]
    pub fn accepts(self, motion: SwipeMotion) -> bool {
        match self {
            Self::Both => true,
            Self::Horizontal => matches!(motion, SwipeMotion::Left | SwipeMotion::Right),
            Self::Vertical => matches!(motion, SwipeMotion::Up | SwipeMotion::Down),
            Self::Left => motion == SwipeMotion::Left,
            Self::Right => motion == SwipeMotion::Right,
            Self::Up => motion == SwipeMotion::Up,
            Self::Down => motion == SwipeMotion::Down,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwipeDirection {
    type Err = GestureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both" => Ok(Self::Both),
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(GestureError::UnknownDirection(other.to_owned())),
        }
    }
}

/// Direction of a recognized swipe, by dominant axis. Screen `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeMotion {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeMotion {
    /// Classify a displacement. Ties go to the horizontal axis; a zero
    /// displacement has no direction.
    #[must_use]
    pub fn from_delta(dx: f64, dy: f64) -> Option<Self> {
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        if dx.abs() >= dy.abs() {
            Some(if dx > 0.0 { Self::Right } else { Self::Left })
        } else {
            Some(if dy > 0.0 { Self::Down } else { Self::Up })
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// Reported on a recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeData {
    /// Position where the pointer lifted.
    pub point: Point,
    pub dx: f64,
    pub dy: f64,
    /// Average speed over the stroke, in pixels per millisecond.
    pub velocity: f64,
    pub motion: SwipeMotion,
}

#[derive(Debug, Clone)]
pub struct SwipeRecognizer {
    options: SwipeOptions,
    direction: SwipeDirection,
    down: Option<(i32, PointerSample)>,
}

impl SwipeRecognizer {
    #[must_use]
    pub fn new(direction: SwipeDirection, options: SwipeOptions) -> Self {
        Self { options, direction, down: None }
    }

    #[must_use]
    pub fn direction(&self) -> SwipeDirection {
        self.direction
    }

    fn on_up(&mut self, input: &PointerInput) -> Option<SwipeData> {
        let (pointer_id, start) = self.down.take()?;
        if pointer_id != input.pointer_id {
            return None;
        }
        let dx = input.point.x - start.point.x;
        let dy = input.point.y - start.point.y;
        let distance = dx.hypot(dy);
        let elapsed_ms = (input.time_ms - start.time_ms).max(1.0);
        let velocity = distance / elapsed_ms;
        if distance < self.options.threshold_px || velocity < self.options.velocity {
            return None;
        }
        let motion = SwipeMotion::from_delta(dx, dy)?;
        if !self.direction.accepts(motion) {
            return None;
        }
        log::debug!("swipe {motion:?}: {distance:.1}px at {velocity:.3}px/ms");
        Some(SwipeData { point: input.point, dx, dy, velocity, motion })
    }
}

impl Recognizer for SwipeRecognizer {
    type Output = SwipeData;

    fn phases(&self) -> &'static [PointerPhase] {
        &[PointerPhase::Down, PointerPhase::Up, PointerPhase::Cancel]
    }

    fn listener(&self) -> &ListenerOptions {
        &self.options.listener
    }

    fn handle(&mut self, phase: PointerPhase, input: &PointerInput) -> Option<SwipeData> {
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
