//! Recognizer options.
//!
//! Every options struct deserializes with `#[serde(default)]`, so parsing a
//! partial bag merges the caller's values over the defaults: whatever the
//! caller sets wins, everything else keeps its default. Keys are the
//! camelCase names used on the wire (`eventOnce`, `delay`, `threshold`, ...).

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::consts::{
    DOUBLE_TAP_DELAY_MS, DOUBLE_TAP_THRESHOLD_PX, DRAG_THRESHOLD_PX, PRESS_DELAY_MS, PRESS_THRESHOLD_PX,
    SWIPE_THRESHOLD_PX, SWIPE_VELOCITY, TAP_DELAY_MS, TAP_THRESHOLD_PX,
};
use crate::error::GestureError;
use crate::invoke::InvokeOptions;
use crate::pointer::PointerTypes;

/// Loosely-typed options as supplied to the dispatcher.
pub type OptionsBag = Map<String, Value>;

/// Listener-level options shared by every recognizer.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenerOptions {
    /// Pointer types the recognizer reacts to.
    #[serde(rename = "eventPointerTypes")]
    pub pointer_types: PointerTypes,
    /// Register listeners for the capture phase.
    #[serde(rename = "eventCapture")]
    pub capture: bool,
    /// Deactivate after the first completed activation.
    #[serde(rename = "eventOnce")]
    pub once: bool,
    /// Stop other listeners on the target from seeing an activating event.
    #[serde(rename = "eventStopImmediatePropagation")]
    pub stop_immediate: bool,
}

impl ListenerOptions {
    #[must_use]
    pub fn invoke_options(&self) -> InvokeOptions {
        InvokeOptions { stop_immediate: self.stop_immediate, once: self.once }
    }
}

/// Options types that can be parsed from an [`OptionsBag`].
pub trait RecognizerOptions: DeserializeOwned + Default {
    fn listener(&self) -> &ListenerOptions;

    /// Parse a bag, filling anything missing from the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::InvalidOptions`] when a present key has the
    /// wrong type.
    fn from_bag(bag: OptionsBag) -> Result<Self, GestureError> {
        Ok(serde_json::from_value(Value::Object(bag))?)
    }

    /// Parse options from JSON text, e.g. an attribute or query value.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::InvalidOptions`] unless `text` is a JSON object
    /// whose present keys have the right types.
    fn from_json(text: &str) -> Result<Self, GestureError> {
        Self::from_bag(serde_json::from_str(text)?)
    }
}

macro_rules! recognizer_options {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl RecognizerOptions for $ty {
                fn listener(&self) -> &ListenerOptions {
                    &self.listener
                }
            }
        )+
    };
}

/// Options for [`crate::tap::TapRecognizer`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TapOptions {
    #[serde(flatten)]
    pub listener: ListenerOptions,
    /// Maximum contact duration in milliseconds.
    #[serde(rename = "delay")]
    pub delay_ms: f64,
    /// Maximum travel between down and up, in pixels.
    #[serde(rename = "threshold")]
    pub threshold_px: f64,
}

impl Default for TapOptions {
    fn default() -> Self {
        Self { listener: ListenerOptions::default(), delay_ms: TAP_DELAY_MS, threshold_px: TAP_THRESHOLD_PX }
    }
}

/// Options for [`crate::double_tap::DoubleTapRecognizer`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoubleTapOptions {
    #[serde(flatten)]
    pub listener: ListenerOptions,
    /// Maximum gap between the two taps, in milliseconds (inclusive).
    #[serde(rename = "delay")]
    pub delay_ms: f64,
    /// Maximum distance between the two taps, in pixels (inclusive).
    #[serde(rename = "threshold")]
    pub threshold_px: f64,
}

impl Default for DoubleTapOptions {
    fn default() -> Self {
        Self {
            listener: ListenerOptions::default(),
            delay_ms: DOUBLE_TAP_DELAY_MS,
            threshold_px: DOUBLE_TAP_THRESHOLD_PX,
        }
    }
}

/// Options for [`crate::press::PressRecognizer`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressOptions {
    #[serde(flatten)]
    pub listener: ListenerOptions,
    /// Hold time before the press fires, in milliseconds.
    #[serde(rename = "delay")]
    pub delay_ms: f64,
    /// Movement tolerated while holding, in pixels.
    #[serde(rename = "threshold")]
    pub threshold_px: f64,
}

impl Default for PressOptions {
    fn default() -> Self {
        Self { listener: ListenerOptions::default(), delay_ms: PRESS_DELAY_MS, threshold_px: PRESS_THRESHOLD_PX }
    }
}

/// Options for [`crate::swipe::SwipeRecognizer`].
///
/// The swipe direction filter is not part of these options; it is passed to
/// the recognizer separately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeOptions {
    #[serde(flatten)]
    pub listener: ListenerOptions,
    /// Minimum travel, in pixels.
    #[serde(rename = "threshold")]
    pub threshold_px: f64,
    /// Minimum average speed, in pixels per millisecond.
    pub velocity: f64,
}

impl Default for SwipeOptions {
    fn default() -> Self {
        Self { listener: ListenerOptions::default(), threshold_px: SWIPE_THRESHOLD_PX, velocity: SWIPE_VELOCITY }
    }
}

/// Options for [`crate::drag::DragRecognizer`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragOptions {
    #[serde(flatten)]
    pub listener: ListenerOptions,
    /// Travel required before the drag starts, in pixels.
    #[serde(rename = "threshold")]
    pub threshold_px: f64,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self { listener: ListenerOptions::default(), threshold_px: DRAG_THRESHOLD_PX }
    }
}

/// Options for [`crate::pinch::PinchRecognizer`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PinchOptions {
    #[serde(flatten)]
    pub listener: ListenerOptions,
}

recognizer_options!(TapOptions, DoubleTapOptions, PressOptions, SwipeOptions, DragOptions, PinchOptions);
