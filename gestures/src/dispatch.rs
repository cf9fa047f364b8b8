//! Gesture dispatcher: one declarative request, six possible recognizers.
//!
//! A [`GestureDispatcher`] belongs to a single component instance. The first
//! [`dispatch`](GestureDispatcher::dispatch) fixes its [`GestureKind`];
//! later dispatches may change the callback or options but never the kind.
//! Switching kinds would strand the previous recognizer's listeners and
//! pending state, so it is rejected with [`GestureError::KindChanged`].
//!
//! The dispatcher does not attach anything itself. It routes to a
//! [`Recognizers`] backend (the Leptos hooks in production, a recorder in
//! tests) and owns whatever activation the backend hands back.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::drag::DragData;
use crate::error::GestureError;
use crate::invoke::Response;
pub use crate::options::OptionsBag;
use crate::options::{
    DoubleTapOptions, DragOptions, PinchOptions, PressOptions, RecognizerOptions, SwipeOptions, TapOptions,
};
use crate::pinch::PinchData;
use crate::pointer::Point;
use crate::swipe::{SwipeData, SwipeDirection};

/// Options-bag key carrying the swipe direction filter.
pub const DIRECTION_KEY: &str = "direction";

/// The six gestures a dispatcher can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    Tap,
    DoubleTap,
    Press,
    Swipe,
    Drag,
    Pinch,
}

impl GestureKind {
    pub const ALL: [Self; 6] = [Self::Tap, Self::DoubleTap, Self::Press, Self::Swipe, Self::Drag, Self::Pinch];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tap => "tap",
            Self::DoubleTap => "doubletap",
            Self::Press => "press",
            Self::Swipe => "swipe",
            Self::Drag => "drag",
            Self::Pinch => "pinch",
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GestureKind {
    type Err = GestureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| GestureError::UnknownKind(s.to_owned()))
    }
}

/// Activation payload for any of the six gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureData {
    Tap(Point),
    DoubleTap(Point),
    Press(Point),
    Swipe(SwipeData),
    Drag(DragData),
    Pinch(PinchData),
}

impl GestureData {
    #[must_use]
    pub fn kind(&self) -> GestureKind {
        match self {
            Self::Tap(_) => GestureKind::Tap,
            Self::DoubleTap(_) => GestureKind::DoubleTap,
            Self::Press(_) => GestureKind::Press,
            Self::Swipe(_) => GestureKind::Swipe,
            Self::Drag(_) => GestureKind::Drag,
            Self::Pinch(_) => GestureKind::Pinch,
        }
    }

    /// The pointer position most representative of the activation.
    #[must_use]
    pub fn point(&self) -> Point {
        match self {
            Self::Tap(p) | Self::DoubleTap(p) | Self::Press(p) => *p,
            Self::Swipe(s) => s.point,
            Self::Drag(d) => d.point,
            Self::Pinch(p) => p.center,
        }
    }
}

/// Callback shape used by the dispatcher for every gesture kind.
pub type GestureCallback<E> = Box<dyn FnMut(&E, GestureData) -> Response>;

/// The six recognizer entry points a dispatcher routes to.
///
/// Each method receives the callback and options exactly as forwarded by the
/// dispatcher and returns an activation that stays live until dropped.
pub trait Recognizers {
    /// Event type handed to callbacks.
    type Event;
    /// Handle that keeps a recognizer attached; dropping it tears it down.
    type Activation;

    /// # Errors
    ///
    /// Backends fail when the options bag is invalid or no target is available.
    fn tap(
        &mut self,
        callback: GestureCallback<Self::Event>,
        options: OptionsBag,
    ) -> Result<Self::Activation, GestureError>;

    /// # Errors
    ///
    /// See [`Recognizers::tap`].
    fn double_tap(
        &mut self,
        callback: GestureCallback<Self::Event>,
        options: OptionsBag,
    ) -> Result<Self::Activation, GestureError>;

    /// # Errors
    ///
    /// See [`Recognizers::tap`].
    fn press(
        &mut self,
        callback: GestureCallback<Self::Event>,
        options: OptionsBag,
    ) -> Result<Self::Activation, GestureError>;

    /// Swipe takes its direction filter positionally; `options` never
    /// contains a `direction` key.
    ///
    /// # Errors
    ///
    /// See [`Recognizers::tap`].
    fn swipe(
        &mut self,
        callback: GestureCallback<Self::Event>,
        direction: SwipeDirection,
        options: OptionsBag,
    ) -> Result<Self::Activation, GestureError>;

    /// # Errors
    ///
    /// See [`Recognizers::tap`].
    fn drag(
        &mut self,
        callback: GestureCallback<Self::Event>,
        options: OptionsBag,
    ) -> Result<Self::Activation, GestureError>;

    /// # Errors
    ///
    /// See [`Recognizers::tap`].
    fn pinch(
        &mut self,
        callback: GestureCallback<Self::Event>,
        options: OptionsBag,
    ) -> Result<Self::Activation, GestureError>;
}

/// Per-instance router enforcing a stable gesture kind.
pub struct GestureDispatcher<R: Recognizers> {
    recognizers: R,
    kind: Option<GestureKind>,
    active: Option<R::Activation>,
}

impl<R: Recognizers> GestureDispatcher<R> {
    #[must_use]
    pub fn new(recognizers: R) -> Self {
        Self { recognizers, kind: None, active: None }
    }

    /// Kind captured by the first dispatch, if any.
    #[must_use]
    pub fn kind(&self) -> Option<GestureKind> {
        self.kind
    }

    /// Whether the dispatcher holds an activation. The activation itself may
    /// already be spent (see [`active`](Self::active)).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The activation installed by the last successful dispatch.
    #[must_use]
    pub fn active(&self) -> Option<&R::Activation> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn recognizers(&self) -> &R {
        &self.recognizers
    }

    /// Route a gesture request to its recognizer.
    ///
    /// The first call captures `kind`. A same-kind call replaces the active
    /// recognizer: options are checked first, then the old recognizer is
    /// torn down and the new one attached.
    ///
    /// # Errors
    ///
    /// Each of these leaves the active recognizer untouched:
    ///
    /// - [`GestureError::KindChanged`] if `kind` differs from the captured kind.
    /// - [`GestureError::UnknownDirection`] for a swipe `direction` name
    ///   outside the known filters.
    /// - [`GestureError::InvalidOptions`] if the options do not fit the
    ///   recognizer.
    ///
    /// Backend errors (for example an unmounted target) happen after teardown
    /// and leave nothing attached.
    pub fn dispatch(
        &mut self,
        kind: GestureKind,
        callback: GestureCallback<R::Event>,
        mut options: OptionsBag,
    ) -> Result<(), GestureError> {
        if let Some(current) = self.kind
            && current != kind
        {
            log::error!("gesture dispatcher: kind changed from {current} to {kind}");
            return Err(GestureError::KindChanged { from: current, to: kind });
        }
        self.kind = Some(kind);

        let direction =
            if kind == GestureKind::Swipe { take_direction(&mut options)? } else { SwipeDirection::default() };
        validate_options(kind, &options)?;

        // Release before routing so two recognizers never coexist.
        self.teardown();

        let activation = match kind {
            GestureKind::Tap => self.recognizers.tap(callback, options)?,
            GestureKind::DoubleTap => self.recognizers.double_tap(callback, options)?,
            GestureKind::Press => self.recognizers.press(callback, options)?,
            GestureKind::Swipe => self.recognizers.swipe(callback, direction, options)?,
            GestureKind::Drag => self.recognizers.drag(callback, options)?,
            GestureKind::Pinch => self.recognizers.pinch(callback, options)?,
        };
        log::debug!("gesture dispatcher: {kind} active");
        self.active = Some(activation);
        Ok(())
    }

    /// Release the active recognizer, if any. The captured kind is kept.
    pub fn teardown(&mut self) {
        if self.active.take().is_some() {
            log::debug!("gesture dispatcher: released {:?}", self.kind);
        }
    }
}

impl<R: Recognizers + fmt::Debug> fmt::Debug for GestureDispatcher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureDispatcher")
            .field("recognizers", &self.recognizers)
            .field("kind", &self.kind)
            .field("active", &self.active.is_some())
            .finish()
    }
}

/// Remove the swipe direction from a bag, defaulting to [`SwipeDirection::Both`].
///
/// # Errors
///
/// - [`GestureError::UnknownDirection`] for a string that names no direction.
/// - [`GestureError::InvalidOptions`] for a value that is not a string.
pub fn take_direction(options: &mut OptionsBag) -> Result<SwipeDirection, GestureError> {
    match options.remove(DIRECTION_KEY) {
        None | Some(Value::Null) => Ok(SwipeDirection::default()),
        Some(Value::String(name)) => name.parse(),
        Some(value) => Ok(serde_json::from_value(value)?),
    }
}

/// Check that `options` parse into the options type of `kind`'s recognizer.
///
/// Swipe options must already have had their `direction` removed.
///
/// # Errors
///
/// Returns [`GestureError::InvalidOptions`] when a present key has the wrong
/// type.
pub fn validate_options(kind: GestureKind, options: &OptionsBag) -> Result<(), GestureError> {
    let bag = options.clone();
    match kind {
        GestureKind::Tap => TapOptions::from_bag(bag).map(drop),
        GestureKind::DoubleTap => DoubleTapOptions::from_bag(bag).map(drop),
        GestureKind::Press => PressOptions::from_bag(bag).map(drop),
        GestureKind::Swipe => SwipeOptions::from_bag(bag).map(drop),
        GestureKind::Drag => DragOptions::from_bag(bag).map(drop),
        GestureKind::Pinch => PinchOptions::from_bag(bag).map(drop),
    }
}
