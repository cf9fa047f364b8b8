//! Kind-keyed gesture hook.
//!
//! `use_gesture` gives a component one [`GestureHandle`] whose gesture kind is
//! chosen at runtime (from props, config, a select box). The first dispatch
//! fixes the kind for the life of the component; see
//! [`gestures::GestureDispatcher`].

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use gestures::options::{
    DoubleTapOptions, DragOptions, PinchOptions, PressOptions, RecognizerOptions, SwipeOptions, TapOptions,
};
use gestures::swipe::SwipeDirection;
use gestures::{
    GestureCallback, GestureData, GestureDispatcher, GestureError, GestureKind, OptionsBag, Recognizer, Recognizers,
    Response,
};
use leptos::logging::warn;
use leptos::prelude::*;
use web_sys::PointerEvent;

use crate::activation::Activation;
use crate::target::GestureTarget;

/// [`Recognizers`] backend that attaches to a DOM target.
pub struct DomRecognizers {
    target: GestureTarget,
}

impl DomRecognizers {
    #[must_use]
    pub fn new(target: GestureTarget) -> Self {
        Self { target }
    }

    #[cfg(feature = "web")]
    fn activate<G, F>(&self, recognizer: G, callback: F) -> Result<Activation, GestureError>
    where
        G: Recognizer + 'static,
        F: FnMut(&PointerEvent, G::Output) -> Response + 'static,
    {
        let target = self.target.resolve().ok_or(GestureError::TargetUnavailable)?;
        let mut activation = Activation::new();
        crate::listener::attach(&target, recognizer, callback, &mut activation);
        Ok(activation)
    }

    #[cfg(not(feature = "web"))]
    #[allow(clippy::unnecessary_wraps, clippy::unused_self)]
    fn activate<G, F>(&self, recognizer: G, callback: F) -> Result<Activation, GestureError>
    where
        G: Recognizer + 'static,
        F: FnMut(&PointerEvent, G::Output) -> Response + 'static,
    {
        drop((recognizer, callback));
        Ok(Activation::inert())
    }
}

impl fmt::Debug for DomRecognizers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomRecognizers").field("target", &self.target).finish()
    }
}

impl Recognizers for DomRecognizers {
    type Event = PointerEvent;
    type Activation = Activation;

    fn tap(&mut self, mut callback: GestureCallback<PointerEvent>, options: OptionsBag) -> Result<Activation, GestureError> {
        let recognizer = gestures::tap::TapRecognizer::new(TapOptions::from_bag(options)?);
        self.activate(recognizer, move |ev, at| callback(ev, GestureData::Tap(at)))
    }

    fn double_tap(
        &mut self,
        mut callback: GestureCallback<PointerEvent>,
        options: OptionsBag,
    ) -> Result<Activation, GestureError> {
        let recognizer = gestures::double_tap::DoubleTapRecognizer::new(DoubleTapOptions::from_bag(options)?);
        self.activate(recognizer, move |ev, at| callback(ev, GestureData::DoubleTap(at)))
    }

    fn press(
        &mut self,
        mut callback: GestureCallback<PointerEvent>,
        options: OptionsBag,
    ) -> Result<Activation, GestureError> {
        let recognizer = gestures::press::PressRecognizer::new(PressOptions::from_bag(options)?);
        self.activate(recognizer, move |ev, at| callback(ev, GestureData::Press(at)))
    }

    fn swipe(
        &mut self,
        mut callback: GestureCallback<PointerEvent>,
        direction: SwipeDirection,
        options: OptionsBag,
    ) -> Result<Activation, GestureError> {
        let recognizer = gestures::swipe::SwipeRecognizer::new(direction, SwipeOptions::from_bag(options)?);
        self.activate(recognizer, move |ev, data| callback(ev, GestureData::Swipe(data)))
    }

    fn drag(
        &mut self,
        mut callback: GestureCallback<PointerEvent>,
        options: OptionsBag,
    ) -> Result<Activation, GestureError> {
        let recognizer = gestures::drag::DragRecognizer::new(DragOptions::from_bag(options)?);
        self.activate(recognizer, move |ev, data| callback(ev, GestureData::Drag(data)))
    }

    fn pinch(
        &mut self,
        mut callback: GestureCallback<PointerEvent>,
        options: OptionsBag,
    ) -> Result<Activation, GestureError> {
        let recognizer = gestures::pinch::PinchRecognizer::new(PinchOptions::from_bag(options)?);
        self.activate(recognizer, move |ev, data| callback(ev, GestureData::Pinch(data)))
    }
}

/// Copyable handle to a component's gesture dispatcher.
#[derive(Clone, Copy)]
pub struct GestureHandle {
    dispatcher: StoredValue<GestureDispatcher<DomRecognizers>, LocalStorage>,
}

impl GestureHandle {
    /// Attach the recognizer for `kind`, replacing the previous one.
    ///
    /// # Errors
    ///
    /// - [`GestureError::KindChanged`] if `kind` differs from the first dispatched kind.
    /// - [`GestureError::InvalidOptions`] if `options` do not fit the recognizer.
    /// - [`GestureError::TargetUnavailable`] if the target element is not mounted.
    /// - [`GestureError::Disposed`] if the owning component is gone.
    pub fn dispatch<F, R>(&self, kind: GestureKind, mut callback: F, options: OptionsBag) -> Result<(), GestureError>
    where
        F: FnMut(&PointerEvent, GestureData) -> R + 'static,
        R: Into<Response>,
    {
        let callback: GestureCallback<PointerEvent> = Box::new(move |ev, data| callback(ev, data).into());
        self.dispatcher
            .try_update_value(|dispatcher| dispatcher.dispatch(kind, callback, options))
            .unwrap_or(Err(GestureError::Disposed))
    }

    /// Kind fixed by the first dispatch.
    pub fn kind(&self) -> Option<GestureKind> {
        self.dispatcher.try_with_value(GestureDispatcher::kind).flatten()
    }

    /// Whether the current recognizer is still listening. False before the
    /// first dispatch, after teardown, and once an `eventOnce` activation has
    /// fired.
    pub fn is_active(&self) -> bool {
        self.dispatcher
            .try_with_value(|dispatcher| dispatcher.active().is_some_and(Activation::is_active))
            .unwrap_or(false)
    }

    /// Detach the current recognizer. The kind stays fixed.
    pub fn teardown(&self) {
        self.dispatcher.try_update_value(GestureDispatcher::teardown);
    }
}

impl fmt::Debug for GestureHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureHandle").field("kind", &self.kind()).field("active", &self.is_active()).finish()
    }
}

/// Create a dispatcher bound to `target` for the current component.
///
/// Nothing is attached until [`GestureHandle::dispatch`] is called. The
/// active recognizer is released when the owner is cleaned up.
pub fn use_gesture(target: GestureTarget) -> GestureHandle {
    let dispatcher = StoredValue::new_local(GestureDispatcher::new(DomRecognizers::new(target)));
    on_cleanup(move || {
        dispatcher.try_update_value(GestureDispatcher::teardown);
    });
    GestureHandle { dispatcher }
}

/// Reactive form of [`use_gesture`].
///
/// Re-dispatches whenever `kind` or `options` change. Changing `kind` after
/// the first dispatch is a programming error and aborts with the
/// dispatcher's message. Other dispatch failures (target not mounted yet,
/// bad options) are logged and retried on the next change.
pub fn use_gesture_effect<F, R>(
    target: GestureTarget,
    kind: Signal<GestureKind>,
    callback: F,
    options: Signal<OptionsBag>,
) -> GestureHandle
where
    F: FnMut(&PointerEvent, GestureData) -> R + 'static,
    R: Into<Response>,
{
    let handle = use_gesture(target);
    let callback = Rc::new(RefCell::new(callback));
    Effect::new(move || {
        let kind = kind.get();
        let options = options.get();
        let callback = Rc::clone(&callback);
        match handle.dispatch(kind, move |ev, data| (callback.borrow_mut())(ev, data), options) {
            Ok(()) => {}
            Err(err @ GestureError::KindChanged { .. }) => panic!("{err}"),
            Err(err) => warn!("gesture {kind} not attached: {err}"),
        }
    });
    handle
}
