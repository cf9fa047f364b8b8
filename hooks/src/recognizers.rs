//! One hook per recognizer.
//!
//! ```ignore
//! let board = NodeRef::<leptos::html::Div>::new();
//! use_double_tap(GestureTarget::node(board), |_ev, at| log::info!("double tap at {at:?}"), DoubleTapOptions::default());
//! ```
//!
//! Callbacks may return `()`, a `bool` (true prevents the default action),
//! or a [`Response`].

#[cfg(test)]
#[path = "recognizers_test.rs"]
mod recognizers_test;

use gestures::double_tap::DoubleTapRecognizer;
use gestures::drag::{DragData, DragRecognizer};
use gestures::options::{DoubleTapOptions, DragOptions, PinchOptions, PressOptions, SwipeOptions, TapOptions};
use gestures::pinch::{PinchData, PinchRecognizer};
use gestures::press::PressRecognizer;
use gestures::swipe::{SwipeData, SwipeDirection, SwipeRecognizer};
use gestures::tap::TapRecognizer;
use gestures::{Point, Recognizer, Response};
use web_sys::PointerEvent;

use crate::activation::{Activation, GestureActivation};
use crate::target::GestureTarget;

/// Recognize a single quick tap.
pub fn use_tap<F, R>(target: GestureTarget, callback: F, options: TapOptions) -> GestureActivation
where
    F: FnMut(&PointerEvent, Point) -> R + 'static,
    R: Into<Response>,
{
    use_recognizer(target, TapRecognizer::new(options), callback)
}

/// Recognize two taps close together in time and space.
///
/// Fires with the second tap's position. A third tap starts a new pair, so a
/// triple tap activates once.
pub fn use_double_tap<F, R>(target: GestureTarget, callback: F, options: DoubleTapOptions) -> GestureActivation
where
    F: FnMut(&PointerEvent, Point) -> R + 'static,
    R: Into<Response>,
{
    use_recognizer(target, DoubleTapRecognizer::new(options), callback)
}

/// Recognize a contact held still for `delay` ms.
pub fn use_press<F, R>(target: GestureTarget, callback: F, options: PressOptions) -> GestureActivation
where
    F: FnMut(&PointerEvent, Point) -> R + 'static,
    R: Into<Response>,
{
    use_recognizer(target, PressRecognizer::new(options), callback)
}

/// Recognize a fast directional flick matching `direction`.
pub fn use_swipe<F, R>(
    target: GestureTarget,
    callback: F,
    direction: SwipeDirection,
    options: SwipeOptions,
) -> GestureActivation
where
    F: FnMut(&PointerEvent, SwipeData) -> R + 'static,
    R: Into<Response>,
{
    use_recognizer(target, SwipeRecognizer::new(direction, options), callback)
}

/// Track a single-pointer drag from start to end.
pub fn use_drag<F, R>(target: GestureTarget, callback: F, options: DragOptions) -> GestureActivation
where
    F: FnMut(&PointerEvent, DragData) -> R + 'static,
    R: Into<Response>,
{
    use_recognizer(target, DragRecognizer::new(options), callback)
}

/// Track a two-contact pinch.
pub fn use_pinch<F, R>(target: GestureTarget, callback: F, options: PinchOptions) -> GestureActivation
where
    F: FnMut(&PointerEvent, PinchData) -> R + 'static,
    R: Into<Response>,
{
    use_recognizer(target, PinchRecognizer::new(options), callback)
}

/// Attach `recognizer` to `target` for the lifetime of the current owner.
///
/// Window targets attach immediately. Element targets attach from an effect
/// the first time the element is mounted.
pub(crate) fn use_recognizer<G, F, R>(target: GestureTarget, recognizer: G, mut callback: F) -> GestureActivation
where
    G: Recognizer + 'static,
    F: FnMut(&PointerEvent, G::Output) -> R + 'static,
    R: Into<Response>,
{
    let callback = move |event: &PointerEvent, data: G::Output| callback(event, data).into();

    #[cfg(feature = "web")]
    {
        let handle = GestureActivation::new(Activation::new());
        attach_when_ready(handle, target, recognizer, callback);
        handle
    }

    #[cfg(not(feature = "web"))]
    {
        drop((target, recognizer, callback));
        GestureActivation::new(Activation::inert())
    }
}

#[cfg(feature = "web")]
fn attach_when_ready<G, F>(handle: GestureActivation, target: GestureTarget, recognizer: G, callback: F)
where
    G: Recognizer + 'static,
    F: FnMut(&PointerEvent, G::Output) -> Response + 'static,
{
    use leptos::prelude::Effect;

    if target.is_window() {
        match target.resolve() {
            Some(dom) => {
                handle.with_mut(|activation| crate::listener::attach(&dom, recognizer, callback, activation));
            }
            None => leptos::logging::warn!("gesture hook: no window to attach to"),
        }
        return;
    }

    let mut pending = Some((recognizer, callback));
    Effect::new(move || {
        let Some(dom) = target.resolve() else {
            return;
        };
        let Some((recognizer, callback)) = pending.take() else {
            return;
        };
        handle.with_mut(|activation| crate::listener::attach(&dom, recognizer, callback, activation));
    });
}
