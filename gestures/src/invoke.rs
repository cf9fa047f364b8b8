//! Action invoker: applies event side effects around a user callback.

#[cfg(test)]
#[path = "invoke_test.rs"]
mod invoke_test;

/// What a gesture callback asks the invoker to do with the triggering event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Response {
    /// Leave the event alone.
    #[default]
    Continue,
    /// Call `preventDefault()` on the event.
    PreventDefault,
}

impl From<()> for Response {
    fn from((): ()) -> Self {
        Self::Continue
    }
}

impl From<bool> for Response {
    fn from(prevent: bool) -> Self {
        if prevent { Self::PreventDefault } else { Self::Continue }
    }
}

/// The two event operations the invoker needs.
pub trait EventControl {
    fn stop_immediate_propagation(&self);
    fn prevent_default(&self);
}

impl EventControl for web_sys::PointerEvent {
    fn stop_immediate_propagation(&self) {
        web_sys::Event::stop_immediate_propagation(self);
    }

    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

/// Per-activation invoker flags, derived from listener options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InvokeOptions {
    /// Stop other listeners on the same target before the callback runs.
    pub stop_immediate: bool,
    /// Run `on_once` after the callback.
    pub once: bool,
}

/// Run `callback` for `event` and apply the requested side effects.
///
/// Order: immediate-propagation stop (if requested), the callback,
/// default-action suppression (if the callback returned
/// [`Response::PreventDefault`]), then `on_once` (if `options.once`).
pub fn invoke<E, D, F, O>(event: &E, data: D, callback: F, options: InvokeOptions, on_once: O) -> Response
where
    E: EventControl + ?Sized,
    F: FnOnce(&E, D) -> Response,
    O: FnOnce(),
{
    if options.stop_immediate {
        event.stop_immediate_propagation();
    }
    let response = callback(event, data);
    if response == Response::PreventDefault {
        event.prevent_default();
    }
    if options.once {
        on_once();
    }
    response
}
