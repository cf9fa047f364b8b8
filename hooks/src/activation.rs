//! Teardown handles.
//!
//! An [`Activation`] owns everything a recognizer registered (listener
//! closures, timers) together with the [`CancelToken`] that detaches it.
//! Owner cleanup, an explicit [`GestureActivation::cancel`], and the
//! `eventOnce` path all end in the same `cancel`, which is idempotent.

#[cfg(test)]
#[path = "activation_test.rs"]
mod activation_test;

use std::any::Any;
use std::fmt;

use gestures::CancelToken;
use leptos::prelude::*;

/// Listeners and state registered by one recognizer.
///
/// Dropping an activation cancels it. Listener closures are kept until the
/// activation itself goes away. A listener may drop its own activation while
/// running (a callback that re-dispatches); wasm-bindgen frees a closure
/// only after its current call returns.
pub struct Activation {
    token: CancelToken,
    keepalive: Vec<Box<dyn Any>>,
}

impl Activation {
    #[must_use]
    pub fn new() -> Self {
        Self { token: CancelToken::new(), keepalive: Vec::new() }
    }

    /// An activation with nothing attached, already cancelled.
    #[must_use]
    pub fn inert() -> Self {
        let activation = Self::new();
        activation.token.cancel();
        activation
    }

    #[must_use]
    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    /// Keep `value` alive for as long as this activation exists.
    pub fn keep(&mut self, value: impl Any) {
        self.keepalive.push(Box::new(value));
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }
}

impl Default for Activation {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Activation {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

impl fmt::Debug for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Activation")
            .field("active", &self.is_active())
            .field("retained", &self.keepalive.len())
            .finish()
    }
}

/// Copyable handle to a hook's [`Activation`], owned by the calling component.
///
/// Returned by every `use_*` hook. The activation is cancelled when the
/// component's owner is cleaned up; once that has happened the handle reports
/// inactive and `cancel` is a no-op.
#[derive(Clone, Copy)]
pub struct GestureActivation {
    slot: StoredValue<Activation, LocalStorage>,
}

impl GestureActivation {
    pub(crate) fn new(activation: Activation) -> Self {
        let slot = StoredValue::new_local(activation);
        on_cleanup(move || {
            slot.try_with_value(Activation::cancel);
        });
        Self { slot }
    }

    /// Detach the recognizer's listeners and drop its in-flight state.
    pub fn cancel(&self) {
        self.slot.try_with_value(Activation::cancel);
    }

    pub fn is_active(&self) -> bool {
        self.slot.try_with_value(Activation::is_active).unwrap_or(false)
    }

    /// Run `f` against the activation if the owner is still alive.
    #[cfg(feature = "web")]
    pub(crate) fn with_mut<U>(&self, f: impl FnOnce(&mut Activation) -> U) -> Option<U> {
        self.slot.try_update_value(f)
    }
}

impl fmt::Debug for GestureActivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureActivation").field("active", &self.is_active()).finish()
    }
}
