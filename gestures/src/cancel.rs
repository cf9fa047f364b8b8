//! Idempotent cancellation shared by every teardown path of an activation.
//!
//! A recognizer can be released two ways: its owner is torn down, or it fires
//! with `eventOnce` set. Both call [`CancelToken::cancel`]; the registered
//! release hooks run exactly once no matter which path gets there first.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type ReleaseHook = Box<dyn FnOnce()>;

#[derive(Default)]
struct TokenInner {
    cancelled: Cell<bool>,
    hooks: RefCell<Vec<ReleaseHook>>,
}

/// Shared, single-threaded cancellation token.
///
/// Clones share state. Cancelling any clone cancels them all.
#[derive(Clone, Default)]
pub struct CancelToken {
    inner: Rc<TokenInner>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook to run on cancellation.
    ///
    /// If the token is already cancelled the hook runs immediately.
    pub fn on_cancel(&self, hook: impl FnOnce() + 'static) {
        if self.inner.cancelled.get() {
            hook();
            return;
        }
        self.inner.hooks.borrow_mut().push(Box::new(hook));
    }

    /// Cancel the token, running every registered hook in registration order.
    ///
    /// Subsequent calls are no-ops. Hooks may call `cancel` again (or register
    /// further hooks) without deadlocking.
    pub fn cancel(&self) {
        if self.inner.cancelled.replace(true) {
            return;
        }
        let hooks = std::mem::take(&mut *self.inner.hooks.borrow_mut());
        for hook in hooks {
            hook();
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }
}

impl fmt::Debug for CancelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelToken")
            .field("cancelled", &self.inner.cancelled.get())
            .field("hooks", &self.inner.hooks.borrow().len())
            .finish()
    }
}
