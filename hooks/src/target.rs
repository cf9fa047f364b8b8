//! Listener targets.

#[cfg(test)]
#[path = "target_test.rs"]
mod target_test;

use std::fmt;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::tachys::html::element::ElementType;
use wasm_bindgen::JsCast;
use web_sys::EventTarget;

type Resolver = Rc<dyn Fn() -> Option<EventTarget>>;

/// The element (or window) a gesture hook listens on.
#[derive(Clone, Default)]
pub enum GestureTarget {
    /// The global window. Always available once the page has loaded.
    #[default]
    Window,
    /// An element behind a [`NodeRef`]; resolves once it mounts.
    Node(Resolver),
}

impl GestureTarget {
    #[must_use]
    pub fn window() -> Self {
        Self::Window
    }

    /// Listen on the element bound to `node_ref`.
    ///
    /// Reading the ref is reactive, so hooks that resolve this target inside
    /// an effect attach as soon as the element mounts.
    #[must_use]
    pub fn node<E>(node_ref: NodeRef<E>) -> Self
    where
        E: ElementType + 'static,
        E::Output: JsCast + Clone + 'static,
    {
        Self::Node(Rc::new(move || node_ref.get().map(|el| el.unchecked_into::<EventTarget>())))
    }

    #[must_use]
    pub fn is_window(&self) -> bool {
        matches!(self, Self::Window)
    }

    /// The live DOM target, or `None` if it is not available yet.
    #[cfg(feature = "web")]
    pub(crate) fn resolve(&self) -> Option<EventTarget> {
        match self {
            Self::Window => web_sys::window().map(EventTarget::from),
            Self::Node(resolver) => resolver(),
        }
    }
}

impl fmt::Debug for GestureTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Window => f.write_str("GestureTarget::Window"),
            Self::Node(_) => f.write_str("GestureTarget::Node"),
        }
    }
}
