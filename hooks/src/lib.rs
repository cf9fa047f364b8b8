//! # hooks
//!
//! Leptos bindings for the `gestures` recognizers.
//!
//! Each hook attaches pointer listeners to a [`GestureTarget`] for the
//! lifetime of the calling component and detaches them when the component's
//! owner is cleaned up. Listener wiring only happens with the `web` feature;
//! without it the hooks are inert, so components that use them still render
//! on the server and in native tests.
//!
//! | Module | Role |
//! |--------|------|
//! | [`target`] | Where listeners go: the window or a mounted element |
//! | [`activation`] | Teardown handle shared by every hook |
//! | [`recognizers`] | `use_tap`, `use_double_tap`, `use_press`, `use_swipe`, `use_drag`, `use_pinch` |
//! | [`gesture`] | `use_gesture` / `use_gesture_effect`, the kind-keyed dispatcher |

pub mod activation;
pub mod gesture;
#[cfg(feature = "web")]
mod listener;
pub mod recognizers;
#[cfg(any(feature = "web", test))]
mod session;
pub mod target;

pub use activation::{Activation, GestureActivation};
pub use gesture::{DomRecognizers, GestureHandle, use_gesture, use_gesture_effect};
pub use recognizers::{use_double_tap, use_drag, use_pinch, use_press, use_swipe, use_tap};
pub use target::GestureTarget;

pub use gestures::{GestureData, GestureError, GestureKind, OptionsBag, Point, Response};
