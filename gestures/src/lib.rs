//! Pointer gesture recognition core.
//!
//! This crate is framework-agnostic: it turns a stream of pointer events into
//! gesture activations without knowing how listeners are attached. The
//! `hooks` crate wires these recognizers into Leptos components and the DOM;
//! everything here runs (and is tested) natively.
//!
//! Event flow for a single recognizer:
//!
//! ```text
//! PointerEvent -> PointerInput -> guard -> Recognizer -> invoke -> callback
//! ```
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`pointer`] | Pointer types, points, and the framework-neutral [`pointer::PointerInput`] |
//! | [`guard`] | Primary-pointer and pointer-type filtering |
//! | [`options`] | Listener and per-recognizer options with serde defaults |
//! | [`invoke`] | Side effects around a user callback (stop, prevent, once) |
//! | [`cancel`] | Idempotent cancellation token shared by teardown paths |
//! | [`recognizer`] | The [`recognizer::Recognizer`] trait every gesture implements |
//! | [`tap`], [`double_tap`], [`press`], [`swipe`], [`drag`], [`pinch`] | The six recognizers |
//! | [`dispatch`] | Kind-keyed facade over the six recognizers |
//! | [`error`] | [`error::GestureError`] |
//! | [`consts`] | Default thresholds and timings |

pub mod cancel;
pub mod consts;
pub mod dispatch;
pub mod double_tap;
pub mod drag;
pub mod error;
pub mod guard;
pub mod invoke;
pub mod options;
pub mod pinch;
pub mod pointer;
pub mod press;
pub mod recognizer;
pub mod swipe;
pub mod tap;

pub use cancel::CancelToken;
pub use dispatch::{GestureCallback, GestureData, GestureDispatcher, GestureKind, OptionsBag, Recognizers};
pub use error::GestureError;
pub use invoke::{EventControl, InvokeOptions, Response};
pub use pointer::{Point, PointerInput, PointerPhase, PointerType, PointerTypes};
pub use recognizer::{Recognizer, TimerCommand};
