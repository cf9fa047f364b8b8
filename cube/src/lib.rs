//! Cube: a small top-down game used to exercise the gesture hooks.
//!
//! A cube moves across a field of randomly placed blocks. Swipes steer it,
//! a tap stops it, double-tap and pinch zoom the camera, press rolls a new
//! level, and drag looks around. Everything except [`render`] and
//! [`game::Game`] is plain state and runs natively in tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`game`] | [`game::GameCore`] (testable state + gesture handlers) and the canvas-owning [`game::Game`] |
//! | [`world`] | Level generation, movement and collision |
//! | [`camera`] | Follow/zoom camera and coordinate conversions |
//! | [`geom`] | [`geom::Point`] and axis-aligned [`geom::Rect`] |
//! | [`config`] | [`config::GameConfig`] parsed from the page query string |
//! | [`render`] | Canvas2D drawing |
//! | [`error`] | [`error::GameError`] |
//! | [`consts`] | Tuning constants |

pub mod camera;
pub mod config;
pub mod consts;
pub mod error;
pub mod game;
pub mod geom;
pub mod render;
pub mod world;
