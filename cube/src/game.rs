//! Game state and gesture handlers.
//!
//! [`GameCore`] holds everything that does not need a browser and is what the
//! tests drive. [`Game`] wraps it together with the canvas it draws on.
//!
//! Gesture mapping:
//!
//! | Gesture | Effect |
//! |---------|--------|
//! | swipe | set the cube's heading |
//! | tap | stop the cube |
//! | double-tap | toggle zoom between 1x and 2x |
//! | pinch | scale zoom relative to the zoom at pinch start |
//! | press | new level with the next seed |
//! | drag | look around; the view returns to the cube on release |

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use gestures::drag::DragData;
use gestures::pinch::PinchData;
use gestures::recognizer::GesturePhase;
use gestures::swipe::SwipeData;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::Camera;
use crate::config::GameConfig;
use crate::consts::{LOOK_RETURN_RATE, MAX_FRAME_SECONDS};
use crate::error::GameError;
use crate::geom::Point;
use crate::render;
use crate::world::World;

/// Core game state: everything that doesn't depend on the canvas element.
#[derive(Debug, Clone)]
pub struct GameCore {
    pub config: GameConfig,
    pub world: World,
    pub camera: Camera,
    /// Free-look offset from the cube, in world units.
    look: Point,
    /// Look offset when the current drag started.
    look_anchor: Option<Point>,
    /// Camera zoom when the current pinch started.
    pinch_base: Option<f64>,
}

impl GameCore {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let world = World::generate(&config);
        let camera = Camera::centered_on(world.player.center());
        Self { config, world, camera, look: Point::default(), look_anchor: None, pinch_base: None }
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.camera.set_viewport(width, height);
    }

    #[must_use]
    pub fn look_offset(&self) -> Point {
        self.look
    }

    #[must_use]
    pub fn is_looking(&self) -> bool {
        self.look_anchor.is_some()
    }

    /// Replace the level, keeping viewport and zoom.
    pub fn regenerate(&mut self, config: GameConfig) {
        self.config = config;
        self.world = World::generate(&config);
        self.camera.center = self.world.player.center();
        self.look = Point::default();
        self.look_anchor = None;
    }

    // --- Gesture inputs ---

    pub fn on_swipe(&mut self, swipe: &SwipeData) {
        self.world.set_heading(swipe.motion.into());
    }

    pub fn on_tap(&mut self) {
        self.world.stop();
    }

    pub fn on_double_tap(&mut self) {
        self.camera.toggle_zoom();
    }

    pub fn on_press(&mut self) {
        log::debug!("press: advancing to seed {}", self.config.seed.wrapping_add(1));
        self.regenerate(self.config.next_level());
    }

    /// Dragging moves the view with the finger: content follows the pointer,
    /// so the look offset moves the opposite way.
    pub fn on_drag(&mut self, drag: &DragData) {
        match drag.phase {
            GesturePhase::Start | GesturePhase::Move => {
                let anchor = *self.look_anchor.get_or_insert(self.look);
                let zoom = self.camera.zoom();
                self.look = anchor.offset(-drag.dx / zoom, -drag.dy / zoom);
            }
            GesturePhase::End => self.look_anchor = None,
        }
    }

    pub fn on_pinch(&mut self, pinch: &PinchData) {
        match pinch.phase {
            GesturePhase::Start => self.pinch_base = Some(self.camera.zoom()),
            GesturePhase::Move => {
                if let Some(base) = self.pinch_base {
                    self.camera.set_zoom(base * pinch.scale);
                }
            }
            GesturePhase::End => self.pinch_base = None,
        }
    }

    // --- Frame ---

    /// Advance the game by `dt` seconds (clamped to one short frame).
    pub fn update(&mut self, dt: f64) {
        let dt = dt.clamp(0.0, MAX_FRAME_SECONDS);
        if self.world.step(dt) {
            log::trace!("cube stopped at {:?}", self.world.player.center());
        }
        if !self.is_looking() {
            let decay = (-LOOK_RETURN_RATE * dt).exp();
            self.look = Point::new(self.look.x * decay, self.look.y * decay);
        }
        let player = self.world.player.center();
        self.camera.follow(player.offset(self.look.x, self.look.y), dt);
    }
}

fn changed(a: f64, b: f64) -> bool {
    (a - b).abs() > f64::EPSILON
}

/// The full game. Wraps `GameCore` and owns the browser canvas element.
pub struct Game {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    dpr: f64,
    pub core: GameCore,
}

impl Game {
    /// Create a game drawing into `canvas`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ContextUnavailable`] if the canvas cannot provide
    /// a 2d context.
    pub fn new(canvas: HtmlCanvasElement, config: GameConfig) -> Result<Self, GameError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(GameError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GameError::ContextUnavailable)?;
        Ok(Self { canvas, ctx, dpr: 1.0, core: GameCore::new(config) })
    }

    /// Match the backing store to the element's CSS size and device pixel ratio.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn resize(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.dpr = dpr.max(1.0);
        self.canvas.set_width((width_css * self.dpr).round().max(1.0) as u32);
        self.canvas.set_height((height_css * self.dpr).round().max(1.0) as u32);
        self.core.set_viewport(width_css, height_css);
    }

    /// Resize if the element's CSS size or the pixel ratio changed since the
    /// last call.
    pub fn sync_size(&mut self, dpr: f64) {
        let width = f64::from(self.canvas.client_width().max(1));
        let height = f64::from(self.canvas.client_height().max(1));
        let camera = &self.core.camera;
        if changed(width, camera.viewport_width)
            || changed(height, camera.viewport_height)
            || changed(dpr.max(1.0), self.dpr)
        {
            self.resize(width, height, dpr);
        }
    }

    /// Draw the current frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), GameError> {
        render::draw(&self.ctx, &self.core, self.dpr)?;
        Ok(())
    }
}
