//! Level generation, movement, and collision.
//!
//! The cube moves in straight lines along its [`Heading`]. Each step moves
//! along x first and then y; after each axis any overlapped obstacle pushes
//! the cube back flush against its face and the cube stops. World edges
//! behave the same way. Long steps are split into short moves so the cube
//! cannot pass through a thin block.

#[cfg(test)]
#[path = "world_test.rs"]
mod world_test;

use gestures::swipe::SwipeMotion;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::consts::{
    MAX_SUBSTEP_PX, OBSTACLE_MAX_SIZE, OBSTACLE_MIN_SIZE, PLACEMENT_ATTEMPTS, PLAYER_SIZE, SPAWN_CLEARANCE,
};
use crate::geom::{Point, Rect};

/// Direction the cube is travelling in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heading {
    #[default]
    Stopped,
    Left,
    Right,
    Up,
    Down,
}

impl Heading {
    /// Unit vector for this heading (screen convention: +y is down).
    #[must_use]
    pub fn vector(self) -> (f64, f64) {
        match self {
            Self::Stopped => (0.0, 0.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
            Self::Up => (0.0, -1.0),
            Self::Down => (0.0, 1.0),
        }
    }
}

impl From<SwipeMotion> for Heading {
    fn from(motion: SwipeMotion) -> Self {
        match motion {
            SwipeMotion::Left => Self::Left,
            SwipeMotion::Right => Self::Right,
            SwipeMotion::Up => Self::Up,
            SwipeMotion::Down => Self::Down,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Number of moves needed so no single move exceeds [`MAX_SUBSTEP_PX`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn substep_count(distance: f64) -> usize {
    (distance / MAX_SUBSTEP_PX).ceil().max(1.0) as usize
}

#[derive(Debug, Clone)]
pub struct World {
    pub width: f64,
    pub height: f64,
    pub player: Rect,
    pub obstacles: Vec<Rect>,
    pub heading: Heading,
    /// World pixels per second.
    pub speed: f64,
}

impl World {
    /// Build the level for `config`: the cube at the world center and up to
    /// `config.obstacles` blocks placed from the seeded generator.
    ///
    /// Blocks never overlap the spawn area. If the generator cannot find
    /// room after a bounded number of attempts the level has fewer blocks.
    #[must_use]
    pub fn generate(config: &GameConfig) -> Self {
        let width = config.world_width;
        let height = config.world_height;
        let player = Rect::centered(Point::new(width * 0.5, height * 0.5), PLAYER_SIZE, PLAYER_SIZE);
        let spawn = player.expanded(SPAWN_CLEARANCE);

        let mut rng = StdRng::seed_from_u64(config.seed);
        let max_size = OBSTACLE_MAX_SIZE.min(width).min(height);
        let mut obstacles = Vec::with_capacity(config.obstacles);
        if max_size >= OBSTACLE_MIN_SIZE {
            let mut attempts = config.obstacles.saturating_mul(PLACEMENT_ATTEMPTS);
            while obstacles.len() < config.obstacles && attempts > 0 {
                attempts -= 1;
                let w = rng.random_range(OBSTACLE_MIN_SIZE..=max_size);
                let h = rng.random_range(OBSTACLE_MIN_SIZE..=max_size);
                let x = rng.random_range(0.0..=width - w);
                let y = rng.random_range(0.0..=height - h);
                let block = Rect::new(x, y, w, h);
                if !block.overlaps(&spawn) {
                    obstacles.push(block);
                }
            }
        }
        if obstacles.len() < config.obstacles {
            log::warn!("placed {} of {} obstacles (seed {})", obstacles.len(), config.obstacles, config.seed);
        }
        log::debug!("generated level seed={} obstacles={}", config.seed, obstacles.len());

        Self { width, height, player, obstacles, heading: Heading::Stopped, speed: config.speed }
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    pub fn stop(&mut self) {
        self.heading = Heading::Stopped;
    }

    /// Advance the cube by `dt` seconds.
    ///
    /// Returns `true` if the cube hit something and stopped.
    pub fn step(&mut self, dt: f64) -> bool {
        if dt <= 0.0 || self.heading == Heading::Stopped {
            return false;
        }
        let (vx, vy) = self.heading.vector();
        let distance = self.speed * dt;
        let substeps = substep_count(distance);
        #[allow(clippy::cast_precision_loss)]
        let stride = distance / substeps as f64;
        for _ in 0..substeps {
            let hit_x = self.move_axis(Axis::X, vx * stride);
            let hit_y = self.move_axis(Axis::Y, vy * stride);
            if hit_x || hit_y {
                self.heading = Heading::Stopped;
                return true;
            }
        }
        false
    }

    fn move_axis(&mut self, axis: Axis, delta: f64) -> bool {
        if delta.abs() < f64::EPSILON {
            return false;
        }
        match axis {
            Axis::X => self.player.x += delta,
            Axis::Y => self.player.y += delta,
        }

        let mut hit = false;
        for block in &self.obstacles {
            if !self.player.overlaps(block) {
                continue;
            }
            hit = true;
            match (axis, delta > 0.0) {
                (Axis::X, true) => self.player.x = block.x - self.player.width,
                (Axis::X, false) => self.player.x = block.right(),
                (Axis::Y, true) => self.player.y = block.y - self.player.height,
                (Axis::Y, false) => self.player.y = block.bottom(),
            }
        }

        let (pos, size, limit) = match axis {
            Axis::X => (&mut self.player.x, self.player.width, self.width),
            Axis::Y => (&mut self.player.y, self.player.height, self.height),
        };
        let clamped = pos.clamp(0.0, (limit - size).max(0.0));
        if (clamped - *pos).abs() > 0.0 {
            *pos = clamped;
            hit = true;
        }
        hit
    }
}
