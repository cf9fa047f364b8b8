//! Game configuration from the page URL.
//!
//! `?seed=7&obstacles=60&width=3000&height=1500&speed=300`. Missing,
//! unparsable, or out-of-range values fall back to their defaults so a bad
//! link still starts a game.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_OBSTACLES, DEFAULT_SEED, DEFAULT_SPEED, DEFAULT_WORLD_HEIGHT, DEFAULT_WORLD_WIDTH, MAX_OBSTACLES,
    MIN_WORLD_SIZE,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Level seed; the same seed always produces the same level.
    pub seed: u64,
    pub obstacles: usize,
    pub world_width: f64,
    pub world_height: f64,
    /// Cube speed in world pixels per second.
    pub speed: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            obstacles: DEFAULT_OBSTACLES,
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            speed: DEFAULT_SPEED,
        }
    }
}

impl GameConfig {
    /// Parse a URL query string, with or without the leading `?`.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let pairs: Vec<(&str, &str)> = query
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .collect();
        let defaults = Self::default();
        Self {
            seed: query_parse(&pairs, "seed", defaults.seed),
            obstacles: query_parse(&pairs, "obstacles", defaults.obstacles),
            world_width: query_parse(&pairs, "width", defaults.world_width),
            world_height: query_parse(&pairs, "height", defaults.world_height),
            speed: query_parse(&pairs, "speed", defaults.speed),
        }
        .sanitized()
    }

    /// Replace out-of-range values with defaults or limits.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let edge = |value: f64, default: f64| {
            if value.is_finite() { value.max(MIN_WORLD_SIZE) } else { default }
        };
        Self {
            seed: self.seed,
            obstacles: self.obstacles.min(MAX_OBSTACLES),
            world_width: edge(self.world_width, defaults.world_width),
            world_height: edge(self.world_height, defaults.world_height),
            speed: if self.speed.is_finite() && self.speed > 0.0 { self.speed } else { defaults.speed },
        }
    }

    /// The same configuration with the following seed.
    #[must_use]
    pub fn next_level(self) -> Self {
        Self { seed: self.seed.wrapping_add(1), ..self }
    }
}

fn query_parse<T>(pairs: &[(&str, &str)], key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    let Some((_, raw)) = pairs.iter().rev().find(|(k, _)| *k == key) else {
        return default;
    };
    match raw.parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            log::warn!("ignoring invalid query value {key}={raw}");
            default
        }
    }
}
