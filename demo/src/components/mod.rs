//! Reusable UI component modules.

pub mod game_host;
pub mod playground;
