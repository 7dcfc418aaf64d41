//! World constants and their validation
//!
//! Everything the simulation needs to know about the world lives here so
//! tests can run against small synthetic worlds. The defaults reproduce the
//! shipped game exactly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// World geometry and physics constants.
///
/// `world_width`/`world_height` come from the render surface at startup; the
/// rest are fixed gameplay values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// World width in units (canvas pixels)
    pub world_width: f32,
    /// World height in units
    pub world_height: f32,
    /// Height of the ground band at the bottom of the world
    pub ground_height: f32,
    /// Horizontal extent of a pipe column
    pub pipe_width: f32,
    /// Vertical extent of the passable gap
    pub gap_height: f32,
    /// Milliseconds between pipe spawns
    pub spawn_interval_ms: f32,
    /// Horizontal pipe scroll speed, units/s
    pub pipe_speed: f32,
    /// Downward acceleration on the bird, units/s²
    pub gravity: f32,
    /// Velocity set by a flap (negative = upward), units/s
    pub flap_impulse: f32,
    /// Collision radius of the bird
    pub bird_radius: f32,
    /// Fixed horizontal position of the bird
    pub bird_x: f32,
    /// Minimum distance between a gap edge and the playable band's edges
    pub spawn_margin: f32,
}

impl Tuning {
    /// Tuning for a render surface of the given size, with stock gameplay
    /// constants.
    pub fn for_surface(world_width: f32, world_height: f32) -> Self {
        Self {
            world_width,
            world_height,
            ground_height: 100.0,
            pipe_width: 64.0,
            gap_height: 165.0,
            spawn_interval_ms: 1450.0,
            pipe_speed: 150.0,
            gravity: 1080.0,
            flap_impulse: -320.0,
            bird_radius: 15.0,
            bird_x: 110.0,
            spawn_margin: 55.0,
        }
    }

    /// Y of the top of the ground band; contact here is fatal.
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.world_height - self.ground_height
    }

    /// Lowest permitted gap-top offset.
    #[inline]
    pub fn gap_top_min(&self) -> f32 {
        self.spawn_margin
    }

    /// Highest permitted gap-top offset.
    #[inline]
    pub fn gap_top_max(&self) -> f32 {
        self.world_height - self.ground_height - self.gap_height - self.spawn_margin
    }

    /// Check that the configured world can actually host a gap.
    ///
    /// Called once at session construction; a failure here is a fatal
    /// configuration error, never a per-frame condition.
    pub fn validate(&self) -> Result<(), TuningError> {
        for (name, value) in [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("ground_height", self.ground_height),
            ("pipe_width", self.pipe_width),
            ("gap_height", self.gap_height),
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("pipe_speed", self.pipe_speed),
            ("gravity", self.gravity),
            ("bird_radius", self.bird_radius),
        ] {
            if !(value > 0.0) {
                return Err(TuningError::NonPositive { name, value });
            }
        }

        if self.gap_top_max() < self.gap_top_min() {
            return Err(TuningError::EmptyGapRange {
                lo: self.gap_top_min(),
                hi: self.gap_top_max(),
            });
        }

        Ok(())
    }
}

/// Fatal configuration problems caught at startup.
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("no room to place a pipe gap: range [{lo}, {hi}] is empty")]
    EmptyGapRange { lo: f32, hi: f32 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
}
