//! Skyflap - a one-button gravity-and-gap arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `render`: Canvas-2D rendering over a read-only frame snapshot
//! - `input`: Key/pointer normalization into a single activate signal
//! - `score`: Best-score persistence (LocalStorage on web)
//! - `overlay`: Start/game-over prompt surface
//! - `tuning`: Validated world constants

pub mod clock;
pub mod input;
pub mod overlay;
pub mod render;
pub mod score;
pub mod sim;
pub mod tuning;

pub use clock::FrameClock;
pub use tuning::{Tuning, TuningError};

/// Frame-driver constants
pub mod consts {
    /// Maximum elapsed time fed to physics per frame, in seconds.
    ///
    /// A stalled tab can hand the frame callback a multi-second gap; anything
    /// above this cap is discarded so the bird cannot tunnel through a pipe
    /// or the ground in a single step.
    pub const MAX_FRAME_DT: f32 = 0.032;

    /// Horizontal lead past the right edge where new pipes spawn.
    pub const SPAWN_LEAD: f32 = 20.0;

    /// Pipes are pruned once their right edge is this far past the left edge.
    pub const PRUNE_SLACK: f32 = 5.0;
}
