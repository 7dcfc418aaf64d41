//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Seeded RNG only (injected at construction)
//! - Stable pipe iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod state;
pub mod tick;

pub use collision::bird_hits_pipe;
pub use field::{FieldTick, PipeField};
pub use state::{Activation, Bird, Frame, GameEvent, GamePhase, Pipe, Session};
pub use tick::{activate, tick};
