//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::field::PipeField;
use crate::tuning::{Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first activate; bird hangs at its spawn point
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended; frozen until an activate restarts
    GameOver,
}

/// The player's bird.
///
/// `x` and `radius` are fixed for the life of the session; only `y` and `vy`
/// change, and only inside the simulation tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bird {
    pos: Vec2,
    vy: f32,
    radius: f32,
}

impl Bird {
    /// Bird at its spawn point: fixed column, vertical center of the world.
    pub(super) fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.bird_x, tuning.world_height / 2.0),
            vy: 0.0,
            radius: tuning.bird_radius,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn vy(&self) -> f32 {
        self.vy
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Edges of the bird's bounding square.
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Gravity integration for one tick.
    pub(super) fn integrate(&mut self, gravity: f32, dt: f32) {
        self.vy += gravity * dt;
        self.pos.y += self.vy * dt;
    }

    /// Ceiling stop: the top of the world arrests the bird without ending
    /// the run. Only the ground is fatal.
    pub(super) fn clamp_to_ceiling(&mut self) {
        if self.top() <= 0.0 {
            self.pos.y = self.radius;
            self.vy = 0.0;
        }
    }

    /// Rest the bird on the ground line (the fatal contact pose).
    pub(super) fn settle_on(&mut self, ground_line: f32) {
        self.pos.y = ground_line - self.radius;
    }

    /// Overwrite vertical velocity with the flap impulse. No accumulation,
    /// no cooldown; a flap every tick is legal.
    pub(super) fn flap(&mut self, impulse: f32) {
        self.vy = impulse;
    }

    /// Bird at an arbitrary position, for geometry tests.
    #[cfg(test)]
    pub(crate) fn test_at(x: f32, y: f32, radius: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vy: 0.0,
            radius,
        }
    }
}

/// A pipe pair: two blocking columns with a passable gap between them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge, world units
    pub x: f32,
    /// Distance from the world top to the top of the passable gap
    pub gap_top: f32,
    /// Whether this pipe has already paid out its score point
    pub(super) scored: bool,
}

impl Pipe {
    pub(super) fn new(x: f32, gap_top: f32) -> Self {
        Self {
            x,
            gap_top,
            scored: false,
        }
    }

    #[inline]
    pub fn right(&self, tuning: &Tuning) -> f32 {
        self.x + tuning.pipe_width
    }

    /// Y of the top of the lower pipe segment.
    #[inline]
    pub fn gap_bottom(&self, tuning: &Tuning) -> f32 {
        self.gap_top + tuning.gap_height
    }

    #[inline]
    pub fn scored(&self) -> bool {
        self.scored
    }
}

/// Events surfaced by a simulation tick for the shell to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The bird cleared one or more pipes this tick.
    Scored { total: u32 },
    /// The run ended; `best` is already maximized and ready to persist.
    GameOver { score: u32, best: u32 },
}

/// What an activate signal did, so the shell can sync the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Ready -> Playing
    Started,
    /// Impulse applied mid-run
    Flapped,
    /// GameOver -> full reset -> Playing, skipping the ready prompt
    Restarted,
}

/// One playthrough's complete mutable state.
///
/// Owns exactly one [`Bird`] and one [`PipeField`]; everything outside the
/// sim reads it through accessors or the [`Frame`] snapshot.
#[derive(Debug)]
pub struct Session {
    pub(super) phase: GamePhase,
    pub(super) score: u32,
    pub(super) best: u32,
    pub(super) bird: Bird,
    pub(super) field: PipeField,
    pub(super) tuning: Tuning,
}

impl Session {
    /// Build a session, failing fast on an unusable configuration.
    ///
    /// `best` is whatever the score store handed back at startup; `seed`
    /// drives pipe placement (pass a clock-derived seed in production, a
    /// fixed one in tests).
    pub fn new(tuning: Tuning, seed: u64, best: u32) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            phase: GamePhase::Ready,
            score: 0,
            best,
            bird: Bird::spawn(&tuning),
            field: PipeField::new(seed),
            tuning,
        })
    }

    /// Back to the ready state: fresh bird, empty field, zero score.
    /// The best score and the RNG stream survive.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Ready;
        self.score = 0;
        self.bird = Bird::spawn(&self.tuning);
        self.field.reset();
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn best(&self) -> u32 {
        self.best
    }

    #[inline]
    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    #[inline]
    pub fn pipes(&self) -> &[Pipe] {
        self.field.pipes()
    }

    #[inline]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Read-only snapshot for the renderer.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            phase: self.phase,
            score: self.score,
            best: self.best,
            bird: &self.bird,
            pipes: self.field.pipes(),
            tuning: &self.tuning,
        }
    }
}

/// Immutable per-frame view of the simulation, consumed by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub phase: GamePhase,
    pub score: u32,
    pub best: u32,
    pub bird: &'a Bird,
    pub pipes: &'a [Pipe],
    pub tuning: &'a Tuning,
}
