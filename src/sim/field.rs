//! Pipe field: spawning, scrolling, scoring, pruning
//!
//! The field owns the pipe collection in spawn order (left-to-right on
//! screen), the spawn-interval accumulator, and the seeded RNG that places
//! gaps. Iteration order is stable so runs with the same seed and input
//! replay identically.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{PRUNE_SLACK, SPAWN_LEAD};
use crate::sim::collision::bird_hits_pipe;
use crate::sim::state::{Bird, Pipe};
use crate::tuning::Tuning;

/// What one field advance produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldTick {
    /// Pipes newly passed this tick (each pays exactly one point, once)
    pub cleared: u32,
    /// Whether the bird touched any pipe this tick
    pub collided: bool,
}

/// The scrolling obstacle course.
#[derive(Debug)]
pub struct PipeField {
    pipes: Vec<Pipe>,
    spawn_timer_ms: f32,
    rng: Pcg32,
}

impl PipeField {
    pub fn new(seed: u64) -> Self {
        Self {
            pipes: Vec::new(),
            spawn_timer_ms: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    #[inline]
    pub fn spawn_timer_ms(&self) -> f32 {
        self.spawn_timer_ms
    }

    /// Empty the course and restart the spawn interval. The RNG stream
    /// continues; it is reseeded only with a new session.
    pub(super) fn reset(&mut self) {
        self.pipes.clear();
        self.spawn_timer_ms = 0.0;
    }

    /// Push a pipe at the right-edge spawn column with a uniformly random
    /// gap placement. The valid range is non-empty by construction
    /// ([`Tuning::validate`] rejects configurations where it is not).
    fn spawn(&mut self, tuning: &Tuning) {
        let gap_top = self
            .rng
            .random_range(tuning.gap_top_min()..=tuning.gap_top_max());
        self.pipes
            .push(Pipe::new(tuning.world_width + SPAWN_LEAD, gap_top));
    }

    /// Advance the course by `dt` seconds: maybe spawn, scroll every pipe,
    /// collect score credits, test collisions, prune off-screen pipes.
    ///
    /// A pipe spawned this tick scrolls this tick too. Every pipe is
    /// collision-tested even after a hit is found; one hit is enough to end
    /// the run and further hits change nothing.
    pub(super) fn advance(&mut self, dt: f32, bird: &Bird, tuning: &Tuning) -> FieldTick {
        self.spawn_timer_ms += dt * 1000.0;
        if self.spawn_timer_ms >= tuning.spawn_interval_ms {
            // Drift past the interval is dropped, not carried over.
            self.spawn_timer_ms = 0.0;
            self.spawn(tuning);
        }

        let dx = tuning.pipe_speed * dt;
        let mut out = FieldTick::default();

        for pipe in &mut self.pipes {
            pipe.x -= dx;

            if !pipe.scored && pipe.right(tuning) < bird.x() {
                pipe.scored = true;
                out.cleared += 1;
            }

            if bird_hits_pipe(bird, pipe, tuning) {
                out.collided = true;
            }
        }

        self.pipes
            .retain(|pipe| pipe.right(tuning) > -PRUNE_SLACK);

        out
    }
}
