//! Bird-vs-pipe collision tests
//!
//! The bird collides as its bounding square; a pipe is two axis-aligned
//! columns separated by the gap.

use crate::sim::state::{Bird, Pipe};
use crate::tuning::Tuning;

/// True if the bird's bounding square overlaps the pipe's horizontal span.
#[inline]
fn within_pipe_x(bird: &Bird, pipe: &Pipe, tuning: &Tuning) -> bool {
    bird.right() > pipe.x && bird.left() < pipe.right(tuning)
}

/// Full collision test: horizontal overlap plus contact with either the
/// upper or lower pipe segment.
pub fn bird_hits_pipe(bird: &Bird, pipe: &Pipe, tuning: &Tuning) -> bool {
    if !within_pipe_x(bird, pipe, tuning) {
        return false;
    }
    bird.top() < pipe.gap_top || bird.bottom() > pipe.gap_bottom(tuning)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> Tuning {
        Tuning::for_surface(480.0, 640.0)
    }

    #[test]
    fn test_upper_segment_hit() {
        // gap_top 100, gap 165, radius 15, bird y 90: top = 75 < 100
        let t = tuning();
        let pipe = Pipe::new(100.0, 100.0);
        let bird = Bird::test_at(110.0, 90.0, 15.0);
        assert!(bird_hits_pipe(&bird, &pipe, &t));
    }

    #[test]
    fn test_lower_segment_hit() {
        let t = tuning();
        let pipe = Pipe::new(100.0, 100.0);
        // gap bottom at 265; bird bottom 295 > 265
        let bird = Bird::test_at(110.0, 280.0, 15.0);
        assert!(bird_hits_pipe(&bird, &pipe, &t));
    }

    #[test]
    fn test_through_the_gap() {
        let t = tuning();
        let pipe = Pipe::new(100.0, 100.0);
        // Centered in the gap: top 167.5 > 100, bottom 197.5 < 265
        let bird = Bird::test_at(110.0, 182.5, 15.0);
        assert!(!bird_hits_pipe(&bird, &pipe, &t));
    }

    #[test]
    fn test_no_horizontal_overlap_means_no_hit() {
        let t = tuning();
        // Pipe far to the right of the bird column
        let pipe = Pipe::new(400.0, 100.0);
        let bird = Bird::test_at(110.0, 90.0, 15.0);
        assert!(!bird_hits_pipe(&bird, &pipe, &t));
    }

    #[test]
    fn test_edge_touch_is_not_overlap() {
        let t = tuning();
        // bird.right == pipe.x: strict inequality, no overlap yet
        let bird = Bird::test_at(110.0, 90.0, 15.0);
        let pipe = Pipe::new(bird.right(), 100.0);
        assert!(!bird_hits_pipe(&bird, &pipe, &t));
    }
}
