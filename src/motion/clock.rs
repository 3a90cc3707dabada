//! Turns `requestAnimationFrame` timestamps into per-frame steps.

/// Longest step handed to a model in one frame. Background tabs can stall
/// for seconds; springs should resume, not jump.
pub const MAX_FRAME_SECS: f64 = 0.1;

const FIRST_FRAME_SECS: f64 = 1.0 / 60.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous frame, clamped to [`MAX_FRAME_SECS`].
    pub dt: f64,
    /// Seconds since the clock first ticked.
    pub elapsed: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    origin_ms: Option<f64>,
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn advance(&mut self, now_ms: f64) -> FrameTime {
        let origin = *self.origin_ms.get_or_insert(now_ms);
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1_000.0).clamp(0.0, MAX_FRAME_SECS),
            None => FIRST_FRAME_SECS,
        };
        self.last_ms = Some(now_ms);

        FrameTime {
            dt,
            elapsed: ((now_ms - origin) / 1_000.0).max(0.0),
        }
    }

    /// Forgets the previous frame so the gap while parked is not replayed.
    /// Elapsed time keeps counting from the original start.
    pub fn park(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn first_frame_uses_a_nominal_step() {
        let mut clock = FrameClock::default();
        let frame = clock.advance(5_000.0);
        assert_abs_diff_eq!(frame.dt, 1.0 / 60.0);
        assert_eq!(frame.elapsed, 0.0);
    }

    #[test]
    fn steps_follow_timestamps_and_clamp_stalls() {
        let mut clock = FrameClock::default();
        clock.advance(0.0);
        assert_abs_diff_eq!(clock.advance(16.0).dt, 0.016);

        let stalled = clock.advance(4_016.0);
        assert_eq!(stalled.dt, MAX_FRAME_SECS);
        assert_abs_diff_eq!(stalled.elapsed, 4.016);
    }

    #[test]
    fn parking_skips_the_gap_but_not_elapsed_time() {
        let mut clock = FrameClock::default();
        clock.advance(0.0);
        clock.advance(16.0);
        clock.park();

        let resumed = clock.advance(10_000.0);
        assert_abs_diff_eq!(resumed.dt, 1.0 / 60.0);
        assert_abs_diff_eq!(resumed.elapsed, 10.0);
    }
}
