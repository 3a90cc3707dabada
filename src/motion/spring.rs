//! Damped harmonic spring used for every "follow a moving target" motion:
//! the cursor trail, the scroll progress bar and the fade of the cursor.

/// Largest integration step. Stiff springs (k = 700) stay stable below this.
const MAX_SUBSTEP: f64 = 1.0 / 240.0;
/// Frames longer than this (background tab, debugger pause) are truncated
/// so the spring does not leap.
const MAX_FRAME: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }

    /// Damping ratio of exactly one: fastest approach without overshoot.
    #[cfg(test)]
    pub fn critically_damped(stiffness: f64) -> Self {
        Self::new(stiffness, 2.0 * stiffness.max(0.0).sqrt())
    }

    pub const fn with_rest_delta(mut self, rest_delta: f64) -> Self {
        self.rest_delta = rest_delta;
        self.rest_speed = rest_delta;
        self
    }

    #[cfg(test)]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jumps to `value` with no motion in flight.
    pub fn snap_to(&mut self, value: f64) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.position).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
    }

    /// Advances by `dt` seconds. Returns `true` once the spring has settled,
    /// at which point the position is exactly the target.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
            return true;
        }

        let mut remaining = dt.clamp(0.0, MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let displacement = self.position - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn settle(spring: &mut Spring, max_seconds: f64) -> f64 {
        let dt = 1.0 / 60.0;
        let mut elapsed = 0.0;
        while elapsed < max_seconds {
            if spring.step(dt) {
                return elapsed;
            }
            elapsed += dt;
        }
        panic!("spring did not settle in {max_seconds}s: {spring:?}");
    }

    #[test]
    fn critically_damped_has_unit_ratio() {
        let config = SpringConfig::critically_damped(700.0);
        assert_abs_diff_eq!(config.damping_ratio(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn converges_to_target_and_snaps() {
        let mut spring = Spring::new(SpringConfig::new(100.0, 30.0).with_rest_delta(0.001), 0.0);
        spring.set_target(1.0);
        settle(&mut spring, 5.0);
        assert_eq!(spring.position(), 1.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn critically_damped_never_overshoots() {
        let mut spring = Spring::new(SpringConfig::critically_damped(320.0), 0.0);
        spring.set_target(500.0);
        for _ in 0..600 {
            spring.step(1.0 / 60.0);
            assert!(spring.position() <= 500.0 + 1e-6);
        }
    }

    #[test]
    fn stiffer_spring_leads_softer_spring() {
        let mut fast = Spring::new(SpringConfig::critically_damped(700.0), 0.0);
        let mut slow = Spring::new(SpringConfig::critically_damped(160.0), 0.0);
        fast.set_target(100.0);
        slow.set_target(100.0);
        for _ in 0..6 {
            fast.step(1.0 / 60.0);
            slow.step(1.0 / 60.0);
        }
        assert!(fast.position() > slow.position());
    }

    #[test]
    fn long_frames_are_truncated() {
        let mut spring = Spring::new(SpringConfig::critically_damped(100.0), 0.0);
        spring.set_target(1.0);
        let mut reference = spring.clone();
        spring.step(30.0);
        reference.step(MAX_FRAME);
        assert_abs_diff_eq!(spring.position(), reference.position(), epsilon = 1e-12);
    }

    #[test]
    fn resting_spring_reports_rest_immediately() {
        let mut spring = Spring::new(SpringConfig::new(100.0, 30.0), 4.0);
        assert!(spring.step(1.0 / 60.0));
        spring.snap_to(9.0);
        assert!(spring.is_at_rest());
        assert_eq!(spring.target(), 9.0);
    }
}
