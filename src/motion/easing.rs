//! Cubic-bezier timing curves, matching the CSS `cubic-bezier()` function.

/// Entrance curve shared by every reveal: fast start, long settle.
pub const FLOW: CubicBezier = CubicBezier::new(0.25, 0.25, 0.0, 1.0);

/// Symmetric curve used by looping decorations.
pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

/// Slight overshoot, used where a short spring would otherwise be simulated
/// for a hover that CSS can finish on its own.
pub const OVERSHOOT: CubicBezier = CubicBezier::new(0.34, 1.56, 0.64, 1.0);

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const EPSILON: f64 = 1e-7;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }

    /// Eased progress for linear progress `t`, clamped to `[0, 1]` on input.
    pub fn solve(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }

        let u = self.parameter_for_x(t);
        sample(self.y1, self.y2, u)
    }

    fn parameter_for_x(&self, x: f64) -> f64 {
        let mut u = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = sample(self.x1, self.x2, u) - x;
            if error.abs() < EPSILON {
                return u;
            }
            let slope = derivative(self.x1, self.x2, u);
            if slope.abs() < EPSILON {
                break;
            }
            u -= error / slope;
        }

        let (mut low, mut high) = (0.0, 1.0);
        u = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = sample(self.x1, self.x2, u);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                low = u;
            } else {
                high = u;
            }
            u = (low + high) / 2.0;
        }
        u
    }
}

fn sample(p1: f64, p2: f64, u: f64) -> f64 {
    let inv = 1.0 - u;
    3.0 * inv * inv * u * p1 + 3.0 * inv * u * u * p2 + u * u * u
}

fn derivative(p1: f64, p2: f64, u: f64) -> f64 {
    let inv = 1.0 - u;
    3.0 * inv * inv * p1 + 6.0 * inv * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}

/// Interpolates across evenly spaced keyframes, easing each segment.
///
/// `progress` is the fraction of one full cycle; values outside `[0, 1]` wrap.
pub fn keyframes(values: &[f64], progress: f64, curve: &CubicBezier) -> f64 {
    match values {
        [] => 0.0,
        [only] => *only,
        _ => {
            let progress = progress.rem_euclid(1.0);
            let segments = (values.len() - 1) as f64;
            let scaled = progress * segments;
            let index = (scaled.floor() as usize).min(values.len() - 2);
            let local = curve.solve(scaled - index as f64);
            values[index] + (values[index + 1] - values[index]) * local
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn endpoints_are_fixed() {
        for curve in [FLOW, EASE_IN_OUT, OVERSHOOT] {
            assert_eq!(curve.solve(0.0), 0.0);
            assert_eq!(curve.solve(1.0), 1.0);
            assert_eq!(curve.solve(-3.0), 0.0);
            assert_eq!(curve.solve(7.0), 1.0);
        }
    }

    #[test]
    fn flow_curve_is_monotone() {
        let mut previous = 0.0;
        for step in 1..=200 {
            let value = FLOW.solve(f64::from(step) / 200.0);
            assert!(value >= previous - 1e-9, "dipped at step {step}");
            previous = value;
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        assert_abs_diff_eq!(EASE_IN_OUT.solve(0.5), 0.5, epsilon = 1e-4);
        let early = EASE_IN_OUT.solve(0.2);
        let late = EASE_IN_OUT.solve(0.8);
        assert_abs_diff_eq!(early + late, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn overshoot_exceeds_target_mid_flight() {
        let peak = (1..100)
            .map(|step| OVERSHOOT.solve(f64::from(step) / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn css_output_matches_browser_syntax() {
        assert_eq!(FLOW.css(), "cubic-bezier(0.25, 0.25, 0, 1)");
    }

    #[test]
    fn keyframes_pass_through_each_value() {
        let values = [0.0, 100.0, 0.0];
        assert_abs_diff_eq!(keyframes(&values, 0.0, &EASE_IN_OUT), 0.0);
        assert_abs_diff_eq!(keyframes(&values, 0.5, &EASE_IN_OUT), 100.0);
        assert_abs_diff_eq!(keyframes(&values, 1.0, &EASE_IN_OUT), 0.0);
        assert_abs_diff_eq!(keyframes(&values, 1.5, &EASE_IN_OUT), 100.0);
        assert_eq!(keyframes(&[], 0.3, &FLOW), 0.0);
        assert_eq!(keyframes(&[4.0], 0.3, &FLOW), 4.0);
    }
}
