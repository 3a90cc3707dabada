//! Page scroll progress, its smoothed bar and the decorations riding on it.

use super::easing::{keyframes, EASE_IN_OUT};
use super::spring::{Spring, SpringConfig};

pub const SHOW_ABOVE: f64 = 0.1;
pub const HIDE_FROM: f64 = 0.95;

pub const BAR_SPRING: SpringConfig = SpringConfig::new(100.0, 30.0).with_rest_delta(0.001);

const HIGHLIGHT_PERIOD_SECS: f64 = 3.0;
const HIGHLIGHT_TRACK: [f64; 3] = [0.0, 100.0, 0.0];

pub const PARTICLE_COUNT: usize = 5;
const PARTICLE_PERIOD_SECS: f64 = 4.0;
const PARTICLE_STAGGER_SECS: f64 = 0.5;
const PARTICLE_FADE: [f64; 3] = [0.0, 1.0, 0.0];

/// Fraction of the scrollable distance already travelled, in `[0, 1]`.
/// A page shorter than the viewport has nothing to travel and reports 0.
pub fn scroll_fraction(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// The bar stays hidden at the very top and the very bottom of the page.
pub fn is_visible(progress: f64) -> bool {
    progress > SHOW_ABOVE && progress < HIDE_FROM
}

/// Horizontal offset of the sweeping highlight, as a percentage of the bar.
pub fn highlight_offset(elapsed_secs: f64) -> f64 {
    keyframes(&HIGHLIGHT_TRACK, elapsed_secs / HIGHLIGHT_PERIOD_SECS, &EASE_IN_OUT)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleFrame {
    pub left_percent: f64,
    pub x: f64,
    pub opacity: f64,
}

/// Particle `index` drifts across the viewport once per period after its
/// staggered start, fading in and back out on the way.
pub fn particle_frame(index: usize, elapsed_secs: f64, viewport_width: f64) -> ParticleFrame {
    let left_percent = index as f64 * 20.0;
    let local = elapsed_secs - index as f64 * PARTICLE_STAGGER_SECS;
    if local < 0.0 {
        return ParticleFrame {
            left_percent,
            x: 0.0,
            opacity: 0.0,
        };
    }

    let cycle = (local / PARTICLE_PERIOD_SECS).rem_euclid(1.0);
    ParticleFrame {
        left_percent,
        x: EASE_IN_OUT.solve(cycle) * viewport_width.max(0.0),
        opacity: keyframes(&PARTICLE_FADE, cycle, &EASE_IN_OUT),
    }
}

/// Raw progress plus the spring that the rendered bar follows.
#[derive(Clone, Debug)]
pub struct ScrollProgress {
    raw: f64,
    bar: Spring,
}

impl Default for ScrollProgress {
    fn default() -> Self {
        Self {
            raw: 0.0,
            bar: Spring::new(BAR_SPRING, 0.0),
        }
    }
}

impl ScrollProgress {
    pub fn update(&mut self, raw: f64) {
        self.raw = raw.clamp(0.0, 1.0);
        self.bar.set_target(self.raw);
    }

    pub fn raw(&self) -> f64 {
        self.raw
    }

    pub fn bar_scale(&self) -> f64 {
        self.bar.position().clamp(0.0, 1.0)
    }

    pub fn visible(&self) -> bool {
        is_visible(self.raw)
    }

    pub fn step(&mut self, dt: f64) -> bool {
        self.bar.step(dt)
    }
}
