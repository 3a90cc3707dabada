//! Pointer follower: one lead marker plus a short comet tail.

use super::spring::{Spring, SpringConfig};

pub const MARKER_SIZE: f64 = 32.0;
const HALF_MARKER: f64 = MARKER_SIZE / 2.0;
const OFFSCREEN: f64 = -100.0;

/// Spring per marker, lead first. Each trails the pointer further behind;
/// the tail keeps roughly the lead's damping ratio so it wobbles alike.
const TRAIL_SPRINGS: [SpringConfig; 3] = [
    SpringConfig::new(700.0, 25.0).with_rest_delta(0.1),
    SpringConfig::new(320.0, 17.0).with_rest_delta(0.1),
    SpringConfig::new(160.0, 12.0).with_rest_delta(0.1),
];
/// Peak opacity and scale per marker when the pointer is inside the page.
const TRAIL_WEIGHT: [f64; 3] = [1.0, 0.55, 0.3];

const FADE_SPRING: SpringConfig = SpringConfig::new(400.0, 40.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerFrame {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl MarkerFrame {
    pub fn style(&self) -> String {
        format!(
            "transform: translate3d({:.2}px, {:.2}px, 0) scale({:.3}); opacity: {:.3};",
            self.x, self.y, self.scale, self.opacity
        )
    }
}

#[derive(Clone, Debug)]
struct Marker {
    x: Spring,
    y: Spring,
    weight: f64,
}

#[derive(Clone, Debug)]
pub struct CursorTrail {
    markers: Vec<Marker>,
    presence: Spring,
    seen_pointer: bool,
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorTrail {
    pub fn new() -> Self {
        let markers = TRAIL_SPRINGS
            .into_iter()
            .zip(TRAIL_WEIGHT)
            .map(|(config, weight)| Marker {
                x: Spring::new(config, OFFSCREEN),
                y: Spring::new(config, OFFSCREEN),
                weight,
            })
            .collect();

        Self {
            markers,
            presence: Spring::new(FADE_SPRING.with_rest_delta(0.001), 0.0),
            seen_pointer: false,
        }
    }

    #[cfg(test)]
    fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Records a pointer position in client coordinates. The first sample
    /// places every marker directly under the pointer instead of flying in
    /// from off-screen.
    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64) {
        let x = client_x - HALF_MARKER;
        let y = client_y - HALF_MARKER;

        for marker in &mut self.markers {
            if self.seen_pointer {
                marker.x.set_target(x);
                marker.y.set_target(y);
            } else {
                marker.x.snap_to(x);
                marker.y.snap_to(y);
            }
        }

        if !self.seen_pointer {
            self.seen_pointer = true;
            self.presence.set_target(1.0);
        }
    }

    pub fn pointer_entered(&mut self) {
        self.presence.set_target(1.0);
    }

    pub fn pointer_left(&mut self) {
        self.presence.set_target(0.0);
    }

    /// Advances every spring; returns `true` while anything is still moving.
    pub fn step(&mut self, dt: f64) -> bool {
        let mut moving = !self.presence.step(dt);
        for marker in &mut self.markers {
            let x_rest = marker.x.step(dt);
            let y_rest = marker.y.step(dt);
            moving |= !(x_rest && y_rest);
        }
        moving
    }

    pub fn frames(&self) -> Vec<MarkerFrame> {
        let presence = self.presence.position().clamp(0.0, 1.0);
        self.markers
            .iter()
            .map(|marker| MarkerFrame {
                x: marker.x.position(),
                y: marker.y.position(),
                opacity: presence * marker.weight,
                scale: presence * (0.5 + 0.5 * marker.weight),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(trail: &mut CursorTrail, frames: usize) {
        for _ in 0..frames {
            trail.step(1.0 / 60.0);
        }
    }

    #[test]
    fn first_move_snaps_and_fades_in() {
        let mut trail = CursorTrail::new();
        assert!(trail.frames().iter().all(|frame| frame.opacity == 0.0));

        trail.pointer_moved(200.0, 100.0);
        let frames = trail.frames();
        assert_eq!(frames.len(), 3);
        assert!(frames.iter().all(|frame| frame.x == 184.0 && frame.y == 84.0));

        run(&mut trail, 120);
        let lead = trail.frames()[0];
        assert!((lead.opacity - 1.0).abs() < 1e-9);
        assert!((lead.scale - 1.0).abs() < 1e-9);
    }

    #[test]
    fn tail_lags_behind_the_lead() {
        let mut trail = CursorTrail::new();
        trail.pointer_moved(0.0, 0.0);
        trail.pointer_moved(400.0, 0.0);
        run(&mut trail, 4);

        let frames = trail.frames();
        assert!(frames[0].x > frames[1].x);
        assert!(frames[1].x > frames[2].x);
    }

    #[test]
    fn tail_is_fainter_than_lead() {
        let mut trail = CursorTrail::new();
        trail.pointer_moved(10.0, 10.0);
        run(&mut trail, 120);

        let frames = trail.frames();
        assert!(frames[0].opacity > frames[1].opacity);
        assert!(frames[1].opacity > frames[2].opacity);
    }

    #[test]
    fn leaving_the_page_fades_out_and_reentry_restores() {
        let mut trail = CursorTrail::new();
        trail.pointer_moved(10.0, 10.0);
        run(&mut trail, 120);

        trail.pointer_left();
        run(&mut trail, 120);
        assert!(trail.frames().iter().all(|frame| frame.opacity == 0.0 && frame.scale == 0.0));
        assert!(!trail.step(1.0 / 60.0));

        trail.pointer_entered();
        run(&mut trail, 120);
        assert!(trail.frames()[0].opacity > 0.99);
    }

    #[test]
    fn lead_uses_the_documented_spring() {
        assert_eq!(TRAIL_SPRINGS[0].stiffness, 700.0);
        assert_eq!(TRAIL_SPRINGS[0].damping, 25.0);
        assert!(TRAIL_SPRINGS.windows(2).all(|pair| pair[0].stiffness > pair[1].stiffness));
    }

    #[test]
    fn settled_trail_reports_no_motion() {
        let mut trail = CursorTrail::new();
        trail.pointer_moved(50.0, 60.0);
        run(&mut trail, 240);
        assert!(!trail.step(1.0 / 60.0));
        assert_eq!(trail.marker_count(), 3);
    }
}
