//! Colour-cycling glow painted under hovered content.

use super::easing::{keyframes, EASE_IN_OUT};

pub const GLOW_CYCLE_SECS: f64 = 2.0;
pub const GLOW_SCALE: f64 = 1.02;

/// Gradient direction keyframes, in degrees, for one cycle.
const GLOW_ANGLES: [f64; 4] = [90.0, 180.0, 270.0, 90.0];

pub fn glow_angle(elapsed_secs: f64) -> f64 {
    keyframes(&GLOW_ANGLES, elapsed_secs / GLOW_CYCLE_SECS, &EASE_IN_OUT)
}

/// Overlay style for `elapsed_secs` into the hover. `None` means the pointer
/// is outside and the overlay resets to transparent straight away.
pub fn glow_style(elapsed_secs: Option<f64>) -> String {
    match elapsed_secs {
        Some(elapsed) => format!(
            "opacity: 1; background: linear-gradient({:.1}deg, rgba(59,130,246,0.05) 0%, \
             rgba(147,51,234,0.05) 50%, rgba(6,182,212,0.05) 100%);",
            glow_angle(elapsed)
        ),
        None => "opacity: 0;".to_string(),
    }
}

pub fn wrapper_style(hovered: bool) -> String {
    let scale = if hovered { GLOW_SCALE } else { 1.0 };
    format!("transform: scale({scale});")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn angle_cycles_through_keyframes() {
        assert_abs_diff_eq!(glow_angle(0.0), 90.0);
        assert_abs_diff_eq!(glow_angle(GLOW_CYCLE_SECS / 3.0), 180.0, epsilon = 1e-6);
        assert_abs_diff_eq!(glow_angle(GLOW_CYCLE_SECS * 2.0 / 3.0), 270.0, epsilon = 1e-6);
        assert_abs_diff_eq!(glow_angle(GLOW_CYCLE_SECS), 90.0);
    }

    #[test]
    fn leaving_resets_immediately() {
        assert_eq!(glow_style(None), "opacity: 0;");
        assert!(glow_style(Some(0.5)).starts_with("opacity: 1;"));
    }

    #[test]
    fn hovered_wrapper_scales_up() {
        assert_eq!(wrapper_style(true), "transform: scale(1.02);");
        assert_eq!(wrapper_style(false), "transform: scale(1);");
    }
}
