//! One-shot entrance reveal shared by sections, cards and staggered text.

use super::easing::{FLOW, OVERSHOOT};

/// Hover transition length for cards; long enough for the overshoot to read.
const CARD_HOVER_SECS: f64 = 0.35;

/// Whether a wrapped subtree has been seen yet. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealLatch {
    #[default]
    Pending,
    Revealed,
}

impl RevealLatch {
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    /// Next state after an intersection report. A revealed latch ignores
    /// every later report, including "left the viewport".
    #[must_use]
    pub fn observe(self, intersecting: bool) -> Self {
        match self {
            Self::Revealed => Self::Revealed,
            Self::Pending if intersecting => Self::Revealed,
            Self::Pending => Self::Pending,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealVariant {
    /// Full-width block that rises into place.
    Section,
    /// Tile that grows and swings round on its vertical axis.
    Card,
}

impl RevealVariant {
    pub fn duration_secs(self) -> f64 {
        match self {
            Self::Section => 0.8,
            Self::Card => 0.6,
        }
    }

    /// Sections wait until they are 100px inside the viewport.
    pub fn root_margin(self) -> &'static str {
        match self {
            Self::Section => "0px 0px -100px 0px",
            Self::Card => "0px",
        }
    }

    /// Matching pixel inset for the initial measurement.
    pub fn bottom_inset(self) -> f64 {
        match self {
            Self::Section => 100.0,
            Self::Card => 0.0,
        }
    }

    fn transform(self, latch: RevealLatch, hovered: bool) -> &'static str {
        match (self, latch) {
            (Self::Section, RevealLatch::Pending) => "translateY(100px)",
            (Self::Section, RevealLatch::Revealed) => "translateY(0)",
            (Self::Card, RevealLatch::Pending) => "perspective(900px) scale(0.8) rotateY(-15deg)",
            (Self::Card, RevealLatch::Revealed) if hovered => {
                "perspective(900px) scale(1.05) rotateY(5deg)"
            }
            (Self::Card, RevealLatch::Revealed) => "perspective(900px) scale(1) rotateY(0deg)",
        }
    }

    /// Inline style for the wrapper. Hover only changes the card transform
    /// and only once the card is revealed; the entrance delay is dropped
    /// for hover so the tilt responds immediately.
    pub fn style(self, latch: RevealLatch, delay_secs: f64, hovered: bool) -> String {
        let opacity = if latch.is_revealed() { 1 } else { 0 };
        let transform = self.transform(latch, hovered);
        let hovering = hovered && latch.is_revealed() && self == Self::Card;

        let transition = if hovering {
            format!("transform {CARD_HOVER_SECS}s {}", OVERSHOOT.css())
        } else {
            let duration = self.duration_secs();
            let delay = delay_secs.max(0.0);
            let curve = FLOW.css();
            format!("opacity {duration}s {curve} {delay}s, transform {duration}s {curve} {delay}s")
        };

        format!("opacity: {opacity}; transform: {transform}; transition: {transition};")
    }
}

/// True when a box spanning `top..bottom` (client coordinates) overlaps
/// the viewport shrunk by `bottom_inset` pixels.
pub fn in_viewport(top: f64, bottom: f64, viewport_height: f64, bottom_inset: f64) -> bool {
    let visible_bottom = (viewport_height - bottom_inset).max(0.0);
    bottom > 0.0 && top < visible_bottom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_is_one_way() {
        let mut latch = RevealLatch::default();
        assert_eq!(latch, RevealLatch::Pending);

        latch = latch.observe(false);
        assert_eq!(latch, RevealLatch::Pending);

        latch = latch.observe(true);
        assert!(latch.is_revealed());

        for intersecting in [false, true, false, false, true] {
            latch = latch.observe(intersecting);
            assert_eq!(latch, RevealLatch::Revealed);
        }
    }

    #[test]
    fn hidden_section_is_transparent_and_offset() {
        let style = RevealVariant::Section.style(RevealLatch::Pending, 0.0, false);
        assert!(style.starts_with("opacity: 0;"));
        assert!(style.contains("translateY(100px)"));
    }

    #[test]
    fn revealed_section_carries_delay_and_curve() {
        let style = RevealVariant::Section.style(RevealLatch::Revealed, 0.3, false);
        assert!(style.contains("opacity: 1;"));
        assert!(style.contains("opacity 0.8s cubic-bezier(0.25, 0.25, 0, 1) 0.3s"));
    }

    #[test]
    fn card_hover_applies_only_after_reveal() {
        let pending = RevealVariant::Card.style(RevealLatch::Pending, 0.0, true);
        assert!(pending.contains("scale(0.8)"));

        let hovered = RevealVariant::Card.style(RevealLatch::Revealed, 0.4, true);
        assert!(hovered.contains("scale(1.05) rotateY(5deg)"));
        assert!(!hovered.contains("0.4s"));

        let resting = RevealVariant::Card.style(RevealLatch::Revealed, 0.0, false);
        assert!(resting.contains("scale(1) rotateY(0deg)"));
    }

    #[test]
    fn sections_ignore_hover() {
        let plain = RevealVariant::Section.style(RevealLatch::Revealed, 0.0, false);
        let hovered = RevealVariant::Section.style(RevealLatch::Revealed, 0.0, true);
        assert_eq!(plain, hovered);
    }

    #[test]
    fn element_above_the_fold_counts_as_visible() {
        assert!(in_viewport(0.0, 400.0, 800.0, 100.0));
        assert!(in_viewport(-200.0, 10.0, 800.0, 0.0));
    }

    #[test]
    fn element_inside_the_inset_is_not_yet_visible() {
        assert!(!in_viewport(750.0, 1_000.0, 800.0, 100.0));
        assert!(in_viewport(750.0, 1_000.0, 800.0, 0.0));
        assert!(!in_viewport(-400.0, -1.0, 800.0, 0.0));
    }
}
