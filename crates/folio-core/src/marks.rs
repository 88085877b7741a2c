//! Decorative hover marks
//!
//! Generates the ephemeral star positions shown while a control is hovered.
//! Positions are uniform in percent-of-container units and are drawn fresh
//! on every hover render; successive sets are unrelated.

use rand::Rng;

/// Number of marks shown per hover overlay.
pub const MARK_COUNT: usize = 6;
/// Animation start offset between consecutive marks.
pub const MARK_STAGGER_SECS: f64 = 0.2;
/// Duration of one pulse cycle.
pub const MARK_PULSE_SECS: f64 = 1.5;

/// One randomly placed decorative mark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mark {
    /// Horizontal position, percent of the container width.
    pub left_pct: f64,
    /// Vertical position, percent of the container height.
    pub top_pct: f64,
    /// Animation start offset in seconds.
    pub delay_secs: f64,
}

impl Mark {
    /// Inline `style` attribute value positioning and timing this mark.
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.1}s; animation-duration: {}s;",
            self.left_pct, self.top_pct, self.delay_secs, MARK_PULSE_SECS
        )
    }
}

/// Draws a fresh set of `count` marks with staggered animation offsets.
pub fn scatter(count: usize) -> Vec<Mark> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| Mark {
            left_pct: rng.gen_range(0.0..=100.0),
            top_pct: rng.gen_range(0.0..=100.0),
            delay_secs: i as f64 * MARK_STAGGER_SECS,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_count() {
        assert_eq!(scatter(MARK_COUNT).len(), 6);
        assert_eq!(scatter(1).len(), 1);
        assert!(scatter(0).is_empty());
    }

    #[test]
    fn test_positions_stay_in_container() {
        for _ in 0..500 {
            for mark in scatter(MARK_COUNT) {
                assert!((0.0..=100.0).contains(&mark.left_pct));
                assert!((0.0..=100.0).contains(&mark.top_pct));
            }
        }
    }

    #[test]
    fn test_delays_are_staggered_by_index() {
        for (i, mark) in scatter(MARK_COUNT).iter().enumerate() {
            assert!((mark.delay_secs - i as f64 * MARK_STAGGER_SECS).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_style_renders_position_and_timing() {
        let mark = Mark {
            left_pct: 12.5,
            top_pct: 80.0,
            delay_secs: 0.4,
        };
        let style = mark.style();
        assert!(style.contains("left: 12.50%"));
        assert!(style.contains("top: 80.00%"));
        assert!(style.contains("animation-delay: 0.4s"));
        assert!(style.contains("animation-duration: 1.5s"));
    }
}
