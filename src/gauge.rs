//! Score gauge maths.
//!
//! [`render`] maps a score and its maximum to the arc sweep and colour band of
//! the donut gauge. It is pure and total: a non-positive or non-finite maximum
//! yields the neutral band with no arc instead of dividing by zero.

use std::time::{Duration, Instant};

/// Severity tier derived from `value / max_value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    /// No meaningful ratio (maximum not positive)
    Neutral,
    /// `p <= 0.25`
    Poor,
    /// `0.25 < p <= 0.50`
    Fair,
    /// `0.50 < p <= 0.75`
    Good,
    /// `p > 0.75`
    Excellent,
}

impl ScoreBand {
    /// Band for a score ratio.
    pub fn from_ratio(p: f64) -> Self {
        if p <= 0.25 {
            ScoreBand::Poor
        } else if p <= 0.50 {
            ScoreBand::Fair
        } else if p <= 0.75 {
            ScoreBand::Good
        } else {
            ScoreBand::Excellent
        }
    }
}

/// Arc sweep and band for one score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeReading {
    /// Degrees of arc, clockwise from 12 o'clock
    pub sweep_angle: f64,
    pub band: ScoreBand,
}

impl GaugeReading {
    const NEUTRAL: GaugeReading = GaugeReading {
        sweep_angle: 0.0,
        band: ScoreBand::Neutral,
    };

    /// Sweep limited to one full turn, for drawing.
    pub fn clamped_sweep(&self) -> f64 {
        self.sweep_angle.clamp(0.0, 360.0)
    }
}

/// Compute the gauge reading for `value` out of `max_value`.
///
/// ```
/// use creditscore::gauge::{render, ScoreBand};
///
/// let reading = render(175.0, 700.0);
/// assert_eq!(reading.sweep_angle, 90.0);
/// assert_eq!(reading.band, ScoreBand::Poor);
/// ```
pub fn render(value: f64, max_value: f64) -> GaugeReading {
    if !max_value.is_finite() || max_value <= 0.0 || !value.is_finite() {
        return GaugeReading::NEUTRAL;
    }

    let p = value / max_value;
    GaugeReading {
        sweep_angle: 360.0 * p,
        band: ScoreBand::from_ratio(p),
    }
}

/// Integer convenience for report fields.
pub fn render_score(score: i32, max_score: i32) -> GaugeReading {
    render(f64::from(score), f64::from(max_score))
}

/// Duration of the arc grow-in animation.
pub const SWEEP_ANIMATION: Duration = Duration::from_millis(1000);

/// Grows the drawn sweep from 0 to its target after a report arrives.
#[derive(Debug, Clone, Copy)]
pub struct SweepAnimation {
    target: f64,
    started: Instant,
    duration: Duration,
}

impl SweepAnimation {
    pub fn new(target: f64, started: Instant) -> Self {
        Self {
            target,
            started,
            duration: SWEEP_ANIMATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Linear progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Sweep to draw at `now`, eased out (cubic).
    pub fn sweep_at(&self, now: Instant) -> f64 {
        let t = self.progress(now);
        let eased = 1.0 - (1.0 - t).powi(3);
        self.target * eased
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_score_is_lowest_band() {
        let reading = render(0.0, 700.0);
        assert_eq!(reading.sweep_angle, 0.0);
        assert_eq!(reading.band, ScoreBand::Poor);
    }

    #[test]
    fn test_full_score_is_highest_band() {
        let reading = render(700.0, 700.0);
        assert_eq!(reading.sweep_angle, 360.0);
        assert_eq!(reading.band, ScoreBand::Excellent);
    }

    #[test]
    fn test_quarter_boundary_is_inclusive() {
        let reading = render(175.0, 700.0);
        assert_eq!(reading.sweep_angle, 90.0);
        assert_eq!(reading.band, ScoreBand::Poor);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(render(350.0, 700.0).band, ScoreBand::Fair);
        assert_eq!(render(351.0, 700.0).band, ScoreBand::Good);
        assert_eq!(render(525.0, 700.0).band, ScoreBand::Good);
        assert_eq!(render(526.0, 700.0).band, ScoreBand::Excellent);
        assert_eq!(render(176.0, 700.0).band, ScoreBand::Fair);
    }

    #[test]
    fn test_zero_max_is_neutral() {
        let reading = render(514.0, 0.0);
        assert_eq!(reading.sweep_angle, 0.0);
        assert_eq!(reading.band, ScoreBand::Neutral);
    }

    #[test]
    fn test_negative_and_nan_inputs_are_neutral() {
        assert_eq!(render(10.0, -700.0).band, ScoreBand::Neutral);
        assert_eq!(render(10.0, f64::NAN).band, ScoreBand::Neutral);
        assert_eq!(render(f64::NAN, 700.0).band, ScoreBand::Neutral);
        assert_eq!(render(10.0, f64::INFINITY).band, ScoreBand::Neutral);
    }

    #[test]
    fn test_out_of_range_values_keep_raw_sweep() {
        let over = render(1400.0, 700.0);
        assert_eq!(over.sweep_angle, 720.0);
        assert_eq!(over.band, ScoreBand::Excellent);
        assert_eq!(over.clamped_sweep(), 360.0);

        let under = render(-70.0, 700.0);
        assert_eq!(under.band, ScoreBand::Poor);
        assert_eq!(under.clamped_sweep(), 0.0);
    }

    #[test]
    fn test_render_score_matches_float_render() {
        assert_eq!(render_score(514, 700), render(514.0, 700.0));
        assert_eq!(render_score(514, 0).band, ScoreBand::Neutral);
    }

    #[test]
    fn test_animation_grows_to_target() {
        let start = Instant::now();
        let animation = SweepAnimation::new(264.0, start);

        assert_eq!(animation.sweep_at(start), 0.0);
        let halfway = animation.sweep_at(start + Duration::from_millis(500));
        assert!(halfway > 132.0 && halfway < 264.0, "eased halfway: {}", halfway);
        assert_eq!(animation.sweep_at(start + Duration::from_secs(2)), 264.0);
        assert!(animation.is_finished(start + SWEEP_ANIMATION));
        assert!(!animation.is_finished(start + Duration::from_millis(999)));
    }

    #[test]
    fn test_zero_duration_animation_is_immediate() {
        let start = Instant::now();
        let animation = SweepAnimation::new(90.0, start).with_duration(Duration::ZERO);
        assert_eq!(animation.sweep_at(start), 90.0);
        assert!(animation.is_finished(start));
    }
}
