//! Interpolation scheduling.
//!
//! Converts a time budget into per-transition step and hold counts. All float-to-integer
//! conversions truncate toward zero; inputs are validated non-negative so this equals `floor`.

use crate::foundation::core::Fps;
use crate::foundation::error::{ReelError, ReelResult};

/// Timing parameters of an animation. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TimingConfig {
    total_minutes: f64,
    traversal_seconds: f64,
    static_seconds: f64,
    fps: Fps,
}

impl TimingConfig {
    /// Create a validated timing config.
    ///
    /// Zero durations are accepted individually (they produce degenerate schedules), but
    /// `traversal_seconds + static_seconds` must be positive.
    pub fn new(
        total_minutes: f64,
        traversal_seconds: f64,
        static_seconds: f64,
        fps: Fps,
    ) -> ReelResult<Self> {
        for (name, v) in [
            ("total_minutes", total_minutes),
            ("traversal_seconds", traversal_seconds),
            ("static_seconds", static_seconds),
        ] {
            if !v.is_finite() {
                return Err(ReelError::validation(format!("{name} must be finite")));
            }
            if v < 0.0 {
                return Err(ReelError::validation(format!("{name} must be >= 0")));
            }
        }
        if traversal_seconds + static_seconds <= 0.0 {
            return Err(ReelError::validation(
                "traversal_seconds + static_seconds must be > 0",
            ));
        }
        Ok(Self {
            total_minutes,
            traversal_seconds,
            static_seconds,
            fps,
        })
    }

    /// Total animation length in minutes.
    pub fn total_minutes(&self) -> f64 {
        self.total_minutes
    }

    /// Seconds spent walking from one latent point to the next.
    pub fn traversal_seconds(&self) -> f64 {
        self.traversal_seconds
    }

    /// Seconds spent holding on each destination point.
    pub fn static_seconds(&self) -> f64 {
        self.static_seconds
    }

    /// Output frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Length of one transition (walk + hold) in seconds.
    pub fn transition_period_secs(&self) -> f64 {
        self.traversal_seconds + self.static_seconds
    }
}

/// Frame budget derived from a [`TimingConfig`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Schedule {
    /// Interpolation frames per transition (the walk excludes the destination itself).
    pub steps_per_transition: u64,
    /// Frames holding the destination point per transition.
    pub hold_frames_per_transition: u64,
    /// Number of transitions that fit into the time budget.
    pub total_transitions: u64,
    /// Global frame cutoff for the whole run.
    pub total_frames: u64,
}

impl Schedule {
    /// Frames emitted by one complete transition.
    pub fn frames_per_transition(&self) -> u64 {
        self.steps_per_transition + self.hold_frames_per_transition
    }

    /// Playback length of `total_frames` at `fps`.
    pub fn duration_secs(&self, fps: Fps) -> f64 {
        fps.frames_to_secs(self.total_frames)
    }
}

/// Compute the frame budget for `timing`.
///
/// ```text
/// period            = traversal + static
/// total_transitions = floor(total_minutes * 60 / period)
/// total_frames      = floor(total_transitions * period * fps)
/// steps             = floor(traversal * fps)
/// hold              = floor(static * fps)
/// ```
///
/// `total_frames` is computed from the real-valued period, so it can differ from
/// `total_transitions * (steps + hold)` when `traversal * fps` or `static * fps` is fractional.
pub fn compute_schedule(timing: &TimingConfig) -> Schedule {
    let period = timing.transition_period_secs();
    let frames_per_period = period * timing.fps.as_f64();

    let total_transitions = truncate((timing.total_minutes * 60.0) / period);
    let total_frames = truncate(total_transitions as f64 * frames_per_period);

    Schedule {
        steps_per_transition: timing.fps.secs_to_frames_floor(timing.traversal_seconds),
        hold_frames_per_transition: timing.fps.secs_to_frames_floor(timing.static_seconds),
        total_transitions,
        total_frames,
    }
}

fn truncate(v: f64) -> u64 {
    v.trunc().max(0.0) as u64
}

#[cfg(test)]
#[path = "../tests/unit/schedule/timing.rs"]
mod tests;
