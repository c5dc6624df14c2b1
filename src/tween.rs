//! Minimal scalar tweening: time-parameterized interpolation between two
//! values through an easing function.
//!
//! A [`ScalarTween`] is advanced by the frame delta and sampled for the eased
//! value; progress is clamped to `[0, 1]` so sampling past the end returns the
//! target exactly. The gesture machine owns its tweens directly — there is no
//! global tween registry to pump.

/// Easing functions used by the gesture animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Quadratic ease-in: `t²`.
    QuadIn,
    /// Quadratic ease-out: `t·(2−t)`.
    QuadOut,
    /// Quadratic ease-in-out.
    QuadInOut,
    /// Stays at the start value through half the duration, then jumps to the
    /// end value — a single decisive snap rather than a glide.
    StepAtHalf,
}

impl Easing {
    /// Map linear progress `t ∈ [0, 1]` through the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => t * (2.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::StepAtHalf => {
                if t <= 0.5 {
                    0.0
                } else {
                    1.0
                }
            }
        }
    }
}

/// A scalar value interpolating from `start` to `end` over `duration` seconds.
#[derive(Debug, Clone)]
pub struct ScalarTween {
    start: f32,
    end: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl ScalarTween {
    pub fn new(start: f32, end: f32, duration: f32, easing: Easing) -> Self {
        Self {
            start,
            end,
            // Zero-duration tweens complete on the first sample.
            duration: duration.max(f32::EPSILON),
            elapsed: 0.0,
            easing,
        }
    }

    /// Advance by `dt` seconds and return the new eased value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.sample()
    }

    /// The eased value at the current progress.
    pub fn sample(&self) -> f32 {
        let t = self.elapsed / self.duration;
        self.start + (self.end - self.start) * self.easing.apply(t)
    }

    /// Whether the tween has reached its full duration.
    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn end_value(&self) -> f32 {
        self.end
    }
}
