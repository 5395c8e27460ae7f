// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation descriptions: timing, easing curves, spring response, and options.

/// Decay exponent reached by a spring envelope at the end of its duration (`ln 1000`).
///
/// The spring is tuned so its oscillation has decayed to 0.1% of the distance when the
/// animation's duration elapses.
const SETTLE_EXPONENT: f64 = 6.907_755_278_982_137;

bitflags::bitflags! {
    /// Options that shape how a host runs an animated transaction.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct AnimationOptions: u8 {
        /// Start from the currently presented values rather than the last model values,
        /// so a new transaction smoothly retargets one that is still in flight.
        const BEGIN_FROM_CURRENT_STATE = 0b0000_0001;
        /// Keep delivering user input to the animated surfaces while the transaction runs.
        const ALLOW_USER_INTERACTION   = 0b0000_0010;
    }
}

/// Easing curves over normalized time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow start.
    EaseIn,
    /// Slow end.
    EaseOut,
    /// Slow start and end.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply the curve to a normalized time value; input is clamped to `0.0..=1.0`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// Damped spring response.
///
/// The spring always covers the full distance within the owning animation's duration;
/// `damping_ratio` only controls how much it overshoots on the way.
/// Ratios below `1.0` oscillate; `1.0` and above approach the target without overshoot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    /// Damping ratio. Values at or near zero are clamped to `0.01`.
    pub damping_ratio: f64,
    /// Initial velocity, in units of total distance per duration.
    pub initial_velocity: f64,
}

impl Spring {
    /// Create a spring with the given damping ratio and zero initial velocity.
    pub const fn new(damping_ratio: f64) -> Self {
        Self {
            damping_ratio,
            initial_velocity: 0.0,
        }
    }

    /// Fraction of the distance covered at normalized time `t`.
    ///
    /// Returns exactly `0.0` at or before `t = 0` and exactly `1.0` at or after `t = 1`.
    /// In between the value may exceed `1.0` for underdamped springs.
    pub fn progress(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let zeta = self.damping_ratio.max(0.01);
        let v0 = self.initial_velocity;
        if zeta < 1.0 {
            let omega = SETTLE_EXPONENT / zeta;
            let omega_d = omega * libm::sqrt(1.0 - zeta * zeta);
            let envelope = libm::exp(-zeta * omega * t);
            let b = (zeta * omega - v0) / omega_d;
            1.0 - envelope * (libm::cos(omega_d * t) + b * libm::sin(omega_d * t))
        } else {
            // Overdamped ratios use the critically damped response.
            let omega = SETTLE_EXPONENT;
            1.0 - libm::exp(-omega * t) * (1.0 + (omega - v0) * t)
        }
    }
}

/// How a change should be animated.
///
/// Durations and delays are in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    /// Duration of the transaction. Zero or less means the change applies immediately.
    pub duration: f64,
    /// Delay before the transaction starts.
    pub delay: f64,
    /// Easing curve; ignored when [`Animation::spring`] is set.
    pub easing: Easing,
    /// Spring response replacing the easing curve.
    pub spring: Option<Spring>,
    /// Options for the host.
    pub options: AnimationOptions,
}

impl Animation {
    /// A zero-duration animation: changes apply synchronously.
    pub const IMMEDIATE: Self = Self {
        duration: 0.0,
        delay: 0.0,
        easing: Easing::Linear,
        spring: None,
        options: AnimationOptions::empty(),
    };

    /// Create an ease-in-out animation with the given duration.
    pub const fn new(duration: f64) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing: Easing::EaseInOut,
            spring: None,
            options: AnimationOptions::empty(),
        }
    }

    /// Set the delay.
    pub const fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Set the easing curve.
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Use a spring response.
    pub const fn with_spring(mut self, spring: Spring) -> Self {
        self.spring = Some(spring);
        self
    }

    /// Set the host options.
    pub const fn with_options(mut self, options: AnimationOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns `true` when the change should be applied synchronously.
    pub fn is_immediate(&self) -> bool {
        self.duration <= 0.0
    }

    /// Time from submission until the transaction settles (delay plus duration).
    pub fn total_time(&self) -> f64 {
        self.delay.max(0.0) + self.duration.max(0.0)
    }

    /// Eased progress `elapsed` seconds after submission.
    pub fn progress_at(&self, elapsed: f64) -> f64 {
        let t = elapsed - self.delay.max(0.0);
        if self.is_immediate() {
            return if t >= 0.0 { 1.0 } else { 0.0 };
        }
        let u = (t / self.duration).clamp(0.0, 1.0);
        match self.spring {
            Some(spring) => spring.progress(u),
            None => self.easing.apply(u),
        }
    }
}
