//! Damped spring physics for settle animations.
//!
//! The spring is a damped harmonic oscillator (mass, stiffness, damping)
//! solved in closed form. Its physical settling time is rescaled to the
//! requested playback duration: the physical constants pick the shape of the
//! curve, `duration_millis` picks how long it plays.

use std::time::Duration;

/// Residual displacement at which the oscillator counts as settled.
const SETTLE_EPSILON: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    pub mass: f32,
    pub stiffness: f32,
    /// Absolute damping coefficient (not a ratio).
    pub damping: f32,
    /// Initial velocity in units of the total distance per second.
    pub initial_velocity: f32,
    pub duration_millis: u64,
}

impl SpringSpec {
    pub const DEFAULT_MASS: f32 = 5.0;
    pub const DEFAULT_STIFFNESS: f32 = 900.0;

    /// Spring with the default mass and stiffness, zero initial velocity.
    pub fn damped(duration_millis: u64, damping: f32) -> Self {
        Self {
            mass: Self::DEFAULT_MASS,
            stiffness: Self::DEFAULT_STIFFNESS,
            damping,
            initial_velocity: 0.0,
            duration_millis,
        }
    }

    pub fn with_initial_velocity(mut self, initial_velocity: f32) -> Self {
        self.initial_velocity = initial_velocity;
        self
    }

    pub fn with_mass_and_stiffness(mut self, mass: f32, stiffness: f32) -> Self {
        self.mass = mass;
        self.stiffness = stiffness;
        self
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_millis)
    }

    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    /// 1.0 is critically damped, below bounces, above creeps.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    fn is_degenerate(&self) -> bool {
        !(self.mass > 0.0 && self.stiffness > 0.0 && self.damping >= 0.0)
    }

    /// Physical time for the displacement envelope to fall below
    /// [`SETTLE_EPSILON`]. Infinite for an undamped spring.
    pub fn settling_duration_secs(&self) -> f32 {
        if self.is_degenerate() {
            return 0.0;
        }
        let omega = self.natural_frequency();
        let zeta = self.damping_ratio();
        let decay_rate = if zeta > 1.0 {
            // Slowest of the two real roots dominates.
            omega * (zeta - (zeta * zeta - 1.0).sqrt())
        } else {
            zeta * omega
        };
        if decay_rate > 0.0 {
            (1.0 / SETTLE_EPSILON).ln() / decay_rate
        } else {
            f32::INFINITY
        }
    }

    /// Fraction of the distance covered after `t` physical seconds. Starts at
    /// 0, tends to 1 and may overshoot it for under-damped springs.
    pub fn physical_progress(&self, t: f32) -> f32 {
        if self.is_degenerate() {
            return 1.0;
        }
        if t <= 0.0 {
            return 0.0;
        }
        let omega = self.natural_frequency();
        let zeta = self.damping_ratio();
        // Displacement from the target, starting at 1 and moving toward 0.
        let x0 = 1.0f32;
        let v0 = -self.initial_velocity;

        let displacement = if (zeta - 1.0).abs() < 1e-4 {
            (-omega * t).exp() * (x0 + (v0 + omega * x0) * t)
        } else if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega * t).exp();
            envelope
                * (x0 * (omega_d * t).cos() + ((v0 + zeta * omega * x0) / omega_d) * (omega_d * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c1 = (v0 - r2 * x0) / (r1 - r2);
            let c2 = x0 - c1;
            c1 * (r1 * t).exp() + c2 * (r2 * t).exp()
        };

        1.0 - displacement
    }

    /// Progress after `elapsed` wall time, with the settling curve fitted into
    /// `duration_millis`. Exactly 1.0 once the duration has passed.
    pub fn progress_at(&self, elapsed: Duration) -> f32 {
        if self.is_finished(elapsed) {
            return 1.0;
        }
        let settle = self.settling_duration_secs();
        let playback = self.duration().as_secs_f32();
        let physical_time = if settle.is_finite() {
            elapsed.as_secs_f32() * settle / playback
        } else {
            elapsed.as_secs_f32()
        };
        self.physical_progress(physical_time)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.is_degenerate() || elapsed >= self.duration()
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::damped(500, 90.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spring_is_lightly_underdamped() {
        let spec = SpringSpec::default();
        let zeta = spec.damping_ratio();
        assert!(zeta > 0.6 && zeta < 0.7, "damping ratio {zeta}");
        assert!(spec.settling_duration_secs().is_finite());
    }

    #[test]
    fn progress_starts_at_zero_and_lands_on_one() {
        let spec = SpringSpec::default();
        assert_eq!(spec.progress_at(Duration::ZERO), 0.0);
        assert_eq!(spec.progress_at(Duration::from_millis(500)), 1.0);
        assert_eq!(spec.progress_at(Duration::from_secs(3)), 1.0);

        let midway = spec.progress_at(Duration::from_millis(250));
        assert!(midway > 0.5 && midway < 1.2, "midway progress {midway}");
    }

    #[test]
    fn overdamped_and_critical_springs_do_not_overshoot() {
        for damping in [2.0 * (900.0f32 * 5.0).sqrt(), 400.0] {
            let spec = SpringSpec::damped(500, damping);
            let mut previous = 0.0;
            for step in 1..=50 {
                let p = spec.progress_at(Duration::from_millis(step * 10));
                assert!(p <= 1.0 + 1e-4, "overshoot {p} with damping {damping}");
                assert!(p + 1e-5 >= previous, "regressed at step {step}");
                previous = p;
            }
        }
    }

    #[test]
    fn initial_velocity_pushes_progress_ahead() {
        let at_rest = SpringSpec::damped(500, 90.0);
        let launched = at_rest.with_initial_velocity(4.0);
        let t = Duration::from_millis(20);
        assert!(launched.progress_at(t) > at_rest.progress_at(t));
    }

    #[test]
    fn degenerate_spring_finishes_immediately() {
        let spec = SpringSpec::damped(500, 90.0).with_mass_and_stiffness(0.0, 900.0);
        assert!(spec.is_finished(Duration::ZERO));
        assert_eq!(spec.progress_at(Duration::ZERO), 1.0);
    }
}
