//! Easing curves and frame-driven animated values.
//!
//! Nothing in here owns a clock. Hosts feed frame timestamps (nanoseconds on
//! any monotonic timeline) into [`AnimatedValue::on_frame`] and read the
//! current value back.

use crate::spring::SpringSpec;
use std::time::Duration;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Easing curves applied to a linear fraction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// No easing.
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material standard curve: quick start, long settle.
    FastOutSlowIn,
}

impl Easing {
    /// Apply the easing function to a linear fraction in [0, 1].
    ///
    /// Inputs outside the range are clamped, so the result is always in
    /// [0, 1] and non-decreasing in `fraction`.
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        match self {
            Easing::Linear => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// Evaluates the unit cubic bezier through (x1, y1) and (x2, y2) at `fraction`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let slope = |a: f32, b: f32, c: f32, t: f32| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton-Raphson for the parametric t matching `fraction` on the x curve.
    let mut t = fraction;
    let mut solved = false;
    for _ in 0..8 {
        let x = sample(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            solved = true;
            break;
        }
        let dx = slope(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !solved {
        // Bisection fallback; x(t) is monotonic for the curves above.
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = fraction;
        for _ in 0..16 {
            let delta = sample(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample(ay, by, cy, t)
}

/// A value animated between a start and a target, advanced by frame time.
///
/// The first frame after [`animate_to`](Self::animate_to) pins the start
/// time, so the value on that frame is still the start value.
#[derive(Debug, Clone)]
pub struct AnimatedValue<T: Lerp + Clone> {
    current: T,
    start: T,
    target: T,
    spring: SpringSpec,
    start_time_nanos: Option<u64>,
    running: bool,
}

impl<T: Lerp + Clone> AnimatedValue<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            spring: SpringSpec::default(),
            start_time_nanos: None,
            running: false,
        }
    }

    /// Animate from the current value to `target`.
    pub fn animate_to(&mut self, target: T, spring: SpringSpec) {
        self.start = self.current.clone();
        self.target = target;
        self.spring = spring;
        self.start_time_nanos = None;
        self.running = true;
    }

    /// Jump to `from` and animate from there to `to`.
    pub fn animate_from_to(&mut self, from: T, to: T, spring: SpringSpec) {
        self.current = from;
        self.animate_to(to, spring);
    }

    /// Snap immediately to `target`, stopping any running animation.
    pub fn snap_to(&mut self, target: T) {
        self.current = target.clone();
        self.start = target.clone();
        self.target = target;
        self.start_time_nanos = None;
        self.running = false;
    }

    pub fn value(&self) -> T {
        self.current.clone()
    }

    pub fn target(&self) -> T {
        self.target.clone()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances to `frame_time_nanos`. Returns `true` while another frame is
    /// needed.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        if !self.running {
            return false;
        }

        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed = Duration::from_nanos(frame_time_nanos.saturating_sub(start_time));

        if self.spring.is_finished(elapsed) {
            self.snap_to(self.target.clone());
            return false;
        }

        let fraction = self.spring.progress_at(elapsed);
        self.current = self.start.lerp(&self.target, fraction);
        true
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
