//! Tunables for the press-and-hold gesture.

use crate::gesture_constants::{ACTIVATION_DURATION_MS, TOUCH_SLOP};
use presshold_animation::Easing;
use std::time::Duration;

/// Timing and movement tolerance for a [`ContextGestureController`].
///
/// Example: `GestureConfig::default().with_activation_duration(Duration::from_millis(650))`
///
/// [`ContextGestureController`]: crate::ContextGestureController
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Hold time from the first tick to full progress.
    pub activation_duration: Duration,
    /// Curve mapping elapsed hold time to progress.
    pub easing: Easing,
    /// Accumulated movement, in logical pixels, that cancels the press.
    pub touch_slop: f32,
}

impl GestureConfig {
    pub fn with_activation_duration(mut self, activation_duration: Duration) -> Self {
        self.activation_duration = activation_duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn validate(&self) -> Result<(), GestureConfigError> {
        if self.activation_duration.is_zero() {
            return Err(GestureConfigError::NonPositiveActivationDuration);
        }
        if !self.touch_slop.is_finite() || self.touch_slop < 0.0 {
            return Err(GestureConfigError::InvalidTouchSlop {
                slop: self.touch_slop,
            });
        }
        Ok(())
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            activation_duration: Duration::from_millis(ACTIVATION_DURATION_MS),
            easing: Easing::Linear,
            touch_slop: TOUCH_SLOP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureConfigError {
    NonPositiveActivationDuration,
    InvalidTouchSlop { slop: f32 },
}

impl std::fmt::Display for GestureConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GestureConfigError::NonPositiveActivationDuration => {
                write!(f, "activation duration must be greater than zero")
            }
            GestureConfigError::InvalidTouchSlop { slop } => {
                write!(f, "touch slop must be a finite, non-negative distance; got {slop}")
            }
        }
    }
}

impl std::error::Error for GestureConfigError {}
