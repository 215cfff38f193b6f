//! Mapping from gesture progress to the scale of the pressed surface.
//!
//! Pure data in, pure data out: [`activation_transform`] never touches a
//! layer. Applying the result is the job of a [`ScaleLayer`](crate::ScaleLayer).

use presshold_animation::{Lerp, SpringSpec};
use presshold_foundation::gesture_constants::{
    ACTIVATION_SCALE_INSET, SETTLE_SPRING_DAMPING, SETTLE_SPRING_DURATION_MS,
};
use presshold_foundation::ActivationPhase;
use presshold_ui_graphics::Size;

/// Shape of the default press feedback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFeedback {
    /// Logical pixels the surface loses across its width at full progress.
    pub inset: f32,
    /// Spring played from the last in-progress scale to the final one.
    pub spring: SpringSpec,
}

impl ScaleFeedback {
    pub fn with_inset(mut self, inset: f32) -> Self {
        self.inset = inset;
        self
    }

    pub fn with_spring(mut self, spring: SpringSpec) -> Self {
        self.spring = spring;
        self
    }

    /// Scale at full progress, or `None` for a surface without width.
    pub fn min_scale(&self, width: f32) -> Option<f32> {
        if width.is_nan() || width <= 0.0 {
            return None;
        }
        Some(((width - self.inset) / width).max(0.0))
    }

    pub fn scale_at(&self, progress: f32, width: f32) -> Option<f32> {
        let min_scale = self.min_scale(width)?;
        Some(1.0f32.lerp(&min_scale, progress))
    }
}

impl Default for ScaleFeedback {
    fn default() -> Self {
        Self {
            inset: ACTIVATION_SCALE_INSET,
            spring: SpringSpec::damped(SETTLE_SPRING_DURATION_MS, SETTLE_SPRING_DAMPING),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringTransition {
    pub from: f32,
    pub to: f32,
    pub spec: SpringSpec,
}

/// What a layer should do for one progress emission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleUpdate {
    /// Scale to set immediately.
    pub scale: f32,
    /// Settle animation, only present for [`ActivationPhase::Ended`].
    pub spring: Option<SpringTransition>,
}

pub fn activation_transform(
    progress: f32,
    phase: ActivationPhase,
    bounds: Size,
    feedback: &ScaleFeedback,
) -> Option<ScaleUpdate> {
    let scale = feedback.scale_at(progress, bounds.width)?;
    let spring = match phase {
        ActivationPhase::Begin | ActivationPhase::Update => None,
        ActivationPhase::Ended { previous_progress } => Some(SpringTransition {
            from: feedback.scale_at(previous_progress, bounds.width)?,
            to: scale,
            spec: feedback.spring,
        }),
    };
    Some(ScaleUpdate { scale, spring })
}
