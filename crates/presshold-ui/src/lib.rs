//! Presentation layer for presshold
//!
//! [`ContextSourceNode`] hosts a press-and-hold gesture on a visual surface
//! and, unless the host supplies its own progress handler, shrinks the
//! surface's content as the press is held and lets it settle with a spring
//! once the gesture activates.

mod activation_transform;
mod context_source;
mod layer;

pub use activation_transform::{activation_transform, ScaleFeedback, ScaleUpdate, SpringTransition};
pub use context_source::ContextSourceNode;
pub use layer::{AnimatedScaleLayer, ScaleLayer, SharedLayer};

pub use presshold_foundation::{
    ActivationPhase, ContextGestureController, GestureConfig, GestureConfigError, GestureState,
    PointerEvent,
};
pub use presshold_ui_graphics::{GraphicsLayer, Point, Rect, Size};
