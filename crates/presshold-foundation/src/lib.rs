//! Foundation layer for presshold: pointer input types and the
//! press-and-hold ("long-press context menu") activation gesture.

pub mod config;
pub mod gesture_constants;
pub mod nodes;

pub use config::{GestureConfig, GestureConfigError};
pub use nodes::input::gestures::{
    ActivationPhase, ContextGestureController, ContextGestureRecognizer, GestureState,
    GestureTransition,
};
pub use nodes::input::{
    PointerButton, PointerButtons, PointerDispatcher, PointerEvent, PointerEventKind, PointerId,
    PointerPhase,
};

pub mod prelude {
    pub use crate::config::GestureConfig;
    pub use crate::nodes::input::gestures::{
        ActivationPhase, ContextGestureController, ContextGestureRecognizer, GestureState,
    };
    pub use crate::nodes::input::prelude::*;
}
