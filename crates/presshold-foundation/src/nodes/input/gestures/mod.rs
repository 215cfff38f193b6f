pub mod context_press;
pub mod recognizer;

pub use context_press::{ActivationPhase, ContextGestureController, GestureState, GestureTransition};
pub use recognizer::ContextGestureRecognizer;
