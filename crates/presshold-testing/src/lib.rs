//! Testing utilities for presshold
//!
//! Recorders that capture what a gesture emits and what a layer is asked to
//! do, plus tolerant assertions for the float values involved.

pub mod assertions;
pub mod layer;
pub mod recorder;

pub use assertions::{assert_approx_eq, assert_non_decreasing};
pub use layer::{LayerCommand, RecordingLayer};
pub use recorder::{ActivationEvent, ActivationRecorder};

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::layer::{LayerCommand, RecordingLayer};
    pub use crate::recorder::{ActivationEvent, ActivationRecorder};
}
