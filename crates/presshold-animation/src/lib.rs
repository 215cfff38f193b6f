//! Animation primitives for presshold
//!
//! Provides easing curves, closed-form damped springs and a
//! frame-driven [`AnimatedValue`] that hosts advance from their own clock.

mod animation;
mod spring;

pub use animation::*;
pub use spring::*;
