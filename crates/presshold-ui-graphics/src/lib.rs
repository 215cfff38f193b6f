//! Pure geometry for presshold
//!
//! This crate contains the point, size, rectangle and layer-transform
//! primitives used by the gesture controller and its presentation adapter.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{GraphicsLayer, Point, Rect, Size};
}
