//! Rendering capability consumed by the presentation adapter.

use presshold_animation::{AnimatedValue, SpringSpec};
use presshold_ui_graphics::GraphicsLayer;
use std::cell::RefCell;
use std::rc::Rc;

/// A surface whose content can be uniformly scaled around its center.
pub trait ScaleLayer {
    fn set_sublayer_scale(&mut self, scale: f32);

    /// Plays a spring on the content scale from `from` to `to`. The layer's
    /// resting value is already `to` when this is called.
    fn animate_sublayer_scale(&mut self, from: f32, to: f32, spec: SpringSpec);
}

pub type SharedLayer = Rc<RefCell<dyn ScaleLayer>>;

/// Software [`ScaleLayer`] advanced by the host's frame clock.
#[derive(Debug, Clone)]
pub struct AnimatedScaleLayer {
    scale: AnimatedValue<f32>,
}

impl AnimatedScaleLayer {
    pub fn new() -> Self {
        Self {
            scale: AnimatedValue::new(1.0),
        }
    }

    /// Returns `true` while the layer needs more frames.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        self.scale.on_frame(frame_time_nanos)
    }

    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    pub fn is_animating(&self) -> bool {
        self.scale.is_running()
    }

    pub fn graphics_layer(&self) -> GraphicsLayer {
        GraphicsLayer::scale(self.scale())
    }
}

impl Default for AnimatedScaleLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScaleLayer for AnimatedScaleLayer {
    fn set_sublayer_scale(&mut self, scale: f32) {
        self.scale.snap_to(scale);
    }

    fn animate_sublayer_scale(&mut self, from: f32, to: f32, spec: SpringSpec) {
        self.scale.animate_from_to(from, to, spec);
    }
}
