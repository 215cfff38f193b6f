//! A [`ScaleLayer`] that records every command it receives.

use presshold_animation::SpringSpec;
use presshold_ui::{ScaleLayer, SharedLayer};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayerCommand {
    SetScale(f32),
    AnimateScale { from: f32, to: f32, spec: SpringSpec },
}

#[derive(Debug, Default)]
pub struct RecordingLayer {
    commands: Vec<LayerCommand>,
}

impl RecordingLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the concrete handle for inspection and the same layer as a
    /// [`SharedLayer`] for handing to a node.
    pub fn shared() -> (Rc<RefCell<RecordingLayer>>, SharedLayer) {
        let layer = Rc::new(RefCell::new(RecordingLayer::new()));
        let shared: SharedLayer = layer.clone();
        (layer, shared)
    }

    pub fn commands(&self) -> &[LayerCommand] {
        &self.commands
    }

    /// Last scale set directly, ignoring animations.
    pub fn last_scale(&self) -> Option<f32> {
        self.commands.iter().rev().find_map(|command| match command {
            LayerCommand::SetScale(scale) => Some(*scale),
            LayerCommand::AnimateScale { .. } => None,
        })
    }

    pub fn animations(&self) -> Vec<LayerCommand> {
        self.commands
            .iter()
            .filter(|command| matches!(command, LayerCommand::AnimateScale { .. }))
            .copied()
            .collect()
    }
}

impl ScaleLayer for RecordingLayer {
    fn set_sublayer_scale(&mut self, scale: f32) {
        self.commands.push(LayerCommand::SetScale(scale));
    }

    fn animate_sublayer_scale(&mut self, from: f32, to: f32, spec: SpringSpec) {
        self.commands.push(LayerCommand::AnimateScale { from, to, spec });
    }
}
