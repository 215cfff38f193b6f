//! Records what a [`ContextGestureController`] emits.

use presshold_foundation::{ActivationPhase, ContextGestureController};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActivationEvent {
    Progress { progress: f32, phase: ActivationPhase },
    Activated,
}

/// Shared event log. Clones append to the same log.
#[derive(Clone, Debug, Default)]
pub struct ActivationRecorder {
    events: Rc<RefCell<Vec<ActivationEvent>>>,
}

impl ActivationRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs both observer slots on `controller`.
    pub fn attach(&self, controller: &mut ContextGestureController) {
        controller.set_on_progress(self.progress_handler());
        controller.set_on_activated(self.activated_handler());
    }

    pub fn progress_handler(&self) -> impl FnMut(f32, ActivationPhase) + 'static {
        let events = Rc::clone(&self.events);
        move |progress, phase| {
            events
                .borrow_mut()
                .push(ActivationEvent::Progress { progress, phase });
        }
    }

    pub fn activated_handler(&self) -> impl FnMut(&mut ContextGestureController) + 'static {
        let events = Rc::clone(&self.events);
        move |_| events.borrow_mut().push(ActivationEvent::Activated)
    }

    pub fn events(&self) -> Vec<ActivationEvent> {
        self.events.borrow().clone()
    }

    pub fn progress_values(&self) -> Vec<f32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ActivationEvent::Progress { progress, .. } => Some(*progress),
                ActivationEvent::Activated => None,
            })
            .collect()
    }

    pub fn activation_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, ActivationEvent::Activated))
            .count()
    }

    /// `previous_progress` of every ended emission, in order.
    pub fn ended_baselines(&self) -> Vec<f32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ActivationEvent::Progress {
                    phase: ActivationPhase::Ended { previous_progress },
                    ..
                } => Some(*previous_progress),
                _ => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
