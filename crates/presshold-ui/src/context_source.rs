//! Surface that can be long-pressed to open a context menu.

use crate::activation_transform::{activation_transform, ScaleFeedback, ScaleUpdate};
use crate::layer::SharedLayer;
use presshold_foundation::{
    ActivationPhase, ContextGestureController, ContextGestureRecognizer, GestureConfig,
    GestureConfigError, PointerEvent,
};
use presshold_ui_graphics::{Point, Size};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_time::Instant;

type ProgressCallback = Box<dyn FnMut(f32, ActivationPhase)>;
type ActivatedCallback = Box<dyn FnMut(&mut ContextGestureController)>;
type ShouldBeginCallback = Rc<dyn Fn(Point) -> bool>;

/// Configuration shared with the callbacks installed on the controller.
struct SourceState {
    bounds: Size,
    layer: SharedLayer,
    target_for_activation_progress: Option<SharedLayer>,
    custom_activation_progress: Option<ProgressCallback>,
    should_begin: Option<ShouldBeginCallback>,
    activated: Option<ActivatedCallback>,
    feedback: ScaleFeedback,
}

impl SourceState {
    fn progress_target(&self) -> SharedLayer {
        self.target_for_activation_progress
            .clone()
            .unwrap_or_else(|| self.layer.clone())
    }
}

enum GestureSlot {
    /// Configured but not attached to input yet.
    Detached(ContextGestureController),
    Attached(ContextGestureRecognizer),
}

impl GestureSlot {
    fn controller(&self) -> &ContextGestureController {
        match self {
            GestureSlot::Detached(controller) => controller,
            GestureSlot::Attached(recognizer) => recognizer.controller(),
        }
    }

    fn controller_mut(&mut self) -> &mut ContextGestureController {
        match self {
            GestureSlot::Detached(controller) => controller,
            GestureSlot::Attached(recognizer) => recognizer.controller_mut(),
        }
    }
}

/// Hosts a press-and-hold gesture on a surface.
///
/// The gesture only starts receiving input after [`load`](Self::load);
/// everything configured before that is applied when it loads. Unless a
/// custom progress handler is set, progress shrinks the content of the
/// surface's layer (or of the override target) and activation settles it
/// with a spring.
pub struct ContextSourceNode {
    state: Rc<RefCell<SourceState>>,
    gesture: GestureSlot,
    is_gesture_enabled: bool,
}

impl ContextSourceNode {
    pub fn new(layer: SharedLayer) -> Self {
        Self::from_controller(layer, ContextGestureController::new())
    }

    pub fn with_gesture_config(
        layer: SharedLayer,
        config: GestureConfig,
    ) -> Result<Self, GestureConfigError> {
        let controller = ContextGestureController::with_config(config)?;
        Ok(Self::from_controller(layer, controller))
    }

    fn from_controller(layer: SharedLayer, controller: ContextGestureController) -> Self {
        Self {
            state: Rc::new(RefCell::new(SourceState {
                bounds: Size::ZERO,
                layer,
                target_for_activation_progress: None,
                custom_activation_progress: None,
                should_begin: None,
                activated: None,
                feedback: ScaleFeedback::default(),
            })),
            gesture: GestureSlot::Detached(controller),
            is_gesture_enabled: true,
        }
    }

    /// Attaches the gesture to input. Calling it again is a no-op.
    pub fn load(&mut self) {
        let GestureSlot::Detached(controller) = &mut self.gesture else {
            return;
        };
        let mut controller = std::mem::take(controller);
        install_callbacks(&mut controller, Rc::downgrade(&self.state));
        controller.set_surface_size(self.state.borrow().bounds);
        controller.set_enabled(self.is_gesture_enabled);
        log::debug!("context source loaded with bounds {:?}", self.bounds());
        self.gesture = GestureSlot::Attached(ContextGestureRecognizer::new(controller));
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.gesture, GestureSlot::Attached(_))
    }

    pub fn bounds(&self) -> Size {
        self.state.borrow().bounds
    }

    pub fn set_bounds(&mut self, bounds: Size) {
        self.state.borrow_mut().bounds = bounds;
        self.gesture.controller_mut().set_surface_size(bounds);
    }

    pub fn is_gesture_enabled(&self) -> bool {
        self.is_gesture_enabled
    }

    pub fn set_gesture_enabled(&mut self, enabled: bool) {
        self.is_gesture_enabled = enabled;
        if self.is_loaded() {
            self.gesture.controller_mut().set_enabled(enabled);
        }
    }

    /// Veto for presses; consulted once per attempt with the press origin.
    pub fn set_should_begin(&mut self, should_begin: impl Fn(Point) -> bool + 'static) {
        self.state.borrow_mut().should_begin = Some(Rc::new(should_begin));
    }

    pub fn clear_should_begin(&mut self) {
        self.state.borrow_mut().should_begin = None;
    }

    /// Replaces the default scale feedback entirely.
    pub fn set_custom_activation_progress(
        &mut self,
        handler: impl FnMut(f32, ActivationPhase) + 'static,
    ) {
        self.state.borrow_mut().custom_activation_progress = Some(Box::new(handler));
    }

    pub fn clear_custom_activation_progress(&mut self) {
        self.state.borrow_mut().custom_activation_progress = None;
    }

    /// Called on activation. Without a handler the gesture is cancelled.
    pub fn set_activated(&mut self, handler: impl FnMut(&mut ContextGestureController) + 'static) {
        self.state.borrow_mut().activated = Some(Box::new(handler));
    }

    pub fn clear_activated(&mut self) {
        self.state.borrow_mut().activated = None;
    }

    /// Layer that receives the progress scale instead of the surface's own.
    pub fn set_target_for_activation_progress(&mut self, target: Option<SharedLayer>) {
        self.state.borrow_mut().target_for_activation_progress = target;
    }

    pub fn feedback(&self) -> ScaleFeedback {
        self.state.borrow().feedback
    }

    pub fn set_feedback(&mut self, feedback: ScaleFeedback) {
        self.state.borrow_mut().feedback = feedback;
    }

    /// Cancels any attempt in flight and re-applies the configured enabled
    /// flag to the gesture.
    pub fn cancel_gesture(&mut self) {
        if let GestureSlot::Attached(recognizer) = &mut self.gesture {
            recognizer.cancel();
            recognizer
                .controller_mut()
                .set_enabled(self.is_gesture_enabled);
        }
    }

    pub fn handle_pointer_event(&mut self, event: &PointerEvent, now: Instant) {
        match &mut self.gesture {
            GestureSlot::Attached(recognizer) => recognizer.handle_pointer_event(event, now),
            GestureSlot::Detached(_) => {
                log::trace!("context source not loaded, dropping {:?}", event.kind);
            }
        }
    }

    pub fn on_frame(&mut self, now: Instant) {
        if let GestureSlot::Attached(recognizer) = &mut self.gesture {
            recognizer.on_frame(now);
        }
    }

    /// The underlying controller.
    pub fn gesture(&self) -> &ContextGestureController {
        self.gesture.controller()
    }

    /// Direct access for hosts that drive the controller themselves.
    /// `None` until loaded.
    pub fn gesture_mut(&mut self) -> Option<&mut ContextGestureController> {
        match &mut self.gesture {
            GestureSlot::Attached(recognizer) => Some(recognizer.controller_mut()),
            GestureSlot::Detached(_) => None,
        }
    }
}

fn install_callbacks(controller: &mut ContextGestureController, state: Weak<RefCell<SourceState>>) {
    let gating_state = state.clone();
    controller.set_gating_predicate(move |point| {
        let Some(state) = gating_state.upgrade() else {
            return false;
        };
        let should_begin = state.borrow().should_begin.clone();
        should_begin.map_or(true, |should_begin| should_begin(point))
    });

    let progress_state = state.clone();
    controller.set_on_progress(move |progress, phase| {
        if let Some(state) = progress_state.upgrade() {
            on_activation_progress(&state, progress, phase);
        }
    });

    controller.set_on_activated(move |gesture| {
        let Some(state) = state.upgrade() else {
            gesture.cancel();
            return;
        };
        let handler = state.borrow_mut().activated.take();
        match handler {
            Some(mut handler) => {
                handler(gesture);
                let mut state = state.borrow_mut();
                if state.activated.is_none() {
                    state.activated = Some(handler);
                }
            }
            None => gesture.cancel(),
        }
    });
}

fn on_activation_progress(state: &Rc<RefCell<SourceState>>, progress: f32, phase: ActivationPhase) {
    let custom = state.borrow_mut().custom_activation_progress.take();
    if let Some(mut custom) = custom {
        custom(progress, phase);
        let mut state = state.borrow_mut();
        if state.custom_activation_progress.is_none() {
            state.custom_activation_progress = Some(custom);
        }
        return;
    }

    let (update, target) = {
        let state = state.borrow();
        (
            activation_transform(progress, phase, state.bounds, &state.feedback),
            state.progress_target(),
        )
    };
    if let Some(update) = update {
        apply_scale_update(&target, update);
    }
}

fn apply_scale_update(target: &SharedLayer, update: ScaleUpdate) {
    let mut layer = target.borrow_mut();
    layer.set_sublayer_scale(update.scale);
    if let Some(spring) = update.spring {
        layer.animate_sublayer_scale(spring.from, spring.to, spring.spec);
    }
}
