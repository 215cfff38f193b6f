//! Drives a [`ContextGestureController`] from pointer events and frame time.
//!
//! The controller only understands "may this start", "this much time has
//! passed", "moved by", "released" and "cancel". This recognizer maps the
//! raw pointer stream onto those calls and measures hold time with a
//! monotonic clock, tracking a single pointer at a time.

use super::context_press::ContextGestureController;
use crate::nodes::input::types::{PointerEvent, PointerEventKind, PointerId};
use presshold_ui_graphics::Point;
use web_time::Instant;

#[derive(Clone, Copy, Debug)]
struct TrackedPress {
    pointer: PointerId,
    attempt: u64,
    started_at: Instant,
    last_position: Point,
}

#[derive(Debug)]
pub struct ContextGestureRecognizer {
    controller: ContextGestureController,
    tracked: Option<TrackedPress>,
}

impl ContextGestureRecognizer {
    pub fn new(controller: ContextGestureController) -> Self {
        Self {
            controller,
            tracked: None,
        }
    }

    pub fn controller(&self) -> &ContextGestureController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ContextGestureController {
        &mut self.controller
    }

    /// Whether a press is currently being followed.
    pub fn is_tracking(&self) -> bool {
        self.tracked.is_some()
    }

    pub fn handle_pointer_event(&mut self, event: &PointerEvent, now: Instant) {
        self.sync_tracking(now);

        if event.kind == PointerEventKind::Down {
            if self.tracked.is_some() || event.is_consumed() || !event.is_primary_press() {
                return;
            }
            if self.controller.should_begin(event.position) {
                self.tracked = Some(TrackedPress {
                    pointer: event.id,
                    attempt: self.controller.attempt(),
                    started_at: now,
                    last_position: event.position,
                });
            }
            return;
        }

        let Some(press) = self.tracked.as_mut() else {
            return;
        };
        if press.pointer != event.id {
            return;
        }
        if event.is_consumed() {
            log::debug!("pointer {} claimed by another handler", event.id);
            self.cancel();
            return;
        }

        match event.kind {
            PointerEventKind::Move => {
                let delta = event.position - press.last_position;
                press.last_position = event.position;
                self.controller.pointer_moved(delta);
            }
            PointerEventKind::Up => self.controller.pointer_up(),
            PointerEventKind::Cancel => self.controller.cancel(),
            PointerEventKind::Down => {}
        }
        self.sync_tracking(now);
    }

    /// Advances the tracked press to `now`.
    pub fn on_frame(&mut self, now: Instant) {
        let Some(press) = self.tracked else {
            return;
        };
        self.controller
            .tick(now.saturating_duration_since(press.started_at));
        self.sync_tracking(now);
    }

    pub fn cancel(&mut self) {
        self.controller.cancel();
        self.tracked = None;
    }

    /// Follows the controller after it was driven from elsewhere: an attempt
    /// that ended stops tracking, and one restarted from inside a callback
    /// keeps the pointer but times its hold from `now`.
    fn sync_tracking(&mut self, now: Instant) {
        if !self.controller.state().is_in_flight() {
            self.tracked = None;
            return;
        }
        let attempt = self.controller.attempt();
        if let Some(press) = self.tracked.as_mut() {
            if press.attempt != attempt {
                log::debug!("context gesture restarted, timing hold from now");
                press.attempt = attempt;
                press.started_at = now;
            }
        }
    }
}
