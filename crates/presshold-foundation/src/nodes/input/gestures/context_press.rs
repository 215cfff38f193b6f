//! Press-and-hold activation gesture.
//!
//! [`ContextGestureController`] turns a sustained, stationary press into a
//! progress stream (`Begin`, `Update`, `Ended`) and a single activation. It
//! owns no timer: the host calls [`tick`](ContextGestureController::tick)
//! with the elapsed hold time once per frame while the press is down.
//!
//! A gesture attempt only ever moves along
//! `Idle -> Pending -> Active -> Ended -> Idle`, or back to `Idle` through a
//! cancel from any state. [`GestureState::next`] is the single source of
//! truth for that path.

use crate::config::{GestureConfig, GestureConfigError};
use presshold_ui_graphics::{Point, Size};
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Accepted by `should_begin`, waiting for the first tick.
    Pending,
    Active,
    /// Transient: only observable from inside the activation handler.
    Ended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureTransition {
    Begin,
    FirstTick,
    Complete,
    Reset,
    Cancel,
}

impl GestureState {
    pub fn next(self, transition: GestureTransition) -> Option<GestureState> {
        use GestureState::*;
        use GestureTransition::*;
        match (self, transition) {
            (Idle, Begin) => Some(Pending),
            (Pending, FirstTick) => Some(Active),
            (Active, Complete) => Some(Ended),
            (Ended, Reset) => Some(Idle),
            (_, Cancel) => Some(Idle),
            _ => None,
        }
    }

    pub fn is_in_flight(self) -> bool {
        matches!(self, GestureState::Pending | GestureState::Active)
    }
}

/// Phase attached to each progress emission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActivationPhase {
    Begin,
    Update,
    /// Final emission of a successful attempt. `previous_progress` is the
    /// value reported just before completion, the baseline for a settle
    /// animation.
    Ended { previous_progress: f32 },
}

type ProgressHandler = Box<dyn FnMut(f32, ActivationPhase)>;
type ActivatedHandler = Box<dyn FnMut(&mut ContextGestureController)>;
type GatingPredicate = Box<dyn FnMut(Point) -> bool>;

pub struct ContextGestureController {
    config: GestureConfig,
    enabled: bool,
    state: GestureState,
    current_progress: f32,
    previous_progress: f32,
    surface_size: Size,
    origin: Point,
    travelled: Point,
    /// Bumped by every accepted `should_begin`.
    attempt: u64,
    on_progress: Option<ProgressHandler>,
    on_activated: Option<ActivatedHandler>,
    /// Bumped whenever the activation slot is written, so a handler that
    /// replaces or clears itself is not restored afterwards.
    on_activated_version: u64,
    gating_predicate: Option<GatingPredicate>,
}

impl ContextGestureController {
    pub fn new() -> Self {
        Self::from_config(GestureConfig::default())
    }

    pub fn with_config(config: GestureConfig) -> Result<Self, GestureConfigError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: GestureConfig) -> Self {
        Self {
            config,
            enabled: true,
            state: GestureState::Idle,
            current_progress: 0.0,
            previous_progress: 0.0,
            surface_size: Size::ZERO,
            origin: Point::ZERO,
            travelled: Point::ZERO,
            attempt: 0,
            on_progress: None,
            on_activated: None,
            on_activated_version: 0,
            gating_predicate: None,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Replaces the tunables. An attempt in flight continues with the new
    /// values from its next tick.
    pub fn set_config(&mut self, config: GestureConfig) -> Result<(), GestureConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Progress of the current attempt; 0 while `Idle` or `Pending`.
    pub fn current_progress(&self) -> f32 {
        self.current_progress
    }

    /// Progress captured when the last successful attempt ended.
    pub fn previous_progress(&self) -> f32 {
        self.previous_progress
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Gates future `should_begin` calls. An attempt already in flight is
    /// left alone and may still activate.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn surface_size(&self) -> Size {
        self.surface_size
    }

    pub fn set_surface_size(&mut self, size: Size) {
        self.surface_size = size;
    }

    /// Where the current attempt went down.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Identity of the most recently started attempt. Drivers compare it to
    /// notice an attempt restarted from inside a callback.
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    pub fn set_on_progress(&mut self, handler: impl FnMut(f32, ActivationPhase) + 'static) {
        self.on_progress = Some(Box::new(handler));
    }

    pub fn clear_on_progress(&mut self) {
        self.on_progress = None;
    }

    /// Registers the activation handler. It receives the controller and may
    /// call `cancel`, `set_enabled` or replace itself.
    pub fn set_on_activated(
        &mut self,
        handler: impl FnMut(&mut ContextGestureController) + 'static,
    ) {
        self.on_activated = Some(Box::new(handler));
        self.on_activated_version = self.on_activated_version.wrapping_add(1);
    }

    pub fn clear_on_activated(&mut self) {
        self.on_activated = None;
        self.on_activated_version = self.on_activated_version.wrapping_add(1);
    }

    pub fn set_gating_predicate(&mut self, predicate: impl FnMut(Point) -> bool + 'static) {
        self.gating_predicate = Some(Box::new(predicate));
    }

    pub fn clear_gating_predicate(&mut self) {
        self.gating_predicate = None;
    }

    /// Decides whether a press at `origin` may start an attempt.
    pub fn should_begin(&mut self, origin: Point) -> bool {
        if !self.enabled {
            log::debug!("context gesture rejected at {origin:?}: disabled");
            return false;
        }
        if self.state != GestureState::Idle {
            log::debug!("context gesture rejected at {origin:?}: {:?} attempt in flight", self.state);
            return false;
        }
        if self.surface_size.has_zero_extent() {
            log::debug!(
                "context gesture rejected at {origin:?}: surface {:?} has zero extent",
                self.surface_size
            );
            return false;
        }
        let allowed = self
            .gating_predicate
            .as_mut()
            .map_or(true, |predicate| predicate(origin));
        if !allowed {
            log::debug!("context gesture rejected at {origin:?}: gating predicate");
            return false;
        }

        self.transition(GestureTransition::Begin);
        self.attempt = self.attempt.wrapping_add(1);
        self.origin = origin;
        self.travelled = Point::ZERO;
        self.current_progress = 0.0;
        self.previous_progress = 0.0;
        true
    }

    /// Advances the attempt to `elapsed` hold time.
    pub fn tick(&mut self, elapsed: Duration) {
        if !self.state.is_in_flight() {
            return;
        }
        let target = self.progress_for(elapsed);

        if self.state == GestureState::Pending {
            self.transition(GestureTransition::FirstTick);
            // A first tick that already covers the whole window still
            // reports a begin from rest so the ended baseline is 0.
            let begin = if target >= 1.0 { 0.0 } else { target };
            self.current_progress = begin;
            self.emit_progress(begin, ActivationPhase::Begin);
            if target >= 1.0 {
                self.complete();
            }
            return;
        }

        let progress = target.max(self.current_progress);
        if progress >= 1.0 {
            self.complete();
        } else {
            self.current_progress = progress;
            self.emit_progress(progress, ActivationPhase::Update);
        }
    }

    /// [`tick`](Self::tick) for hosts that keep time as raw seconds.
    /// Negative and NaN values are clamped to zero.
    pub fn tick_seconds(&mut self, seconds: f32) {
        let elapsed = if seconds.is_nan() || seconds <= 0.0 {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f32(seconds).unwrap_or(Duration::MAX)
        };
        self.tick(elapsed);
    }

    /// Accumulates pointer movement since the press went down. Travelling
    /// beyond the touch slop cancels the attempt.
    pub fn pointer_moved(&mut self, delta: Point) {
        if !self.state.is_in_flight() {
            return;
        }
        self.travelled += delta;
        let distance = self.travelled.length();
        if distance > self.config.touch_slop {
            log::debug!(
                "context gesture moved {distance:.1}px (slop {:.1}), cancelling",
                self.config.touch_slop
            );
            self.cancel();
        }
    }

    /// A release before full progress cancels the attempt.
    pub fn pointer_up(&mut self) {
        if self.state.is_in_flight() {
            log::debug!(
                "context gesture released at progress {:.3}, cancelling",
                self.current_progress
            );
            self.cancel();
        }
    }

    /// Returns to `Idle` without emitting anything. Safe in any state.
    pub fn cancel(&mut self) {
        if self.state != GestureState::Idle {
            self.transition(GestureTransition::Cancel);
            log::debug!("context gesture cancelled");
        }
        self.current_progress = 0.0;
        self.previous_progress = 0.0;
        self.travelled = Point::ZERO;
    }

    fn progress_for(&self, elapsed: Duration) -> f32 {
        let window = self.config.activation_duration.as_secs_f32();
        self.config.easing.transform(elapsed.as_secs_f32() / window)
    }

    fn complete(&mut self) {
        let previous_progress = self.current_progress;
        self.transition(GestureTransition::Complete);
        self.previous_progress = previous_progress;
        self.current_progress = 1.0;
        self.emit_progress(1.0, ActivationPhase::Ended { previous_progress });

        log::debug!("context gesture activated at {:?}", self.origin);
        match self.on_activated.take() {
            Some(mut handler) => {
                let version = self.on_activated_version;
                handler(self);
                if self.on_activated_version == version {
                    self.on_activated = Some(handler);
                }
            }
            None => self.cancel(),
        }

        // The handler may already have cancelled, or even started a new
        // attempt; only a still-ended attempt is reset here.
        if self.state == GestureState::Ended {
            self.transition(GestureTransition::Reset);
            self.current_progress = 0.0;
            self.travelled = Point::ZERO;
        }
    }

    fn emit_progress(&mut self, progress: f32, phase: ActivationPhase) {
        if self.surface_size.has_zero_extent() {
            log::trace!("dropping {phase:?} progress {progress:.3}: surface has zero extent");
            return;
        }
        if let Some(handler) = self.on_progress.as_mut() {
            handler(progress, phase);
        }
    }

    fn transition(&mut self, transition: GestureTransition) {
        match self.state.next(transition) {
            Some(next) => {
                log::trace!(
                    "context gesture {:?} -> {:?} via {:?}",
                    self.state,
                    next,
                    transition
                );
                self.state = next;
            }
            None => {
                log::trace!(
                    "context gesture ignoring {:?} while {:?}",
                    transition,
                    self.state
                );
            }
        }
    }
}

impl Default for ContextGestureController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ContextGestureController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextGestureController")
            .field("state", &self.state)
            .field("enabled", &self.enabled)
            .field("current_progress", &self.current_progress)
            .field("previous_progress", &self.previous_progress)
            .field("surface_size", &self.surface_size)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/context_press_tests.rs"]
mod tests;
