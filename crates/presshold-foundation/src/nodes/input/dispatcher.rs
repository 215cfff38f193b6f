//! Pointer input queueing.
//!
//! Platform integrations push raw events as they arrive and drain them into
//! a recognizer once per frame, so gesture callbacks always run on the
//! frame-processing path rather than inside the platform's event callback.

use super::gestures::ContextGestureRecognizer;
use super::types::PointerEvent;
use smallvec::SmallVec;
use web_time::Instant;

#[derive(Default)]
pub struct PointerDispatcher {
    queue: SmallVec<[PointerEvent; 4]>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self {
            queue: SmallVec::new(),
        }
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(PointerEvent),
    {
        for event in self.queue.drain(..) {
            handler(event);
        }
    }

    /// Delivers every queued event to `recognizer`, stamped with `now`.
    /// Returns the number of events delivered.
    pub fn dispatch_to(&mut self, recognizer: &mut ContextGestureRecognizer, now: Instant) -> usize {
        let mut delivered = 0;
        self.drain(|event| {
            recognizer.handle_pointer_event(&event, now);
            delivered += 1;
        });
        delivered
    }
}
