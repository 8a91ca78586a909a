//! Simulated network fetch
//!
//! The demo's stand-in for real async work: a continuation scheduled after a
//! fixed delay on the same cooperative scheduler that drives the animations.

use std::sync::Arc;

use dragload_animation::{AnimationId, AnimationScheduler};

#[derive(Debug, Clone, Copy)]
pub struct SimulatedFetch {
    delay_ms: f32,
}

impl SimulatedFetch {
    pub fn new(delay_ms: f32) -> Self {
        Self { delay_ms }
    }

    pub fn delay_ms(&self) -> f32 {
        self.delay_ms
    }

    /// Kick off a fetch; `on_done` runs once the delay elapses.
    pub fn start(
        &self,
        scheduler: &Arc<AnimationScheduler>,
        on_done: impl FnOnce() + Send + 'static,
    ) -> AnimationId {
        tracing::debug!("fetch started, completes in {:.0}ms", self.delay_ms);
        scheduler.delay(self.delay_ms, on_done)
    }
}
