//! Inset animator
//!
//! The loading half of the drag lifecycle: reserve space for the accessory
//! band by growing the container's content inset on the affected side, and
//! hand that space back when the load finishes.
//!
//! The insets present when loading begins are snapshotted and the affected
//! side is restored to exactly that value on load end, so a full cycle never
//! drifts the container even while another edge mutates an orthogonal side.
//! Only the affected side is ever written.

use std::sync::Arc;

use dragload_animation::{AnimationId, AnimationScheduler, Easing};
use dragload_core::geometry::lerp;
use dragload_core::EdgeInsets;

use crate::geometry::GeometryResolver;
use crate::port::{ScrollPort, ScrollSignal};

/// Per-controller inset reservation state.
pub(crate) struct InsetAnimator {
    saved: Option<EdgeInsets>,
}

impl InsetAnimator {
    pub fn new() -> Self {
        Self { saved: None }
    }

    /// Insets captured when the current loading cycle began.
    pub fn saved_insets(&self) -> Option<EdgeInsets> {
        self.saved
    }

    /// Snapshot the container insets and animate the affected side out by
    /// the loading increment. `on_settled` runs when the reservation
    /// animation finishes.
    pub fn begin_loading(
        &mut self,
        port: &Arc<ScrollPort>,
        scheduler: &Arc<AnimationScheduler>,
        resolver: &GeometryResolver,
        signal: &ScrollSignal,
        duration_ms: f32,
        on_settled: impl FnOnce() + Send + 'static,
    ) {
        let saved = port.content_inset();
        self.saved = Some(saved);

        let start = resolver.affected_side(&saved);
        let target = start + resolver.loading_increment(signal);
        animate_side(port, scheduler, *resolver, duration_ms, start, target, on_settled);
        tracing::debug!(
            "reserving inset {start:.1} -> {target:.1} on {:?}",
            resolver.direction()
        );
    }

    /// Animate the affected side back to its snapshotted value. Returns
    /// `false` when no loading cycle is in flight.
    pub fn end_loading(
        &mut self,
        port: &Arc<ScrollPort>,
        scheduler: &Arc<AnimationScheduler>,
        resolver: &GeometryResolver,
        duration_ms: f32,
        on_settled: impl FnOnce() + Send + 'static,
    ) -> bool {
        let Some(saved) = self.saved else {
            return false;
        };

        let start = resolver.affected_side(&port.content_inset());
        let target = resolver.affected_side(&saved);
        animate_side(port, scheduler, *resolver, duration_ms, start, target, on_settled);
        tracing::debug!(
            "releasing inset {start:.1} -> {target:.1} on {:?}",
            resolver.direction()
        );
        true
    }

    /// Forget the snapshot once the cycle has fully settled.
    pub fn finish_cycle(&mut self) {
        self.saved = None;
    }
}

/// Tween one inset side, leaving the other three alone each frame, and pin
/// the final value exactly before running the continuation.
fn animate_side(
    port: &Arc<ScrollPort>,
    scheduler: &Arc<AnimationScheduler>,
    resolver: GeometryResolver,
    duration_ms: f32,
    start: f32,
    target: f32,
    on_settled: impl FnOnce() + Send + 'static,
) -> AnimationId {
    let apply_port = port.clone();
    let settle_port = port.clone();
    scheduler.animate(
        duration_ms,
        Easing::EaseInOut,
        move |progress| {
            let value = lerp(start, target, progress);
            apply_port.update_content_inset(|insets| resolver.set_affected_side(insets, value));
        },
        move || {
            settle_port.update_content_inset(|insets| resolver.set_affected_side(insets, target));
            on_settled();
        },
    )
}
