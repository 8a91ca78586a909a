//! Animation scheduler
//!
//! Manages all active tweens and delayed continuations and advances them by
//! explicit millisecond deltas. Apply and completion callbacks run after the
//! internal lock is released, so a continuation may schedule follow-up
//! animations on the same scheduler without deadlocking.

use std::sync::{Arc, Mutex};

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::easing::Easing;
use crate::tween::Tween;

new_key_type! {
    pub struct AnimationId;
}

type ApplyFn = Arc<dyn Fn(f32) + Send + Sync>;
type CompleteFn = Box<dyn FnOnce() + Send>;

enum Playback {
    Tween(Tween),
    Delay { remaining_ms: f32 },
}

struct Animation {
    playback: Playback,
    apply: Option<ApplyFn>,
    complete: Option<CompleteFn>,
}

/// The animation scheduler that ticks all active animations
pub struct AnimationScheduler {
    animations: Mutex<SlotMap<AnimationId, Animation>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            animations: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Start a tween. `apply` receives the eased progress every frame
    /// (including a final 1.0); `complete` runs once, after the last apply.
    pub fn animate<A, C>(
        &self,
        duration_ms: f32,
        easing: Easing,
        apply: A,
        complete: C,
    ) -> AnimationId
    where
        A: Fn(f32) + Send + Sync + 'static,
        C: FnOnce() + Send + 'static,
    {
        self.animations.lock().unwrap().insert(Animation {
            playback: Playback::Tween(Tween::new(duration_ms, easing)),
            apply: Some(Arc::new(apply)),
            complete: Some(Box::new(complete)),
        })
    }

    /// Schedule a continuation to run after `delay_ms`.
    pub fn delay<C>(&self, delay_ms: f32, complete: C) -> AnimationId
    where
        C: FnOnce() + Send + 'static,
    {
        self.animations.lock().unwrap().insert(Animation {
            playback: Playback::Delay {
                remaining_ms: delay_ms.max(0.0),
            },
            apply: None,
            complete: Some(Box::new(complete)),
        })
    }

    /// Drop an animation without running its completion.
    pub fn cancel(&self, id: AnimationId) -> bool {
        self.animations.lock().unwrap().remove(id).is_some()
    }

    pub fn is_running(&self, id: AnimationId) -> bool {
        self.animations.lock().unwrap().contains_key(id)
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        !self.animations.lock().unwrap().is_empty()
    }

    /// Get the number of active animations
    pub fn animation_count(&self) -> usize {
        self.animations.lock().unwrap().len()
    }

    /// Advance all animations by `dt_ms`.
    ///
    /// Finished animations are removed before any callback runs; their final
    /// apply fires with progress 1.0, then their completions fire in
    /// scheduling order.
    pub fn advance(&self, dt_ms: f32) {
        let mut applies: SmallVec<[(ApplyFn, f32); 4]> = SmallVec::new();
        let mut completions: SmallVec<[CompleteFn; 4]> = SmallVec::new();

        {
            let mut animations = self.animations.lock().unwrap();
            let mut finished: SmallVec<[AnimationId; 4]> = SmallVec::new();

            for (id, animation) in animations.iter_mut() {
                let done = match &mut animation.playback {
                    Playback::Tween(tween) => {
                        tween.tick(dt_ms);
                        if let Some(apply) = &animation.apply {
                            applies.push((apply.clone(), tween.progress()));
                        }
                        tween.is_finished()
                    }
                    Playback::Delay { remaining_ms } => {
                        *remaining_ms -= dt_ms;
                        *remaining_ms <= 0.0
                    }
                };
                if done {
                    finished.push(id);
                }
            }

            for id in finished {
                if let Some(mut animation) = animations.remove(id) {
                    if let Some(complete) = animation.complete.take() {
                        completions.push(complete);
                    }
                }
            }
        }

        for (apply, progress) in applies {
            apply(progress);
        }
        for complete in completions {
            tracing::trace!("animation completed");
            complete();
        }
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
