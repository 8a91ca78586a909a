//! DragLoad animation system
//!
//! Timed tweens and delayed continuations, driven cooperatively by explicit
//! millisecond ticks from the host event loop. No wall clock, no threads:
//! whoever owns the UI loop calls [`AnimationScheduler::advance`] once per
//! frame, and tests tick deterministically.

pub mod easing;
pub mod scheduler;
pub mod tween;

pub use easing::Easing;
pub use scheduler::{AnimationId, AnimationScheduler};
pub use tween::Tween;
