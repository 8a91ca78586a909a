//! DragLoad interaction engine
//!
//! Attaches pull-to-refresh / load-more behavior to any scrollable container
//! that exposes its state through a [`ScrollPort`]. One [`DragController`]
//! per attached edge owns the geometry, the drag state machine, and the
//! inset reservation lifecycle for that edge.
//!
//! ```ignore
//! use std::sync::Arc;
//! use dragload_animation::AnimationScheduler;
//! use dragload_control::{ControllerConfig, DragController, ScrollPort};
//! use dragload_core::Direction;
//!
//! let port = Arc::new(ScrollPort::new());
//! let scheduler = Arc::new(AnimationScheduler::new());
//!
//! let refresh = DragController::attach(
//!     port.clone(),
//!     scheduler.clone(),
//!     ControllerConfig::new(Direction::Down(60.0)),
//! );
//! refresh.set_on_trigger(|| println!("reload!"));
//! // ... once the reload finishes:
//! refresh.complete_load();
//! ```

pub mod accessory;
mod animator;
pub mod controller;
pub mod geometry;
pub mod port;

pub use accessory::{AccessoryView, StatusTitles};
pub use controller::{ControllerConfig, DragController};
pub use geometry::GeometryResolver;
pub use port::{ScrollPort, ScrollSignal};
