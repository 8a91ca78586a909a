//! DragLoad Core
//!
//! This crate provides the foundational primitives for the DragLoad
//! interaction engine:
//!
//! - **Geometry values**: scroll-space vectors, sizes, and edge insets
//! - **Observable channels**: change-detecting publish/subscribe properties
//! - **Drag status**: the pull-to-load state enum and its transition rules
//!
//! # Example
//!
//! ```rust
//! use dragload_core::observable::Observable;
//!
//! let offset = Observable::new(0.0f32);
//!
//! let _sub = offset.subscribe(|value| {
//!     println!("offset is now: {value}");
//! });
//!
//! offset.set(-80.0);
//! assert_eq!(offset.get(), -80.0);
//! ```

pub mod direction;
pub mod geometry;
pub mod observable;
pub mod status;

pub use direction::Direction;
pub use geometry::{Axis, EdgeInsets, Size, Vec2};
pub use observable::{Observable, SubscriptionId};
pub use status::DragStatus;
