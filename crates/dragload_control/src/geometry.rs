//! Geometry resolver
//!
//! Translates a direction plus the current scroll signal into the numbers
//! the rest of the engine runs on: the accessory band's rest position, the
//! signed drag depth past the container's natural bounds, the inset
//! increment reserved while loading, and the target offset of a simulated
//! drag.
//!
//! One axis-and-sign parameterized implementation covers all four
//! directions. For `Down`/`Right` the band sits before the content start;
//! for `Up`/`Left` it sits after the content end, pinned so it stays
//! reachable even when the content is shorter than the viewport.

use dragload_core::{Direction, EdgeInsets, Vec2};

use crate::port::ScrollSignal;

/// Direction-parameterized geometry for one attached edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryResolver {
    direction: Direction,
}

impl GeometryResolver {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Rest position of the accessory band along the scroll axis, relative
    /// to the content origin.
    ///
    /// Must be recomputed whenever content size, viewport, or safe area
    /// change, not only on user drags.
    pub fn rest_position(&self, signal: &ScrollSignal) -> f32 {
        let axis = self.direction.axis();
        if self.direction.is_leading() {
            -signal.safe_area.leading(axis)
        } else {
            let past_content = signal.content_size.along(axis) + signal.safe_area.trailing(axis);
            let past_viewport = signal.viewport.along(axis) - signal.safe_area.leading(axis);
            past_content.max(past_viewport)
        }
    }

    /// Signed distance the content has been pulled past its natural bounds
    /// along this direction. Positive once the band starts to reveal.
    pub fn drag_depth(&self, signal: &ScrollSignal) -> f32 {
        let axis = self.direction.axis();
        let offset = signal.content_offset.along(axis);
        if self.direction.is_leading() {
            -offset - signal.safe_area.leading(axis)
        } else {
            offset + signal.viewport.along(axis) - self.rest_position(signal)
        }
    }

    /// Inset increment reserved on this direction's side while loading.
    ///
    /// For trailing directions the increment is padded so the band stays
    /// fully visible even when the content is shorter than the viewport.
    pub fn loading_increment(&self, signal: &ScrollSignal) -> f32 {
        let threshold = self.direction.threshold();
        if self.direction.is_leading() {
            threshold
        } else {
            let axis = self.direction.axis();
            let slack = signal.viewport.along(axis)
                - signal.content_size.along(axis)
                - signal.safe_area.total(axis)
                + threshold;
            slack.max(threshold)
        }
    }

    /// The inset side this direction reserves space on.
    pub fn affected_side(&self, insets: &EdgeInsets) -> f32 {
        match self.direction {
            Direction::Down(_) => insets.top,
            Direction::Up(_) => insets.bottom,
            Direction::Right(_) => insets.left,
            Direction::Left(_) => insets.right,
        }
    }

    /// Write this direction's inset side, leaving the other three untouched.
    pub fn set_affected_side(&self, insets: &mut EdgeInsets, value: f32) {
        match self.direction {
            Direction::Down(_) => insets.top = value,
            Direction::Up(_) => insets.bottom = value,
            Direction::Right(_) => insets.left = value,
            Direction::Left(_) => insets.right = value,
        }
    }

    /// Target content offset for a simulated (programmatic) drag.
    pub fn simulate_offset(&self, signal: &ScrollSignal) -> Vec2 {
        let axis = self.direction.axis();
        let threshold = self.direction.threshold();
        let content = signal.content_size.along(axis) + signal.safe_area.total(axis);

        let along = if self.direction.is_leading() {
            if signal.viewport.along(axis) > content {
                0.0
            } else {
                -threshold
            }
        } else {
            (content + threshold - signal.viewport.along(axis)).max(threshold)
        };
        Vec2::ZERO.with_along(axis, along)
    }
}
