//! Drag directions
//!
//! Each variant carries its threshold distance: the drag depth past which a
//! release starts loading. `Down` and `Right` reveal a band before the
//! content start (pull-to-refresh); `Up` and `Left` reveal a band after the
//! content end (load-more).

use crate::geometry::Axis;

/// Drag-load direction, carrying the threshold distance along its axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    /// Drag up at the content end (vertical load-more)
    Up(f32),
    /// Drag down at the content start (vertical refresh)
    Down(f32),
    /// Drag left at the content end (horizontal load-more)
    Left(f32),
    /// Drag right at the content start (horizontal refresh)
    Right(f32),
}

impl Direction {
    /// The configured threshold distance.
    pub fn threshold(self) -> f32 {
        match self {
            Direction::Up(v) | Direction::Down(v) | Direction::Left(v) | Direction::Right(v) => v,
        }
    }

    /// The scroll axis this direction operates on.
    pub fn axis(self) -> Axis {
        match self {
            Direction::Up(_) | Direction::Down(_) => Axis::Vertical,
            Direction::Left(_) | Direction::Right(_) => Axis::Horizontal,
        }
    }

    /// True when the band sits before the content start (`Down`/`Right`).
    pub fn is_leading(self) -> bool {
        matches!(self, Direction::Down(_) | Direction::Right(_))
    }

    /// Same direction with a different threshold.
    pub fn with_threshold(self, threshold: f32) -> Self {
        match self {
            Direction::Up(_) => Direction::Up(threshold),
            Direction::Down(_) => Direction::Down(threshold),
            Direction::Left(_) => Direction::Left(threshold),
            Direction::Right(_) => Direction::Right(threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_payload() {
        assert_eq!(Direction::Up(60.0).threshold(), 60.0);
        assert_eq!(Direction::Right(40.0).threshold(), 40.0);
        assert_eq!(Direction::Right(40.0).with_threshold(80.0).threshold(), 80.0);
    }

    #[test]
    fn test_axis_and_edge() {
        assert_eq!(Direction::Up(60.0).axis(), Axis::Vertical);
        assert_eq!(Direction::Down(60.0).axis(), Axis::Vertical);
        assert_eq!(Direction::Left(60.0).axis(), Axis::Horizontal);
        assert_eq!(Direction::Right(60.0).axis(), Axis::Horizontal);

        assert!(Direction::Down(60.0).is_leading());
        assert!(Direction::Right(60.0).is_leading());
        assert!(!Direction::Up(60.0).is_leading());
        assert!(!Direction::Left(60.0).is_leading());
    }
}
