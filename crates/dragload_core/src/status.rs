//! Drag status
//!
//! The interaction state a drag-load edge is in. While the user drags, the
//! status is a pure function of the drag depth and the configured threshold;
//! `Loading` and `LoadEnd` are entered and left only by the loading
//! lifecycle, never by scroll signals.

/// Interaction state of one drag-load edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragStatus {
    /// At rest, nothing revealed
    #[default]
    Normal,
    /// Dragged past the edge, but not past the threshold
    DragSmall,
    /// Dragged past the threshold; release will load
    DragBig,
    /// Load in progress, insets reserved
    Loading,
    /// Load finished, insets animating back
    LoadEnd,
}

impl DragStatus {
    /// Status for a given drag depth while the user is actively dragging.
    pub fn for_depth(depth: f32, threshold: f32) -> Self {
        if depth <= 0.0 {
            DragStatus::Normal
        } else if depth < threshold {
            DragStatus::DragSmall
        } else {
            DragStatus::DragBig
        }
    }

    /// Drag-phase transition. Returns `None` while the loading lifecycle
    /// owns the status, or when the computed status equals the current one.
    pub fn on_drag(self, depth: f32, threshold: f32) -> Option<Self> {
        if self.is_settling() {
            return None;
        }
        let next = Self::for_depth(depth, threshold);
        (next != self).then_some(next)
    }

    /// True while scroll signals are locked out (`Loading` or `LoadEnd`).
    pub fn is_settling(self) -> bool {
        matches!(self, DragStatus::Loading | DragStatus::LoadEnd)
    }

    /// True while the user-visible band is revealed by an active drag.
    pub fn is_dragged(self) -> bool {
        matches!(self, DragStatus::DragSmall | DragStatus::DragBig)
    }
}
