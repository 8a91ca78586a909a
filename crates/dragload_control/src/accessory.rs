//! Accessory view contract
//!
//! Any visual indicator that wants to ride along with a drag-load edge
//! implements [`AccessoryView`]. The controller pushes status changes into
//! it; a change is only ever delivered when the status actually differs from
//! the previous one, so views never repaint for no-op updates.
//!
//! [`StatusTitles`] is the shared default content bank most text-based
//! accessories compose instead of reimplementing.

use dragload_core::DragStatus;

/// Capability interface for pluggable indicator views.
pub trait AccessoryView: Send {
    /// Called by the controller whenever the drag status changes, and once
    /// when the accessory is first supplied.
    ///
    /// Runs inside the controller's dispatch; implementations update their
    /// own visual state here and must not call back into the controller.
    fn status_changed(&mut self, status: DragStatus);
}

/// Per-status display strings shared by text-based accessories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTitles {
    pub normal: String,
    pub drag_small: String,
    pub drag_big: String,
    pub load_end: String,
}

impl Default for StatusTitles {
    fn default() -> Self {
        Self {
            normal: String::new(),
            drag_small: "Drag to load".into(),
            drag_big: "Release to load".into(),
            load_end: "Load complete".into(),
        }
    }
}

impl StatusTitles {
    /// Title for a status; `None` while loading (the spinner takes over).
    pub fn title(&self, status: DragStatus) -> Option<&str> {
        match status {
            DragStatus::Normal => Some(&self.normal),
            DragStatus::DragSmall => Some(&self.drag_small),
            DragStatus::DragBig => Some(&self.drag_big),
            DragStatus::Loading => None,
            DragStatus::LoadEnd => Some(&self.load_end),
        }
    }
}
