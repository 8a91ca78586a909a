//! Scroll port
//!
//! The interface a host scrollable container exposes to drag-load
//! controllers: one observable channel per watched property, the mutable
//! content insets, and the shared loading slot that keeps two edges of the
//! same container from reserving insets at the same time.
//!
//! The port never drives anything itself; the host pushes new values into
//! the channels whenever its state changes, and controllers react.

use std::sync::Mutex;

use dragload_core::{EdgeInsets, Observable, Size, Vec2};

/// Snapshot of the host container state, taken at one instant.
///
/// Controllers only ever read these values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSignal {
    pub content_offset: Vec2,
    pub content_size: Size,
    pub viewport: Size,
    pub safe_area: EdgeInsets,
    pub dragging: bool,
}

/// Observable surface of one scrollable container.
pub struct ScrollPort {
    /// Content offset; negative along an axis means pulled past the start.
    pub offset: Observable<Vec2>,
    /// Total content extent.
    pub content_size: Observable<Size>,
    /// Visible viewport extent.
    pub viewport: Observable<Size>,
    /// Safe-area insets reported by the host.
    pub safe_area: Observable<EdgeInsets>,
    /// Whether the user's finger is currently down.
    pub dragging: Observable<bool>,

    content_inset: Mutex<EdgeInsets>,
    loading_claim: Mutex<Option<u64>>,
}

impl ScrollPort {
    pub fn new() -> Self {
        Self {
            offset: Observable::new(Vec2::ZERO),
            content_size: Observable::new(Size::ZERO),
            viewport: Observable::new(Size::ZERO),
            safe_area: Observable::new(EdgeInsets::ZERO),
            dragging: Observable::new(false),
            content_inset: Mutex::new(EdgeInsets::ZERO),
            loading_claim: Mutex::new(None),
        }
    }

    /// Snapshot all observed properties at once.
    pub fn signal(&self) -> ScrollSignal {
        ScrollSignal {
            content_offset: self.offset.get(),
            content_size: self.content_size.get(),
            viewport: self.viewport.get(),
            safe_area: self.safe_area.get(),
            dragging: self.dragging.get(),
        }
    }

    /// Current content insets.
    pub fn content_inset(&self) -> EdgeInsets {
        *self.content_inset.lock().unwrap()
    }

    /// Replace the content insets wholesale.
    pub fn set_content_inset(&self, insets: EdgeInsets) {
        *self.content_inset.lock().unwrap() = insets;
    }

    /// Read-modify-write the content insets atomically.
    ///
    /// Controllers use this to touch only their own side, so contributions
    /// from another edge on the orthogonal axis survive.
    pub fn update_content_inset(&self, f: impl FnOnce(&mut EdgeInsets)) {
        f(&mut self.content_inset.lock().unwrap());
    }

    /// Try to take the loading slot for `claimant`.
    ///
    /// Fails while another controller holds it; at most one edge of a
    /// container may be in its loading lifecycle at a time.
    pub fn try_claim_loading(&self, claimant: u64) -> bool {
        let mut slot = self.loading_claim.lock().unwrap();
        match *slot {
            None => {
                *slot = Some(claimant);
                true
            }
            Some(holder) => holder == claimant,
        }
    }

    /// Release the loading slot if `claimant` holds it.
    pub fn release_loading(&self, claimant: u64) {
        let mut slot = self.loading_claim.lock().unwrap();
        if *slot == Some(claimant) {
            *slot = None;
        }
    }

    /// Whether any controller currently holds the loading slot.
    pub fn is_loading_claimed(&self) -> bool {
        self.loading_claim.lock().unwrap().is_some()
    }
}

impl Default for ScrollPort {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_snapshots_all_channels() {
        let port = ScrollPort::new();
        port.offset.set(Vec2::new(0.0, -80.0));
        port.content_size.set(Size::new(600.0, 600.0));
        port.viewport.set(Size::new(600.0, 600.0));
        port.dragging.set(true);

        let signal = port.signal();
        assert_eq!(signal.content_offset, Vec2::new(0.0, -80.0));
        assert_eq!(signal.content_size, Size::new(600.0, 600.0));
        assert!(signal.dragging);
    }

    #[test]
    fn test_update_content_inset_is_additive() {
        let port = ScrollPort::new();
        port.update_content_inset(|i| i.top += 60.0);
        port.update_content_inset(|i| i.left += 40.0);

        let insets = port.content_inset();
        assert_eq!(insets.top, 60.0);
        assert_eq!(insets.left, 40.0);
    }

    #[test]
    fn test_loading_slot_is_exclusive() {
        let port = ScrollPort::new();
        assert!(port.try_claim_loading(1));
        assert!(port.try_claim_loading(1), "re-claim by holder is fine");
        assert!(!port.try_claim_loading(2));
        assert!(port.is_loading_claimed());

        port.release_loading(2); // not the holder, must not release
        assert!(!port.try_claim_loading(2));

        port.release_loading(1);
        assert!(port.try_claim_loading(2));
    }
}
