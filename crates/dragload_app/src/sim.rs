//! Simulated list host
//!
//! A headless scrollable list backing a [`ScrollPort`]: rows of fixed
//! height, a viewport, and drag input methods. It plays the role the demo
//! table view plays in a real app: the thing controllers get attached to.

use std::sync::{Arc, Mutex};

use dragload_control::ScrollPort;
use dragload_core::{Size, Vec2};

pub struct SimulatedList {
    port: Arc<ScrollPort>,
    viewport: Size,
    row_height: f32,
    rows: Mutex<usize>,
}

impl SimulatedList {
    pub fn new(viewport: Size, row_height: f32) -> Self {
        let port = Arc::new(ScrollPort::new());
        port.viewport.set(viewport);
        port.content_size.set(Size::new(viewport.width, 0.0));
        Self {
            port,
            viewport,
            row_height,
            rows: Mutex::new(0),
        }
    }

    pub fn port(&self) -> Arc<ScrollPort> {
        self.port.clone()
    }

    pub fn rows(&self) -> usize {
        *self.rows.lock().unwrap()
    }

    /// Replace the row count (a refresh), pushing the new content size.
    pub fn set_rows(&self, rows: usize) {
        *self.rows.lock().unwrap() = rows;
        let height = rows as f32 * self.row_height;
        self.port
            .content_size
            .set(Size::new(self.viewport.width, height));
        tracing::info!("list reloaded with {rows} rows");
    }

    /// Append rows (a load-more page).
    pub fn push_rows(&self, count: usize) {
        let rows = self.rows() + count;
        self.set_rows(rows);
    }

    // Drag input, the way a gesture recognizer would feed it.

    pub fn begin_drag(&self) {
        self.port.dragging.set(true);
    }

    pub fn drag_to(&self, offset: Vec2) {
        self.port.dragging.set(true);
        self.port.offset.set(offset);
    }

    pub fn end_drag(&self) {
        self.port.dragging.set(false);
    }
}
