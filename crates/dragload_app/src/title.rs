//! Title accessory
//!
//! Text-based accessory view: shows a per-status prompt while dragging and
//! flips to a spinner flag while loading.

use dragload_control::{AccessoryView, StatusTitles};
use dragload_core::DragStatus;

pub struct TitleAccessory {
    titles: StatusTitles,
    text: String,
    spinning: bool,
    status: DragStatus,
}

impl TitleAccessory {
    pub fn new() -> Self {
        Self::with_titles(StatusTitles::default())
    }

    pub fn with_titles(titles: StatusTitles) -> Self {
        let text = titles.title(DragStatus::Normal).unwrap_or_default().to_owned();
        Self {
            titles,
            text,
            spinning: false,
            status: DragStatus::Normal,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    pub fn status(&self) -> DragStatus {
        self.status
    }
}

impl Default for TitleAccessory {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessoryView for TitleAccessory {
    fn status_changed(&mut self, status: DragStatus) {
        self.status = status;
        match self.titles.title(status) {
            Some(title) => {
                self.text = title.to_owned();
                self.spinning = false;
            }
            None => {
                self.text.clear();
                self.spinning = true;
            }
        }
        tracing::debug!(
            "accessory -> {:?} ({})",
            status,
            if self.spinning { "spinner" } else { self.text.as_str() }
        );
    }
}
