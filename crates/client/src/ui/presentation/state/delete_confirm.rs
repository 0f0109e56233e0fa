//! Two-click delete guard.
//!
//! Script dialogs (`window.confirm`) are not reliable inside every
//! desktop webview build, so destructive actions arm on the first click
//! and only fire on the second.

/// Per-row confirmation state for the Delete action.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeleteConfirm {
    armed: bool,
}

impl DeleteConfirm {
    /// Whether the next click will actually delete.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Register a click on the Delete button. The first click arms the
    /// guard and returns `false`; the second disarms it and returns
    /// `true`, meaning the delete should proceed.
    pub fn request(&mut self) -> bool {
        if self.armed {
            self.armed = false;
            true
        } else {
            self.armed = true;
            false
        }
    }

    /// Back out of an armed delete.
    pub fn disarm(&mut self) {
        self.armed = false;
    }
}
