//! Open/closed and width state of the collapsible chat side panel.
//!
//! The chat widget rendered inside the panel is maintained separately.

pub const PANEL_MIN_WIDTH: f64 = 280.0;
pub const PANEL_MAX_WIDTH: f64 = 640.0;
pub const PANEL_DEFAULT_WIDTH: f64 = 380.0;
pub const PANEL_COLLAPSED_WIDTH: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChatPanel {
    collapsed: bool,
    width: f64,
}

impl Default for ChatPanel {
    fn default() -> Self {
        Self {
            collapsed: true,
            width: PANEL_DEFAULT_WIDTH,
        }
    }
}

impl ChatPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn open(&mut self) {
        self.collapsed = false;
    }

    pub fn close(&mut self) {
        self.collapsed = true;
    }

    /// The expanded width, kept while the panel is collapsed.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Sets the expanded width. Non-finite values are ignored.
    pub fn resize(&mut self, width: f64) {
        if width.is_finite() {
            self.width = width.clamp(PANEL_MIN_WIDTH, PANEL_MAX_WIDTH);
        }
    }

    /// Width the host should lay the panel out at right now.
    pub fn effective_width(&self) -> f64 {
        if self.collapsed {
            PANEL_COLLAPSED_WIDTH
        } else {
            self.width
        }
    }
}
