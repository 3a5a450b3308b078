use crate::node::NodeStatus;
use serde::Serialize;

/// Background, border and text colours for a node, as CSS hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StatusPalette {
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

pub const COMPLETED_PALETTE: StatusPalette = StatusPalette {
    background: "#dcfce7",
    border: "#86efac",
    text: "#166534",
};

pub const RUNNING_PALETTE: StatusPalette = StatusPalette {
    background: "#dbeafe",
    border: "#93c5fd",
    text: "#1e40af",
};

pub const FAILED_PALETTE: StatusPalette = StatusPalette {
    background: "#fee2e2",
    border: "#fca5a5",
    text: "#dc2626",
};

pub const SKIPPED_PALETTE: StatusPalette = StatusPalette {
    background: "#f1f5f9",
    border: "#cbd5e1",
    text: "#64748b",
};

/// Also used for any status the classifier does not recognize.
pub const PENDING_PALETTE: StatusPalette = StatusPalette {
    background: "#f9fafb",
    border: "#d1d5db",
    text: "#6b7280",
};

pub fn colors_for_status(status: &NodeStatus) -> StatusPalette {
    match status {
        NodeStatus::Completed => COMPLETED_PALETTE,
        NodeStatus::Running => RUNNING_PALETTE,
        NodeStatus::Failed => FAILED_PALETTE,
        NodeStatus::Skipped => SKIPPED_PALETTE,
        NodeStatus::Pending | NodeStatus::Other(_) => PENDING_PALETTE,
    }
}

impl StatusPalette {
    /// Inline CSS for hosts that style nodes with a `style` attribute.
    pub fn to_css(&self) -> String {
        format!(
            "background-color: {}; border-color: {}; color: {};",
            self.background, self.border, self.text
        )
    }
}
