use crate::node::{NodeKind, NodeStatus};
use serde::Serialize;
use std::fmt;

/// Symbolic icon identifiers. The host maps them onto its own icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    Check,
    Play,
    Cross,
    WarningTriangle,
    Clock,
    Flag,
    Brain,
    Branch,
    Bolt,
    Shuffle,
    Gear,
}

impl IconId {
    pub fn as_str(self) -> &'static str {
        match self {
            IconId::Check => "check",
            IconId::Play => "play",
            IconId::Cross => "cross",
            IconId::WarningTriangle => "warning-triangle",
            IconId::Clock => "clock",
            IconId::Flag => "flag",
            IconId::Brain => "brain",
            IconId::Branch => "branch",
            IconId::Bolt => "bolt",
            IconId::Shuffle => "shuffle",
            IconId::Gear => "gear",
        }
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Animation hint attached to a status icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconAnimation {
    Pulse,
}

pub fn icon_for_status(status: &NodeStatus) -> IconId {
    match status {
        NodeStatus::Completed => IconId::Check,
        NodeStatus::Running => IconId::Play,
        NodeStatus::Failed => IconId::Cross,
        NodeStatus::Skipped => IconId::WarningTriangle,
        NodeStatus::Pending | NodeStatus::Other(_) => IconId::Clock,
    }
}

/// Only running nodes animate their status icon.
pub fn animation_for_status(status: &NodeStatus) -> Option<IconAnimation> {
    match status {
        NodeStatus::Running => Some(IconAnimation::Pulse),
        _ => None,
    }
}

pub fn icon_for_kind(kind: &NodeKind) -> IconId {
    match kind {
        NodeKind::Start => IconId::Flag,
        NodeKind::Analysis => IconId::Brain,
        NodeKind::Decision | NodeKind::Condition => IconId::Branch,
        NodeKind::Action => IconId::Bolt,
        NodeKind::Parallel => IconId::Shuffle,
        NodeKind::End => IconId::Check,
        NodeKind::Other(_) => IconId::Gear,
    }
}
