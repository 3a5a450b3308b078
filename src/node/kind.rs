use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The declared kind of a workflow node.
///
/// Kinds the engine may introduce later land in [`NodeKind::Other`] and get the
/// generic rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum NodeKind {
    Start,
    Analysis,
    Decision,
    Action,
    End,
    Condition,
    Parallel,
    /// An unrecognized kind, preserved verbatim. Empty when the kind was absent.
    Other(String),
}

impl NodeKind {
    pub const KNOWN: [NodeKind; 7] = [
        NodeKind::Start,
        NodeKind::Analysis,
        NodeKind::Decision,
        NodeKind::Action,
        NodeKind::End,
        NodeKind::Condition,
        NodeKind::Parallel,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Start => "start",
            NodeKind::Analysis => "analysis",
            NodeKind::Decision => "decision",
            NodeKind::Action => "action",
            NodeKind::End => "end",
            NodeKind::Condition => "condition",
            NodeKind::Parallel => "parallel",
            NodeKind::Other(raw) => raw,
        }
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, NodeKind::Other(_))
    }
}

impl Default for NodeKind {
    fn default() -> Self {
        NodeKind::Other(String::new())
    }
}

impl From<&str> for NodeKind {
    fn from(value: &str) -> Self {
        match value {
            "start" => NodeKind::Start,
            "analysis" => NodeKind::Analysis,
            "decision" => NodeKind::Decision,
            "action" => NodeKind::Action,
            "end" => NodeKind::End,
            "condition" => NodeKind::Condition,
            "parallel" => NodeKind::Parallel,
            other => NodeKind::Other(other.to_string()),
        }
    }
}

impl From<String> for NodeKind {
    fn from(value: String) -> Self {
        NodeKind::from(value.as_str())
    }
}

impl From<Option<String>> for NodeKind {
    fn from(value: Option<String>) -> Self {
        value.map(NodeKind::from).unwrap_or_default()
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for NodeKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(NodeKind::from(s))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
