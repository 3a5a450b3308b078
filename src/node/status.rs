use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Execution status of a workflow node as reported by the workflow engine.
///
/// Any value the engine sends that is not one of the five known statuses is kept
/// in [`NodeStatus::Other`] and rendered exactly like [`NodeStatus::Pending`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum NodeStatus {
    #[default]
    Pending,
    Running,
    Completed,
    Failed,
    Skipped,
    /// An unrecognized status, preserved verbatim.
    Other(String),
}

impl NodeStatus {
    /// All statuses with a dedicated palette and icon.
    pub const KNOWN: [NodeStatus; 5] = [
        NodeStatus::Pending,
        NodeStatus::Running,
        NodeStatus::Completed,
        NodeStatus::Failed,
        NodeStatus::Skipped,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            NodeStatus::Pending => "pending",
            NodeStatus::Running => "running",
            NodeStatus::Completed => "completed",
            NodeStatus::Failed => "failed",
            NodeStatus::Skipped => "skipped",
            NodeStatus::Other(raw) => raw,
        }
    }

    /// Returns `true` if this status is not one of the known values.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, NodeStatus::Other(_))
    }
}

impl From<&str> for NodeStatus {
    fn from(value: &str) -> Self {
        match value {
            "pending" => NodeStatus::Pending,
            "running" => NodeStatus::Running,
            "completed" => NodeStatus::Completed,
            "failed" => NodeStatus::Failed,
            "skipped" => NodeStatus::Skipped,
            other => NodeStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for NodeStatus {
    fn from(value: String) -> Self {
        NodeStatus::from(value.as_str())
    }
}

impl From<Option<String>> for NodeStatus {
    fn from(value: Option<String>) -> Self {
        value.map(NodeStatus::from).unwrap_or_default()
    }
}

impl From<NodeStatus> for String {
    fn from(status: NodeStatus) -> Self {
        match status {
            NodeStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for NodeStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(NodeStatus::from(s))
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_statuses() {
        for status in NodeStatus::KNOWN {
            assert_eq!(NodeStatus::from(status.as_str()), status);
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(
            NodeStatus::from("Running"),
            NodeStatus::Other("Running".to_string())
        );
    }

    #[test]
    fn null_and_absent_become_pending() {
        let status: NodeStatus = serde_json::from_str("null").unwrap();
        assert_eq!(status, NodeStatus::Pending);
    }

    #[test]
    fn unknown_value_survives_serialization() {
        let status: NodeStatus = serde_json::from_str("\"queued\"").unwrap();
        assert!(status.is_unrecognized());
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"queued\"");
    }
}
