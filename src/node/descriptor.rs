use super::{NodeKind, NodeStatus};
use serde::{Deserialize, Serialize};

/// A single workflow node as the workflow engine describes it.
///
/// Only `label` is required on the wire. When `kind` is absent the React-Flow
/// style `type` key is used instead; when both are present `kind` wins.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawNodeDescriptor")]
pub struct NodeDescriptor {
    pub label: String,
    pub status: NodeStatus,
    pub kind: NodeKind,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

/// Wire shape of a descriptor, with `kind` and `type` read separately.
#[derive(Deserialize)]
struct RawNodeDescriptor {
    label: String,
    #[serde(default)]
    status: NodeStatus,
    #[serde(default)]
    kind: Option<String>,
    #[serde(default, rename = "type")]
    node_type: Option<String>,
    #[serde(default)]
    optional: Option<bool>,
    #[serde(default)]
    condition: Option<String>,
}

impl From<RawNodeDescriptor> for NodeDescriptor {
    fn from(raw: RawNodeDescriptor) -> Self {
        Self {
            label: raw.label,
            status: raw.status,
            kind: NodeKind::from(raw.kind.or(raw.node_type)),
            optional: raw.optional.unwrap_or(false),
            condition: raw.condition,
        }
    }
}

impl NodeDescriptor {
    pub fn new(label: impl Into<String>, kind: NodeKind, status: NodeStatus) -> Self {
        Self {
            label: label.into(),
            status,
            kind,
            optional: false,
            condition: None,
        }
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// The condition text to display, if any. Blank strings are not shown.
    pub fn visible_condition(&self) -> Option<&str> {
        self.condition
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
