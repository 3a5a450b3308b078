use crate::error::{ConversionError, LoadError};
use crate::node::NodeDescriptor;
use crate::workflow::{IntoWorkflow, WorkflowDefinition, WorkflowEdge, WorkflowNode};
use serde::Deserialize;
use std::fs;

/// UI node with ID and the engine-reported data
#[derive(Debug, Deserialize)]
pub struct UiNode {
    pub id: String,
    pub data: NodeDescriptor,
}

/// UI edge connecting nodes
#[derive(Debug, Deserialize)]
pub struct UiEdge {
    pub source: String,
    #[serde(default, alias = "sourceHandle")]
    pub source_handle: Option<String>,
    pub target: String,
    #[serde(default, alias = "targetHandle")]
    pub target_handle: Option<String>,
}

/// Complete UI workflow document
#[derive(Debug, Deserialize)]
pub struct UiWorkflow {
    pub nodes: Vec<UiNode>,
    #[serde(default)]
    pub edges: Vec<UiEdge>,
}

impl UiWorkflow {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &str) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }
}

impl IntoWorkflow for UiWorkflow {
    fn into_workflow(self) -> Result<WorkflowDefinition, ConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|node| {
                if node.id.trim().is_empty() {
                    return Err(ConversionError::ValidationError(format!(
                        "node '{}' has an empty id",
                        node.data.label
                    )));
                }
                Ok(WorkflowNode {
                    id: node.id,
                    descriptor: node.data,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let edges = self
            .edges
            .into_iter()
            .map(|edge| WorkflowEdge {
                source: edge.source,
                source_handle: edge.source_handle,
                target: edge.target,
                target_handle: edge.target_handle,
            })
            .collect();

        Ok(WorkflowDefinition { nodes, edges })
    }
}
