use crate::node::NodeDescriptor;

/// The canonical definition of a workflow diagram, ready for rendering.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default)]
pub struct WorkflowDefinition {
    pub nodes: Vec<WorkflowNode>,
    pub edges: Vec<WorkflowEdge>,
}

/// A node of the diagram: its graph id plus what the workflow engine reports about it.
#[derive(Debug, Clone)]
pub struct WorkflowNode {
    pub id: String,
    pub descriptor: NodeDescriptor,
}

/// A connection between two nodes.
///
/// A handle of `None` attaches to the node's first connection point of the
/// matching direction.
#[derive(Debug, Clone)]
pub struct WorkflowEdge {
    pub source: String,
    pub source_handle: Option<String>,
    pub target: String,
    pub target_handle: Option<String>,
}

impl WorkflowEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            source_handle: None,
            target: target.into(),
            target_handle: None,
        }
    }

    pub fn with_source_handle(mut self, handle: impl Into<String>) -> Self {
        self.source_handle = Some(handle.into());
        self
    }

    pub fn with_target_handle(mut self, handle: impl Into<String>) -> Self {
        self.target_handle = Some(handle.into());
        self
    }
}
