use crate::visual::Flow;
use thiserror::Error;

/// Errors that can occur while reading workflow documents or template catalogs.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Could not read file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while wiring a workflow's edges to node connection points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Node id '{0}' is used by more than one node")]
    DuplicateNode(String),

    #[error(
        "Node '{missing_node_id}' not found, which is required by an edge from '{source_node_id}' to '{target_node_id}'"
    )]
    NodeNotFound {
        missing_node_id: String,
        source_node_id: String,
        target_node_id: String,
    },

    #[error("Node '{node_id}' has no {flow} connection point '{handle}'")]
    UnknownHandle {
        node_id: String,
        handle: String,
        flow: Flow,
    },

    #[error("Node '{node_id}' has no {flow} connection points, so it cannot take this edge")]
    NoConnectionPoint { node_id: String, flow: Flow },
}

/// Errors that can occur when converting a custom user format into a `WorkflowDefinition`.
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}
