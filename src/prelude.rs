//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! flowsight crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowsight::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let workflow = UiWorkflow::from_file("path/to/workflow.json")?;
//! let rendered = WorkflowRenderer::new(workflow.into_workflow()?).render()?;
//!
//! for node in &rendered.nodes {
//!     println!("{} -> {:?}", node.label, node.spec);
//! }
//! # Ok(())
//! # }
//! ```

// Node data
pub use crate::node::{NodeDescriptor, NodeKind, NodeStatus};

// Classification
pub use crate::visual::{
    ConnectionPoint, Direction, Flow, IconAnimation, IconId, RenderSpec, ShapeVariant,
    StatusPalette, classify_shape, colors_for_status, connection_points, icon_for_kind,
    icon_for_status,
};

// Whole-diagram rendering
pub use crate::ui::UiWorkflow;
pub use crate::workflow::{
    IntoWorkflow, NodeView, RenderedWorkflow, ResolvedEdge, WorkflowDefinition, WorkflowEdge,
    WorkflowNode, WorkflowRenderer,
};

// Gallery and panel state
pub use crate::gallery::{CategoryFilter, Gallery, ProjectTemplate, TemplateCatalog, TemplateQuery};
pub use crate::panel::ChatPanel;

// Error types
pub use crate::error::{ConversionError, LoadError, RenderError};

// Text output
pub use crate::report::SummaryFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
