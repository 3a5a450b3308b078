//! # Flowsight - Workflow Node Visual Classification
//!
//! **Flowsight** maps what a workflow engine reports about a node (its kind and its
//! execution status) onto how a diagram host should draw it: one of four shape
//! layouts, a status colour palette, status and kind icons, and the connection
//! points edges may attach to.
//!
//! Every classifier is a pure, total function. Kinds and statuses the engine may add
//! later never fail; they fall back to the generic rendering and the pending palette.
//!
//! ## Core Workflow
//!
//! 1.  **Classify a single node**: Build or deserialize a `NodeDescriptor` and call
//!     `RenderSpec::of`, or use the individual classifiers in [`visual`].
//! 2.  **Render a whole diagram**: Convert your engine's data into a
//!     `WorkflowDefinition` (directly, through `UiWorkflow`, or by implementing
//!     `IntoWorkflow`), then run a `WorkflowRenderer` to get node views with their
//!     edges wired to concrete connection points.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowsight::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // 1. A single node.
//!     let node = NodeDescriptor::new("Fan out", NodeKind::Parallel, NodeStatus::Running);
//!     let spec = RenderSpec::of(&node);
//!     assert_eq!(spec.shape_variant, ShapeVariant::Parallel);
//!     assert_eq!(spec.colors.background, "#dbeafe");
//!
//!     // 2. A whole diagram from a React-Flow style document.
//!     let json = r#"{
//!         "nodes": [
//!             {"id": "s", "data": {"label": "Start", "kind": "start", "status": "completed"}},
//!             {"id": "p", "data": {"label": "Fan out", "kind": "parallel", "status": "running"}},
//!             {"id": "e", "data": {"label": "Done", "kind": "end"}}
//!         ],
//!         "edges": [
//!             {"source": "s", "target": "p"},
//!             {"source": "p", "sourceHandle": "branch1", "target": "e"}
//!         ]
//!     }"#;
//!     let definition = UiWorkflow::from_json(json)?.into_workflow()?;
//!     let rendered = WorkflowRenderer::builder(definition)
//!         .strict_edges(true)
//!         .build()
//!         .render()?;
//!
//!     println!("{}", SummaryFormatter::format_workflow(&rendered));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod gallery;
pub mod node;
pub mod panel;
pub mod prelude;
pub mod report;
pub mod ui;
pub mod visual;
pub mod workflow;
