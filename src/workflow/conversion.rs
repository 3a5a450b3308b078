use super::definition::WorkflowDefinition;
use crate::error::ConversionError;

/// A trait for custom data models that can be converted into a `WorkflowDefinition`.
///
/// Implement this on the structs your workflow engine already produces to render
/// them without an intermediate JSON step.
///
/// # Example
///
/// ```rust,no_run
/// use flowsight::prelude::*;
///
/// struct EngineStep { name: String, state: String, step_type: String }
/// struct EngineRun { steps: Vec<EngineStep> }
///
/// impl IntoWorkflow for EngineRun {
///     fn into_workflow(self) -> std::result::Result<WorkflowDefinition, ConversionError> {
///         let nodes = self
///             .steps
///             .into_iter()
///             .map(|step| WorkflowNode {
///                 id: step.name.clone(),
///                 descriptor: NodeDescriptor::new(
///                     step.name,
///                     NodeKind::from(step.step_type),
///                     NodeStatus::from(step.state),
///                 ),
///             })
///             .collect();
///         Ok(WorkflowDefinition { nodes, edges: vec![] })
///     }
/// }
/// ```
pub trait IntoWorkflow {
    /// Consumes the object and converts it into a renderable workflow.
    fn into_workflow(self) -> Result<WorkflowDefinition, ConversionError>;
}

impl IntoWorkflow for WorkflowDefinition {
    fn into_workflow(self) -> Result<WorkflowDefinition, ConversionError> {
        Ok(self)
    }
}
