use crate::node::NodeKind;
use serde::Serialize;
use std::fmt;

/// One of the four node layouts a diagram host knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeVariant {
    /// Rounded rectangle, one input and one output.
    Standard,
    /// Diamond with up to three outgoing branches.
    Decision,
    /// Circle used for the entry and exit points of a workflow.
    Circular,
    /// Rectangle fanning out to named parallel branches.
    Parallel,
}

impl ShapeVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeVariant::Standard => "standard",
            ShapeVariant::Decision => "decision",
            ShapeVariant::Circular => "circular",
            ShapeVariant::Parallel => "parallel",
        }
    }
}

impl fmt::Display for ShapeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selects the shape layout for a node kind. Unrecognized kinds get `Standard`.
pub fn classify_shape(kind: &NodeKind) -> ShapeVariant {
    match kind {
        NodeKind::Start | NodeKind::End => ShapeVariant::Circular,
        NodeKind::Decision | NodeKind::Condition => ShapeVariant::Decision,
        NodeKind::Parallel => ShapeVariant::Parallel,
        NodeKind::Analysis | NodeKind::Action | NodeKind::Other(_) => ShapeVariant::Standard,
    }
}
