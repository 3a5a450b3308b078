use super::handles::{ConnectionPoint, connection_points};
use super::icon::{IconAnimation, IconId, animation_for_status, icon_for_kind, icon_for_status};
use super::palette::{StatusPalette, colors_for_status};
use super::shape::{ShapeVariant, classify_shape};
use crate::node::NodeDescriptor;
use serde::Serialize;

/// Everything a host needs to draw one node in one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderSpec {
    pub shape_variant: ShapeVariant,
    pub colors: StatusPalette,
    pub status_icon: IconId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_animation: Option<IconAnimation>,
    pub kind_icon: IconId,
    /// Resolved from the same kind the shape was chosen from.
    pub connection_points: &'static [ConnectionPoint],
}

impl RenderSpec {
    /// Derives the render spec of a node. Total over every descriptor.
    pub fn of(node: &NodeDescriptor) -> Self {
        let shape_variant = classify_shape(&node.kind);
        Self {
            shape_variant,
            colors: colors_for_status(&node.status),
            status_icon: icon_for_status(&node.status),
            status_animation: animation_for_status(&node.status),
            kind_icon: icon_for_kind(&node.kind),
            connection_points: connection_points(shape_variant, &node.kind),
        }
    }
}

impl From<&NodeDescriptor> for RenderSpec {
    fn from(node: &NodeDescriptor) -> Self {
        RenderSpec::of(node)
    }
}
