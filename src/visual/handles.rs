//! Connection points (handles) each shape exposes to the graph layer.
//!
//! The tables are static: a host wires edges to these anchors instead of deriving
//! them on every render.

use super::shape::ShapeVariant;
use crate::node::NodeKind;
use serde::Serialize;
use std::fmt;

/// Which side of the node a connection point sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Top => "top",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Whether edges arrive at or leave from a connection point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    Inbound,
    Outbound,
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flow::Inbound => f.write_str("inbound"),
            Flow::Outbound => f.write_str("outbound"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ConnectionPoint {
    pub flow: Flow,
    pub direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
}

impl ConnectionPoint {
    const fn inbound(direction: Direction) -> Self {
        Self {
            flow: Flow::Inbound,
            direction,
            name: None,
        }
    }

    const fn outbound(direction: Direction) -> Self {
        Self {
            flow: Flow::Outbound,
            direction,
            name: None,
        }
    }

    const fn named_outbound(direction: Direction, name: &'static str) -> Self {
        Self {
            flow: Flow::Outbound,
            direction,
            name: Some(name),
        }
    }

    /// The identifier edges use to address this point: its name when it has one,
    /// otherwise the side it sits on.
    pub fn handle_id(&self) -> &'static str {
        self.name.unwrap_or(self.direction.as_str())
    }
}

pub const STANDARD_POINTS: &[ConnectionPoint] = &[
    ConnectionPoint::inbound(Direction::Top),
    ConnectionPoint::outbound(Direction::Bottom),
];

pub const DECISION_POINTS: &[ConnectionPoint] = &[
    ConnectionPoint::inbound(Direction::Top),
    ConnectionPoint::outbound(Direction::Left),
    ConnectionPoint::outbound(Direction::Right),
    ConnectionPoint::outbound(Direction::Bottom),
];

/// Start nodes only emit.
pub const CIRCULAR_START_POINTS: &[ConnectionPoint] =
    &[ConnectionPoint::outbound(Direction::Bottom)];

/// End nodes only receive.
pub const CIRCULAR_END_POINTS: &[ConnectionPoint] = &[ConnectionPoint::inbound(Direction::Top)];

pub const PARALLEL_POINTS: &[ConnectionPoint] = &[
    ConnectionPoint::inbound(Direction::Top),
    ConnectionPoint::named_outbound(Direction::Bottom, "main"),
    ConnectionPoint::named_outbound(Direction::Right, "branch1"),
    ConnectionPoint::named_outbound(Direction::Left, "branch2"),
];

/// Role of a node drawn with the circular shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircularRole {
    Start,
    End,
}

impl CircularRole {
    /// Only a literal `start` kind emits; every other kind routed to the circle
    /// behaves as an end node.
    pub fn of(kind: &NodeKind) -> Self {
        match kind {
            NodeKind::Start => CircularRole::Start,
            _ => CircularRole::End,
        }
    }
}

/// Connection points for a shape. `kind` only matters for the circular shape.
pub fn connection_points(shape: ShapeVariant, kind: &NodeKind) -> &'static [ConnectionPoint] {
    match shape {
        ShapeVariant::Standard => STANDARD_POINTS,
        ShapeVariant::Decision => DECISION_POINTS,
        ShapeVariant::Parallel => PARALLEL_POINTS,
        ShapeVariant::Circular => match CircularRole::of(kind) {
            CircularRole::Start => CIRCULAR_START_POINTS,
            CircularRole::End => CIRCULAR_END_POINTS,
        },
    }
}

/// Filters a point table down to one flow direction.
pub fn points_with_flow(
    points: &'static [ConnectionPoint],
    flow: Flow,
) -> impl Iterator<Item = &'static ConnectionPoint> {
    points.iter().filter(move |p| p.flow == flow)
}
