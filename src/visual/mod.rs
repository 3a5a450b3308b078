//! Node visual classification: node kind and execution status in, shape, colours,
//! icons and connection points out.
//!
//! Every function here is total and pure. Unrecognized kinds fall back to the
//! standard shape and gear icon, unrecognized statuses to the pending palette and
//! clock icon.

pub mod handles;
pub mod icon;
pub mod palette;
pub mod render;
pub mod shape;

pub use handles::{CircularRole, ConnectionPoint, Direction, Flow, connection_points};
pub use icon::{IconAnimation, IconId, animation_for_status, icon_for_kind, icon_for_status};
pub use palette::{StatusPalette, colors_for_status};
pub use render::RenderSpec;
pub use shape::{ShapeVariant, classify_shape};
