pub mod descriptor;
pub mod kind;
pub mod status;

pub use descriptor::*;
pub use kind::*;
pub use status::*;
