pub mod conversion;
pub mod definition;
pub mod renderer;

pub use conversion::*;
pub use definition::*;
pub use renderer::*;
