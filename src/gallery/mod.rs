//! Searchable, filterable gallery of project templates.

pub mod filter;
pub mod state;
pub mod template;

pub use filter::*;
pub use state::*;
pub use template::*;
