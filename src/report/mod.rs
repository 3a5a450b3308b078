pub mod formatter;

pub use formatter::SummaryFormatter;
