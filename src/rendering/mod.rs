pub mod format;

pub use format::OutputFormat;
