pub mod config;
pub mod options;

pub use config::{FileConfig, CONFIG_ENV_VAR};
pub use options::{GenerateOptions, RawOptions};
