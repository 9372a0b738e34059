//! Common test infrastructure for termtint integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]

pub mod assertions;
pub mod cli;

pub use assertions::*;
pub use cli::{run, run_with_env, CliOutput};
