//! Termtint - terminal palettes from one seed color
//!
//! Command-line front end for the `contrast-palette` crate: option and
//! config-file handling, output renderers and logging. This library exposes
//! modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
