//! Command-line interface modules.

pub mod config;
pub mod serve;
