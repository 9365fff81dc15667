//! Darkroom - In-memory image filter web service.
//!
//! Library surface for the `darkroom` binary; exposed so integration
//! tests can build the router without a running process.

pub mod cli;
pub mod logging;
pub mod server;
