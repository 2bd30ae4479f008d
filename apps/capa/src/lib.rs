//! # capa
//!
//! Command-line driver for `capa-core`: configuration loading, graph scripts
//! and the CLI command set. The binary in `main.rs` only wires logging and
//! dispatches to `cli::execute`.

pub mod cli;
pub mod config;
pub mod script;
