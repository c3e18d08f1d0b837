//! bindcheck CLI
//!
//! This crate provides the command-line interface for bindcheck:
//! - run: Start the server (default)
//! - check: Probe the bound database once

pub mod commands;

pub use commands::{Cli, Commands};
