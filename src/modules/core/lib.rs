//! Core domain logic for bindcheck
//!
//! This crate contains the connection credentials model, server
//! configuration, and error types shared by the parser and runtime.

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::{BindcheckError, ErrorKind};
