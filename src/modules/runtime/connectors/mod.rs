//! Database connectors for bindcheck
//!
//! This module provides the connector seam and its MySQL implementation.

#[cfg(test)]
pub(crate) mod mock;
mod mysql;
mod traits;

pub use mysql::{MySqlConnector, MySqlSession};
pub use traits::{Connector, Session};
