//! Runtime server for bindcheck
//!
//! This crate provides the HTTP server, the database connector, and the
//! probe executor behind the connectivity check route.

pub mod connectors;
pub mod executor;
pub mod handlers;
pub mod server;
pub mod state;

pub use connectors::{Connector, MySqlConnector, Session};
pub use executor::ProbeExecutor;
pub use handlers::IndexHandler;
pub use server::Runtime;
