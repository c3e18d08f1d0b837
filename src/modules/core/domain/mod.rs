//! Domain models for bindcheck

mod credentials;
mod types;

pub use credentials::ConnectionCredentials;
pub use types::ServerConfig;
