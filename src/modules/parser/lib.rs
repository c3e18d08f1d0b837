//! Service-binding environment parsing for bindcheck
//!
//! This crate reads the platform-injected environment and resolves
//! database connection credentials from `VCAP_SERVICES`.

pub mod env;
pub mod vcap;

pub use env::EnvSource;
pub use vcap::BindingResolver;
