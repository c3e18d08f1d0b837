//! Type definitions for bindcheck
//!
//! This crate contains the wire types shared across the bindcheck codebase:
//! the platform-injected service-binding documents and the probe response.

pub mod application;
pub mod binding;
pub mod runtime;

pub use application::VcapApplication;
pub use binding::{BindingCredentials, ServiceBinding, VcapServices};
pub use runtime::ProbeResponse;
