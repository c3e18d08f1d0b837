//! Shared runtime application state (HTTP handlers)

use crate::executor::ProbeExecutor;
use std::sync::Arc;

/// Application state shared across handlers.
///
/// Immutable; every request builds its own connection.
#[derive(Clone)]
pub struct AppState {
    pub executor: Arc<ProbeExecutor>,
}

impl AppState {
    pub fn new(executor: Arc<ProbeExecutor>) -> Self {
        Self { executor }
    }
}
