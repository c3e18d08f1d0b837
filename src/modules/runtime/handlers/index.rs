//! Connectivity check handler

use axum::extract::State;

use crate::state::AppState;

/// Handler for the root route
pub struct IndexHandler;

impl IndexHandler {
    /// Handle GET /
    ///
    /// Always answers 200 with a plain-text body; failures are reported in
    /// the body.
    pub async fn handle(State(state): State<AppState>) -> String {
        state.executor.probe().await.to_string()
    }
}
