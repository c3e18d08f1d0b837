//! Check command implementation

use bindcheck_core::{BindcheckError, ServerConfig};
use bindcheck_runtime::Runtime;
use bindcheck_types::ProbeResponse;
use clap::Args;

/// Check command arguments
#[derive(Args, Debug, Default)]
pub struct CheckCommand {}

impl CheckCommand {
    /// Check the process environment once and print the body.
    /// The error is returned so the process exits non-zero.
    pub async fn execute(&self, config: ServerConfig) -> Result<(), BindcheckError> {
        self.run_once(&Runtime::new(config)).await
    }

    /// Check once through an existing runtime
    pub async fn run_once(&self, runtime: &Runtime) -> Result<(), BindcheckError> {
        match runtime.executor().check().await {
            Ok(time) => {
                println!("{}", ProbeResponse::connected(time));
                Ok(())
            }
            Err(e) => {
                println!("{}", ProbeResponse::failed(e.to_string()));
                Err(e)
            }
        }
    }
}
