//! Run command implementation

use bindcheck_core::{BindcheckError, ServerConfig};
use bindcheck_runtime::Runtime;
use clap::Args;
use tracing::info;

/// Run command arguments
#[derive(Args, Debug, Default)]
pub struct RunCommand {}

impl RunCommand {
    /// Execute the run command
    pub async fn execute(&self, config: ServerConfig) -> Result<(), BindcheckError> {
        info!("Resolving '{}' from VCAP_SERVICES on every request", config.service);

        let runtime = Runtime::new(config);
        runtime.run().await
    }
}
