//! Environment variable access

use bindcheck_core::error::{BindcheckError, Result};
use std::collections::HashMap;
use std::path::PathBuf;

/// Name of the service-binding variable
pub const VCAP_SERVICES: &str = "VCAP_SERVICES";

/// Name of the application metadata variable
pub const VCAP_APPLICATION: &str = "VCAP_APPLICATION";

/// Where environment variables are read from
#[derive(Debug, Clone, Default)]
pub enum EnvSource {
    /// The real process environment, read on every lookup
    #[default]
    Process,
    /// A fixed set of variables
    Fixed(HashMap<String, String>),
}

impl EnvSource {
    /// Read from the process environment
    pub fn process() -> Self {
        Self::Process
    }

    /// Read from a fixed set of variables
    pub fn fixed<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Fixed(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Look up a variable. Unset, empty and non-unicode values are all `None`.
    pub fn var(&self, name: &str) -> Option<String> {
        let value = match self {
            EnvSource::Process => std::env::var(name).ok(),
            EnvSource::Fixed(vars) => vars.get(name).cloned(),
        };
        value.filter(|v| !v.is_empty())
    }

    /// Look up a variable that must be present
    pub fn require(&self, name: &str) -> Result<String> {
        self.var(name)
            .ok_or_else(|| BindcheckError::EnvVarNotFound(name.to_string()))
    }

    /// Load a `.env` file from the working directory, if any.
    ///
    /// Variables already set in the process environment are not overridden.
    pub fn load_dotenv() -> Option<PathBuf> {
        dotenvy::dotenv().ok()
    }
}
