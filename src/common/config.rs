// Run configuration parsing
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    Context,
    Result,
};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use super::credentials::CredentialSource;
use super::storage_types::{
    ALL_STORAGE_TYPES,
    STANDARD_STORAGE,
};
use tracing::debug;

/// The run configuration file read at startup.
pub const INPUT_CONFIGS_FILE: &str = "input_configs.json";

// Matches the session factory default: profiles unless told otherwise.
fn default_through_profile() -> bool {
    true
}

/// Options recognised in `input_configs.json`.
///
/// Unknown keys are rejected so that a typo'd option fails the run instead
/// of being silently ignored.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Replay the cached records of the previous run instead of querying
    /// the provider.
    #[serde(default)]
    pub use_cached: bool,

    /// Authenticate via a named profile rather than environment variables.
    #[serde(default = "default_through_profile")]
    pub through_profile: bool,

    /// Profile to use when `through_profile` is set. `None` selects the
    /// default profile.
    #[serde(default)]
    pub profile_name: Option<String>,

    /// Query the standard storage class only.
    #[serde(default)]
    pub only_standard_storage: bool,

    /// Query every storage class we know about.
    #[serde(default)]
    pub all_storage_types: bool,

    /// Explicit list of storage classes to query.
    #[serde(default)]
    pub custom_storage_types: Vec<String>,
}

impl RunConfig {
    /// Read the run configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("load: reading '{}'", path.display());

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?;

        let config = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse '{}'", path.display()))?;

        Ok(config)
    }

    /// Storage classes selected for this run.
    ///
    /// Precedence: `only_standard_storage` over `all_storage_types` over
    /// `custom_storage_types`.
    pub fn storage_types(&self) -> Vec<String> {
        if self.only_standard_storage {
            to_owned(STANDARD_STORAGE)
        }
        else if self.all_storage_types {
            to_owned(ALL_STORAGE_TYPES)
        }
        else {
            self.custom_storage_types.clone()
        }
    }

    /// Credential source matching the configured credential mode.
    pub fn credential_source(&self) -> CredentialSource {
        if self.through_profile {
            CredentialSource::Profile(self.profile_name.clone())
        }
        else {
            CredentialSource::Environment
        }
    }
}

fn to_owned(storage_types: &[&str]) -> Vec<String> {
    storage_types.iter().map(|s| (*s).to_string()).collect()
}
