// AWS credential selection and client configuration
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    Context,
    Result,
};
use aws_config::meta::region::RegionProviderChain;
use aws_credential_types::Credentials;
use aws_types::region::Region;
use aws_types::SdkConfig;
use std::env;
use tracing::debug;

/// Environment variable holding the access key id.
pub const ACCESS_KEY: &str = "AWS_ACCESS_KEY_ID";

/// Environment variable holding the secret access key.
pub const SECRET_KEY: &str = "AWS_SECRET_ACCESS_KEY";

/// Environment variable holding the session token.
pub const SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

// Region used for account wide calls when the environment doesn't name one.
const DEFAULT_REGION: &str = "us-east-1";

/// Where client credentials come from.
#[derive(Clone, Debug)]
pub enum CredentialSource {
    /// A named profile, or the default profile when `None`.
    Profile(Option<String>),

    /// Explicit keys taken from the fixed environment variables.
    Environment,
}

impl CredentialSource {
    /// Build an `SdkConfig` scoped to `region`.
    ///
    /// Metrics clients must pass a region. Account wide clients pass `None`
    /// and fall back to the environment, then `us-east-1`.
    ///
    /// There are no retries here. A missing environment variable or an
    /// unusable profile means nothing downstream can work, so the error
    /// propagates immediately.
    pub async fn sdk_config(&self, region: Option<Region>) -> Result<SdkConfig> {
        let loader = match self {
            Self::Profile(Some(profile)) => {
                debug!("sdk_config: using profile '{}'", profile);

                aws_config::from_env().profile_name(profile)
            },
            Self::Profile(None) => aws_config::from_env(),
            Self::Environment => {
                let access_key = env::var(ACCESS_KEY)
                    .with_context(|| format!("{} is not set", ACCESS_KEY))?;

                let secret_key = env::var(SECRET_KEY)
                    .with_context(|| format!("{} is not set", SECRET_KEY))?;

                let session_token = env::var(SESSION_TOKEN).ok();

                let credentials = Credentials::from_keys(
                    access_key,
                    secret_key,
                    session_token,
                );

                aws_config::from_env().credentials_provider(credentials)
            },
        };

        let config = match region {
            Some(region) => loader.region(region).load().await,
            None => {
                let chain = RegionProviderChain::default_provider()
                    .or_else(DEFAULT_REGION);

                loader.region(chain).load().await
            },
        };

        Ok(config)
    }
}
