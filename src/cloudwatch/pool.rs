// Lazily built per region CloudWatch clients
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use crate::common::CredentialSource;
use std::collections::HashMap;
use super::client::Client;
use tracing::debug;

/// Holds one CloudWatch `Client` per distinct bucket region.
///
/// Clients are created lazily the first time a region shows up and are
/// never rebuilt within a run. The pool is bounded by the number of
/// distinct regions, which stays small, so there is no eviction.
pub struct ClientPool {
    credentials: CredentialSource,
    clients:     HashMap<String, Client>,
}

impl ClientPool {
    /// Return a new, empty, `ClientPool`.
    pub fn new(credentials: CredentialSource) -> Self {
        Self {
            credentials,
            clients: HashMap::new(),
        }
    }

    /// Return the `Client` for `region`, creating it on first use.
    pub async fn ensure(&mut self, region: &str) -> Result<&Client> {
        if !self.clients.contains_key(region) {
            debug!("ensure: creating CloudWatch client for '{}'", region);

            let client = Client::new(&self.credentials, region).await?;

            self.clients.insert(region.to_string(), client);
        }

        Ok(&self.clients[region])
    }

    /// Number of clients created so far.
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// True while no client has been created yet.
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
