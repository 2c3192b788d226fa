//! Network endpoint resolution.
//!
//! Each supported network maps to the keymanager API base URL used for the
//! TCP connection and the virtual host presented in the `Host` header. The
//! remote is reached by service name but routes requests by logical hostname.

use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{MigrationError, MigrationResult};

/// Path of the keymanager import endpoint.
pub const KEYSTORES_PATH: &str = "/eth/v1/keystores";

/// Supported networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Prater,
    Gnosis,
    Mainnet,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Prater, Network::Gnosis, Network::Mainnet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Prater => "prater",
            Network::Gnosis => "gnosis",
            Network::Mainnet => "mainnet",
        }
    }

    /// Static endpoint table.
    pub fn endpoints(&self) -> Endpoints {
        let (base_url, virtual_host) = match self {
            Network::Prater => (
                "http://web3signer.web3signer-prater.dappnode:9000",
                "prysm.migration-prater.dappnode",
            ),
            Network::Gnosis => (
                "http://web3signer.web3signer-gnosis.dappnode:9000",
                "prysm.migration-gnosis.dappnode",
            ),
            Network::Mainnet => (
                "http://web3signer.web3signer.dappnode:9000",
                "prysm.migration.dappnode",
            ),
        };
        Endpoints::new(base_url, virtual_host)
    }
}

impl FromStr for Network {
    type Err = MigrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| MigrationError::UnsupportedNetwork(s.to_string()))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where import requests are delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Base URL used for the connection (scheme, host, port).
    pub base_url: String,
    /// Value of the `Host` header.
    pub virtual_host: String,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>, virtual_host: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            virtual_host: virtual_host.into(),
        }
    }

    /// Full URL of the import endpoint.
    pub fn keystores_url(&self) -> MigrationResult<Url> {
        Url::parse(&self.base_url)
            .and_then(|base| base.join(KEYSTORES_PATH))
            .map_err(|e| {
                MigrationError::InvalidArgument(format!(
                    "invalid API base URL '{}': {}",
                    self.base_url, e
                ))
            })
    }
}

/// Resolve a network identifier into its endpoints.
pub fn resolve(network: &str) -> MigrationResult<Endpoints> {
    Ok(network.parse::<Network>()?.endpoints())
}
