//! Explicit client context passed to every SDK operation.
//!
//! There is no process-wide default client: callers build one
//! `AtlanClient` and hand it to the service functions.

use crate::config::{ClientConfig, ConfigError};
use crate::transport::AssetTransport;

/// Configuration plus the transport all calls go through.
pub struct AtlanClient<T: AssetTransport> {
    config: ClientConfig,
    transport: T,
}

impl<T: AssetTransport> AtlanClient<T> {
    /// Creates a client after validating `config`.
    pub fn new(config: ClientConfig, transport: T) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    /// Creates a client with default configuration.
    pub fn with_defaults(transport: T) -> Self {
        Self {
            config: ClientConfig::default(),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }
}
