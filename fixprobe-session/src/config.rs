/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Session configuration.
//!
//! This module provides the connection and read options of one session.

use fixprobe_core::error::SessionError;
use std::time::Duration;

/// Bytes requested per read.
pub const DEFAULT_READ_CHUNK_SIZE: usize = 4096;

/// Configuration for a harness session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Endpoint address: `unix:/path`, `/path` or `tcp:host:port`.
    pub endpoint: String,
    /// Maximum bytes returned by a single receive.
    pub read_chunk_size: usize,
    /// Deadline for establishing the connection.
    pub connect_timeout: Duration,
    /// Deadline for each read; `None` blocks until data or close.
    pub read_timeout: Option<Duration>,
    /// Whether the first frame after a Logon must be 35=A.
    pub verify_logon_ack: bool,
}

impl SessionConfig {
    /// Creates a new session configuration for the given endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
            connect_timeout: Duration::from_secs(10),
            read_timeout: None,
            verify_logon_ack: false,
        }
    }

    /// Sets the read chunk size.
    #[must_use]
    pub const fn with_read_chunk_size(mut self, size: usize) -> Self {
        self.read_chunk_size = size;
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the per-read deadline.
    #[must_use]
    pub fn with_read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Sets whether the Logon response is checked for 35=A.
    #[must_use]
    pub const fn with_verify_logon_ack(mut self, verify: bool) -> Self {
        self.verify_logon_ack = verify;
        self
    }

    /// Checks the values a driver cannot work with.
    ///
    /// # Errors
    /// Returns `SessionError::Configuration` for an empty endpoint or a zero
    /// read chunk size.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.endpoint.trim().is_empty() {
            return Err(SessionError::Configuration("endpoint is empty".to_string()));
        }
        if self.read_chunk_size == 0 {
            return Err(SessionError::Configuration(
                "read_chunk_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for session configuration.
#[derive(Debug, Default)]
pub struct SessionConfigBuilder {
    endpoint: Option<String>,
    read_chunk_size: Option<usize>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    verify_logon_ack: bool,
}

impl SessionConfigBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the read chunk size.
    #[must_use]
    pub const fn read_chunk_size(mut self, size: usize) -> Self {
        self.read_chunk_size = Some(size);
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the per-read deadline.
    #[must_use]
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Sets whether the Logon response is checked for 35=A.
    #[must_use]
    pub const fn verify_logon_ack(mut self, verify: bool) -> Self {
        self.verify_logon_ack = verify;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// Returns `SessionError::Configuration` if the endpoint is missing or
    /// a value fails [`SessionConfig::validate`].
    pub fn build(self) -> Result<SessionConfig, SessionError> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| SessionError::Configuration("endpoint is required".to_string()))?;

        let mut config = SessionConfig::new(endpoint)
            .with_read_timeout(self.read_timeout)
            .with_verify_logon_ack(self.verify_logon_ack);
        if let Some(size) = self.read_chunk_size {
            config.read_chunk_size = size;
        }
        if let Some(timeout) = self.connect_timeout {
            config.connect_timeout = timeout;
        }

        config.validate()?;
        Ok(config)
    }
}
