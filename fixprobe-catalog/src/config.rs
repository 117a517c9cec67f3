/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Identity shared by every message a catalog builds.

use fixprobe_core::types::CompId;
use serde::{Deserialize, Serialize};

/// FIX version written in tag 8.
pub const BEGIN_STRING: &str = "FIX.4.4";

/// Identities stamped into catalog messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// FIX version BeginString (tag 8).
    pub begin_string: String,
    /// Sender CompID (tag 49).
    pub sender_comp_id: CompId,
    /// Target CompID (tag 56).
    pub target_comp_id: CompId,
    /// Account (tag 1).
    pub account: String,
    /// Exchange (tag 207).
    pub exchange: String,
    /// Symbol (tag 55).
    pub symbol: String,
}

impl CatalogConfig {
    /// Creates a configuration for the given comp ids.
    ///
    /// Account, exchange and symbol start empty; set them with
    /// [`with_account`](Self::with_account) and
    /// [`with_instrument`](Self::with_instrument).
    #[must_use]
    pub fn new(sender_comp_id: CompId, target_comp_id: CompId) -> Self {
        Self {
            begin_string: BEGIN_STRING.to_string(),
            sender_comp_id,
            target_comp_id,
            account: String::new(),
            exchange: String::new(),
            symbol: String::new(),
        }
    }

    /// Sets the account.
    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    /// Sets the exchange and symbol.
    #[must_use]
    pub fn with_instrument(mut self, exchange: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.exchange = exchange.into();
        self.symbol = symbol.into();
        self
    }

    /// Overrides the BeginString.
    #[must_use]
    pub fn with_begin_string(mut self, begin_string: impl Into<String>) -> Self {
        self.begin_string = begin_string.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_config_defaults() {
        let config = CatalogConfig::new(
            CompId::new("test").unwrap(),
            CompId::new("proxy").unwrap(),
        );
        assert_eq!(config.begin_string, "FIX.4.4");
        assert_eq!(config.sender_comp_id.as_str(), "test");
        assert_eq!(config.target_comp_id.as_str(), "proxy");
        assert!(config.account.is_empty());
    }

    #[test]
    fn test_catalog_config_with_instrument() {
        let config = CatalogConfig::new(
            CompId::new("test").unwrap(),
            CompId::new("proxy").unwrap(),
        )
        .with_account("A1")
        .with_instrument("deribit", "BTC-PERPETUAL");

        assert_eq!(config.account, "A1");
        assert_eq!(config.exchange, "deribit");
        assert_eq!(config.symbol, "BTC-PERPETUAL");
    }
}
