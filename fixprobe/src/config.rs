/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Harness configuration loaded from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `FIX_ENDPOINT` | `$HOME/run/fix-proxy.sock` |
//! | `FIX_SENDER` / `FIX_TARGET` | `test` / `proxy` |
//! | `FIX_USERNAME` / `FIX_PASSWORD` | `trader` / `secret` |
//! | `FIX_ACCOUNT` | `A1` |
//! | `FIX_EXCHANGE` / `FIX_SYMBOL` | `deribit` / `BTC-PERPETUAL` |
//! | `FIX_SCENARIO` | `positions` |
//! | `FIX_READ_TIMEOUT_SECS` | unset (block) |
//! | `FIX_VERIFY_LOGON` | `false` |

use fixprobe_catalog::{CatalogConfig, Logon};
use fixprobe_core::error::SessionError;
use fixprobe_core::types::CompId;
use fixprobe_session::SessionConfig;
use std::env;
use std::time::Duration;

/// Socket path under `$HOME` used when `FIX_ENDPOINT` is unset.
pub const DEFAULT_SOCKET: &str = "run/fix-proxy.sock";

/// Scenario run when `FIX_SCENARIO` is unset.
pub const DEFAULT_SCENARIO: &str = "positions";

/// Everything one harness run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Endpoint address.
    pub endpoint: String,
    /// Sender CompID.
    pub sender_comp_id: String,
    /// Target CompID.
    pub target_comp_id: String,
    /// Logon username.
    pub username: String,
    /// Logon password.
    pub password: String,
    /// Trading account.
    pub account: String,
    /// Exchange.
    pub exchange: String,
    /// Symbol.
    pub symbol: String,
    /// Built-in scenario name.
    pub scenario: String,
    /// Per-read deadline.
    pub read_timeout: Option<Duration>,
    /// Whether the Logon response must be a Logon.
    pub verify_logon_ack: bool,
}

impl HarnessConfig {
    /// Loads the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the configuration from an arbitrary variable lookup.
    ///
    /// Unset and unparsable numeric values fall back to their defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let endpoint = lookup("FIX_ENDPOINT").unwrap_or_else(|| {
            let home = lookup("HOME").unwrap_or_default();
            format!("{home}/{DEFAULT_SOCKET}")
        });

        Self {
            endpoint,
            sender_comp_id: var("FIX_SENDER", "test"),
            target_comp_id: var("FIX_TARGET", "proxy"),
            username: var("FIX_USERNAME", "trader"),
            password: var("FIX_PASSWORD", "secret"),
            account: var("FIX_ACCOUNT", "A1"),
            exchange: var("FIX_EXCHANGE", "deribit"),
            symbol: var("FIX_SYMBOL", "BTC-PERPETUAL"),
            scenario: var("FIX_SCENARIO", DEFAULT_SCENARIO),
            read_timeout: lookup("FIX_READ_TIMEOUT_SECS")
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            verify_logon_ack: lookup("FIX_VERIFY_LOGON")
                .is_some_and(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "y")),
        }
    }

    /// Returns the session options.
    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(self.endpoint.as_str())
            .with_read_timeout(self.read_timeout)
            .with_verify_logon_ack(self.verify_logon_ack)
    }

    /// Returns the catalog identity.
    ///
    /// # Errors
    /// Returns `SessionError::Configuration` if a CompID is empty or longer
    /// than 32 bytes.
    pub fn catalog_config(&self) -> Result<CatalogConfig, SessionError> {
        Ok(
            CatalogConfig::new(comp_id(&self.sender_comp_id)?, comp_id(&self.target_comp_id)?)
                .with_account(self.account.as_str())
                .with_instrument(self.exchange.as_str(), self.symbol.as_str()),
        )
    }

    /// Returns the Logon parameters.
    #[must_use]
    pub fn logon(&self) -> Logon {
        Logon::new(self.username.as_str(), self.password.as_str())
    }
}

fn comp_id(value: &str) -> Result<CompId, SessionError> {
    if value.is_empty() {
        return Err(SessionError::Configuration("empty CompID".to_string()));
    }
    CompId::new(value)
        .ok_or_else(|| SessionError::Configuration(format!("CompID too long: {value:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = HarnessConfig::from_lookup(lookup(&[("HOME", "/home/u")]));

        assert_eq!(config.endpoint, "/home/u/run/fix-proxy.sock");
        assert_eq!(config.sender_comp_id, "test");
        assert_eq!(config.target_comp_id, "proxy");
        assert_eq!(config.username, "trader");
        assert_eq!(config.account, "A1");
        assert_eq!(config.symbol, "BTC-PERPETUAL");
        assert_eq!(config.scenario, "positions");
        assert_eq!(config.read_timeout, None);
        assert!(!config.verify_logon_ack);
    }

    #[test]
    fn test_overrides() {
        let config = HarnessConfig::from_lookup(lookup(&[
            ("FIX_ENDPOINT", "tcp:127.0.0.1:9880"),
            ("FIX_SENDER", "alice"),
            ("FIX_SCENARIO", "market-data"),
            ("FIX_READ_TIMEOUT_SECS", "5"),
            ("FIX_VERIFY_LOGON", "TRUE"),
        ]));

        assert_eq!(config.endpoint, "tcp:127.0.0.1:9880");
        assert_eq!(config.sender_comp_id, "alice");
        assert_eq!(config.scenario, "market-data");
        assert_eq!(config.read_timeout, Some(Duration::from_secs(5)));
        assert!(config.verify_logon_ack);

        let session = config.session_config();
        assert_eq!(session.read_timeout, Some(Duration::from_secs(5)));
        assert!(session.verify_logon_ack);
    }

    #[test]
    fn test_bad_timeout_falls_back() {
        let config = HarnessConfig::from_lookup(lookup(&[("FIX_READ_TIMEOUT_SECS", "soon")]));
        assert_eq!(config.read_timeout, None);
    }

    #[test]
    fn test_catalog_config() {
        let config = HarnessConfig::from_lookup(lookup(&[]));
        let catalog = config.catalog_config().unwrap();
        assert_eq!(catalog.sender_comp_id.as_str(), "test");
        assert_eq!(catalog.exchange, "deribit");

        let long = "x".repeat(40);
        let bad = HarnessConfig::from_lookup(lookup(&[("FIX_TARGET", long.as_str())]));
        assert!(matches!(
            bad.catalog_config(),
            Err(SessionError::Configuration(_))
        ));
    }
}
