/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Endpoint addresses.

use fixprobe_core::error::SessionError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where the counterparty listens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Unix domain stream socket.
    Unix(PathBuf),
    /// TCP `host:port`.
    Tcp(String),
}

impl Endpoint {
    /// Parses `unix:/path`, a bare `/path`, or `tcp:host:port`.
    ///
    /// # Errors
    /// Returns `SessionError::Configuration` for an empty address, an unknown
    /// scheme, or a TCP address without a port.
    pub fn parse(s: &str) -> Result<Self, SessionError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SessionError::Configuration("empty endpoint".to_string()));
        }

        if let Some(path) = s.strip_prefix("unix:") {
            if path.is_empty() {
                return Err(SessionError::Configuration(
                    "unix endpoint without a path".to_string(),
                ));
            }
            return Ok(Self::Unix(PathBuf::from(path)));
        }

        if let Some(addr) = s.strip_prefix("tcp:") {
            return match addr.rsplit_once(':') {
                Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => {
                    Ok(Self::Tcp(addr.to_string()))
                }
                _ => Err(SessionError::Configuration(format!(
                    "tcp endpoint must be host:port, got {addr:?}"
                ))),
            };
        }

        if s.starts_with('/') || s.starts_with('.') {
            return Ok(Self::Unix(PathBuf::from(s)));
        }

        Err(SessionError::Configuration(format!(
            "unrecognized endpoint {s:?}; use unix:/path or tcp:host:port"
        )))
    }
}

impl FromStr for Endpoint {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix(path) => write!(f, "unix:{}", path.display()),
            Self::Tcp(addr) => write!(f, "tcp:{addr}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unix() {
        assert_eq!(
            "unix:/home/u/run/fix-proxy.sock".parse::<Endpoint>().unwrap(),
            Endpoint::Unix(PathBuf::from("/home/u/run/fix-proxy.sock"))
        );
        assert_eq!(
            "/tmp/fix.sock".parse::<Endpoint>().unwrap(),
            Endpoint::Unix(PathBuf::from("/tmp/fix.sock"))
        );
    }

    #[test]
    fn test_parse_tcp() {
        let endpoint: Endpoint = "tcp:127.0.0.1:9880".parse().unwrap();
        assert_eq!(endpoint, Endpoint::Tcp("127.0.0.1:9880".to_string()));
        assert_eq!(endpoint.to_string(), "tcp:127.0.0.1:9880");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "unix:", "tcp:localhost", "tcp::80", "tcp:host:port", "http://x"] {
            assert!(
                matches!(Endpoint::parse(bad), Err(SessionError::Configuration(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
