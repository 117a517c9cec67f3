/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Opening a stream to an [`Endpoint`].
//!
//! Unix and TCP streams are both returned as a [`BoxedStream`] so the
//! session driver does not care which one it holds.

use crate::endpoint::Endpoint;
use fixprobe_core::error::SessionError;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// A bidirectional byte stream the driver can own.
pub trait AsyncStream: AsyncRead + AsyncWrite + Unpin + Send {}

impl<T: AsyncRead + AsyncWrite + Unpin + Send> AsyncStream for T {}

/// Type-erased connection stream.
pub type BoxedStream = Box<dyn AsyncStream>;

/// Connects to `endpoint`, giving up after `connect_timeout`.
///
/// # Errors
/// Returns `SessionError::Connection` if the endpoint refuses, does not
/// exist, or does not answer in time.
pub async fn connect(
    endpoint: &Endpoint,
    connect_timeout: Duration,
) -> Result<BoxedStream, SessionError> {
    debug!(%endpoint, ?connect_timeout, "Connecting");

    let result = timeout(connect_timeout, open(endpoint)).await;
    match result {
        Ok(Ok(stream)) => {
            info!(%endpoint, "Connected");
            Ok(stream)
        }
        Ok(Err(e)) => {
            warn!(%endpoint, error = %e, "Connection failed");
            Err(SessionError::Connection(format!("{endpoint}: {e}")))
        }
        Err(_) => {
            warn!(%endpoint, "Connection timeout");
            Err(SessionError::Connection(format!(
                "{endpoint}: timed out after {} ms",
                connect_timeout.as_millis()
            )))
        }
    }
}

async fn open(endpoint: &Endpoint) -> std::io::Result<BoxedStream> {
    match endpoint {
        Endpoint::Tcp(addr) => {
            let stream = TcpStream::connect(addr.as_str()).await?;
            stream.set_nodelay(true)?;
            Ok(Box::new(stream))
        }
        #[cfg(unix)]
        Endpoint::Unix(path) => {
            let stream = tokio::net::UnixStream::connect(path).await?;
            Ok(Box::new(stream))
        }
        #[cfg(not(unix))]
        Endpoint::Unix(_) => Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "unix domain sockets are not available on this platform",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_connect_missing_unix_socket() {
        let endpoint = Endpoint::Unix(PathBuf::from("/nonexistent/fixprobe/fix-proxy.sock"));
        let result = connect(&endpoint, Duration::from_secs(1)).await;
        assert!(matches!(result, Err(SessionError::Connection(_))));
    }

    #[tokio::test]
    async fn test_connect_refused_tcp() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoint = Endpoint::Tcp(addr.to_string());
        let result = connect(&endpoint, Duration::from_secs(1)).await;
        assert!(matches!(result, Err(SessionError::Connection(_))));
    }

    #[tokio::test]
    async fn test_connect_tcp_round_trip() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 5];
            socket.read_exact(&mut buf).await.unwrap();
            socket.write_all(&buf).await.unwrap();
        });

        let mut stream = connect(&Endpoint::Tcp(addr.to_string()), Duration::from_secs(1))
            .await
            .unwrap();
        stream.write_all(b"35=0\x01").await.unwrap();
        let mut echo = [0u8; 5];
        stream.read_exact(&mut echo).await.unwrap();
        assert_eq!(&echo, b"35=0\x01");
        server.await.unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_connect_unix() {
        let path = std::env::temp_dir().join(format!("fixprobe-connect-{}.sock", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let listener = tokio::net::UnixListener::bind(&path).unwrap();

        let endpoint = Endpoint::Unix(path.clone());
        let (client, accepted) = tokio::join!(
            connect(&endpoint, Duration::from_secs(1)),
            listener.accept()
        );
        assert!(client.is_ok());
        assert!(accepted.is_ok());
        let _ = std::fs::remove_file(&path);
    }
}
