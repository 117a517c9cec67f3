/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Frame callback interface.
//!
//! The harness never interprets counterparty traffic: whatever arrives is
//! handed to a [`FrameHandler`] as raw bytes, one read at a time.

use async_trait::async_trait;

/// Callback interface for observing a session.
///
/// Implement this trait to print, record or assert on the traffic the
/// driver sends and receives.
#[async_trait]
pub trait FrameHandler: Send + Sync {
    /// Called with every chunk read from the stream.
    ///
    /// A chunk is exactly what one read returned; it may hold part of a
    /// frame or several frames.
    async fn on_frame(&self, chunk: &[u8]);

    /// Called after a frame has been written.
    async fn on_sent(&self, _frame: &[u8]) {}

    /// Called once when the first response to our Logon arrives.
    async fn on_logon(&self) {}

    /// Called when the counterparty closes the stream.
    async fn on_closed(&self) {}
}

/// Handler that ignores everything.
#[derive(Debug, Default)]
pub struct NoOpHandler;

#[async_trait]
impl FrameHandler for NoOpHandler {
    async fn on_frame(&self, _chunk: &[u8]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_handler() {
        let handler = NoOpHandler;
        handler.on_sent(b"8=FIX.4.4\x01").await;
        handler.on_frame(b"8=FIX.4.4\x01").await;
        handler.on_logon().await;
        handler.on_closed().await;
    }
}
