/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Prints traffic to a writer, SOH shown as `|`.

use async_trait::async_trait;
use fixprobe_engine::FrameHandler;
use fixprobe_tagvalue::printable;
use parking_lot::Mutex;
use std::io::Write;
use tracing::{info, warn};

/// Frame handler that writes one line per sent frame and per received chunk.
#[derive(Debug)]
pub struct ConsoleHandler<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleHandler<std::io::Stdout> {
    /// Creates a handler printing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleHandler<W> {
    /// Creates a handler printing to `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn line(&self, prefix: &str, bytes: &[u8]) {
        let mut out = self.out.lock();
        if let Err(e) = writeln!(out, "{prefix}{}", printable(bytes)).and_then(|()| out.flush()) {
            warn!(error = %e, "Failed to print frame");
        }
    }
}

#[async_trait]
impl<W: Write + Send> FrameHandler for ConsoleHandler<W> {
    async fn on_frame(&self, chunk: &[u8]) {
        self.line("", chunk);
    }

    async fn on_sent(&self, frame: &[u8]) {
        self.line("> ", frame);
    }

    async fn on_logon(&self) {
        info!("Logon acknowledged");
    }

    async fn on_closed(&self) {
        info!("Connection closed by counterparty");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_console_lines() {
        let handler = ConsoleHandler::new(Vec::new());
        handler.on_sent(b"8=FIX.4.4\x0135=5\x01").await;
        handler.on_frame(b"8=FIX.4.4\x0135=A\x01").await;

        let text = String::from_utf8(handler.into_inner()).unwrap();
        assert_eq!(text, "> 8=FIX.4.4|35=5|\n8=FIX.4.4|35=A|\n");
    }
}
