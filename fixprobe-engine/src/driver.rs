/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Session driver.
//!
//! The driver owns one stream. It writes catalog messages, reads raw chunks
//! and moves the [`Session`] through its states. Every call takes
//! `&mut self`, so a send and a receive never overlap.

use crate::handler::FrameHandler;
use crate::scenario::{Scenario, Step};
use bytes::{Bytes, BytesMut};
use fixprobe_catalog::Catalog;
use fixprobe_core::error::{FixError, SessionError};
use fixprobe_core::message::MsgType;
use fixprobe_session::{Session, SessionConfig, SessionState};
use fixprobe_tagvalue::{Decoder, Message};
use fixprobe_transport::{AsyncStream, BoxedStream, Endpoint};
use std::time::Instant;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Bytes of a Logon response kept while waiting for its 35 field.
const LOGON_HEADER_LIMIT: usize = 256;

/// Drives one harness connection.
pub struct SessionDriver<S: AsyncStream = BoxedStream> {
    stream: S,
    config: SessionConfig,
    session: Session,
    /// Start of the Logon response seen so far, when it is being checked.
    logon_response: BytesMut,
}

impl SessionDriver<BoxedStream> {
    /// Opens the configured endpoint.
    ///
    /// # Errors
    /// Returns `SessionError::Configuration` for a bad endpoint and
    /// `SessionError::Connection` if the endpoint cannot be reached. Nothing
    /// has been sent when either is returned.
    pub async fn connect(config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let endpoint = Endpoint::parse(&config.endpoint)?;
        let stream = fixprobe_transport::connect(&endpoint, config.connect_timeout).await?;
        Self::with_stream(stream, config)
    }
}

impl<S: AsyncStream> SessionDriver<S> {
    /// Wraps an already connected stream.
    ///
    /// # Errors
    /// Returns `SessionError::Configuration` if `config` is invalid.
    pub fn with_stream(stream: S, config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let mut session = Session::new();
        session.connect()?;
        Ok(Self {
            stream,
            config,
            session,
            logon_response: BytesMut::new(),
        })
    }

    /// Returns the current session state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.session.state()
    }

    /// Returns the configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Encodes and writes one message, returning the bytes written.
    ///
    /// The frame is written in a single `write_all` and flushed. A Logon
    /// sent while connected arms the acknowledgement handled by
    /// [`receive`](Self::receive).
    ///
    /// # Errors
    /// Returns `FixError::Encode` if the message cannot be encoded (nothing
    /// is written), `SessionError::InvalidState` once closed and
    /// `SessionError::Connection` if the write fails.
    pub async fn send(&mut self, message: &Message) -> Result<Bytes, FixError> {
        self.session.ensure_can_send()?;
        let frame = message.encode()?.freeze();

        self.stream
            .write_all(&frame)
            .await
            .map_err(SessionError::from)?;
        self.stream.flush().await.map_err(SessionError::from)?;

        let msg_type = message.msg_type();
        debug!(msg_type = ?msg_type, bytes = frame.len(), "Sent frame");
        if msg_type == Some(MsgType::Logon) {
            self.session.logon_sent();
            self.logon_response.clear();
        }
        Ok(frame)
    }

    /// Reads one chunk of at most `read_chunk_size` bytes.
    ///
    /// Returns `None` once the counterparty has closed the stream; the
    /// session is then `Closed` and every later call returns `None` too.
    /// When the Logon response is checked, chunks are still returned as they
    /// arrive and the session stays `Connected` until the response's 35
    /// field has been read.
    ///
    /// # Errors
    /// Returns `SessionError::ReadTimeout` when the read deadline elapses,
    /// `SessionError::Connection` if the read fails and
    /// `SessionError::ProtocolViolation` when the Logon response is checked
    /// and is not a Logon.
    pub async fn receive(&mut self) -> Result<Option<Bytes>, FixError> {
        if self.session.state().is_closed() {
            return Ok(None);
        }

        let mut buf = BytesMut::zeroed(self.config.read_chunk_size);
        let started = Instant::now();
        let read = self.stream.read(&mut buf);
        let n = match self.config.read_timeout {
            Some(deadline) => tokio::time::timeout(deadline, read).await.map_err(|_| {
                SessionError::ReadTimeout {
                    elapsed_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                }
            })?,
            None => read.await,
        }
        .map_err(SessionError::from)?;

        if n == 0 {
            self.session.close()?;
            info!("Counterparty closed the stream");
            return Ok(None);
        }
        buf.truncate(n);
        let chunk = buf.freeze();
        debug!(bytes = n, "Received chunk");

        if self.session.is_logon_pending() {
            if self.config.verify_logon_ack && !self.logon_response_complete(&chunk)? {
                return Ok(Some(chunk));
            }
            let elapsed = self.session.on_logon_ack()?;
            info!(?elapsed, "Logged on");
        }
        Ok(Some(chunk))
    }

    /// Reads and dispatches chunks until the stream closes or `cancel` fires.
    ///
    /// # Errors
    /// Propagates any error from [`receive`](Self::receive).
    pub async fn receive_loop<H>(
        &mut self,
        handler: &H,
        cancel: &CancellationToken,
    ) -> Result<(), FixError>
    where
        H: FrameHandler + ?Sized,
    {
        while self.receive_one(handler, cancel).await? {}
        Ok(())
    }

    /// Executes a scenario, then follows the stream if it asks to.
    ///
    /// Stops early, without error, when the counterparty closes the stream
    /// or `cancel` fires.
    ///
    /// # Errors
    /// Returns the first send or receive error.
    pub async fn run<H>(
        &mut self,
        scenario: &Scenario,
        catalog: &Catalog,
        handler: &H,
        cancel: &CancellationToken,
    ) -> Result<(), FixError>
    where
        H: FrameHandler + ?Sized,
    {
        info!(scenario = scenario.name(), steps = scenario.steps().len(), "Running scenario");

        for step in scenario.steps() {
            if cancel.is_cancelled() {
                info!("Scenario cancelled");
                return Ok(());
            }
            match step {
                Step::Send(request) => {
                    let frame = self.send(&request.build(catalog)).await?;
                    handler.on_sent(&frame).await;
                }
                Step::Receive => {
                    if !self.receive_one(handler, cancel).await? {
                        return Ok(());
                    }
                }
            }
        }

        if scenario.follows() {
            self.receive_loop(handler, cancel).await?;
        }
        Ok(())
    }

    /// Accumulates the Logon response and checks its MsgType.
    ///
    /// Returns false while the 35 field has not arrived yet.
    fn logon_response_complete(&mut self, chunk: &[u8]) -> Result<bool, SessionError> {
        self.logon_response.extend_from_slice(chunk);
        let received = match Decoder::peek_msg_type(&self.logon_response) {
            Ok(None) if self.logon_response.len() <= LOGON_HEADER_LIMIT => {
                debug!(bytes = self.logon_response.len(), "Logon response incomplete");
                return Ok(false);
            }
            Ok(Some(MsgType::Logon)) => {
                self.logon_response.clear();
                return Ok(true);
            }
            Ok(None) => format!("no MsgType within {LOGON_HEADER_LIMIT} bytes"),
            Ok(Some(other)) => other.to_string(),
            Err(e) => e.to_string(),
        };
        self.logon_response.clear();
        warn!(received = %received, "Logon answered with something else");
        Err(SessionError::ProtocolViolation {
            expected: MsgType::Logon.to_string(),
            received,
        })
    }

    /// Receives one chunk and notifies `handler`.
    ///
    /// Returns false when the stream closed or the run was cancelled.
    async fn receive_one<H>(
        &mut self,
        handler: &H,
        cancel: &CancellationToken,
    ) -> Result<bool, FixError>
    where
        H: FrameHandler + ?Sized,
    {
        let logon_pending = self.session.is_logon_pending();

        let received = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                info!("Receive cancelled");
                return Ok(false);
            }
            received = self.receive() => received?,
        };

        match received {
            Some(chunk) => {
                if logon_pending && self.state() == SessionState::LoggedOn {
                    handler.on_logon().await;
                }
                handler.on_frame(&chunk).await;
                Ok(true)
            }
            None => {
                handler.on_closed().await;
                Ok(false)
            }
        }
    }
}

impl<S: AsyncStream> std::fmt::Debug for SessionDriver<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionDriver")
            .field("config", &self.config)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
