/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Session state machine.
//!
//! The lifecycle is linear:
//!
//! ```text
//! Disconnected -> Connected -> LoggedOn -> Closed
//!                     \___________________/^
//! ```
//!
//! A session that is still `Connected` may be closed by the counterparty
//! before any Logon acknowledgement. Every other move is rejected with
//! [`SessionError::InvalidState`].

use fixprobe_core::error::SessionError;
use std::fmt;
use std::time::{Duration, Instant};

/// Lifecycle state of one harness connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    /// No connection yet.
    #[default]
    Disconnected,
    /// Stream open, no Logon acknowledged.
    Connected,
    /// A response to our Logon has been received.
    LoggedOn,
    /// The counterparty closed the stream. Terminal.
    Closed,
}

impl SessionState {
    /// Returns the state name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Connected => "connected",
            Self::LoggedOn => "logged_on",
            Self::Closed => "closed",
        }
    }

    /// Returns true if frames may be written in this state.
    #[inline]
    #[must_use]
    pub const fn can_send(self) -> bool {
        matches!(self, Self::Connected | Self::LoggedOn)
    }

    /// Returns true for the terminal state.
    #[inline]
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks the state of one session and a pending Logon, if any.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    logon_sent_at: Option<Instant>,
}

impl Session {
    /// Creates a disconnected session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Returns true while a Logon awaits its first response.
    #[inline]
    #[must_use]
    pub const fn is_logon_pending(&self) -> bool {
        self.logon_sent_at.is_some()
    }

    /// Disconnected -> Connected.
    ///
    /// # Errors
    /// Returns `SessionError::InvalidState` from any other state.
    pub fn connect(&mut self) -> Result<(), SessionError> {
        self.transition(SessionState::Disconnected, SessionState::Connected)
    }

    /// Checks that a frame may be written now.
    ///
    /// # Errors
    /// Returns `SessionError::InvalidState` when disconnected or closed.
    pub fn ensure_can_send(&self) -> Result<(), SessionError> {
        if self.state.can_send() {
            Ok(())
        } else {
            Err(invalid(SessionState::Connected, self.state))
        }
    }

    /// Records that a Logon was written.
    ///
    /// Only a Logon sent while `Connected` arms the acknowledgement; a
    /// repeated Logon after logging on changes nothing.
    pub fn logon_sent(&mut self) {
        if self.state == SessionState::Connected && self.logon_sent_at.is_none() {
            self.logon_sent_at = Some(Instant::now());
        }
    }

    /// Connected -> LoggedOn, consuming the pending Logon.
    ///
    /// Returns how long the acknowledgement took.
    ///
    /// # Errors
    /// Returns `SessionError::InvalidState` unless connected with a Logon
    /// pending.
    pub fn on_logon_ack(&mut self) -> Result<Duration, SessionError> {
        let sent_at = match (self.state, self.logon_sent_at) {
            (SessionState::Connected, Some(sent_at)) => sent_at,
            (state, _) => return Err(invalid(SessionState::Connected, state)),
        };
        self.logon_sent_at = None;
        self.state = SessionState::LoggedOn;
        Ok(sent_at.elapsed())
    }

    /// Connected or LoggedOn -> Closed.
    ///
    /// # Errors
    /// Returns `SessionError::InvalidState` when never connected or already
    /// closed.
    pub fn close(&mut self) -> Result<(), SessionError> {
        if !self.state.can_send() {
            return Err(invalid(SessionState::LoggedOn, self.state));
        }
        self.logon_sent_at = None;
        self.state = SessionState::Closed;
        Ok(())
    }

    fn transition(&mut self, from: SessionState, to: SessionState) -> Result<(), SessionError> {
        if self.state != from {
            return Err(invalid(from, self.state));
        }
        self.state = to;
        Ok(())
    }
}

fn invalid(expected: SessionState, current: SessionState) -> SessionError {
    SessionError::InvalidState {
        expected: expected.to_string(),
        current: current.to_string(),
    }
}
