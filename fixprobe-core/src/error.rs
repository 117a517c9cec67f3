/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for the fixprobe harness.
//!
//! Encoding problems are local to a message and never reach the wire.
//! Session problems are fatal to the connection they occur on.

use thiserror::Error;

/// Result type alias using [`FixError`] as the error type.
pub type Result<T> = std::result::Result<T, FixError>;

/// Top-level error type for all fixprobe operations.
#[derive(Debug, Error)]
pub enum FixError {
    /// Error while decoding an inbound frame.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error while encoding an outbound message.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Error in the session driver or its transport.
    #[error("session error: {0}")]
    Session(#[from] SessionError),
}

impl FixError {
    /// Returns true if this error came from the transport.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Session(SessionError::Connection(_)))
    }
}

/// Errors that occur while decoding an inbound FIX frame.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Frame is incomplete, need more data.
    #[error("incomplete message, need more data")]
    Incomplete,

    /// Invalid BeginString field (tag 8).
    #[error("invalid begin string: expected 8=FIX.x.y")]
    InvalidBeginString,

    /// Missing BodyLength field (tag 9).
    #[error("missing body length field (tag 9)")]
    MissingBodyLength,

    /// BodyLength does not match the bytes actually present.
    #[error("body length mismatch: declared {declared}, actual {actual}")]
    BodyLengthMismatch {
        /// Length declared in tag 9.
        declared: usize,
        /// Length measured in the frame.
        actual: usize,
    },

    /// Missing MsgType field (tag 35).
    #[error("missing msg type field (tag 35)")]
    MissingMsgType,

    /// Checksum mismatch between calculated and declared values.
    #[error("checksum mismatch: calculated {calculated}, declared {declared}")]
    ChecksumMismatch {
        /// Calculated checksum value.
        calculated: u8,
        /// Declared checksum value in message.
        declared: u8,
    },

    /// Invalid field value for the expected type.
    #[error("invalid field value for tag {tag}: {reason}")]
    InvalidFieldValue {
        /// The tag number of the field.
        tag: u32,
        /// Description of why the value is invalid.
        reason: String,
    },

    /// Invalid UTF-8 in string field.
    #[error("invalid utf-8 in field: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Errors that occur while encoding a FIX message.
///
/// A message that fails to encode produces no bytes at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A header field without which the frame cannot be built is missing.
    #[error("missing required field: tag {tag}")]
    MissingRequiredField {
        /// The tag number of the missing field.
        tag: u32,
    },

    /// A tag of zero was appended.
    #[error("invalid tag: {tag}")]
    InvalidTag {
        /// The offending tag number.
        tag: u32,
    },
}

/// Errors raised by the session driver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Endpoint unreachable, or a read/write failed mid-session.
    #[error("connection error: {0}")]
    Connection(String),

    /// The counterparty answered with an unexpected message type.
    #[error("protocol violation: expected msg type {expected}, received {received}")]
    ProtocolViolation {
        /// Expected MsgType value.
        expected: String,
        /// Received MsgType value.
        received: String,
    },

    /// Session is not in the correct state for the operation.
    #[error("invalid session state: expected {expected}, current {current}")]
    InvalidState {
        /// Expected state for the operation.
        expected: String,
        /// Current session state.
        current: String,
    },

    /// No bytes arrived within the configured read deadline.
    #[error("read timed out after {elapsed_ms} milliseconds")]
    ReadTimeout {
        /// Deadline that elapsed, in milliseconds.
        elapsed_ms: u64,
    },

    /// Session configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        Self::Connection(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_error_display() {
        let err = EncodeError::MissingRequiredField { tag: 35 };
        assert_eq!(err.to_string(), "missing required field: tag 35");
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::ChecksumMismatch {
            calculated: 100,
            declared: 200,
        };
        assert_eq!(
            err.to_string(),
            "checksum mismatch: calculated 100, declared 200"
        );
    }

    #[test]
    fn test_fix_error_from_encode() {
        let fix_err: FixError = EncodeError::MissingRequiredField { tag: 8 }.into();
        assert!(matches!(
            fix_err,
            FixError::Encode(EncodeError::MissingRequiredField { tag: 8 })
        ));
        assert!(!fix_err.is_connection());
    }

    #[test]
    fn test_io_error_becomes_connection_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: SessionError = io.into();
        assert_eq!(err, SessionError::Connection("pipe closed".to_string()));

        let fix_err: FixError = err.into();
        assert!(fix_err.is_connection());
    }

    #[test]
    fn test_protocol_violation_display() {
        let err = SessionError::ProtocolViolation {
            expected: "A".to_string(),
            received: "5".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "protocol violation: expected msg type A, received 5"
        );
    }
}
