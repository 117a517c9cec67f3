/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Zero-copy FIX frame decoder.
//!
//! The harness never interprets counterparty traffic. The decoder exists so
//! the optional Logon acknowledgement check can read tag 35, and so encoded
//! frames can be split back into a [`Message`].

use crate::checksum::{calculate_checksum, parse_checksum};
use crate::encoder::{SOH, TRAILER_LEN};
use crate::message::{Field, Message};
use fixprobe_core::error::DecodeError;
use fixprobe_core::field::{FieldRef, FieldTag};
use fixprobe_core::message::MsgType;
use memchr::memchr;

/// Equals sign delimiter between tag and value.
pub const EQUALS: u8 = b'=';

/// Zero-copy FIX frame decoder.
#[derive(Debug)]
pub struct Decoder<'a> {
    /// Input buffer.
    input: &'a [u8],
    /// Current position in the buffer.
    offset: usize,
    /// Whether to validate checksums.
    validate_checksum: bool,
}

impl<'a> Decoder<'a> {
    /// Creates a new decoder for the given input buffer.
    #[inline]
    #[must_use]
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            offset: 0,
            validate_checksum: true,
        }
    }

    /// Sets whether to validate checksums during decoding.
    #[inline]
    #[must_use]
    pub const fn with_checksum_validation(mut self, validate: bool) -> Self {
        self.validate_checksum = validate;
        self
    }

    /// Reads the MsgType from the start of a frame that may still be arriving.
    ///
    /// Only fields 8, 9 and 35 are examined, so the body and trailer need
    /// not be present. Returns `Ok(None)` while the input ends inside those
    /// three fields.
    ///
    /// # Errors
    /// Returns `DecodeError` if the frame does not start with 8, 9, 35.
    pub fn peek_msg_type(input: &'a [u8]) -> Result<Option<MsgType>, DecodeError> {
        let mut decoder = Self::new(input);

        let Some(begin_string) =
            decoder.next_header_field(8, DecodeError::InvalidBeginString)?
        else {
            return Ok(None);
        };
        if !begin_string.value.starts_with(b"FIX") {
            return Err(DecodeError::InvalidBeginString);
        }

        let Some(body_length) = decoder.next_header_field(9, DecodeError::MissingBodyLength)?
        else {
            return Ok(None);
        };
        body_length.parse::<usize>()?;

        let Some(msg_type) = decoder.next_header_field(35, DecodeError::MissingMsgType)? else {
            return Ok(None);
        };
        Ok(Some(MsgType::from(msg_type.as_str()?)))
    }

    /// Decodes the next complete frame into an owned [`Message`].
    ///
    /// BodyLength and CheckSum are verified and then dropped; the returned
    /// message holds tag 8 followed by the body fields in wire order, so
    /// encoding it again reproduces the frame.
    ///
    /// # Errors
    /// Returns `DecodeError` if the frame is malformed or incomplete.
    pub fn decode_message(&mut self) -> Result<Message, DecodeError> {
        let start_offset = self.offset;
        let (begin_string, body_length) = self.read_header()?;
        let body_start = self.offset;

        let msg_type = self.next_field().ok_or(DecodeError::MissingMsgType)?;
        if msg_type.tag != 35 {
            return Err(DecodeError::MissingMsgType);
        }

        let mut fields = vec![
            Field::new(FieldTag::BEGIN_STRING, begin_string.as_str()?),
            Field::new(FieldTag::MSG_TYPE, msg_type.as_str()?),
        ];

        let checksum = loop {
            let field_start = self.offset;
            let field = self.next_field().ok_or(DecodeError::Incomplete)?;
            if field.tag == 10 {
                break (field_start, field);
            }
            fields.push(Field::new(field.tag, field.as_str()?));
        };
        let (checksum_start, checksum_field) = checksum;

        let actual = checksum_start - body_start;
        if actual != body_length {
            return Err(DecodeError::BodyLengthMismatch {
                declared: body_length,
                actual,
            });
        }

        if self.validate_checksum {
            let declared = parse_checksum(checksum_field.value).ok_or_else(|| {
                DecodeError::InvalidFieldValue {
                    tag: 10,
                    reason: "invalid checksum format".to_string(),
                }
            })?;
            let calculated = calculate_checksum(&self.input[start_offset..checksum_start]);
            if calculated != declared {
                return Err(DecodeError::ChecksumMismatch {
                    calculated,
                    declared,
                });
            }
        }

        Ok(fields.into_iter().collect())
    }

    /// Parses the next field from the buffer.
    ///
    /// # Returns
    /// The next field, or `None` if the buffer is exhausted or truncated.
    #[inline]
    pub fn next_field(&mut self) -> Option<FieldRef<'a>> {
        let remaining = self.input.get(self.offset..)?;

        let eq_pos = memchr(EQUALS, remaining)?;
        let tag = parse_tag(&remaining[..eq_pos])?;

        let value_start = eq_pos + 1;
        let soh_pos = memchr(SOH, &remaining[value_start..])?;
        let value = &remaining[value_start..value_start + soh_pos];

        self.offset += value_start + soh_pos + 1;

        Some(FieldRef::new(tag, value))
    }

    /// Returns the remaining bytes in the buffer.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.offset.min(self.input.len())..]
    }

    /// Returns true if the buffer has been fully consumed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Reads a header field that must carry `tag`.
    ///
    /// `Ok(None)` means the field is not terminated yet.
    fn next_header_field(
        &mut self,
        tag: u32,
        error: DecodeError,
    ) -> Result<Option<FieldRef<'a>>, DecodeError> {
        match self.next_field() {
            Some(field) if field.tag == tag => Ok(Some(field)),
            None if memchr(SOH, self.remaining()).is_none() => Ok(None),
            _ => Err(error),
        }
    }

    fn read_header(&mut self) -> Result<(FieldRef<'a>, usize), DecodeError> {
        let begin_string = self.next_field().ok_or(DecodeError::Incomplete)?;
        if begin_string.tag != 8 || !begin_string.value.starts_with(b"FIX") {
            return Err(DecodeError::InvalidBeginString);
        }

        let body_length = self.next_field().ok_or(DecodeError::MissingBodyLength)?;
        if body_length.tag != 9 {
            return Err(DecodeError::MissingBodyLength);
        }
        let length = body_length.parse::<usize>()?;

        if self.input.len() < self.offset + length + TRAILER_LEN {
            return Err(DecodeError::Incomplete);
        }
        Ok((begin_string, length))
    }
}

/// Parses a tag number from ASCII bytes.
#[inline]
fn parse_tag(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() || bytes.len() > 10 {
        return None;
    }

    let mut result: u32 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        result = result.checked_mul(10)?.checked_add((b - b'0') as u32)?;
    }

    Some(result)
}
