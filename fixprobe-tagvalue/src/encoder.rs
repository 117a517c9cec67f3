/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Tag=value frame encoder.
//!
//! The encoder accumulates body fields and, on [`Encoder::finish`], wraps
//! them with BeginString, BodyLength and CheckSum.

use crate::checksum::{calculate_checksum, format_checksum};
use bytes::{BufMut, BytesMut};
use fixprobe_core::field::FieldValue;

/// SOH (Start of Header) delimiter used in FIX messages.
pub const SOH: u8 = 0x01;

/// Length of the `10=XXX<SOH>` trailer.
pub const TRAILER_LEN: usize = 7;

/// FIX frame encoder.
#[derive(Debug)]
pub struct Encoder {
    /// Buffer for the message body (between BodyLength and Checksum).
    body: BytesMut,
}

impl Encoder {
    /// Creates a new encoder.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Creates a new encoder with pre-allocated body capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            body: BytesMut::with_capacity(capacity),
        }
    }

    /// Appends a body field with a typed value.
    #[inline]
    pub fn put_value(&mut self, tag: u32, value: &FieldValue) {
        match value {
            FieldValue::String(s) => self.put_raw(tag, s.as_bytes()),
            FieldValue::Int(v) => {
                let mut buf = itoa::Buffer::new();
                self.put_raw(tag, buf.format(*v).as_bytes());
            }
            FieldValue::UInt(v) => {
                let mut buf = itoa::Buffer::new();
                self.put_raw(tag, buf.format(*v).as_bytes());
            }
            FieldValue::Bool(v) => self.put_raw(tag, if *v { b"Y" } else { b"N" }),
            FieldValue::Char(c) => {
                let mut buf = [0u8; 4];
                self.put_raw(tag, c.encode_utf8(&mut buf).as_bytes());
            }
            FieldValue::Data(d) => self.put_raw(tag, d),
            FieldValue::Decimal(_) => self.put_raw(tag, &value.to_wire()),
        }
    }

    /// Appends a body field with a string value.
    #[inline]
    pub fn put_str(&mut self, tag: u32, value: &str) {
        self.put_raw(tag, value.as_bytes());
    }

    /// Appends a body field with raw value bytes.
    #[inline]
    pub fn put_raw(&mut self, tag: u32, value: &[u8]) {
        let mut tag_buf = itoa::Buffer::new();
        self.body.put_slice(tag_buf.format(tag).as_bytes());
        self.body.put_u8(b'=');
        self.body.put_slice(value);
        self.body.put_u8(SOH);
    }

    /// Wraps the body into a complete frame.
    ///
    /// Writes `8=<begin_string>`, `9=<body length>`, the body, and finally
    /// `10=<checksum>` computed over every byte before it.
    #[must_use]
    pub fn finish(self, begin_string: &[u8]) -> BytesMut {
        let body_len = self.body.len();
        let mut len_buf = itoa::Buffer::new();
        let len_str = len_buf.format(body_len);

        let mut frame =
            BytesMut::with_capacity(begin_string.len() + len_str.len() + body_len + 16);
        frame.put_slice(b"8=");
        frame.put_slice(begin_string);
        frame.put_u8(SOH);
        frame.put_slice(b"9=");
        frame.put_slice(len_str.as_bytes());
        frame.put_u8(SOH);
        frame.put_slice(&self.body);

        let checksum = format_checksum(calculate_checksum(&frame));
        frame.put_slice(b"10=");
        frame.put_slice(&checksum);
        frame.put_u8(SOH);

        frame
    }

    /// Returns the current body length.
    #[inline]
    #[must_use]
    pub fn body_len(&self) -> usize {
        self.body.len()
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
