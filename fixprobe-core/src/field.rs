/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Field types for FIX protocol messages.
//!
//! This module provides:
//! - [`FieldTag`]: Type-safe wrapper for FIX field tag numbers
//! - [`FieldRef`]: Zero-copy reference to a field within a received frame
//! - [`FieldValue`]: The value half of a tag=value pair, before rendering

use crate::error::DecodeError;
use bytes::Bytes;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// FIX field tag number.
///
/// Tags are positive integers that identify fields within a FIX message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FieldTag(u32);

impl FieldTag {
    /// BeginString.
    pub const BEGIN_STRING: Self = Self(8);
    /// BodyLength.
    pub const BODY_LENGTH: Self = Self(9);
    /// CheckSum.
    pub const CHECKSUM: Self = Self(10);
    /// MsgType.
    pub const MSG_TYPE: Self = Self(35);
    /// SenderCompID.
    pub const SENDER_COMP_ID: Self = Self(49);
    /// TargetCompID.
    pub const TARGET_COMP_ID: Self = Self(56);

    /// Creates a new field tag.
    #[inline]
    #[must_use]
    pub const fn new(tag: u32) -> Self {
        Self(tag)
    }

    /// Returns the raw tag number.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns true if the tag is a usable (non-zero) tag number.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }

    /// Returns true for the tags the encoder computes itself (9 and 10).
    #[inline]
    #[must_use]
    pub const fn is_computed(self) -> bool {
        self.0 == 9 || self.0 == 10
    }
}

impl From<u32> for FieldTag {
    fn from(tag: u32) -> Self {
        Self(tag)
    }
}

impl From<FieldTag> for u32 {
    fn from(tag: FieldTag) -> Self {
        tag.0
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-copy reference to a field within a received frame.
#[derive(Debug, Clone, Copy)]
pub struct FieldRef<'a> {
    /// The field tag number.
    pub tag: u32,
    /// Reference to the field value bytes (without delimiters).
    pub value: &'a [u8],
}

impl<'a> FieldRef<'a> {
    /// Creates a new field reference.
    #[inline]
    #[must_use]
    pub const fn new(tag: u32, value: &'a [u8]) -> Self {
        Self { tag, value }
    }

    /// Returns the field tag.
    #[inline]
    #[must_use]
    pub const fn tag(&self) -> FieldTag {
        FieldTag(self.tag)
    }

    /// Returns the value as a string slice.
    ///
    /// # Errors
    /// Returns `DecodeError::InvalidUtf8` if the value is not valid UTF-8.
    pub fn as_str(&self) -> Result<&'a str, DecodeError> {
        std::str::from_utf8(self.value).map_err(DecodeError::from)
    }

    /// Parses the value as the specified type.
    ///
    /// # Errors
    /// Returns `DecodeError::InvalidFieldValue` if parsing fails.
    pub fn parse<T: FromStr>(&self) -> Result<T, DecodeError> {
        let s = self.as_str()?;
        s.parse().map_err(|_| DecodeError::InvalidFieldValue {
            tag: self.tag,
            reason: format!("failed to parse '{}' as {}", s, std::any::type_name::<T>()),
        })
    }

    /// Returns the raw bytes of the value.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.value
    }
}

/// The value of a field, kept typed until it is rendered to wire text.
///
/// Every variant renders as plain ASCII: integers in decimal, decimals with
/// their scale preserved (`1.0` stays `1.0`), booleans as `Y`/`N`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// String value.
    String(String),
    /// Integer value.
    Int(i64),
    /// Unsigned integer value.
    UInt(u64),
    /// Decimal value (quantities, prices).
    Decimal(Decimal),
    /// Boolean value (Y/N).
    Bool(bool),
    /// Single character value (enumerated codes).
    Char(char),
    /// Raw bytes, written verbatim.
    Data(Bytes),
}

impl FieldValue {
    /// Returns the value as a string, if it is a String variant.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the rendered wire text of this value.
    #[must_use]
    pub fn to_wire(&self) -> Vec<u8> {
        match self {
            Self::Data(d) => d.to_vec(),
            other => other.to_string().into_bytes(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{}", s),
            Self::Int(v) => write!(f, "{}", v),
            Self::UInt(v) => write!(f, "{}", v),
            Self::Decimal(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", if *v { "Y" } else { "N" }),
            Self::Char(c) => write!(f, "{}", c),
            Self::Data(d) => write!(f, "{}", String::from_utf8_lossy(d)),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::UInt(u64::from(value))
    }
}

impl From<usize> for FieldValue {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for FieldValue {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<Bytes> for FieldValue {
    fn from(value: Bytes) -> Self {
        Self::Data(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_tag() {
        let tag = FieldTag::new(35);
        assert_eq!(tag.value(), 35);
        assert!(tag.is_valid());
        assert!(!tag.is_computed());
        assert!(!FieldTag::new(0).is_valid());
        assert!(FieldTag::BODY_LENGTH.is_computed());
        assert!(FieldTag::CHECKSUM.is_computed());
    }

    #[test]
    fn test_field_ref_as_str() {
        let field = FieldRef::new(11, b"ORDER123");
        assert_eq!(field.as_str().unwrap(), "ORDER123");
    }

    #[test]
    fn test_field_ref_parse() {
        let field = FieldRef::new(9, b"57");
        assert_eq!(field.parse::<usize>().unwrap(), 57);

        let bad = FieldRef::new(9, b"5x");
        assert!(matches!(
            bad.parse::<usize>(),
            Err(DecodeError::InvalidFieldValue { tag: 9, .. })
        ));
    }

    #[test]
    fn test_field_ref_invalid_utf8() {
        let field = FieldRef::new(1, &[0xFF, 0xFE]);
        assert!(field.as_str().is_err());
    }

    #[test]
    fn test_field_value_wire_text() {
        assert_eq!(FieldValue::from("test").to_string(), "test");
        assert_eq!(FieldValue::from(5u32).to_string(), "5");
        assert_eq!(FieldValue::from(-3i64).to_string(), "-3");
        assert_eq!(FieldValue::from(true).to_string(), "Y");
        assert_eq!(FieldValue::from(false).to_string(), "N");
        assert_eq!(FieldValue::from('1').to_string(), "1");
    }

    #[test]
    fn test_decimal_keeps_scale() {
        assert_eq!(FieldValue::from(Decimal::new(10, 1)).to_string(), "1.0");
        assert_eq!(FieldValue::from(Decimal::new(1000, 1)).to_string(), "100.0");
    }

    #[test]
    fn test_data_written_verbatim() {
        let value = FieldValue::from(Bytes::from_static(b"raw"));
        assert_eq!(value.to_wire(), b"raw".to_vec());
    }
}
