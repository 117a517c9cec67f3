/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Core value types for FIX messages.
//!
//! This module provides:
//! - [`Timestamp`]: UTC timestamp with the FIX text formats the catalog needs
//! - [`CompId`]: Component identifier (SenderCompID, TargetCompID)
//! - Single-character enumerations such as [`Side`], [`OrdType`] and
//!   [`SubscriptionRequestType`]

use crate::field::FieldValue;
use arrayvec::ArrayString;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length for CompID strings in bytes.
pub const COMP_ID_MAX_LEN: usize = 32;

/// Latest instant a timestamp can hold, 2262-04-11 23:47:16.854775807 UTC.
const MAX_NANOS: u64 = i64::MAX as u64;

/// FIX protocol timestamp with nanosecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    /// Nanoseconds since Unix epoch (1970-01-01 00:00:00 UTC).
    nanos_since_epoch: u64,
}

impl Timestamp {
    /// Creates a timestamp from nanoseconds since Unix epoch.
    #[inline]
    #[must_use]
    pub const fn from_nanos(nanos: u64) -> Self {
        Self {
            nanos_since_epoch: nanos,
        }
    }

    /// Creates a timestamp from whole seconds since Unix epoch.
    ///
    /// Values past the representable range clamp to its end.
    #[inline]
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        let nanos = secs.saturating_mul(1_000_000_000);
        Self {
            nanos_since_epoch: if nanos > MAX_NANOS { MAX_NANOS } else { nanos },
        }
    }

    /// Returns the current UTC timestamp.
    #[inline]
    #[must_use]
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    /// Returns nanoseconds since Unix epoch.
    #[inline]
    #[must_use]
    pub const fn as_nanos(self) -> u64 {
        self.nanos_since_epoch
    }

    /// Converts to a chrono `DateTime<Utc>`.
    #[must_use]
    pub fn to_datetime(self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(i64::try_from(self.nanos_since_epoch).unwrap_or(i64::MAX))
    }

    /// Formats as a UTCTimestamp with second precision.
    ///
    /// Format: `YYYYMMDD-HH:MM:SS`
    #[must_use]
    pub fn format_seconds(self) -> ArrayString<17> {
        self.format_into("%Y%m%d-%H:%M:%S")
    }

    /// Formats as a UTCTimestamp with millisecond precision.
    ///
    /// Format: `YYYYMMDD-HH:MM:SS.sss`
    #[must_use]
    pub fn format_millis(self) -> ArrayString<21> {
        self.format_into("%Y%m%d-%H:%M:%S%.3f")
    }

    /// Formats as a LocalMktDate.
    ///
    /// Format: `YYYYMMDD`
    #[must_use]
    pub fn format_date(self) -> ArrayString<8> {
        self.format_into("%Y%m%d")
    }

    fn format_into<const N: usize>(self, pattern: &str) -> ArrayString<N> {
        let dt = self.to_datetime();
        let mut buf = ArrayString::new();
        let written = std::fmt::write(&mut buf, format_args!("{}", dt.format(pattern)));
        debug_assert!(written.is_ok(), "{pattern:?} does not fit in {N} bytes");
        buf
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self {
            nanos_since_epoch: dt.timestamp_nanos_opt().unwrap_or(0) as u64,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_millis())
    }
}

/// Component identifier for FIX sessions.
///
/// Used for SenderCompID (tag 49) and TargetCompID (tag 56).
/// Maximum length is 32 characters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct CompId(ArrayString<COMP_ID_MAX_LEN>);

impl CompId {
    /// Creates a new CompId, or `None` if `s` exceeds the maximum length.
    #[must_use]
    pub fn new(s: &str) -> Option<Self> {
        ArrayString::from(s).ok().map(Self)
    }

    /// Returns the CompId as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the length of the CompId in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the CompId is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for CompId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CompId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CompId {
    type Err = arrayvec::CapacityError<()>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArrayString::try_from(s)
            .map(Self)
            .map_err(|_| arrayvec::CapacityError::new(()))
    }
}

impl From<&CompId> for FieldValue {
    fn from(id: &CompId) -> Self {
        Self::String(id.as_str().to_string())
    }
}

/// Declares a FIX enumeration whose wire form is a single character.
macro_rules! char_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $code,)+
        }

        impl $name {
            /// Parses the wire character, or `None` if it is not a known code.
            #[must_use]
            pub const fn from_char(c: char) -> Option<Self> {
                match c {
                    $(c if c as u32 == $code as u32 => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Returns the wire character.
            #[must_use]
            pub const fn as_char(self) -> char {
                self as u8 as char
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_char())
            }
        }

        impl From<$name> for FieldValue {
            fn from(value: $name) -> Self {
                Self::Char(value.as_char())
            }
        }
    };
}

char_enum! {
    /// Order side (tag 54).
    Side {
        /// Buy order.
        Buy = b'1',
        /// Sell order.
        Sell = b'2',
    }
}

char_enum! {
    /// Order type (tag 40).
    OrdType {
        /// Market order.
        Market = b'1',
        /// Limit order.
        Limit = b'2',
        /// Stop order.
        Stop = b'3',
        /// Stop limit order.
        StopLimit = b'4',
    }
}

char_enum! {
    /// Time in force (tag 59).
    TimeInForce {
        /// Day.
        Day = b'0',
        /// Good till cancel.
        GoodTillCancel = b'1',
        /// Immediate or cancel.
        ImmediateOrCancel = b'3',
        /// Fill or kill.
        FillOrKill = b'4',
        /// Good till date.
        GoodTillDate = b'6',
    }
}

char_enum! {
    /// Subscription request type (tag 263).
    SubscriptionRequestType {
        /// Snapshot only.
        Snapshot = b'0',
        /// Snapshot followed by updates.
        SnapshotPlusUpdates = b'1',
        /// Cancel a previous subscription.
        Unsubscribe = b'2',
    }
}

char_enum! {
    /// Market data entry type (tag 269).
    MdEntryType {
        /// Bid.
        Bid = b'0',
        /// Offer.
        Offer = b'1',
        /// Trade.
        Trade = b'2',
    }
}

char_enum! {
    /// Market data update type (tag 265).
    MdUpdateType {
        /// Full refresh.
        FullRefresh = b'0',
        /// Incremental refresh.
        Incremental = b'1',
    }
}

char_enum! {
    /// Encryption method (tag 98).
    EncryptMethod {
        /// No encryption.
        NoEncryption = b'0',
    }
}

char_enum! {
    /// Mass cancel request type (tag 530).
    MassCancelRequestType {
        /// Cancel orders for a security.
        Security = b'1',
        /// Cancel all orders.
        AllOrders = b'7',
    }
}

char_enum! {
    /// Mass status request type (tag 585).
    MassStatusReqType {
        /// Status for orders for a security.
        Security = b'1',
        /// Status for all orders.
        AllOrders = b'7',
    }
}

char_enum! {
    /// Trade request type (tag 569).
    TradeRequestType {
        /// All trades.
        AllTrades = b'0',
    }
}

char_enum! {
    /// Security list request type (tag 559).
    SecurityListRequestType {
        /// Symbol.
        Symbol = b'0',
        /// All securities.
        AllSecurities = b'4',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_formats() {
        let ts = Timestamp::from_secs(86_399);
        assert_eq!(ts.format_seconds().as_str(), "19700101-23:59:59");
        assert_eq!(ts.format_millis().as_str(), "19700101-23:59:59.000");
        assert_eq!(ts.format_date().as_str(), "19700101");
    }

    #[test]
    fn test_timestamp_from_secs() {
        assert_eq!(Timestamp::from_secs(2).as_nanos(), 2_000_000_000);
    }

    #[test]
    fn test_timestamp_from_secs_clamps() {
        let last = Timestamp::from_secs(u64::MAX);
        assert_eq!(last.as_nanos(), i64::MAX as u64);
        assert_eq!(Timestamp::from_secs(20_000_000_000), last);
        assert_eq!(last.format_seconds().as_str(), "22620411-23:47:16");
        assert_eq!(last.format_millis().as_str(), "22620411-23:47:16.854");
    }

    #[test]
    fn test_timestamp_from_nanos_past_range() {
        let ts = Timestamp::from_nanos(u64::MAX);
        assert_eq!(ts.format_date().as_str(), "22620411");
    }

    #[test]
    fn test_comp_id() {
        let id = CompId::new("test").unwrap();
        assert_eq!(id.as_str(), "test");
        assert_eq!(id.len(), 4);
        assert!(!id.is_empty());
    }

    #[test]
    fn test_comp_id_too_long() {
        let long_str = "A".repeat(COMP_ID_MAX_LEN + 1);
        assert!(CompId::new(&long_str).is_none());
        assert!(long_str.parse::<CompId>().is_err());
    }

    #[test]
    fn test_side_from_char() {
        assert_eq!(Side::from_char('1'), Some(Side::Buy));
        assert_eq!(Side::from_char('2'), Some(Side::Sell));
        assert_eq!(Side::from_char('X'), None);
    }

    #[test]
    fn test_enum_wire_values() {
        assert_eq!(Side::Buy.to_string(), "1");
        assert_eq!(OrdType::Limit.to_string(), "2");
        assert_eq!(TimeInForce::GoodTillCancel.to_string(), "1");
        assert_eq!(SubscriptionRequestType::Snapshot.to_string(), "0");
        assert_eq!(MassCancelRequestType::AllOrders.to_string(), "7");
        assert_eq!(FieldValue::from(MdEntryType::Offer), FieldValue::Char('1'));
    }
}
