/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # fixprobe Core
//!
//! Core types and error definitions shared by every fixprobe crate:
//! - **Error types**: `FixError` and its encode, decode and session kinds
//! - **Field types**: `FieldTag`, `FieldRef`, `FieldValue`
//! - **Message types**: `MsgType`
//! - **Value types**: `Timestamp`, `CompId` and the single-character enums

pub mod error;
pub mod field;
pub mod message;
pub mod types;

pub use error::{DecodeError, EncodeError, FixError, Result, SessionError};
pub use field::{FieldRef, FieldTag, FieldValue};
pub use message::MsgType;
pub use types::{
    CompId, EncryptMethod, MassCancelRequestType, MassStatusReqType, MdEntryType, MdUpdateType,
    OrdType, SecurityListRequestType, Side, SubscriptionRequestType, TimeInForce, Timestamp,
    TradeRequestType,
};
