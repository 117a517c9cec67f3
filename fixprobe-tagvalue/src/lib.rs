/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # fixprobe Tag-Value
//!
//! The FIX field/message model and its tag=value wire form.
//!
//! A [`Message`] is an ordered list of fields. [`Message::encode`] turns it
//! into a self-delimiting frame: BeginString and BodyLength first, the
//! appended fields next, the CheckSum trailer last, every field terminated
//! by SOH (0x01).
//!
//! ## Features
//!
//! - **Order preserving**: fields are written exactly as appended
//! - **Zero-copy parsing**: [`Decoder`] hands out references into the frame
//! - **Display helpers**: SOH rendered as `|` for console output

pub mod checksum;
pub mod decoder;
pub mod display;
pub mod encoder;
pub mod message;

pub use checksum::{calculate_checksum, format_checksum, parse_checksum};
pub use decoder::Decoder;
pub use display::{frame_length, printable};
pub use encoder::{Encoder, SOH};
pub use message::{Field, Message};
