/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # fixprobe Transport
//!
//! Stream transport for the fixprobe harness.
//!
//! This crate provides:
//! - **Endpoints**: unix domain socket paths and TCP `host:port` addresses
//! - **Connector**: opens an endpoint under a deadline and hands back a
//!   boxed byte stream

pub mod connector;
pub mod endpoint;

pub use connector::{AsyncStream, BoxedStream, connect};
pub use endpoint::Endpoint;
