/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # fixprobe Engine
//!
//! Drives one FIX connection for the fixprobe harness.
//!
//! This crate provides:
//! - **Session driver**: connect, send, receive and a cancellable receive loop
//! - **Scenarios**: declarative send/receive step lists
//! - **Frame handler trait**: callback interface for observing traffic
//! - **Builder API**: fluent configuration for a complete run

pub mod builder;
pub mod driver;
pub mod handler;
pub mod scenario;

pub use builder::HarnessBuilder;
pub use driver::SessionDriver;
pub use handler::{FrameHandler, NoOpHandler};
pub use scenario::{Request, Scenario, Step};
