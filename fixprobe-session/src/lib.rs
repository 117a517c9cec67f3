/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # fixprobe Session
//!
//! Session lifecycle for the fixprobe harness.
//!
//! This crate provides:
//! - **State machine**: `disconnected -> connected -> logged_on -> closed`
//! - **Logon tracking**: whether a Logon awaits its first response
//! - **Configuration**: endpoint, read chunk size and deadlines

pub mod config;
pub mod state;

pub use config::{DEFAULT_READ_CHUNK_SIZE, SessionConfig, SessionConfigBuilder};
pub use state::{Session, SessionState};
