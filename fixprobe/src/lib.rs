/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # fixprobe
//!
//! A FIX 4.4 test harness for exercising a FIX proxy by hand.
//!
//! fixprobe builds a fixed catalog of business messages, frames them as
//! tag=value with correct BodyLength and CheckSum, writes them over a unix
//! domain socket or TCP connection, and prints whatever comes back.
//!
//! ## Features
//!
//! - **Order preserving**: fields go on the wire exactly as the catalog appends them
//! - **Declarative runs**: a scenario lists the sends and receives
//! - **Cancellable**: the receive loop stops on Ctrl-C or a read deadline
//! - **Async support**: built on Tokio
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fixprobe::prelude::*;
//!
//! let config = HarnessConfig::from_env();
//! let scenario = builtin("positions", &config.logon()).unwrap();
//! HarnessBuilder::new()
//!     .with_handler(ConsoleHandler::stdout())
//!     .with_session(config.session_config())
//!     .with_catalog(config.catalog_config()?)
//!     .with_scenario(scenario)
//!     .run(&CancellationToken::new())
//!     .await?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Errors, field values and enumerations
//! - [`tagvalue`]: The message model and its wire encoding
//! - [`catalog`]: Message constructors
//! - [`session`]: Session state and configuration
//! - [`transport`]: Unix socket and TCP connector
//! - [`engine`]: Session driver, scenarios and frame handlers

pub mod config;
pub mod console;
pub mod scenarios;

pub mod core {
    //! Errors, field values and enumerations.
    pub use fixprobe_core::*;
}

pub mod tagvalue {
    //! The message model and its wire encoding.
    pub use fixprobe_tagvalue::*;
}

pub mod catalog {
    //! Message constructors.
    pub use fixprobe_catalog::*;
}

pub mod session {
    //! Session state and configuration.
    pub use fixprobe_session::*;
}

pub mod transport {
    //! Unix socket and TCP connector.
    pub use fixprobe_transport::*;
}

pub mod engine {
    //! Session driver, scenarios and frame handlers.
    pub use fixprobe_engine::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use fixprobe_core::{
        CompId, DecodeError, EncodeError, FieldValue, FixError, MsgType, Result, SessionError,
        Side, SubscriptionRequestType, Timestamp,
    };

    // Message model
    pub use fixprobe_tagvalue::{Decoder, Field, Message, calculate_checksum, printable};

    // Catalog
    pub use fixprobe_catalog::{
        Catalog, CatalogConfig, Logon, MarketDataRequest, NewOrderSingle,
        OrderCancelReplaceRequest, OrderCancelRequest, OrderMassCancelRequest,
        OrderMassStatusRequest, OrderStatusRequest, RequestForPositions, SecurityListRequest,
        TradeCaptureReportRequest,
    };

    // Session
    pub use fixprobe_session::{SessionConfig, SessionConfigBuilder, SessionState};

    // Transport
    pub use fixprobe_transport::Endpoint;

    // Engine
    pub use fixprobe_engine::{
        FrameHandler, HarnessBuilder, NoOpHandler, Request, Scenario, SessionDriver, Step,
    };

    // Harness
    pub use crate::config::HarnessConfig;
    pub use crate::console::ConsoleHandler;
    pub use crate::scenarios::builtin;

    pub use tokio_util::sync::CancellationToken;
}
