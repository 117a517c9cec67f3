/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # fixprobe Catalog
//!
//! One constructor per FIX 4.4 business message the harness can send.
//!
//! Every constructor is a pure function of the [`CatalogConfig`] identity
//! (comp ids, account, exchange, symbol) and a small parameter struct. The
//! returned [`Message`](fixprobe_tagvalue::Message) always starts with
//! 8, 35, 49, 56 and carries its body fields in a fixed, type-specific
//! order. Values are not validated; the counterparty is the judge.

pub mod catalog;
pub mod config;
pub mod params;

pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use params::{
    Logon, MarketDataRequest, NewOrderSingle, OrderCancelReplaceRequest, OrderCancelRequest,
    OrderMassCancelRequest, OrderMassStatusRequest, OrderStatusRequest, RequestForPositions,
    SecurityListRequest, TradeCaptureReportRequest,
};
