/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Declarative request sequences.
//!
//! A [`Scenario`] is an ordered list of [`Step`]s: send one catalog message,
//! or wait for one read. It may end by following the stream until the
//! counterparty closes it or the run is cancelled.

use fixprobe_catalog::{
    Catalog, Logon, MarketDataRequest, NewOrderSingle, OrderCancelReplaceRequest,
    OrderCancelRequest, OrderMassCancelRequest, OrderMassStatusRequest, OrderStatusRequest,
    RequestForPositions, SecurityListRequest, TradeCaptureReportRequest,
};
use fixprobe_tagvalue::Message;

/// One catalog message, with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Logon (35=A).
    Logon(Logon),
    /// Logout (35=5).
    Logout,
    /// Heartbeat (35=0) with an optional TestReqID.
    Heartbeat(Option<String>),
    /// TestRequest (35=1).
    TestRequest(String),
    /// MarketDataRequest (35=V).
    MarketData(MarketDataRequest),
    /// NewOrderSingle (35=D).
    NewOrder(NewOrderSingle),
    /// OrderCancelRequest (35=F).
    Cancel(OrderCancelRequest),
    /// OrderCancelReplaceRequest (35=G).
    Replace(OrderCancelReplaceRequest),
    /// OrderStatusRequest (35=H).
    OrderStatus(OrderStatusRequest),
    /// RequestForPositions (35=AN).
    Positions(RequestForPositions),
    /// OrderMassStatusRequest (35=AF).
    MassStatus(OrderMassStatusRequest),
    /// OrderMassCancelRequest (35=q).
    MassCancel(OrderMassCancelRequest),
    /// TradeCaptureReportRequest (35=AD).
    TradeCapture(TradeCaptureReportRequest),
    /// SecurityListRequest (35=x).
    SecurityList(SecurityListRequest),
}

impl Request {
    /// Builds the message with the catalog's identity.
    #[must_use]
    pub fn build(&self, catalog: &Catalog) -> Message {
        match self {
            Self::Logon(p) => catalog.logon(p),
            Self::Logout => catalog.logout(),
            Self::Heartbeat(id) => catalog.heartbeat(id.as_deref()),
            Self::TestRequest(id) => catalog.test_request(id),
            Self::MarketData(p) => catalog.market_data_request(p),
            Self::NewOrder(p) => catalog.new_order_single(p),
            Self::Cancel(p) => catalog.order_cancel_request(p),
            Self::Replace(p) => catalog.order_cancel_replace_request(p),
            Self::OrderStatus(p) => catalog.order_status_request(p),
            Self::Positions(p) => catalog.request_for_positions(p),
            Self::MassStatus(p) => catalog.order_mass_status_request(p),
            Self::MassCancel(p) => catalog.order_mass_cancel_request(p),
            Self::TradeCapture(p) => catalog.trade_capture_report_request(p),
            Self::SecurityList(p) => catalog.security_list_request(p),
        }
    }
}

/// One scenario step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Build and write a message.
    Send(Request),
    /// Wait for one read and hand it to the handler.
    Receive,
}

/// A named, ordered list of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    name: String,
    steps: Vec<Step>,
    follow: bool,
}

impl Scenario {
    /// Creates an empty scenario that stops after its last step.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
            follow: false,
        }
    }

    /// Appends a send step.
    #[must_use]
    pub fn send(mut self, request: Request) -> Self {
        self.steps.push(Step::Send(request));
        self
    }

    /// Appends a receive step.
    #[must_use]
    pub fn receive(mut self) -> Self {
        self.steps.push(Step::Receive);
        self
    }

    /// Appends a send step followed by a receive step.
    #[must_use]
    pub fn exchange(self, request: Request) -> Self {
        self.send(request).receive()
    }

    /// Sets whether to keep reading after the last step.
    #[must_use]
    pub const fn follow(mut self, follow: bool) -> Self {
        self.follow = follow;
        self
    }

    /// Returns the scenario name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the steps in order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns true if the stream is followed after the last step.
    #[must_use]
    pub const fn follows(&self) -> bool {
        self.follow
    }
}
