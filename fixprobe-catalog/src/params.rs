/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Per-message parameters for the catalog constructors.
//!
//! Each struct holds only what varies between two requests of the same
//! type; identities come from [`CatalogConfig`](crate::CatalogConfig).
//! Defaults match the values the harness has always sent.

use fixprobe_core::types::{
    EncryptMethod, MassCancelRequestType, MassStatusReqType, MdEntryType, MdUpdateType, OrdType,
    SecurityListRequestType, Side, SubscriptionRequestType, TimeInForce, Timestamp,
    TradeRequestType,
};
use rust_decimal::Decimal;

/// Fixed transaction time the harness stamps on requests: 1970-01-01 23:59:59.
pub const DEFAULT_TRANSACT_TIME: Timestamp = Timestamp::from_secs(86_399);

/// Logon (35=A) parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logon {
    /// Username (tag 553).
    pub username: String,
    /// Password (tag 554).
    pub password: String,
    /// Heartbeat interval in seconds (tag 108).
    pub heartbeat_interval: u32,
    /// Encryption method (tag 98).
    pub encrypt_method: EncryptMethod,
    /// Reset sequence numbers (tag 141).
    pub reset_seq_num: bool,
}

impl Logon {
    /// Creates logon parameters with a 5 second heartbeat, no encryption
    /// and a sequence reset.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            heartbeat_interval: 5,
            encrypt_method: EncryptMethod::NoEncryption,
            reset_seq_num: true,
        }
    }

    /// Sets the heartbeat interval.
    #[must_use]
    pub fn with_heartbeat_interval(mut self, secs: u32) -> Self {
        self.heartbeat_interval = secs;
        self
    }

    /// Sets the reset flag.
    #[must_use]
    pub fn with_reset_seq_num(mut self, reset: bool) -> Self {
        self.reset_seq_num = reset;
        self
    }
}

/// MarketDataRequest (35=V) parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketDataRequest {
    /// Request id (tag 262).
    pub md_req_id: String,
    /// Subscription type (tag 263).
    pub subscription: SubscriptionRequestType,
    /// Market depth, 0 for full book (tag 264).
    pub market_depth: u32,
    /// Update type (tag 265).
    pub update_type: MdUpdateType,
    /// Aggregated book (tag 266).
    pub aggregated_book: bool,
    /// Entry types (tag 269, repeated; count in tag 267).
    pub entry_types: Vec<MdEntryType>,
}

impl MarketDataRequest {
    /// Creates a full-book, incremental, aggregated subscription to bids and
    /// offers.
    #[must_use]
    pub fn new(md_req_id: impl Into<String>) -> Self {
        Self {
            md_req_id: md_req_id.into(),
            subscription: SubscriptionRequestType::SnapshotPlusUpdates,
            market_depth: 0,
            update_type: MdUpdateType::Incremental,
            aggregated_book: true,
            entry_types: vec![MdEntryType::Bid, MdEntryType::Offer],
        }
    }

    /// Sets the subscription type.
    #[must_use]
    pub fn with_subscription(mut self, subscription: SubscriptionRequestType) -> Self {
        self.subscription = subscription;
        self
    }

    /// Sets the entry types.
    #[must_use]
    pub fn with_entry_types(mut self, entry_types: Vec<MdEntryType>) -> Self {
        self.entry_types = entry_types;
        self
    }
}

/// NewOrderSingle (35=D) parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderSingle {
    /// Client order id (tag 11).
    pub cl_ord_id: String,
    /// Side (tag 54).
    pub side: Side,
    /// Order type (tag 40).
    pub ord_type: OrdType,
    /// Quantity (tag 38).
    pub quantity: Decimal,
    /// Limit price (tag 44).
    pub price: Decimal,
    /// Time in force (tag 59).
    pub time_in_force: TimeInForce,
    /// Transaction time (tag 60).
    pub transact_time: Timestamp,
}

impl NewOrderSingle {
    /// Creates a good-till-cancel limit buy of 1.0 at 100.0.
    #[must_use]
    pub fn new(cl_ord_id: impl Into<String>) -> Self {
        Self {
            cl_ord_id: cl_ord_id.into(),
            side: Side::Buy,
            ord_type: OrdType::Limit,
            quantity: Decimal::new(10, 1),
            price: Decimal::new(1000, 1),
            time_in_force: TimeInForce::GoodTillCancel,
            transact_time: DEFAULT_TRANSACT_TIME,
        }
    }

    /// Sets side, quantity and price.
    #[must_use]
    pub fn with_order(mut self, side: Side, quantity: Decimal, price: Decimal) -> Self {
        self.side = side;
        self.quantity = quantity;
        self.price = price;
        self
    }

    /// Sets the time in force.
    #[must_use]
    pub fn with_time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = time_in_force;
        self
    }

    /// Sets the transaction time.
    #[must_use]
    pub fn with_transact_time(mut self, transact_time: Timestamp) -> Self {
        self.transact_time = transact_time;
        self
    }
}

/// OrderCancelRequest (35=F) parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCancelRequest {
    /// Client order id of the cancel (tag 11).
    pub cl_ord_id: String,
    /// Client order id being cancelled (tag 41).
    pub orig_cl_ord_id: String,
    /// Side (tag 54).
    pub side: Side,
    /// Quantity (tag 38).
    pub quantity: Decimal,
    /// Transaction time (tag 60).
    pub transact_time: Timestamp,
}

impl OrderCancelRequest {
    /// Creates a cancel of a 1.0 buy.
    #[must_use]
    pub fn new(cl_ord_id: impl Into<String>, orig_cl_ord_id: impl Into<String>) -> Self {
        Self {
            cl_ord_id: cl_ord_id.into(),
            orig_cl_ord_id: orig_cl_ord_id.into(),
            side: Side::Buy,
            quantity: Decimal::new(10, 1),
            transact_time: DEFAULT_TRANSACT_TIME,
        }
    }
}

/// OrderCancelReplaceRequest (35=G) parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCancelReplaceRequest {
    /// Client order id of the replacement (tag 11).
    pub cl_ord_id: String,
    /// Client order id being replaced (tag 41).
    pub orig_cl_ord_id: String,
    /// Side (tag 54).
    pub side: Side,
    /// Order type (tag 40).
    pub ord_type: OrdType,
    /// New quantity (tag 38).
    pub quantity: Decimal,
    /// New price (tag 44).
    pub price: Decimal,
    /// Transaction time (tag 60).
    pub transact_time: Timestamp,
}

impl OrderCancelReplaceRequest {
    /// Creates a replace to a limit buy of 1.0 at 200.0.
    #[must_use]
    pub fn new(cl_ord_id: impl Into<String>, orig_cl_ord_id: impl Into<String>) -> Self {
        Self {
            cl_ord_id: cl_ord_id.into(),
            orig_cl_ord_id: orig_cl_ord_id.into(),
            side: Side::Buy,
            ord_type: OrdType::Limit,
            quantity: Decimal::new(10, 1),
            price: Decimal::new(2000, 1),
            transact_time: DEFAULT_TRANSACT_TIME,
        }
    }

    /// Sets the new quantity and price.
    #[must_use]
    pub fn with_quantity_price(mut self, quantity: Decimal, price: Decimal) -> Self {
        self.quantity = quantity;
        self.price = price;
        self
    }
}

/// OrderStatusRequest (35=H) parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderStatusRequest {
    /// Client order id (tag 11).
    pub cl_ord_id: String,
    /// Side (tag 54).
    pub side: Side,
}

impl OrderStatusRequest {
    /// Creates a status request for a buy order.
    #[must_use]
    pub fn new(cl_ord_id: impl Into<String>) -> Self {
        Self {
            cl_ord_id: cl_ord_id.into(),
            side: Side::Buy,
        }
    }
}

/// RequestForPositions (35=AN) parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestForPositions {
    /// Position request id (tag 710).
    pub pos_req_id: String,
    /// Subscription type (tag 263).
    pub subscription: SubscriptionRequestType,
    /// Account type (tag 581).
    pub account_type: u32,
    /// Position request type (tag 724).
    pub pos_req_type: u32,
    /// Clearing business date (tag 715).
    pub clearing_business_date: Timestamp,
    /// Transaction time (tag 60).
    pub transact_time: Timestamp,
}

impl RequestForPositions {
    /// Creates a positions request on a customer account.
    #[must_use]
    pub fn new(pos_req_id: impl Into<String>, subscription: SubscriptionRequestType) -> Self {
        Self {
            pos_req_id: pos_req_id.into(),
            subscription,
            account_type: 1,
            pos_req_type: 0,
            clearing_business_date: DEFAULT_TRANSACT_TIME,
            transact_time: DEFAULT_TRANSACT_TIME,
        }
    }

    /// Creates a one-off snapshot request.
    #[must_use]
    pub fn snapshot(pos_req_id: impl Into<String>) -> Self {
        Self::new(pos_req_id, SubscriptionRequestType::Snapshot)
    }

    /// Creates a snapshot plus updates subscription.
    #[must_use]
    pub fn subscribe(pos_req_id: impl Into<String>) -> Self {
        Self::new(pos_req_id, SubscriptionRequestType::SnapshotPlusUpdates)
    }
}

/// OrderMassStatusRequest (35=AF) parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderMassStatusRequest {
    /// Mass status request id (tag 584).
    pub mass_status_req_id: String,
    /// Scope (tag 585).
    pub req_type: MassStatusReqType,
}

impl OrderMassStatusRequest {
    /// Creates a status request for the configured security.
    #[must_use]
    pub fn new(mass_status_req_id: impl Into<String>) -> Self {
        Self {
            mass_status_req_id: mass_status_req_id.into(),
            req_type: MassStatusReqType::Security,
        }
    }
}

/// OrderMassCancelRequest (35=q) parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderMassCancelRequest {
    /// Client order id (tag 11).
    pub cl_ord_id: String,
    /// Scope (tag 530).
    pub request_type: MassCancelRequestType,
    /// Transaction time (tag 60).
    pub transact_time: Timestamp,
}

impl OrderMassCancelRequest {
    /// Creates a cancel for every order on the configured security.
    #[must_use]
    pub fn new(cl_ord_id: impl Into<String>) -> Self {
        Self {
            cl_ord_id: cl_ord_id.into(),
            request_type: MassCancelRequestType::Security,
            transact_time: DEFAULT_TRANSACT_TIME,
        }
    }

    /// Sets the scope.
    #[must_use]
    pub fn with_request_type(mut self, request_type: MassCancelRequestType) -> Self {
        self.request_type = request_type;
        self
    }
}

/// TradeCaptureReportRequest (35=AD) parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeCaptureReportRequest {
    /// Trade request id (tag 568).
    pub trade_request_id: String,
    /// Trade request type (tag 569).
    pub trade_request_type: TradeRequestType,
    /// Subscription type (tag 263).
    pub subscription: SubscriptionRequestType,
}

impl TradeCaptureReportRequest {
    /// Creates a snapshot of all trades.
    #[must_use]
    pub fn new(trade_request_id: impl Into<String>) -> Self {
        Self {
            trade_request_id: trade_request_id.into(),
            trade_request_type: TradeRequestType::AllTrades,
            subscription: SubscriptionRequestType::Snapshot,
        }
    }
}

/// SecurityListRequest (35=x) parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityListRequest {
    /// Request id (tag 320).
    pub security_req_id: String,
    /// List scope (tag 559).
    pub request_type: SecurityListRequestType,
    /// Subscription type (tag 263).
    pub subscription: SubscriptionRequestType,
}

impl SecurityListRequest {
    /// Creates a snapshot of every security on the configured exchange.
    #[must_use]
    pub fn new(security_req_id: impl Into<String>) -> Self {
        Self {
            security_req_id: security_req_id.into(),
            request_type: SecurityListRequestType::AllSecurities,
            subscription: SubscriptionRequestType::Snapshot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transact_time() {
        assert_eq!(
            DEFAULT_TRANSACT_TIME.format_seconds().as_str(),
            "19700101-23:59:59"
        );
        assert_eq!(DEFAULT_TRANSACT_TIME.format_date().as_str(), "19700101");
    }

    #[test]
    fn test_logon_defaults() {
        let logon = Logon::new("trader", "secret");
        assert_eq!(logon.heartbeat_interval, 5);
        assert_eq!(logon.encrypt_method, EncryptMethod::NoEncryption);
        assert!(logon.reset_seq_num);
    }

    #[test]
    fn test_positions_snapshot_and_subscribe() {
        let snapshot = RequestForPositions::snapshot("pos-1");
        let subscribe = RequestForPositions::subscribe("pos-2");
        assert_eq!(snapshot.subscription, SubscriptionRequestType::Snapshot);
        assert_eq!(
            subscribe.subscription,
            SubscriptionRequestType::SnapshotPlusUpdates
        );
        assert_eq!(snapshot.account_type, subscribe.account_type);
    }

    #[test]
    fn test_new_order_single_defaults() {
        let order = NewOrderSingle::new("O-1");
        assert_eq!(order.quantity.to_string(), "1.0");
        assert_eq!(order.price.to_string(), "100.0");
        assert_eq!(order.time_in_force, TimeInForce::GoodTillCancel);
    }
}
