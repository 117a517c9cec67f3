/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! FIX message type codes (tag 35).
//!
//! Covers what the harness sends plus the replies a counterparty is likely
//! to send back. Anything else is kept verbatim in [`MsgType::Custom`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// FIX message types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MsgType {
    /// Heartbeat (0) - Session level.
    #[default]
    Heartbeat,
    /// Test Request (1) - Session level.
    TestRequest,
    /// Reject (3) - Session level.
    Reject,
    /// Logout (5) - Session level.
    Logout,
    /// Execution Report (8).
    ExecutionReport,
    /// Order Cancel Reject (9).
    OrderCancelReject,
    /// Logon (A) - Session level.
    Logon,
    /// New Order Single (D).
    NewOrderSingle,
    /// Order Cancel Request (F).
    OrderCancelRequest,
    /// Order Cancel/Replace Request (G).
    OrderCancelReplaceRequest,
    /// Order Status Request (H).
    OrderStatusRequest,
    /// Market Data Request (V).
    MarketDataRequest,
    /// Market Data Snapshot/Full Refresh (W).
    MarketDataSnapshotFullRefresh,
    /// Market Data Incremental Refresh (X).
    MarketDataIncrementalRefresh,
    /// Market Data Request Reject (Y).
    MarketDataRequestReject,
    /// Business Message Reject (j).
    BusinessMessageReject,
    /// Order Mass Cancel Request (q).
    OrderMassCancelRequest,
    /// Order Mass Cancel Report (r).
    OrderMassCancelReport,
    /// Security List Request (x).
    SecurityListRequest,
    /// Security List (y).
    SecurityList,
    /// Trade Capture Report Request (AD).
    TradeCaptureReportRequest,
    /// Trade Capture Report (AE).
    TradeCaptureReport,
    /// Order Mass Status Request (AF).
    OrderMassStatusRequest,
    /// Request For Positions (AN).
    RequestForPositions,
    /// Request For Positions Ack (AO).
    RequestForPositionsAck,
    /// Position Report (AP).
    PositionReport,
    /// Custom or unknown message type.
    Custom(String),
}

impl From<&str> for MsgType {
    fn from(s: &str) -> Self {
        match s {
            "0" => Self::Heartbeat,
            "1" => Self::TestRequest,
            "3" => Self::Reject,
            "5" => Self::Logout,
            "8" => Self::ExecutionReport,
            "9" => Self::OrderCancelReject,
            "A" => Self::Logon,
            "D" => Self::NewOrderSingle,
            "F" => Self::OrderCancelRequest,
            "G" => Self::OrderCancelReplaceRequest,
            "H" => Self::OrderStatusRequest,
            "V" => Self::MarketDataRequest,
            "W" => Self::MarketDataSnapshotFullRefresh,
            "X" => Self::MarketDataIncrementalRefresh,
            "Y" => Self::MarketDataRequestReject,
            "j" => Self::BusinessMessageReject,
            "q" => Self::OrderMassCancelRequest,
            "r" => Self::OrderMassCancelReport,
            "x" => Self::SecurityListRequest,
            "y" => Self::SecurityList,
            "AD" => Self::TradeCaptureReportRequest,
            "AE" => Self::TradeCaptureReport,
            "AF" => Self::OrderMassStatusRequest,
            "AN" => Self::RequestForPositions,
            "AO" => Self::RequestForPositionsAck,
            "AP" => Self::PositionReport,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl std::str::FromStr for MsgType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl MsgType {
    /// Returns the wire value of this message type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Heartbeat => "0",
            Self::TestRequest => "1",
            Self::Reject => "3",
            Self::Logout => "5",
            Self::ExecutionReport => "8",
            Self::OrderCancelReject => "9",
            Self::Logon => "A",
            Self::NewOrderSingle => "D",
            Self::OrderCancelRequest => "F",
            Self::OrderCancelReplaceRequest => "G",
            Self::OrderStatusRequest => "H",
            Self::MarketDataRequest => "V",
            Self::MarketDataSnapshotFullRefresh => "W",
            Self::MarketDataIncrementalRefresh => "X",
            Self::MarketDataRequestReject => "Y",
            Self::BusinessMessageReject => "j",
            Self::OrderMassCancelRequest => "q",
            Self::OrderMassCancelReport => "r",
            Self::SecurityListRequest => "x",
            Self::SecurityList => "y",
            Self::TradeCaptureReportRequest => "AD",
            Self::TradeCaptureReport => "AE",
            Self::OrderMassStatusRequest => "AF",
            Self::RequestForPositions => "AN",
            Self::RequestForPositionsAck => "AO",
            Self::PositionReport => "AP",
            Self::Custom(s) => s.as_str(),
        }
    }

    /// Returns true if this is an administrative message.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            Self::Heartbeat | Self::TestRequest | Self::Reject | Self::Logout | Self::Logon
        )
    }
}

impl fmt::Display for MsgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
