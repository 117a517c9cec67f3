/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Named built-in scenarios.
//!
//! Each one logs on, waits for the response, sends its request and then
//! follows the stream. The request ids are the ones the proxy's test setup
//! expects.

use fixprobe_catalog::{
    Logon, MarketDataRequest, NewOrderSingle, OrderCancelReplaceRequest, OrderCancelRequest,
    OrderMassCancelRequest, OrderMassStatusRequest, OrderStatusRequest, RequestForPositions,
    SecurityListRequest, TradeCaptureReportRequest,
};
use fixprobe_core::types::SubscriptionRequestType;
use fixprobe_engine::{Request, Scenario};

/// Names accepted by [`builtin`].
pub const BUILTIN_NAMES: &[&str] = &[
    "positions",
    "positions-subscribe",
    "logon",
    "logout",
    "market-data",
    "new-order",
    "cancel",
    "replace",
    "order-status",
    "mass-status",
    "mass-cancel",
    "trade-capture",
    "security-list",
];

/// Returns the built-in scenario called `name`, logging on with `logon`.
#[must_use]
pub fn builtin(name: &str, logon: &Logon) -> Option<Scenario> {
    let start = Scenario::new(name).exchange(Request::Logon(logon.clone()));

    let scenario = match name {
        "positions" => start
            .exchange(Request::Positions(RequestForPositions::snapshot("pos-1")))
            .follow(true),
        "positions-subscribe" => start
            .exchange(Request::Positions(RequestForPositions::subscribe("pos-2")))
            .exchange(Request::Positions(RequestForPositions::new(
                "pos-2",
                SubscriptionRequestType::Unsubscribe,
            ))),
        "logon" => start.follow(true),
        "logout" => start.exchange(Request::Logout),
        "market-data" => start
            .send(Request::MarketData(MarketDataRequest::new("test")))
            .follow(true),
        "new-order" => start
            .send(Request::NewOrder(NewOrderSingle::new("test-4")))
            .follow(true),
        "cancel" => start
            .send(Request::Cancel(OrderCancelRequest::new("test-3", "test-2")))
            .follow(true),
        "replace" => start
            .send(Request::Replace(OrderCancelReplaceRequest::new(
                "test-5", "test-1",
            )))
            .follow(true),
        "order-status" => start
            .exchange(Request::OrderStatus(OrderStatusRequest::new("test-4")))
            .follow(true),
        "mass-status" => start
            .exchange(Request::MassStatus(OrderMassStatusRequest::new("req_1")))
            .follow(true),
        "mass-cancel" => start
            .send(Request::MassCancel(OrderMassCancelRequest::new("req1")))
            .follow(true),
        "trade-capture" => start
            .send(Request::TradeCapture(TradeCaptureReportRequest::new("req1")))
            .follow(true),
        "security-list" => start
            .exchange(Request::SecurityList(SecurityListRequest::new("sec-1")))
            .follow(true),
        _ => return None,
    };
    Some(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixprobe_engine::Step;

    fn logon() -> Logon {
        Logon::new("trader", "secret")
    }

    #[test]
    fn test_every_name_resolves() {
        for name in BUILTIN_NAMES {
            let scenario = builtin(name, &logon()).unwrap();
            assert_eq!(scenario.name(), *name);
            assert_eq!(
                scenario.steps()[..2],
                [Step::Send(Request::Logon(logon())), Step::Receive]
            );
        }
        assert!(builtin("nope", &logon()).is_none());
    }

    #[test]
    fn test_positions_is_default_flow() {
        let scenario = builtin("positions", &logon()).unwrap();
        assert_eq!(
            scenario.steps(),
            &[
                Step::Send(Request::Logon(logon())),
                Step::Receive,
                Step::Send(Request::Positions(RequestForPositions::snapshot("pos-1"))),
                Step::Receive,
            ]
        );
        assert!(scenario.follows());
    }

    #[test]
    fn test_logout_does_not_follow() {
        let scenario = builtin("logout", &logon()).unwrap();
        assert!(!scenario.follows());
        assert_eq!(scenario.steps().last(), Some(&Step::Receive));
    }
}
