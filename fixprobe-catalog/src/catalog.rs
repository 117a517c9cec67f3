/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Message constructors.
//!
//! Every constructor writes the standard header (8, 35, 49, 56) and then the
//! body fields of its message type in a fixed order. The counterparty may
//! depend on that order, so it is part of each constructor's contract.

use crate::config::CatalogConfig;
use crate::params::{
    Logon, MarketDataRequest, NewOrderSingle, OrderCancelReplaceRequest, OrderCancelRequest,
    OrderMassCancelRequest, OrderMassStatusRequest, OrderStatusRequest, RequestForPositions,
    SecurityListRequest, TradeCaptureReportRequest,
};
use fixprobe_core::message::MsgType;
use fixprobe_tagvalue::Message;

/// Builds outbound FIX 4.4 messages for one identity.
#[derive(Debug, Clone)]
pub struct Catalog {
    config: CatalogConfig,
}

impl Catalog {
    /// Creates a catalog for the given identity.
    #[must_use]
    pub const fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    /// Returns the identity stamped into every message.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Starts a message with 8, 35, 49 and 56.
    fn header(&self, msg_type: MsgType) -> Message {
        let mut msg = Message::new();
        msg.append(8, self.config.begin_string.as_str())
            .append(35, msg_type.as_str())
            .append(49, &self.config.sender_comp_id)
            .append(56, &self.config.target_comp_id);
        msg
    }

    fn append_instrument(&self, msg: &mut Message) {
        msg.append(55, self.config.symbol.as_str())
            .append(207, self.config.exchange.as_str());
    }

    /// Logon (35=A): 553, 554, 108, 98, 141.
    #[must_use]
    pub fn logon(&self, params: &Logon) -> Message {
        let mut msg = self.header(MsgType::Logon);
        msg.append(553, params.username.as_str())
            .append(554, params.password.as_str())
            .append(108, params.heartbeat_interval)
            .append(98, params.encrypt_method)
            .append(141, params.reset_seq_num);
        msg
    }

    /// Logout (35=5): header only.
    #[must_use]
    pub fn logout(&self) -> Message {
        self.header(MsgType::Logout)
    }

    /// Heartbeat (35=0), echoing a TestReqID when answering a TestRequest.
    #[must_use]
    pub fn heartbeat(&self, test_req_id: Option<&str>) -> Message {
        let mut msg = self.header(MsgType::Heartbeat);
        if let Some(id) = test_req_id {
            msg.append(112, id);
        }
        msg
    }

    /// TestRequest (35=1): 112.
    #[must_use]
    pub fn test_request(&self, test_req_id: &str) -> Message {
        let mut msg = self.header(MsgType::TestRequest);
        msg.append(112, test_req_id);
        msg
    }

    /// MarketDataRequest (35=V): 262, 263, 264, 265, 266, 267, 269 per
    /// entry type, then one related symbol (146=1, 55, 207).
    #[must_use]
    pub fn market_data_request(&self, params: &MarketDataRequest) -> Message {
        let mut msg = self.header(MsgType::MarketDataRequest);
        msg.append(262, params.md_req_id.as_str())
            .append(263, params.subscription)
            .append(264, params.market_depth)
            .append(265, params.update_type)
            .append(266, params.aggregated_book)
            .append(267, params.entry_types.len());
        for entry_type in &params.entry_types {
            msg.append(269, *entry_type);
        }
        msg.append(146, 1u32);
        self.append_instrument(&mut msg);
        msg
    }

    /// NewOrderSingle (35=D): 11, 1, 55, 207, 54, 40, 38, 44, 59, 60.
    #[must_use]
    pub fn new_order_single(&self, params: &NewOrderSingle) -> Message {
        let mut msg = self.header(MsgType::NewOrderSingle);
        msg.append(11, params.cl_ord_id.as_str())
            .append(1, self.config.account.as_str());
        self.append_instrument(&mut msg);
        msg.append(54, params.side)
            .append(40, params.ord_type)
            .append(38, params.quantity)
            .append(44, params.price)
            .append(59, params.time_in_force)
            .append(60, params.transact_time.format_seconds().as_str());
        msg
    }

    /// OrderCancelRequest (35=F): 11, 41, 1, 55, 207, 54, 38, 60.
    #[must_use]
    pub fn order_cancel_request(&self, params: &OrderCancelRequest) -> Message {
        let mut msg = self.header(MsgType::OrderCancelRequest);
        msg.append(11, params.cl_ord_id.as_str())
            .append(41, params.orig_cl_ord_id.as_str())
            .append(1, self.config.account.as_str());
        self.append_instrument(&mut msg);
        msg.append(54, params.side)
            .append(38, params.quantity)
            .append(60, params.transact_time.format_seconds().as_str());
        msg
    }

    /// OrderCancelReplaceRequest (35=G): 11, 41, 1, 55, 207, 54, 40, 38, 44, 60.
    #[must_use]
    pub fn order_cancel_replace_request(&self, params: &OrderCancelReplaceRequest) -> Message {
        let mut msg = self.header(MsgType::OrderCancelReplaceRequest);
        msg.append(11, params.cl_ord_id.as_str())
            .append(41, params.orig_cl_ord_id.as_str())
            .append(1, self.config.account.as_str());
        self.append_instrument(&mut msg);
        msg.append(54, params.side)
            .append(40, params.ord_type)
            .append(38, params.quantity)
            .append(44, params.price)
            .append(60, params.transact_time.format_seconds().as_str());
        msg
    }

    /// OrderStatusRequest (35=H): 11, 1, 55, 207, 54.
    #[must_use]
    pub fn order_status_request(&self, params: &OrderStatusRequest) -> Message {
        let mut msg = self.header(MsgType::OrderStatusRequest);
        msg.append(11, params.cl_ord_id.as_str())
            .append(1, self.config.account.as_str());
        self.append_instrument(&mut msg);
        msg.append(54, params.side);
        msg
    }

    /// RequestForPositions (35=AN): 1, 207, 55, 263, 581, 710, 724, 715, 60.
    #[must_use]
    pub fn request_for_positions(&self, params: &RequestForPositions) -> Message {
        let mut msg = self.header(MsgType::RequestForPositions);
        msg.append(1, self.config.account.as_str())
            .append(207, self.config.exchange.as_str())
            .append(55, self.config.symbol.as_str())
            .append(263, params.subscription)
            .append(581, params.account_type)
            .append(710, params.pos_req_id.as_str())
            .append(724, params.pos_req_type)
            .append(715, params.clearing_business_date.format_date().as_str())
            .append(60, params.transact_time.format_seconds().as_str());
        msg
    }

    /// OrderMassStatusRequest (35=AF): 1, 207, 55, 584, 585.
    #[must_use]
    pub fn order_mass_status_request(&self, params: &OrderMassStatusRequest) -> Message {
        let mut msg = self.header(MsgType::OrderMassStatusRequest);
        msg.append(1, self.config.account.as_str())
            .append(207, self.config.exchange.as_str())
            .append(55, self.config.symbol.as_str())
            .append(584, params.mass_status_req_id.as_str())
            .append(585, params.req_type);
        msg
    }

    /// OrderMassCancelRequest (35=q): 207, 55, 11, 530, 60.
    #[must_use]
    pub fn order_mass_cancel_request(&self, params: &OrderMassCancelRequest) -> Message {
        let mut msg = self.header(MsgType::OrderMassCancelRequest);
        msg.append(207, self.config.exchange.as_str())
            .append(55, self.config.symbol.as_str())
            .append(11, params.cl_ord_id.as_str())
            .append(530, params.request_type)
            .append(60, params.transact_time.format_seconds().as_str());
        msg
    }

    /// TradeCaptureReportRequest (35=AD): 207, 55, 568, 569, 263.
    #[must_use]
    pub fn trade_capture_report_request(&self, params: &TradeCaptureReportRequest) -> Message {
        let mut msg = self.header(MsgType::TradeCaptureReportRequest);
        msg.append(207, self.config.exchange.as_str())
            .append(55, self.config.symbol.as_str())
            .append(568, params.trade_request_id.as_str())
            .append(569, params.trade_request_type)
            .append(263, params.subscription);
        msg
    }

    /// SecurityListRequest (35=x): 320, 559, 207, 263.
    #[must_use]
    pub fn security_list_request(&self, params: &SecurityListRequest) -> Message {
        let mut msg = self.header(MsgType::SecurityListRequest);
        msg.append(320, params.security_req_id.as_str())
            .append(559, params.request_type)
            .append(207, self.config.exchange.as_str())
            .append(263, params.subscription);
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixprobe_core::types::{CompId, SubscriptionRequestType, Timestamp};
    use fixprobe_tagvalue::{Decoder, calculate_checksum};

    fn catalog() -> Catalog {
        Catalog::new(
            CatalogConfig::new(CompId::new("test").unwrap(), CompId::new("proxy").unwrap())
                .with_account("A1")
                .with_instrument("deribit", "BTC-PERPETUAL"),
        )
    }

    fn wire_tags(frame: &[u8]) -> Vec<u32> {
        std::str::from_utf8(frame)
            .unwrap()
            .split('\x01')
            .filter(|f| !f.is_empty())
            .map(|f| f.split('=').next().unwrap().parse().unwrap())
            .collect()
    }

    fn all_messages() -> Vec<Message> {
        let catalog = catalog();
        vec![
            catalog.logon(&Logon::new("trader", "secret")),
            catalog.logout(),
            catalog.heartbeat(None),
            catalog.heartbeat(Some("t-1")),
            catalog.test_request("t-1"),
            catalog.market_data_request(&MarketDataRequest::new("test")),
            catalog.new_order_single(&NewOrderSingle::new("O-1")),
            catalog.order_cancel_request(&OrderCancelRequest::new("test-3", "test-2")),
            catalog.order_cancel_replace_request(&OrderCancelReplaceRequest::new(
                "test-5", "test-1",
            )),
            catalog.order_status_request(&OrderStatusRequest::new("O-1")),
            catalog.request_for_positions(&RequestForPositions::snapshot("pos-1")),
            catalog.order_mass_status_request(&OrderMassStatusRequest::new("req_1")),
            catalog.order_mass_cancel_request(&OrderMassCancelRequest::new("req1")),
            catalog.trade_capture_report_request(&TradeCaptureReportRequest::new("req1")),
            catalog.security_list_request(&SecurityListRequest::new("sec-1")),
        ]
    }

    #[test]
    fn test_logon_exact_frame() {
        let frame = catalog()
            .logon(&Logon::new("trader", "secret"))
            .encode()
            .unwrap();
        assert_eq!(
            &frame[..],
            b"8=FIX.4.4\x019=61\x0135=A\x0149=test\x0156=proxy\x01553=trader\x01554=secret\x01108=5\x0198=0\x01141=Y\x0110=019\x01"
        );
        assert_eq!(
            wire_tags(&frame),
            vec![8, 9, 35, 49, 56, 553, 554, 108, 98, 141, 10]
        );
    }

    #[test]
    fn test_logout_exact_frame() {
        let frame = catalog().logout().encode().unwrap();
        assert_eq!(
            &frame[..],
            b"8=FIX.4.4\x019=22\x0135=5\x0149=test\x0156=proxy\x0110=045\x01"
        );
    }

    #[test]
    fn test_request_for_positions_exact_frame() {
        let frame = catalog()
            .request_for_positions(&RequestForPositions::snapshot("pos-1"))
            .encode()
            .unwrap();
        assert_eq!(
            &frame[..],
            &b"8=FIX.4.4\x019=119\x0135=AN\x0149=test\x0156=proxy\x011=A1\x01207=deribit\x0155=BTC-PERPETUAL\x01263=0\x01581=1\x01710=pos-1\x01724=0\x01715=19700101\x0160=19700101-23:59:59\x0110=231\x01"[..]
        );
    }

    #[test]
    fn test_new_order_single_order() {
        let msg = catalog().new_order_single(&NewOrderSingle::new("O-1"));
        assert_eq!(msg.tags(), vec![8, 35, 49, 56, 11, 1, 55, 207, 54, 40, 38, 44, 59, 60]);

        let text = String::from_utf8(msg.encode().unwrap().to_vec()).unwrap();
        assert!(text.contains(
            "\x0111=O-1\x011=A1\x0155=BTC-PERPETUAL\x01207=deribit\x0154=1\x0140=2\x0138=1.0\x0144=100.0\x0159=1\x0160=19700101-23:59:59\x01"
        ));
    }

    #[test]
    fn test_cancel_and_replace_order() {
        let catalog = catalog();
        let cancel = catalog.order_cancel_request(&OrderCancelRequest::new("test-3", "test-2"));
        assert_eq!(cancel.tags(), vec![8, 35, 49, 56, 11, 41, 1, 55, 207, 54, 38, 60]);

        let replace = catalog
            .order_cancel_replace_request(&OrderCancelReplaceRequest::new("test-5", "test-1"));
        assert_eq!(
            replace.tags(),
            vec![8, 35, 49, 56, 11, 41, 1, 55, 207, 54, 40, 38, 44, 60]
        );
        assert_eq!(replace.get(44).unwrap().to_string(), "200.0");
    }

    #[test]
    fn test_market_data_request_entries() {
        let msg = catalog().market_data_request(&MarketDataRequest::new("test"));
        assert_eq!(
            msg.tags(),
            vec![8, 35, 49, 56, 262, 263, 264, 265, 266, 267, 269, 269, 146, 55, 207]
        );
        let text = String::from_utf8(msg.encode().unwrap().to_vec()).unwrap();
        assert!(text.contains(
            "\x01262=test\x01263=1\x01264=0\x01265=1\x01266=Y\x01267=2\x01269=0\x01269=1\x01146=1\x0155=BTC-PERPETUAL\x01207=deribit\x01"
        ));
    }

    #[test]
    fn test_positions_snapshot_vs_subscribe() {
        let catalog = catalog();
        let snapshot = catalog.request_for_positions(&RequestForPositions::snapshot("pos-1"));
        let subscribe = catalog.request_for_positions(&RequestForPositions::subscribe("pos-2"));

        assert_eq!(snapshot.tags(), subscribe.tags());
        let differing: Vec<u32> = snapshot
            .fields()
            .iter()
            .zip(subscribe.fields())
            .filter(|(a, b)| a.value() != b.value())
            .map(|(a, _)| a.tag().value())
            .collect();
        assert_eq!(differing, vec![263, 710]);
        assert_eq!(
            subscribe.get(263).unwrap().to_string(),
            SubscriptionRequestType::SnapshotPlusUpdates.to_string()
        );
    }

    #[test]
    fn test_remaining_body_orders() {
        let catalog = catalog();
        assert_eq!(
            catalog
                .order_mass_status_request(&OrderMassStatusRequest::new("req_1"))
                .tags(),
            vec![8, 35, 49, 56, 1, 207, 55, 584, 585]
        );
        assert_eq!(
            catalog
                .order_mass_cancel_request(&OrderMassCancelRequest::new("req1"))
                .tags(),
            vec![8, 35, 49, 56, 207, 55, 11, 530, 60]
        );
        assert_eq!(
            catalog
                .trade_capture_report_request(&TradeCaptureReportRequest::new("req1"))
                .tags(),
            vec![8, 35, 49, 56, 207, 55, 568, 569, 263]
        );
        assert_eq!(
            catalog
                .security_list_request(&SecurityListRequest::new("sec-1"))
                .tags(),
            vec![8, 35, 49, 56, 320, 559, 207, 263]
        );
        assert_eq!(
            catalog
                .order_status_request(&OrderStatusRequest::new("O-1"))
                .tags(),
            vec![8, 35, 49, 56, 11, 1, 55, 207, 54]
        );
        assert_eq!(catalog.heartbeat(None).tags(), vec![8, 35, 49, 56]);
        assert_eq!(catalog.test_request("t").tags(), vec![8, 35, 49, 56, 112]);
    }

    #[test]
    fn test_every_message_frames_correctly() {
        for msg in all_messages() {
            let frame = msg.encode().unwrap();
            let trailer_start = frame.len() - 7;
            let checksum = calculate_checksum(&frame[..trailer_start]);
            assert_eq!(&frame[trailer_start..trailer_start + 3], b"10=");
            assert_eq!(
                &frame[trailer_start + 3..trailer_start + 6],
                format!("{:03}", checksum).as_bytes()
            );

            let decoded = Decoder::new(&frame).decode_message().unwrap();
            assert_eq!(decoded.msg_type(), msg.msg_type());
            assert_eq!(decoded.encode().unwrap(), frame);
        }
    }

    #[test]
    fn test_transact_time_override() {
        let order = NewOrderSingle::new("O-2")
            .with_transact_time(Timestamp::from_secs(86_400));
        let msg = catalog().new_order_single(&order);
        assert_eq!(msg.get(60).unwrap().to_string(), "19700102-00:00:00");
    }
}
