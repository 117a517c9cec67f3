/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! The ordered field/message model.
//!
//! A [`Message`] is nothing more than the fields appended to it, in order.
//! It carries no business meaning; the catalog decides which tags go in and
//! where. Tags may repeat (repeating groups such as MDEntryType 269).

use crate::encoder::Encoder;
use bytes::BytesMut;
use fixprobe_core::error::EncodeError;
use fixprobe_core::field::{FieldTag, FieldValue};
use fixprobe_core::message::MsgType;
use smallvec::SmallVec;

/// One tag=value pair. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    tag: FieldTag,
    value: FieldValue,
}

impl Field {
    /// Creates a new field.
    #[must_use]
    pub fn new(tag: impl Into<FieldTag>, value: impl Into<FieldValue>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }

    /// Returns the field tag.
    #[inline]
    #[must_use]
    pub const fn tag(&self) -> FieldTag {
        self.tag
    }

    /// Returns the field value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &FieldValue {
        &self.value
    }
}

/// An ordered sequence of fields forming one FIX message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Message {
    fields: SmallVec<[Field; 16]>,
}

impl Message {
    /// Creates an empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field after every field already present.
    ///
    /// No uniqueness or type rule is enforced here.
    pub fn append(&mut self, tag: u32, value: impl Into<FieldValue>) -> &mut Self {
        self.fields.push(Field::new(tag, value));
        self
    }

    /// Returns the fields in appended order.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the tags in appended order.
    #[must_use]
    pub fn tags(&self) -> Vec<u32> {
        self.fields.iter().map(|f| f.tag.value()).collect()
    }

    /// Returns the number of fields.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field has been appended.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the first value appended under `tag`.
    #[must_use]
    pub fn get(&self, tag: u32) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|f| f.tag.value() == tag)
            .map(Field::value)
    }

    /// Returns every value appended under `tag`, in order.
    pub fn get_all(&self, tag: u32) -> impl Iterator<Item = &FieldValue> {
        self.fields
            .iter()
            .filter(move |f| f.tag.value() == tag)
            .map(Field::value)
    }

    /// Returns the message type (tag 35), if present.
    #[must_use]
    pub fn msg_type(&self) -> Option<MsgType> {
        self.get(FieldTag::MSG_TYPE.value())
            .map(|v| MsgType::from(v.to_string().as_str()))
    }

    /// Serializes the message into a complete wire frame.
    ///
    /// The frame is `8`, `9`, `35`, `49`, `56`, then every other field in
    /// appended order, then `10`. Only the first 35, 49 and 56 are lifted
    /// into the header; 49 and 56 are optional. BodyLength and CheckSum are
    /// always computed here; any tag 9 or tag 10 already in the message is
    /// skipped.
    ///
    /// # Errors
    /// Returns `EncodeError::MissingRequiredField` when tag 8 or tag 35 is
    /// absent, and `EncodeError::InvalidTag` for a zero tag. Nothing is
    /// produced on error.
    pub fn encode(&self) -> Result<BytesMut, EncodeError> {
        let begin_string = self
            .get(FieldTag::BEGIN_STRING.value())
            .ok_or(EncodeError::MissingRequiredField {
                tag: FieldTag::BEGIN_STRING.value(),
            })?;
        let position = |tag: FieldTag| self.fields.iter().position(|f| f.tag == tag);
        let msg_type_pos =
            position(FieldTag::MSG_TYPE).ok_or(EncodeError::MissingRequiredField {
                tag: FieldTag::MSG_TYPE.value(),
            })?;
        let header = [
            Some(msg_type_pos),
            position(FieldTag::SENDER_COMP_ID),
            position(FieldTag::TARGET_COMP_ID),
        ];

        let mut encoder = Encoder::new();
        for pos in header.iter().flatten() {
            let field = &self.fields[*pos];
            encoder.put_value(field.tag.value(), field.value());
        }

        let mut begin_string_seen = false;
        for (pos, field) in self.fields.iter().enumerate() {
            let tag = field.tag;
            if !tag.is_valid() {
                return Err(EncodeError::InvalidTag { tag: tag.value() });
            }
            if header.contains(&Some(pos)) || tag.is_computed() {
                continue;
            }
            if tag == FieldTag::BEGIN_STRING && !begin_string_seen {
                begin_string_seen = true;
                continue;
            }
            encoder.put_value(tag.value(), field.value());
        }

        Ok(encoder.finish(&begin_string.to_wire()))
    }
}

impl FromIterator<Field> for Message {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::calculate_checksum;
    use rust_decimal::Decimal;

    fn header(msg_type: &str) -> Message {
        let mut msg = Message::new();
        msg.append(8, "FIX.4.4")
            .append(35, msg_type)
            .append(49, "test")
            .append(56, "proxy");
        msg
    }

    fn field_value<'a>(frame: &'a str, tag: &str) -> &'a str {
        let prefix = format!("{}=", tag);
        frame
            .split('\x01')
            .find_map(|f| f.strip_prefix(prefix.as_str()))
            .unwrap()
    }

    #[test]
    fn test_append_preserves_order_and_duplicates() {
        let mut msg = header("V");
        msg.append(267, 2u32).append(269, '0').append(269, '1');

        assert_eq!(msg.tags(), vec![8, 35, 49, 56, 267, 269, 269]);
        let entries: Vec<String> = msg.get_all(269).map(ToString::to_string).collect();
        assert_eq!(entries, vec!["0", "1"]);
        assert_eq!(msg.msg_type(), Some(MsgType::MarketDataRequest));
    }

    #[test]
    fn test_encode_logout_exact_bytes() {
        let frame = header("5").encode().unwrap();
        let body = "35=5\x0149=test\x0156=proxy\x01";
        let without_checksum = format!("8=FIX.4.4\x019={}\x01{}", body.len(), body);
        let checksum = calculate_checksum(without_checksum.as_bytes());
        let expected = format!("{}10={:03}\x01", without_checksum, checksum);

        assert_eq!(&frame[..], expected.as_bytes());
    }

    #[test]
    fn test_encode_body_length_and_checksum() {
        let mut msg = header("D");
        msg.append(11, "O-1")
            .append(38, Decimal::new(10, 1))
            .append(44, Decimal::new(1000, 1));
        let frame = msg.encode().unwrap();
        let text = std::str::from_utf8(&frame).unwrap();

        let body_start = text.find("35=").unwrap();
        let trailer_start = text.rfind("10=").unwrap();
        let declared: usize = field_value(text, "9").parse().unwrap();
        assert_eq!(declared, trailer_start - body_start);

        let declared_checksum = field_value(&text[trailer_start..], "10");
        assert_eq!(declared_checksum.len(), 3);
        assert_eq!(
            declared_checksum.parse::<u8>().unwrap(),
            calculate_checksum(&frame[..trailer_start])
        );
        assert!(text.contains("\x0138=1.0\x0144=100.0\x01"));
    }

    #[test]
    fn test_encode_requires_begin_string() {
        let mut msg = Message::new();
        msg.append(35, "0");
        assert_eq!(
            msg.encode(),
            Err(EncodeError::MissingRequiredField { tag: 8 })
        );
    }

    #[test]
    fn test_encode_requires_msg_type() {
        let mut msg = Message::new();
        msg.append(8, "FIX.4.4").append(49, "test");
        assert_eq!(
            msg.encode(),
            Err(EncodeError::MissingRequiredField { tag: 35 })
        );
    }

    #[test]
    fn test_encode_rejects_zero_tag() {
        let mut msg = header("0");
        msg.append(0, "x");
        assert_eq!(msg.encode(), Err(EncodeError::InvalidTag { tag: 0 }));
    }

    #[test]
    fn test_encode_recomputes_length_and_checksum() {
        let mut stale = header("0");
        stale.append(9, 999u32).append(10, "000");
        assert_eq!(stale.encode().unwrap(), header("0").encode().unwrap());
    }

    #[test]
    fn test_encode_pins_msg_type_after_body_length() {
        let mut msg = Message::new();
        msg.append(8, "FIX.4.4").append(49, "test").append(35, "0");
        let frame = msg.encode().unwrap();
        assert!(frame.starts_with(b"8=FIX.4.4\x019=13\x0135=0\x0149=test\x01"));
    }

    #[test]
    fn test_encode_lifts_comp_ids_into_header() {
        let mut late = Message::new();
        late.append(8, "FIX.4.4")
            .append(35, "D")
            .append(11, "O-1")
            .append(56, "proxy")
            .append(49, "test");
        let frame = late.encode().unwrap();

        let text = std::str::from_utf8(&frame).unwrap();
        assert!(text.starts_with("8=FIX.4.4\x019=29\x0135=D\x0149=test\x0156=proxy\x0111=O-1\x01"));

        let mut ordered = header("D");
        ordered.append(11, "O-1");
        assert_eq!(frame, ordered.encode().unwrap());
    }

    #[test]
    fn test_encode_keeps_repeated_comp_id_in_body() {
        let mut msg = header("0");
        msg.append(112, "ping").append(49, "again");
        let frame = msg.encode().unwrap();
        let text = std::str::from_utf8(&frame).unwrap();
        assert!(text.contains("\x0149=test\x0156=proxy\x01112=ping\x0149=again\x0110="));
    }
}
