/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Helpers for showing raw frames to a human.

use crate::encoder::{SOH, TRAILER_LEN};
use memchr::memchr;

/// Renders a raw frame with every SOH replaced by `|`.
///
/// Non-UTF-8 bytes are replaced, never rejected: inbound traffic is shown
/// as received.
#[must_use]
pub fn printable(frame: &[u8]) -> String {
    String::from_utf8_lossy(frame).replace(SOH as char, "|")
}

/// Returns the length of the first complete frame in `buf`.
///
/// Uses only the declared BodyLength and the fixed-size trailer, so a frame
/// can be located without any external delimiter. Returns `None` while the
/// frame is still incomplete or if `buf` does not start with `8=` / `9=`.
#[must_use]
pub fn frame_length(buf: &[u8]) -> Option<usize> {
    if !buf.starts_with(b"8=") {
        return None;
    }
    let body_len_start = memchr(SOH, buf)? + 1;
    let rest = buf.get(body_len_start..)?;
    if !rest.starts_with(b"9=") {
        return None;
    }
    let body_len_end = body_len_start + memchr(SOH, rest)?;
    let length: usize = std::str::from_utf8(&buf[body_len_start + 2..body_len_end])
        .ok()?
        .parse()
        .ok()?;

    let total = body_len_end + 1 + length + TRAILER_LEN;
    (buf.len() >= total).then_some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEARTBEAT: &[u8] = b"8=FIX.4.4\x019=5\x0135=0\x0110=163\x01";

    #[test]
    fn test_printable() {
        assert_eq!(printable(HEARTBEAT), "8=FIX.4.4|9=5|35=0|10=163|");
    }

    #[test]
    fn test_printable_keeps_invalid_bytes_visible() {
        assert_eq!(printable(&[b'a', 0xFF, SOH]), "a\u{FFFD}|");
    }

    #[test]
    fn test_frame_length_complete() {
        assert_eq!(frame_length(HEARTBEAT), Some(HEARTBEAT.len()));

        let mut two = HEARTBEAT.to_vec();
        two.extend_from_slice(HEARTBEAT);
        assert_eq!(frame_length(&two), Some(HEARTBEAT.len()));
    }

    #[test]
    fn test_frame_length_incomplete_or_garbage() {
        assert_eq!(frame_length(&HEARTBEAT[..HEARTBEAT.len() - 1]), None);
        assert_eq!(frame_length(b"8=FIX.4.4"), None);
        assert_eq!(frame_length(b"35=0\x01"), None);
    }
}
