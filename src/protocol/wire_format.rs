//! Wire format encoding and decoding.
//!
//! Implements the fixed 9-byte TMCL frame format:
//!
//! ```text
//! Request:
//! ┌─────────┬─────────┬────────┬──────────────┬───────────┬──────────┐
//! │ Address │ Command │ Type   │ Motor / Bank │ Value     │ Checksum │
//! │ 1 byte  │ 1 byte  │ 1 byte │ 1 byte       │ 4 bytes   │ 1 byte   │
//! │         │         │        │              │ int32 BE  │          │
//! └─────────┴─────────┴────────┴──────────────┴───────────┴──────────┘
//!
//! Reply:
//! ┌───────────┬─────────────┬────────┬──────────────┬───────────┬──────────┐
//! │ Reply addr│ Module addr │ Status │ Command echo │ Value     │ Checksum │
//! │ 1 byte    │ 1 byte      │ 1 byte │ 1 byte       │ int32 BE  │ 1 byte   │
//! └───────────┴─────────────┴────────┴──────────────┴───────────┴──────────┘
//! ```
//!
//! The checksum byte is the wrapping unsigned 8-bit sum of the preceding
//! 8 bytes, in both directions. There is no start/stop byte and no length
//! prefix; the 9-byte size is the only framing.

use crate::error::{Result, TmclError};

/// Frame size in bytes (fixed, exactly 9, both directions).
pub const FRAME_SIZE: usize = 9;

/// Number of leading bytes covered by the checksum.
pub const CHECKSUM_SPAN: usize = FRAME_SIZE - 1;

/// Module address placed in every outgoing frame.
///
/// Multi-board addressing is unused; every frame targets this fixed
/// default.
pub const MODULE_ADDRESS: u8 = 2;

/// Compute the additive checksum over a byte span.
///
/// Wrapping unsigned 8-bit sum, overflow truncated modulo 256. The same
/// algorithm covers requests and replies.
///
/// # Example
///
/// ```
/// use tmcl_client::protocol::checksum;
///
/// assert_eq!(checksum(&[0x02, 0x01, 0x00, 0x01, 0x00, 0x00, 0x01, 0xF4]), 0xF9);
/// assert_eq!(checksum(&[0xFF, 0x02]), 0x01); // wraps
/// ```
#[inline]
pub fn checksum(span: &[u8]) -> u8 {
    span.iter().fold(0u8, |sum, &b| sum.wrapping_add(b))
}

/// Extract the big-endian signed 32-bit value field from a raw frame.
///
/// Works on any 9-byte frame regardless of checksum validity; the receive
/// observer is fed this value even when [`Reply::decode`] later rejects
/// the frame.
#[inline]
pub fn extract_value(raw: &[u8; FRAME_SIZE]) -> i32 {
    i32::from_be_bytes([raw[4], raw[5], raw[6], raw[7]])
}

/// An outgoing command frame, prior to encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    /// Command opcode (see [`crate::commands::opcode`]).
    pub command: u8,
    /// Type number; meaning depends on the command (parameter index,
    /// move mode, output format).
    pub type_number: u8,
    /// Motor number or parameter bank, depending on the command.
    pub motor_or_bank: u8,
    /// Command argument.
    pub value: i32,
}

impl Request {
    /// Encode the request into its 9-byte wire form.
    ///
    /// Pure and infallible: every field is already byte/i32-ranged and the
    /// address byte is the fixed [`MODULE_ADDRESS`].
    ///
    /// # Example
    ///
    /// ```
    /// use tmcl_client::protocol::Request;
    ///
    /// // Rotate right, motor 1, velocity 500
    /// let frame = Request {
    ///     command: 1,
    ///     type_number: 0,
    ///     motor_or_bank: 1,
    ///     value: 500,
    /// }
    /// .encode();
    /// assert_eq!(frame, [0x02, 0x01, 0x00, 0x01, 0x00, 0x00, 0x01, 0xF4, 0xF9]);
    /// ```
    pub fn encode(&self) -> [u8; FRAME_SIZE] {
        let mut buf = [0u8; FRAME_SIZE];
        buf[0] = MODULE_ADDRESS;
        buf[1] = self.command;
        buf[2] = self.type_number;
        buf[3] = self.motor_or_bank;
        buf[4..8].copy_from_slice(&self.value.to_be_bytes());
        buf[8] = checksum(&buf[..CHECKSUM_SPAN]);
        buf
    }
}

/// A decoded reply frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    /// Address of the replying host interface.
    pub reply_address: u8,
    /// Address of the module that answered.
    pub module_address: u8,
    /// Raw status byte; classified by
    /// [`classify_status`](crate::protocol::classify_status), not here.
    pub status: u8,
    /// Echo of the command opcode this reply answers.
    pub command: u8,
    /// Return value (big-endian i32 on the wire).
    pub value: i32,
}

impl Reply {
    /// Decode a raw 9-byte reply frame.
    ///
    /// Fails with [`TmclError::Checksum`] when the trailing byte does not
    /// equal the wrapping sum of the first 8 bytes. Status semantics are
    /// the executor's concern; a decoded reply may still carry an error
    /// status.
    ///
    /// # Example
    ///
    /// ```
    /// use tmcl_client::protocol::Reply;
    ///
    /// let raw = [0x02, 0x01, 0x64, 0x01, 0x00, 0x00, 0x00, 0x00, 0x68];
    /// let reply = Reply::decode(&raw).unwrap();
    /// assert_eq!(reply.status, 100);
    /// assert_eq!(reply.value, 0);
    /// ```
    pub fn decode(raw: &[u8; FRAME_SIZE]) -> Result<Self> {
        let expected = checksum(&raw[..CHECKSUM_SPAN]);
        let actual = raw[CHECKSUM_SPAN];
        if actual != expected {
            return Err(TmclError::Checksum { expected, actual });
        }

        Ok(Self {
            reply_address: raw[0],
            module_address: raw[1],
            status: raw[2],
            command: raw[3],
            value: extract_value(raw),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply_frame(status: u8, command: u8, value: i32) -> [u8; FRAME_SIZE] {
        let mut raw = [0u8; FRAME_SIZE];
        raw[0] = 2;
        raw[1] = 1;
        raw[2] = status;
        raw[3] = command;
        raw[4..8].copy_from_slice(&value.to_be_bytes());
        raw[8] = checksum(&raw[..CHECKSUM_SPAN]);
        raw
    }

    #[test]
    fn test_checksum_is_wrapping_sum() {
        assert_eq!(checksum(&[]), 0);
        assert_eq!(checksum(&[0x01, 0x02, 0x03]), 0x06);
        assert_eq!(checksum(&[0xFF, 0x01]), 0x00);
        assert_eq!(checksum(&[0x80, 0x80, 0x80]), 0x80);
    }

    #[test]
    fn test_request_encode_rotate_right_example() {
        // ROR motor 1 at velocity 500
        let frame = Request {
            command: 1,
            type_number: 0,
            motor_or_bank: 1,
            value: 500,
        }
        .encode();

        assert_eq!(
            frame,
            [0x02, 0x01, 0x00, 0x01, 0x00, 0x00, 0x01, 0xF4, 0xF9]
        );
    }

    #[test]
    fn test_request_encode_big_endian_value() {
        let frame = Request {
            command: 6,
            type_number: 0x11,
            motor_or_bank: 0,
            value: 0x0102_0304,
        }
        .encode();

        assert_eq!(frame[4], 0x01);
        assert_eq!(frame[5], 0x02);
        assert_eq!(frame[6], 0x03);
        assert_eq!(frame[7], 0x04);
    }

    #[test]
    fn test_request_encode_negative_value() {
        let frame = Request {
            command: 2,
            type_number: 0,
            motor_or_bank: 0,
            value: -1,
        }
        .encode();

        // Two's complement, big endian
        assert_eq!(&frame[4..8], &[0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(frame[8], checksum(&frame[..CHECKSUM_SPAN]));
    }

    #[test]
    fn test_request_checksum_always_valid() {
        for value in [0, -1, 1, i32::MIN, i32::MAX, 500, -500] {
            let frame = Request {
                command: 4,
                type_number: 1,
                motor_or_bank: 3,
                value,
            }
            .encode();
            assert_eq!(frame[8], checksum(&frame[..CHECKSUM_SPAN]));
        }
    }

    #[test]
    fn test_reply_decode_success_example() {
        let raw = [0x02, 0x01, 0x64, 0x01, 0x00, 0x00, 0x00, 0x00, 0x68];
        let reply = Reply::decode(&raw).unwrap();

        assert_eq!(reply.reply_address, 2);
        assert_eq!(reply.module_address, 1);
        assert_eq!(reply.status, 100);
        assert_eq!(reply.command, 1);
        assert_eq!(reply.value, 0);
    }

    #[test]
    fn test_reply_decode_value_extremes() {
        for value in [0, -1, 1, i32::MIN, i32::MAX] {
            let raw = reply_frame(100, 6, value);
            let reply = Reply::decode(&raw).unwrap();
            assert_eq!(reply.value, value);
        }
    }

    #[test]
    fn test_reply_decode_rejects_bad_checksum() {
        let mut raw = reply_frame(100, 1, 42);
        raw[8] = raw[8].wrapping_add(1);

        match Reply::decode(&raw) {
            Err(TmclError::Checksum { expected, actual }) => {
                assert_eq!(actual, expected.wrapping_add(1));
            }
            other => panic!("expected checksum error, got {:?}", other),
        }
    }

    #[test]
    fn test_reply_decode_detects_any_single_byte_flip() {
        let good = reply_frame(100, 1, 0x1234_5678);
        assert!(Reply::decode(&good).is_ok());

        for i in 0..FRAME_SIZE {
            let mut raw = good;
            raw[i] ^= 0x01;
            assert!(
                matches!(Reply::decode(&raw), Err(TmclError::Checksum { .. })),
                "flip of byte {} was not detected",
                i
            );
        }
    }

    #[test]
    fn test_reply_decode_does_not_interpret_status() {
        // Error statuses decode fine; classification happens elsewhere.
        let raw = reply_frame(5, 9, 0);
        let reply = Reply::decode(&raw).unwrap();
        assert_eq!(reply.status, 5);
    }

    #[test]
    fn test_extract_value_ignores_checksum() {
        let mut raw = reply_frame(100, 1, -77);
        raw[8] = raw[8].wrapping_add(1); // corrupt
        assert_eq!(extract_value(&raw), -77);
    }
}
