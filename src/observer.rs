//! Exchange observers - diagnostic hooks for sent and received frames.
//!
//! An [`Observer`] sees the raw bytes and decoded values of every
//! exchange. It is a side channel only: hooks return nothing, cannot fail,
//! and must not block, so protocol behavior never depends on them.

use crate::protocol::FRAME_SIZE;

/// Diagnostic sink for protocol traffic.
///
/// Both hooks default to no-ops, so implementors can override only the
/// direction they care about. The receive hook fires for every reply that
/// arrives in full, including ones that later fail checksum validation.
pub trait Observer: Send + Sync {
    /// Called after a request frame is encoded, before it is written.
    fn on_send(
        &self,
        raw: &[u8; FRAME_SIZE],
        command: u8,
        type_number: u8,
        motor_or_bank: u8,
        value: i32,
    ) {
        let _ = (raw, command, type_number, motor_or_bank, value);
    }

    /// Called after a full reply frame is read, before checksum and
    /// status checks. `value` is the raw value field of the frame.
    fn on_receive(&self, raw: &[u8; FRAME_SIZE], value: i32) {
        let _ = (raw, value);
    }
}

/// Observer that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

/// Observer that logs frames at debug level via `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceObserver;

impl Observer for TraceObserver {
    fn on_send(
        &self,
        raw: &[u8; FRAME_SIZE],
        command: u8,
        type_number: u8,
        motor_or_bank: u8,
        value: i32,
    ) {
        tracing::debug!(
            "tmcl >>> {} (cmd: {}, type: {}, bank: {}, val: {})",
            hex(raw),
            command,
            type_number,
            motor_or_bank,
            value
        );
    }

    fn on_receive(&self, raw: &[u8; FRAME_SIZE], value: i32) {
        tracing::debug!("tmcl <<< {} (val: {})", hex(raw), value);
    }
}

fn hex(raw: &[u8; FRAME_SIZE]) -> String {
    raw.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hooks_are_noops() {
        struct Silent;
        impl Observer for Silent {}

        let raw = [0u8; FRAME_SIZE];
        Silent.on_send(&raw, 1, 0, 0, 0);
        Silent.on_receive(&raw, 0);
    }

    #[test]
    fn test_hex_formatting() {
        let raw = [0x02, 0x01, 0x00, 0x01, 0x00, 0x00, 0x01, 0xF4, 0xF9];
        assert_eq!(hex(&raw), "02010001000001f4f9");
    }
}
