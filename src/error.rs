//! Error types for tmcl-client.

use thiserror::Error;

use crate::protocol::StatusError;

/// Main error type for all TMCL operations.
///
/// Every variant is terminal for the single exchange that produced it;
/// the client performs no automatic retry. Retrying after a timed-out
/// read can desynchronize framing, so that decision is left to callers.
#[derive(Debug, Error)]
pub enum TmclError {
    /// No transport is attached. A usage error, not a transient
    /// condition: every call fails identically until one is attached.
    #[error("no transport attached")]
    NotConnected,

    /// I/O failure on the byte stream (write error, short read, EOF,
    /// read timeout).
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// The reply frame's trailing checksum byte did not match the sum of
    /// its first 8 bytes.
    #[error("reply checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    Checksum {
        /// Checksum computed over the received frame.
        expected: u8,
        /// Checksum byte the frame actually carried.
        actual: u8,
    },

    /// The board answered with a failure status code.
    #[error("board reported: {0}")]
    Status(#[from] StatusError),
}

/// Result type alias using TmclError.
pub type Result<T> = std::result::Result<T, TmclError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_converts() {
        let err: TmclError = StatusError::InvalidCommand.into();
        assert!(matches!(err, TmclError::Status(StatusError::InvalidCommand)));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "read timed out");
        let err: TmclError = io.into();
        match err {
            TmclError::Transport(inner) => {
                assert_eq!(inner.kind(), std::io::ErrorKind::TimedOut)
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[test]
    fn test_checksum_display_is_hex() {
        let err = TmclError::Checksum {
            expected: 0xF9,
            actual: 0x12,
        };
        assert_eq!(
            err.to_string(),
            "reply checksum mismatch: expected 0xf9, got 0x12"
        );
    }
}
